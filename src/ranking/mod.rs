pub mod aggregate;
pub mod summary;

pub use aggregate::{aggregate, assign_ranks, select_stages};
pub use summary::{stage_photos, summarize};
