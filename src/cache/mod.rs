pub mod stages;

pub use stages::{CachedStages, StageCache};
