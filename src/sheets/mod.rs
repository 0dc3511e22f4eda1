pub mod client;
pub mod loader;
pub mod source;
pub mod validator;

pub use client::GoogleSheetsClient;
pub use loader::SheetLoader;
pub use source::{SheetSource, looks_like_html};
pub use validator::is_valid_stage_sheet;
