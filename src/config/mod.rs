pub mod competitions;
pub mod settings;

pub use competitions::{CompetitionConfig, get_competitions};
pub use settings::{AppConfig, DiscoverySettings, SheetsSettings};
