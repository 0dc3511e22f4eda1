pub mod csv;
pub mod photo;

pub use csv::parse_csv;
pub use photo::PhotoLinks;
