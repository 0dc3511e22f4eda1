use serde::Serialize;

/// A competition and the spreadsheet its stage results live in.
///
/// The spreadsheet id is the long token in the sheet URL:
/// `https://docs.google.com/spreadsheets/d/{id}/edit`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionConfig {
    pub id: &'static str,
    #[serde(skip)]
    pub spreadsheet_id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
}

impl CompetitionConfig {
    pub fn new(
        id: &'static str,
        spreadsheet_id: &'static str,
        title: &'static str,
        subtitle: &'static str,
        icon: &'static str,
    ) -> Self {
        Self {
            id,
            spreadsheet_id,
            title,
            subtitle,
            icon,
        }
    }
}

/// Get the list of tracked competitions
pub fn get_competitions() -> Vec<CompetitionConfig> {
    vec![
        CompetitionConfig::new(
            "2xko",
            "1sPqEeBAqnVfFO-8y4W1n4kCi9SXbAst1VCT4Bqa3pfM",
            "2XKO",
            "TAG-TEAM CIRCUIT 25/26",
            "⚡",
        ),
        CompetitionConfig::new(
            "sf6",
            "1sDmKRGTTUhuUhODJ7YmwPuVG9CX4VQmZr8iigeDCdOw",
            "SF6",
            "WORLD WARRIOR CIRCUIT 25/26",
            "🔥",
        ),
    ]
}
