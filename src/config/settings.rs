#[derive(Debug, Clone)]
pub struct SheetsSettings {
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
    /// Stage tabs are named `{sheet_prefix}{index}`
    pub sheet_prefix: String,
}

impl Default for SheetsSettings {
    fn default() -> Self {
        Self {
            base_url: "https://docs.google.com/spreadsheets/d".to_string(),
            user_agent: "FightStatsHub/1.0",
            timeout_secs: 30,
            rate_limit_ms: 100, // 10 req/sec
            sheet_prefix: "ETAPA".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiscoverySettings {
    /// Upper bound on probed stage indices
    pub max_stages: usize,
    pub cache_ttl_secs: i64,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            max_stages: 20,
            cache_ttl_secs: 5 * 60,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sheets: SheetsSettings,
    pub discovery: DiscoverySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            sheets: SheetsSettings::default(),
            discovery: DiscoverySettings::default(),
        }
    }
}
