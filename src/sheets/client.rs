use anyhow::Result;
use async_trait::async_trait;
use log::{debug, warn};

use crate::config::SheetsSettings;
use crate::http::RateLimitedClient;
use crate::sheets::source::{SheetSource, looks_like_html};

/// Reads spreadsheet tabs through the public CSV export endpoint
pub struct GoogleSheetsClient {
    client: RateLimitedClient,
    base_url: String,
}

impl GoogleSheetsClient {
    pub fn new(settings: &SheetsSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    // --- URL Building ---

    fn build_export_url(&self, spreadsheet_id: &str, sheet_name: &str) -> String {
        format!(
            "{}/{}/gviz/tq?tqx=out:csv&sheet={}",
            self.base_url,
            spreadsheet_id,
            urlencoding::encode(sheet_name)
        )
    }
}

#[async_trait]
impl SheetSource for GoogleSheetsClient {
    async fn fetch_sheet_text(&self, spreadsheet_id: &str, sheet_name: &str) -> Result<Option<String>> {
        let url = self.build_export_url(spreadsheet_id, sheet_name);
        debug!("Fetching sheet {} from {}", sheet_name, url);

        let response = match self.client.get(&url).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request for sheet {} failed: {}", sheet_name, e);
                return Ok(None);
            }
        };

        if !response.status().is_success() {
            warn!("Sheet {} returned status {}", sheet_name, response.status());
            return Ok(None);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read body of sheet {}: {}", sheet_name, e);
                return Ok(None);
            }
        };

        if looks_like_html(&body) {
            debug!("Sheet {} answered with an HTML page", sheet_name);
            return Ok(None);
        }

        Ok(Some(body))
    }
}
