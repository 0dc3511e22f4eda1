use anyhow::Result;
use async_trait::async_trait;

/// Fetch-by-name access to the tabs of a spreadsheet.
///
/// `Ok(None)` means the tab is not there: transport failure, non-success
/// status or an HTML error page. `Err` is kept for infrastructure problems the
/// caller should see.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_sheet_text(&self, spreadsheet_id: &str, sheet_name: &str) -> Result<Option<String>>;
}

/// Error pages come back as HTML documents instead of CSV
pub fn looks_like_html(body: &str) -> bool {
    body.trim_start().starts_with("<!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_detection() {
        assert!(looks_like_html("<!DOCTYPE html><html></html>"));
        assert!(looks_like_html("\n  <!-- error -->"));
        assert!(!looks_like_html("\"Rank\",\"Player\"\n"));
        assert!(!looks_like_html(""));
    }
}
