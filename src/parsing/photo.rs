use anyhow::{Context, Result};
use regex::Regex;

const IMGUR_DIRECT_BASE: &str = "https://i.imgur.com";

/// Rewrites image host page links into direct image URLs
pub struct PhotoLinks {
    imgur_regex: Regex,
}

impl PhotoLinks {
    pub fn new() -> Result<Self> {
        let imgur_regex = Self::compile_regex()?;
        Ok(Self { imgur_regex })
    }

    /// Normalize a photo cell.
    ///
    /// `imgur.com/<id>` links become `https://i.imgur.com/<id>.jpg`, anything
    /// else is returned untouched and an empty cell stays empty.
    pub fn normalize(&self, url: &str) -> String {
        if url.is_empty() {
            return String::new();
        }

        match self.extract_imgur_id(url) {
            Some(id) => format!("{}/{}.jpg", IMGUR_DIRECT_BASE, id),
            None => url.to_string(),
        }
    }

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"imgur\.com/(\w+)").context("Failed to compile imgur link regex")
    }

    fn extract_imgur_id<'a>(&self, url: &'a str) -> Option<&'a str> {
        let captures = self.imgur_regex.captures(url)?;
        Some(captures.get(1)?.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imgur_page_link_is_rewritten() {
        let links = PhotoLinks::new().unwrap();
        assert_eq!(links.normalize("https://imgur.com/AbC123"), "https://i.imgur.com/AbC123.jpg");
    }

    #[test]
    fn test_direct_imgur_link_is_normalized_too() {
        let links = PhotoLinks::new().unwrap();
        assert_eq!(links.normalize("https://i.imgur.com/xyz9.png"), "https://i.imgur.com/xyz9.jpg");
    }

    #[test]
    fn test_other_urls_pass_through() {
        let links = PhotoLinks::new().unwrap();
        let url = "https://example.com/photos/player.png";
        assert_eq!(links.normalize(url), url);
    }

    #[test]
    fn test_empty_cell_stays_empty() {
        let links = PhotoLinks::new().unwrap();
        assert_eq!(links.normalize(""), "");
    }
}
