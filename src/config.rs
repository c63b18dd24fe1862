use std::time::Duration;

pub const DEFAULT_BASE_URL: &str =
    "https://www.linkedin.com/jobs-guest/jobs/api/seeMoreJobPostings/search";
pub const DEFAULT_OUTPUT_FILE: &str = "linkedin_jobs.csv";

/// Knobs for a single scraping run. Everything has a working default so the
/// CLI only has to touch what the user overrides.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    /// Results per page; the search endpoint pages in fixed steps of 25.
    pub page_size: u32,
    pub page_delay: Duration,
    pub user_agent: String,
    pub accept_language: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        ScraperConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            page_size: 25,
            page_delay: Duration::from_secs(2),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_search_endpoint_contract() {
        let config = ScraperConfig::default();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.page_delay, Duration::from_secs(2));
        assert!(config.base_url.ends_with("/seeMoreJobPostings/search"));
    }
}
