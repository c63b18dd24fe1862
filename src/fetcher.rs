use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use scraper::{Html, Selector};
use log::{debug, info, warn};

use crate::config::ScraperConfig;
use crate::error::FetchError;
use crate::extractor::ListingFragment;
use crate::query::{build_search_url, SearchQuery};

/// Outcome of fetching one results page.
#[derive(Debug)]
pub enum PageResult {
    Listings(Vec<ListingFragment>),
    /// The request went through but the page had no listings.
    Empty,
    Failed(FetchError),
}

/// Anything that can produce a results page for a query.
pub trait PageSource {
    fn fetch_page(&self, query: &SearchQuery) -> PageResult;
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn fetch_page(&self, query: &SearchQuery) -> PageResult {
        (**self).fetch_page(query)
    }
}

pub struct PageFetcher {
    client: Client,
    base_url: String,
    listing: Selector,
}

impl PageFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(&config.accept_language)?);

        let client = Client::builder()
            .timeout(config.request_timeout)
            .default_headers(headers)
            .build()
            .map_err(FetchError::Client)?;

        let listing = Selector::parse("li").map_err(|e| FetchError::Selector(e.to_string()))?;

        Ok(PageFetcher {
            client,
            base_url: config.base_url.clone(),
            listing,
        })
    }

    /// Splits a results page into one fragment per `li` element.
    pub fn parse_listings(&self, body: &str) -> Vec<ListingFragment> {
        let document = Html::parse_document(body);
        document
            .select(&self.listing)
            .map(|li| ListingFragment::new(li.html()))
            .collect()
    }

    fn download(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url).send().map_err(FetchError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        resp.text().map_err(FetchError::Body)
    }
}

impl PageSource for PageFetcher {
    fn fetch_page(&self, query: &SearchQuery) -> PageResult {
        let url = build_search_url(&self.base_url, query);
        info!("Fetching listings at offset {}", query.offset);
        debug!("GET {}", url);

        let body = match self.download(&url) {
            Ok(body) => body,
            Err(e) => {
                warn!("Request for offset {} failed: {}", query.offset, e);
                return PageResult::Failed(e);
            }
        };

        let fragments = self.parse_listings(&body);
        if fragments.is_empty() {
            PageResult::Empty
        } else {
            debug!("Found {} listing fragments at offset {}", fragments.len(), query.offset);
            PageResult::Listings(fragments)
        }
    }
}
