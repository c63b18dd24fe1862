/// One search request: what to look for, where, and how many results to skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub location: String,
    pub offset: u32,
}

impl SearchQuery {
    pub fn new(keyword: &str, location: &str, offset: u32) -> Self {
        SearchQuery {
            keyword: keyword.to_string(),
            location: location.to_string(),
            offset,
        }
    }
}

/// Builds the full request URL for `query` against `base_url`.
///
/// Keyword and location are percent-encoded (a space becomes `%20`); empty
/// values are passed through as-is.
pub fn build_search_url(base_url: &str, query: &SearchQuery) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}keywords={}&location={}&start={}",
        base_url,
        separator,
        urlencoding::encode(&query.keyword),
        urlencoding::encode(&query.location),
        query.offset
    )
}
