use chrono::{DateTime, Local};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Placeholder written for any field that could not be extracted.
pub const NOT_AVAILABLE: &str = "N/A";

const ROOT_SELECTOR: &str = "li";
const TITLE_SELECTOR: &str = "h3.base-search-card__title";
const COMPANY_SELECTOR: &str = "h4.base-search-card__subtitle";
const LOCATION_SELECTOR: &str = "span.job-search-card__location";
const LINK_SELECTOR: &str = "a.base-card__full-link";
const DATE_SELECTOR: &str = "time";

/// Markup for a single candidate posting, cut out of a results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFragment {
    html: String,
}

impl ListingFragment {
    pub fn new(html: impl Into<String>) -> Self {
        ListingFragment { html: html.into() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// One extracted job posting. Field names on disk are the CSV column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "empresa")]
    pub company: String,
    #[serde(rename = "localizacao")]
    pub location: String,
    #[serde(rename = "url")]
    pub posting_url: String,
    #[serde(rename = "data_postagem")]
    pub posted_date: String,
    #[serde(rename = "data_scraping")]
    pub scraped_at: String,
}

pub struct Extractor {
    root: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    link: Selector,
    date: Selector,
}

fn compile(selector: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::Selector {
        selector,
        reason: e.to_string(),
    })
}

fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

impl Extractor {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Extractor {
            root: compile(ROOT_SELECTOR)?,
            title: compile(TITLE_SELECTOR)?,
            company: compile(COMPANY_SELECTOR)?,
            location: compile(LOCATION_SELECTOR)?,
            link: compile(LINK_SELECTOR)?,
            date: compile(DATE_SELECTOR)?,
        })
    }

    /// Extracts a record, stamping it with the current local time.
    pub fn extract(&self, fragment: &ListingFragment) -> Result<JobRecord, ExtractError> {
        self.extract_at(fragment, Local::now())
    }

    /// Extracts a record from `fragment`. Missing or blank fields degrade to
    /// [`NOT_AVAILABLE`] one by one; only a fragment with no listing element
    /// at all is rejected.
    pub fn extract_at(
        &self,
        fragment: &ListingFragment,
        scraped_at: DateTime<Local>,
    ) -> Result<JobRecord, ExtractError> {
        let document = Html::parse_fragment(fragment.html());
        let card = document
            .select(&self.root)
            .next()
            .ok_or(ExtractError::MissingRoot)?;

        Ok(JobRecord {
            title: or_not_available(self.title(card)),
            company: or_not_available(self.company(card)),
            location: or_not_available(self.location(card)),
            posting_url: or_not_available(self.posting_url(card)),
            posted_date: or_not_available(self.posted_date(card)),
            scraped_at: scraped_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }

    pub fn title(&self, card: ElementRef) -> Option<String> {
        first_text(card, &self.title)
    }

    pub fn company(&self, card: ElementRef) -> Option<String> {
        first_text(card, &self.company)
    }

    pub fn location(&self, card: ElementRef) -> Option<String> {
        first_text(card, &self.location)
    }

    /// The posting link comes from the anchor's `href`, never its text.
    pub fn posting_url(&self, card: ElementRef) -> Option<String> {
        card.select(&self.link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .map(str::to_string)
    }

    pub fn posted_date(&self, card: ElementRef) -> Option<String> {
        first_text(card, &self.date)
    }
}

fn first_text(card: ElementRef, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    const TITLE: &str = r#"<h3 class="base-search-card__title">
            Senior Data Engineer
        </h3>"#;
    const COMPANY: &str = r#"<h4 class="base-search-card__subtitle"><a href="/company/acme">Acme Corp</a></h4>"#;
    const LOCATION: &str = r#"<span class="job-search-card__location">  Remote  </span>"#;
    const LINK: &str = r#"<a class="base-card__full-link" href="https://www.linkedin.com/jobs/view/123">View</a>"#;
    const DATE: &str = r#"<time datetime="2024-05-01">2 days ago</time>"#;

    fn card(parts: &[&str]) -> ListingFragment {
        ListingFragment::new(format!("<li><div class=\"base-card\">{}</div></li>", parts.concat()))
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 3, 14, 7, 9).unwrap()
    }

    #[test]
    fn extracts_every_field_from_full_card() {
        let extractor = Extractor::new().unwrap();
        let record = extractor
            .extract_at(&card(&[TITLE, COMPANY, LOCATION, LINK, DATE]), fixed_time())
            .unwrap();

        assert_eq!(
            record,
            JobRecord {
                title: "Senior Data Engineer".to_string(),
                company: "Acme Corp".to_string(),
                location: "Remote".to_string(),
                posting_url: "https://www.linkedin.com/jobs/view/123".to_string(),
                posted_date: "2 days ago".to_string(),
                scraped_at: "2024-05-03 14:07:09".to_string(),
            }
        );
    }

    #[test]
    fn every_subset_of_missing_markers_degrades_exactly_those_fields() {
        let extractor = Extractor::new().unwrap();
        let markers = [TITLE, COMPANY, LOCATION, LINK, DATE];
        let expected = [
            "Senior Data Engineer",
            "Acme Corp",
            "Remote",
            "https://www.linkedin.com/jobs/view/123",
            "2 days ago",
        ];

        for mask in 0u8..32 {
            let present: Vec<&str> = (0..5)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| markers[i])
                .collect();
            let record = extractor.extract_at(&card(&present), fixed_time()).unwrap();
            let fields = [
                &record.title,
                &record.company,
                &record.location,
                &record.posting_url,
                &record.posted_date,
            ];
            for i in 0..5 {
                let want = if mask & (1 << i) != 0 { expected[i] } else { NOT_AVAILABLE };
                assert_eq!(fields[i], want, "mask {:05b}, field {}", mask, i);
            }
            assert_eq!(record.scraped_at, "2024-05-03 14:07:09");
        }
    }

    #[test]
    fn title_without_company_keeps_title() {
        let extractor = Extractor::new().unwrap();
        let record = extractor.extract_at(&card(&[TITLE, LINK]), fixed_time()).unwrap();
        assert_eq!(record.title, "Senior Data Engineer");
        assert_eq!(record.company, NOT_AVAILABLE);
        assert_eq!(record.location, NOT_AVAILABLE);
        assert_eq!(record.posting_url, "https://www.linkedin.com/jobs/view/123");
        assert_eq!(record.posted_date, NOT_AVAILABLE);
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let extractor = Extractor::new().unwrap();
        let blank_title = r#"<h3 class="base-search-card__title">   </h3>"#;
        let record = extractor.extract_at(&card(&[blank_title, COMPANY]), fixed_time()).unwrap();
        assert_eq!(record.title, NOT_AVAILABLE);
        assert_eq!(record.company, "Acme Corp");
    }

    #[test]
    fn anchor_without_href_yields_sentinel() {
        let extractor = Extractor::new().unwrap();
        let no_href = r#"<a class="base-card__full-link">https://looks.like/a/url</a>"#;
        let record = extractor.extract_at(&card(&[no_href]), fixed_time()).unwrap();
        assert_eq!(record.posting_url, NOT_AVAILABLE);
    }

    #[test]
    fn unrelated_anchor_is_ignored() {
        let extractor = Extractor::new().unwrap();
        let other = r#"<a class="something-else" href="https://example.com">x</a>"#;
        let record = extractor.extract_at(&card(&[other]), fixed_time()).unwrap();
        assert_eq!(record.posting_url, NOT_AVAILABLE);
    }

    #[test]
    fn fragment_without_listing_element_is_rejected() {
        let extractor = Extractor::new().unwrap();
        let fragment = ListingFragment::new(format!("<div>{}</div>", TITLE));
        assert!(matches!(
            extractor.extract_at(&fragment, fixed_time()),
            Err(ExtractError::MissingRoot)
        ));
    }

    #[test]
    fn wall_clock_stamp_uses_expected_format() {
        let extractor = Extractor::new().unwrap();
        let record = extractor.extract(&card(&[TITLE])).unwrap();
        assert!(NaiveDateTime::parse_from_str(&record.scraped_at, "%Y-%m-%d %H:%M:%S").is_ok());
    }
}
