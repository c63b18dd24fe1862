use log::{error, info, warn};

use crate::delay_manager::Pacer;
use crate::error::FetchError;
use crate::extractor::{Extractor, JobRecord, ListingFragment};
use crate::fetcher::{PageResult, PageSource};
use crate::query::SearchQuery;

/// Records gathered during one run, in page-then-listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobCollection {
    records: Vec<JobRecord>,
}

impl JobCollection {
    pub fn new() -> Self {
        JobCollection::default()
    }

    pub fn push(&mut self, record: JobRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JobRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }
}

impl From<Vec<JobRecord>> for JobCollection {
    fn from(records: Vec<JobRecord>) -> Self {
        JobCollection { records }
    }
}

impl<'a> IntoIterator for &'a JobCollection {
    type Item = &'a JobRecord;
    type IntoIter = std::slice::Iter<'a, JobRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Why pagination ended. `page` is zero-based.
#[derive(Debug)]
pub enum StopReason {
    /// Every allowed page returned listings.
    MaxPages,
    Empty { page: u32 },
    Failed { page: u32, error: FetchError },
    /// The offset for `page` does not fit in a `u32`.
    OffsetOverflow { page: u32 },
}

#[derive(Debug)]
pub struct RunReport {
    pub jobs: JobCollection,
    pub pages_fetched: u32,
    pub stop: StopReason,
}

pub struct Paginator<S, P> {
    source: S,
    pacer: P,
    extractor: Extractor,
    page_size: u32,
}

impl<S: PageSource, P: Pacer> Paginator<S, P> {
    pub fn new(source: S, pacer: P, extractor: Extractor, page_size: u32) -> Self {
        Paginator {
            source,
            pacer,
            extractor,
            page_size,
        }
    }

    pub fn run(&self, keyword: &str, location: &str, max_pages: u32) -> JobCollection {
        self.run_with_report(keyword, location, max_pages).jobs
    }

    /// Walks up to `max_pages` result pages. An empty or failed page ends the
    /// run; whatever was collected before it is kept.
    pub fn run_with_report(&self, keyword: &str, location: &str, max_pages: u32) -> RunReport {
        info!("Searching for '{}' jobs in '{}'...", keyword, location);

        let mut jobs = JobCollection::new();
        let mut pages_fetched = 0;
        let mut stop = StopReason::MaxPages;

        for page in 0..max_pages {
            let Some(offset) = page.checked_mul(self.page_size) else {
                warn!("Offset for page {} is out of range, stopping", page + 1);
                stop = StopReason::OffsetOverflow { page };
                break;
            };
            let query = SearchQuery::new(keyword, location, offset);
            info!("Fetching page {} of {}", page + 1, max_pages);

            match self.source.fetch_page(&query) {
                PageResult::Listings(fragments) => {
                    pages_fetched += 1;
                    self.collect_page(&fragments, &mut jobs);
                    info!("Page {} done - {} jobs collected so far", page + 1, jobs.len());
                }
                PageResult::Empty => {
                    warn!("No jobs found on page {}", page + 1);
                    stop = StopReason::Empty { page };
                    break;
                }
                PageResult::Failed(error) => {
                    warn!("Stopping at page {}: {}", page + 1, error);
                    stop = StopReason::Failed { page, error };
                    break;
                }
            }

            if page + 1 < max_pages {
                self.pacer.pause();
            }
        }

        info!("Collected {} jobs in total", jobs.len());
        RunReport {
            jobs,
            pages_fetched,
            stop,
        }
    }

    fn collect_page(&self, fragments: &[ListingFragment], jobs: &mut JobCollection) {
        let results = fragments.iter().map(|fragment| self.extractor.extract(fragment));
        for (index, result) in results.enumerate() {
            match result {
                Ok(record) => jobs.push(record),
                Err(e) => error!("Failed to process listing {}: {}", index + 1, e),
            }
        }
    }
}
