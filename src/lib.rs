pub mod config;
pub mod error;
pub mod query;
pub mod extractor;
pub mod fetcher;
pub mod paginator;
pub mod delay_manager;
pub mod sink;
pub mod logger;

// Exporting types for convenience
pub use config::ScraperConfig;
pub use error::{ExtractError, FetchError, SinkError};
pub use query::{build_search_url, SearchQuery};
pub use extractor::{Extractor, JobRecord, ListingFragment, NOT_AVAILABLE};
pub use fetcher::{PageFetcher, PageResult, PageSource};
pub use paginator::{JobCollection, Paginator, RunReport, StopReason};
pub use delay_manager::{FixedDelay, Pacer};
pub use sink::{save_to_csv, SaveOutcome};
