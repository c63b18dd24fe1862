use std::fs::File;
use std::path::Path;
use log::info;

use crate::error::SinkError;
use crate::paginator::JobCollection;

/// Column order of the output file.
pub const CSV_HEADER: [&str; 6] = [
    "titulo",
    "empresa",
    "localizacao",
    "url",
    "data_postagem",
    "data_scraping",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { rows: usize },
    NothingToSave,
}

/// Writes `jobs` to `path` as CSV, replacing any existing file. An empty
/// collection leaves the filesystem untouched.
pub fn save_to_csv<P: AsRef<Path>>(jobs: &JobCollection, path: P) -> Result<SaveOutcome, SinkError> {
    let path = path.as_ref();
    if jobs.is_empty() {
        info!("No jobs to save.");
        return Ok(SaveOutcome::NothingToSave);
    }

    let file = File::create(path).map_err(|source| SinkError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    csv_writer.write_record(CSV_HEADER)?;
    for record in jobs {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush().map_err(|source| SinkError::Io {
        path: path.display().to_string(),
        source,
    })?;

    info!("Saved {} jobs to {:?}", jobs.len(), path);
    Ok(SaveOutcome::Saved { rows: jobs.len() })
}
