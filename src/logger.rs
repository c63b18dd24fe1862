use log::LevelFilter;
use env_logger::Builder;
use std::io::Write;
use chrono::Local;

/// Log targets of this project: the library and the binary.
const CRATE_TARGETS: [&str; 2] = ["job_scraper_lib", "linkedin_job_scraper"];

/// Our own targets log at `info`; dependencies such as reqwest only at `warn`.
fn default_filters() -> Vec<(Option<&'static str>, LevelFilter)> {
    let mut filters = vec![(None, LevelFilter::Warn)];
    filters.extend(CRATE_TARGETS.iter().map(|target| (Some(*target), LevelFilter::Info)));
    filters
}

/// Installs the global logger. `RUST_LOG` takes precedence over the defaults.
pub fn init() {
    let mut builder = Builder::new();
    builder.format(|buf, record| {
        writeln!(buf,
            "{} [{}] - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.args()
        )
    });
    for (target, level) in default_filters() {
        builder.filter(target, level);
    }
    builder.parse_default_env().init();

    log::info!("Logger initialized.");
}
