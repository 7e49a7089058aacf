//! Per-run loading context.

use chrono::{DateTime, Utc};
use kiln_config::{DEFAULT_DATE_FORMAT, SourceConfig};

/// Settings fixed for the duration of one generation run.
///
/// `now` is captured once and shared by every item so that all visibility
/// decisions in a run agree with each other.
#[derive(Clone, Debug)]
pub struct LoadContext {
    /// The run's clock.
    pub now: DateTime<Utc>,
    /// `chrono` format string for `publication` and `expiration`.
    pub date_format: String,
    /// Whether asset directories are listed recursively.
    pub recursive_assets: bool,
}

impl LoadContext {
    /// Context with the default date format and recursive asset listing.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
            recursive_assets: true,
        }
    }

    /// Context built from resolved source configuration.
    #[must_use]
    pub fn from_config(source: &SourceConfig, now: DateTime<Utc>) -> Self {
        Self {
            now,
            date_format: source.date_format.clone(),
            recursive_assets: source.recursive_assets,
        }
    }
}
