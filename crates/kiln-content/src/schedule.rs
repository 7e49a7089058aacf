//! Temporal visibility: drafts, scheduled publication and expiration.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use kiln_meta::FrontMatter;

use crate::context::LoadContext;

/// Error parsing a `publication` or `expiration` value.
///
/// Never fatal: the schedule falls back to its default for that field.
#[derive(Debug, thiserror::Error)]
#[error("Invalid date {value:?} (expected format {format:?}): {source}")]
pub struct DateFormatError {
    pub value: String,
    pub format: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Parse a date in the given `chrono` format, interpreted as UTC.
///
/// Formats without time fields (e.g. `%Y-%m-%d`) resolve to midnight.
///
/// # Errors
///
/// Returns [`DateFormatError`] if `raw` does not match `format`.
pub fn parse_date(raw: &str, format: &str) -> Result<DateTime<Utc>, DateFormatError> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, format)
        .or_else(|err| {
            NaiveDate::parse_from_str(raw, format)
                .map(|date| date.and_time(chrono::NaiveTime::MIN))
                .map_err(|_| err)
        })
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|source| DateFormatError {
            value: raw.to_owned(),
            format: format.to_owned(),
            source,
        })
}

/// Outcome of the visibility rule for one item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    /// `draft: true`.
    Draft,
    /// Publication lies in the future.
    Scheduled,
    /// Expiration lies in the past.
    Expired,
}

impl Visibility {
    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

/// Scheduling fields resolved from front matter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub draft: bool,
    pub publication: DateTime<Utc>,
    pub expiration: Option<DateTime<Utc>>,
}

impl Schedule {
    /// Resolve scheduling fields.
    ///
    /// `draft` defaults to `false`. A missing or unparsable `publication`
    /// defaults to the run's `now`; a missing or unparsable `expiration` is
    /// absent.
    #[must_use]
    pub fn from_front_matter(front: &FrontMatter, context: &LoadContext) -> Self {
        let date = |key: &str| {
            let raw = front.string(key)?;
            parse_date(raw, &context.date_format)
                .inspect_err(|err| tracing::debug!(key, %err, "Ignoring unparsable date"))
                .ok()
        };

        Self {
            draft: front.bool("draft").unwrap_or(false),
            publication: date("publication").unwrap_or(context.now),
            expiration: date("expiration"),
        }
    }

    /// Apply the visibility rule against `now`.
    ///
    /// Rules are checked in order: draft, then publication after `now`, then
    /// expiration before `now`. Both boundaries are inclusive: an item
    /// published or expiring exactly at `now` is visible.
    #[must_use]
    pub fn visibility(&self, now: DateTime<Utc>) -> Visibility {
        if self.draft {
            Visibility::Draft
        } else if self.publication > now {
            Visibility::Scheduled
        } else if self.expiration.is_some_and(|expiration| expiration < now) {
            Visibility::Expired
        } else {
            Visibility::Visible
        }
    }
}
