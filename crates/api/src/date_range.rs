//! Date range resolution for the query routes.
//!
//! Dates travel as ISO 8601 calendar dates (`YYYY-MM-DD`). A range is closed on both
//! ends, or open-ended when no end is given.

use std::fmt;

use climate_core::TRAILING_DAYS;
use time::{macros::format_description, Date, Duration};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid date '{input}', expected YYYY-MM-DD: {reason}")]
    InvalidDateFormat { input: String, reason: String },
    #[error("start date {start} is after end date {end}")]
    InvalidRange { start: Date, end: Date },
}

impl Error {
    /// Stable name used in API error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidDateFormat { .. } => "InvalidDateFormat",
            Error::InvalidRange { .. } => "InvalidRange",
        }
    }
}

/// `[start, end]` inclusive, or `[start, ∞)` when `end` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: Date,
    end: Option<Date>,
}

impl DateRange {
    pub fn new(start: Date, end: Option<Date>) -> Result<Self, Error> {
        match end {
            Some(end) if start > end => Err(Error::InvalidRange { start, end }),
            _ => Ok(Self { start, end }),
        }
    }

    pub fn starting_at(start: Date) -> Self {
        Self { start, end: None }
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Option<Date> {
        self.end
    }

    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && self.end.map_or(true, |end| date <= end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "[{}, {}]", self.start, end),
            None => write!(f, "[{}, ∞)", self.start),
        }
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<Date, Error> {
    let invalid = |reason: String| Error::InvalidDateFormat {
        input: input.to_owned(),
        reason,
    };

    // no signs, padding or expanded years
    let leading_digit = input.bytes().next().is_some_and(|b| b.is_ascii_digit());
    if input.len() != 10 || !input.is_ascii() || !leading_digit {
        return Err(invalid("expected exactly 10 characters".to_string()));
    }

    let format = format_description!("[year]-[month]-[day]");
    Date::parse(input, format).map_err(|e| invalid(e.to_string()))
}

/// Build the range a request asks for.
///
/// A missing start falls back to `fallback_start`; a missing end falls back to
/// `fallback_end`, which may itself be unbounded. Inputs that are present must parse.
pub fn resolve(
    start_input: Option<&str>,
    end_input: Option<&str>,
    fallback_start: Date,
    fallback_end: Option<Date>,
) -> Result<DateRange, Error> {
    let start = start_input
        .map(parse_date)
        .transpose()?
        .unwrap_or(fallback_start);
    let end = match end_input {
        Some(input) => Some(parse_date(input)?),
        None => fallback_end,
    };
    DateRange::new(start, end)
}

/// The fixed window ending at the last recorded observation and reaching
/// `TRAILING_DAYS` back from it.
pub fn trailing_year(last_observation: Date) -> DateRange {
    DateRange {
        start: last_observation.saturating_sub(Duration::days(TRAILING_DAYS)),
        end: Some(last_observation),
    }
}
