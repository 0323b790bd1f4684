use chrono::NaiveDate;
use serde::Serialize;

use crate::foundation::core::{DAYS_PER_YEAR, TOTAL_YEARS};

/// Why a birth date was rejected.
///
/// Display strings are user-facing; the HTTP layer returns them verbatim.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthDateError {
    /// No birth date was supplied.
    #[error("birthDate parameter is required (format: YYYY-MM-DD)")]
    Missing,

    /// Not a `YYYY-MM-DD` string naming a real calendar date.
    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidFormat,

    /// Strictly after today.
    #[error("Birth date must be in the past")]
    InFuture,

    /// More than 90 years before today.
    #[error("Birth date cannot be more than 90 years ago")]
    TooOld,
}

/// Parse a `YYYY-MM-DD` birth date.
///
/// The date has no time-of-day or timezone; every consumer treats it as local midnight. Only the
/// zero-padded ten character form is accepted and the date must exist in the calendar
/// (`2023-02-30` is rejected).
pub fn parse_birth_date(s: &str) -> Result<NaiveDate, BirthDateError> {
    let s = s.trim();
    let b = s.as_bytes();
    let shape_ok = b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b
            .iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
    if !shape_ok {
        return Err(BirthDateError::InvalidFormat);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| BirthDateError::InvalidFormat)
}

/// Check the range rules for an already-parsed birth date.
///
/// Rules, in order: not strictly after `today`; no more than 90 years before `today`, where
/// years are whole days divided by 365.25.
pub fn validate_birth_date(date: NaiveDate, today: NaiveDate) -> Result<(), BirthDateError> {
    if date > today {
        return Err(BirthDateError::InFuture);
    }
    let years_ago = (today - date).num_days() as f64 / DAYS_PER_YEAR;
    if years_ago > f64::from(TOTAL_YEARS) {
        return Err(BirthDateError::TooOld);
    }
    Ok(())
}

/// `{valid, error}` view of a validation outcome for JSON and form consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether the date passed every rule.
    pub valid: bool,
    /// User-facing reason when `valid` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<(), BirthDateError>> for ValidationResult {
    fn from(r: Result<(), BirthDateError>) -> Self {
        match r {
            Ok(()) => Self {
                valid: true,
                error: None,
            },
            Err(e) => Self {
                valid: false,
                error: Some(e.to_string()),
            },
        }
    }
}

/// A birth date that passed [`validate_birth_date`] against some "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Validate `date` against `today`.
    pub fn new(date: NaiveDate, today: NaiveDate) -> Result<Self, BirthDateError> {
        validate_birth_date(date, today)?;
        Ok(Self(date))
    }

    /// Parse and validate in one step. `None` and blank input report [`BirthDateError::Missing`].
    pub fn parse(raw: Option<&str>, today: NaiveDate) -> Result<Self, BirthDateError> {
        let raw = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(BirthDateError::Missing)?;
        Self::new(parse_birth_date(raw)?, today)
    }

    /// The underlying calendar date.
    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dates/birth.rs"]
mod tests;
