//! RFC 3339 helpers for timestamp fields.
//!
//! Timestamp fields are carried as strings both in memory and on the
//! wire. These helpers are the sanctioned way to move between those
//! strings and [`time::OffsetDateTime`]; the shape accessors themselves
//! never interpret the string.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Errors from timestamp conversion.
#[derive(Debug, thiserror::Error)]
pub enum TimestampError {
    #[error("invalid timestamp: {0}")]
    Parse(#[from] time::error::Parse),
    #[error("unformattable timestamp: {0}")]
    Format(#[from] time::error::Format),
}

/// Formats an instant as the RFC 3339 string a timestamp field stores.
pub fn format(instant: OffsetDateTime) -> Result<String, TimestampError> {
    Ok(instant.format(&Rfc3339)?)
}

/// Parses a timestamp field's stored string.
pub fn parse(value: &str) -> Result<OffsetDateTime, TimestampError> {
    Ok(OffsetDateTime::parse(value, &Rfc3339)?)
}
