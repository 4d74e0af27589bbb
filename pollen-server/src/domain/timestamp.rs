//! Provider update timestamps.

use chrono::NaiveDateTime;

/// Layout of `last_update`/`next_update` in the DWD feed,
/// e.g. `2024-03-01 11:00 Uhr`.
pub const PROVIDER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M Uhr";

/// A provider timestamp that doesn't match [`PROVIDER_TIMESTAMP_FORMAT`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse {field} {value:?}: {reason}")]
pub struct TimestampParseError {
    pub field: &'static str,
    pub value: String,
    reason: String,
}

/// Parse a DWD update timestamp as naive wall-clock time.
///
/// `field` names the feed field and only feeds the error message.
pub fn parse_provider_timestamp(
    field: &'static str,
    value: &str,
) -> Result<NaiveDateTime, TimestampParseError> {
    NaiveDateTime::parse_from_str(value, PROVIDER_TIMESTAMP_FORMAT).map_err(|e| {
        TimestampParseError {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        }
    })
}
