//! Domain error types.
//!
//! These errors represent malformed request input and provider data that
//! fails validation. They are distinct from network/decode errors.

/// Input or provider data that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Region page path is not `{regionId}/{partregionId}`
    #[error("invalid region path: {0}")]
    RegionPath(&'static str),

    /// Postal code is not five ASCII digits
    #[error("invalid postal code: {0:?}")]
    PostalCode(String),

    /// Postal feed reported a day outside 0-6, or a non-numeric day
    #[error("forecast day out of range: {0:?}")]
    DayOutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::RegionPath("expected two segments");
        assert_eq!(
            err.to_string(),
            "invalid region path: expected two segments"
        );

        let err = ValidationError::PostalCode("abc".into());
        assert_eq!(err.to_string(), "invalid postal code: \"abc\"");

        let err = ValidationError::DayOutOfRange("7".into());
        assert_eq!(err.to_string(), "forecast day out of range: \"7\"");
    }
}
