//! Forecast day offsets for the postal-code feed.

use super::error::ValidationError;

/// Number of days covered by the postal-code forecast.
pub const FORECAST_DAYS: usize = 7;

/// A day offset from today, `0..FORECAST_DAYS`.
///
/// Out-of-range offsets are rejected here so later indexing can't fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ForecastDay(u8);

impl ForecastDay {
    /// Parse the provider's `tag` attribute.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let day: usize = s
            .parse()
            .map_err(|_| ValidationError::DayOutOfRange(s.to_string()))?;

        if day >= FORECAST_DAYS {
            return Err(ValidationError::DayOutOfRange(s.to_string()));
        }

        Ok(ForecastDay(day as u8))
    }

    /// Offset from today, usable as an index into per-day arrays.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn in_range_days_parse(day in 0usize..FORECAST_DAYS) {
            prop_assert_eq!(ForecastDay::parse(&day.to_string()).unwrap().index(), day);
        }

        #[test]
        fn out_of_range_days_rejected(day in FORECAST_DAYS..100_000) {
            prop_assert!(ForecastDay::parse(&day.to_string()).is_err());
        }
    }
}
