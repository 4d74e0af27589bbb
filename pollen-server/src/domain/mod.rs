//! Domain types for the pollen forecast front end.
//!
//! Provider payloads (`Forecast` from the DWD JSON feed, `HexalDataset`
//! from the postal-code XML feed) plus the validated identifiers used to
//! look data up in them.

mod allergen;
mod day;
mod error;
mod forecast;
mod hexal;
mod postal_code;
mod region;
mod timestamp;

pub use allergen::Allergen;
pub use day::{FORECAST_DAYS, ForecastDay};
pub use error::ValidationError;
pub use forecast::{Forecast, Legend, Pollen, PollenLevels, Region};
pub use hexal::{HexalDataset, HexalDayExposure, HexalPollen, HexalRecord};
pub use postal_code::PostalCode;
pub use region::{RegionPath, resolve};
pub use timestamp::{PROVIDER_TIMESTAMP_FORMAT, TimestampParseError, parse_provider_timestamp};
