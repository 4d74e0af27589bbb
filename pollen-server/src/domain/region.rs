//! Region lookup.

use std::fmt;

use super::error::ValidationError;
use super::forecast::{Forecast, Region};

/// A validated `{regionId}/{partregionId}` pair taken from a request path.
///
/// Both identifiers are non-negative integers written as plain ASCII
/// digits. Anything else is rejected before the forecast is consulted.
///
/// # Examples
///
/// ```
/// use pollen_server::domain::RegionPath;
///
/// let path = RegionPath::parse("10/11").unwrap();
/// assert_eq!(path.region_id(), 10);
/// assert_eq!(path.partregion_id(), 11);
///
/// assert!(RegionPath::parse("abc/1").is_err());
/// assert!(RegionPath::parse("1").is_err());
/// assert!(RegionPath::parse("1/").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionPath {
    region_id: i32,
    partregion_id: i32,
}

impl RegionPath {
    /// Build from identifiers that are already known to be valid.
    pub fn new(region_id: i32, partregion_id: i32) -> Self {
        Self {
            region_id,
            partregion_id,
        }
    }

    /// The path addressing `region`, if it has one.
    ///
    /// DWD marks regions without subregions with `partregion_id: -1`, which
    /// can't be written in a path `parse` accepts, so those have none.
    pub fn of(region: &Region) -> Option<Self> {
        (region.region_id >= 0 && region.partregion_id >= 0)
            .then(|| Self::new(region.region_id, region.partregion_id))
    }

    /// Parse the part of the path after `/region/`.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let mut segments = s.split('/');
        let (Some(region), Some(partregion), None) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(ValidationError::RegionPath("expected two segments"));
        };

        Ok(Self {
            region_id: parse_id(region)?,
            partregion_id: parse_id(partregion)?,
        })
    }

    pub fn region_id(&self) -> i32 {
        self.region_id
    }

    pub fn partregion_id(&self) -> i32 {
        self.partregion_id
    }

    fn matches(&self, region: &Region) -> bool {
        region.region_id == self.region_id && region.partregion_id == self.partregion_id
    }
}

impl fmt::Display for RegionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.region_id, self.partregion_id)
    }
}

fn parse_id(segment: &str) -> Result<i32, ValidationError> {
    if segment.is_empty() {
        return Err(ValidationError::RegionPath("empty segment"));
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::RegionPath("identifiers must be digits"));
    }
    segment
        .parse()
        .map_err(|_| ValidationError::RegionPath("identifier out of range"))
}

/// Find the region a path points at.
///
/// The feed doesn't enforce unique identifier pairs, so the first match in
/// feed order wins.
pub fn resolve<'a>(forecast: &'a Forecast, path: &RegionPath) -> Option<&'a Region> {
    forecast.content.iter().find(|region| path.matches(region))
}
