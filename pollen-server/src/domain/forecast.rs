//! DWD pollen forecast payload.
//!
//! These types map directly to the DWD open-data JSON feed (`s31fg.json`).
//! The feed omits fields freely, so everything defaults to empty.

use serde::{Deserialize, Serialize};

use super::region::RegionPath;

/// The full DWD forecast document.
///
/// Immutable once fetched; a refresh replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Forecast {
    /// When DWD last updated the forecast, e.g. `2024-03-01 11:00 Uhr`.
    #[serde(default)]
    pub last_update: String,

    /// When DWD will publish the next forecast, same format.
    #[serde(default)]
    pub next_update: String,

    #[serde(default)]
    pub sender: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub legend: Legend,

    /// Regions in feed order. The provider does not guarantee uniqueness
    /// of `(region_id, partregion_id)`.
    #[serde(default)]
    pub content: Vec<Region>,
}

/// Severity-level descriptions, passed through to the page unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Legend {
    pub id1: String,
    pub id1_desc: String,
    pub id2: String,
    pub id2_desc: String,
    pub id3: String,
    pub id3_desc: String,
    pub id4: String,
    pub id4_desc: String,
    pub id5: String,
    pub id5_desc: String,
    pub id6: String,
    pub id6_desc: String,
    pub id7: String,
    pub id7_desc: String,
}

impl Legend {
    /// The seven `(code, description)` pairs in feed order.
    pub fn entries(&self) -> [(&str, &str); 7] {
        [
            (self.id1.as_str(), self.id1_desc.as_str()),
            (self.id2.as_str(), self.id2_desc.as_str()),
            (self.id3.as_str(), self.id3_desc.as_str()),
            (self.id4.as_str(), self.id4_desc.as_str()),
            (self.id5.as_str(), self.id5_desc.as_str()),
            (self.id6.as_str(), self.id6_desc.as_str()),
            (self.id7.as_str(), self.id7_desc.as_str()),
        ]
    }
}

/// One forecast region (or part of a region).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Region {
    pub region_id: i32,
    pub partregion_id: i32,
    pub region_name: String,
    pub partregion_name: String,

    #[serde(rename = "Pollen")]
    pub pollen: Pollen,
}

impl Region {
    /// Heading for pages and links: the part region name when there is one.
    pub fn display_name(&self) -> &str {
        if self.partregion_name.is_empty() {
            &self.region_name
        } else {
            &self.partregion_name
        }
    }

    /// Link to this region's page, if it can be addressed by one.
    pub fn href(&self) -> Option<String> {
        RegionPath::of(self).map(|path| format!("/region/{path}"))
    }
}

/// Per-allergen forecast for a region.
///
/// The allergen set is fixed by the feed; keys are ASCII transliterations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Pollen {
    #[serde(rename = "Hasel")]
    pub hasel: PollenLevels,
    #[serde(rename = "Erle")]
    pub erle: PollenLevels,
    #[serde(rename = "Esche")]
    pub esche: PollenLevels,
    #[serde(rename = "Birke")]
    pub birke: PollenLevels,
    #[serde(rename = "Graeser")]
    pub graeser: PollenLevels,
    #[serde(rename = "Roggen")]
    pub roggen: PollenLevels,
    #[serde(rename = "Beifuss")]
    pub beifuss: PollenLevels,
    #[serde(rename = "Ambrosia")]
    pub ambrosia: PollenLevels,
}

impl Pollen {
    /// Allergen display name paired with its levels, in feed order.
    pub fn entries(&self) -> [(&'static str, &PollenLevels); 8] {
        [
            ("Hasel", &self.hasel),
            ("Erle", &self.erle),
            ("Esche", &self.esche),
            ("Birke", &self.birke),
            ("Gräser", &self.graeser),
            ("Roggen", &self.roggen),
            ("Beifuß", &self.beifuss),
            ("Ambrosia", &self.ambrosia),
        ]
    }
}

/// Severity codes for the three forecast days.
///
/// Codes are opaque provider strings ("0", "0-1", "3", "-1", ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PollenLevels {
    pub today: String,
    pub tomorrow: String,
    #[serde(rename = "dayafter_to")]
    pub day_after_tomorrow: String,
}
