//! Hexal postal-code forecast payload.
//!
//! A seven-day forecast per postal code, delivered as XML with all data in
//! attributes:
//!
//! ```xml
//! <datasets>
//!   <pollendaten plz="53797" ort="Lohmar">
//!     <pollenbelastungen tag="0">
//!       <pollen name="Hasel" belastung="1"/>
//!     </pollenbelastungen>
//!   </pollendaten>
//! </datasets>
//! ```
//!
//! Fetched per request and never cached.

use serde::{Deserialize, Serialize};

/// Root of the postal feed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename = "datasets")]
pub struct HexalDataset {
    #[serde(rename = "pollendaten", default)]
    pub records: Vec<HexalRecord>,
}

/// Forecast for one postal code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HexalRecord {
    #[serde(rename = "@plz", default)]
    pub zip: String,

    #[serde(rename = "@ort", default)]
    pub city: String,

    #[serde(rename = "pollenbelastungen", default)]
    pub exposures: Vec<HexalDayExposure>,
}

/// Exposures for one forecast day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HexalDayExposure {
    /// Day offset from today as sent by the provider. Validated into a
    /// [`ForecastDay`](super::ForecastDay) when the page is built.
    #[serde(rename = "@tag", default)]
    pub day: String,

    #[serde(rename = "pollen", default)]
    pub pollen: Vec<HexalPollen>,
}

/// A single allergen reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HexalPollen {
    #[serde(rename = "@name", default)]
    pub name: String,

    /// Opaque severity code.
    #[serde(rename = "@belastung", default)]
    pub exposure: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<datasets>
  <pollendaten plz="53797" ort="Lohmar">
    <pollenbelastungen tag="0">
      <pollen name="Hasel" belastung="1"/>
      <pollen name="Beifuß" belastung="2"/>
    </pollenbelastungen>
    <pollenbelastungen tag="1">
      <pollen name="Gräser" belastung="3"/>
    </pollenbelastungen>
  </pollendaten>
</datasets>"#;

    #[test]
    fn decodes_feed_sample() {
        let dataset: HexalDataset = quick_xml::de::from_str(SAMPLE).unwrap();

        assert_eq!(dataset.records.len(), 1);
        let record = &dataset.records[0];
        assert_eq!(record.zip, "53797");
        assert_eq!(record.city, "Lohmar");
        assert_eq!(record.exposures.len(), 2);
        assert_eq!(record.exposures[0].day, "0");
        assert_eq!(
            record.exposures[0].pollen[1],
            HexalPollen {
                name: "Beifuß".into(),
                exposure: "2".into(),
            }
        );
        assert_eq!(record.exposures[1].pollen[0].name, "Gräser");
    }

    #[test]
    fn decodes_empty_dataset() {
        let dataset: HexalDataset = quick_xml::de::from_str("<datasets></datasets>").unwrap();
        assert!(dataset.records.is_empty());
    }

    #[test]
    fn serialized_grid_reads_back() {
        let exposures = (0..7)
            .map(|day| HexalDayExposure {
                day: day.to_string(),
                pollen: (0..16)
                    .map(|_| HexalPollen {
                        name: "FRITZ".into(),
                        exposure: "0".into(),
                    })
                    .collect(),
            })
            .collect();
        let dataset = HexalDataset {
            records: vec![HexalRecord {
                zip: "53797".into(),
                city: "Lohmar".into(),
                exposures,
            }],
        };

        let xml = quick_xml::se::to_string(&dataset).unwrap();
        assert!(xml.starts_with("<datasets>"));
        assert!(xml.contains(r#"plz="53797""#));

        let decoded: HexalDataset = quick_xml::de::from_str(&xml).unwrap();
        let record = &decoded.records[0];
        assert_eq!(record.zip, "53797");
        assert_eq!(record.city, "Lohmar");
        assert_eq!(record.exposures.len(), 7);
        for (day, exposure) in record.exposures.iter().enumerate() {
            assert_eq!(exposure.day, day.to_string());
            assert_eq!(exposure.pollen.len(), 16);
        }
        assert_eq!(decoded, dataset);
    }
}
