//! View models for the page templates.
//!
//! Builders turn provider payloads into the shapes the templates render.
//! They do no I/O; the current time is passed in.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::cache::ForecastSnapshot;
use crate::domain::{
    Allergen, FORECAST_DAYS, ForecastDay, HexalDataset, PollenLevels, Region, ValidationError,
};

/// Date format used on every page.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Date-time format for update times.
pub const DATE_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

// ============================================================================
// Index page
// ============================================================================

/// Index page: feed metadata, legend and links to every region.
#[derive(Debug, Clone)]
pub struct IndexView {
    pub name: String,
    pub sender: String,
    /// Provider-formatted update times, shown as sent.
    pub last_update: String,
    pub next_update: String,
    pub legend: Vec<(String, String)>,
    pub regions: Vec<RegionLink>,
}

/// A region entry in the index list.
#[derive(Debug, Clone)]
pub struct RegionLink {
    /// `None` for regions no region page can address.
    pub href: Option<String>,
    pub region_name: String,
    pub partregion_name: String,
}

impl IndexView {
    pub fn build(snapshot: &ForecastSnapshot) -> Self {
        let forecast = &snapshot.forecast;

        let legend = forecast
            .legend
            .entries()
            .iter()
            .filter(|(code, _)| !code.is_empty())
            .map(|(code, desc)| (code.to_string(), desc.to_string()))
            .collect();

        let regions = forecast
            .content
            .iter()
            .map(|region| RegionLink {
                href: region.href(),
                region_name: region.region_name.clone(),
                partregion_name: region.partregion_name.clone(),
            })
            .collect();

        Self {
            name: forecast.name.clone(),
            sender: forecast.sender.clone(),
            last_update: forecast.last_update.clone(),
            next_update: forecast.next_update.clone(),
            legend,
            regions,
        }
    }
}

// ============================================================================
// Region page
// ============================================================================

/// Region page: one region's three-day forecast.
///
/// The three dates are counted from the provider's `last_update`, not from
/// the wall clock, so they match the days the forecast was issued for.
#[derive(Debug, Clone)]
pub struct RegionView {
    pub region: Region,
    pub last_update: NaiveDateTime,
    pub next_update: NaiveDateTime,
    pub today: NaiveDate,
    pub tomorrow: NaiveDate,
    pub day_after_tomorrow: NaiveDate,
}

impl RegionView {
    pub fn build(region: &Region, last_update: NaiveDateTime, next_update: NaiveDateTime) -> Self {
        let today = last_update.date();
        Self {
            region: region.clone(),
            last_update,
            next_update,
            today,
            tomorrow: today + Days::new(1),
            day_after_tomorrow: today + Days::new(2),
        }
    }

    /// Allergen rows in feed order.
    pub fn rows(&self) -> [(&'static str, &PollenLevels); 8] {
        self.region.pollen.entries()
    }

    /// Column headings for today, tomorrow and the day after.
    pub fn day_labels(&self) -> [String; 3] {
        [self.today, self.tomorrow, self.day_after_tomorrow]
            .map(|date| date.format(DATE_FORMAT).to_string())
    }

    pub fn last_update_label(&self) -> String {
        self.last_update.format(DATE_TIME_FORMAT).to_string()
    }

    pub fn next_update_label(&self) -> String {
        self.next_update.format(DATE_TIME_FORMAT).to_string()
    }
}

// ============================================================================
// Postal-code page
// ============================================================================

/// Postal-code page: a seven-day grid per allergen.
#[derive(Debug, Clone)]
pub struct ZipView {
    pub zip: String,
    pub city: String,
    /// Calendar date of each day offset; `None` if the feed sent nothing
    /// for that day.
    pub dates: [Option<NaiveDate>; FORECAST_DAYS],
    exposures: BTreeMap<Allergen, [String; FORECAST_DAYS]>,
}

/// One allergen row of the postal-code grid.
#[derive(Debug, Clone, Copy)]
pub struct ExposureRow<'a> {
    pub allergen: Allergen,
    pub levels: &'a [String; FORECAST_DAYS],
}

impl ZipView {
    /// Build the grid from a postal feed document.
    ///
    /// `today` anchors the day offsets (wall-clock date, unlike the region
    /// page). A day outside 0-6 fails the whole page. Allergen names we
    /// don't know are skipped. If the document holds several records, the
    /// last one's zip and city win and all exposures are merged.
    pub fn build(dataset: &HexalDataset, today: NaiveDate) -> Result<Self, ValidationError> {
        let mut view = Self {
            zip: String::new(),
            city: String::new(),
            dates: [None; FORECAST_DAYS],
            exposures: Allergen::ALL
                .iter()
                .map(|allergen| (*allergen, Default::default()))
                .collect(),
        };

        for record in &dataset.records {
            view.zip.clone_from(&record.zip);
            view.city.clone_from(&record.city);

            for exposure in &record.exposures {
                let day = ForecastDay::parse(&exposure.day)?;
                view.dates[day.index()] = Some(today + Days::new(day.index() as u64));

                for pollen in &exposure.pollen {
                    let Some(allergen) = Allergen::from_feed_name(&pollen.name) else {
                        continue;
                    };
                    if let Some(levels) = view.exposures.get_mut(&allergen) {
                        levels[day.index()].clone_from(&pollen.exposure);
                    }
                }
            }
        }

        Ok(view)
    }

    /// All allergen rows in page order.
    pub fn rows(&self) -> Vec<ExposureRow<'_>> {
        self.exposures
            .iter()
            .map(|(allergen, levels)| ExposureRow {
                allergen: *allergen,
                levels,
            })
            .collect()
    }

    /// Column headings: formatted dates, blank for days without data.
    pub fn date_labels(&self) -> Vec<String> {
        self.dates
            .iter()
            .map(|date| {
                date.map(|d| d.format(DATE_FORMAT).to_string())
                    .unwrap_or_default()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Forecast, HexalDayExposure, HexalPollen, HexalRecord, Legend};
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pollen(name: &str, exposure: &str) -> HexalPollen {
        HexalPollen {
            name: name.into(),
            exposure: exposure.into(),
        }
    }

    fn day(day: &str, pollen: Vec<HexalPollen>) -> HexalDayExposure {
        HexalDayExposure {
            day: day.into(),
            pollen,
        }
    }

    fn dataset(exposures: Vec<HexalDayExposure>) -> HexalDataset {
        HexalDataset {
            records: vec![HexalRecord {
                zip: "53797".into(),
                city: "Lohmar".into(),
                exposures,
            }],
        }
    }

    // ------------------------------------------------------------------------
    // Region view
    // ------------------------------------------------------------------------

    #[test]
    fn region_dates_count_from_last_update() {
        let region = Region {
            region_id: 10,
            partregion_id: 11,
            ..Default::default()
        };
        let last = date(2024, 3, 1).and_hms_opt(9, 0, 0).unwrap();
        let next = date(2024, 3, 2).and_hms_opt(11, 0, 0).unwrap();

        let view = RegionView::build(&region, last, next);

        assert_eq!(view.today, date(2024, 3, 1));
        assert_eq!(view.tomorrow, date(2024, 3, 2));
        assert_eq!(view.day_after_tomorrow, date(2024, 3, 3));
        assert_eq!(view.last_update, last);
        assert_eq!(view.next_update, next);
        assert_eq!(view.region, region);
        assert_eq!(view.day_labels(), ["01.03.2024", "02.03.2024", "03.03.2024"]);
        assert_eq!(view.last_update_label(), "01.03.2024 09:00");
        assert_eq!(view.next_update_label(), "02.03.2024 11:00");
    }

    #[test]
    fn region_dates_cross_month_and_leap_day() {
        let last = date(2024, 2, 28).and_hms_opt(11, 0, 0).unwrap();
        let view = RegionView::build(&Region::default(), last, last);

        assert_eq!(view.tomorrow, date(2024, 2, 29));
        assert_eq!(view.day_after_tomorrow, date(2024, 3, 1));
    }

    #[test]
    fn region_rows_follow_feed_order() {
        let mut region = Region::default();
        region.pollen.graeser = PollenLevels {
            today: "2".into(),
            tomorrow: "2-3".into(),
            day_after_tomorrow: "3".into(),
        };
        let last = date(2024, 5, 1).and_hms_opt(11, 0, 0).unwrap();
        let view = RegionView::build(&region, last, last);

        let rows = view.rows();
        assert_eq!(rows[0].0, "Hasel");
        assert_eq!(rows[4].0, "Gräser");
        assert_eq!(rows[4].1.tomorrow, "2-3");
    }

    // ------------------------------------------------------------------------
    // Postal view
    // ------------------------------------------------------------------------

    #[test]
    fn zip_maps_special_character_names() {
        let data = dataset(vec![day("3", vec![pollen("Beifuß", "2"), pollen("Gräser", "1")])]);
        let view = ZipView::build(&data, date(2024, 6, 10)).unwrap();

        assert_eq!(view.exposures.get(&Allergen::Beifuss).unwrap()[3], "2");
        assert_eq!(view.exposures.get(&Allergen::Graeser).unwrap()[3], "1");
        assert_eq!(view.exposures.get(&Allergen::Beifuss).unwrap()[2], "");
    }

    #[test]
    fn zip_ignores_unknown_allergens() {
        let data = dataset(vec![day("0", vec![pollen("Unknown", "3"), pollen("Hasel", "1")])]);
        let view = ZipView::build(&data, date(2024, 6, 10)).unwrap();

        assert_eq!(view.exposures.get(&Allergen::Hasel).unwrap()[0], "1");
        assert_eq!(view.rows().len(), 15);
        for row in view.rows() {
            assert!(!row.levels.contains(&"3".to_string()));
        }
    }

    #[test]
    fn zip_rejects_day_seven() {
        let data = dataset(vec![
            day("0", vec![pollen("Hasel", "1")]),
            day("7", vec![pollen("Hasel", "2")]),
        ]);
        let err = ZipView::build(&data, date(2024, 6, 10)).unwrap_err();
        assert_eq!(err, ValidationError::DayOutOfRange("7".into()));
    }

    #[test]
    fn zip_rejects_non_numeric_day() {
        let data = dataset(vec![day("heute", vec![])]);
        assert!(ZipView::build(&data, date(2024, 6, 10)).is_err());
    }

    #[test]
    fn zip_fills_every_valid_day() {
        let exposures = (0..7)
            .map(|d| day(&d.to_string(), vec![pollen("Birke", &d.to_string())]))
            .collect();
        let view = ZipView::build(&dataset(exposures), date(2024, 6, 10)).unwrap();

        let birke = view.exposures.get(&Allergen::Birke).unwrap();
        for d in 0..7 {
            assert_eq!(birke[d], d.to_string());
        }
    }

    #[test]
    fn zip_dates_count_from_today() {
        let data = dataset(vec![day("0", vec![]), day("6", vec![])]);
        let view = ZipView::build(&data, date(2024, 12, 28)).unwrap();

        assert_eq!(view.dates[0], Some(date(2024, 12, 28)));
        assert_eq!(view.dates[6], Some(date(2025, 1, 3)));
        assert_eq!(view.dates[1], None);

        let labels = view.date_labels();
        assert_eq!(labels[0], "28.12.2024");
        assert_eq!(labels[1], "");
        assert_eq!(labels[6], "03.01.2025");
    }

    #[test]
    fn zip_last_record_wins_for_header() {
        let mut data = dataset(vec![day("0", vec![pollen("Erle", "1")])]);
        data.records.push(HexalRecord {
            zip: "53798".into(),
            city: "Lohmar-Ost".into(),
            exposures: vec![day("1", vec![pollen("Erle", "2")])],
        });
        let view = ZipView::build(&data, date(2024, 6, 10)).unwrap();

        assert_eq!(view.zip, "53798");
        assert_eq!(view.city, "Lohmar-Ost");
        let erle = view.exposures.get(&Allergen::Erle).unwrap();
        assert_eq!(erle[0], "1");
        assert_eq!(erle[1], "2");
    }

    #[test]
    fn zip_empty_dataset_is_blank() {
        let view = ZipView::build(&HexalDataset::default(), date(2024, 6, 10)).unwrap();
        assert_eq!(view.zip, "");
        assert!(view.dates.iter().all(Option::is_none));
    }

    #[test]
    fn zip_rows_in_page_order() {
        let view = ZipView::build(&HexalDataset::default(), date(2024, 6, 10)).unwrap();
        let allergens: Vec<Allergen> = view.rows().iter().map(|row| row.allergen).collect();
        assert_eq!(allergens, Allergen::ALL.to_vec());
    }

    // ------------------------------------------------------------------------
    // Index view
    // ------------------------------------------------------------------------

    #[test]
    fn index_lists_regions_and_non_empty_legend() {
        let forecast = Forecast {
            name: "Pollenflug-Gefahrenindex".into(),
            last_update: "2024-03-01 11:00 Uhr".into(),
            legend: Legend {
                id1: "0".into(),
                id1_desc: "keine Belastung".into(),
                ..Default::default()
            },
            content: vec![
                Region {
                    region_id: 10,
                    partregion_id: 11,
                    region_name: "Schleswig-Holstein und Hamburg".into(),
                    partregion_name: "Inseln und Marschen".into(),
                    ..Default::default()
                },
                Region {
                    region_id: 50,
                    partregion_id: -1,
                    region_name: "Brandenburg und Berlin".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let snapshot = ForecastSnapshot {
            forecast: Arc::new(forecast),
            last_update: None,
            next_update: None,
        };

        let view = IndexView::build(&snapshot);

        assert_eq!(view.last_update, "2024-03-01 11:00 Uhr");
        assert_eq!(
            view.legend,
            vec![("0".to_string(), "keine Belastung".to_string())]
        );
        assert_eq!(view.regions.len(), 2);
        assert_eq!(view.regions[0].href.as_deref(), Some("/region/10/11"));
        assert_eq!(view.regions[0].partregion_name, "Inseln und Marschen");
        // Listed, but not linked: `/region/50/-1` would be a 404.
        assert_eq!(view.regions[1].region_name, "Brandenburg und Berlin");
        assert_eq!(view.regions[1].href, None);
    }
}
