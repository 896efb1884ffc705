#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Hotlist vehicle matching and ranking engine.
//!
//! A search is two pure steps:
//!
//! 1. [`matcher`] keeps the records that satisfy the [`FilterCriteria`]
//!    (fuzzy plate/chassis identity, plus make/color/location/date in
//!    advanced mode).
//! 2. [`ranker`] orders the survivors by confidence, then by most recent
//!    detection.
//!
//! Neither step fails or mutates its input. Malformed values in a record
//! degrade to defaults (`0` confidence, epoch detection time, "no date").

pub mod matcher;
pub mod normalize;
pub mod parsing;
pub mod ranker;

use hotlist_vehicle_models::{FilterCriteria, VehicleRecord};

pub use matcher::{PreparedCriteria, filter_vehicles, matches};
pub use normalize::{normalize, normalize_chassis};
pub use ranker::rank;

/// Filters `records` by `criteria` and returns the matches in rank order.
#[must_use]
pub fn search_vehicles<'a>(
    records: &'a [VehicleRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a VehicleRecord> {
    let matched = filter_vehicles(records, criteria);
    log::debug!(
        "Matched {}/{} records (mode={}, vehicle={:?}, chassis={:?})",
        matched.len(),
        records.len(),
        criteria.mode(),
        criteria.vehicle_number,
        criteria.chassis_number,
    );
    rank(matched)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hotlist_vehicle_models::{Scalar, SearchMode};

    use super::*;

    fn record(number: &str, confidence: &str, detection_time: &str) -> VehicleRecord {
        VehicleRecord {
            vehicle_number: Some(number.to_string()),
            confidence: Some(Scalar::from(confidence)),
            detection_time: Some(detection_time.to_string()),
            ..VehicleRecord::default()
        }
    }

    #[test]
    fn ranks_substring_matches_by_confidence() {
        let records = vec![
            record("MH12AB1234", "70%", "2023-01-01"),
            record("MH12AB1234", "95%", "2023-02-01"),
        ];
        let results = search_vehicles(&records, &FilterCriteria::by_vehicle_number("1234"));

        assert_eq!(results.len(), 2);
        assert!(std::ptr::eq(results[0], &records[1]));
        assert!(std::ptr::eq(results[1], &records[0]));
    }

    #[test]
    fn empty_records_yield_empty_results() {
        let criteria = FilterCriteria {
            vehicle_number: "MH12".to_string(),
            make: "Honda".to_string(),
            date_from: NaiveDate::from_ymd_opt(2023, 1, 1),
            ..FilterCriteria::default()
        }
        .with_mode(SearchMode::Advanced);
        assert!(search_vehicles(&[], &criteria).is_empty());
    }

    #[test]
    fn no_match_is_an_empty_result() {
        let records = vec![record("MH12AB1234", "70%", "2023-01-01")];
        assert!(search_vehicles(&records, &FilterCriteria::by_vehicle_number("KA05")).is_empty());
    }

    #[test]
    fn advanced_search_filters_then_ranks() {
        let mut swift = record("MH14CD5678", "82%", "2023-04-02");
        swift.make = Some("Maruti".to_string());
        let mut city = record("MH12AB1234", "91%", "2023-04-01");
        city.make = Some("Honda".to_string());
        let mut older_city = record("MH12XY0001", "91%", "2023-03-01");
        older_city.make = Some("honda".to_string());
        let records = vec![swift, older_city, city];

        let criteria = FilterCriteria {
            vehicle_number: "MH1".to_string(),
            make: "Honda".to_string(),
            ..FilterCriteria::default()
        }
        .with_mode(SearchMode::Advanced);
        let results = search_vehicles(&records, &criteria);

        let plates: Vec<_> = results
            .iter()
            .filter_map(|r| r.vehicle_number.as_deref())
            .collect();
        assert_eq!(plates, ["MH12AB1234", "MH12XY0001"]);
    }

    #[test]
    fn search_does_not_mutate_input() {
        let records = vec![
            record("B", "10%", "2023-01-01"),
            record("A", "90%", "2023-01-01"),
        ];
        let before = records.clone();
        let _ = search_vehicles(&records, &FilterCriteria::default());
        assert_eq!(records, before);
    }
}
