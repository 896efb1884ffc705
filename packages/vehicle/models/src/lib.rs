#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Stolen vehicle record, search criteria, and fixture document types.
//!
//! The fixture these types describe is loosely shaped: every field may be
//! missing, detection time lives under one of two keys, and confidence is
//! either a number or a percentage string. The types here model that shape
//! as-is and expose small accessors so callers never have to care which
//! variant a given row happens to use.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumString};

/// A JSON value that is either a number or a string.
///
/// Fixture rows store confidence as `"92%"` in some places and `92` in
/// others; dashboard stats mix counts and `"64%"`-style strings the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A JSON number.
    Number(f64),
    /// A JSON string, kept verbatim.
    Text(String),
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One entry in a vehicle's investigation timeline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestigationUpdate {
    /// Date of the update (usually `YYYY-MM-DD`).
    pub date: Option<String>,
    /// Free-text description of what happened.
    pub update: Option<String>,
}

/// A single stolen vehicle row from the hotlist fixture.
///
/// Every field is optional. Records are treated as immutable inputs by the
/// search engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleRecord {
    /// Registration plate, e.g. `"MH12AB1234"`.
    pub vehicle_number: Option<String>,
    /// VIN / chassis number.
    pub chassis_number: Option<String>,
    /// Manufacturer.
    pub make: Option<String>,
    /// Model name.
    pub model: Option<String>,
    /// Body color.
    pub color: Option<String>,
    /// Case status (e.g. `"Active"`, `"Recovered"`).
    pub status: Option<String>,
    /// Hotlist priority (e.g. `"High"`).
    pub hotlist_level: Option<String>,
    /// Date (optionally with time) the theft was reported.
    pub theft_date: Option<String>,
    /// Where the vehicle was stolen from.
    pub theft_location: Option<String>,
    /// First information report number.
    pub fir_number: Option<String>,
    /// Reporting police station.
    pub police_station: Option<String>,
    /// Registered owner.
    pub owner_name: Option<String>,
    /// Owner phone number.
    pub owner_contact: Option<String>,
    /// Owner postal address.
    pub owner_address: Option<String>,
    /// Preferred key for the latest detection time.
    pub detection_timestamp: Option<String>,
    /// Legacy key for the latest detection time.
    pub detection_time: Option<String>,
    /// Where the camera last saw the vehicle.
    pub detection_location: Option<String>,
    /// Camera that produced the detection.
    pub camera_id: Option<String>,
    /// URL or path of the detection snapshot.
    pub detection_image: Option<String>,
    /// Detection confidence, either `92`, `"92"` or `"92%"`.
    pub confidence: Option<Scalar>,
    /// Investigation timeline, oldest first.
    #[serde(deserialize_with = "null_as_default")]
    pub investigation_updates: Vec<InvestigationUpdate>,
}

impl VehicleRecord {
    /// Returns the non-empty raw detection time values in priority order:
    /// `detectionTimestamp` first, then `detectionTime`.
    pub fn detection_times(&self) -> impl Iterator<Item = &str> {
        [&self.detection_timestamp, &self.detection_time]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .filter(|v| !v.is_empty())
    }

    /// Returns the raw detection time to show to a user, if any.
    #[must_use]
    pub fn detection_time(&self) -> Option<&str> {
        self.detection_times().next()
    }

    /// Returns the detection location, falling back to the theft location.
    #[must_use]
    pub fn display_location(&self) -> Option<&str> {
        non_empty(self.detection_location.as_deref())
            .or_else(|| non_empty(self.theft_location.as_deref()))
    }
}

/// Reads an explicit JSON `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Which search form is active.
///
/// Basic mode only applies the identity filters (plate and chassis).
/// Advanced mode additionally enforces make, color, location, and the theft
/// date range.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SearchMode {
    /// Identity filters only.
    #[default]
    Basic,
    /// Identity filters plus make/color/location/date.
    Advanced,
}

impl SearchMode {
    /// Returns `true` for [`SearchMode::Advanced`].
    #[must_use]
    pub const fn is_advanced(self) -> bool {
        matches!(self, Self::Advanced)
    }
}

/// Filter criteria for a single search.
///
/// Empty strings mean "not filtered". Date bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Plate fragment, matched after alphanumeric normalization.
    pub vehicle_number: String,
    /// Chassis fragment, matched after whitespace removal.
    pub chassis_number: String,
    /// Exact make (case-insensitive). Advanced mode only.
    pub make: String,
    /// Exact color (case-insensitive). Advanced mode only.
    pub color: String,
    /// Theft location fragment (case-insensitive). Advanced mode only.
    pub location: String,
    /// Earliest theft date. Advanced mode only.
    pub date_from: Option<NaiveDate>,
    /// Latest theft date. Advanced mode only.
    pub date_to: Option<NaiveDate>,
    /// Whether the advanced filters are enforced at all.
    pub is_advanced_search: bool,
}

impl FilterCriteria {
    /// Criteria that match on plate fragment only.
    #[must_use]
    pub fn by_vehicle_number(vehicle_number: impl Into<String>) -> Self {
        Self {
            vehicle_number: vehicle_number.into(),
            ..Self::default()
        }
    }

    /// Criteria that match on chassis fragment only.
    #[must_use]
    pub fn by_chassis_number(chassis_number: impl Into<String>) -> Self {
        Self {
            chassis_number: chassis_number.into(),
            ..Self::default()
        }
    }

    /// Sets the advanced flag from a [`SearchMode`].
    #[must_use]
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.is_advanced_search = mode.is_advanced();
        self
    }

    /// Returns the mode implied by [`Self::is_advanced_search`].
    #[must_use]
    pub const fn mode(&self) -> SearchMode {
        if self.is_advanced_search {
            SearchMode::Advanced
        } else {
            SearchMode::Basic
        }
    }

    /// Returns `true` when either date bound is set.
    #[must_use]
    pub const fn has_date_bounds(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some()
    }
}

/// Headline numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    /// Vehicles currently on the hotlist.
    pub total_stolen: Option<Scalar>,
    /// Camera detections in the current month.
    pub detected_this_month: Option<Scalar>,
    /// Share of stolen vehicles recovered.
    pub recovery_rate: Option<Scalar>,
}

/// A recent camera detection shown on the dashboard feed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentDetection {
    /// Plate that was detected.
    pub vehicle_number: Option<String>,
    /// Camera location.
    pub location: Option<String>,
    /// When the detection happened.
    pub detection_time: Option<String>,
    /// Detection confidence.
    pub confidence: Option<Scalar>,
}

/// The whole hotlist fixture document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fixture {
    /// Searchable stolen vehicle rows.
    #[serde(deserialize_with = "null_as_default")]
    pub vehicles: Vec<VehicleRecord>,
    /// Dashboard headline numbers.
    #[serde(deserialize_with = "null_as_default")]
    pub stats: DashboardStats,
    /// Dashboard detection feed.
    #[serde(deserialize_with = "null_as_default")]
    pub recent_detections: Vec<RecentDetection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_timestamp_takes_priority() {
        let record = VehicleRecord {
            detection_timestamp: Some("2023-06-01T10:00:00".to_string()),
            detection_time: Some("2023-05-01T10:00:00".to_string()),
            ..VehicleRecord::default()
        };
        assert_eq!(record.detection_time(), Some("2023-06-01T10:00:00"));
        assert_eq!(record.detection_times().count(), 2);
    }

    #[test]
    fn empty_detection_timestamp_falls_back() {
        let record = VehicleRecord {
            detection_timestamp: Some(String::new()),
            detection_time: Some("2023-05-01".to_string()),
            ..VehicleRecord::default()
        };
        assert_eq!(record.detection_time(), Some("2023-05-01"));
    }

    #[test]
    fn display_location_falls_back_to_theft_location() {
        let record = VehicleRecord {
            theft_location: Some("FC Road, Pune".to_string()),
            ..VehicleRecord::default()
        };
        assert_eq!(record.display_location(), Some("FC Road, Pune"));
    }

    #[test]
    fn deserializes_mixed_confidence_shapes() {
        let text: VehicleRecord =
            serde_json::from_str(r#"{"vehicleNumber":"MH12AB1234","confidence":"92%"}"#).unwrap();
        let number: VehicleRecord = serde_json::from_str(r#"{"confidence":87.5}"#).unwrap();
        assert_eq!(text.confidence, Some(Scalar::from("92%")));
        assert_eq!(number.confidence, Some(Scalar::Number(87.5)));
        assert_eq!(text.vehicle_number.as_deref(), Some("MH12AB1234"));
    }

    #[test]
    fn scalar_display_is_verbatim() {
        assert_eq!(Scalar::from("64%").to_string(), "64%");
        assert_eq!(Scalar::Number(128.0).to_string(), "128");
    }

    #[test]
    fn search_mode_parses_case_insensitively() {
        assert_eq!("Advanced".parse::<SearchMode>().unwrap(), SearchMode::Advanced);
        assert_eq!("basic".parse::<SearchMode>().unwrap(), SearchMode::Basic);
        assert!("expert".parse::<SearchMode>().is_err());
        assert_eq!(SearchMode::Advanced.to_string(), "advanced");
    }

    #[test]
    fn criteria_mode_roundtrip() {
        let criteria = FilterCriteria::by_vehicle_number("1234").with_mode(SearchMode::Advanced);
        assert!(criteria.is_advanced_search);
        assert_eq!(criteria.mode(), SearchMode::Advanced);
        assert!(!criteria.has_date_bounds());
    }

    #[test]
    fn fixture_sections_default_when_missing() {
        let fixture: Fixture = serde_json::from_str(r#"{"vehicles":[]}"#).unwrap();
        assert!(fixture.recent_detections.is_empty());
        assert_eq!(fixture.stats, DashboardStats::default());
    }

    #[test]
    fn null_sections_read_as_empty() {
        let fixture: Fixture = serde_json::from_str(
            r#"{"vehicles":null,"stats":null,"recentDetections":null}"#,
        )
        .unwrap();
        assert_eq!(fixture, Fixture::default());

        let record: VehicleRecord = serde_json::from_str(
            r#"{"vehicleNumber":"MH12AB1234","investigationUpdates":null}"#,
        )
        .unwrap();
        assert!(record.investigation_updates.is_empty());
        assert_eq!(record.vehicle_number.as_deref(), Some("MH12AB1234"));
    }
}
