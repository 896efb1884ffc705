//! Plain-text rendering of dashboards, result lists, and vehicle details.
//!
//! Every function returns a `String` so the caller decides where it goes.

use hotlist_fixture::Fixture;
use hotlist_search::parsing::{parse_confidence, parse_instant};
use hotlist_vehicle_models::{Scalar, VehicleRecord};

const MISSING: &str = "-";

/// Formats a date as `"March 10, 2023"`.
///
/// Empty input renders as empty; input that does not parse is returned
/// unchanged.
#[must_use]
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    parse_instant(raw).map_or_else(
        || raw.to_string(),
        |dt| dt.format("%B %-d, %Y").to_string(),
    )
}

/// Formats a date-time as `"Jun 1, 2023, 09:42"`.
///
/// Same fallbacks as [`format_date`].
#[must_use]
pub fn format_date_time(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    parse_instant(raw).map_or_else(
        || raw.to_string(),
        |dt| dt.format("%b %-d, %Y, %H:%M").to_string(),
    )
}

/// Formats a confidence value as a parsed percentage (e.g. `"81.5%"`).
#[must_use]
pub fn format_confidence(value: Option<&Scalar>) -> String {
    format!("{}%", parse_confidence(value))
}

fn or_missing(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(MISSING)
}

fn scalar_or_missing(value: Option<&Scalar>) -> String {
    value.map_or_else(|| MISSING.to_string(), ToString::to_string)
}

/// One result row: plate, location, detection time, confidence.
#[must_use]
pub fn result_line(index: usize, record: &VehicleRecord) -> String {
    let detected_at = format_date_time(record.detection_time().unwrap_or_default());
    format!(
        "{:>3}. {:<14} {:<34} {:<22} {:>6}",
        index + 1,
        or_missing(record.vehicle_number.as_deref()),
        or_missing(record.display_location()),
        or_missing(Some(detected_at.as_str())),
        format_confidence(record.confidence.as_ref()),
    )
}

/// The ranked result list, or a "no results" message.
#[must_use]
pub fn results_list(results: &[&VehicleRecord]) -> String {
    if results.is_empty() {
        return "No matching vehicles found.".to_string();
    }

    let mut lines = vec![format!("Search Results ({})", results.len())];
    lines.extend(
        results
            .iter()
            .enumerate()
            .map(|(i, record)| result_line(i, record)),
    );
    lines.join("\n")
}

/// Short one-line summary used as a menu label.
#[must_use]
pub fn result_summary(record: &VehicleRecord) -> String {
    format!(
        "{} ({} {}, {}) {}",
        or_missing(record.vehicle_number.as_deref()),
        or_missing(record.make.as_deref()),
        or_missing(record.model.as_deref()),
        or_missing(record.color.as_deref()),
        format_confidence(record.confidence.as_ref()),
    )
}

/// Full detail view for a single vehicle.
#[must_use]
pub fn vehicle_details(record: &VehicleRecord) -> String {
    let detected_at = format_date_time(record.detection_time().unwrap_or_default());
    let theft_date = format_date(record.theft_date.as_deref().unwrap_or_default());

    let mut lines = vec![
        format!("Vehicle: {}", or_missing(record.vehicle_number.as_deref())),
        String::new(),
        "Vehicle Information".to_string(),
        format!("  Number:        {}", or_missing(record.vehicle_number.as_deref())),
        format!("  Make:          {}", or_missing(record.make.as_deref())),
        format!("  Model:         {}", or_missing(record.model.as_deref())),
        format!("  Color:         {}", or_missing(record.color.as_deref())),
        format!("  VIN/Chassis:   {}", or_missing(record.chassis_number.as_deref())),
        format!("  Status:        {}", or_missing(record.status.as_deref())),
        format!("  Hotlist Level: {}", or_missing(record.hotlist_level.as_deref())),
        String::new(),
        "Theft Details".to_string(),
        format!("  Reported On:   {}", or_missing(Some(theft_date.as_str()))),
        format!("  Location:      {}", or_missing(record.theft_location.as_deref())),
        format!("  FIR Number:    {}", or_missing(record.fir_number.as_deref())),
        format!("  Station:       {}", or_missing(record.police_station.as_deref())),
        String::new(),
        "Owner Information".to_string(),
        format!("  Name:          {}", or_missing(record.owner_name.as_deref())),
        format!("  Contact:       {}", or_missing(record.owner_contact.as_deref())),
        format!("  Address:       {}", or_missing(record.owner_address.as_deref())),
        String::new(),
        "Detection Information".to_string(),
        format!("  Last Detected: {}", or_missing(Some(detected_at.as_str()))),
        format!("  Location:      {}", or_missing(record.detection_location.as_deref())),
        format!("  Camera ID:     {}", or_missing(record.camera_id.as_deref())),
        format!("  Image:         {}", or_missing(record.detection_image.as_deref())),
        format!("  Confidence:    {}", format_confidence(record.confidence.as_ref())),
    ];

    if !record.investigation_updates.is_empty() {
        lines.push(String::new());
        lines.push("Investigation Timeline".to_string());
        for update in &record.investigation_updates {
            lines.push(format!(
                "  {:<18} {}",
                format_date(update.date.as_deref().unwrap_or_default()),
                update.update.as_deref().unwrap_or_default(),
            ));
        }
    }

    lines.join("\n")
}

/// Dashboard stats and the recent detection feed.
#[must_use]
pub fn dashboard(fixture: &Fixture) -> String {
    let stats = &fixture.stats;
    let mut lines = vec![
        "Hotlist Dashboard".to_string(),
        format!(
            "  Total stolen:        {}",
            scalar_or_missing(stats.total_stolen.as_ref())
        ),
        format!(
            "  Detected this month: {}",
            scalar_or_missing(stats.detected_this_month.as_ref())
        ),
        format!(
            "  Recovery rate:       {}",
            scalar_or_missing(stats.recovery_rate.as_ref())
        ),
        String::new(),
        "Recent Detections".to_string(),
    ];

    if fixture.recent_detections.is_empty() {
        lines.push("  (none)".to_string());
    }
    for detection in &fixture.recent_detections {
        let detected_at =
            format_date_time(detection.detection_time.as_deref().unwrap_or_default());
        lines.push(format!(
            "  {:<14} {:<34} {:<22} {:>6}",
            or_missing(detection.vehicle_number.as_deref()),
            or_missing(detection.location.as_deref()),
            or_missing(Some(detected_at.as_str())),
            scalar_or_missing(detection.confidence.as_ref()),
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use hotlist_vehicle_models::InvestigationUpdate;

    use super::*;

    fn sample() -> VehicleRecord {
        VehicleRecord {
            vehicle_number: Some("MH12AB1234".to_string()),
            make: Some("Honda".to_string()),
            model: Some("City".to_string()),
            color: Some("White".to_string()),
            theft_date: Some("2023-03-10".to_string()),
            theft_location: Some("FC Road, Pune".to_string()),
            detection_timestamp: Some("2023-06-01T09:42:00".to_string()),
            confidence: Some(Scalar::from("95%")),
            investigation_updates: vec![InvestigationUpdate {
                date: Some("2023-03-10".to_string()),
                update: Some("FIR registered.".to_string()),
            }],
            ..VehicleRecord::default()
        }
    }

    #[test]
    fn formats_dates() {
        assert_eq!(format_date("2023-03-10"), "March 10, 2023");
        assert_eq!(format_date_time("2023-06-01T09:42:00"), "Jun 1, 2023, 09:42");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date("sometime in May"), "sometime in May");
        assert_eq!(format_date_time("unknown"), "unknown");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn confidence_renders_parsed_number() {
        assert_eq!(format_confidence(Some(&Scalar::from("81.5%"))), "81.5%");
        assert_eq!(format_confidence(Some(&Scalar::Number(88.0))), "88%");
        assert_eq!(format_confidence(None), "0%");
    }

    #[test]
    fn result_line_falls_back_to_theft_location() {
        let line = result_line(0, &sample());
        assert!(line.starts_with("  1. MH12AB1234"));
        assert!(line.contains("FC Road, Pune"));
        assert!(line.contains("Jun 1, 2023, 09:42"));
        assert!(line.ends_with("95%"));
    }

    #[test]
    fn empty_results_render_message() {
        assert_eq!(results_list(&[]), "No matching vehicles found.");
    }

    #[test]
    fn results_list_has_header_and_rows() {
        let record = sample();
        let rendered = results_list(&[&record, &record]);
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.starts_with("Search Results (2)"));
    }

    #[test]
    fn details_include_timeline() {
        let rendered = vehicle_details(&sample());
        assert!(rendered.contains("Reported On:   March 10, 2023"));
        assert!(rendered.contains("Investigation Timeline"));
        assert!(rendered.contains("FIR registered."));
        assert!(rendered.contains("Camera ID:     -"));
    }

    #[test]
    fn summary_marks_missing_fields() {
        let record = VehicleRecord {
            vehicle_number: Some("KA05MX9921".to_string()),
            ..VehicleRecord::default()
        };
        assert_eq!(result_summary(&record), "KA05MX9921 (- -, -) 0%");
    }

    #[test]
    fn dashboard_lists_stats_and_detections() {
        let fixture: Fixture = serde_json::from_str(
            r#"{
                "stats": {"totalStolen": 128, "recoveryRate": "64%"},
                "recentDetections": [
                    {"vehicleNumber": "MH12AB1234", "location": "Hinjewadi", "detectionTime": "2023-06-01T09:42:00", "confidence": "95%"}
                ]
            }"#,
        )
        .unwrap();
        let rendered = dashboard(&fixture);
        assert!(rendered.contains("Total stolen:        128"));
        assert!(rendered.contains("Detected this month: -"));
        assert!(rendered.contains("Recovery rate:       64%"));
        assert!(rendered.contains("MH12AB1234"));
    }
}
