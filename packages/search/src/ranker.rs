//! Result ordering: highest confidence first, then most recent detection.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use hotlist_vehicle_models::VehicleRecord;

use crate::parsing::{detection_instant, parse_confidence};

/// Sort key extracted once per record.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RankKey {
    confidence: f64,
    detected_at: DateTime<Utc>,
}

impl RankKey {
    fn of(record: &VehicleRecord) -> Self {
        Self {
            confidence: parse_confidence(record.confidence.as_ref()),
            detected_at: detection_instant(record),
        }
    }

    /// Descending on both components.
    fn cmp_desc(&self, other: &Self) -> Ordering {
        other
            .confidence
            .total_cmp(&self.confidence)
            .then_with(|| other.detected_at.cmp(&self.detected_at))
    }
}

/// Ranking comparator: `Less` means `a` sorts before `b`.
#[must_use]
pub fn compare(a: &VehicleRecord, b: &VehicleRecord) -> Ordering {
    RankKey::of(a).cmp_desc(&RankKey::of(b))
}

/// Orders `records` by confidence (descending), breaking ties by detection
/// time (most recent first). The sort is stable, so exact ties keep their
/// input order.
#[must_use]
pub fn rank(records: Vec<&VehicleRecord>) -> Vec<&VehicleRecord> {
    let mut keyed: Vec<(RankKey, &VehicleRecord)> =
        records.into_iter().map(|r| (RankKey::of(r), r)).collect();
    keyed.sort_by(|(a, _), (b, _)| a.cmp_desc(b));
    keyed.into_iter().map(|(_, r)| r).collect()
}
