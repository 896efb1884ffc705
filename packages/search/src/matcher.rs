//! Per-record filter predicate.
//!
//! Identity filters (plate, chassis) always apply. Make, color, location and
//! the theft date range only apply when the criteria are in advanced mode.

use chrono::{DateTime, Utc};
use hotlist_vehicle_models::{FilterCriteria, VehicleRecord};

use crate::normalize::{normalize, normalize_chassis};
use crate::parsing::{start_of_day, theft_instant};

/// Filter criteria with every key normalized once up front.
#[derive(Debug, Clone)]
pub struct PreparedCriteria {
    /// Whether a plate filter was supplied (before normalization).
    vehicle_filtered: bool,
    /// Whether a chassis filter was supplied (before normalization).
    chassis_filtered: bool,
    vehicle_key: String,
    chassis_key: String,
    make: String,
    color: String,
    location: String,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
    advanced: bool,
}

impl PreparedCriteria {
    /// Normalizes `criteria` into matching keys.
    #[must_use]
    pub fn new(criteria: &FilterCriteria) -> Self {
        Self {
            vehicle_filtered: !criteria.vehicle_number.is_empty(),
            chassis_filtered: !criteria.chassis_number.is_empty(),
            vehicle_key: normalize(&criteria.vehicle_number),
            chassis_key: normalize_chassis(&criteria.chassis_number),
            make: criteria.make.to_lowercase(),
            color: criteria.color.to_lowercase(),
            location: criteria.location.to_lowercase(),
            from: criteria.date_from.map(start_of_day),
            to: criteria.date_to.map(start_of_day),
            advanced: criteria.is_advanced_search,
        }
    }

    /// Returns `true` if `record` passes every active filter.
    #[must_use]
    pub fn matches(&self, record: &VehicleRecord) -> bool {
        self.identity_matches(record) && (!self.advanced || self.advanced_matches(record))
    }

    /// Plate / chassis check.
    ///
    /// When both identity filters are supplied a record only has to satisfy
    /// one of them.
    #[must_use]
    pub fn identity_matches(&self, record: &VehicleRecord) -> bool {
        if !self.vehicle_filtered && !self.chassis_filtered {
            return true;
        }

        (self.vehicle_filtered && self.vehicle_matches(record))
            || (self.chassis_filtered && self.chassis_matches(record))
    }

    fn vehicle_matches(&self, record: &VehicleRecord) -> bool {
        self.vehicle_key.is_empty()
            || normalize(field(record.vehicle_number.as_ref())).contains(&self.vehicle_key)
    }

    fn chassis_matches(&self, record: &VehicleRecord) -> bool {
        self.chassis_key.is_empty()
            || normalize_chassis(field(record.chassis_number.as_ref())).contains(&self.chassis_key)
    }

    /// Make, color, location, and theft date range.
    #[must_use]
    pub fn advanced_matches(&self, record: &VehicleRecord) -> bool {
        equals_lowercase(&self.make, record.make.as_ref())
            && equals_lowercase(&self.color, record.color.as_ref())
            && (self.location.is_empty()
                || field(record.theft_location.as_ref())
                    .to_lowercase()
                    .contains(&self.location))
            && self.date_matches(record)
    }

    fn date_matches(&self, record: &VehicleRecord) -> bool {
        if self.from.is_none() && self.to.is_none() {
            return true;
        }

        let Some(theft) = theft_instant(record) else {
            return false;
        };

        self.from.is_none_or(|from| theft >= from) && self.to.is_none_or(|to| theft <= to)
    }
}

fn field(value: Option<&String>) -> &str {
    value.map_or("", String::as_str)
}

fn equals_lowercase(expected: &str, actual: Option<&String>) -> bool {
    expected.is_empty() || field(actual).to_lowercase() == expected
}

/// Returns `true` if `record` satisfies `criteria`.
///
/// Prefer [`PreparedCriteria`] when testing many records against the same
/// criteria.
#[must_use]
pub fn matches(record: &VehicleRecord, criteria: &FilterCriteria) -> bool {
    PreparedCriteria::new(criteria).matches(record)
}

/// Returns the records that satisfy `criteria`, in input order.
#[must_use]
pub fn filter_vehicles<'a>(
    records: &'a [VehicleRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a VehicleRecord> {
    let prepared = PreparedCriteria::new(criteria);
    records.iter().filter(|r| prepared.matches(r)).collect()
}
