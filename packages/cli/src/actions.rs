//! Demo-only vehicle actions.
//!
//! Neither action talks to anything: the map pin always lands on the fixed
//! Pune demo coordinates, and notifying the team only produces the
//! acknowledgement an operator would see.

/// Fixed `(latitude, longitude)` used for every map pin.
pub const DEMO_COORDINATES: (f64, f64) = (18.5204, 73.8567);

/// Zoom level used for map links.
const MAP_ZOOM: u8 = 13;

/// A labelled map pin.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPin {
    /// Location text the pin stands for.
    pub label: String,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
}

impl MapPin {
    /// Pins `location` at the demo coordinates. No geocoding happens.
    #[must_use]
    pub fn for_location(location: &str) -> Self {
        let (latitude, longitude) = DEMO_COORDINATES;
        Self {
            label: location.to_string(),
            latitude,
            longitude,
        }
    }

    /// OpenStreetMap link centred on the pin.
    #[must_use]
    pub fn osm_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={MAP_ZOOM}/{lat}/{lon}",
            lat = self.latitude,
            lon = self.longitude,
        )
    }
}

impl std::fmt::Display for MapPin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vehicle Location: {}\n  Coordinates: {}, {}\n  Map: {}",
            self.label,
            self.latitude,
            self.longitude,
            self.osm_url()
        )
    }
}

/// Acknowledges a team notification for `vehicle_number`. Nothing is sent.
#[must_use]
pub fn notify_team(vehicle_number: &str) -> String {
    log::info!("Team notification requested for {vehicle_number}");
    format!("Notification sent to team about vehicle: {vehicle_number}")
}
