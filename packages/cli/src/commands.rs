//! Subcommand implementations.

use std::sync::Arc;

use hotlist_cli_utils::{MultiProgress, Spinner};
use hotlist_fixture::{Fixture, FixtureCache, FixtureError};
use hotlist_search::{normalize, search_vehicles};
use hotlist_vehicle_models::{FilterCriteria, VehicleRecord};

use crate::actions::{self, MapPin};
use crate::render;

/// Options for a one-shot search.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// What to filter on.
    pub criteria: FilterCriteria,
    /// Maximum number of results to print.
    pub limit: Option<usize>,
    /// Print ranked records as JSON instead of a table.
    pub json: bool,
}

/// Returns the cached fixture, showing a spinner if it has to be read.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the fixture cannot be loaded.
pub fn load(cache: &FixtureCache, multi: &MultiProgress) -> Result<Arc<Fixture>, FixtureError> {
    if cache.is_loaded() {
        return cache.get();
    }

    let spinner = Spinner::start(multi, "Loading hotlist…");
    let fixture = cache.get()?;
    spinner.finish();
    Ok(fixture)
}

/// Prints dashboard stats and recent detections.
///
/// # Errors
///
/// Returns an error if the fixture cannot be loaded.
pub fn dashboard(cache: &FixtureCache, multi: &MultiProgress) -> Result<(), FixtureError> {
    let fixture = load(cache, multi)?;
    println!("{}", render::dashboard(&fixture));
    Ok(())
}

/// Names of advanced filters that are set but will be ignored because the
/// criteria are in basic mode.
#[must_use]
pub fn ignored_filters(criteria: &FilterCriteria) -> Vec<&'static str> {
    if criteria.is_advanced_search {
        return Vec::new();
    }

    let mut ignored = Vec::new();
    if !criteria.make.is_empty() {
        ignored.push("make");
    }
    if !criteria.color.is_empty() {
        ignored.push("color");
    }
    if !criteria.location.is_empty() {
        ignored.push("location");
    }
    if criteria.has_date_bounds() {
        ignored.push("date range");
    }
    ignored
}

/// Runs a search over the fixture's vehicles behind a spinner.
#[must_use]
pub fn run_search<'a>(
    fixture: &'a Fixture,
    criteria: &FilterCriteria,
    multi: &MultiProgress,
) -> Vec<&'a VehicleRecord> {
    let ignored = ignored_filters(criteria);
    if !ignored.is_empty() {
        log::warn!(
            "Ignoring {} in basic mode (use --mode advanced)",
            ignored.join(", ")
        );
    }

    let spinner = Spinner::start(multi, "Searching…");
    let results = search_vehicles(&fixture.vehicles, criteria);
    spinner.finish();

    log::info!("Search returned {} vehicles", results.len());
    results
}

/// Runs a search and prints the ranked results.
///
/// # Errors
///
/// Returns an error if the fixture cannot be loaded or the results cannot
/// be serialized.
pub fn search(
    cache: &FixtureCache,
    multi: &MultiProgress,
    options: &SearchOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = load(cache, multi)?;
    let mut results = run_search(&fixture, &options.criteria, multi);

    if let Some(limit) = options.limit {
        results.truncate(limit);
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("{}", render::results_list(&results));
    }
    Ok(())
}

/// Finds the vehicle a user most likely means by `vehicle_number`.
///
/// An exact plate match (after normalization) wins; otherwise the
/// best-ranked fuzzy match is returned.
#[must_use]
pub fn find_vehicle<'a>(
    records: &'a [VehicleRecord],
    vehicle_number: &str,
) -> Option<&'a VehicleRecord> {
    let key = normalize(vehicle_number);
    if key.is_empty() {
        return None;
    }

    let candidates = search_vehicles(records, &FilterCriteria::by_vehicle_number(vehicle_number));
    candidates
        .iter()
        .copied()
        .find(|r| normalize(r.vehicle_number.as_deref().unwrap_or_default()) == key)
        .or_else(|| candidates.first().copied())
}

fn report_missing(vehicle_number: &str) {
    println!("No vehicle on the hotlist matches {vehicle_number:?}.");
}

/// Prints the detail view for a vehicle.
///
/// # Errors
///
/// Returns an error if the fixture cannot be loaded.
pub fn show(
    cache: &FixtureCache,
    multi: &MultiProgress,
    vehicle_number: &str,
) -> Result<(), FixtureError> {
    let fixture = load(cache, multi)?;
    match find_vehicle(&fixture.vehicles, vehicle_number) {
        Some(record) => println!("{}", render::vehicle_details(record)),
        None => report_missing(vehicle_number),
    }
    Ok(())
}

/// Pin for a vehicle: its last detection location, else its theft location.
#[must_use]
pub fn pin_for(record: &VehicleRecord) -> MapPin {
    MapPin::for_location(
        record
            .display_location()
            .or(record.vehicle_number.as_deref())
            .unwrap_or_default(),
    )
}

/// Prints the map pin for a vehicle.
///
/// # Errors
///
/// Returns an error if the fixture cannot be loaded.
pub fn map(
    cache: &FixtureCache,
    multi: &MultiProgress,
    vehicle_number: &str,
) -> Result<(), FixtureError> {
    let fixture = load(cache, multi)?;
    match find_vehicle(&fixture.vehicles, vehicle_number) {
        Some(record) => println!("{}", pin_for(record)),
        None => report_missing(vehicle_number),
    }
    Ok(())
}

/// Prints the team notification acknowledgement.
pub fn notify(vehicle_number: &str) {
    println!("{}", actions::notify_team(vehicle_number));
}
