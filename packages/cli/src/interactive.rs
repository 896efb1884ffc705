//! Interactive mode.
//!
//! Prompts for search criteria, lists ranked results, and lets the user
//! drill into a vehicle, pin it on the map, or notify the team. The fixture
//! is loaded once and reused across searches until the user reloads it.

use chrono::NaiveDate;
use dialoguer::{Input, Select};
use hotlist_cli_utils::MultiProgress;
use hotlist_fixture::FixtureCache;
use hotlist_vehicle_models::{FilterCriteria, SearchMode, VehicleRecord};

use crate::actions;
use crate::commands::{self, pin_for};
use crate::render;

/// Top-level menu entries.
enum MenuItem {
    BasicSearch,
    AdvancedSearch,
    Dashboard,
    Reload,
    Quit,
}

impl MenuItem {
    const ALL: &[Self] = &[
        Self::BasicSearch,
        Self::AdvancedSearch,
        Self::Dashboard,
        Self::Reload,
        Self::Quit,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::BasicSearch => "Search by plate / chassis",
            Self::AdvancedSearch => "Advanced search",
            Self::Dashboard => "Show dashboard",
            Self::Reload => "Reload hotlist data",
            Self::Quit => "Quit",
        }
    }
}

/// Actions offered on the vehicle detail view.
enum DetailAction {
    ViewOnMap,
    NotifyTeam,
    Back,
}

impl DetailAction {
    const ALL: &[Self] = &[Self::ViewOnMap, Self::NotifyTeam, Self::Back];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::ViewOnMap => "View on map",
            Self::NotifyTeam => "Notify team",
            Self::Back => "Back to results",
        }
    }
}

/// Parses an optional `YYYY-MM-DD` date typed at a prompt.
///
/// # Errors
///
/// Returns a user-facing message if non-empty input is not a valid date.
pub fn parse_date_input(input: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("{trimmed:?} is not a YYYY-MM-DD date"))
}

fn prompt_text(prompt: &str) -> Result<String, dialoguer::Error> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn prompt_date(prompt: &str) -> Result<Option<NaiveDate>, dialoguer::Error> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .validate_with(|input: &String| parse_date_input(input).map(|_| ()))
        .interact_text()?;
    // Already validated above.
    Ok(parse_date_input(&value).unwrap_or(None))
}

fn prompt_criteria(mode: SearchMode) -> Result<FilterCriteria, dialoguer::Error> {
    let mut criteria = FilterCriteria {
        vehicle_number: prompt_text("Vehicle number (blank for any)")?,
        chassis_number: prompt_text("Chassis number or last digits (blank for any)")?,
        ..FilterCriteria::default()
    }
    .with_mode(mode);

    if mode.is_advanced() {
        criteria.make = prompt_text("Make")?;
        criteria.color = prompt_text("Color")?;
        criteria.location = prompt_text("Theft location contains")?;
        criteria.date_from = prompt_date("Stolen on or after (YYYY-MM-DD)")?;
        criteria.date_to = prompt_date("Stolen on or before (YYYY-MM-DD)")?;
    }

    Ok(criteria)
}

fn show_details(record: &VehicleRecord) -> Result<(), dialoguer::Error> {
    println!();
    println!("{}", render::vehicle_details(record));

    let labels: Vec<&str> = DetailAction::ALL.iter().map(DetailAction::label).collect();
    loop {
        let idx = Select::new()
            .with_prompt("Action")
            .items(&labels)
            .default(DetailAction::ALL.len() - 1)
            .interact()?;

        match DetailAction::ALL[idx] {
            DetailAction::ViewOnMap => println!("{}", pin_for(record)),
            DetailAction::NotifyTeam => println!(
                "{}",
                actions::notify_team(record.vehicle_number.as_deref().unwrap_or_default())
            ),
            DetailAction::Back => return Ok(()),
        }
    }
}

fn browse_results(results: &[&VehicleRecord]) -> Result<(), dialoguer::Error> {
    println!("{}", render::results_list(results));
    if results.is_empty() {
        return Ok(());
    }

    let mut labels: Vec<String> = results.iter().map(|r| render::result_summary(r)).collect();
    labels.push("New search".to_string());

    loop {
        let idx = Select::new()
            .with_prompt("View more")
            .items(&labels)
            .default(0)
            .interact()?;

        match results.get(idx) {
            Some(record) => show_details(record)?,
            None => return Ok(()),
        }
    }
}

fn search(
    cache: &FixtureCache,
    multi: &MultiProgress,
    mode: SearchMode,
) -> Result<(), Box<dyn std::error::Error>> {
    let criteria = prompt_criteria(mode)?;
    let fixture = commands::load(cache, multi)?;
    let results = commands::run_search(&fixture, &criteria, multi);
    browse_results(&results)?;
    Ok(())
}

/// Runs the interactive session until the user quits.
///
/// # Errors
///
/// Returns an error if a prompt fails (e.g. no terminal) or the fixture
/// cannot be loaded.
pub fn run(cache: &FixtureCache, multi: &MultiProgress) -> Result<(), Box<dyn std::error::Error>> {
    println!("Stolen Vehicle Hotlist");
    println!("Data: {}", cache.path().display());
    println!();

    let labels: Vec<&str> = MenuItem::ALL.iter().map(MenuItem::label).collect();

    loop {
        let idx = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        match MenuItem::ALL[idx] {
            MenuItem::BasicSearch => search(cache, multi, SearchMode::Basic)?,
            MenuItem::AdvancedSearch => search(cache, multi, SearchMode::Advanced)?,
            MenuItem::Dashboard => commands::dashboard(cache, multi)?,
            MenuItem::Reload => {
                cache.invalidate();
                let fixture = commands::load(cache, multi)?;
                println!("Reloaded {} vehicles.", fixture.vehicles.len());
            }
            MenuItem::Quit => return Ok(()),
        }

        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_date_input_is_none() {
        assert_eq!(parse_date_input("   "), Ok(None));
    }

    #[test]
    fn parses_date_input() {
        assert_eq!(
            parse_date_input(" 2023-03-10 "),
            Ok(NaiveDate::from_ymd_opt(2023, 3, 10))
        );
    }

    #[test]
    fn rejects_bad_date_input() {
        let err = parse_date_input("10/03/2023").unwrap_err();
        assert!(err.contains("YYYY-MM-DD"));
    }

    #[test]
    fn menu_labels_are_unique() {
        let mut labels: Vec<&str> = MenuItem::ALL.iter().map(MenuItem::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), MenuItem::ALL.len());
    }
}
