#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the stolen vehicle hotlist.
//!
//! Loads the hotlist fixture, shows the dashboard, and runs plate / chassis
//! searches (optionally narrowed by make, color, theft location, and theft
//! date range) with results ranked by detection confidence and recency.
//!
//! Uses `indicatif-log-bridge` (via [`hotlist_cli_utils::init_logger`]) so
//! that `log` output and the loading/searching spinners never fight for the
//! terminal.

mod actions;
mod commands;
mod interactive;
mod render;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use hotlist_fixture::{FixtureCache, resolve_data_path};
use hotlist_vehicle_models::{FilterCriteria, SearchMode};

use crate::commands::SearchOptions;

/// Search the stolen vehicle hotlist.
#[derive(Parser)]
#[command(name = "hotlist")]
#[command(about = "Search the stolen vehicle hotlist")]
struct Cli {
    /// Path to the hotlist JSON fixture (default: `$HOTLIST_DATA`, then
    /// `data/data.json`).
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show hotlist stats and recent detections.
    Dashboard,

    /// Search for stolen vehicles.
    Search(SearchArgs),

    /// Show full details for a vehicle.
    Show {
        /// Plate to look up (formatting and case are ignored).
        vehicle_number: String,
    },

    /// Show where a vehicle was last seen.
    Map {
        /// Plate to look up.
        vehicle_number: String,
    },

    /// Notify the team about a vehicle.
    Notify {
        /// Plate to report.
        vehicle_number: String,
    },

    /// Prompt for searches until you quit.
    Interactive,
}

/// Arguments for the `search` subcommand.
#[derive(Args, Debug)]
struct SearchArgs {
    /// Plate or plate fragment; spaces, dashes, and case are ignored.
    #[arg(long, default_value = "")]
    vehicle_number: String,

    /// Chassis number or its trailing digits.
    #[arg(long, default_value = "")]
    chassis_number: String,

    /// `basic` applies only plate/chassis; `advanced` also applies the
    /// filters below.
    #[arg(long, default_value = "basic")]
    mode: SearchMode,

    /// Exact make, e.g. "Honda" (advanced mode).
    #[arg(long, default_value = "")]
    make: String,

    /// Exact color (advanced mode).
    #[arg(long, default_value = "")]
    color: String,

    /// Theft location fragment (advanced mode).
    #[arg(long, default_value = "")]
    location: String,

    /// Stolen on or after this date, `YYYY-MM-DD` (advanced mode).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Stolen on or before this date, `YYYY-MM-DD` (advanced mode).
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Print at most this many results (at least 1).
    #[arg(long)]
    limit: Option<NonZeroUsize>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    fn into_options(self) -> SearchOptions {
        let criteria = FilterCriteria {
            vehicle_number: self.vehicle_number.trim().to_string(),
            chassis_number: self.chassis_number.trim().to_string(),
            make: self.make.trim().to_string(),
            color: self.color.trim().to_string(),
            location: self.location.trim().to_string(),
            date_from: self.from,
            date_to: self.to,
            is_advanced_search: false,
        }
        .with_mode(self.mode);

        SearchOptions {
            criteria,
            limit: self.limit.map(NonZeroUsize::get),
            json: self.json,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = hotlist_cli_utils::init_logger();
    let cli = Cli::parse();

    let cache = FixtureCache::new(resolve_data_path(cli.data.as_deref()));
    log::debug!("Using hotlist data at {}", cache.path().display());

    match cli.command {
        Commands::Dashboard => commands::dashboard(&cache, &multi)?,
        Commands::Search(args) => commands::search(&cache, &multi, &args.into_options())?,
        Commands::Show { vehicle_number } => commands::show(&cache, &multi, &vehicle_number)?,
        Commands::Map { vehicle_number } => commands::map(&cache, &multi, &vehicle_number)?,
        Commands::Notify { vehicle_number } => commands::notify(&vehicle_number),
        Commands::Interactive => interactive::run(&cache, &multi)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("hotlist").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn search_defaults_to_basic_mode() {
        let Commands::Search(args) = parse(&["search", "--vehicle-number", " mh12 "]).command else {
            panic!("expected search");
        };
        let options = args.into_options();
        assert_eq!(options.criteria.vehicle_number, "mh12");
        assert!(!options.criteria.is_advanced_search);
        assert!(!options.json);
    }

    #[test]
    fn advanced_search_parses_dates() {
        let cli = parse(&[
            "--data",
            "fixtures/hotlist.json",
            "search",
            "--mode",
            "advanced",
            "--make",
            "Honda",
            "--from",
            "2023-01-01",
            "--to",
            "2023-06-30",
            "--limit",
            "5",
            "--json",
        ]);
        assert_eq!(cli.data, Some(PathBuf::from("fixtures/hotlist.json")));

        let Commands::Search(args) = cli.command else {
            panic!("expected search");
        };
        let options = args.into_options();
        assert!(options.criteria.is_advanced_search);
        assert_eq!(options.criteria.make, "Honda");
        assert_eq!(options.criteria.date_from, NaiveDate::from_ymd_opt(2023, 1, 1));
        assert_eq!(options.criteria.date_to, NaiveDate::from_ymd_opt(2023, 6, 30));
        assert_eq!(options.limit, Some(5));
        assert!(options.json);
    }

    #[test]
    fn rejects_bad_mode_and_date() {
        let bad_mode = ["hotlist", "search", "--mode", "expert"];
        let bad_date = ["hotlist", "search", "--from", "01/02/2023"];
        assert!(Cli::try_parse_from(bad_mode).is_err());
        assert!(Cli::try_parse_from(bad_date).is_err());
    }

    #[test]
    fn rejects_zero_limit() {
        assert!(Cli::try_parse_from(["hotlist", "search", "--limit", "0"]).is_err());
        let Commands::Search(args) = parse(&["search", "--limit", "1"]).command else {
            panic!("expected search");
        };
        assert_eq!(args.into_options().limit, Some(1));
    }

    #[test]
    fn data_flag_is_global() {
        let cli = parse(&["show", "MH12AB1234", "--data", "other.json"]);
        assert_eq!(cli.data, Some(PathBuf::from("other.json")));
        assert!(matches!(cli.command, Commands::Show { vehicle_number } if vehicle_number == "MH12AB1234"));
    }
}
