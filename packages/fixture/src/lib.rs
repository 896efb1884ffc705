#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Loads and caches the stolen vehicle hotlist fixture.
//!
//! The fixture is a single JSON document with `vehicles`, `stats`, and
//! `recentDetections` sections (see [`Fixture`]). Only `vehicles` feeds the
//! search engine; the other sections back the dashboard.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

pub use hotlist_vehicle_models::Fixture;

/// Environment variable that overrides the default fixture location.
pub const DATA_PATH_ENV: &str = "HOTLIST_DATA";

/// Fixture location used when neither a flag nor [`DATA_PATH_ENV`] is set.
pub const DEFAULT_DATA_PATH: &str = "data/data.json";

/// Errors that can occur while loading a fixture.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("Failed to read fixture {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The fixture is not valid JSON or has the wrong shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Resolves the fixture path: an explicit override, then the
/// [`DATA_PATH_ENV`] environment variable, then [`DEFAULT_DATA_PATH`].
#[must_use]
pub fn resolve_data_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(
        || {
            std::env::var(DATA_PATH_ENV)
                .map_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from)
        },
        Path::to_path_buf,
    )
}

/// Parses a fixture document from a JSON string.
///
/// # Errors
///
/// Returns [`FixtureError::Json`] if the document is malformed.
pub fn parse_fixture(json: &str) -> Result<Fixture, FixtureError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses the fixture at `path`.
///
/// # Errors
///
/// Returns [`FixtureError::Io`] if the file cannot be read, or
/// [`FixtureError::Json`] if it cannot be parsed.
pub fn load_fixture(path: &Path) -> Result<Fixture, FixtureError> {
    log::debug!("Reading fixture from {}", path.display());
    let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let fixture = parse_fixture(&json)?;
    log::info!(
        "Loaded {} vehicles and {} recent detections from {}",
        fixture.vehicles.len(),
        fixture.recent_detections.len(),
        path.display()
    );
    Ok(fixture)
}

/// Session cache for a fixture file.
///
/// The first [`FixtureCache::get`] reads the file; later calls hand out the
/// same [`Arc`] until [`FixtureCache::invalidate`] is called. Failed loads
/// are not cached.
#[derive(Debug)]
pub struct FixtureCache {
    path: PathBuf,
    cached: Mutex<Option<Arc<Fixture>>>,
}

impl FixtureCache {
    /// Creates an empty cache for the fixture at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: Mutex::new(None),
        }
    }

    /// Path of the cached fixture.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the cached fixture, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns any [`FixtureError`] from [`load_fixture`].
    pub fn get(&self) -> Result<Arc<Fixture>, FixtureError> {
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(fixture) = cached.as_ref() {
            log::trace!("Fixture cache hit for {}", self.path.display());
            return Ok(Arc::clone(fixture));
        }

        let fixture = Arc::new(load_fixture(&self.path)?);
        *cached = Some(Arc::clone(&fixture));
        Ok(fixture)
    }

    /// Returns `true` if a fixture is currently cached.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cached
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Drops the cached fixture so the next [`FixtureCache::get`] re-reads it.
    pub fn invalidate(&self) {
        self.cached
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}
