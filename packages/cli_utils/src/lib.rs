#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared CLI utilities for the hotlist toolchain.
//!
//! Provides [`init_logger`], which sets up `indicatif-log-bridge` so that
//! `log::info!` and friends are suspended while spinners redraw, plus the
//! [`Spinner`] shown while the fixture loads or a search runs.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use indicatif::{MultiProgress, ProgressDrawTarget};

/// A transient status spinner (e.g. "Searching...").
///
/// The spinner is cleared from the terminal when dropped, so an early `?`
/// return never leaves a stale line behind.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Adds a spinner with `message` to `multi` and starts ticking.
    #[must_use]
    pub fn start(multi: &MultiProgress, message: &str) -> Self {
        let bar = multi.add(ProgressBar::new_spinner());
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar }
    }

    /// Stops the spinner and removes it from the terminal.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

/// Initializes the global logger wrapped in `indicatif-log-bridge` so that
/// `log::info!` and friends are suspended while spinners redraw.
///
/// Returns the [`MultiProgress`] that all spinners must be added to.
#[must_use]
pub fn init_logger() -> MultiProgress {
    let multi = MultiProgress::new();

    // Build the pretty-env-logger logger manually so we can wrap it.
    let logger = pretty_env_logger::formatted_builder()
        .parse_env("RUST_LOG")
        .build();
    let level = logger.filter();

    indicatif_log_bridge::LogWrapper::new(multi.clone(), logger)
        .try_init()
        .ok(); // Ignore error if logger was already set (e.g., in tests)

    log::set_max_level(level);

    multi
}
