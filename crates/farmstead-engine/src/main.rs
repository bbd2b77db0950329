//! Console binary for the Farmstead simulation.
//!
//! Loads configuration, builds the farm, and plays one run on the terminal:
//! numbered menus on stdout, answers from stdin, logs on stderr.
//!
//! # Startup Sequence
//!
//! 1. Load configuration (`FARMSTEAD_CONFIG`, then `farmstead-config.yaml`,
//!    then built-in defaults)
//! 2. Initialize structured logging (tracing)
//! 3. Build the farm
//! 4. Print the banner and run the session
//! 5. Log the result and exit with status 0 on a win, 1 otherwise

mod console;
mod error;
mod render;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use farmstead_core::config::{CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE, FarmConfig};
use farmstead_core::Farm;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::console::ConsolePrompter;
use crate::error::EngineError;
use crate::render::{BANNER, ConsoleReporter};

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the farm cannot be
/// built, or the terminal fails.
fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    info!(
        mode = ?config.game.mode,
        day_limit = config.game.day_limit,
        actions_per_day = config.game.actions_per_day,
        "Configuration loaded"
    );

    // 3. Build the farm.
    let mut farm = Farm::from_config(&config).map_err(EngineError::from)?;

    // 4. Play.
    let mut prompter = ConsolePrompter::new(io::stdin().lock(), io::stdout());
    let mut reporter = ConsoleReporter::new(io::stdout());
    reporter.print(BANNER);

    let result = farmstead_core::run(&mut farm, &mut prompter, &mut reporter);
    reporter.finish().map_err(EngineError::from)?;

    // 5. Log the result.
    let outcome = result.map_err(|e| {
        warn!(error = %e, day = farm.day(), "Run stopped");
        EngineError::from(e)
    })?;
    info!(?outcome, day = farm.day(), "Run finished");
    if outcome.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Load configuration from `FARMSTEAD_CONFIG` or `farmstead-config.yaml`.
///
/// A path named by `FARMSTEAD_CONFIG` must exist. Without it, the default
/// file is used when present and built-in defaults otherwise. The result is
/// validated before it is returned.
fn load_config() -> Result<FarmConfig, EngineError> {
    let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    let config = match explicit {
        Some(path) => FarmConfig::from_file(&path)?,
        None if default_path.exists() => FarmConfig::from_file(default_path)?,
        None => {
            let mut config = FarmConfig::default();
            config.apply_env_overrides()?;
            config
        }
    };
    config.validate()?;
    Ok(config)
}
