// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Beacon - broadcast area aggregation for emergency alerts.
//!
//! This is the binary entry point. It loads configuration, installs the
//! tracing subscriber, and runs one subcommand against the configured
//! area library.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod areas;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Beacon - broadcast area aggregation for emergency alerts.
#[derive(Parser, Debug)]
#[command(name = "beacon", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Reduce area ids to the minimal broadcast target set.
    Aggregate {
        /// Area ids, e.g. `wd20-E05004648`.
        #[arg(required = true)]
        ids: Vec<String>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Show polygon geometry for area ids.
    Polygons {
        /// Merge and simplify for preview instead of exact geometry.
        #[arg(long)]
        simple: bool,
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let loaded = match &cli.config {
        Some(path) => beacon_config::load_and_validate_path(path),
        None => beacon_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            beacon_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level);

    let result = match cli.command {
        Some(Commands::Aggregate { ids, json }) => areas::run_aggregate(&config, &ids, json).await,
        Some(Commands::Polygons { simple, ids }) => {
            areas::run_polygons(&config, &ids, simple).await
        }
        Some(Commands::Config) => areas::print_config(&config),
        None => {
            println!("beacon: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("beacon: {e}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("beacon={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Only jemalloc can advance the stats epoch.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = beacon_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.logging.level, "info");
        assert!(config.areas.library_path.is_none());
    }

    #[test]
    fn cli_parses_polygons_flags() {
        let cli = Cli::try_parse_from(["beacon", "polygons", "--simple", "lad20-A", "lad20-B"])
            .unwrap();
        match cli.command {
            Some(Commands::Polygons { simple, ids }) => {
                assert!(simple);
                assert_eq!(ids, ["lad20-A", "lad20-B"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn aggregate_requires_ids() {
        assert!(Cli::try_parse_from(["beacon", "aggregate"]).is_err());
    }
}
