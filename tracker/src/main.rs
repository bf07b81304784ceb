//! Great Work slot tracker CLI.
//!
//! Edits the city data file (`cities.json`) through the same record
//! operations the web UI uses. Every command is a whole-file load → mutate →
//! save cycle.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracker::core::error::TrackError;
use tracker::core::ops::{add_city, remove_city, set_building_count, set_neighbors};
use tracker::core::types::{BuildingKind, CityRecord};
use tracker::io::config::{TrackerConfig, load_config, write_config};
use tracker::io::store::{load_cities, write_cities};

#[derive(Parser)]
#[command(name = "tracker", version, about = "Great Work building slot tracker")]
struct Cli {
    /// Path to the config file.
    #[arg(long, default_value = "tracker.toml")]
    config: PathBuf,

    /// Override the city data file from the config.
    #[arg(long)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the config and an empty city data file if missing.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Print all tracked cities.
    List,
    /// Add a city.
    Add { name: String },
    /// Remove a city.
    Remove { name: String },
    /// Set the occupant count for one building of a city.
    SetBuilding {
        city: String,
        /// Building kind (snake_case, e.g. `art_museum`).
        kind: BuildingKind,
        /// Occupant count; -1 marks the building as not built.
        #[arg(allow_hyphen_values = true)]
        count: i64,
    },
    /// Replace the list of nearby cities for a city.
    SetNeighbors {
        city: String,
        neighbors: Vec<String>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracker::logging::init();
    let cli = Cli::parse();
    let data_file = resolve_data_file(&cli)?;

    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, &data_file, force),
        Command::List => cmd_list(&data_file),
        Command::Add { name } => mutate(&data_file, |cities| add_city(cities, &name)),
        Command::Remove { name } => mutate(&data_file, |cities| remove_city(cities, &name)),
        Command::SetBuilding { city, kind, count } => {
            mutate(&data_file, |cities| {
                set_building_count(cities, &city, kind, count)
            })
        }
        Command::SetNeighbors { city, neighbors } => {
            mutate(&data_file, |cities| set_neighbors(cities, &city, neighbors))
        }
    }
}

/// CLI override wins over the config file.
fn resolve_data_file(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.data_file {
        return Ok(path.clone());
    }
    let cfg = load_config(&cli.config)?;
    Ok(cfg.data_file)
}

fn cmd_init(config_path: &Path, data_file: &Path, force: bool) -> Result<()> {
    if force || !config_path.exists() {
        write_config(config_path, &TrackerConfig::default())
            .with_context(|| format!("write {}", config_path.display()))?;
    }
    if force || !data_file.exists() {
        write_cities(data_file, &[]).with_context(|| format!("write {}", data_file.display()))?;
    }
    Ok(())
}

fn cmd_list(data_file: &Path) -> Result<()> {
    let cities = load_cities(data_file)?;
    for city in &cities {
        println!(
            "{:<24} {:<7} {:>3} works   {}",
            city.name,
            city.highlight,
            occupied_works(city),
            city.neighbors.join(",")
        );
    }
    Ok(())
}

/// Total Great Works housed across the city's built buildings.
fn occupied_works(city: &CityRecord) -> i64 {
    city.buildings.values().filter(|count| **count > 0).sum()
}

/// Load, apply one record operation, save.
fn mutate<F>(data_file: &Path, op: F) -> Result<()>
where
    F: FnOnce(&mut Vec<CityRecord>) -> Result<(), TrackError>,
{
    let mut cities = load_cities(data_file)?;
    op(&mut cities)?;
    write_cities(data_file, &cities)?;
    Ok(())
}
