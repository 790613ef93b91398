use crate::types::WorkoutKind;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

const DEFAULT_STORE: &str = "workouts.json";

#[derive(Parser, Debug)]
#[command(
    name = "maplog",
    about = "Log running and cycling workouts at map coordinates"
)]
pub struct Cli {
    /// Path of the persisted workout log (a single JSON blob).
    #[arg(long, default_value = DEFAULT_STORE, global = true)]
    pub store: PathBuf,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Record a workout. Without --lat/--lng the current position is taken
    /// from the MAPLOG_POSITION environment variable.
    Add {
        #[arg(value_enum)]
        kind: WorkoutKind,

        /// Distance in km
        #[arg(long)]
        distance: f64,

        /// Duration in minutes
        #[arg(long)]
        duration: f64,

        /// Cadence in steps/min (running only)
        #[arg(long)]
        cadence: Option<f64>,

        /// Elevation gain in meters, negative for net descent (cycling only)
        #[arg(long, allow_negative_numbers = true)]
        elevation: Option<f64>,

        /// Latitude in degrees
        #[arg(long, allow_negative_numbers = true, requires = "lng")]
        lat: Option<f64>,

        /// Longitude in degrees
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lng: Option<f64>,
    },

    /// Print the workout list (also the default when no command is given).
    List,

    /// Select a workout by id: counts the visit and prints where the map
    /// would pan.
    Visit { id: String },

    /// Delete every workout and the persisted log file.
    Reset,
}
