#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use maplog::locate::{EnvLocation, LocationProvider};
use maplog::types::{Coords, Workout, WorkoutDetails};
use maplog::{app, cli};

#[macro_use]
extern crate maplog;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    maplog::utils::init_logging(cli.verbose, cli.quiet);

    let mut app = app::App::open(cli.store);

    match cli.cmd {
        Some(cli::Cmd::Add {
            kind,
            distance,
            duration,
            cadence,
            elevation,
            lat,
            lng,
        }) => {
            let coords = resolve_coords(lat, lng)?;
            dlog!(
                "mode=add kind={} lat={} lng={}",
                kind.as_str(),
                coords.lat,
                coords.lng
            );

            let input = app::WorkoutInput {
                kind,
                coords,
                distance_km: distance,
                duration_min: duration,
                cadence_spm: cadence,
                elevation_gain_m: elevation,
            };
            let workout = app.new_workout(&input)?;
            println!("{}", workout_line(workout));
            Ok(())
        }
        Some(cli::Cmd::Visit { id }) => {
            dlog!("mode=visit id={id}");
            let workout = app.visit(&id)?;
            let Coords { lat, lng } = workout.coords();
            println!("panning to ({lat:.4}, {lng:.4})");
            println!("{}", workout_line(workout));
            Ok(())
        }
        Some(cli::Cmd::Reset) => {
            dlog!("mode=reset");
            app.reset()?;
            println!("workout log cleared");
            Ok(())
        }
        Some(cli::Cmd::List) | None => {
            dlog!("mode=list workouts={}", app.workouts().count());
            if app.is_empty() {
                println!("no workouts logged yet");
                return Ok(());
            }

            for (i, w) in app.workouts().enumerate() {
                println!("{}\t{}", i + 1, workout_line(w));
            }
            Ok(())
        }
    }
}

/// Both flags or neither: a lone --lat/--lng is already rejected by the
/// argument parser, so the fallback is the one-shot location provider.
fn resolve_coords(lat: Option<f64>, lng: Option<f64>) -> Result<Coords> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => Ok(Coords { lat, lng }),
        _ => EnvLocation.current_position(),
    }
}

fn workout_line(w: &Workout) -> String {
    let metric = match *w.details() {
        WorkoutDetails::Running {
            cadence_spm,
            pace_min_per_km,
        } => format!("{pace_min_per_km:.1} min/km\t{cadence_spm:.0} spm"),
        WorkoutDetails::Cycling {
            elevation_gain_m,
            speed_km_per_h,
        } => format!("{speed_km_per_h:.1} km/h\t{elevation_gain_m:.0} m"),
    };

    let Coords { lat, lng } = w.coords();
    format!(
        "{}\t{} {}\t{} km\t{} min\t{metric}\t({lat:.4}, {lng:.4})",
        w.id(),
        w.kind().marker(),
        w.description(),
        w.distance_km(),
        w.duration_min()
    )
}
