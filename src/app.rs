use crate::dlog;
use crate::store::WorkoutStore;
use crate::types::{Coords, Workout, WorkoutKind};
use anyhow::{Context, Result, bail};
use std::path::PathBuf;

/// Raw form input for one workout, as it comes off the CLI. Validated here
/// at the boundary; the entity constructors accept anything.
#[derive(Debug, Clone, Copy)]
pub struct WorkoutInput {
    pub kind: WorkoutKind,
    pub coords: Coords,
    pub distance_km: f64,
    pub duration_min: f64,
    /// Required for running.
    pub cadence_spm: Option<f64>,
    /// Required for cycling. May be zero or negative (net descent).
    pub elevation_gain_m: Option<f64>,
}

/// Top-level controller: owns the in-memory store and the path its blob
/// lives at. Every mutating operation persists before returning.
pub struct App {
    store: WorkoutStore,
    store_path: PathBuf,
}

impl App {
    pub fn open(store_path: PathBuf) -> Self {
        let store = WorkoutStore::load(&store_path);
        Self { store, store_path }
    }

    pub fn workouts(&self) -> impl Iterator<Item = &Workout> {
        self.store.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Validate, construct, append, persist. On invalid input nothing is
    /// constructed and nothing is written.
    pub fn new_workout(&mut self, input: &WorkoutInput) -> Result<&Workout> {
        validate(input)?;

        let workout = match input.kind {
            WorkoutKind::Running => {
                let cadence = input.cadence_spm.unwrap_or_default();
                Workout::running(input.coords, input.distance_km, input.duration_min, cadence)
            }
            WorkoutKind::Cycling => {
                let elevation = input.elevation_gain_m.unwrap_or_default();
                Workout::cycling(
                    input.coords,
                    input.distance_km,
                    input.duration_min,
                    elevation,
                )
            }
        };

        dlog!(
            "new_workout kind={} id={} distance_km={} duration_min={}",
            workout.kind().as_str(),
            workout.id(),
            input.distance_km,
            input.duration_min
        );

        let workout = self.store.add(workout);
        let id = workout.id().to_string();
        self.store.persist(&self.store_path)?;

        self.store
            .find_by_id(&id)
            .context("workout vanished after persist")
    }

    /// Resolve a list selection back to its entity and count the click.
    pub fn visit(&mut self, id: &str) -> Result<&Workout> {
        let Some(workout) = self.store.find_by_id_mut(id) else {
            bail!("no workout with id {id}");
        };
        workout.click();
        self.store.persist(&self.store_path)?;

        self.store
            .find_by_id(id)
            .context("workout vanished after persist")
    }

    /// Wipe the session and the persisted blob. Irreversible.
    pub fn reset(&mut self) -> Result<()> {
        tracing::info!(path = %self.store_path.display(), "resetting workout log");
        self.store.clear(&self.store_path)
    }
}

fn validate(input: &WorkoutInput) -> Result<()> {
    let positive = |v: f64| v.is_finite() && v > 0.0;

    if !positive(input.distance_km) || !positive(input.duration_min) {
        bail!("distance and duration have to be positive numbers");
    }

    match input.kind {
        WorkoutKind::Running => {
            let Some(cadence) = input.cadence_spm else {
                bail!("running needs --cadence");
            };
            if !positive(cadence) {
                bail!("cadence has to be a positive number");
            }
        }
        WorkoutKind::Cycling => {
            // Elevation gain may legitimately be negative: a ride can end
            // lower than it started.
            let Some(elevation) = input.elevation_gain_m else {
                bail!("cycling needs --elevation");
            };
            if !elevation.is_finite() {
                bail!("elevation has to be a number");
            }
        }
    }

    Ok(())
}
