use crate::dlog;
use crate::types::Workout;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Ordered, session-scoped collection of workouts.
///
/// Insertion order is creation order and nothing ever removes a single
/// entry; the whole list only goes away through [`WorkoutStore::clear`].
/// Persistence is one JSON blob at one path, read at startup and rewritten
/// after every mutation.
#[derive(Debug, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from the persisted blob at `path`.
    ///
    /// A missing file means a fresh start. So does a blob that no longer
    /// parses: the log is not worth failing the whole invocation over, we
    /// warn and begin empty.
    pub fn load(path: &Path) -> Self {
        let blob = match fs::read_to_string(path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                dlog!("store_missing path={}", path.display());
                return Self::new();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), err = %e, "unreadable store, starting empty");
                return Self::new();
            }
        };

        match Self::restore(&blob) {
            Ok(store) => {
                dlog!("store_loaded path={} workouts={}", path.display(), store.len());
                store
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), err = %e, "corrupt store, starting empty");
                Self::new()
            }
        }
    }

    /// Parse a previously serialized blob back into a store.
    pub fn restore(blob: &str) -> Result<Self> {
        let workouts: Vec<Workout> =
            serde_json::from_str(blob).context("parsing workout store blob")?;
        Ok(Self { workouts })
    }

    /// Encode every workout, derived fields included, so the list view can
    /// be rebuilt without recomputing anything.
    pub fn serialize(&self) -> Result<String> {
        serde_json::to_string(&self.workouts).context("encoding workout store blob")
    }

    pub fn persist(&self, path: &Path) -> Result<()> {
        let blob = self.serialize()?;
        fs::write(path, blob)
            .with_context(|| format!("writing workout store: {}", path.display()))
    }

    /// Append at the end; no dedup, no validation beyond the entity's own.
    pub fn add(&mut self, workout: Workout) -> &Workout {
        self.workouts.push(workout);
        &self.workouts[self.workouts.len() - 1]
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Workout> {
        self.workouts.iter_mut().find(|w| w.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Full reset: drop every entry and the persisted blob with it.
    pub fn clear(&mut self, path: &Path) -> Result<()> {
        self.workouts.clear();
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("removing workout store: {}", path.display()))
            }
        }
    }
}
