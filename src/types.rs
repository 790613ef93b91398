use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// How many trailing digits of the millisecond timestamp form an id.
///
/// Good enough for a single user logging by hand; constructions inside the
/// same millisecond collide and nothing detects it.
const ID_DIGITS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cycling => "Cycling",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Self::Running => "🏃",
            Self::Cycling => "🚴",
        }
    }
}

/// Variant payload: the raw field the user entered plus the metric derived
/// from it at construction time. Tagged by `kind` so one flat field-map per
/// workout round-trips through storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running {
        cadence_spm: f64,
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        speed_km_per_h: f64,
    },
}

impl WorkoutDetails {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running { .. } => WorkoutKind::Running,
            Self::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// min/km. Division is deliberately unguarded: a zero or non-finite
/// distance flows through as Infinity/NaN and the boundary layer is the
/// one rejecting such input before construction.
pub fn pace_min_per_km(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// km/h, same contract as [`pace_min_per_km`].
pub fn speed_km_per_h(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}

/// A single recorded exercise session.
///
/// Everything except the click counter is fixed at construction: the id and
/// description derive from the creation timestamp, the metric from distance
/// and duration. There are no setters, so a stored workout reads back
/// field-for-field identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    id: String,
    created_at: DateTime<Local>,
    coords: Coords,
    distance_km: f64,
    duration_min: f64,
    description: String,
    clicks: u32,
    #[serde(flatten)]
    details: WorkoutDetails,
}

impl Workout {
    pub fn running(coords: Coords, distance_km: f64, duration_min: f64, cadence_spm: f64) -> Self {
        Self::running_at(Local::now(), coords, distance_km, duration_min, cadence_spm)
    }

    pub fn cycling(
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        Self::cycling_at(
            Local::now(),
            coords,
            distance_km,
            duration_min,
            elevation_gain_m,
        )
    }

    pub fn running_at(
        created_at: DateTime<Local>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Self {
        let details = WorkoutDetails::Running {
            cadence_spm,
            pace_min_per_km: pace_min_per_km(distance_km, duration_min),
        };
        Self::assemble(created_at, coords, distance_km, duration_min, details)
    }

    pub fn cycling_at(
        created_at: DateTime<Local>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        let details = WorkoutDetails::Cycling {
            elevation_gain_m,
            speed_km_per_h: speed_km_per_h(distance_km, duration_min),
        };
        Self::assemble(created_at, coords, distance_km, duration_min, details)
    }

    fn assemble(
        created_at: DateTime<Local>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        details: WorkoutDetails,
    ) -> Self {
        Self {
            id: id_from_timestamp(created_at),
            created_at,
            coords,
            distance_km,
            duration_min,
            description: describe(details.kind(), created_at),
            clicks: 0,
            details,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    /// Count a selection from the list. Purely informational.
    pub fn click(&mut self) {
        self.clicks += 1;
    }
}

fn id_from_timestamp(created_at: DateTime<Local>) -> String {
    let ms = created_at.timestamp_millis().unsigned_abs().to_string();
    let cut = ms.len().saturating_sub(ID_DIGITS);
    ms[cut..].to_string()
}

fn describe(kind: WorkoutKind, created_at: DateTime<Local>) -> String {
    let month = MONTHS[created_at.month0() as usize];
    format!("{} on {} {}", kind.label(), month, created_at.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn march_5th() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 17, 30, 0).unwrap()
    }

    fn origin() -> Coords {
        Coords { lat: 0.0, lng: 0.0 }
    }

    #[test]
    fn test_running_pace_is_exact() {
        let at = Coords {
            lat: 39.0,
            lng: -12.0,
        };
        let w = Workout::running_at(march_5th(), at, 5.2, 24.0, 178.0);
        let WorkoutDetails::Running {
            pace_min_per_km,
            cadence_spm,
        } = *w.details()
        else {
            panic!("expected running details");
        };
        assert_eq!(pace_min_per_km, 24.0 / 5.2);
        assert!((pace_min_per_km - 4.615).abs() < 1e-3);
        assert_eq!(cadence_spm, 178.0);
        assert_eq!(w.kind(), WorkoutKind::Running);
    }

    #[test]
    fn test_cycling_speed_is_exact() {
        let at = Coords {
            lat: 39.0,
            lng: -12.0,
        };
        let w = Workout::cycling_at(march_5th(), at, 27.0, 95.0, 523.0);
        let WorkoutDetails::Cycling {
            speed_km_per_h,
            elevation_gain_m,
        } = *w.details()
        else {
            panic!("expected cycling details");
        };
        assert_eq!(speed_km_per_h, 27.0 / (95.0 / 60.0));
        assert!((speed_km_per_h - 17.05).abs() < 1e-2);
        assert_eq!(elevation_gain_m, 523.0);
        assert_eq!(w.kind(), WorkoutKind::Cycling);
    }

    #[test]
    fn test_description_is_deterministic() {
        let run = Workout::running_at(march_5th(), origin(), 5.0, 30.0, 170.0);
        assert_eq!(run.description(), "Running on March 5");

        let nye = Local.with_ymd_and_hms(2023, 12, 31, 9, 0, 0).unwrap();
        let ride = Workout::cycling_at(nye, origin(), 20.0, 60.0, -40.0);
        assert_eq!(ride.description(), "Cycling on December 31");
    }

    #[test]
    fn test_ids_distinct_for_distinct_timestamps() {
        let a = Workout::running_at(march_5th(), origin(), 5.0, 30.0, 170.0);
        let later = march_5th() + chrono::Duration::milliseconds(1);
        let b = Workout::running_at(later, origin(), 5.0, 30.0, 170.0);

        assert!(!a.id().is_empty());
        assert!(!b.id().is_empty());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_clicks_count_up_from_zero() {
        let mut w = Workout::running_at(march_5th(), origin(), 5.0, 30.0, 170.0);
        assert_eq!(w.clicks(), 0);
        for _ in 0..7 {
            w.click();
        }
        assert_eq!(w.clicks(), 7);
    }

    #[test]
    fn test_construction_is_lenient_about_zero_inputs() {
        // The boundary layer rejects these before they ever reach the
        // constructor; the entity itself lets them through.
        let w = Workout::running_at(march_5th(), origin(), 0.0, 30.0, 170.0);
        let WorkoutDetails::Running {
            pace_min_per_km, ..
        } = *w.details()
        else {
            panic!("expected running details");
        };
        assert!(pace_min_per_km.is_infinite());

        let w = Workout::cycling_at(march_5th(), origin(), 0.0, 0.0, 10.0);
        let WorkoutDetails::Cycling {
            speed_km_per_h, ..
        } = *w.details()
        else {
            panic!("expected cycling details");
        };
        assert!(speed_km_per_h.is_nan());
    }

    #[test]
    fn test_negative_elevation_is_representable() {
        let w = Workout::cycling_at(march_5th(), origin(), 10.0, 40.0, -120.0);
        let WorkoutDetails::Cycling {
            elevation_gain_m, ..
        } = *w.details()
        else {
            panic!("expected cycling details");
        };
        assert_eq!(elevation_gain_m, -120.0);
    }
}
