use crate::types::Coords;
use anyhow::{Context, Result, bail};

/// Environment variable the default provider reads: `"lat,lng"` in degrees.
pub const POSITION_ENV: &str = "MAPLOG_POSITION";

/// One-shot position source. Either a coordinate pair comes back or an
/// error does; there is no retry and no fallback position.
pub trait LocationProvider {
    fn current_position(&self) -> Result<Coords>;
}

/// Reads the position from [`POSITION_ENV`].
pub struct EnvLocation;

impl LocationProvider for EnvLocation {
    fn current_position(&self) -> Result<Coords> {
        let raw = std::env::var(POSITION_ENV)
            .with_context(|| format!("could not get your position: {POSITION_ENV} is not set"))?;
        parse_position(&raw)
            .with_context(|| format!("could not get your position: bad {POSITION_ENV}"))
    }
}

/// Parse `"lat,lng"` (decimal degrees, optional whitespace around either
/// number) into a coordinate pair.
pub fn parse_position(raw: &str) -> Result<Coords> {
    let Some((lat, lng)) = raw.split_once(',') else {
        bail!("expected \"lat,lng\", got {raw:?}");
    };

    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("bad latitude in {raw:?}"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .with_context(|| format!("bad longitude in {raw:?}"))?;

    if !lat.is_finite() || !lng.is_finite() {
        bail!("position must be finite, got {raw:?}");
    }

    Ok(Coords { lat, lng })
}
