//! Argument parsers for measurements given on the command line.

use anyhow::{bail, Context, Result};
use stereonet::rotation::Rotation;
use stereonet::Vector;

fn split_numbers(raw: &str, sep: char, expected: usize) -> Result<Vec<f64>> {
    let parts: Vec<&str> = raw.split(sep).map(str::trim).collect();
    if parts.len() != expected {
        bail!("expected {expected} values separated by '{sep}', got '{raw}'");
    }
    parts
        .iter()
        .map(|p| p.parse::<f64>().with_context(|| format!("parsing '{p}' in '{raw}'")))
        .collect()
}

/// `trend/plunge` in degrees.
pub fn line(raw: &str) -> Result<Vector> {
    let v = split_numbers(raw, '/', 2)?;
    Vector::try_from_attitude(v[0], v[1]).with_context(|| format!("line '{raw}'"))
}

/// `dip_direction/dip` in degrees, returned as the plane's pole.
pub fn plane(raw: &str) -> Result<Vector> {
    let v = split_numbers(raw, '/', 2)?;
    Vector::try_from_plane(v[0], v[1]).with_context(|| format!("plane '{raw}'"))
}

/// `x,y,z` direction cosines.
pub fn dcos(raw: &str) -> Result<Vector> {
    let v = split_numbers(raw, ',', 3)?;
    Ok(Vector::new(v[0], v[1], v[2]))
}

/// `azimuth/plunge/rake` in degrees.
pub fn rotation(raw: &str) -> Result<Rotation> {
    let v = split_numbers(raw, '/', 3)?;
    Ok(Rotation::new(v[0], v[1], v[2]))
}
