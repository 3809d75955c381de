//! Tolerance defaults and circle-generation settings.
//!
//! Policy
//! - Internal guards are fixed constants. The few knobs a caller legitimately
//!   tunes per plot (sampling step, clip height, join tolerance) live in
//!   `CircleCfg`, mirroring how `NetCfg` carries the reference-net spacing.

use std::f64::consts::PI;

/// One degree in radians; default angular step of every circle generator.
pub const DEFAULT_STEP: f64 = PI / 180.0;
/// Default clip height: points with `z < DEFAULT_Z_TOL` count as visible.
pub const DEFAULT_Z_TOL: f64 = 0.1;
/// Default endpoint tolerance (radians) when rejoining clipped segments.
pub const DEFAULT_JOIN_TOL: f64 = PI / 180.0;

/// Slack added to the join tolerance so endpoints exactly one step apart still join.
pub(crate) const JOIN_SLACK: f64 = 1e-9;
/// Round-off allowance on `x² + y² = 1` at the rim of the orthographic disk.
pub(crate) const RIM_EPS: f64 = 1e-12;

/// Settings for turning circles into projected polylines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleCfg {
    /// Angular step (radians) between generated circle points.
    pub step: f64,
    /// Clip height in the oblique frame.
    pub z_tol: f64,
    /// Endpoint tolerance (radians) for `join_segments`.
    pub join_tol: f64,
}

impl Default for CircleCfg {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            z_tol: DEFAULT_Z_TOL,
            join_tol: DEFAULT_JOIN_TOL,
        }
    }
}

/// Reference-net layout (spacings in degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetCfg {
    pub gc_spacing: f64,
    pub sc_spacing: f64,
    /// Samples per circle.
    pub n: usize,
    /// Stop meridians one parallel short of the poles; only the principal
    /// meridians cross the caps.
    pub clean_caps: bool,
}

impl Default for NetCfg {
    fn default() -> Self {
        Self {
            gc_spacing: 10.0,
            sc_spacing: 10.0,
            n: 360,
            clean_caps: true,
        }
    }
}
