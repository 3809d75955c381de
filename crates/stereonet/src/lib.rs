//! Spherical orientation geometry for structural-geology stereonets.
//!
//! Field measurements become direction cosines (`Vector`, `VectorSet`), are
//! fitted (`fit`), turned into circle primitives, and projected onto a 2D
//! disk (`projection`). Drawing is left to the caller: the crate hands out
//! `[f64; 2]` points and polylines only.
//!
//! Conventions
//! - `x` east, `y` north, `z` up; attitudes in degrees, circle angles in radians.
//! - Nothing here allocates global state or logs; every call is a pure function
//!   of its inputs (plus the caller's RNG for sampling).

pub mod cfg;
pub mod fit;
pub mod net;
pub mod projection;
pub mod rotation;
pub mod sample;
pub mod segments;
pub mod sphere;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{CircleCfg, NetCfg};
pub use sphere::{Vector, VectorSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{CircleCfg, NetCfg, DEFAULT_JOIN_TOL, DEFAULT_STEP, DEFAULT_Z_TOL};
    pub use crate::fit::{fit_cone, fit_girdle, fit_small_circle, SmallCircleFit};
    pub use crate::net::{net_grid, NetGrid};
    pub use crate::projection::{CardinalPoint, Projection, ProjectionError, ProjectionKind};
    pub use crate::rotation::{build_rotation_matrix, Rotation};
    pub use crate::sample::{sample_fisher, sample_uniform, FisherParams, SampleError};
    pub use crate::segments::{clip_lines, join_segments, Segment};
    pub use crate::sphere::{AttitudeError, Vector, VectorSet};
}
