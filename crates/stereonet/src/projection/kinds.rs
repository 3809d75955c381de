//! The three concrete sphere ↔ disk maps.

use nalgebra::Vector3;
use std::f64::consts::SQRT_2;

use crate::cfg::RIM_EPS;

/// Closed set of supported projections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProjectionKind {
    /// Stereographic (Wulff net).
    EqualAngle,
    /// Lambert azimuthal (Schmidt net), radius scaled from √2 to 1.
    #[default]
    EqualArea,
    /// Orthogonal drop onto `z = 0`.
    Orthographic,
}

impl ProjectionKind {
    /// Forward map of a unit vector.
    ///
    /// Equal-angle is singular at `z = 1`; callers fold or avoid the pole.
    pub fn forward(self, p: Vector3<f64>) -> [f64; 2] {
        let (x, y, z) = (p.x, p.y, p.z);
        match self {
            ProjectionKind::EqualAngle => [x / (1.0 - z), y / (1.0 - z)],
            ProjectionKind::EqualArea => {
                let s = (1.0 / (1.0 - z)).sqrt();
                [x * s, y * s]
            }
            ProjectionKind::Orthographic => [x, y],
        }
    }

    /// Inverse map onto the sphere.
    ///
    /// Orthographic reconstructs the lower-hemisphere root
    /// `z = -√(1 - x² - y²)` so it inverts `forward` for `z <= 0` like the
    /// other two maps; outside the unit disk it yields NaN.
    pub fn backward(self, [x, y]: [f64; 2]) -> Vector3<f64> {
        match self {
            ProjectionKind::EqualAngle => {
                let r2 = x * x + y * y;
                Vector3::new(2.0 * x / (1.0 + r2), 2.0 * y / (1.0 + r2), (r2 - 1.0) / (1.0 + r2))
            }
            ProjectionKind::EqualArea => {
                let (x, y) = (x * SQRT_2, y * SQRT_2);
                let r2 = x * x + y * y;
                let s = (1.0 - r2 / 4.0).sqrt();
                Vector3::new(s * x, s * y, -1.0 + r2 / 2.0)
            }
            ProjectionKind::Orthographic => {
                let h = 1.0 - x * x - y * y;
                // Overshoot at the rim below RIM_EPS is round-off.
                let h = if h < 0.0 && h > -RIM_EPS { 0.0 } else { h };
                Vector3::new(x, y, -h.sqrt())
            }
        }
    }

    /// Whether `backward` is defined at `(x, y)`.
    pub fn in_domain(self, x: f64, y: f64) -> bool {
        let r2 = x * x + y * y;
        match self {
            ProjectionKind::EqualAngle => true,
            // Whole sphere maps into radius √2.
            ProjectionKind::EqualArea => r2 <= 2.0,
            ProjectionKind::Orthographic => r2 < 1.0 + RIM_EPS,
        }
    }
}
