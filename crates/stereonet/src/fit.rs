//! Best-fit girdles and cones via symmetric eigen-decomposition.
//!
//! Both fits return the unit eigenvector of the smallest eigenvalue. With
//! fewer than three independent directions the null space is degenerate and
//! the returned axis is an arbitrary (still unit) member of it; there is no
//! failure signal.

use nalgebra::{Matrix3, SymmetricEigen};

use crate::sphere::Vector;

/// Pole to the best-fit plane through the data (smallest eigenvector of `Dᵀ D`).
pub fn fit_girdle(data: &[Vector]) -> Vector {
    let tensor = data
        .iter()
        .fold(Matrix3::zeros(), |acc, v| acc + v.projection_matrix());
    smallest_eigenvector(tensor)
}

/// Axis of the best-fit cone (smallest eigenvector of the sample covariance).
pub fn fit_small_circle(data: &[Vector]) -> Vector {
    smallest_eigenvector(covariance(data))
}

/// Cone axis together with the mean half-angle of the data about it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmallCircleFit {
    pub axis: Vector,
    /// Radians, in `[0, π/2]` after orienting `axis` towards the data.
    pub half_angle: f64,
}

/// `fit_small_circle` plus the half-angle needed to draw the fitted cone.
///
/// The axis sign is chosen so the mean angle to the data is at most 90°.
pub fn fit_cone(data: &[Vector]) -> SmallCircleFit {
    let mut axis = fit_small_circle(data);
    let mut half_angle = mean_angle(&axis, data);
    if half_angle > std::f64::consts::FRAC_PI_2 {
        axis = -axis;
        half_angle = std::f64::consts::PI - half_angle;
    }
    SmallCircleFit { axis, half_angle }
}

fn mean_angle(axis: &Vector, data: &[Vector]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().map(|v| axis.angle_with(v, true)).sum::<f64>() / data.len() as f64
}

/// Column-centered covariance with the `n - 1` normalization.
fn covariance(data: &[Vector]) -> Matrix3<f64> {
    if data.is_empty() {
        return Matrix3::zeros();
    }
    let n = data.len() as f64;
    let mean = data.iter().fold(nalgebra::Vector3::zeros(), |acc, v| acc + v.0) / n;
    let scatter = data.iter().fold(Matrix3::zeros(), |acc, v| {
        let d = v.0 - mean;
        acc + d * d.transpose()
    });
    scatter / (n - 1.0).max(1.0)
}

fn smallest_eigenvector(m: Matrix3<f64>) -> Vector {
    let eig = SymmetricEigen::new(m);
    let idx = eig.eigenvalues.imin();
    let axis = eig.eigenvectors.column(idx).into_owned();
    Vector(axis / axis.norm())
}
