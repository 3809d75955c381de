//! Single directions on the unit sphere.
//!
//! Conventions
//! - Coordinates are direction cosines `(x, y, z)` = (east, north, up).
//! - Attitudes are trend/plunge in degrees and always describe the
//!   lower-hemisphere end of the line (`z <= 0`).
//! - Angles handed to circle generators are radians.

use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Mul, Neg};

use nalgebra::{Matrix3, Vector3};

use super::util::{arange, clip_unit, wrap_degrees};

/// Rejected attitude input for the validating constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum AttitudeError {
    NonFinite,
    PlungeOutOfRange { plunge: f64 },
    DipOutOfRange { dip: f64 },
}

impl fmt::Display for AttitudeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttitudeError::NonFinite => write!(f, "attitude contains a non-finite angle"),
            AttitudeError::PlungeOutOfRange { plunge } => {
                write!(f, "plunge {plunge} outside [0, 90] degrees")
            }
            AttitudeError::DipOutOfRange { dip } => {
                write!(f, "dip {dip} outside [0, 90] degrees")
            }
        }
    }
}

impl std::error::Error for AttitudeError {}

/// Direction cosine triple.
///
/// Not normalized on construction; generators return unit vectors when fed
/// unit vectors, cross products are left as computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector(pub Vector3<f64>);

impl Vector {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }
    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }
    #[inline]
    pub fn dcos(&self) -> Vector3<f64> {
        self.0
    }
    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.0.dot(&other.0)
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.0.norm()
    }
    /// Unit vector along `self`. Zero input yields NaN components.
    #[inline]
    pub fn normalized(&self) -> Vector {
        Vector(self.0 / self.length())
    }

    /// Line from trend/plunge in degrees. NaN propagates.
    pub fn from_attitude(trend: f64, plunge: f64) -> Vector {
        let (tr, pl) = (trend.to_radians(), plunge.to_radians());
        Vector::new(pl.cos() * tr.sin(), pl.cos() * tr.cos(), -pl.sin())
    }

    /// `from_attitude` with range checks on the plunge.
    pub fn try_from_attitude(trend: f64, plunge: f64) -> Result<Vector, AttitudeError> {
        if !(trend.is_finite() && plunge.is_finite()) {
            return Err(AttitudeError::NonFinite);
        }
        if !(0.0..=90.0).contains(&plunge) {
            return Err(AttitudeError::PlungeOutOfRange { plunge });
        }
        Ok(Vector::from_attitude(trend, plunge))
    }

    /// Pole of the plane with the given dip direction and dip (degrees).
    pub fn from_plane(dip_direction: f64, dip: f64) -> Vector {
        Vector::from_attitude(dip_direction + 180.0, 90.0 - dip)
    }

    /// `from_plane` with range checks on the dip.
    pub fn try_from_plane(dip_direction: f64, dip: f64) -> Result<Vector, AttitudeError> {
        if !(dip_direction.is_finite() && dip.is_finite()) {
            return Err(AttitudeError::NonFinite);
        }
        if !(0.0..=90.0).contains(&dip) {
            return Err(AttitudeError::DipOutOfRange { dip });
        }
        Ok(Vector::from_plane(dip_direction, dip))
    }

    /// Trend/plunge in degrees of the lower-hemisphere end of this line.
    ///
    /// Trend is meaningless for a vertical line.
    pub fn attitude(&self) -> (f64, f64) {
        let u = self.normalized();
        let (mut x, mut y, z) = (u.x(), u.y(), u.z());
        if z > 0.0 {
            x = -x;
            y = -y;
        }
        let trend = wrap_degrees(x.atan2(y).to_degrees());
        let plunge = clip_unit(z.abs()).asin().to_degrees();
        (trend, plunge)
    }

    /// Dip direction/dip in degrees of the plane having this vector as pole.
    pub fn plane_attitude(&self) -> (f64, f64) {
        let (trend, plunge) = self.attitude();
        (wrap_degrees(trend + 180.0), 90.0 - plunge)
    }

    /// Angle in radians.
    ///
    /// `precise = false` uses the clipped arccosine; `precise = true` uses
    /// `atan2(|a×b|, a·b)`, better conditioned near 0 and π.
    pub fn angle_with(&self, other: &Vector, precise: bool) -> f64 {
        if precise {
            self.0.cross(&other.0).norm().atan2(self.dot(other))
        } else {
            let denom = self.length() * other.length();
            clip_unit(self.dot(other) / denom).acos()
        }
    }

    #[inline]
    pub fn cross_with(&self, other: &Vector) -> Vector {
        Vector(self.0.cross(&other.0))
    }

    /// Unit cross product; a zero cross product is returned as is.
    ///
    /// No hemisphere canonicalization here, unlike
    /// `VectorSet::normalized_cross_with`.
    pub fn normalized_cross_with(&self, other: &Vector) -> Vector {
        let c = self.0.cross(&other.0);
        let length = c.norm();
        if length > 0.0 {
            Vector(c / length)
        } else {
            Vector(c)
        }
    }

    /// Horizontal unit vector perpendicular to `self` (strike direction).
    ///
    /// A vertical vector has no horizontal normal; east is used instead.
    pub fn direction_vector(&self) -> Vector {
        if self.z().abs() == 1.0 {
            return Vector::new(1.0, 0.0, 0.0);
        }
        Vector::new(self.y(), -self.x(), 0.0).normalized()
    }

    /// Completes `(direction_vector, dip_vector, self)` to a right-handed frame.
    pub fn dip_vector(&self) -> Vector {
        self.normalized().cross_with(&self.direction_vector())
    }

    /// Outer product `v vᵀ`.
    #[inline]
    pub fn projection_matrix(&self) -> Matrix3<f64> {
        self.0 * self.0.transpose()
    }

    /// `I - v vᵀ`.
    #[inline]
    pub fn rejection_matrix(&self) -> Matrix3<f64> {
        Matrix3::identity() - self.projection_matrix()
    }

    /// Skew matrix `[v]×` with `[v]× w = v × w`.
    #[inline]
    pub fn cross_product_matrix(&self) -> Matrix3<f64> {
        self.0.cross_matrix()
    }

    /// Rodrigues rotation by `theta` radians about `self` (assumed unit).
    pub fn rotation_matrix(&self, theta: f64) -> Matrix3<f64> {
        let (s, c) = theta.sin_cos();
        Matrix3::identity() * c
            + self.cross_product_matrix() * s
            + self.projection_matrix() * (1.0 - c)
    }

    /// Points of the great circle having `self` as pole.
    ///
    /// Angles run from `offset` to `offset + 2π` (exclusive) by `step`,
    /// reduced mod 2π, along `direction·cos θ + dip·sin θ`.
    pub fn great_circle(&self, step: f64, offset: f64) -> Vec<Vector> {
        let d = self.direction_vector().0;
        let p = self.dip_vector().0;
        arange(offset, TAU + offset, step)
            .map(|theta| {
                let theta = theta.rem_euclid(TAU);
                Vector(d * theta.cos() + p * theta.sin())
            })
            .collect()
    }

    /// Both nappes of the cone with half-angle `alpha` (radians) about `self`.
    ///
    /// With `a = b = 0` this is the plain small circle sampled like
    /// `great_circle(step, offset)`. Otherwise the half-angle is modulated as
    /// `alpha + a·cos 2θ + b·sin 2θ` over `θ ∈ [0, 2π)` and `offset` is ignored.
    pub fn small_circle(
        &self,
        alpha: f64,
        a: f64,
        b: f64,
        step: f64,
        offset: f64,
    ) -> (Vec<Vector>, Vec<Vector>) {
        let axis = self.0;
        let upper: Vec<Vector> = if a == 0.0 && b == 0.0 {
            let (s, c) = alpha.sin_cos();
            self.great_circle(step, offset)
                .into_iter()
                .map(|g| Vector(g.0 * s + axis * c))
                .collect()
        } else {
            self.great_circle(step, 0.0)
                .into_iter()
                .zip(arange(0.0, TAU, step))
                .map(|(g, theta)| {
                    let alpha_t = alpha + a * (2.0 * theta).cos() + b * (2.0 * theta).sin();
                    Vector(g.0 * alpha_t.sin() + axis * alpha_t.cos())
                })
                .collect()
        };
        let lower = upper.iter().map(|v| -*v).collect();
        (upper, lower)
    }

    /// Minor great-circle arc from `self` towards `other`, excluding `other`.
    ///
    /// Both ends are assumed unit. Antipodal or identical ends have no unique
    /// arc (the in-plane direction normalizes a zero vector).
    pub fn arc_to(&self, other: &Vector, step: f64) -> Vec<Vector> {
        let normal = self.rejection_matrix() * other.0;
        let normal = normal / normal.norm();
        arange(0.0, self.angle_with(other, false), step)
            .map(|theta| Vector(self.0 * theta.cos() + normal * theta.sin()))
            .collect()
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(v: Vector3<f64>) -> Self {
        Vector(v)
    }
}

impl From<[f64; 3]> for Vector {
    fn from(v: [f64; 3]) -> Self {
        Vector::new(v[0], v[1], v[2])
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector(-self.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        Vector(self.0 * rhs)
    }
}
