//! Sphere → disk projections with an optional oblique rotation.
//!
//! Purpose
//! - Map unit-sphere directions to the 2D disk of a stereonet and back.
//! - Provide the geometric half of point and line plotting: the rendering
//!   collaborator receives plain `[f64; 2]` coordinates and polylines.
//!
//! Assumptions and conventions
//! - The projection pole is `z = +1`; the lower hemisphere maps into the
//!   unit disk.
//! - `direct` normalizes its input, so non-unit vectors are accepted.
//! - The rotation matrix and its inverse are computed once in `new`.
//!
//! Code cross-refs: `kinds::ProjectionKind`, `segments::{clip_lines, join_segments}`.

mod kinds;

use std::fmt;

use nalgebra::{Matrix3, Vector3};

use crate::cfg::CircleCfg;
use crate::rotation::Rotation;
use crate::segments::{clip_lines, join_segments};
use crate::sphere::Vector;

pub use kinds::ProjectionKind;

/// Rejected input of `Projection::checked_inverse`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionError {
    NonFinite,
    /// The point lies outside the domain of the inverse map.
    OutsideDisk { x: f64, y: f64 },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::NonFinite => write!(f, "projected point is not finite"),
            ProjectionError::OutsideDisk { x, y } => {
                write!(f, "point ({x}, {y}) lies outside the projection disk")
            }
        }
    }
}

impl std::error::Error for ProjectionError {}

/// Labelled compass direction positioned on the projected net.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardinalPoint {
    pub label: char,
    pub position: [f64; 2],
}

/// Projection kind plus the frame it is evaluated in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    kind: ProjectionKind,
    rotation: Option<Rotation>,
    r: Matrix3<f64>,
    r_inv: Matrix3<f64>,
}

impl Default for Projection {
    /// Equal-area without rotation.
    fn default() -> Self {
        Self::new(ProjectionKind::EqualArea, None)
    }
}

impl Projection {
    pub fn new(kind: ProjectionKind, rotation: Option<Rotation>) -> Self {
        let (r, r_inv) = match rotation {
            Some(rot) => {
                let r = rot.matrix();
                // Orthonormal, so the transpose is the inverse.
                (r, r.transpose())
            }
            None => (Matrix3::identity(), Matrix3::identity()),
        };
        Self {
            kind,
            rotation,
            r,
            r_inv,
        }
    }

    #[inline]
    pub fn kind(&self) -> ProjectionKind {
        self.kind
    }
    #[inline]
    pub fn rotation(&self) -> Option<Rotation> {
        self.rotation
    }
    /// World → oblique frame.
    #[inline]
    pub fn rotation_matrix(&self) -> Matrix3<f64> {
        self.r
    }
    /// Oblique frame → world.
    #[inline]
    pub fn inverse_rotation_matrix(&self) -> Matrix3<f64> {
        self.r_inv
    }

    /// Rotate (if requested and configured), normalize and, with
    /// `invert_positive`, send upper-hemisphere points to their antipodes.
    fn pre_direct(&self, v: &Vector, invert_positive: bool, rotate: bool) -> Vector3<f64> {
        let p = if rotate && self.rotation.is_some() {
            self.r * v.0
        } else {
            v.0
        };
        let d = 1.0 / p.norm();
        if invert_positive && p.z > 0.0 {
            p * -d
        } else {
            p * d
        }
    }

    fn post_inverse(&self, p: Vector3<f64>, rotate: bool) -> Vector {
        if rotate && self.rotation.is_some() {
            Vector(self.r_inv * p)
        } else {
            Vector(p)
        }
    }

    /// Project one direction.
    pub fn direct_one(&self, v: &Vector, invert_positive: bool, rotate: bool) -> [f64; 2] {
        self.kind.forward(self.pre_direct(v, invert_positive, rotate))
    }

    /// Project directions to disk coordinates.
    pub fn direct(&self, data: &[Vector], invert_positive: bool, rotate: bool) -> Vec<[f64; 2]> {
        data.iter()
            .map(|v| self.direct_one(v, invert_positive, rotate))
            .collect()
    }

    /// Disk coordinates back to directions.
    ///
    /// No validation: points outside the domain of the inverse map give NaN
    /// components (see `checked_inverse`).
    pub fn inverse(&self, data: &[[f64; 2]], rotate: bool) -> Vec<Vector> {
        data.iter()
            .map(|&xy| self.post_inverse(self.kind.backward(xy), rotate))
            .collect()
    }

    /// `inverse` that rejects non-finite or out-of-domain points.
    pub fn checked_inverse(
        &self,
        data: &[[f64; 2]],
        rotate: bool,
    ) -> Result<Vec<Vector>, ProjectionError> {
        for &[x, y] in data {
            if !(x.is_finite() && y.is_finite()) {
                return Err(ProjectionError::NonFinite);
            }
            if !self.kind.in_domain(x, y) {
                return Err(ProjectionError::OutsideDisk { x, y });
            }
        }
        Ok(self.inverse(data, rotate))
    }

    /// Points as plotted: rotated and folded onto the lower hemisphere.
    pub fn project_points(&self, data: &[Vector]) -> Vec<[f64; 2]> {
        self.direct(data, true, true)
    }

    /// Circles (or any ordered point runs) as projected polylines.
    ///
    /// Each circle is rotated into the oblique frame, clipped at
    /// `cfg.z_tol`, rejoined with `cfg.join_tol`, and projected without
    /// hemisphere folding. Polylines may poke slightly past the primitive;
    /// the renderer clips them.
    pub fn project_lines(&self, circles: &[Vec<Vector>], cfg: &CircleCfg) -> Vec<Vec<[f64; 2]>> {
        circles
            .iter()
            .flat_map(|circle| {
                let rotated: Vec<Vector> = circle.iter().map(|v| Vector(self.r * v.0)).collect();
                join_segments(clip_lines(&rotated, cfg.z_tol), cfg.join_tol)
            })
            .map(|segment| self.direct(&segment, false, false))
            .collect()
    }

    /// N/E/S/W markers for an oblique net.
    ///
    /// Empty without rotation (the plain net has a fixed north mark);
    /// markers that rotate into the upper hemisphere are omitted.
    pub fn cardinal_points(&self) -> Vec<CardinalPoint> {
        if self.rotation.is_none() {
            return Vec::new();
        }
        [
            ('N', Vector::new(0.0, 1.0, 0.0)),
            ('E', Vector::new(1.0, 0.0, 0.0)),
            ('S', Vector::new(0.0, -1.0, 0.0)),
            ('W', Vector::new(-1.0, 0.0, 0.0)),
        ]
        .into_iter()
        .filter(|(_, p)| (self.r * p.0).z <= 0.0)
        .map(|(label, p)| CardinalPoint {
            label,
            position: self.direct_one(&p, true, true),
        })
        .collect()
    }
}
