//! Ordered collections of directions with batched pairwise operations.

use std::ops::{Deref, Index};

use nalgebra::{DMatrix, Dyn, OMatrix, U3};

use super::util::wrap_degrees;
use super::vector::Vector;

/// Ordered set of direction cosines. Order mirrors input order only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorSet {
    pub vectors: Vec<Vector>,
}

impl VectorSet {
    #[inline]
    pub fn new(vectors: Vec<Vector>) -> Self {
        Self { vectors }
    }

    pub fn from_attitudes(attitudes: &[(f64, f64)]) -> Self {
        attitudes
            .iter()
            .map(|&(trend, plunge)| Vector::from_attitude(trend, plunge))
            .collect()
    }

    /// Poles of planes given as dip direction/dip.
    pub fn from_planes(planes: &[(f64, f64)]) -> Self {
        planes
            .iter()
            .map(|&(dd, dip)| Vector::from_plane(dd, dip))
            .collect()
    }

    #[inline]
    pub fn push(&mut self, v: Vector) {
        self.vectors.push(v);
    }

    /// Trend/plunge of every member, same convention as `Vector::attitude`.
    pub fn attitude(&self) -> Vec<(f64, f64)> {
        self.vectors.iter().map(Vector::attitude).collect()
    }

    /// Dip direction/dip of the planes having the members as poles.
    pub fn plane_attitude(&self) -> Vec<(f64, f64)> {
        self.attitude()
            .into_iter()
            .map(|(trend, plunge)| (wrap_degrees(trend + 180.0), 90.0 - plunge))
            .collect()
    }

    /// `n × m` matrix of angles (radians) between members and `other`.
    pub fn angle_with(&self, other: &[Vector], precise: bool) -> DMatrix<f64> {
        DMatrix::from_fn(self.len(), other.len(), |i, j| {
            self.vectors[i].angle_with(&other[j], precise)
        })
    }

    /// Unit normals of every pairwise cross product, row-major over
    /// `(self[i], other[j])`.
    ///
    /// Each normal is flipped to have negative z (a z of exactly zero is
    /// flipped too), so `a × b` and `b × a` give the same pole. The
    /// single-pair `Vector::normalized_cross_with` does not do this.
    pub fn normalized_cross_with(&self, other: &[Vector]) -> VectorSet {
        let mut out = Vec::with_capacity(self.len() * other.len());
        for a in &self.vectors {
            for b in other {
                let c = a.normalized_cross_with(b);
                out.push(if c.z() < 0.0 { c } else { -c });
            }
        }
        VectorSet::new(out)
    }

    /// One great circle per member, generated lazily on each iteration.
    pub fn great_circles(&self, step: f64) -> impl Iterator<Item = Vec<Vector>> + '_ {
        self.vectors.iter().map(move |v| v.great_circle(step, 0.0))
    }

    /// Row matrix `n × 3` of the direction cosines.
    pub fn as_matrix(&self) -> OMatrix<f64, Dyn, U3> {
        OMatrix::<f64, Dyn, U3>::from_fn(self.len(), |i, j| self.vectors[i].0[j])
    }
}

impl Deref for VectorSet {
    type Target = [Vector];
    #[inline]
    fn deref(&self) -> &[Vector] {
        &self.vectors
    }
}

impl Index<usize> for VectorSet {
    type Output = Vector;
    #[inline]
    fn index(&self, i: usize) -> &Vector {
        &self.vectors[i]
    }
}

impl FromIterator<Vector> for VectorSet {
    fn from_iter<I: IntoIterator<Item = Vector>>(iter: I) -> Self {
        VectorSet::new(iter.into_iter().collect())
    }
}

impl From<Vec<Vector>> for VectorSet {
    fn from(vectors: Vec<Vector>) -> Self {
        VectorSet::new(vectors)
    }
}

impl<'a> IntoIterator for &'a VectorSet {
    type Item = &'a Vector;
    type IntoIter = std::slice::Iter<'a, Vector>;
    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}

impl IntoIterator for VectorSet {
    type Item = Vector;
    type IntoIter = std::vec::IntoIter<Vector>;
    fn into_iter(self) -> Self::IntoIter {
        self.vectors.into_iter()
    }
}
