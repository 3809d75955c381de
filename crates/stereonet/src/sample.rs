//! Random directions: uniform on the sphere and von Mises–Fisher clusters.
//!
//! Callers pass the RNG so draws are reproducible with a seeded `StdRng`.

use std::f64::consts::{PI, TAU};
use std::fmt;

use rand::Rng;
use rand_distr::StandardNormal;

use crate::sphere::{Vector, VectorSet};

/// Rejected sampler parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Mean direction and concentration of a von Mises–Fisher distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FisherParams {
    pub mean: Vector,
    pub kappa: f64,
}

impl FisherParams {
    pub fn validate(&self) -> Result<(), SampleError> {
        if !self.kappa.is_finite() || self.kappa < 0.0 {
            return Err(SampleError::invalid("kappa must be finite and >= 0"));
        }
        let len = self.mean.length();
        if !len.is_finite() || len < 1e-12 {
            return Err(SampleError::invalid("mean vector must be finite and non-zero"));
        }
        Ok(())
    }
}

/// `n` directions uniformly distributed on the sphere (normalized Gaussians).
pub fn sample_uniform<R: Rng + ?Sized>(rng: &mut R, n: usize) -> VectorSet {
    (0..n).map(|_| sample_unit_vector(&mut *rng)).collect()
}

/// `n` directions clustered around `mean` with concentration `kappa`.
///
/// The deviation from the mean is drawn from a von Mises distribution with
/// parameter `kappa / 2`, the azimuth uniformly, both composed in the
/// `(direction_vector, dip_vector, mean)` frame. `kappa = 0` is uniform in
/// the deviation angle.
pub fn sample_fisher<R: Rng + ?Sized>(
    rng: &mut R,
    mean: Vector,
    kappa: f64,
    n: usize,
) -> Result<VectorSet, SampleError> {
    let params = FisherParams { mean, kappa };
    params.validate()?;
    let mean = params.mean.normalized();
    let d = mean.direction_vector().0;
    let p = mean.dip_vector().0;
    Ok((0..n)
        .map(|_| {
            let theta = rng.gen::<f64>() * TAU;
            let alpha = sample_von_mises(&mut *rng, 0.0, params.kappa / 2.0);
            let tangent = d * theta.cos() + p * theta.sin();
            Vector(tangent * alpha.sin() + mean.0 * alpha.cos())
        })
        .collect())
}

/// One draw from the von Mises distribution on `[-π, π)` (Best–Fisher).
pub fn sample_von_mises<R: Rng + ?Sized>(rng: &mut R, mu: f64, kappa: f64) -> f64 {
    if kappa < 1e-8 {
        return PI * (2.0 * rng.gen::<f64>() - 1.0);
    }
    if kappa > 1e6 {
        // Wrapped normal limit.
        let z: f64 = rng.sample(StandardNormal);
        return wrap_angle(mu + z / kappa.sqrt());
    }
    let s = if kappa < 1e-5 {
        1.0 / kappa + kappa
    } else {
        let r = 1.0 + (1.0 + 4.0 * kappa * kappa).sqrt();
        let rho = (r - (2.0 * r).sqrt()) / (2.0 * kappa);
        (1.0 + rho * rho) / (2.0 * rho)
    };
    let w = loop {
        let u: f64 = rng.gen();
        let z = (PI * u).cos();
        let w = (1.0 + s * z) / (s + z);
        let y = kappa * (s - w);
        // Exclude zero so the log test stays finite.
        let v: f64 = 1.0 - rng.gen::<f64>();
        if y * (2.0 - y) - v >= 0.0 || (y / v).ln() + 1.0 - y >= 0.0 {
            break w;
        }
    };
    let mut result = w.clamp(-1.0, 1.0).acos();
    if rng.gen::<f64>() < 0.5 {
        result = -result;
    }
    wrap_angle(result + mu)
}

fn wrap_angle(theta: f64) -> f64 {
    (theta + PI).rem_euclid(TAU) - PI
}

fn sample_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vector {
    loop {
        let v = Vector::new(
            rng.sample(StandardNormal),
            rng.sample(StandardNormal),
            rng.sample(StandardNormal),
        );
        let len = v.length();
        if len > 1e-12 {
            return Vector(v.0 / len);
        }
    }
}
