//! Reference net: meridians and parallels about the N–S axis.
//!
//! Meridians are great circles through north and south, one per
//! `gc_spacing` on either side of vertical; parallels are small circles about
//! north, one per `sc_spacing`. With `clean_caps` the meridians stop one
//! parallel short of each pole and only the two principal meridians (vertical
//! and horizontal plane) are drawn through the caps.
//!
//! Circles are returned as 3D points; `Projection::project_lines` turns them
//! into polylines.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use nalgebra::Vector3;

use crate::cfg::NetCfg;
use crate::sphere::util::{arange, linspace};
use crate::sphere::Vector;

/// Meridians and parallels of a reference net.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetGrid {
    pub great_circles: Vec<Vec<Vector>>,
    pub small_circles: Vec<Vec<Vector>>,
}

impl NetGrid {
    /// Every circle, meridians first.
    pub fn circles(&self) -> impl Iterator<Item = &Vec<Vector>> {
        self.great_circles.iter().chain(self.small_circles.iter())
    }
}

/// Meridian dipping `alpha` radians from vertical, sampled at `ts`.
fn meridian(alpha: f64, ts: impl Iterator<Item = f64>) -> Vec<Vector> {
    let j = Vector3::new(0.0, 1.0, 0.0);
    let tilt = Vector3::new(alpha.cos(), 0.0, -alpha.sin());
    ts.map(|t| Vector(tilt * t.sin() + j * t.cos())).collect()
}

/// Build the net described by `cfg`.
pub fn net_grid(cfg: &NetCfg) -> NetGrid {
    let gc_spacing = cfg.gc_spacing.to_radians();
    let sc_spacing = cfg.sc_spacing.to_radians();
    let n = cfg.n;

    let (t0, t1) = if cfg.clean_caps {
        (sc_spacing, PI - sc_spacing)
    } else {
        (0.0, PI)
    };
    let gc_range: Vec<f64> = arange(0.0, PI + gc_spacing, gc_spacing).collect();
    let mut great_circles: Vec<Vec<Vector>> = gc_range
        .iter()
        .copied()
        .chain(gc_range.iter().map(|alpha| -alpha))
        .map(|alpha| meridian(alpha, linspace(t0, t1, n)))
        .collect();

    let i = Vector3::new(1.0, 0.0, 0.0);
    let j = Vector3::new(0.0, 1.0, 0.0);
    let k = Vector3::new(0.0, 0.0, 1.0);
    let small_circles: Vec<Vec<Vector>> = arange(0.0, PI + sc_spacing, sc_spacing)
        .map(|alpha| {
            let (s, c) = alpha.sin_cos();
            linspace(0.0, TAU, n)
                .map(|theta| Vector((i * theta.sin() + k * theta.cos()) * s + j * c))
                .collect::<Vec<Vector>>()
        })
        .collect();

    if cfg.clean_caps {
        for cap in [0.0, PI] {
            for alpha in [0.0, FRAC_PI_2] {
                great_circles.push(meridian(
                    alpha,
                    linspace(cap - sc_spacing, cap + sc_spacing, n),
                ));
            }
        }
    }

    NetGrid {
        great_circles,
        small_circles,
    }
}
