//! Unit-sphere directions (`Vector`) and collections of them (`VectorSet`).
//!
//! Purpose
//! - Convert field measurements (trend/plunge, dip direction/dip) to direction
//!   cosines and back.
//! - Generate the circle and arc primitives that a stereonet draws.
//!
//! Assumptions and conventions
//! - `x` east, `y` north, `z` up. Attitudes point into the lower hemisphere.
//! - Round-off outside `[-1, 1]` is clipped before `acos`/`asin`; nothing in
//!   this module reports numeric domain errors.
//! - Normalizing a zero vector is a caller error except in
//!   `normalized_cross_with`, which returns the zero vector unchanged.

mod set;
pub(crate) mod util;
mod vector;

pub use set::VectorSet;
pub use vector::{AttitudeError, Vector};
