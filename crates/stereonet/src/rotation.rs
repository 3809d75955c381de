//! Oblique reference frames.
//!
//! A `Rotation` names the frame by azimuth, plunge and rake (degrees). The
//! matrix re-expresses world coordinates in that frame; its transpose maps
//! back.

use nalgebra::Matrix3;

/// Azimuth/plunge/rake triple in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub azimuth: f64,
    pub plunge: f64,
    pub rake: f64,
}

impl Rotation {
    #[inline]
    pub fn new(azimuth: f64, plunge: f64, rake: f64) -> Self {
        Self {
            azimuth,
            plunge,
            rake,
        }
    }

    #[inline]
    pub fn matrix(&self) -> Matrix3<f64> {
        build_rotation_matrix(self.azimuth, self.plunge, self.rake)
    }
}

/// `R = Rz(azimuth) · Rx(plunge) · Ry(rake)`, angles in degrees.
///
/// Applied to a column vector the rake acts first, then the plunge, then
/// the azimuth. The result is orthonormal with determinant +1.
pub fn build_rotation_matrix(azimuth: f64, plunge: f64, rake: f64) -> Matrix3<f64> {
    let (sa, ca) = azimuth.to_radians().sin_cos();
    let (sp, cp) = plunge.to_radians().sin_cos();
    let (sr, cr) = rake.to_radians().sin_cos();
    let r1 = Matrix3::new(
        cr, 0.0, sr, //
        0.0, 1.0, 0.0, //
        -sr, 0.0, cr,
    );
    let r2 = Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, cp, sp, //
        0.0, -sp, cp,
    );
    let r3 = Matrix3::new(
        ca, sa, 0.0, //
        -sa, ca, 0.0, //
        0.0, 0.0, 1.0,
    );
    r3 * r2 * r1
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn zero_rotation_is_identity() {
        let r = build_rotation_matrix(0.0, 0.0, 0.0);
        assert!((r - Matrix3::identity()).amax() < 1e-15);
    }

    #[test]
    fn rotation_is_orthonormal() {
        let r = Rotation::new(37.0, 62.0, -15.0).matrix();
        assert!((r.transpose() * r - Matrix3::identity()).amax() < 1e-12);
        assert!((r.determinant() - 1.0).abs() < 1e-12);
        let inv = r.try_inverse().unwrap();
        assert!((inv - r.transpose()).amax() < 1e-12);
    }

    #[test]
    fn azimuth_turns_north_to_east_frame() {
        // Azimuth 90: world north lands on the frame east axis.
        let r = build_rotation_matrix(90.0, 0.0, 0.0);
        let east = Vector3::new(1.0, 0.0, 0.0);
        assert!((r * east - Vector3::new(0.0, -1.0, 0.0)).norm() < 1e-12);
        let north = Vector3::new(0.0, 1.0, 0.0);
        assert!((r * north - Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn plunge_tilts_north_down() {
        let r = build_rotation_matrix(0.0, 90.0, 0.0);
        let north = Vector3::new(0.0, 1.0, 0.0);
        assert!((r * north - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
    }
}
