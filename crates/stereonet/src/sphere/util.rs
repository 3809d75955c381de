//! Small sampling helpers shared by the circle generators.

const ARANGE_EPS: f64 = 1e-9;

/// Half-open range `start, start + step, ...` below `stop`.
///
/// Length is `ceil((stop - start) / step)`, ignoring round-off that would
/// land a sample on `stop` itself; empty for non-positive or non-finite steps.
pub(crate) fn arange(start: f64, stop: f64, step: f64) -> impl Iterator<Item = f64> {
    let n = if step.is_finite() && step > 0.0 && stop > start {
        ((stop - start) / step - ARANGE_EPS).ceil().max(0.0) as usize
    } else {
        0
    };
    (0..n).map(move |k| start + (k as f64) * step)
}

/// `n` evenly spaced samples over the closed interval `[start, stop]`.
pub(crate) fn linspace(start: f64, stop: f64, n: usize) -> impl Iterator<Item = f64> {
    let div = if n > 1 { (n - 1) as f64 } else { 1.0 };
    let delta = (stop - start) / div;
    (0..n).map(move |k| {
        if k + 1 == n && n > 1 {
            stop
        } else {
            start + (k as f64) * delta
        }
    })
}

/// Clamp into `[-1, 1]` before `acos`/`asin`.
#[inline]
pub(crate) fn clip_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/// Wrap degrees into `[0, 360)`.
#[inline]
pub(crate) fn wrap_degrees(deg: f64) -> f64 {
    let w = deg.rem_euclid(360.0);
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arange_matches_half_open_count() {
        let xs: Vec<f64> = arange(0.0, 1.0, 0.25).collect();
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(arange(0.0, 1.0, 0.0).count(), 0);
        assert_eq!(arange(1.0, 0.0, 0.1).count(), 0);
    }

    #[test]
    fn linspace_hits_both_ends() {
        let xs: Vec<f64> = linspace(-1.0, 1.0, 5).collect();
        assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(linspace(0.0, 1.0, 1).collect::<Vec<_>>(), vec![0.0]);
    }

    #[test]
    fn wrap_degrees_stays_half_open() {
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert!((wrap_degrees(-90.0) - 270.0).abs() < 1e-12);
        assert!(wrap_degrees(-1e-17) < 360.0);
    }
}
