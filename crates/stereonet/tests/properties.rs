//! Property tests for attitude conversion, projections and circle generators.

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use stereonet::prelude::*;

fn attitude_strategy() -> impl Strategy<Value = (f64, f64)> {
    (0.0f64..360.0, 0.0f64..=90.0)
}

fn kind_strategy() -> impl Strategy<Value = ProjectionKind> {
    prop_oneof![
        Just(ProjectionKind::EqualAngle),
        Just(ProjectionKind::EqualArea),
        Just(ProjectionKind::Orthographic),
    ]
}

fn trend_close(a: f64, b: f64) -> bool {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d) < 1e-6
}

proptest! {
    #[test]
    fn attitude_round_trips((trend, plunge) in attitude_strategy()) {
        let (t, p) = Vector::from_attitude(trend, plunge).attitude();
        // asin is ill-conditioned next to the pole.
        prop_assert!((p - plunge).abs() < 1e-5);
        // Trend is undefined at the pole.
        if plunge < 89.999 {
            prop_assert!(trend_close(t, trend), "trend {} -> {}", trend, t);
        }
        prop_assert!((0.0..360.0).contains(&t));
    }

    #[test]
    fn projection_round_trips(
        (trend, plunge) in attitude_strategy(),
        kind in kind_strategy(),
    ) {
        let v = Vector::from_attitude(trend, plunge);
        let proj = Projection::new(kind, None);
        let xy = proj.direct(&[v], false, true);
        let back = proj.inverse(&xy, true);
        // Orthographic loses digits of z right at the rim.
        prop_assert!((back[0].0 - v.0).norm() < 1e-7);
    }

    #[test]
    fn great_circle_points_are_unit_and_perpendicular((trend, plunge) in attitude_strategy()) {
        let axis = Vector::from_attitude(trend, plunge);
        for p in axis.great_circle(10f64.to_radians(), 0.0) {
            prop_assert!((p.length() - 1.0).abs() < 1e-9);
            prop_assert!((axis.angle_with(&p, true) - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
        }
    }

    #[test]
    fn small_circle_points_sit_at_alpha(
        (trend, plunge) in attitude_strategy(),
        alpha in 0.01f64..3.1,
    ) {
        let axis = Vector::from_attitude(trend, plunge);
        let (upper, lower) = axis.small_circle(alpha, 0.0, 0.0, 10f64.to_radians(), 0.0);
        for (u, l) in upper.iter().zip(&lower) {
            prop_assert!((u.length() - 1.0).abs() < 1e-9);
            prop_assert!((l.length() - 1.0).abs() < 1e-9);
            prop_assert!((axis.angle_with(u, true) - alpha).abs() < 1e-9);
        }
    }

    #[test]
    fn arcs_stay_on_sphere(a in attitude_strategy(), b in attitude_strategy()) {
        let va = Vector::from_attitude(a.0, a.1);
        let vb = Vector::from_attitude(b.0, b.1);
        prop_assume!(va.angle_with(&vb, true) > 1e-3);
        prop_assume!(va.angle_with(&vb, true) < std::f64::consts::PI - 1e-3);
        for p in va.arc_to(&vb, 5f64.to_radians()) {
            prop_assert!((p.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn samples_are_unit(seed in any::<u64>(), kappa in 0.0f64..500.0) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mean = Vector::from_attitude(45.0, 45.0);
        for v in &sample_fisher(&mut rng, mean, kappa, 16).unwrap() {
            prop_assert!((v.length() - 1.0).abs() < 1e-9);
        }
        for v in &sample_uniform(&mut rng, 16) {
            prop_assert!((v.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn joining_a_single_segment_is_identity((trend, plunge) in attitude_strategy()) {
        let circle = Vector::from_attitude(trend, plunge).great_circle(DEFAULT_STEP, 0.0);
        let single = vec![circle];
        prop_assert_eq!(join_segments(single.clone(), DEFAULT_JOIN_TOL), single);
    }
}

#[test]
fn fit_recovers_fisher_mean() {
    let mut rng = StdRng::seed_from_u64(99);
    let mean = Vector::from_attitude(315.0, 20.0);
    let data = sample_fisher(&mut rng, mean, 200.0, 20).unwrap();
    let axis = fit_small_circle(&data);
    let err = axis
        .angle_with(&mean, true)
        .min(axis.angle_with(&-mean, true))
        .to_degrees();
    assert!(err < 5.0, "fit off by {err} deg");
}
