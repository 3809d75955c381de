//! Clip circles to the visible hemisphere and stitch the pieces back together.
//!
//! Purpose
//! - A circle sampled from an arbitrary start point and clipped at the
//!   primitive falls apart into runs; the first and last run are usually one
//!   visible arc cut at the sampling seam. Joining them avoids both a gap and
//!   a spurious chord across the plot.
//!
//! Model
//! - `clip_lines` keeps maximal runs with `z < z_tol` (points already in the
//!   oblique frame).
//! - `join_segments` merges two runs whose facing endpoints lie within the
//!   angular tolerance, trying tail→head, head←tail, tail↔tail and head↔head
//!   in that order, until a full pass over the queue merges nothing.
//! - The tolerance should match the sampling step so distinct nearby circles
//!   are never fused.

use std::collections::VecDeque;

use crate::cfg::JOIN_SLACK;
use crate::sphere::Vector;

/// Ordered run of points along one visible arc.
pub type Segment = Vec<Vector>;

/// Split `points` into maximal runs with `z < z_tol`, dropping the rest.
pub fn clip_lines(points: &[Vector], z_tol: f64) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut current: Segment = Vec::new();
    for p in points {
        if p.z() < z_tol {
            current.push(*p);
        } else if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Merge segments whose endpoints are within `angular_tol` radians.
///
/// A list with at most one segment is returned unchanged. Empty segments are
/// discarded.
pub fn join_segments(segments: Vec<Segment>, angular_tol: f64) -> Vec<Segment> {
    let mut queue: VecDeque<Segment> = segments.into_iter().filter(|s| !s.is_empty()).collect();
    let tol = angular_tol + JOIN_SLACK;
    // Number of consecutive pops that found no partner.
    let mut stale = 0;
    while queue.len() > 1 && stale < queue.len() {
        let Some(segment) = queue.pop_front() else {
            break;
        };
        let partner = queue
            .iter()
            .enumerate()
            .find_map(|(i, other)| facing_ends(&segment, other, tol).map(|join| (i, join)));
        match partner {
            Some((i, join)) => {
                let Some(other) = queue.remove(i) else {
                    queue.push_back(segment);
                    break;
                };
                queue.push_back(merge(segment, other, join));
                stale = 0;
            }
            None => {
                queue.push_back(segment);
                stale += 1;
            }
        }
    }
    queue.into_iter().collect()
}

/// Which endpoints of `a` and `b` meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Join {
    /// `a` then `b`.
    TailHead,
    /// `b` then `a`.
    HeadTail,
    /// `a` then reversed `b`.
    TailTail,
    /// reversed `a` then `b`.
    HeadHead,
}

fn facing_ends(a: &[Vector], b: &[Vector], tol: f64) -> Option<Join> {
    let (a0, a1) = (a.first()?, a.last()?);
    let (b0, b1) = (b.first()?, b.last()?);
    let close = |p: &Vector, q: &Vector| p.angle_with(q, false) <= tol;
    if close(a1, b0) {
        Some(Join::TailHead)
    } else if close(a0, b1) {
        Some(Join::HeadTail)
    } else if close(a1, b1) {
        Some(Join::TailTail)
    } else if close(a0, b0) {
        Some(Join::HeadHead)
    } else {
        None
    }
}

fn merge(mut a: Segment, mut b: Segment, join: Join) -> Segment {
    match join {
        Join::TailHead => {
            a.extend(b);
            a
        }
        Join::HeadTail => {
            b.extend(a);
            b
        }
        Join::TailTail => {
            a.extend(b.into_iter().rev());
            a
        }
        Join::HeadHead => {
            a.reverse();
            a.extend(b);
            a
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::{DEFAULT_JOIN_TOL, DEFAULT_STEP, DEFAULT_Z_TOL};

    fn assert_no_jumps(seg: &[Vector], max_step: f64) {
        for w in seg.windows(2) {
            assert!(w[0].angle_with(&w[1], true) <= max_step + 1e-9);
        }
    }

    #[test]
    fn fully_visible_circle_is_one_segment() {
        let axis = Vector::from_attitude(0.0, 90.0);
        let (upper, _) = axis.small_circle(0.3, 0.0, 0.0, DEFAULT_STEP, 0.0);
        let clipped = clip_lines(&upper, DEFAULT_Z_TOL);
        assert_eq!(clipped.len(), 1);
        assert_eq!(clipped[0], upper);
        let joined = join_segments(clipped.clone(), DEFAULT_JOIN_TOL);
        assert_eq!(joined, clipped);
    }

    #[test]
    fn invisible_points_vanish() {
        let up = Vector::new(0.0, 0.0, 1.0);
        assert!(clip_lines(&[up, up], DEFAULT_Z_TOL).is_empty());
        assert!(join_segments(Vec::new(), DEFAULT_JOIN_TOL).is_empty());
    }

    #[test]
    fn seam_cut_arc_is_rejoined() {
        // Horizontal axis: the small circle straddles the primitive and the
        // sampling starts inside the visible arc.
        let axis = Vector::from_attitude(90.0, 0.0);
        let (upper, _) = axis.small_circle(0.5, 0.0, 0.0, DEFAULT_STEP, 0.0);
        let clipped = clip_lines(&upper, DEFAULT_Z_TOL);
        assert_eq!(clipped.len(), 2);
        let joined = join_segments(clipped, DEFAULT_JOIN_TOL);
        assert_eq!(joined.len(), 1);
        assert_no_jumps(&joined[0], DEFAULT_STEP);
    }

    #[test]
    fn distinct_arcs_stay_apart() {
        let a = Vector::from_attitude(0.0, 0.0);
        let b = Vector::from_attitude(90.0, 0.0);
        let c = Vector::from_attitude(180.0, 0.0);
        let first = a.arc_to(&b, DEFAULT_STEP)[..40].to_vec();
        let second = b.arc_to(&c, DEFAULT_STEP);
        let joined = join_segments(vec![first, second], DEFAULT_JOIN_TOL);
        assert_eq!(joined.len(), 2);
    }

    #[test]
    fn every_pairing_joins_without_chords() {
        let a = Vector::from_attitude(0.0, 0.0);
        let b = Vector::from_attitude(90.0, 0.0);
        let arc = a.arc_to(&b, DEFAULT_STEP);
        let (left, right) = arc.split_at(45);
        let (left, right) = (left.to_vec(), right.to_vec());
        let rev = |s: &Segment| s.iter().rev().copied().collect::<Segment>();
        let cases = vec![
            vec![left.clone(), right.clone()],
            vec![right.clone(), left.clone()],
            vec![left.clone(), rev(&right)],
            vec![rev(&left), right.clone()],
        ];
        for case in cases {
            let joined = join_segments(case, DEFAULT_JOIN_TOL);
            assert_eq!(joined.len(), 1);
            assert_eq!(joined[0].len(), arc.len());
            assert_no_jumps(&joined[0], DEFAULT_STEP);
        }
    }

    #[test]
    fn partner_need_not_be_adjacent() {
        let a = Vector::from_attitude(0.0, 0.0);
        let b = Vector::from_attitude(90.0, 0.0);
        let arc = a.arc_to(&b, DEFAULT_STEP);
        let far = Vector::from_attitude(0.0, 60.0)
            .arc_to(&Vector::from_attitude(20.0, 60.0), DEFAULT_STEP);
        let joined = join_segments(
            vec![arc[..30].to_vec(), far, arc[30..].to_vec()],
            DEFAULT_JOIN_TOL,
        );
        assert_eq!(joined.len(), 2);
        assert!(joined.iter().any(|s| s.len() == arc.len()));
    }
}
