//! Centripetal Catmull-Rom evaluation of a single curve segment.
//!
//! A segment is described by four points: `p1` and `p2` are the knots the
//! curve passes through, `p0` and `p3` are the outer control points shaping
//! the curve near those knots. Knot spacing uses the square root of the
//! chord length (alpha = 0.5), which keeps cusps and self-intersections out of
//! unevenly spaced paths.

use crate::geometry::{distance3, lerp3, Point3};

/// Centripetal parameterization exponent.
pub const ALPHA: f64 = 0.5;

/// Knot spacing substituted when two consecutive points coincide.
pub const KNOT_EPSILON: f64 = 1e-4;

/// Half-width of the central difference used by [`tangent`].
pub const TANGENT_STEP: f64 = 0.001;

fn next_knot(t_prev: f64, a: Point3, b: Point3) -> f64 {
    let spacing = distance3(a, b).powf(ALPHA);
    if spacing > 0.0 {
        t_prev + spacing
    } else {
        t_prev + KNOT_EPSILON
    }
}

/// Returns the point a fraction `t` of the way along the segment from `p1`
/// to `p2`.
///
/// `evaluate(.., 0.0)` is `p1` and `evaluate(.., 1.0)` is `p2` up to
/// floating-point rounding.
pub fn evaluate(p0: Point3, p1: Point3, p2: Point3, p3: Point3, t: f64) -> Point3 {
    let t0 = 0.0;
    let t1 = next_knot(t0, p0, p1);
    let t2 = next_knot(t1, p1, p2);
    let t3 = next_knot(t2, p2, p3);

    let g = t1 + t * (t2 - t1);

    let a1 = lerp3(p0, p1, (g - t0) / (t1 - t0));
    let a2 = lerp3(p1, p2, (g - t1) / (t2 - t1));
    let a3 = lerp3(p2, p3, (g - t2) / (t3 - t2));

    let b1 = lerp3(a1, a2, (g - t0) / (t2 - t0));
    let b2 = lerp3(a2, a3, (g - t1) / (t3 - t1));

    lerp3(b1, b2, (g - t1) / (t2 - t1))
}

/// Unit tangent of the segment at `t`, by central difference.
///
/// Returns [`Point3::ZERO`] when both samples coincide, e.g. on a segment
/// whose knots and controls all sit on one spot.
pub fn tangent(p0: Point3, p1: Point3, p2: Point3, p3: Point3, t: f64) -> Point3 {
    let ta = (t - TANGENT_STEP).max(0.0);
    let tb = (t + TANGENT_STEP).min(1.0);
    let a = evaluate(p0, p1, p2, p3, ta);
    let b = evaluate(p0, p1, p2, p3, tb);
    let dir = (b - a).normalize();
    if dir.is_zero() {
        log::debug!("degenerate spline segment at t={:.4}, tangent is zero", t);
    }
    dir
}

/// A single Catmull-Rom segment bound to its four control points.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CatmullRomSegment {
    pub points: [Point3; 4],
}

impl CatmullRomSegment {
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Start knot.
    pub fn start(&self) -> Point3 {
        self.points[1]
    }

    /// End knot.
    pub fn end(&self) -> Point3 {
        self.points[2]
    }

    pub fn point_at(&self, t: f64) -> Point3 {
        let [p0, p1, p2, p3] = self.points;
        evaluate(p0, p1, p2, p3, t)
    }

    pub fn tangent_at(&self, t: f64) -> Point3 {
        let [p0, p1, p2, p3] = self.points;
        tangent(p0, p1, p2, p3, t)
    }

    /// Evenly spaced points from the start knot to the end knot inclusive.
    ///
    /// `resolution` is the number of sub-intervals; zero yields just the two
    /// knots.
    pub fn sample(&self, resolution: usize) -> Vec<Point3> {
        let steps = resolution.max(1);
        (0..=steps)
            .map(|k| self.point_at(k as f64 / steps as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point3, b: Point3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn knots_are_hit_exactly() {
        let p0 = Point3::new(-3.0, 1.0, 0.5);
        let p1 = Point3::new(0.0, 0.0, 0.0);
        let p2 = Point3::new(4.0, 2.0, -1.0);
        let p3 = Point3::new(9.0, -2.0, 3.0);
        assert!(close(evaluate(p0, p1, p2, p3, 0.0), p1));
        assert!(close(evaluate(p0, p1, p2, p3, 1.0), p2));
    }

    #[test]
    fn coincident_outer_controls_stay_finite() {
        // Clamped rail ends duplicate a knot into the outer control slot.
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::new(5.0, 2.0, 3.0);
        for k in 0..=10 {
            let t = k as f64 / 10.0;
            let v = evaluate(p, p, q, q, t);
            assert!(v.is_finite());
            assert!(v.x >= 1.0 - 1e-9 && v.x <= 5.0 + 1e-9);
        }
        assert!(close(evaluate(p, p, q, q, 0.0), p));
        assert!(close(evaluate(p, p, q, q, 1.0), q));
    }

    #[test]
    fn fully_degenerate_segment_does_not_fail() {
        let p = Point3::new(2.0, 2.0, 2.0);
        let v = evaluate(p, p, p, p, 0.3);
        assert!(close(v, p));
        let tan = tangent(p, p, p, p, 0.3);
        assert!(tan.is_zero());
    }

    #[test]
    fn segment_sample_includes_both_knots() {
        let seg = CatmullRomSegment::new(
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        let pts = seg.sample(4);
        assert_eq!(pts.len(), 5);
        assert!(close(pts[0], seg.start()));
        assert!(close(pts[4], seg.end()));
        assert_eq!(seg.sample(0).len(), 2);
    }

    #[test]
    fn tangent_at_domain_edges_is_one_sided() {
        let seg = CatmullRomSegment::new(
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        );
        let start = seg.tangent_at(0.0);
        let end = seg.tangent_at(1.0);
        assert!((start.y - 1.0).abs() < 1e-6);
        assert!((end.y - 1.0).abs() < 1e-6);
    }
}
