//! Camera rail mapping scroll progress onto a pose along a waypoint path.
//!
//! The rail owns an ordered list of waypoints and treats consecutive pairs as
//! Catmull-Rom segments. Progress in `[0, 1]` is split evenly across the
//! segments, so each segment takes the same share of the scroll range
//! regardless of its length.

use std::sync::{Arc, RwLock};

use crate::error::RailError;
use crate::geometry::{Line3, Point3};
use crate::spline::{evaluate, tangent, CatmullRomSegment};

/// Progress offset used to sample the look-at target ahead of the camera.
pub const LOOK_AHEAD_DELTA: f64 = 0.01;

/// Minimum number of waypoints a rail accepts.
pub const MIN_WAYPOINTS: usize = 2;

/// Default fly-through path: intro, transition, skills, impact, projects and
/// finale.
pub const DEFAULT_WAYPOINTS: [Point3; 6] = [
    Point3 { x: 0.0, y: 0.0, z: 50.0 },
    Point3 { x: 10.0, y: 5.0, z: 20.0 },
    Point3 { x: -15.0, y: -10.0, z: 0.0 },
    Point3 { x: 20.0, y: 15.0, z: -30.0 },
    Point3 { x: -25.0, y: 5.0, z: -70.0 },
    Point3 { x: 0.0, y: 0.0, z: -120.0 },
];

/// Camera position together with the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    pub position: Point3,
    pub target: Point3,
}

impl Pose {
    pub fn new(position: Point3, target: Point3) -> Self {
        Self { position, target }
    }
}

/// Location of a progress value on the rail: segment `index` spans
/// waypoints `index` and `index + 1`, `local_t` is the fraction along it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub local_t: f64,
}

/// Clamps progress into `[0, 1]`; NaN maps to the start of the rail.
pub fn clamp_progress(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Ordered waypoint path that the camera travels along.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRail {
    waypoints: Vec<Point3>,
}

impl Default for CameraRail {
    fn default() -> Self {
        Self {
            waypoints: DEFAULT_WAYPOINTS.to_vec(),
        }
    }
}

impl CameraRail {
    /// Creates a rail through `waypoints`.
    pub fn new(waypoints: Vec<Point3>) -> Result<Self, RailError> {
        validate_waypoints(&waypoints)?;
        Ok(Self { waypoints })
    }

    /// Replaces the whole waypoint list. The current list is kept when the
    /// new one is rejected.
    pub fn set_waypoints(&mut self, waypoints: Vec<Point3>) -> Result<(), RailError> {
        validate_waypoints(&waypoints)?;
        log::debug!("camera rail set to {} waypoints", waypoints.len());
        self.waypoints = waypoints;
        Ok(())
    }

    pub fn waypoints(&self) -> &[Point3] {
        &self.waypoints
    }

    pub fn segment_count(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// Resolves progress `t` to a segment and local parameter.
    pub fn segment_at(&self, t: f64) -> Segment {
        let t = clamp_progress(t);
        let num_segments = self.segment_count();
        let segment_float = t * num_segments as f64;
        let index = segment_float.floor() as usize;
        if index >= num_segments {
            return Segment {
                index: num_segments - 1,
                local_t: 1.0,
            };
        }
        Segment {
            index,
            local_t: segment_float - index as f64,
        }
    }

    /// Curve segment for `segment`, with the outer controls clamped to the
    /// path ends.
    pub fn curve(&self, segment: Segment) -> CatmullRomSegment {
        let last = self.waypoints.len() - 1;
        let i = segment.index;
        CatmullRomSegment::new(
            self.waypoints[i.saturating_sub(1)],
            self.waypoints[i],
            self.waypoints[i + 1],
            self.waypoints[(i + 2).min(last)],
        )
    }

    /// Point on the rail at progress `t`.
    pub fn point_at(&self, t: f64) -> Point3 {
        let segment = self.segment_at(t);
        let [p0, p1, p2, p3] = self.curve(segment).points;
        evaluate(p0, p1, p2, p3, segment.local_t)
    }

    /// Unit travel direction at progress `t`.
    pub fn tangent_at(&self, t: f64) -> Point3 {
        let segment = self.segment_at(t);
        let [p0, p1, p2, p3] = self.curve(segment).points;
        tangent(p0, p1, p2, p3, segment.local_t)
    }

    /// Camera pose at progress `t`.
    ///
    /// The target is the rail point `LOOK_AHEAD_DELTA` further along. Within
    /// that distance of the end, or wherever the look-ahead point lands on the
    /// position (repeated waypoints), the target is instead projected one
    /// unit ahead of the position along the direction of travel, so it never
    /// collapses onto the position.
    pub fn pose(&self, t: f64) -> Pose {
        let t = clamp_progress(t);
        let position = self.point_at(t);
        let mut target = self.point_at((t + LOOK_AHEAD_DELTA).min(1.0));

        let mut direction = (target - position).normalize();
        if t >= 1.0 - LOOK_AHEAD_DELTA || direction.is_zero() {
            if direction.is_zero() {
                direction = self.tangent_at(t);
            }
            if direction.is_zero() {
                direction = self.closing_direction();
            }
            target = position + direction;
        }

        Pose { position, target }
    }

    /// Poses at `steps + 1` evenly spaced progress values from 0 to 1.
    pub fn sample(&self, steps: usize) -> Vec<Pose> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| self.pose(i as f64 / steps as f64))
            .collect()
    }

    // Last non-degenerate chord of the path, or +z when every waypoint
    // coincides.
    fn closing_direction(&self) -> Point3 {
        self.waypoints
            .windows(2)
            .rev()
            .map(|pair| Line3::new(pair[0], pair[1]).direction())
            .find(|d| !d.is_zero())
            .unwrap_or(Point3::new(0.0, 0.0, 1.0))
    }
}

fn validate_waypoints(waypoints: &[Point3]) -> Result<(), RailError> {
    if waypoints.len() < MIN_WAYPOINTS {
        return Err(RailError::too_few_waypoints(waypoints.len()));
    }
    if let Some(i) = waypoints.iter().position(|p| !p.is_finite()) {
        return Err(RailError::InvalidInput(format!(
            "waypoint {} has a non-finite coordinate",
            i
        )));
    }
    Ok(())
}

/// Thread-safe rail handle for render loops that reconfigure the path.
///
/// Updates swap the whole rail at once; readers evaluate against the rail
/// they grabbed and never see a partial list.
#[derive(Debug, Clone, Default)]
pub struct SharedCameraRail {
    inner: Arc<RwLock<Arc<CameraRail>>>,
}

impl SharedCameraRail {
    pub fn new(rail: CameraRail) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(rail))),
        }
    }

    /// Current rail snapshot.
    pub fn snapshot(&self) -> Arc<CameraRail> {
        match self.inner.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    pub fn set_waypoints(&self, waypoints: Vec<Point3>) -> Result<(), RailError> {
        let rail = Arc::new(CameraRail::new(waypoints)?);
        log::debug!("swapping shared camera rail ({} waypoints)", rail.waypoints().len());
        match self.inner.write() {
            Ok(mut guard) => *guard = rail,
            Err(poisoned) => *poisoned.into_inner() = rail,
        }
        Ok(())
    }

    pub fn pose(&self, t: f64) -> Pose {
        self.snapshot().pose(t)
    }
}
