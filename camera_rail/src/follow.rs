//! Frame-rate independent smoothing of the rendered camera toward the rail.

use crate::geometry::Point3;
use crate::rail::Pose;

/// Damping used by the site driver; higher values are snappier.
pub const DEFAULT_DAMPING: f64 = 5.0;

/// Seconds of frames accumulated before [`FrameStats`] reports.
pub const REPORT_WINDOW_SECS: f64 = 3.0;

/// Fraction of the remaining distance covered in a frame of `dt` seconds.
///
/// Returns zero for non-positive or non-finite `dt`.
pub fn smoothing_factor(damping: f64, dt: f64) -> f64 {
    if !dt.is_finite() || dt <= 0.0 || !damping.is_finite() || damping <= 0.0 {
        return 0.0;
    }
    1.0 - (-damping * dt).exp()
}

/// Rendered camera state chasing the rail pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFollower {
    pub position: Point3,
    pub look_at: Point3,
    pub damping: f64,
}

impl CameraFollower {
    pub fn new(initial: Pose, damping: f64) -> Self {
        Self {
            position: initial.position,
            look_at: initial.target,
            damping,
        }
    }

    pub fn from_pose(initial: Pose) -> Self {
        Self::new(initial, DEFAULT_DAMPING)
    }

    /// Moves toward `target` for a frame lasting `dt` seconds and returns the
    /// resulting camera pose.
    pub fn update(&mut self, target: &Pose, dt: f64) -> Pose {
        let alpha = smoothing_factor(self.damping, dt);
        self.position = self.position.lerp(target.position, alpha);
        self.look_at = self.look_at.lerp(target.target, alpha);
        self.pose()
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.look_at)
    }
}

/// Summary emitted once by [`FrameStats`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frames: u64,
    pub avg_delta_ms: f64,
    pub fps: f64,
}

/// One-shot frame timing probe for the render loop.
#[derive(Debug, Clone)]
pub struct FrameStats {
    frames: u64,
    elapsed: f64,
    window: f64,
    active: bool,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(REPORT_WINDOW_SECS)
    }
}

impl FrameStats {
    pub fn new(window: f64) -> Self {
        Self {
            frames: 0,
            elapsed: 0.0,
            window,
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Records a frame. Returns the report on the frame that closes the
    /// window, `None` before and after.
    pub fn record(&mut self, dt: f64) -> Option<FrameReport> {
        if !self.active || !dt.is_finite() || dt < 0.0 {
            return None;
        }
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed < self.window {
            return None;
        }
        self.active = false;
        let report = FrameReport {
            frames: self.frames,
            avg_delta_ms: self.elapsed / self.frames as f64 * 1000.0,
            fps: self.frames as f64 / self.elapsed,
        };
        log::info!(
            "camera rail performance: avg delta {:.2}ms, FPS {:.1}",
            report.avg_delta_ms,
            report.fps
        );
        Some(report)
    }
}
