//! Core library for scroll-driven camera rails.
//!
//! A [`CameraRail`] turns a progress value in `[0, 1]` into a camera
//! [`Pose`] by evaluating centripetal Catmull-Rom segments through an
//! ordered waypoint list.

pub mod error;
pub mod follow;
pub mod geometry;
pub mod io;
pub mod rail;
pub mod scroll;
pub mod spline;

pub use error::RailError;
pub use follow::{CameraFollower, FrameReport, FrameStats};
pub use geometry::Point3;
pub use io::RailConfig;
pub use rail::{CameraRail, Pose, Segment, SharedCameraRail};
pub use scroll::scroll_progress;
