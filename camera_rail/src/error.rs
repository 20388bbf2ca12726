//! Error type for camera rail configuration.

/// Errors raised while configuring a camera rail.
#[derive(thiserror::Error, Debug)]
pub enum RailError {
    /// The waypoint list cannot describe a path.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RailError {
    pub(crate) fn too_few_waypoints(count: usize) -> Self {
        RailError::InvalidInput(format!(
            "a camera rail needs at least 2 waypoints, got {}",
            count
        ))
    }
}
