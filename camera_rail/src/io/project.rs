use serde::{Deserialize, Serialize};

use crate::error::RailError;
use crate::follow::DEFAULT_DAMPING;
use crate::geometry::Point3;
use crate::rail::CameraRail;

fn default_damping() -> f64 {
    DEFAULT_DAMPING
}

/// Persisted rail settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailConfig {
    /// Custom path; the built-in fly-through is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<Vec<Point3>>,
    #[serde(default = "default_damping")]
    pub damping: f64,
}

impl RailConfig {
    pub fn new() -> Self {
        Self {
            waypoints: None,
            damping: DEFAULT_DAMPING,
        }
    }

    /// Builds the configured rail.
    pub fn rail(&self) -> Result<CameraRail, RailError> {
        match &self.waypoints {
            Some(points) => CameraRail::new(points.clone()),
            None => Ok(CameraRail::default()),
        }
    }

    /// Loads and validates a config file.
    pub fn load(path: &str) -> Result<Self, RailError> {
        let contents = crate::io::read_to_string(path)?;
        let config: RailConfig = serde_json::from_str(&contents)?;
        config.rail()?;
        Ok(config)
    }
}

impl Default for RailConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub fn read_config_json(path: &str) -> std::io::Result<RailConfig> {
    let contents = crate::io::read_to_string(path)?;
    let config: RailConfig = serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(config)
}

pub fn write_config_json(path: &str, config: &RailConfig) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(config)
        .map_err(std::io::Error::other)?;
    crate::io::write_string(path, &json)
}
