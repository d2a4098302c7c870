//! JSON configuration: circle family parameters and clipping scenes

use crate::algorithms::ConcentricCircles;
use crate::error::{Error, Result};
use crate::geometry::{ClipWindow, LineSegment};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Most rings a circle config may ask for
pub const MAX_RING_COUNT: u32 = 10_000;
/// Most vertices per ring a circle config may ask for
pub const MAX_RING_SEGMENTS: u32 = 100_000;

/// Read and deserialize a JSON file
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Serialize `value` as pretty JSON into a file
pub fn save_json<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Check a circle family before generating it
pub fn validate_circles(circles: &ConcentricCircles) -> Result<()> {
    let finite = [
        circles.center.x,
        circles.center.y,
        circles.min_radius,
        circles.max_radius,
        circles.base_thickness,
        circles.thickness_step,
    ]
    .iter()
    .all(|v| v.is_finite());
    if !finite {
        return Err(Error::InvalidConfig("all values must be finite".into()));
    }
    if circles.min_radius <= 0.0 || circles.max_radius < circles.min_radius {
        return Err(Error::InvalidConfig(format!(
            "radius range {}..{} must be positive and ascending",
            circles.min_radius, circles.max_radius
        )));
    }
    if circles.base_thickness <= 0.0 || circles.thickness_step < 0.0 {
        return Err(Error::InvalidConfig(
            "thickness must be positive and non-decreasing".into(),
        ));
    }
    if circles.segments < 3 {
        return Err(Error::InvalidConfig(format!(
            "a ring needs at least 3 segments, got {}",
            circles.segments
        )));
    }
    if circles.count > MAX_RING_COUNT || circles.segments > MAX_RING_SEGMENTS {
        return Err(Error::InvalidConfig(format!(
            "at most {MAX_RING_COUNT} rings of {MAX_RING_SEGMENTS} segments, got {} of {}",
            circles.count, circles.segments
        )));
    }
    Ok(())
}

/// Load circle parameters; missing fields keep their defaults
pub fn load_circles(path: impl AsRef<Path>) -> Result<ConcentricCircles> {
    let circles: ConcentricCircles = load_json(path)?;
    validate_circles(&circles)?;
    Ok(circles)
}

/// Clip window plus the lines to clip against it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipScene {
    pub window: ClipWindow,
    pub lines: Vec<LineSegment>,
}

impl ClipScene {
    pub fn new(window: ClipWindow, lines: Vec<LineSegment>) -> Self {
        Self { window, lines }
    }

    /// Load a scene from a JSON file. A scene without lines is rejected.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let scene: Self = load_json(path)?;
        if scene.lines.is_empty() {
            return Err(Error::InvalidLineCount);
        }
        Ok(scene)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save_json(self, path)
    }
}
