//! Point field configuration.

use serde::{Deserialize, Serialize};

/// Where point positions come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointSource {
    /// Procedural double-sided spiral placement.
    Spiral,
    /// Positions sampled from a loaded OBJ model.
    Mesh,
}

/// Point field settings: count, source, colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsConfig {
    /// Number of points in the field (valid range: 1-1_000_000).
    pub count: usize,
    pub source: PointSource,
    /// Model path for `source = "mesh"`. Ignored for spiral.
    pub model: Option<String>,
    /// Primary point color as hex string.
    pub color1: String,
    /// Secondary point color as hex string.
    pub color2: String,
    /// Tertiary point color as hex string.
    pub color3: String,
    /// Base point sprite size in pixels (valid range: 0.5-16.0).
    pub size: f32,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            count: 30_000,
            source: PointSource::Spiral,
            model: None,
            color1: "#612574".into(),
            color2: "#293583".into(),
            color3: "#612574".into(),
            size: 2.0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
