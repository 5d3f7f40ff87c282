//! Configuration for the fracture intersection engine.

use crate::Tolerance;

/// Parameters controlling a network intersection run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionConfig {
    /// Tolerance thresholds shared by every geometric stage.
    pub tolerance: Tolerance,
}

impl Default for IntersectionConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
        }
    }
}

impl IntersectionConfig {
    /// Default settings with every tolerance set to `epsilon`.
    pub fn with_tolerance(epsilon: f64) -> Self {
        Self {
            tolerance: Tolerance::uniform(epsilon),
        }
    }

    /// Looser tolerances for networks read from text with few digits.
    pub fn loose() -> Self {
        Self::with_tolerance(1e-6)
    }
}
