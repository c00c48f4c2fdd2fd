//! Wear-driven render material parameters.

use serde::{Deserialize, Serialize};

/// Physically-based material parameters for the consuming renderer.
///
/// Derived deterministically from the wear float alone; the pattern seed
/// plays no part, so two items with the same float share identical
/// materials regardless of pattern variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialParameters {
    pub metalness: f64,
    pub roughness: f64,
    pub env_map_intensity: f64,
    pub normal_scale: f64,
}

impl MaterialParameters {
    /// Derive material parameters from a wear float.
    ///
    /// Linear in the clamped float: worn surfaces get rougher, less
    /// metallic, and reflect less of the environment. All outputs are
    /// clamped to [0, 1].
    pub fn derive(float: f64) -> Self {
        let f = if float.is_nan() { 0.0 } else { float.clamp(0.0, 1.0) };
        Self {
            roughness: (0.2 + f * 0.8).clamp(0.0, 1.0),
            metalness: (0.8 - f * 0.6).clamp(0.0, 1.0),
            env_map_intensity: (1.0 - f * 0.7).clamp(0.0, 1.0),
            normal_scale: (1.0 - f * 0.3).clamp(0.0, 1.0),
        }
    }
}
