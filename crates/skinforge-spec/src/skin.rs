//! Skin definition type.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Static visual properties of a single skin.
///
/// Definitions are loaded once into the [`PatternCatalog`](crate::PatternCatalog)
/// at process start and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinDefinition {
    /// Catalog key, e.g. `"crimson_web"`.
    pub skin_id: String,
    /// Base color as [R, G, B] (0.0 to 1.0).
    pub base_color: [f64; 3],
    /// Secondary pattern color as [R, G, B] (0.0 to 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_color: Option<[f64; 3]>,
    /// Metallic value (0.0 to 1.0).
    pub metallic: f64,
    /// Roughness value (0.0 to 1.0).
    pub roughness: f64,
    /// Game paint-kit index.
    pub paint_index: u32,
    /// Game item definition index.
    pub def_index: u32,
}

impl SkinDefinition {
    /// Validate that all scalar fields are finite and within [0, 1].
    ///
    /// Runs at catalog load time only; synthesis never validates.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.skin_id.is_empty() {
            return Err(CatalogError::InvalidDefinition {
                skin_id: "<empty>".to_string(),
                reason: "skin_id must not be empty".to_string(),
            });
        }

        let check_unit = |name: &str, value: f64| -> Result<(), CatalogError> {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(CatalogError::InvalidDefinition {
                    skin_id: self.skin_id.clone(),
                    reason: format!("{} must be in [0, 1], got {}", name, value),
                });
            }
            Ok(())
        };

        for (i, c) in self.base_color.iter().enumerate() {
            check_unit(&format!("base_color[{}]", i), *c)?;
        }
        if let Some(pattern) = &self.pattern_color {
            for (i, c) in pattern.iter().enumerate() {
                check_unit(&format!("pattern_color[{}]", i), *c)?;
            }
        }
        check_unit("metallic", self.metallic)?;
        check_unit("roughness", self.roughness)?;

        Ok(())
    }
}
