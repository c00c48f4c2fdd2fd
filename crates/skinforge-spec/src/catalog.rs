//! Immutable pattern catalog.
//!
//! Maps a skin identifier to its static visual properties. The catalog is
//! built once at process start (from the compiled-in set or a JSON file)
//! and is read-only afterwards, so it can be shared freely across
//! concurrent synthesis calls.

use std::collections::HashMap;
use std::path::Path;

use crate::error::CatalogError;
use crate::skin::SkinDefinition;

/// Skin id of the neutral-gray fallback definition returned for unknown ids.
pub const FALLBACK_SKIN_ID: &str = "default";

/// Immutable registry of skin definitions.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    skins: HashMap<String, SkinDefinition>,
    fallback: SkinDefinition,
}

impl PatternCatalog {
    /// The neutral-gray definition used when a skin id is not in the catalog.
    ///
    /// Mid-gray, no pattern color, middling metallic and roughness. Unknown
    /// ids never surface as errors; they render this instead.
    pub fn fallback_definition() -> SkinDefinition {
        SkinDefinition {
            skin_id: FALLBACK_SKIN_ID.to_string(),
            base_color: [0.5, 0.5, 0.5],
            pattern_color: None,
            metallic: 0.5,
            roughness: 0.5,
            paint_index: 0,
            def_index: 0,
        }
    }

    /// Build the compiled-in catalog of stock skins.
    pub fn builtin() -> Self {
        let defs = vec![
            SkinDefinition {
                skin_id: "crimson_web".to_string(),
                base_color: [0.45, 0.05, 0.05],
                pattern_color: Some([0.08, 0.02, 0.02]),
                metallic: 0.3,
                roughness: 0.5,
                paint_index: 12,
                def_index: 500,
            },
            SkinDefinition {
                skin_id: "case_hardened".to_string(),
                base_color: [0.25, 0.45, 0.65],
                pattern_color: Some([0.85, 0.65, 0.25]),
                metallic: 0.9,
                roughness: 0.25,
                paint_index: 44,
                def_index: 500,
            },
            SkinDefinition {
                skin_id: "fade".to_string(),
                base_color: [0.9, 0.3, 0.6],
                pattern_color: Some([0.95, 0.8, 0.3]),
                metallic: 0.8,
                roughness: 0.15,
                paint_index: 38,
                def_index: 500,
            },
            SkinDefinition {
                skin_id: "doppler".to_string(),
                base_color: [0.1, 0.05, 0.3],
                pattern_color: Some([0.7, 0.1, 0.3]),
                metallic: 0.85,
                roughness: 0.1,
                paint_index: 415,
                def_index: 500,
            },
            SkinDefinition {
                skin_id: "slaughter".to_string(),
                base_color: [0.75, 0.1, 0.1],
                pattern_color: Some([0.95, 0.35, 0.3]),
                metallic: 0.7,
                roughness: 0.2,
                paint_index: 59,
                def_index: 500,
            },
            SkinDefinition {
                skin_id: "night".to_string(),
                base_color: [0.08, 0.1, 0.15],
                pattern_color: Some([0.2, 0.25, 0.35]),
                metallic: 0.4,
                roughness: 0.6,
                paint_index: 193,
                def_index: 7,
            },
            SkinDefinition {
                skin_id: "boreal_forest".to_string(),
                base_color: [0.2, 0.3, 0.15],
                pattern_color: Some([0.35, 0.4, 0.25]),
                metallic: 0.1,
                roughness: 0.8,
                paint_index: 77,
                def_index: 7,
            },
            SkinDefinition {
                skin_id: "safari_mesh".to_string(),
                base_color: [0.55, 0.5, 0.35],
                pattern_color: Some([0.4, 0.38, 0.28]),
                metallic: 0.1,
                roughness: 0.85,
                paint_index: 72,
                def_index: 7,
            },
            SkinDefinition {
                skin_id: "scorched".to_string(),
                base_color: [0.25, 0.22, 0.18],
                pattern_color: Some([0.12, 0.1, 0.08]),
                metallic: 0.2,
                roughness: 0.75,
                paint_index: 175,
                def_index: 7,
            },
            SkinDefinition {
                skin_id: "urban_masked".to_string(),
                base_color: [0.45, 0.45, 0.48],
                pattern_color: Some([0.25, 0.25, 0.28]),
                metallic: 0.15,
                roughness: 0.7,
                paint_index: 17,
                def_index: 7,
            },
        ];

        // The builtin set is static and known-valid.
        Self::from_definitions(defs).expect("builtin catalog is valid")
    }

    /// Build a catalog from a list of definitions.
    ///
    /// Validates each definition and rejects duplicate ids.
    pub fn from_definitions(defs: Vec<SkinDefinition>) -> Result<Self, CatalogError> {
        let mut skins = HashMap::with_capacity(defs.len());
        for def in defs {
            def.validate()?;
            if skins.contains_key(&def.skin_id) {
                return Err(CatalogError::DuplicateSkin(def.skin_id));
            }
            skins.insert(def.skin_id.clone(), def);
        }
        Ok(Self {
            skins,
            fallback: Self::fallback_definition(),
        })
    }

    /// Load a catalog from a JSON array of definitions.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let defs: Vec<SkinDefinition> = serde_json::from_str(json)?;
        Self::from_definitions(defs)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Look up a skin definition.
    pub fn get(&self, skin_id: &str) -> Option<&SkinDefinition> {
        self.skins.get(skin_id)
    }

    /// Look up a skin definition, resolving unknown ids to the fallback.
    pub fn get_or_fallback(&self, skin_id: &str) -> &SkinDefinition {
        self.skins.get(skin_id).unwrap_or(&self.fallback)
    }

    /// Number of definitions (not counting the fallback).
    pub fn len(&self) -> usize {
        self.skins.len()
    }

    /// Whether the catalog has no definitions.
    pub fn is_empty(&self) -> bool {
        self.skins.is_empty()
    }

    /// Iterate over all definitions in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &SkinDefinition> {
        self.skins.values()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
