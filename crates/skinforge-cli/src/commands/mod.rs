//! CLI command implementations

pub mod catalog;
pub mod parse;
pub mod render;

use std::path::Path;

use anyhow::{Context, Result};
use skinforge_spec::PatternCatalog;

/// Load the catalog from a JSON file, or fall back to the builtin set.
pub(crate) fn load_catalog(file: Option<&str>) -> Result<PatternCatalog> {
    match file {
        Some(path) => PatternCatalog::from_json_file(Path::new(path))
            .with_context(|| format!("failed to load catalog: {}", path)),
        None => Ok(PatternCatalog::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_file_loads_builtin() {
        let catalog = load_catalog(None).unwrap();
        assert!(catalog.get("crimson_web").is_some());
    }

    #[test]
    fn loads_custom_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{
                "skin_id": "custom_skin",
                "base_color": [0.1, 0.2, 0.3],
                "metallic": 0.5,
                "roughness": 0.5,
                "paint_index": 1,
                "def_index": 1
            }]"#,
        )
        .unwrap();

        let catalog = load_catalog(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("custom_skin").is_some());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_catalog(Some("/nonexistent/catalog.json")).is_err());
    }
}
