//! Skinforge Canonical Data Model
//!
//! This crate provides the types shared between the synthesis engine and its
//! callers: skin definitions and the immutable pattern catalog, wear-band
//! classification, render material parameter derivation, and parsing of the
//! inventory text contract.
//!
//! Everything here is deliberately infallible on the synthesis path: out of
//! range wear floats and pattern seeds are clamped rather than rejected, and
//! unknown skin identifiers resolve to a documented neutral-gray fallback.
//! A broken skin preview must never interrupt a render frame, so the only
//! fallible surface is catalog *loading*.
//!
//! # Example
//!
//! ```
//! use skinforge_spec::{PatternCatalog, PatternSeed, WearSample, MaterialParameters, WearBand};
//!
//! let catalog = PatternCatalog::builtin();
//! let def = catalog.get_or_fallback("crimson_web");
//! assert_eq!(def.skin_id, "crimson_web");
//!
//! let sample = WearSample::classify(0.02);
//! assert_eq!(sample.band, WearBand::FactoryNew);
//!
//! let material = MaterialParameters::derive(0.02);
//! assert!((material.roughness - 0.216).abs() < 1e-9);
//!
//! let seed = PatternSeed::new(42);
//! assert_eq!(seed.value(), 42);
//! ```
//!
//! # Modules
//!
//! - [`skin`]: Skin definition type and load-time validation
//! - [`catalog`]: Immutable skin registry with built-in set and JSON loading
//! - [`wear`]: Wear bands, classification thresholds, pattern seeds
//! - [`material`]: Wear-driven render material parameters
//! - [`inventory`]: Item metadata text parsing (float value, pattern template)
//! - [`error`]: Catalog loading errors

pub mod catalog;
pub mod error;
pub mod inventory;
pub mod material;
pub mod skin;
pub mod wear;

// Re-export commonly used types at the crate root
pub use catalog::{PatternCatalog, FALLBACK_SKIN_ID};
pub use error::CatalogError;
pub use inventory::{parse_item_text, ItemWearInfo};
pub use material::MaterialParameters;
pub use skin::SkinDefinition;
pub use wear::{
    PatternSeed, WearBand, WearSample, FACTORY_NEW_MAX, FIELD_TESTED_MAX, MINIMAL_WEAR_MAX,
    PATTERN_SEED_MAX, WELL_WORN_MAX,
};
