//! Skinforge CLI library.
//!
//! Command implementations for the `skinforge` binary: rendering skin
//! previews to PNG, listing the pattern catalog, and parsing inventory
//! metadata text.

pub mod commands;
