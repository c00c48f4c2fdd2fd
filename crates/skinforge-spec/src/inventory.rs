//! Inventory item metadata parsing.
//!
//! Item import collaborators hand over free-form inspection text; the only
//! fields the engine cares about are the wear float and the pattern
//! template. Both are optional and anything unparseable is treated as
//! absent rather than an error.

use std::sync::OnceLock;

use regex::Regex;

/// Wear information extracted from item metadata text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemWearInfo {
    /// Parsed `Float Value: <f>` if present.
    pub float_value: Option<f64>,
    /// Parsed `Pattern Template: <n>` if present.
    pub pattern_seed: Option<i64>,
}

fn float_value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Float Value: ([0-9.]+)").expect("valid regex"))
}

fn pattern_template_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Pattern Template: (\d+)").expect("valid regex"))
}

/// Extract wear float and pattern template from inventory text.
///
/// Numbers that fail to parse (e.g. `Float Value: ...`) are treated as
/// absent. The caller clamps via [`WearSample::classify`](crate::WearSample)
/// and [`PatternSeed::new`](crate::PatternSeed).
pub fn parse_item_text(text: &str) -> ItemWearInfo {
    let float_value = float_value_re()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok());

    let pattern_seed = pattern_template_re()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok());

    ItemWearInfo {
        float_value,
        pattern_seed,
    }
}
