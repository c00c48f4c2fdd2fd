//! Wear bands, classification, and pattern seeds.
//!
//! The wear "float" is the game's per-item wear scalar in [0, 1]; lower means
//! less worn. Band thresholds are fixed constants with inclusive upper
//! bounds and are totally ordered.

use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of the Factory New band.
pub const FACTORY_NEW_MAX: f64 = 0.07;
/// Upper bound (inclusive) of the Minimal Wear band.
pub const MINIMAL_WEAR_MAX: f64 = 0.15;
/// Upper bound (inclusive) of the Field-Tested band.
pub const FIELD_TESTED_MAX: f64 = 0.38;
/// Upper bound (inclusive) of the Well-Worn band.
pub const WELL_WORN_MAX: f64 = 0.45;

/// Maximum pattern seed value (inclusive).
pub const PATTERN_SEED_MAX: u32 = 1000;

/// Discrete cosmetic condition category derived from the wear float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WearBand {
    FactoryNew,
    MinimalWear,
    FieldTested,
    WellWorn,
    BattleScarred,
}

impl WearBand {
    /// Display label as shown in the game UI.
    pub fn label(&self) -> &'static str {
        match self {
            WearBand::FactoryNew => "Factory New",
            WearBand::MinimalWear => "Minimal Wear",
            WearBand::FieldTested => "Field-Tested",
            WearBand::WellWorn => "Well-Worn",
            WearBand::BattleScarred => "Battle-Scarred",
        }
    }

    /// The float interval covered by this band, as (exclusive lower,
    /// inclusive upper) except for the outermost bands which include their
    /// closed end of [0, 1].
    pub fn range(&self) -> (f64, f64) {
        match self {
            WearBand::FactoryNew => (0.0, FACTORY_NEW_MAX),
            WearBand::MinimalWear => (FACTORY_NEW_MAX, MINIMAL_WEAR_MAX),
            WearBand::FieldTested => (MINIMAL_WEAR_MAX, FIELD_TESTED_MAX),
            WearBand::WellWorn => (FIELD_TESTED_MAX, WELL_WORN_MAX),
            WearBand::BattleScarred => (WELL_WORN_MAX, 1.0),
        }
    }

    /// All bands in ascending wear order.
    pub fn all() -> [WearBand; 5] {
        [
            WearBand::FactoryNew,
            WearBand::MinimalWear,
            WearBand::FieldTested,
            WearBand::WellWorn,
            WearBand::BattleScarred,
        ]
    }
}

impl std::fmt::Display for WearBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified wear value: the discrete band plus the continuous intensity.
///
/// `band` gates which overlay layers are active and drives the display
/// label; `intensity` (the raw clamped float) scales overlay density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WearSample {
    pub band: WearBand,
    pub intensity: f64,
}

impl WearSample {
    /// Classify a wear float into a band and intensity.
    ///
    /// The input is clamped to [0, 1] before classification, so this never
    /// fails. Out-of-range raw inputs trip a debug assertion only.
    pub fn classify(float: f64) -> Self {
        debug_assert!(
            float.is_nan() || (0.0..=1.0).contains(&float),
            "wear float out of range: {}",
            float
        );

        // NaN clamps to 0.0 so a garbage input still renders pristine.
        let intensity = if float.is_nan() {
            0.0
        } else {
            float.clamp(0.0, 1.0)
        };

        let band = if intensity <= FACTORY_NEW_MAX {
            WearBand::FactoryNew
        } else if intensity <= MINIMAL_WEAR_MAX {
            WearBand::MinimalWear
        } else if intensity <= FIELD_TESTED_MAX {
            WearBand::FieldTested
        } else if intensity <= WELL_WORN_MAX {
            WearBand::WellWorn
        } else {
            WearBand::BattleScarred
        };

        Self { band, intensity }
    }
}

/// Pattern seed: the sole source of pseudo-randomness for synthesis.
///
/// Clamped to [0, 1000] on construction so that every seed an inventory
/// import can hand us maps to a valid variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternSeed(u32);

impl PatternSeed {
    /// Create a seed, clamping to [0, 1000].
    pub fn new(raw: i64) -> Self {
        debug_assert!(
            (0..=PATTERN_SEED_MAX as i64).contains(&raw),
            "pattern seed out of range: {}",
            raw
        );
        Self(raw.clamp(0, PATTERN_SEED_MAX as i64) as u32)
    }

    /// The clamped seed value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for PatternSeed {
    fn default() -> Self {
        Self(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classify_boundary_bands() {
        // Inclusive on the lower band's upper bound.
        assert_eq!(WearSample::classify(0.07).band, WearBand::FactoryNew);
        assert_eq!(WearSample::classify(0.0700001).band, WearBand::MinimalWear);
        assert_eq!(WearSample::classify(0.15).band, WearBand::MinimalWear);
        assert_eq!(WearSample::classify(0.1500001).band, WearBand::FieldTested);
        assert_eq!(WearSample::classify(0.38).band, WearBand::FieldTested);
        assert_eq!(WearSample::classify(0.3800001).band, WearBand::WellWorn);
        assert_eq!(WearSample::classify(0.45).band, WearBand::WellWorn);
        assert_eq!(WearSample::classify(0.4500001).band, WearBand::BattleScarred);
    }

    #[test]
    fn classify_extremes() {
        assert_eq!(WearSample::classify(0.0).band, WearBand::FactoryNew);
        assert_eq!(WearSample::classify(1.0).band, WearBand::BattleScarred);
    }

    #[test]
    fn classify_clamps_out_of_range() {
        #[cfg(not(debug_assertions))]
        {
            let low = WearSample::classify(-0.5);
            assert_eq!(low.band, WearBand::FactoryNew);
            assert_eq!(low.intensity, 0.0);

            let high = WearSample::classify(2.0);
            assert_eq!(high.band, WearBand::BattleScarred);
            assert_eq!(high.intensity, 1.0);
        }
    }

    #[test]
    fn classify_intensity_is_raw_float() {
        let sample = WearSample::classify(0.33);
        assert_eq!(sample.intensity, 0.33);
    }

    #[test]
    fn band_ranges_are_totally_ordered() {
        let bands = WearBand::all();
        for pair in bands.windows(2) {
            let (_, hi) = pair[0].range();
            let (lo, _) = pair[1].range();
            assert_eq!(hi, lo);
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn band_labels() {
        assert_eq!(WearBand::FactoryNew.label(), "Factory New");
        assert_eq!(WearBand::BattleScarred.to_string(), "Battle-Scarred");
    }

    #[test]
    fn pattern_seed_clamps() {
        assert_eq!(PatternSeed::new(42).value(), 42);
        assert_eq!(PatternSeed::new(0).value(), 0);
        assert_eq!(PatternSeed::new(1000).value(), 1000);

        #[cfg(not(debug_assertions))]
        {
            assert_eq!(PatternSeed::new(-5).value(), 0);
            assert_eq!(PatternSeed::new(99999).value(), 1000);
        }
    }
}
