//! Metric and imperial weight (mass) conversions.
//!
//! Every conversion goes through grams: `value × from / to`, where each
//! unit's factor is its mass in grams.

const MG_TO_G: f64 = 0.001;
const KG_TO_G: f64 = 1000.0;
const TONNE_TO_G: f64 = 1_000_000.0;
const OZ_TO_G: f64 = 28.3495;
const LB_TO_G: f64 = 453.592;
const STONE_TO_G: f64 = 6350.29;

/// Converts kilograms to pounds.
///
/// # Examples
/// ```
/// use mathstats::convert::weight::kilograms_to_pounds;
/// assert!((kilograms_to_pounds(1.0) - 2.2046244201837775).abs() < 1e-12);
/// ```
pub fn kilograms_to_pounds(kilograms: f64) -> f64 {
    kilograms * KG_TO_G / LB_TO_G
}

/// Converts pounds to kilograms.
pub fn pounds_to_kilograms(pounds: f64) -> f64 {
    pounds * LB_TO_G / KG_TO_G
}

/// Converts grams to ounces.
pub fn grams_to_ounces(grams: f64) -> f64 {
    grams / OZ_TO_G
}

/// Converts ounces to grams.
pub fn ounces_to_grams(ounces: f64) -> f64 {
    ounces * OZ_TO_G
}

/// A unit of weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightUnit {
    Milligram,
    Gram,
    Kilogram,
    Tonne,
    Ounce,
    Pound,
    Stone,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 7] = [
        Self::Milligram,
        Self::Gram,
        Self::Kilogram,
        Self::Tonne,
        Self::Ounce,
        Self::Pound,
        Self::Stone,
    ];

    /// Mass of one unit in grams.
    pub fn grams_per_unit(self) -> f64 {
        match self {
            Self::Milligram => MG_TO_G,
            Self::Gram => 1.0,
            Self::Kilogram => KG_TO_G,
            Self::Tonne => TONNE_TO_G,
            Self::Ounce => OZ_TO_G,
            Self::Pound => LB_TO_G,
            Self::Stone => STONE_TO_G,
        }
    }

    /// Abbreviated unit name, e.g. `lb`.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Milligram => "mg",
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Tonne => "t",
            Self::Ounce => "oz",
            Self::Pound => "lb",
            Self::Stone => "st",
        }
    }

    /// Converts `value` from `from` units to `to` units.
    pub fn convert(value: f64, from: Self, to: Self) -> f64 {
        if from == to {
            return value;
        }
        value * from.grams_per_unit() / to.grams_per_unit()
    }
}
