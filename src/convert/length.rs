//! Metric and imperial length conversions.
//!
//! Every conversion goes through meters: `value × from / to`, where each
//! unit's factor is its length in meters.

const MM_TO_M: f64 = 0.001;
const CM_TO_M: f64 = 0.01;
const KM_TO_M: f64 = 1000.0;
const INCH_TO_M: f64 = 0.0254;
const FOOT_TO_M: f64 = 0.3048;
const YARD_TO_M: f64 = 0.9144;
const MILE_TO_M: f64 = 1609.344;

/// Converts meters to feet.
///
/// # Examples
/// ```
/// use mathstats::convert::length::meters_to_feet;
/// assert!((meters_to_feet(0.3048) - 1.0).abs() < 1e-12);
/// ```
pub fn meters_to_feet(meters: f64) -> f64 {
    meters / FOOT_TO_M
}

/// Converts feet to meters.
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * FOOT_TO_M
}

/// Converts kilometers to miles.
///
/// # Examples
/// ```
/// use mathstats::convert::length::kilometers_to_miles;
/// assert!((kilometers_to_miles(1.609344) - 1.0).abs() < 1e-12);
/// ```
pub fn kilometers_to_miles(kilometers: f64) -> f64 {
    kilometers * KM_TO_M / MILE_TO_M
}

/// Converts miles to kilometers.
pub fn miles_to_kilometers(miles: f64) -> f64 {
    miles * MILE_TO_M / KM_TO_M
}

/// Converts inches to centimeters.
pub fn inches_to_centimeters(inches: f64) -> f64 {
    inches * INCH_TO_M / CM_TO_M
}

/// Converts centimeters to inches.
pub fn centimeters_to_inches(centimeters: f64) -> f64 {
    centimeters * CM_TO_M / INCH_TO_M
}

/// A unit of length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 8] = [
        Self::Millimeter,
        Self::Centimeter,
        Self::Meter,
        Self::Kilometer,
        Self::Inch,
        Self::Foot,
        Self::Yard,
        Self::Mile,
    ];

    /// Length of one unit in meters.
    pub fn meters_per_unit(self) -> f64 {
        match self {
            Self::Millimeter => MM_TO_M,
            Self::Centimeter => CM_TO_M,
            Self::Meter => 1.0,
            Self::Kilometer => KM_TO_M,
            Self::Inch => INCH_TO_M,
            Self::Foot => FOOT_TO_M,
            Self::Yard => YARD_TO_M,
            Self::Mile => MILE_TO_M,
        }
    }

    /// Abbreviated unit name, e.g. `km`.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Meter => "m",
            Self::Kilometer => "km",
            Self::Inch => "in",
            Self::Foot => "ft",
            Self::Yard => "yd",
            Self::Mile => "mi",
        }
    }

    /// Converts `value` from `from` units to `to` units.
    ///
    /// # Examples
    /// ```
    /// use mathstats::convert::LengthUnit;
    /// let yd = LengthUnit::convert(3.0, LengthUnit::Foot, LengthUnit::Yard);
    /// assert!((yd - 1.0).abs() < 1e-12);
    /// ```
    pub fn convert(value: f64, from: Self, to: Self) -> f64 {
        if from == to {
            return value;
        }
        value * from.meters_per_unit() / to.meters_per_unit()
    }
}
