//! Celsius, Fahrenheit and Kelvin conversions.
//!
//! Celsius is the pivot scale. Any conversion that produces or consumes
//! Kelvin rejects values below absolute zero.

use std::fmt;

use crate::error::{invalid_input, Result};

const CELSIUS_TO_FAHRENHEIT_SCALE: f64 = 9.0 / 5.0;
const FAHRENHEIT_TO_CELSIUS_SCALE: f64 = 5.0 / 9.0;
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Offset between the Celsius and Kelvin scales; `0 K == -273.15 °C`.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Converts Celsius to Fahrenheit, `C × 9/5 + 32`.
///
/// # Examples
/// ```
/// use mathstats::convert::temperature::celsius_to_fahrenheit;
/// assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
/// ```
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * CELSIUS_TO_FAHRENHEIT_SCALE + FAHRENHEIT_OFFSET
}

/// Converts Fahrenheit to Celsius, `(F − 32) × 5/9`.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - FAHRENHEIT_OFFSET) * FAHRENHEIT_TO_CELSIUS_SCALE
}

/// Converts Celsius to Kelvin.
///
/// # Errors
/// - `InvalidInput` if the result would be below absolute zero.
///
/// # Examples
/// ```
/// use mathstats::convert::temperature::celsius_to_kelvin;
/// assert_eq!(celsius_to_kelvin(0.0).unwrap(), 273.15);
/// assert!(celsius_to_kelvin(-274.0).is_err());
/// ```
pub fn celsius_to_kelvin(celsius: f64) -> Result<f64> {
    let kelvin = celsius + KELVIN_OFFSET;
    if kelvin < 0.0 {
        return Err(invalid_input(
            "celsius_to_kelvin",
            "temperature cannot be below absolute zero",
        ));
    }
    Ok(kelvin)
}

/// Converts Kelvin to Celsius.
///
/// # Errors
/// - `InvalidInput` if `kelvin` is negative.
pub fn kelvin_to_celsius(kelvin: f64) -> Result<f64> {
    if kelvin < 0.0 {
        return Err(invalid_input("kelvin_to_celsius", "kelvin cannot be negative"));
    }
    Ok(kelvin - KELVIN_OFFSET)
}

/// Converts Fahrenheit to Kelvin via Celsius.
///
/// # Errors
/// - `InvalidInput` if the result would be below absolute zero.
pub fn fahrenheit_to_kelvin(fahrenheit: f64) -> Result<f64> {
    celsius_to_kelvin(fahrenheit_to_celsius(fahrenheit))
}

/// Converts Kelvin to Fahrenheit via Celsius.
///
/// # Errors
/// - `InvalidInput` if `kelvin` is negative.
pub fn kelvin_to_fahrenheit(kelvin: f64) -> Result<f64> {
    kelvin_to_celsius(kelvin).map(celsius_to_fahrenheit)
}

/// A temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 3] = [Self::Celsius, Self::Fahrenheit, Self::Kelvin];

    /// Unit symbol, e.g. `°C`.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }

    /// Converts `value` from the `from` scale to the `to` scale.
    ///
    /// Negative Kelvin input is rejected even when `from == to`.
    ///
    /// # Errors
    /// - `InvalidInput` if a Kelvin input is negative or a Kelvin result
    ///   would be below absolute zero.
    ///
    /// # Examples
    /// ```
    /// use mathstats::convert::TemperatureScale;
    /// let f = TemperatureScale::convert(37.0, TemperatureScale::Celsius, TemperatureScale::Fahrenheit);
    /// assert!((f.unwrap() - 98.6).abs() < 1e-9);
    /// ```
    pub fn convert(value: f64, from: Self, to: Self) -> Result<f64> {
        let celsius = match from {
            Self::Celsius => value,
            Self::Fahrenheit => fahrenheit_to_celsius(value),
            Self::Kelvin => kelvin_to_celsius(value)?,
        };
        if from == to {
            return Ok(value);
        }
        match to {
            Self::Celsius => Ok(celsius),
            Self::Fahrenheit => Ok(celsius_to_fahrenheit(celsius)),
            Self::Kelvin => celsius_to_kelvin(celsius),
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_fahrenheit_fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert!((fahrenheit_to_celsius(212.0) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_body_temperature() {
        assert!((fahrenheit_to_celsius(98.6) - 37.0).abs() < 1e-9);
    }

    #[test]
    fn test_celsius_kelvin() {
        assert_eq!(celsius_to_kelvin(0.0), Ok(273.15));
        assert_eq!(celsius_to_kelvin(-273.15), Ok(0.0));
        assert!((kelvin_to_celsius(373.15).unwrap() - 100.0).abs() < 1e-9);
        assert_eq!(kelvin_to_celsius(0.0), Ok(-273.15));
    }

    #[test]
    fn test_below_absolute_zero() {
        let err = celsius_to_kelvin(-274.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: celsius_to_kelvin: temperature cannot be below absolute zero"
        );
        let err = kelvin_to_celsius(-1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: kelvin_to_celsius: kelvin cannot be negative"
        );
    }

    #[test]
    fn test_fahrenheit_kelvin_composition() {
        assert!((fahrenheit_to_kelvin(32.0).unwrap() - 273.15).abs() < 1e-9);
        assert!((kelvin_to_fahrenheit(273.15).unwrap() - 32.0).abs() < 1e-9);
        assert!(fahrenheit_to_kelvin(-500.0).is_err());
        assert!(kelvin_to_fahrenheit(-0.5).is_err());
    }

    #[test]
    fn test_scale_convert_matches_free_functions() {
        use TemperatureScale::*;
        assert_eq!(
            TemperatureScale::convert(25.0, Celsius, Fahrenheit),
            Ok(celsius_to_fahrenheit(25.0))
        );
        assert_eq!(
            TemperatureScale::convert(25.0, Celsius, Kelvin),
            celsius_to_kelvin(25.0)
        );
        assert_eq!(
            TemperatureScale::convert(98.6, Fahrenheit, Kelvin),
            fahrenheit_to_kelvin(98.6)
        );
        assert_eq!(
            TemperatureScale::convert(300.0, Kelvin, Fahrenheit),
            kelvin_to_fahrenheit(300.0)
        );
    }

    #[test]
    fn test_scale_convert_identity() {
        for scale in TemperatureScale::ALL {
            assert_eq!(TemperatureScale::convert(12.5, scale, scale), Ok(12.5));
        }
        let kelvin = TemperatureScale::Kelvin;
        assert!(TemperatureScale::convert(-1.0, kelvin, kelvin).is_err());
    }

    #[test]
    fn test_symbol() {
        assert_eq!(TemperatureScale::Celsius.to_string(), "°C");
        assert_eq!(TemperatureScale::Kelvin.symbol(), "K");
    }
}
