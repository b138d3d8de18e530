//! Unit conversions.
//!
//! - [`temperature`]: Celsius, Fahrenheit and Kelvin, pivoting on Celsius
//! - [`length`]: metric and imperial lengths, pivoting on meters
//! - [`weight`]: metric and imperial weights, pivoting on grams
//!
//! Only conversions involving Kelvin can fail.

pub mod length;
pub mod temperature;
pub mod weight;

pub use length::LengthUnit;
pub use temperature::TemperatureScale;
pub use weight::WeightUnit;
