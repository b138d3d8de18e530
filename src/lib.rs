//! # mathstats
//!
//! Small numeric toolkit: descriptive statistics, combinatorics and unit
//! conversions.
//!
//! Every function is pure: same inputs give the same outputs, nothing is
//! retained between calls, and caller data is never mutated.
//!
//! ## Modules
//!
//! - [`stats`]: Mean, median, mode, range, variance and standard deviation
//! - [`math_utils`]: Factorial, nCr, nPr, primality, GCD/LCM, Fibonacci, power
//! - [`convert`]: Temperature, length and weight conversions
//!
//! ## Errors
//!
//! A violated precondition (empty sample, negative factorial, temperature
//! below absolute zero, ...) is reported as [`MathStatsError::InvalidInput`].

pub mod convert;
pub mod error;
pub mod math_utils;
pub mod stats;

pub use error::{MathStatsError, Result};
