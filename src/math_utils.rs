//! Combinatorics and elementary number theory.
//!
//! Integer arguments are signed so that negative inputs can be rejected
//! explicitly. Results that would not fit in the return type are reported
//! as `InvalidInput` rather than wrapping.

use crate::error::{invalid_input, Result};

/// Largest `n` whose factorial fits in an `i64`.
pub const MAX_FACTORIAL_INPUT: i64 = 20;

/// Largest `n` whose Fibonacci number fits in an `i64`.
pub const MAX_FIBONACCI_INPUT: i64 = 92;

/// Exact factorial `n!`.
///
/// # Errors
/// - `InvalidInput` if `n < 0` or `n > 20` (`21!` overflows `i64`).
///
/// # Examples
/// ```
/// use mathstats::math_utils::factorial;
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert!(factorial(21).is_err());
/// ```
pub fn factorial(n: i64) -> Result<i64> {
    if n < 0 {
        return Err(invalid_input("factorial", "not defined for negative numbers"));
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(invalid_input("factorial", "n > 20 overflows a 64-bit integer"));
    }
    Ok((2..=n).product())
}

/// Binomial coefficient C(n, r), the number of unordered selections.
///
/// Uses the symmetry C(n, r) = C(n, n − r) to minimize iterations, and
/// alternates multiply/divide so intermediates stay close to the result.
///
/// # Errors
/// - `InvalidInput` if `n < 0`, `r < 0` or `r > n`, or if the result
///   does not fit in an `i64`.
///
/// # Examples
/// ```
/// use mathstats::math_utils::combinations;
/// assert_eq!(combinations(10, 3).unwrap(), 120);
/// assert_eq!(combinations(5, 0).unwrap(), 1);
/// assert!(combinations(3, 4).is_err());
/// ```
pub fn combinations(n: i64, r: i64) -> Result<i64> {
    validate_selection("combinations", n, r)?;
    let r = r.min(n - r);
    let n = i128::from(n);
    let mut result: i128 = 1;
    for i in 0..i128::from(r) {
        // result == C(n, i) here, so the division is exact.
        result = result
            .checked_mul(n - i)
            .map(|v| v / (i + 1))
            .filter(|&v| v <= i128::from(i64::MAX))
            .ok_or_else(|| invalid_input("combinations", "result overflows a 64-bit integer"))?;
    }
    // Bounded by i64::MAX in the loop.
    Ok(result as i64)
}

/// Number of ordered selections P(n, r) = n! / (n − r)!.
///
/// # Errors
/// - `InvalidInput` if `n < 0`, `r < 0` or `r > n`, or if the result
///   does not fit in an `i64`.
///
/// # Examples
/// ```
/// use mathstats::math_utils::permutations;
/// assert_eq!(permutations(10, 3).unwrap(), 720);
/// assert_eq!(permutations(4, 0).unwrap(), 1);
/// ```
pub fn permutations(n: i64, r: i64) -> Result<i64> {
    validate_selection("permutations", n, r)?;
    (0..r).try_fold(1_i64, |acc, i| {
        acc.checked_mul(n - i)
            .ok_or_else(|| invalid_input("permutations", "result overflows a 64-bit integer"))
    })
}

/// Primality test by trial division over the 6k ± 1 wheel.
///
/// After ruling out multiples of 2 and 3, only candidates `i` and `i + 2`
/// for `i = 5, 11, 17, …` up to `√n` are tried.
///
/// # Examples
/// ```
/// use mathstats::math_utils::is_prime;
/// assert!(is_prime(97));
/// assert!(!is_prime(100));
/// assert!(!is_prime(-5));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    // i <= n / i  <=>  i * i <= n, without overflow
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Greatest common divisor by the Euclidean algorithm on absolute values.
///
/// `gcd(0, 0) == 0` and `gcd(a, 0) == |a|`. Returns `u64` so that
/// `|i64::MIN|` is representable.
///
/// # Examples
/// ```
/// use mathstats::math_utils::gcd;
/// assert_eq!(gcd(48, 18), 6);
/// assert_eq!(gcd(-7, 0), 7);
/// ```
pub fn gcd(a: i64, b: i64) -> u64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, `|a|·|b| / gcd(a, b)`.
///
/// # Errors
/// - `InvalidInput` if both `a` and `b` are zero (undefined), or if the
///   result does not fit in a `u64`.
///
/// # Examples
/// ```
/// use mathstats::math_utils::lcm;
/// assert_eq!(lcm(12, 18).unwrap(), 36);
/// assert_eq!(lcm(0, 5).unwrap(), 0);
/// assert!(lcm(0, 0).is_err());
/// ```
pub fn lcm(a: i64, b: i64) -> Result<u64> {
    if a == 0 && b == 0 {
        return Err(invalid_input("lcm", "undefined when both numbers are zero"));
    }
    // Dividing first keeps the intermediate no larger than the result.
    (a.unsigned_abs() / gcd(a, b))
        .checked_mul(b.unsigned_abs())
        .ok_or_else(|| invalid_input("lcm", "result overflows a 64-bit integer"))
}

/// The `n`th Fibonacci number, 0-indexed (`F(0) = 0`, `F(1) = 1`).
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// - `InvalidInput` if `n < 0`, or `n > 92` (`F(93)` overflows `i64`).
///
/// # Examples
/// ```
/// use mathstats::math_utils::fibonacci;
/// assert_eq!(fibonacci(10).unwrap(), 55);
/// assert!(fibonacci(-1).is_err());
/// ```
pub fn fibonacci(n: i64) -> Result<i64> {
    if n < 0 {
        return Err(invalid_input("fibonacci", "not defined for negative indices"));
    }
    if n > MAX_FIBONACCI_INPUT {
        return Err(invalid_input("fibonacci", "n > 92 overflows a 64-bit integer"));
    }
    if n <= 1 {
        return Ok(n);
    }
    let (mut prev, mut current) = (0_i64, 1_i64);
    for _ in 1..n {
        (prev, current) = (current, prev + current);
    }
    Ok(current)
}

/// Raises `base` to an integer power by repeated squaring.
///
/// `exponent == 0` yields `1.0` for any base (including `0.0` and NaN).
/// A negative exponent computes `power(1 / base, −exponent)`.
///
/// # Complexity
/// Time: O(log |exponent|)
///
/// # Examples
/// ```
/// use mathstats::math_utils::power;
/// assert_eq!(power(2.0, 10), 1024.0);
/// assert!((power(3.0, -2) - 1.0 / 9.0).abs() < 1e-15);
/// ```
pub fn power(base: f64, exponent: i32) -> f64 {
    if exponent == 0 {
        return 1.0;
    }
    let mut base = if exponent < 0 { 1.0 / base } else { base };
    let mut e = exponent.unsigned_abs();
    let mut result = 1.0;
    while e > 0 {
        if e & 1 == 1 {
            result *= base;
        }
        base *= base;
        e >>= 1;
    }
    result
}

fn validate_selection(op: &'static str, n: i64, r: i64) -> Result<()> {
    if n < 0 || r < 0 {
        return Err(invalid_input(op, "n and r must be non-negative"));
    }
    if r > n {
        return Err(invalid_input(op, "r cannot be greater than n"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
