//! Interactive menu demonstrating the mathstats library.
//!
//! Reads a menu choice from stdin, runs the selected demo and loops until
//! the user exits or input ends. Log output goes to stderr.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use mathstats::convert::{length, temperature, weight, LengthUnit, TemperatureScale, WeightUnit};
use mathstats::math_utils;
use mathstats::stats::{self, Summary};
use mathstats::MathStatsError;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const STATS_SAMPLE: [f64; 10] = [12.5, 18.3, 15.7, 20.1, 14.9, 18.3, 16.2, 19.5, 18.3, 17.8];
const QUICK_SAMPLE: [f64; 5] = [10.0, 20.0, 30.0, 20.0, 15.0];
const PRIME_CANDIDATES: [i64; 5] = [7, 12, 23, 100, 97];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Statistics,
    MathUtils,
    Converters,
    QuickDemo,
    Exit,
}

impl MenuChoice {
    fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::Statistics),
            2 => Some(Self::MathUtils),
            3 => Some(Self::Converters),
            4 => Some(Self::QuickDemo),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::new("warn"))
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock())
}

/// Runs the menu loop until the user picks Exit or input is exhausted.
fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    writeln!(out, "==============================================")?;
    writeln!(out, "  Welcome to MathStats Library Demo v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "==============================================")?;

    loop {
        print_main_menu(out)?;
        let Some(number) = read_int(input, out, "Enter your choice: ")? else {
            debug!("input closed, leaving menu");
            writeln!(out)?;
            break;
        };
        writeln!(out)?;

        let outcome = match MenuChoice::from_number(number) {
            Some(MenuChoice::Statistics) => demonstrate_statistics(out),
            Some(MenuChoice::MathUtils) => demonstrate_math_utils(out),
            Some(MenuChoice::Converters) => demonstrate_converters(out),
            Some(MenuChoice::QuickDemo) => run_quick_demo(out),
            Some(MenuChoice::Exit) => {
                writeln!(out, "Thank you for using MathStats Library!")?;
                break;
            }
            None => {
                writeln!(out, "Invalid choice. Please try again.")?;
                continue;
            }
        };
        if let Err(err) = outcome {
            report_failure(out, err)?;
        }

        writeln!(out, "\nPress Enter to continue...")?;
        out.flush()?;
        if read_raw_line(input)?.is_none() {
            break;
        }
    }
    out.flush()?;
    Ok(())
}

/// Prints a library error and lets the menu continue; anything else
/// (I/O failure on the terminal) is returned to the caller.
fn report_failure<W: Write>(out: &mut W, err: anyhow::Error) -> Result<()> {
    match err.downcast::<MathStatsError>() {
        Ok(err) => {
            warn!(error = %err, "demo rejected input");
            writeln!(out, "Error: {err}")?;
            Ok(())
        }
        Err(other) => Err(other),
    }
}

fn print_main_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--- Main Menu ---")?;
    writeln!(out, "1. Statistics Operations")?;
    writeln!(out, "2. Mathematical Utilities")?;
    writeln!(out, "3. Unit Converters")?;
    writeln!(out, "4. Quick Demo (All Features)")?;
    writeln!(out, "5. Exit")
}

/// Prompts until an integer token is entered.
///
/// Tokens are taken left to right across lines; each non-numeric token
/// re-prompts once. Blank lines are skipped silently. Whatever follows the
/// accepted integer on its line is discarded. Returns `None` once input
/// is exhausted.
fn read_int<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<i64>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    while let Some(line) = read_raw_line(input)? {
        for token in line.split_whitespace() {
            match token.parse::<i64>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => {
                    debug!(token, "non-numeric menu input");
                    write!(out, "Please enter a valid number: ")?;
                    out.flush()?;
                }
            }
        }
    }
    Ok(None)
}

/// Reads one line as bytes, replacing invalid UTF-8 with U+FFFD.
fn read_raw_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

fn demonstrate_statistics<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "=== Statistics Operations Demo ===\n")?;
    writeln!(out, "Sample Data: ")?;
    writeln!(out, "{:?}\n", STATS_SAMPLE)?;

    let summary = Summary::from_data(&STATS_SAMPLE)?;
    writeln!(out, "Mean: {:.2}", summary.mean)?;
    writeln!(out, "Median: {:.2}", summary.median)?;
    writeln!(out, "Mode: {:.2}", summary.mode)?;
    writeln!(out, "Range: {:.2}", summary.range)?;
    writeln!(out, "Variance (Population): {:.2}", summary.variance)?;
    writeln!(out, "Standard Deviation (Population): {:.2}", summary.std_dev)?;
    if let (Some(var), Some(sd)) = (summary.sample_variance, summary.sample_std_dev) {
        writeln!(out, "Variance (Sample): {var:.2}")?;
        writeln!(out, "Standard Deviation (Sample): {sd:.2}")?;
    }
    Ok(())
}

fn demonstrate_math_utils<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "=== Mathematical Utilities Demo ===\n")?;

    writeln!(out, "Factorial Operations:")?;
    writeln!(out, "5! = {}", math_utils::factorial(5)?)?;
    writeln!(out, "10! = {}", math_utils::factorial(10)?)?;
    match math_utils::factorial(21) {
        Ok(v) => writeln!(out, "21! = {v}")?,
        Err(err) => writeln!(out, "21! -> {err}")?,
    }
    writeln!(out)?;

    writeln!(out, "Combinatorics:")?;
    writeln!(out, "C(10,3) = {}", math_utils::combinations(10, 3)?)?;
    writeln!(out, "P(10,3) = {}", math_utils::permutations(10, 3)?)?;
    writeln!(out)?;

    writeln!(out, "Prime Number Check:")?;
    for n in PRIME_CANDIDATES {
        writeln!(out, "{n} is prime: {}", math_utils::is_prime(n))?;
    }
    writeln!(out)?;

    writeln!(out, "GCD and LCM:")?;
    writeln!(out, "GCD(48, 18) = {}", math_utils::gcd(48, 18))?;
    writeln!(out, "LCM(12, 18) = {}", math_utils::lcm(12, 18)?)?;
    writeln!(out)?;

    writeln!(out, "Fibonacci Sequence (first 10 numbers):")?;
    let sequence = (0..10)
        .map(|i| math_utils::fibonacci(i).map(|f| f.to_string()))
        .collect::<mathstats::Result<Vec<_>>>()?;
    writeln!(out, "{}\n", sequence.join(" "))?;

    writeln!(out, "Power Operations:")?;
    writeln!(out, "2^10 = {}", math_utils::power(2.0, 10))?;
    writeln!(out, "3^-2 = {}", math_utils::power(3.0, -2))?;
    Ok(())
}

fn demonstrate_converters<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "=== Unit Converters Demo ===\n")?;

    writeln!(out, "Temperature Conversions:")?;
    let celsius = 25.0;
    writeln!(
        out,
        "{celsius:.1}°C = {:.1}°F",
        temperature::celsius_to_fahrenheit(celsius)
    )?;
    writeln!(
        out,
        "{celsius:.1}°C = {:.1} K",
        temperature::celsius_to_kelvin(celsius)?
    )?;
    let fahrenheit = 98.6;
    writeln!(
        out,
        "{fahrenheit:.1}°F = {:.1}°C",
        temperature::fahrenheit_to_celsius(fahrenheit)
    )?;
    writeln!(
        out,
        "{fahrenheit:.1}°F = {:.1} K",
        temperature::fahrenheit_to_kelvin(fahrenheit)?
    )?;
    if let Err(err) = temperature::celsius_to_kelvin(-300.0) {
        writeln!(out, "-300.0°C -> {err}")?;
    }
    writeln!(out)?;

    writeln!(out, "Length Conversions:")?;
    writeln!(out, "5 meters = {:.2} feet", length::meters_to_feet(5.0))?;
    writeln!(out, "100 km = {:.2} miles", length::kilometers_to_miles(100.0))?;
    writeln!(out, "12 inches = {:.2} cm", length::inches_to_centimeters(12.0))?;
    writeln!(out, "50 cm = {:.2} inches", length::centimeters_to_inches(50.0))?;
    writeln!(out)?;

    writeln!(out, "Weight Conversions:")?;
    writeln!(out, "75 kg = {:.2} pounds", weight::kilograms_to_pounds(75.0))?;
    writeln!(out, "150 pounds = {:.2} kg", weight::pounds_to_kilograms(150.0))?;
    writeln!(out, "100 grams = {:.2} ounces", weight::grams_to_ounces(100.0))?;
    writeln!(out, "8 ounces = {:.2} grams", weight::ounces_to_grams(8.0))?;
    writeln!(out)?;

    writeln!(out, "Other Units:")?;
    let (kelvin, fahrenheit) = (TemperatureScale::Kelvin, TemperatureScale::Fahrenheit);
    writeln!(
        out,
        "0.0 {kelvin} = {:.2} {fahrenheit}",
        TemperatureScale::convert(0.0, kelvin, fahrenheit)?
    )?;
    let (mile, yard) = (LengthUnit::Mile, LengthUnit::Yard);
    writeln!(
        out,
        "1 {} = {:.0} {}",
        mile.symbol(),
        LengthUnit::convert(1.0, mile, yard),
        yard.symbol()
    )?;
    let (stone, kilogram) = (WeightUnit::Stone, WeightUnit::Kilogram);
    writeln!(
        out,
        "12 {} = {:.2} {}",
        stone.symbol(),
        WeightUnit::convert(12.0, stone, kilogram),
        kilogram.symbol()
    )?;
    Ok(())
}

fn run_quick_demo<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "=== Quick Demo - All Features ===\n")?;

    writeln!(out, "1. STATISTICS")?;
    writeln!(out, "   Data: {:?}", QUICK_SAMPLE)?;
    writeln!(
        out,
        "   Mean: {:.1}, Median: {:.1}, Mode: {:.1}\n",
        stats::mean(&QUICK_SAMPLE)?,
        stats::median(&QUICK_SAMPLE)?,
        stats::mode(&QUICK_SAMPLE)?
    )?;

    writeln!(out, "2. MATHEMATICS")?;
    writeln!(out, "   7! = {}", math_utils::factorial(7)?)?;
    let primes: Vec<String> = (2..)
        .filter(|&n| math_utils::is_prime(n))
        .take(5)
        .map(|n| n.to_string())
        .collect();
    writeln!(out, "   First 5 primes: {}", primes.join(", "))?;
    writeln!(out, "   Fibonacci(8) = {}\n", math_utils::fibonacci(8)?)?;

    writeln!(out, "3. CONVERTERS")?;
    writeln!(out, "   100°F = {:.1}°C", temperature::fahrenheit_to_celsius(100.0))?;
    writeln!(out, "   1 mile = {:.2} km", length::miles_to_kilometers(1.0))?;
    writeln!(out, "   1 kg = {:.2} lbs", weight::kilograms_to_pounds(1.0))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let out = run_script("5\n");
        assert!(out.contains("--- Main Menu ---"));
        assert!(out.contains("Thank you for using MathStats Library!"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let out = run_script("");
        assert!(out.contains("Enter your choice: "));
        assert!(!out.contains("Thank you"));
    }

    #[test]
    fn test_non_numeric_reprompts() {
        let out = run_script("abc\n\n5\n");
        assert_eq!(out.matches("Please enter a valid number: ").count(), 1);
        assert!(out.contains("Thank you"));
    }

    #[test]
    fn test_invalid_utf8_reprompts() {
        let mut input = Cursor::new(b"\xff\xfe\n5\n".to_vec());
        let mut out = Vec::new();
        run(&mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Please enter a valid number: ").count(), 1);
        assert!(text.contains("Thank you"));
    }

    #[test]
    fn test_invalid_utf8_at_continue_prompt() {
        let mut input = Cursor::new(b"4\n\xff\n5\n".to_vec());
        let mut out = Vec::new();
        run(&mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Thank you"));
    }

    #[test]
    fn test_tokens_after_bad_token_on_same_line() {
        let out = run_script("abc 5\n");
        assert_eq!(out.matches("Please enter a valid number: ").count(), 1);
        assert!(out.contains("Thank you"));
    }

    #[test]
    fn test_each_bad_token_reprompts() {
        let out = run_script("x y\nz 5 9\n");
        assert_eq!(out.matches("Please enter a valid number: ").count(), 3);
        assert!(out.contains("Thank you"));
        assert!(!out.contains("Invalid choice"));
    }

    #[test]
    fn test_invalid_choice() {
        let out = run_script("9\n5\n");
        assert!(out.contains("Invalid choice. Please try again."));
        assert_eq!(out.matches("--- Main Menu ---").count(), 2);
    }

    #[test]
    fn test_statistics_demo() {
        let out = run_script("1\n\n5\n");
        assert!(out.contains("[12.5, 18.3, 15.7, 20.1, 14.9, 18.3, 16.2, 19.5, 18.3, 17.8]"));
        assert!(out.contains("Mean: 17.16"));
        assert!(out.contains("Median: 18.05"));
        assert!(out.contains("Mode: 18.30"));
        assert!(out.contains("Range: 7.60"));
        assert!(out.contains("Variance (Sample): "));
        assert!(out.contains("Standard Deviation (Sample): "));
        assert!(out.contains("Press Enter to continue..."));
    }

    #[test]
    fn test_math_utils_demo() {
        let out = run_script("2\n\n5\n");
        assert!(out.contains("5! = 120"));
        assert!(out.contains("10! = 3628800"));
        assert!(out.contains("21! -> invalid input: factorial"));
        assert!(out.contains("C(10,3) = 120"));
        assert!(out.contains("P(10,3) = 720"));
        assert!(out.contains("97 is prime: true"));
        assert!(out.contains("100 is prime: false"));
        assert!(out.contains("GCD(48, 18) = 6"));
        assert!(out.contains("LCM(12, 18) = 36"));
        assert!(out.contains("0 1 1 2 3 5 8 13 21 34"));
        assert!(out.contains("2^10 = 1024"));
    }

    #[test]
    fn test_converters_demo() {
        let out = run_script("3\n\n5\n");
        assert!(out.contains("25.0°C = 77.0°F"));
        assert!(out.contains("25.0°C = 298.1 K") || out.contains("25.0°C = 298.2 K"));
        assert!(out.contains("98.6°F = 37.0°C"));
        assert!(out.contains("-300.0°C -> invalid input"));
        assert!(out.contains("5 meters = 16.40 feet"));
        assert!(out.contains("8 ounces = 226.80 grams"));
        assert!(out.contains("0.0 K = -459.67 °F"));
        assert!(out.contains("1 mi = 1760 yd"));
        assert!(out.contains("12 st = 76.20 kg"));
    }

    #[test]
    fn test_quick_demo() {
        let out = run_script("4\n\n5\n");
        assert!(out.contains("Data: [10.0, 20.0, 30.0, 20.0, 15.0]"));
        assert!(out.contains("Mean: 19.0, Median: 20.0, Mode: 20.0"));
        assert!(out.contains("First 5 primes: 2, 3, 5, 7, 11"));
        assert!(out.contains("Fibonacci(8) = 21"));
        assert!(out.contains("1 mile = 1.61 km"));
    }

    #[test]
    fn test_report_failure_keeps_library_errors() {
        let mut out = Vec::new();
        let err = anyhow::Error::from(MathStatsError::InvalidInput("lcm: both zero".into()));
        report_failure(&mut out, err).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Error: invalid input: lcm: both zero\n");
    }

    #[test]
    fn test_report_failure_propagates_io_errors() {
        let mut out = Vec::new();
        let err = anyhow::Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(report_failure(&mut out, err).is_err());
        assert!(out.is_empty());
    }
}
