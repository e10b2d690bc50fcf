//! Fraction to whole-number percentage conversion

use anyhow::{Context, Result};
use std::io::Write;

/// Convert a coverage fraction (0.0..=1.0) into a whole-number percentage.
///
/// Ties round to even on the binary product `fraction * 100`, so `0.005`
/// gives `0` and `0.015` gives `2`.
pub fn fraction_to_percent(fraction: f64) -> i64 {
    let percent = (fraction * 100.0).round_ties_even();
    // -0.0 must print as "0"
    if percent == 0.0 {
        return 0;
    }
    // Out-of-range fractions saturate at i64::MIN / i64::MAX
    percent as i64
}

/// Write a percentage as a single line
pub fn write_percent<W: Write>(mut out: W, percent: i64) -> Result<()> {
    writeln!(out, "{}", percent).context("Failed to write coverage percentage")?;
    out.flush().context("Failed to write coverage percentage")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_whole_values() {
        assert_eq!(fraction_to_percent(0.0), 0);
        assert_eq!(fraction_to_percent(0.5), 50);
        assert_eq!(fraction_to_percent(1.0), 100);
    }

    #[test]
    fn test_rounds_to_nearest() {
        assert_eq!(fraction_to_percent(0.873), 87);
        assert_eq!(fraction_to_percent(0.876), 88);
        assert_eq!(fraction_to_percent(0.0049), 0);
    }

    #[test]
    fn test_ties_round_to_even() {
        assert_eq!(fraction_to_percent(0.005), 0);
        assert_eq!(fraction_to_percent(0.015), 2);
        assert_eq!(fraction_to_percent(0.025), 2);
        assert_eq!(fraction_to_percent(0.125), 12);
        assert_eq!(fraction_to_percent(0.135), 14);
        assert_eq!(fraction_to_percent(0.995), 100);
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(fraction_to_percent(-0.0), 0);
        assert_eq!(fraction_to_percent(-0.001), 0);
    }

    #[test]
    fn test_out_of_range_saturates() {
        assert_eq!(fraction_to_percent(1.5), 150);
        assert_eq!(fraction_to_percent(1e20), i64::MAX);
        assert_eq!(fraction_to_percent(-1e20), i64::MIN);
    }

    #[test]
    fn test_write_percent() {
        let mut out = Vec::new();
        write_percent(&mut out, 87).unwrap();
        assert_eq!(out, b"87\n");
    }

    #[test]
    fn test_write_percent_closed_pipe() {
        let err = write_percent(ClosedPipe, 50).unwrap_err();
        assert!(err.to_string().contains("Failed to write coverage percentage"));
    }
}
