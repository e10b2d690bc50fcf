//! extract-coverage
//!
//! Reads an xccov JSON coverage report and reports the line coverage of a
//! single target as a whole-number percentage.

pub mod coverage;

pub use coverage::{
    fraction_to_percent, lookup_percent, parse_report, parse_report_reader, parse_report_string,
    write_percent, CoverageReport, TargetRecord,
};
