//! xccov JSON report parser

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use super::fraction_to_percent;

/// Top-level report as emitted by `xccov view --report --json`
///
/// Target entries stay untyped until a lookup reaches them, so entries past
/// the match are never inspected.
#[derive(Debug, Clone, Deserialize)]
pub struct CoverageReport {
    pub targets: Vec<Value>,
}

/// Coverage of a single build target
#[derive(Debug, Clone, PartialEq)]
pub struct TargetRecord {
    pub name: String,
    /// Fraction of executable lines covered, 0.0..=1.0
    pub line_coverage: f64,
    pub covered_lines: Option<u64>,
    pub executable_lines: Option<u64>,
}

impl TargetRecord {
    /// Line coverage as a whole-number percentage
    pub fn line_coverage_percent(&self) -> i64 {
        fraction_to_percent(self.line_coverage)
    }

    fn from_entry(name: &str, entry: &Value) -> Result<Self> {
        let line_coverage = entry
            .get("lineCoverage")
            .and_then(Value::as_f64)
            .with_context(|| format!("Target '{}' has no numeric lineCoverage", name))?;

        Ok(TargetRecord {
            name: name.to_string(),
            line_coverage,
            covered_lines: entry.get("coveredLines").and_then(Value::as_u64),
            executable_lines: entry.get("executableLines").and_then(Value::as_u64),
        })
    }
}

impl CoverageReport {
    /// First target named `name`, in document order.
    ///
    /// Every entry up to the match must carry a `name`; only the match itself
    /// needs a numeric `lineCoverage`. Non-string names never match.
    pub fn find_target(&self, name: &str) -> Result<Option<TargetRecord>> {
        for (index, entry) in self.targets.iter().enumerate() {
            let entry_name = entry
                .get("name")
                .with_context(|| format!("Target entry {} has no name", index))?;

            if entry_name.as_str() == Some(name) {
                return TargetRecord::from_entry(name, entry).map(Some);
            }
        }

        Ok(None)
    }

    /// String target names in document order
    pub fn target_names(&self) -> Vec<&str> {
        self.targets
            .iter()
            .filter_map(|t| t.get("name").and_then(Value::as_str))
            .collect()
    }
}

impl FromStr for CoverageReport {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> Result<Self> {
        parse_report_string(content)
    }
}

/// Parse a report file
pub fn parse_report(path: &Path) -> Result<CoverageReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read coverage report: {}", path.display()))?;
    parse_report_string(&content)
}

/// Read a report to the end, then parse it
pub fn parse_report_reader<R: Read>(mut reader: R) -> Result<CoverageReport> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .context("Failed to read coverage report")?;
    parse_report_string(&content)
}

/// Parse report JSON from a string
pub fn parse_report_string(content: &str) -> Result<CoverageReport> {
    serde_json::from_str(content).context("Failed to parse coverage report JSON")
}

/// Percentage of the first target named `name`
pub fn lookup_percent(report: &CoverageReport, name: &str) -> Result<Option<i64>> {
    Ok(report
        .find_target(name)?
        .map(|target| target.line_coverage_percent()))
}
