//! Coverage module
//!
//! Provides:
//! - xccov JSON report parsing
//! - Target lookup by name
//! - Fraction to percentage rounding

mod percent;
mod report;

pub use percent::*;
pub use report::*;
