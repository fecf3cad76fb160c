//! Comment-stripping lexical scanner for C and C++ source text.
//!
//! Removing comments from source takes a real scanner: `/*` inside a
//! string literal is content, a line splice can cut a `*/` in half,
//! and a C++14 digit separator must not open a character constant.
//! This crate makes exactly one pass over the input, leaves every
//! non-comment character where it was, tolerates arbitrarily broken
//! input without panicking, and reports anything suspicious as
//! line-numbered [`Diagnostic`]s rather than stopping.
//!
//! The language [`Standard`] decides which lexical features exist at
//! all. Under C++17 a raw string hides everything up to its closing
//! delimiter; under C89 the same text is an `R`, a string, and a
//! parenthesis, and using it earns a warning. Output can also be
//! inverted to keep the comments and drop the code, which turns the
//! scanner into a crude documentation extractor.
//!
//! ```
//! use decomment::{scan, ScanConfig, Standard};
//!
//! let config = ScanConfig::new(Standard::Cxx17);
//! let result = scan("int x = 1; /* unused */ // tail\n", &config);
//! assert_eq!(result.output, "int x = 1;   \n");
//! assert!(result.is_clean());
//! ```
//!
//! Scanning under an older standard reports constructs that postdate
//! it, without changing the text they produce:
//!
//! ```
//! use decomment::{scan, ScanConfig, Standard};
//!
//! let config = ScanConfig::new(Standard::C89);
//! let result = scan("x = y // new style\n", &config);
//! assert_eq!(result.output, "x = y // new style\n");
//! assert_eq!(
//!     result.diagnostics[0].to_string(),
//!     "1: Double slash comment feature used but not supported in C89",
//! );
//! ```

mod config;
mod cursor;
mod diagnostics;
mod features;
mod scanner;
mod standard;

pub use config::ScanConfig;
pub use diagnostics::Diagnostic;
pub use features::{Feature, FeatureSet};
pub use scanner::ScanResult;
pub use standard::{Standard, UnknownStandard};

use tracing::trace;

use crate::scanner::Scanner;

/// Scan `input` once, splitting it into code and comments and
/// returning whichever half `config` selects along with any
/// diagnostics.
///
/// Scanning is total: any input produces an output and a (possibly
/// empty) diagnostic list. Inputs that end inside a construct are
/// recovered heuristically and reported, never rejected.
pub fn scan(input: &str, config: &ScanConfig) -> ScanResult {
    trace!(bytes = input.len(), standard = %config.standard, "scan start");
    let result = Scanner::new(input, config).run();
    trace!(
        output_bytes = result.output.len(),
        diagnostics = result.diagnostics.len(),
        "scan done"
    );
    result
}
