//! # Puntuar
//!
//! GPU compute benchmark scoring and suite-validation engine.
//!
//! Puntuar (Spanish: "to score") turns raw per-frame execution-time samples
//! from GPU compute test scenes into per-test scores, four category scores,
//! one weighted overall score, and a pass/fail validity verdict for the
//! whole test suite. It consumes already-measured timing data and
//! configuration flags; it never renders anything and never talks to a
//! device.
//!
//! ## Example
//!
//! ```rust
//! use puntuar::scoring::{Profile, ScoreBoard, TestInfo, TestResult};
//!
//! let mut board = ScoreBoard::new();
//! board.record(TestResult::from_samples(
//!     TestInfo::new("Fluid Operations Test", "Physics"),
//!     &[1203, 1180, 1250],
//! ));
//!
//! let summary = board.summarize(Profile::Embedded);
//! assert!(summary.overall_score > 0.0);
//! ```
//!
//! ## Architecture
//!
//! - [`scoring`] — the pure computation core: per-test statistics, the four
//!   category accumulators, the log-domain overall score, and the
//!   required-test suite validator. Fully synchronous, no I/O, no shared
//!   state across runs.
//! - [`report`] — the output projection consumed by the external report
//!   serializer, with field names reproduced verbatim for compatibility.
//! - [`config`] — externally supplied settings strings (profile selection).
//! - [`cli`] — run-file loading and the command implementations behind the
//!   `puntuar` binary.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
// Clippy allows (MUST come after deny/warn to override them)
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)] // usize -> f64 for sample counts is safe
#![allow(clippy::must_use_candidate)] // Not all methods need #[must_use]
#![allow(clippy::missing_panics_doc)] // Allow missing Panics doc sections
#![allow(clippy::float_cmp)] // Allow float comparisons in tests
#![allow(clippy::doc_markdown)] // Allow technical terms without backticks
#![allow(clippy::uninlined_format_args)] // Prefer explicit format args

/// CLI command implementations (extracted for testability)
pub mod cli;
/// Externally supplied run settings (profile selection)
pub mod config;
pub mod error;
/// Report projection for the external serializer
///
/// Field names are reproduced verbatim (`isPartOfOverallScore`,
/// `binaryKernels`, `frameTimes`, ...) so existing report consumers keep
/// working. Booleans are narrowed to 0/1 integers at this boundary only.
pub mod report;
/// Benchmark scoring core
///
/// Per-test statistics (fastest/slowest/average/median/geometric mean),
/// category aggregation, the weighted overall score, and suite validation.
/// Pure, synchronous computation over in-memory data produced once per
/// benchmark run.
pub mod scoring;

// Re-exports for convenience
pub use error::{PuntuarError, Result};
pub use scoring::{ScoreBoard, SuiteSummary, TestInfo, TestResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
