//! Report projection for the external serializer
//!
//! The report consumer expects exact field names (`isPartOfOverallScore`,
//! `binaryKernels`, `frameTimes`, ...) and 0/1 integers where the engine
//! keeps booleans. That narrowing happens here and only here — the
//! scoring core never reads these records back.

use serde::{Deserialize, Serialize};

use crate::scoring::{Profile, ScoreBoard, SuiteSummary, TestResult};

// ============================================================================
// Per-Test Record
// ============================================================================

/// Per-test report record, field-for-field what the serializer persists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecord {
    /// Test scene name
    pub name: String,
    /// Category label, echoed verbatim even when unrecognized
    pub category: String,
    /// 1 when the test counts toward category/overall scores
    pub is_part_of_overall_score: u8,
    /// 1 when the device/configuration matched expectations
    pub valid_data: u8,
    /// Test score
    pub score: f64,
    /// 1 when this test used a precompiled binary kernel
    pub binary_kernels: u8,
    /// Caller-supplied scoring weight
    pub score_scale_factor: f64,
    /// Slowest frame, microseconds
    pub slowest: u32,
    /// Fastest frame, microseconds
    pub fastest: u32,
    /// Arithmetic mean frame time
    pub average: f64,
    /// Median frame time
    pub median: f64,
    /// Geometric mean frame time
    pub geometric_mean: f64,
    /// Raw frame times in execution order, comma-and-space joined
    pub frame_times: String,
}

impl TestRecord {
    /// Project one test result into its report record
    #[must_use]
    pub fn from_result(result: &TestResult) -> Self {
        Self {
            name: result.name.clone(),
            category: result.category.clone(),
            is_part_of_overall_score: flag(result.part_of_overall_score),
            valid_data: flag(result.valid_data),
            score: result.score,
            binary_kernels: flag(result.binary_kernel),
            score_scale_factor: result.score_scale_factor,
            slowest: result.slowest,
            fastest: result.fastest,
            average: result.average,
            median: result.median,
            geometric_mean: result.geometric_mean,
            frame_times: join_frame_times(&result.frame_times),
        }
    }
}

// ============================================================================
// Aggregate Record
// ============================================================================

/// Suite-level report record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRecord {
    /// Weighted overall score
    pub score: f64,
    /// Physics category score
    pub physics_test_score: f64,
    /// General category score
    pub general_test_score: f64,
    /// Image manipulation category score
    pub image_test_score: f64,
    /// Video manipulation category score
    pub video_test_score: f64,
    /// 1 when every test ran with its expected configuration
    pub valid_data: u8,
    /// 1 when the active profile's required tests all ran exactly once
    pub valid_test_suite: u8,
    /// INVERTED polarity relative to the per-test field: 1 only when every
    /// test compiled its kernels online, 0 as soon as any test used a
    /// precompiled binary
    pub binary_kernels: u8,
}

impl AggregateRecord {
    /// Project the suite summary into its report record
    #[must_use]
    pub fn from_summary(summary: &SuiteSummary) -> Self {
        Self {
            score: summary.overall_score,
            physics_test_score: summary.categories.physics,
            general_test_score: summary.categories.general,
            image_test_score: summary.categories.image,
            video_test_score: summary.categories.video,
            valid_data: flag(summary.all_valid_configuration),
            valid_test_suite: flag(summary.valid_test_suite),
            binary_kernels: flag(summary.all_online_kernels),
        }
    }
}

// ============================================================================
// Suite Report
// ============================================================================

/// Complete report for one benchmark run: per-test records in execution
/// order plus the aggregate record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Per-test records, execution order
    pub tests: Vec<TestRecord>,
    /// Suite-level record
    pub aggregate: AggregateRecord,
}

impl SuiteReport {
    /// Build the full report from a score board in one aggregation pass
    #[must_use]
    pub fn from_board(board: &ScoreBoard, profile: Profile) -> Self {
        let summary = board.summarize(profile);
        Self {
            tests: board.results().iter().map(TestRecord::from_result).collect(),
            aggregate: AggregateRecord::from_summary(&summary),
        }
    }

    /// Serialize to JSON
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON
    ///
    /// # Errors
    ///
    /// Returns error if JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Join raw frame times in execution order, e.g. `"1203, 1180, 1250"`
#[must_use]
pub fn join_frame_times(frame_times: &[u32]) -> String {
    frame_times
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}

// ============================================================================
// Tests
// ============================================================================
