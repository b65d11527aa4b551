//! Benchmark scoring core
//!
//! Turns raw per-frame execution times from completed test scenes into
//! per-test scores, then folds the results into category scores, one
//! weighted overall score, and a suite-validity verdict:
//!
//! - [`TestResult::from_samples`] — per-test statistics and score
//! - [`CategoryAggregator`] — product-then-root scores for the 4 categories
//! - [`OverallScoreComputer`] — log-domain weighted mean + suite-wide flags
//! - [`SuiteValidator`] — required-test completeness check per profile
//! - [`ScoreBoard`] — the insertion-ordered result collection and the
//!   single aggregation pass over it
//!
//! Everything here is synchronous and pure: the accumulators are built
//! fresh inside each [`ScoreBoard::summarize`] call and dropped at its end,
//! so re-running over the same board is idempotent.

use serde::{Deserialize, Serialize};

mod category;
mod overall;
mod statistics;
mod suite;

pub use category::{Category, CategoryAggregator, CategoryScores};
pub use overall::OverallScoreComputer;
pub use statistics::{geometric_mean, median};
pub use suite::{Profile, SuiteValidator, SuiteViolation, EMBEDDED_REQUIRED_COUNT, REQUIRED_TESTS};

// ============================================================================
// Per-Test Metadata
// ============================================================================

/// Externally supplied metadata for one test scene.
///
/// The execution harness decides all of these before or while the scene
/// runs; the scoring engine only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestInfo {
    /// Test scene name, matched against the required-test table
    pub name: String,
    /// Category label; matched literally against the 4 fixed categories
    pub category: String,
    /// Did the device/configuration match expectations for this run
    pub valid_data: bool,
    /// Was a precompiled kernel binary used instead of source
    pub binary_kernel: bool,
    /// Caller-supplied weight for category/overall scoring
    pub score_scale_factor: f64,
    /// Does this test contribute to category and overall scores
    pub part_of_overall_score: bool,
}

impl TestInfo {
    /// Create metadata with the harness defaults: valid data, online
    /// kernel, unit weight, counted toward the overall score.
    #[must_use]
    pub fn new(name: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            valid_data: true,
            binary_kernel: false,
            score_scale_factor: 1.0,
            part_of_overall_score: true,
        }
    }

    /// Set whether the device/configuration matched expectations
    #[must_use]
    pub fn with_valid_data(mut self, valid_data: bool) -> Self {
        self.valid_data = valid_data;
        self
    }

    /// Set whether a precompiled kernel binary was used
    #[must_use]
    pub fn with_binary_kernel(mut self, binary_kernel: bool) -> Self {
        self.binary_kernel = binary_kernel;
        self
    }

    /// Set the scoring weight
    #[must_use]
    pub fn with_score_scale_factor(mut self, factor: f64) -> Self {
        self.score_scale_factor = factor;
        self
    }

    /// Set whether the test counts toward category and overall scores
    #[must_use]
    pub fn with_part_of_overall_score(mut self, part_of: bool) -> Self {
        self.part_of_overall_score = part_of;
        self
    }
}

// ============================================================================
// Per-Test Scoring
// ============================================================================

/// Fully scored result for one completed test scene.
///
/// Created exactly once per scene by [`TestResult::from_samples`], never
/// mutated afterward, and owned by the [`ScoreBoard`] for the remainder of
/// the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Test scene name
    pub name: String,
    /// Category label, echoed verbatim even when unrecognized
    pub category: String,
    /// Did the device/configuration match expectations
    pub valid_data: bool,
    /// Was a precompiled kernel binary used
    pub binary_kernel: bool,
    /// Caller-supplied scoring weight
    pub score_scale_factor: f64,
    /// Does this test contribute to category and overall scores
    pub part_of_overall_score: bool,
    /// Raw frame times in execution order, microseconds
    pub frame_times: Vec<u32>,
    /// Fastest frame (microseconds); 0 when no frames ran
    pub fastest: u32,
    /// Slowest frame (microseconds); 0 when no frames ran
    pub slowest: u32,
    /// Arithmetic mean frame time; 0.0 when no frames ran
    pub average: f64,
    /// Median frame time; 0.0 when no frames ran
    pub median: f64,
    /// Geometric mean frame time; 0.0 when no frames ran
    pub geometric_mean: f64,
    /// Test score: 1e6 / geometric mean, or 0.0 when undefined
    pub score: f64,
}

impl TestResult {
    /// Score one completed test scene from its raw frame times.
    ///
    /// One linear scan (fastest/slowest/sum) plus one sort (median). An
    /// empty sample set is tolerated and yields a zero score with every
    /// statistic explicitly zeroed — no division happens before the sample
    /// count is confirmed non-zero.
    #[must_use]
    pub fn from_samples(info: TestInfo, frame_times: &[u32]) -> Self {
        let frame_count = frame_times.len();

        let mut fastest = u32::MAX;
        let mut slowest = 0_u32;
        let mut sum = 0_u64;
        for &frame_time in frame_times {
            fastest = fastest.min(frame_time);
            slowest = slowest.max(frame_time);
            sum += u64::from(frame_time);
        }
        if frame_count == 0 {
            fastest = 0;
        }

        let average = if frame_count == 0 {
            0.0
        } else {
            sum as f64 / frame_count as f64
        };

        let geometric_mean = statistics::geometric_mean(frame_times);
        let median = statistics::median(frame_times);

        let score = if frame_count > 0 && geometric_mean > 0.0 {
            (1.0 / geometric_mean) * 1_000_000.0
        } else {
            0.0
        };

        Self {
            name: info.name,
            category: info.category,
            valid_data: info.valid_data,
            binary_kernel: info.binary_kernel,
            score_scale_factor: info.score_scale_factor,
            part_of_overall_score: info.part_of_overall_score,
            frame_times: frame_times.to_vec(),
            fastest,
            slowest,
            average,
            median,
            geometric_mean,
            score,
        }
    }

    /// Number of frames the scene executed
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frame_times.len()
    }
}

// ============================================================================
// Score Board (one benchmark run)
// ============================================================================

/// Insertion-ordered collection of test results for one benchmark run.
///
/// Results accumulate as scenes complete; after the last scene,
/// [`ScoreBoard::summarize`] makes one pass feeding all three aggregate
/// accumulators. The board is the only store the aggregators read — the
/// report tree is an output projection, never an intermediate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    results: Vec<TestResult>,
}

impl ScoreBoard {
    /// Create an empty board for a new benchmark run
    #[must_use]
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Append a completed test's result (execution order)
    pub fn record(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// All recorded results, in execution order
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Number of recorded results
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether any scene has completed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Fold the recorded results into the suite-level summary.
    ///
    /// Builds the three accumulators fresh, walks the collection once in
    /// insertion order, and finalizes. Idempotent: identical input yields
    /// identical output on every call.
    #[must_use]
    pub fn summarize(&self, profile: Profile) -> SuiteSummary {
        let mut categories = CategoryAggregator::new();
        let mut overall = OverallScoreComputer::new();
        let mut suite = SuiteValidator::new(profile);

        for result in &self.results {
            categories.observe(result);
            overall.observe(result);
            suite.observe(result);
        }

        SuiteSummary {
            overall_score: overall.finalize(),
            categories: categories.finalize(),
            all_valid_configuration: overall.all_valid_configuration(),
            all_online_kernels: overall.all_online_kernels(),
            valid_test_suite: suite.is_valid(),
        }
    }
}

/// Suite-level aggregation output for one benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteSummary {
    /// Weighted overall score (log-domain mean over qualifying tests)
    pub overall_score: f64,
    /// The four category scores
    pub categories: CategoryScores,
    /// True only if every test ran with its expected configuration
    pub all_valid_configuration: bool,
    /// True only if no test used a precompiled binary kernel
    pub all_online_kernels: bool,
    /// True only if the active profile's required tests ran exactly once
    /// each with no extra qualifying tests
    pub valid_test_suite: bool,
}

// ============================================================================
// Tests
// ============================================================================
