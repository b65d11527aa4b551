//! Overall score and suite-wide flags
//!
//! The overall score is a log-domain weighted mean:
//! `exp(Σ weight·ln(score) / Σ weight)` over qualifying tests. This is a
//! different combination rule from the category product-then-root and the
//! two diverge numerically whenever weights are unequal.

use super::TestResult;

/// Running state for the overall score and the two suite-wide flags,
/// created fresh per benchmark run.
#[derive(Debug, Clone)]
pub struct OverallScoreComputer {
    score_value: f64,
    score_divider: f64,
    qualifying_count: usize,
    all_valid_configuration: bool,
    all_online_kernels: bool,
}

impl Default for OverallScoreComputer {
    fn default() -> Self {
        Self::new()
    }
}

impl OverallScoreComputer {
    /// Fresh state: empty sums, both flags set
    #[must_use]
    pub fn new() -> Self {
        Self {
            score_value: 0.0,
            score_divider: 0.0,
            qualifying_count: 0,
            all_valid_configuration: true,
            all_online_kernels: true,
        }
    }

    /// Fold one test result in.
    ///
    /// The flags are cleared from EVERY result, qualifying or not — a
    /// warm-up scene with a binary kernel still taints the run. The score
    /// sums only accumulate from results counted toward the overall score.
    pub fn observe(&mut self, result: &TestResult) {
        if !result.valid_data {
            self.all_valid_configuration = false;
        }
        if result.binary_kernel {
            self.all_online_kernels = false;
        }

        if result.part_of_overall_score {
            self.score_value += result.score_scale_factor * result.score.ln();
            self.score_divider += result.score_scale_factor;
            self.qualifying_count += 1;
        }
    }

    /// Weighted overall score; 0.0 when no qualifying test ran
    #[must_use]
    pub fn finalize(&self) -> f64 {
        if self.qualifying_count == 0 {
            0.0
        } else {
            (self.score_value / self.score_divider).exp()
        }
    }

    /// True only if every observed result had `valid_data`
    #[must_use]
    pub fn all_valid_configuration(&self) -> bool {
        self.all_valid_configuration
    }

    /// True only if no observed result used a binary kernel
    #[must_use]
    pub fn all_online_kernels(&self) -> bool {
        self.all_online_kernels
    }

    /// Number of qualifying results observed so far
    #[must_use]
    pub fn qualifying_count(&self) -> usize {
        self.qualifying_count
    }
}

// ============================================================================
// Tests
// ============================================================================
