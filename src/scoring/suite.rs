//! Suite completeness validation
//!
//! A benchmark run is only comparable when the active profile's required
//! test scenes each ran exactly once and nothing extra leaked into the
//! qualifying set. The validator keeps one run-count slot per required
//! test plus a qualifying total, and AND-reduces the verdict.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TestResult;

// ============================================================================
// Required Test Table
// ============================================================================

/// The ordered required-test table. The embedded profile requires the
/// first [`EMBEDDED_REQUIRED_COUNT`] entries; the full profile requires
/// all of them.
pub const REQUIRED_TESTS: [&str; 16] = [
    "Julia Rendering Test",
    "Mandelbulb Rendering Test",
    "Fluid Operations Test",
    "Soft Body Test",
    "Smoothed Particle Hydrodynamics Test",
    "Wave Simulation Test",
    "Image Sharpening Test",
    "Image Blur Test",
    "Image Surface Smoothing Test",
    "Image Noise Reduction Test",
    "Video Sharpening Test",
    "Video Blur Test",
    "Video Surface Smoothing Test",
    "Video Noise Reduction Test",
    "Image Color Correction Test",
    "Video Color Correction Test",
];

/// Number of tests the embedded profile requires
pub const EMBEDDED_REQUIRED_COUNT: usize = 14;

// ============================================================================
// Profile
// ============================================================================

/// Which slice of the required-test table the run must cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    /// All 16 required tests
    Full,
    /// The first 14 required tests, same order
    Embedded,
}

impl Profile {
    /// Map the `OpenCLFullProfile` setting string: `"1"` selects the full
    /// profile, anything else the embedded profile.
    #[must_use]
    pub fn from_setting(value: &str) -> Self {
        if value == "1" {
            Self::Full
        } else {
            Self::Embedded
        }
    }

    /// Number of required tests for this profile
    #[must_use]
    pub fn required_count(self) -> usize {
        match self {
            Self::Full => REQUIRED_TESTS.len(),
            Self::Embedded => EMBEDDED_REQUIRED_COUNT,
        }
    }

    /// The required test names, in table order
    #[must_use]
    pub fn required_tests(self) -> &'static [&'static str] {
        &REQUIRED_TESTS[..self.required_count()]
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Embedded => write!(f, "embedded"),
        }
    }
}

// ============================================================================
// Suite Validator
// ============================================================================

/// Completeness check over the qualifying results of one run.
#[derive(Debug, Clone)]
pub struct SuiteValidator {
    profile: Profile,
    run_counts: [u32; REQUIRED_TESTS.len()],
    qualifying_count: usize,
}

impl SuiteValidator {
    /// Fresh validator for the given profile, all run counts zero
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            run_counts: [0; REQUIRED_TESTS.len()],
            qualifying_count: 0,
        }
    }

    /// The profile this validator checks against
    #[must_use]
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Fold one test result in.
    ///
    /// Only results counted toward the overall score participate. An exact
    /// name match increments that table slot; an unrecognized name still
    /// counts toward the qualifying total (and will surface as a count
    /// mismatch).
    pub fn observe(&mut self, result: &TestResult) {
        if !result.part_of_overall_score {
            return;
        }
        self.qualifying_count += 1;
        if let Some(i) = REQUIRED_TESTS.iter().position(|&name| name == result.name) {
            self.run_counts[i] += 1;
        }
    }

    /// Number of qualifying results observed
    #[must_use]
    pub fn qualifying_count(&self) -> usize {
        self.qualifying_count
    }

    /// The AND-reduced verdict: every required test ran exactly once and
    /// the qualifying total matches the required count.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let required = self.profile.required_count();
        self.run_counts[..required].iter().all(|&count| count == 1)
            && self.qualifying_count == required
    }

    /// Enumerate what is wrong with the run, for diagnostics.
    ///
    /// Empty exactly when [`SuiteValidator::is_valid`] is true.
    #[must_use]
    pub fn violations(&self) -> Vec<SuiteViolation> {
        let required = self.profile.required_count();
        let mut violations = Vec::new();

        for (i, &count) in self.run_counts[..required].iter().enumerate() {
            if count == 0 {
                violations.push(SuiteViolation::MissingTest {
                    name: REQUIRED_TESTS[i],
                });
            } else if count > 1 {
                violations.push(SuiteViolation::DuplicatedTest {
                    name: REQUIRED_TESTS[i],
                    runs: count,
                });
            }
        }

        if self.qualifying_count != required {
            violations.push(SuiteViolation::CountMismatch {
                expected: required,
                actual: self.qualifying_count,
            });
        }

        violations
    }
}

/// One reason a suite failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SuiteViolation {
    /// A required test never produced a qualifying result
    MissingTest {
        /// The required test name
        name: &'static str,
    },
    /// A required test produced more than one qualifying result
    DuplicatedTest {
        /// The required test name
        name: &'static str,
        /// How many times it ran
        runs: u32,
    },
    /// The qualifying total does not match the required count (extra or
    /// unrecognized qualifying tests, beyond what the per-test slots show)
    CountMismatch {
        /// Required count for the active profile
        expected: usize,
        /// Qualifying results actually observed
        actual: usize,
    },
}

impl fmt::Display for SuiteViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTest { name } => write!(f, "required test never ran: {name}"),
            Self::DuplicatedTest { name, runs } => {
                write!(f, "required test ran {runs} times: {name}")
            }
            Self::CountMismatch { expected, actual } => {
                write!(f, "expected {expected} qualifying tests, saw {actual}")
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
