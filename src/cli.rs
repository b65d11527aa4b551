//! CLI command implementations (extracted for testability)
//!
//! The binary reads a run-input file — the per-test invocation data and
//! settings captured by the execution harness — scores it, and writes the
//! report. All command logic lives here so tests can drive it without
//! spawning a process.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::RunSettings;
use crate::error::Result;
use crate::report::SuiteReport;
use crate::scoring::{ScoreBoard, SuiteValidator, TestInfo, TestResult};

// ============================================================================
// Run-Input Schema
// ============================================================================

/// One executed test scene, as captured by the harness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRun {
    /// Test scene name
    pub name: String,
    /// Category label
    pub category: String,
    /// Did the device/configuration match expectations (default true)
    #[serde(default = "default_true")]
    pub valid_data: bool,
    /// Was a precompiled kernel binary used (default false)
    #[serde(default)]
    pub binary_kernel: bool,
    /// Scoring weight (default 1.0)
    #[serde(default = "default_scale_factor")]
    pub score_scale_factor: f64,
    /// Does the test count toward category/overall scores (default true)
    #[serde(default = "default_true")]
    pub is_part_of_overall_score: bool,
    /// Raw frame times in execution order, microseconds
    pub frame_times: Vec<u32>,
}

fn default_true() -> bool {
    true
}

fn default_scale_factor() -> f64 {
    1.0
}

impl TestRun {
    fn info(&self) -> TestInfo {
        TestInfo::new(&self.name, &self.category)
            .with_valid_data(self.valid_data)
            .with_binary_kernel(self.binary_kernel)
            .with_score_scale_factor(self.score_scale_factor)
            .with_part_of_overall_score(self.is_part_of_overall_score)
    }
}

/// Complete run-input file: settings plus every completed test scene, in
/// execution order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunInput {
    /// Settings strings from the configuration collaborator
    #[serde(default)]
    pub settings: RunSettings,
    /// Completed test scenes, execution order
    pub tests: Vec<TestRun>,
}

impl RunInput {
    /// Parse a run-input file
    ///
    /// # Errors
    ///
    /// Returns [`crate::PuntuarError::Json`] when the input is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Score every test and collect the results in execution order
    #[must_use]
    pub fn build_board(&self) -> ScoreBoard {
        let mut board = ScoreBoard::new();
        for test in &self.tests {
            board.record(TestResult::from_samples(test.info(), &test.frame_times));
        }
        board
    }

    /// Full pipeline: score, aggregate, and project the report
    #[must_use]
    pub fn score(&self) -> SuiteReport {
        SuiteReport::from_board(&self.build_board(), self.settings.profile())
    }
}

// ============================================================================
// Commands
// ============================================================================

/// `puntuar score`: read a run-input file, write or print the report JSON
///
/// # Errors
///
/// Returns an error when the input cannot be read or parsed, or the output
/// cannot be written.
pub fn run_score(input: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    let text = fs::read_to_string(input)?;
    let run = RunInput::from_json(&text)?;
    let report = run.score();

    let json = if pretty {
        report.to_json_pretty()?
    } else {
        report.to_json()?
    };

    match output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

/// `puntuar validate`: read a run-input file, print the suite verdict and
/// every violation
///
/// Returns the verdict so the binary can choose its exit code.
///
/// # Errors
///
/// Returns an error when the input cannot be read or parsed.
pub fn run_validate(input: &Path) -> Result<bool> {
    let text = fs::read_to_string(input)?;
    let run = RunInput::from_json(&text)?;

    let board = run.build_board();
    let profile = run.settings.profile();
    let mut validator = SuiteValidator::new(profile);
    for result in board.results() {
        validator.observe(result);
    }

    println!("profile: {profile}");
    if validator.is_valid() {
        println!("test suite: VALID");
    } else {
        println!("test suite: INVALID");
        for violation in validator.violations() {
            println!("  - {violation}");
        }
    }
    Ok(validator.is_valid())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Profile;

    const MINIMAL_RUN: &str = r#"{
        "settings": {"OpenCLFullProfile": "0"},
        "tests": [
            {"name": "Soft Body Test", "category": "Physics", "frameTimes": [10, 20, 30]},
            {"name": "Image Blur Test", "category": "Image manipulation",
             "binaryKernel": true, "scoreScaleFactor": 2.0, "frameTimes": [15]}
        ]
    }"#;

    #[test]
    fn test_run_input_parses_with_defaults() {
        let run = RunInput::from_json(MINIMAL_RUN).unwrap();

        assert_eq!(run.tests.len(), 2);
        let first = &run.tests[0];
        assert!(first.valid_data);
        assert!(!first.binary_kernel);
        assert_eq!(first.score_scale_factor, 1.0);
        assert!(first.is_part_of_overall_score);

        let second = &run.tests[1];
        assert!(second.binary_kernel);
        assert_eq!(second.score_scale_factor, 2.0);
    }

    #[test]
    fn test_run_input_profile_from_settings() {
        let run = RunInput::from_json(MINIMAL_RUN).unwrap();
        assert_eq!(run.settings.profile(), Profile::Embedded);

        let full = RunInput::from_json(
            r#"{"settings": {"OpenCLFullProfile": "1"}, "tests": []}"#,
        )
        .unwrap();
        assert_eq!(full.settings.profile(), Profile::Full);
    }

    #[test]
    fn test_run_input_missing_settings_defaults_to_embedded() {
        let run = RunInput::from_json(r#"{"tests": []}"#).unwrap();
        assert_eq!(run.settings.profile(), Profile::Embedded);
    }

    #[test]
    fn test_run_input_rejects_malformed_json() {
        assert!(RunInput::from_json("{").is_err());
        assert!(RunInput::from_json(r#"{"tests": [{"name": "x"}]}"#).is_err());
    }

    #[test]
    fn test_build_board_preserves_execution_order() {
        let run = RunInput::from_json(MINIMAL_RUN).unwrap();
        let board = run.build_board();

        assert_eq!(board.len(), 2);
        assert_eq!(board.results()[0].name, "Soft Body Test");
        assert_eq!(board.results()[1].name, "Image Blur Test");
        assert_eq!(board.results()[0].frame_times, vec![10, 20, 30]);
    }

    #[test]
    fn test_score_produces_report() {
        let run = RunInput::from_json(MINIMAL_RUN).unwrap();
        let report = run.score();

        assert_eq!(report.tests.len(), 2);
        assert_eq!(report.tests[0].frame_times, "10, 20, 30");
        // An incomplete suite is invalid
        assert_eq!(report.aggregate.valid_test_suite, 0);
        // The second test's binary kernel inverts the aggregate flag
        assert_eq!(report.aggregate.binary_kernels, 0);
        assert!(report.aggregate.score > 0.0);
    }
}
