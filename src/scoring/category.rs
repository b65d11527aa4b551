//! Category score aggregation
//!
//! Folds qualifying test results into the 4 fixed category scores. Each
//! category keeps a running product of test scores and a count; the final
//! score is the count-th root of the product.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TestResult;
use crate::error::PuntuarError;

// ============================================================================
// Category Labels
// ============================================================================

/// One of the 4 fixed test categories.
///
/// Labels are matched literally — no case folding, no trimming. A result
/// whose category string matches none of the four is silently excluded
/// from category scoring (its record still carries the string verbatim).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Physics simulation scenes (fluids, soft bodies, SPH, waves)
    Physics,
    /// General compute scenes (fractal rendering)
    General,
    /// Image manipulation scenes
    ImageManipulation,
    /// Video manipulation scenes
    VideoManipulation,
}

impl Category {
    /// All categories, in the fixed report order
    pub const ALL: [Self; 4] = [
        Self::Physics,
        Self::General,
        Self::ImageManipulation,
        Self::VideoManipulation,
    ];

    /// The exact label this category is matched and serialized under
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Physics => "Physics",
            Self::General => "General",
            Self::ImageManipulation => "Image manipulation",
            Self::VideoManipulation => "Video manipulation",
        }
    }

    /// Literal label match. `None` for anything but the four exact strings.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Physics" => Some(Self::Physics),
            "General" => Some(Self::General),
            "Image manipulation" => Some(Self::ImageManipulation),
            "Video manipulation" => Some(Self::VideoManipulation),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Physics => 0,
            Self::General => 1,
            Self::ImageManipulation => 2,
            Self::VideoManipulation => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = PuntuarError;

    /// Strict form of [`Category::parse`] for inputs that must name one of
    /// the four categories.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::parse(label).ok_or_else(|| PuntuarError::UnknownCategory {
            label: label.to_string(),
        })
    }
}

// ============================================================================
// Category Aggregation
// ============================================================================

/// Running `(product, count)` accumulator per category, one set per run.
#[derive(Debug, Clone)]
pub struct CategoryAggregator {
    products: [f64; 4],
    counts: [usize; 4],
}

impl Default for CategoryAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryAggregator {
    /// Fresh accumulator: products at 1.0, counts at zero
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: [1.0; 4],
            counts: [0; 4],
        }
    }

    /// Fold one test result in.
    ///
    /// Only results counted toward the overall score participate, and only
    /// when their category label matches one of the four exactly.
    pub fn observe(&mut self, result: &TestResult) {
        if !result.part_of_overall_score {
            return;
        }
        if let Some(category) = Category::parse(&result.category) {
            let i = category.index();
            self.products[i] *= result.score;
            self.counts[i] += 1;
        }
    }

    /// Number of qualifying tests observed for a category
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    /// Finalize into the four category scores.
    ///
    /// A category with no qualifying tests, or whose product collapsed to
    /// zero or below, scores 0.0; the `1/count` exponent is derived only
    /// on the non-zero path.
    #[must_use]
    pub fn finalize(&self) -> CategoryScores {
        let mut finals = [0.0_f64; 4];
        for category in Category::ALL {
            let i = category.index();
            let product = self.products[i];
            let count = self.counts[i];
            finals[i] = if count == 0 || product <= 0.0 {
                0.0
            } else {
                product.powf(1.0 / count as f64)
            };
        }
        CategoryScores {
            physics: finals[0],
            general: finals[1],
            image: finals[2],
            video: finals[3],
        }
    }
}

/// Final category scores, in the fixed report order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    /// Physics category score
    pub physics: f64,
    /// General category score
    pub general: f64,
    /// Image manipulation category score
    pub image: f64,
    /// Video manipulation category score
    pub video: f64,
}

impl CategoryScores {
    /// Score for one category
    #[must_use]
    pub fn get(self, category: Category) -> f64 {
        match category {
            Category::Physics => self.physics,
            Category::General => self.general,
            Category::ImageManipulation => self.image,
            Category::VideoManipulation => self.video,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::TestInfo;

    fn result_with_score(category: &str, score: f64) -> TestResult {
        // Frame time 1e6/score gives a geometric mean whose score is the
        // requested value
        let frame_time = (1_000_000.0 / score).round() as u32;
        TestResult::from_samples(TestInfo::new("test", category), &[frame_time])
    }

    // =========================================================================
    // Category Tests
    // =========================================================================

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Physics.label(), "Physics");
        assert_eq!(Category::General.label(), "General");
        assert_eq!(Category::ImageManipulation.label(), "Image manipulation");
        assert_eq!(Category::VideoManipulation.label(), "Video manipulation");
    }

    #[test]
    fn test_category_parse_exact() {
        assert_eq!(Category::parse("Physics"), Some(Category::Physics));
        assert_eq!(
            Category::parse("Image manipulation"),
            Some(Category::ImageManipulation)
        );
        assert_eq!(
            Category::parse("Video manipulation"),
            Some(Category::VideoManipulation)
        );
    }

    #[test]
    fn test_category_parse_is_literal() {
        // No case folding, no trimming
        assert_eq!(Category::parse("physics"), None);
        assert_eq!(Category::parse("PHYSICS"), None);
        assert_eq!(Category::parse(" Physics"), None);
        assert_eq!(Category::parse("Image Manipulation"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_category_from_str_strict() {
        use std::str::FromStr;
        assert_eq!(Category::from_str("General").unwrap(), Category::General);
        let err = Category::from_str("general").unwrap_err();
        assert!(err.to_string().contains("'general'"));
    }

    #[test]
    fn test_category_display_matches_label() {
        for category in Category::ALL {
            assert_eq!(format!("{}", category), category.label());
        }
    }

    #[test]
    fn test_category_all_order() {
        assert_eq!(Category::ALL[0], Category::Physics);
        assert_eq!(Category::ALL[1], Category::General);
        assert_eq!(Category::ALL[2], Category::ImageManipulation);
        assert_eq!(Category::ALL[3], Category::VideoManipulation);
    }

    // =========================================================================
    // CategoryAggregator Tests
    // =========================================================================

    #[test]
    fn test_aggregator_geometric_mean_of_two() {
        let mut aggregator = CategoryAggregator::new();
        aggregator.observe(&result_with_score("Physics", 100.0));
        aggregator.observe(&result_with_score("Physics", 400.0));

        let scores = aggregator.finalize();
        // sqrt(100 * 400) = 200
        assert!((scores.physics - 200.0).abs() < 0.5);
        assert_eq!(aggregator.count(Category::Physics), 2);
    }

    #[test]
    fn test_aggregator_empty_category_scores_zero() {
        let aggregator = CategoryAggregator::new();
        let scores = aggregator.finalize();
        assert_eq!(scores.physics, 0.0);
        assert_eq!(scores.general, 0.0);
        assert_eq!(scores.image, 0.0);
        assert_eq!(scores.video, 0.0);
    }

    #[test]
    fn test_aggregator_skips_non_qualifying_results() {
        let mut aggregator = CategoryAggregator::new();
        let mut result = result_with_score("Physics", 100.0);
        result.part_of_overall_score = false;
        aggregator.observe(&result);

        assert_eq!(aggregator.count(Category::Physics), 0);
        assert_eq!(aggregator.finalize().physics, 0.0);
    }

    #[test]
    fn test_aggregator_skips_unknown_category() {
        let mut aggregator = CategoryAggregator::new();
        aggregator.observe(&result_with_score("physics", 100.0));
        aggregator.observe(&result_with_score("Audio manipulation", 100.0));

        for category in Category::ALL {
            assert_eq!(aggregator.count(category), 0);
        }
    }

    #[test]
    fn test_aggregator_zero_score_collapses_category() {
        let mut aggregator = CategoryAggregator::new();
        aggregator.observe(&result_with_score("General", 100.0));
        // A test with no frames scores 0, zeroing the running product
        aggregator.observe(&TestResult::from_samples(
            TestInfo::new("failed", "General"),
            &[],
        ));

        assert_eq!(aggregator.count(Category::General), 2);
        assert_eq!(aggregator.finalize().general, 0.0);
    }

    #[test]
    fn test_aggregator_categories_are_independent() {
        let mut aggregator = CategoryAggregator::new();
        aggregator.observe(&result_with_score("Physics", 100.0));
        aggregator.observe(&result_with_score("Video manipulation", 400.0));

        let scores = aggregator.finalize();
        assert!((scores.physics - 100.0).abs() < 0.5);
        assert!((scores.video - 400.0).abs() < 2.0);
        assert_eq!(scores.general, 0.0);
        assert_eq!(scores.image, 0.0);
    }

    #[test]
    fn test_category_scores_get() {
        let scores = CategoryScores {
            physics: 1.0,
            general: 2.0,
            image: 3.0,
            video: 4.0,
        };
        assert_eq!(scores.get(Category::Physics), 1.0);
        assert_eq!(scores.get(Category::General), 2.0);
        assert_eq!(scores.get(Category::ImageManipulation), 3.0);
        assert_eq!(scores.get(Category::VideoManipulation), 4.0);
    }
}
