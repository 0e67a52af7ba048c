use crate::color::ResolvedColor;

use super::algorithm::{ContrastAlgorithm, ContrastClass};

/// Outcome of scoring one foreground/background pair.
#[derive(Clone, Debug, PartialEq)]
pub struct ContrastResult {
    /// Class whose threshold was applied.
    pub class: ContrastClass,
    /// Algorithm that produced `score` and `threshold`.
    pub algorithm: ContrastAlgorithm,
    /// Foreground color as given (alpha was ignored for scoring).
    pub foreground: ResolvedColor,
    /// Background color as given (alpha was ignored for scoring).
    pub background: ResolvedColor,
    /// Measured contrast, never negative.
    pub score: f64,
    /// Minimum score for `class` under `algorithm`.
    pub threshold: f64,
    /// Whether `score >= threshold`.
    pub passed: bool,
}

/// Scores pairs with one explicitly chosen [`ContrastAlgorithm`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContrastEvaluator {
    algorithm: ContrastAlgorithm,
}

impl ContrastEvaluator {
    /// Create an evaluator bound to `algorithm`.
    #[must_use]
    pub const fn new(algorithm: ContrastAlgorithm) -> Self {
        Self { algorithm }
    }

    /// The active algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> ContrastAlgorithm {
        self.algorithm
    }

    /// What: Score a pair and compare it against the class threshold.
    ///
    /// Inputs:
    /// - `foreground`, `background`: Colors to compare, treated as opaque.
    /// - `class`: Sensitivity tier whose threshold applies.
    ///
    /// Output:
    /// - A fresh [`ContrastResult`].
    ///
    /// Details:
    /// - Total over all colors. Passing a translucent color is a caller error:
    ///   contrast against a partial-alpha surface depends on the backdrop.
    /// - A failing pair is a normal result, not an error.
    #[must_use]
    pub fn evaluate(
        &self,
        foreground: ResolvedColor,
        background: ResolvedColor,
        class: ContrastClass,
    ) -> ContrastResult {
        let score = self
            .algorithm
            .score(foreground.opaque(), background.opaque());
        let threshold = self.algorithm.threshold(class);
        ContrastResult {
            class,
            algorithm: self.algorithm,
            foreground,
            background,
            score,
            threshold,
            passed: score >= threshold,
        }
    }
}
