use serde::{Deserialize, Serialize};

use crate::core::primitives::{finite_or_zero, guarded_ratio, round_to_precision};
use crate::core::Series;

/// Element-wise formula producing a derived series.
///
/// Formulas are plain data so they can be stored in a layout file and
/// re-evaluated deterministically from their inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Derivation {
    /// `numerator[i] / denominator[i] * scale`, zero-guarded, optionally rounded.
    Ratio {
        numerator: String,
        denominator: String,
        #[serde(default = "default_ratio_scale")]
        scale: f64,
        #[serde(default)]
        precision: Option<u32>,
    },
    /// `minuend[i] - subtrahend[i]`.
    Difference { minuend: String, subtrahend: String },
    /// Sum of every input at index `i`.
    Sum { inputs: Vec<String> },
    /// Running total of one input.
    CumulativeSum { input: String },
}

fn default_ratio_scale() -> f64 {
    1.0
}

impl Derivation {
    /// Percentage ratio rounded to `precision` decimals, e.g. an overdue rate.
    #[must_use]
    pub fn ratio_percent(
        numerator: impl Into<String>,
        denominator: impl Into<String>,
        precision: u32,
    ) -> Self {
        Self::Ratio {
            numerator: numerator.into(),
            denominator: denominator.into(),
            scale: 100.0,
            precision: Some(precision),
        }
    }

    #[must_use]
    pub fn difference(minuend: impl Into<String>, subtrahend: impl Into<String>) -> Self {
        Self::Difference {
            minuend: minuend.into(),
            subtrahend: subtrahend.into(),
        }
    }

    #[must_use]
    pub fn sum<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Sum {
            inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn cumulative_sum(input: impl Into<String>) -> Self {
        Self::CumulativeSum {
            input: input.into(),
        }
    }

    /// Input names in evaluation order. The first input supplies the axis.
    #[must_use]
    pub fn inputs(&self) -> Vec<&str> {
        match self {
            Self::Ratio {
                numerator,
                denominator,
                ..
            } => vec![numerator.as_str(), denominator.as_str()],
            Self::Difference {
                minuend,
                subtrahend,
            } => vec![minuend.as_str(), subtrahend.as_str()],
            Self::Sum { inputs } => inputs.iter().map(String::as_str).collect(),
            Self::CumulativeSum { input } => vec![input.as_str()],
        }
    }

    /// Evaluates the formula over resolved inputs, in the order of [`Self::inputs`].
    ///
    /// Output length follows the first input. An index missing from a later
    /// input counts as absent: zero for sums, the ratio guard for ratios.
    pub(crate) fn evaluate(&self, inputs: &[&Series]) -> Vec<f64> {
        let Some(first) = inputs.first() else {
            return Vec::new();
        };
        let len = first.len();
        fn at(series: &Series, index: usize) -> Option<f64> {
            series.values().get(index).copied()
        }

        match self {
            Self::Ratio {
                scale, precision, ..
            } => (0..len)
                .map(|i| {
                    let numerator = at(inputs[0], i).unwrap_or(0.0);
                    let denominator = inputs.get(1).and_then(|series| at(series, i));
                    let ratio = guarded_ratio(numerator, denominator, *scale);
                    match precision {
                        Some(precision) => round_to_precision(ratio, *precision),
                        None => ratio,
                    }
                })
                .collect(),
            Self::Difference { .. } => (0..len)
                .map(|i| {
                    let minuend = at(inputs[0], i).unwrap_or(0.0);
                    let subtrahend = inputs
                        .get(1)
                        .and_then(|series| at(series, i))
                        .unwrap_or(0.0);
                    finite_or_zero(minuend - subtrahend)
                })
                .collect(),
            Self::Sum { .. } => (0..len)
                .map(|i| {
                    finite_or_zero(
                        inputs
                            .iter()
                            .map(|series| at(series, i).unwrap_or(0.0))
                            .sum(),
                    )
                })
                .collect(),
            Self::CumulativeSum { .. } => {
                let mut total = 0.0;
                first
                    .values()
                    .iter()
                    .map(|value| {
                        total += value;
                        finite_or_zero(total)
                    })
                    .collect()
            }
        }
    }
}
