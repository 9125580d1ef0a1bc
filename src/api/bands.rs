use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// How a value is compared against a band boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BandComparison {
    /// `value > boundary`
    #[default]
    Above,
    /// `value >= boundary`
    AtLeast,
}

impl BandComparison {
    #[must_use]
    pub fn matches(self, value: f64, boundary: f64) -> bool {
        match self {
            Self::Above => value > boundary,
            Self::AtLeast => value >= boundary,
        }
    }
}

/// One `(boundary, style)` rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBand<S> {
    pub boundary: f64,
    pub style: S,
}

impl<S> ThresholdBand<S> {
    #[must_use]
    pub fn new(boundary: f64, style: S) -> Self {
        Self { boundary, style }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ThresholdBandsRepr<S> {
    bands: Vec<ThresholdBand<S>>,
    fallback: S,
    #[serde(default)]
    comparison: BandComparison,
}

/// Ordered threshold rules coloring data by value magnitude.
///
/// Bands are kept sorted by descending boundary; the first matching band
/// wins and `fallback` applies when none match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "ThresholdBandsRepr<S>",
    bound(deserialize = "S: Deserialize<'de>")
)]
pub struct ThresholdBands<S> {
    bands: Vec<ThresholdBand<S>>,
    fallback: S,
    comparison: BandComparison,
}

impl<S> ThresholdBands<S> {
    pub fn new(
        bands: Vec<ThresholdBand<S>>,
        fallback: S,
        comparison: BandComparison,
    ) -> DashboardResult<Self> {
        let mut bands = bands;
        if bands.iter().any(|band| !band.boundary.is_finite()) {
            return Err(DashboardError::InvalidData(
                "threshold band boundaries must be finite".to_owned(),
            ));
        }
        bands.sort_by_key(|band| std::cmp::Reverse(OrderedFloat(band.boundary)));
        Ok(Self {
            bands,
            fallback,
            comparison,
        })
    }

    /// Strict `>` bands from `(boundary, style)` pairs.
    pub fn above<I>(bands: I, fallback: S) -> DashboardResult<Self>
    where
        I: IntoIterator<Item = (f64, S)>,
    {
        Self::new(
            bands
                .into_iter()
                .map(|(boundary, style)| ThresholdBand::new(boundary, style))
                .collect(),
            fallback,
            BandComparison::Above,
        )
    }

    /// Inclusive `>=` bands from `(boundary, style)` pairs.
    pub fn at_least<I>(bands: I, fallback: S) -> DashboardResult<Self>
    where
        I: IntoIterator<Item = (f64, S)>,
    {
        Self::new(
            bands
                .into_iter()
                .map(|(boundary, style)| ThresholdBand::new(boundary, style))
                .collect(),
            fallback,
            BandComparison::AtLeast,
        )
    }

    /// Style for `value`: first band in descending order that matches.
    #[must_use]
    pub fn resolve(&self, value: f64) -> &S {
        self.bands
            .iter()
            .find(|band| self.comparison.matches(value, band.boundary))
            .map_or(&self.fallback, |band| &band.style)
    }

    #[must_use]
    pub fn bands(&self) -> &[ThresholdBand<S>] {
        &self.bands
    }

    #[must_use]
    pub fn fallback(&self) -> &S {
        &self.fallback
    }

    #[must_use]
    pub fn comparison(&self) -> BandComparison {
        self.comparison
    }
}

impl<S: Clone> ThresholdBands<S> {
    /// Resolves every value once, in order.
    #[must_use]
    pub fn resolve_all(&self, values: &[f64]) -> Vec<S> {
        values
            .iter()
            .map(|value| self.resolve(*value).clone())
            .collect()
    }
}

impl<S> TryFrom<ThresholdBandsRepr<S>> for ThresholdBands<S> {
    type Error = DashboardError;

    fn try_from(repr: ThresholdBandsRepr<S>) -> Result<Self, Self::Error> {
        Self::new(repr.bands, repr.fallback, repr.comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::ThresholdBands;

    #[test]
    fn bands_are_sorted_descending_on_construction() {
        let bands = ThresholdBands::above([(30.0, "warning"), (50.0, "danger")], "safe")
            .expect("bands");
        let boundaries: Vec<f64> = bands.bands().iter().map(|band| band.boundary).collect();
        assert_eq!(boundaries, vec![50.0, 30.0]);
        assert_eq!(*bands.resolve(60.0), "danger");
    }

    #[test]
    fn non_finite_boundary_is_rejected() {
        assert!(ThresholdBands::above([(f64::NAN, "x")], "y").is_err());
    }
}
