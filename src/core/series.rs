use serde::{Deserialize, Serialize};

use crate::core::CategoryAxis;
use crate::error::{DashboardError, DashboardResult};

/// How a series' labels should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesShape {
    /// Values follow a shared ordered axis (time buckets, periods).
    Indexed,
    /// Category/value pairs used for share and comparison charts.
    Categorical,
}

/// Where a stored series came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesOrigin {
    Base,
    Derived { inputs: Vec<String> },
}

/// Labeled numeric values owned by the registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    shape: SeriesShape,
    labels: CategoryAxis,
    values: Vec<f64>,
    origin: SeriesOrigin,
}

impl Series {
    /// Builds an axis-indexed series; `values` must match the axis length.
    pub fn indexed(axis: CategoryAxis, values: impl Into<Vec<f64>>) -> DashboardResult<Self> {
        let values = values.into();
        if values.len() != axis.len() {
            return Err(DashboardError::InvalidData(format!(
                "indexed series has {} values for {} axis labels",
                values.len(),
                axis.len()
            )));
        }
        validate_finite(&values)?;
        Ok(Self {
            shape: SeriesShape::Indexed,
            labels: axis,
            values,
            origin: SeriesOrigin::Base,
        })
    }

    /// Builds a categorical series from `(category, value)` pairs.
    ///
    /// Pair order is kept for palette assignment; category names must be unique.
    pub fn categorical<I, K>(pairs: I) -> DashboardResult<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let (labels, values): (Vec<String>, Vec<f64>) = pairs
            .into_iter()
            .map(|(category, value)| (category.into(), value))
            .unzip();
        let labels = CategoryAxis::new(labels);
        if !labels.has_unique_labels() {
            return Err(DashboardError::InvalidData(
                "categorical series categories must be unique".to_owned(),
            ));
        }
        validate_finite(&values)?;
        Ok(Self {
            shape: SeriesShape::Categorical,
            labels,
            values,
            origin: SeriesOrigin::Base,
        })
    }

    pub(crate) fn derived(axis: CategoryAxis, values: Vec<f64>, inputs: Vec<String>) -> Self {
        debug_assert_eq!(axis.len(), values.len());
        Self {
            shape: SeriesShape::Indexed,
            labels: axis,
            values,
            origin: SeriesOrigin::Derived { inputs },
        }
    }

    #[must_use]
    pub fn shape(&self) -> SeriesShape {
        self.shape
    }

    #[must_use]
    pub fn labels(&self) -> &CategoryAxis {
        &self.labels
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn origin(&self) -> &SeriesOrigin {
        &self.origin
    }

    #[must_use]
    pub fn is_derived(&self) -> bool {
        matches!(self.origin, SeriesOrigin::Derived { .. })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Looks up the value stored under `label`.
    #[must_use]
    pub fn value_at(&self, label: &str) -> Option<f64> {
        self.labels
            .position(label)
            .and_then(|index| self.values.get(index).copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .labels()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

fn validate_finite(values: &[f64]) -> DashboardResult<()> {
    if let Some(index) = values.iter().position(|value| !value.is_finite()) {
        return Err(DashboardError::InvalidData(format!(
            "series value at index {index} must be finite"
        )));
    }
    Ok(())
}
