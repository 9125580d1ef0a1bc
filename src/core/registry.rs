use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::primitives::finite_or_zero;
use crate::core::{Derivation, Series, SeriesShape};
use crate::error::{DashboardError, DashboardResult};

/// Named store for every base and derived series of one dashboard.
///
/// The registry is written during a single population phase and then frozen;
/// panels read it by name afterwards. Registration order is preserved.
#[derive(Debug, Clone, Default)]
pub struct SeriesRegistry {
    entries: IndexMap<String, Series>,
    frozen: bool,
}

impl SeriesRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `series` under `name`.
    pub fn register(&mut self, name: impl Into<String>, series: Series) -> DashboardResult<()> {
        let name = name.into();
        self.ensure_writable(&name)?;
        debug!(
            name = %name,
            shape = ?series.shape(),
            len = series.len(),
            "register series"
        );
        self.entries.insert(name, series);
        Ok(())
    }

    /// Computes `derivation` eagerly and stores the result under `name`.
    pub fn derive(
        &mut self,
        name: impl Into<String>,
        derivation: &Derivation,
    ) -> DashboardResult<()> {
        let name = name.into();
        self.ensure_writable(&name)?;
        let input_names = derivation.inputs();
        let inputs = self.resolve_inputs(&name, &input_names)?;
        let values = derivation.evaluate(&inputs);
        let derived = Series::derived(
            inputs[0].labels().clone(),
            values,
            input_names.iter().map(|input| (*input).to_owned()).collect(),
        );
        debug!(name = %name, inputs = ?input_names, "derive series");
        self.entries.insert(name, derived);
        Ok(())
    }

    /// Derives a series with an ad-hoc element function.
    ///
    /// `f` receives the i-th value of every input (0 where an input is
    /// shorter than the first). A non-finite result is stored as 0.
    pub fn derive_with<F>(
        &mut self,
        name: impl Into<String>,
        inputs: &[&str],
        f: F,
    ) -> DashboardResult<()>
    where
        F: Fn(&[f64]) -> f64,
    {
        let name = name.into();
        self.ensure_writable(&name)?;
        let resolved = self.resolve_inputs(&name, inputs)?;
        let mut row = Vec::with_capacity(resolved.len());
        let values = (0..resolved[0].len())
            .map(|i| {
                row.clear();
                row.extend(
                    resolved
                        .iter()
                        .map(|series| series.values().get(i).copied().unwrap_or(0.0)),
                );
                finite_or_zero(f(&row))
            })
            .collect();
        let derived = Series::derived(
            resolved[0].labels().clone(),
            values,
            inputs.iter().map(|input| (*input).to_owned()).collect(),
        );
        debug!(name = %name, inputs = ?inputs, "derive series with custom function");
        self.entries.insert(name, derived);
        Ok(())
    }

    pub fn get(&self, name: &str) -> DashboardResult<&Series> {
        self.entries
            .get(name)
            .ok_or_else(|| DashboardError::UnknownSeries {
                name: name.to_owned(),
            })
    }

    /// Shortcut for `get(name)?.values()`.
    pub fn values(&self, name: &str) -> DashboardResult<&[f64]> {
        self.get(name).map(Series::values)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Ends the population phase. Irreversible.
    pub fn freeze(&mut self) {
        if !self.frozen {
            debug!(series = self.entries.len(), "freeze series registry");
        }
        self.frozen = true;
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn ensure_writable(&self, name: &str) -> DashboardResult<()> {
        if self.frozen {
            return Err(DashboardError::RegistryFrozen {
                name: name.to_owned(),
            });
        }
        if self.entries.contains_key(name) {
            return Err(DashboardError::DuplicateName {
                name: name.to_owned(),
            });
        }
        Ok(())
    }

    fn resolve_inputs(&self, name: &str, inputs: &[&str]) -> DashboardResult<Vec<&Series>> {
        if inputs.is_empty() {
            return Err(DashboardError::InvalidData(format!(
                "derived series `{name}` needs at least one input"
            )));
        }
        let mut resolved: Vec<&Series> = Vec::with_capacity(inputs.len());
        for input in inputs {
            let series = self
                .entries
                .get(*input)
                .ok_or_else(|| DashboardError::MissingInput {
                    name: name.to_owned(),
                    input: (*input).to_owned(),
                })?;
            if series.shape() != SeriesShape::Indexed {
                return Err(DashboardError::InvalidData(format!(
                    "derived series `{name}` input `{input}` is not axis-indexed"
                )));
            }
            // Later inputs may be shorter than the first but must follow its axis.
            if let Some(first) = resolved.first() {
                if !first.labels().labels().starts_with(series.labels().labels()) {
                    return Err(DashboardError::InvalidData(format!(
                        "derived series `{name}` input `{input}` is not on the axis of `{}`",
                        inputs[0]
                    )));
                }
            }
            trace!(series = name, input = *input, len = series.len(), "resolved derivation input");
            resolved.push(series);
        }
        Ok(resolved)
    }
}
