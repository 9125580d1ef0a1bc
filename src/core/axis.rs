use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Shared categorical axis, e.g. the month codes of a reporting period.
///
/// Cloning is cheap; series built from the same axis share one label buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryAxis {
    labels: Arc<[String]>,
}

impl CategoryAxis {
    #[must_use]
    pub fn new<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|entry| entry == label)
    }

    #[must_use]
    pub fn has_unique_labels(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.labels.len());
        self.labels.iter().all(|label| seen.insert(label.as_str()))
    }
}

impl<L: Into<String>> FromIterator<L> for CategoryAxis {
    fn from_iter<T: IntoIterator<Item = L>>(iter: T) -> Self {
        Self::new(iter)
    }
}
