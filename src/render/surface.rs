use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};
use crate::render::{ChartDescriptor, Color, LinearGradient};

/// Stable external key of a drawable surface, e.g. a canvas element id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RenderTarget(String);

impl RenderTarget {
    pub fn new(key: impl Into<String>) -> DashboardResult<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(DashboardError::InvalidData(
                "render target key must not be empty".to_owned(),
            ));
        }
        Ok(Self(key))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RenderTarget {
    type Error = DashboardError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        Self::new(key)
    }
}

impl From<RenderTarget> for String {
    fn from(target: RenderTarget) -> Self {
        target.0
    }
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of one chart instance attached to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartHandle(u64);

impl ChartHandle {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// The external charting collaborator.
///
/// Implementations receive fully styled descriptors, so drawing code never
/// sees series lookups or formatting rules.
pub trait ChartSurface {
    /// Creates a chart on `target` and returns its handle.
    fn construct(
        &mut self,
        target: &RenderTarget,
        descriptor: &ChartDescriptor,
    ) -> DashboardResult<ChartHandle>;

    /// Removes a previously constructed chart.
    fn detach(&mut self, handle: ChartHandle) -> DashboardResult<()>;

    /// Vertical gradient between two stops over the target's drawable height.
    fn linear_gradient(&self, target: &RenderTarget, top: Color, bottom: Color) -> LinearGradient;
}
