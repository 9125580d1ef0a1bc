use indexmap::IndexMap;

use crate::error::{DashboardError, DashboardResult};
use crate::render::{ChartDescriptor, ChartHandle, ChartSurface, Color, LinearGradient, RenderTarget};

/// Drawable height assumed for targets without an explicit size.
pub const DEFAULT_TARGET_HEIGHT_PX: f64 = 260.0;

/// A chart currently attached to a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedChart {
    pub handle: ChartHandle,
    pub target: RenderTarget,
    pub descriptor: ChartDescriptor,
}

/// Headless surface used by tests and dry runs.
///
/// It validates every descriptor it receives and keeps the attached charts
/// in memory so callers can inspect exactly what would have been drawn.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    attached: IndexMap<ChartHandle, AttachedChart>,
    detached: Vec<ChartHandle>,
    target_heights: IndexMap<RenderTarget, f64>,
    next_id: u64,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the drawable height used for gradients on `target`.
    #[must_use]
    pub fn with_target_height(mut self, target: RenderTarget, height_px: f64) -> Self {
        self.target_heights.insert(target, height_px);
        self
    }

    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    #[must_use]
    pub fn chart(&self, handle: ChartHandle) -> Option<&AttachedChart> {
        self.attached.get(&handle)
    }

    /// The chart currently attached to `target`, if any.
    #[must_use]
    pub fn chart_on(&self, target: &RenderTarget) -> Option<&AttachedChart> {
        self.attached.values().find(|chart| &chart.target == target)
    }

    pub fn charts(&self) -> impl Iterator<Item = &AttachedChart> + '_ {
        self.attached.values()
    }

    #[must_use]
    pub fn detached(&self) -> &[ChartHandle] {
        &self.detached
    }
}

impl ChartSurface for RecordingSurface {
    fn construct(
        &mut self,
        target: &RenderTarget,
        descriptor: &ChartDescriptor,
    ) -> DashboardResult<ChartHandle> {
        descriptor.validate()?;
        self.next_id += 1;
        let handle = ChartHandle::new(self.next_id);
        self.attached.insert(
            handle,
            AttachedChart {
                handle,
                target: target.clone(),
                descriptor: descriptor.clone(),
            },
        );
        Ok(handle)
    }

    fn detach(&mut self, handle: ChartHandle) -> DashboardResult<()> {
        if self.attached.shift_remove(&handle).is_none() {
            return Err(DashboardError::InvalidData(format!(
                "chart handle {} is not attached",
                handle.id()
            )));
        }
        self.detached.push(handle);
        Ok(())
    }

    fn linear_gradient(&self, target: &RenderTarget, top: Color, bottom: Color) -> LinearGradient {
        let height = self
            .target_heights
            .get(target)
            .copied()
            .unwrap_or(DEFAULT_TARGET_HEIGHT_PX);
        LinearGradient::vertical(height, top, bottom)
    }
}
