use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::SeriesRegistry;
use crate::error::{DashboardError, DashboardResult};
use crate::render::{ChartDescriptor, ChartHandle, ChartSurface, RenderTarget};

use super::panel_descriptor_builder::{ResolvedSeries, build_panel_descriptor, resolve_gradients};
use super::{PanelConfig, ThemeProfile};

#[derive(Debug)]
struct BoundChart {
    handle: ChartHandle,
    descriptor: ChartDescriptor,
}

/// Turns panel configs into charts on a [`ChartSurface`].
///
/// The registry is only read; each render target holds at most one chart,
/// tracked here by its handle.
pub struct PanelRenderer<'r, S: ChartSurface> {
    registry: &'r SeriesRegistry,
    theme: ThemeProfile,
    surface: S,
    bindings: IndexMap<RenderTarget, BoundChart>,
}

impl<'r, S: ChartSurface> PanelRenderer<'r, S> {
    pub fn new(registry: &'r SeriesRegistry, theme: ThemeProfile, surface: S) -> DashboardResult<Self> {
        theme.validate()?;
        if !registry.is_frozen() {
            warn!(
                series = registry.len(),
                "rendering against a registry that is not frozen"
            );
        }
        Ok(Self {
            registry,
            theme,
            surface,
            bindings: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeProfile {
        &self.theme
    }

    #[must_use]
    pub fn registry(&self) -> &'r SeriesRegistry {
        self.registry
    }

    /// Builds and attaches one panel on `target`.
    ///
    /// Series are resolved and the descriptor is built before the target is
    /// touched, so a failed render leaves the previously bound chart intact.
    /// A bound target is replaced only when `config.allow_replace` is set. If
    /// the surface then fails to construct the replacement, the previous chart
    /// is constructed again under a new handle.
    pub fn render_panel(
        &mut self,
        target: &RenderTarget,
        config: &PanelConfig,
    ) -> DashboardResult<ChartHandle> {
        let resolved = config
            .series
            .iter()
            .map(|reference| {
                self.registry
                    .get(&reference.name)
                    .map(|series| ResolvedSeries::new(reference, series))
            })
            .collect::<DashboardResult<Vec<_>>>()?;

        let mut descriptor = build_panel_descriptor(config, &resolved, &self.theme)?;
        let surface = &self.surface;
        resolve_gradients(&mut descriptor, |top, bottom| {
            surface.linear_gradient(target, top, bottom)
        });

        let replaced = match self.bindings.get(target).map(|bound| bound.handle) {
            Some(previous) => {
                if !config.allow_replace {
                    return Err(DashboardError::TargetAlreadyBound {
                        target: target.to_string(),
                    });
                }
                warn!(
                    target = %target,
                    previous = previous.id(),
                    "replacing chart bound to target"
                );
                self.surface.detach(previous)?;
                self.bindings.shift_remove(target)
            }
            None => None,
        };

        let handle = match self.surface.construct(target, &descriptor) {
            Ok(handle) => handle,
            Err(err) => {
                if let Some(previous) = replaced {
                    self.restore(target, previous);
                }
                return Err(err);
            }
        };
        debug!(
            target = %target,
            kind = config.kind.name(),
            datasets = descriptor.datasets.len(),
            handle = handle.id(),
            "render panel"
        );
        self.bindings
            .insert(target.clone(), BoundChart { handle, descriptor });
        Ok(handle)
    }

    fn restore(&mut self, target: &RenderTarget, previous: BoundChart) {
        match self.surface.construct(target, &previous.descriptor) {
            Ok(handle) => {
                warn!(
                    target = %target,
                    handle = handle.id(),
                    "restored previous chart after failed replacement"
                );
                self.bindings.insert(
                    target.clone(),
                    BoundChart {
                        handle,
                        descriptor: previous.descriptor,
                    },
                );
            }
            Err(err) => warn!(target = %target, error = %err, "previous chart could not be restored"),
        }
    }

    #[must_use]
    pub fn handle_for(&self, target: &RenderTarget) -> Option<ChartHandle> {
        self.bindings.get(target).map(|bound| bound.handle)
    }

    /// Bound targets, most recently replaced last.
    pub fn bound_targets(&self) -> impl Iterator<Item = &RenderTarget> + '_ {
        self.bindings.keys()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
