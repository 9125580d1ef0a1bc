use tracing::trace;

use crate::core::{FormatRule, Series, SeriesShape, tooltip_label};
use crate::error::{DashboardError, DashboardResult};
use crate::render::{
    AxisId, AxisPosition, ChartDescriptor, ChartType, Color, LinearGradient, Paint,
    ScaleDescriptor,
};

use super::composition_panel_builder::build_composition_panel;
use super::dual_axis_panel_builder::build_dual_axis_panel;
use super::grouped_bar_panel_builder::build_grouped_bar_panel;
use super::radar_panel_builder::build_radar_panel;
use super::signed_bar_panel_builder::build_signed_bar_panel;
use super::threshold_panel_builder::build_threshold_panel;
use super::trend_panel_builder::build_trend_panel;
use super::{AreaFill, LegendConfig, PanelConfig, PanelKind, SeriesRef, ThemeProfile, ValueAxisConfig};

/// A panel's series reference paired with the registry entry it names.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSeries<'a> {
    pub reference: &'a SeriesRef,
    pub series: &'a Series,
}

impl<'a> ResolvedSeries<'a> {
    #[must_use]
    pub fn new(reference: &'a SeriesRef, series: &'a Series) -> Self {
        Self { reference, series }
    }

    #[must_use]
    pub fn label(&self) -> &'a str {
        self.reference.display_label()
    }

    /// Explicit color, else the theme palette entry for `position`.
    #[must_use]
    pub fn color(&self, theme: &ThemeProfile, position: usize) -> Color {
        self.reference
            .color
            .unwrap_or_else(|| theme.palette_color(position))
    }

    #[must_use]
    pub fn values(&self) -> &'a [f64] {
        self.series.values()
    }
}

/// Panel-wide inputs shared by every kind-specific builder.
#[derive(Debug, Clone, Copy)]
pub struct PanelBuildContext<'a> {
    pub title: Option<&'a str>,
    pub legend: LegendConfig,
    pub theme: &'a ThemeProfile,
}

/// Builds the descriptor for `config` from already-resolved series.
///
/// Pure: the same inputs always produce the same descriptor, and nothing is
/// drawn. Gradients stay unresolved until a surface sizes them.
pub fn build_panel_descriptor(
    config: &PanelConfig,
    series: &[ResolvedSeries<'_>],
    theme: &ThemeProfile,
) -> DashboardResult<ChartDescriptor> {
    let ctx = PanelBuildContext {
        title: config.title.as_deref(),
        legend: config.resolved_legend(),
        theme,
    };
    let descriptor = match &config.kind {
        PanelKind::Trend(style) => build_trend_panel(&ctx, series, style),
        PanelKind::DualAxis(style) => build_dual_axis_panel(&ctx, series, style),
        PanelKind::SignedBar(style) => build_signed_bar_panel(&ctx, series, style),
        PanelKind::Threshold(style) => build_threshold_panel(&ctx, series, style),
        PanelKind::Composition(style) => build_composition_panel(&ctx, series, style),
        PanelKind::GroupedBar(style) => build_grouped_bar_panel(&ctx, series, style),
        PanelKind::Radar(style) => build_radar_panel(&ctx, series, style),
    }?;
    for dataset in &descriptor.datasets {
        trace!(
            kind = config.kind.name(),
            dataset = %dataset.label,
            points = dataset.values.len(),
            "panel dataset built"
        );
    }
    descriptor.validate()?;
    Ok(descriptor)
}

/// Empty descriptor carrying the theme defaults and the panel legend.
pub(super) fn chart_frame(
    ctx: &PanelBuildContext<'_>,
    chart_type: ChartType,
    labels: Vec<String>,
) -> ChartDescriptor {
    let mut legend = ctx
        .theme
        .legend_descriptor(ctx.legend.position, ctx.legend.font_size_px);
    legend.display = ctx.legend.display;
    ChartDescriptor {
        title: ctx.title.map(str::to_owned),
        chart_type,
        labels,
        datasets: Vec::new(),
        scales: Vec::new(),
        guide_lines: Vec::new(),
        legend,
        tooltip: ctx.theme.tooltip_descriptor(),
        defaults: ctx.theme.chart_defaults(),
        cutout_percent: None,
    }
}

pub(super) fn require_exact_series(
    kind: &str,
    series: &[ResolvedSeries<'_>],
    expected: usize,
) -> DashboardResult<()> {
    if series.len() != expected {
        return Err(DashboardError::InvalidData(format!(
            "{kind} panel needs exactly {expected} series, got {}",
            series.len()
        )));
    }
    Ok(())
}

pub(super) fn require_some_series(kind: &str, series: &[ResolvedSeries<'_>]) -> DashboardResult<()> {
    if series.is_empty() {
        return Err(DashboardError::InvalidData(format!(
            "{kind} panel needs at least one series"
        )));
    }
    Ok(())
}

pub(super) fn require_shape(
    kind: &str,
    series: &[ResolvedSeries<'_>],
    shape: SeriesShape,
) -> DashboardResult<()> {
    if let Some(resolved) = series.iter().find(|resolved| resolved.series.shape() != shape) {
        return Err(DashboardError::InvalidData(format!(
            "{kind} panel needs {shape:?} series; `{}` is {:?}",
            resolved.reference.name,
            resolved.series.shape()
        )));
    }
    Ok(())
}

/// Labels common to every series; they must agree label for label.
pub(super) fn shared_labels(
    kind: &str,
    series: &[ResolvedSeries<'_>],
) -> DashboardResult<Vec<String>> {
    let Some(first) = series.first() else {
        return Ok(Vec::new());
    };
    if let Some(other) = series
        .iter()
        .skip(1)
        .find(|resolved| resolved.series.labels() != first.series.labels())
    {
        return Err(DashboardError::InvalidData(format!(
            "{kind} panel series `{}` and `{}` do not share the same labels",
            first.reference.name, other.reference.name
        )));
    }
    Ok(first.series.labels().labels().to_vec())
}

/// `"{label}: {value}"` for every value, in order.
pub(super) fn tooltip_labels(label: &str, values: &[f64], rule: FormatRule) -> Vec<String> {
    values
        .iter()
        .map(|value| tooltip_label(label, *value, rule))
        .collect()
}

pub(super) fn value_scale(
    id: AxisId,
    position: AxisPosition,
    axis: &ValueAxisConfig,
    theme: &ThemeProfile,
) -> ScaleDescriptor {
    let mut scale = ScaleDescriptor::new(id, position, axis.tick_format);
    scale.min = axis.min;
    scale.max = axis.max;
    scale.suggested_max = axis.suggested_max;
    scale.grid_color = Some(theme.grid_color);
    scale
}

/// Paint for the area under a line, and whether the area is filled at all.
pub(super) fn area_paint(fill: Option<AreaFill>, color: Color) -> (Paint, bool) {
    match fill {
        None => (Paint::None, false),
        Some(AreaFill::Solid { alpha }) => (Paint::Solid(color.with_alpha(alpha)), true),
        Some(AreaFill::Gradient {
            top_alpha,
            bottom_alpha,
        }) => (
            Paint::VerticalGradient {
                top: color.with_alpha(top_alpha),
                bottom: color.with_alpha(bottom_alpha),
            },
            true,
        ),
    }
}

/// Replaces unresolved vertical gradients with the surface-sized form.
pub(crate) fn resolve_gradients<F>(descriptor: &mut ChartDescriptor, mut resolve: F)
where
    F: FnMut(Color, Color) -> LinearGradient,
{
    for dataset in &mut descriptor.datasets {
        if let Paint::VerticalGradient { top, bottom } = dataset.style.fill {
            dataset.style.fill = Paint::Gradient(resolve(top, bottom));
        }
    }
}

pub(super) fn require_non_negative(name: &str, value: f64) -> DashboardResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DashboardError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

pub(super) fn require_fraction(name: &str, value: f64) -> DashboardResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(DashboardError::InvalidData(format!(
            "{name} must be within 0..=1"
        )));
    }
    Ok(())
}
