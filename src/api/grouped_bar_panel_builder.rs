use crate::error::{DashboardError, DashboardResult};
use crate::render::{
    AxisId, AxisPosition, ChartDescriptor, ChartType, DatasetDescriptor, DatasetStyle, MarkType,
    Paint,
};

use super::GroupedBarStyle;
use super::panel_descriptor_builder::{
    PanelBuildContext, ResolvedSeries, chart_frame, require_fraction, require_some_series,
    shared_labels, tooltip_labels, value_scale,
};

const KIND: &str = "grouped-bar";

/// One bar dataset per metric, grouped by the labels the metrics share.
///
/// Metrics are usually categorical (one value per entity); a single indexed
/// series gives a plain bar chart over its axis.
pub fn build_grouped_bar_panel(
    ctx: &PanelBuildContext<'_>,
    series: &[ResolvedSeries<'_>],
    style: &GroupedBarStyle,
) -> DashboardResult<ChartDescriptor> {
    require_some_series(KIND, series)?;
    let shape = series[0].series.shape();
    if let Some(other) = series.iter().find(|metric| metric.series.shape() != shape) {
        return Err(DashboardError::InvalidData(format!(
            "grouped-bar series `{}` mixes {:?} with {shape:?}",
            other.reference.name,
            other.series.shape()
        )));
    }
    require_fraction("grouped-bar bar alpha", style.bar_alpha)?;
    if let Some(percentage) = style.bar_percentage {
        require_fraction("grouped-bar bar percentage", percentage)?;
    }

    let mut descriptor = chart_frame(ctx, ChartType::Bar, shared_labels(KIND, series)?);
    descriptor.scales.push(value_scale(
        AxisId::Primary,
        AxisPosition::Left,
        &style.value_axis,
        ctx.theme,
    ));
    for (index, metric) in series.iter().enumerate() {
        let color = metric.color(ctx.theme, index).with_alpha(style.bar_alpha);
        descriptor.datasets.push(DatasetDescriptor {
            label: metric.label().to_owned(),
            mark: MarkType::Bar,
            values: metric.values().to_vec(),
            tooltip_labels: tooltip_labels(metric.label(), metric.values(), style.tooltip_format),
            axis: Some(AxisId::Primary),
            style: DatasetStyle {
                fill: Paint::Solid(color),
                bar_corner_radius_px: style.bar_corner_radius_px,
                bar_percentage: style.bar_percentage,
                ..DatasetStyle::default()
            },
        });
    }

    Ok(descriptor)
}
