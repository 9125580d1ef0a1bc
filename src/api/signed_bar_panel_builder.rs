use crate::core::SeriesShape;
use crate::error::DashboardResult;
use crate::render::{
    AxisId, AxisPosition, ChartDescriptor, ChartType, DatasetDescriptor, DatasetStyle, MarkType,
    Paint,
};

use super::panel_descriptor_builder::{
    PanelBuildContext, ResolvedSeries, chart_frame, require_exact_series, require_fraction,
    require_shape, shared_labels, tooltip_labels, value_scale,
};
use super::SignedBarStyle;

const KIND: &str = "signed-bar";

/// Bars colored by sign, with a reference line at the zero guide value.
pub fn build_signed_bar_panel(
    ctx: &PanelBuildContext<'_>,
    series: &[ResolvedSeries<'_>],
    style: &SignedBarStyle,
) -> DashboardResult<ChartDescriptor> {
    require_exact_series(KIND, series, 1)?;
    require_shape(KIND, series, SeriesShape::Indexed)?;
    require_fraction("signed-bar bar percentage", style.bar_percentage)?;

    let resolved = &series[0];
    let values = resolved.values();
    let colors = values
        .iter()
        .map(|value| {
            if *value >= 0.0 {
                style.positive_color
            } else {
                style.negative_color
            }
        })
        .collect();

    let mut descriptor = chart_frame(ctx, ChartType::Bar, shared_labels(KIND, series)?);
    descriptor.scales.push(value_scale(
        AxisId::Primary,
        AxisPosition::Left,
        &style.value_axis,
        ctx.theme,
    ));
    descriptor.datasets.push(DatasetDescriptor {
        label: resolved.label().to_owned(),
        mark: MarkType::Bar,
        values: values.to_vec(),
        tooltip_labels: tooltip_labels(resolved.label(), values, style.tooltip_format),
        axis: Some(AxisId::Primary),
        style: DatasetStyle {
            fill: Paint::PerPoint(colors),
            bar_corner_radius_px: style.bar_corner_radius_px,
            bar_percentage: Some(style.bar_percentage),
            ..DatasetStyle::default()
        },
    });
    descriptor.guide_lines.push(style.zero_line.clone());

    Ok(descriptor)
}
