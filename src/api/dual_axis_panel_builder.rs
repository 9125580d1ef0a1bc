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
use super::DualAxisStyle;

const KIND: &str = "dual-axis";

/// Bars for the first series on the left amount axis, a line for the second
/// on the right percentage axis.
pub fn build_dual_axis_panel(
    ctx: &PanelBuildContext<'_>,
    series: &[ResolvedSeries<'_>],
    style: &DualAxisStyle,
) -> DashboardResult<ChartDescriptor> {
    require_exact_series(KIND, series, 2)?;
    require_shape(KIND, series, SeriesShape::Indexed)?;
    require_fraction("dual-axis bar alpha", style.bar_alpha)?;
    require_fraction("dual-axis bar percentage", style.bar_percentage)?;
    require_fraction("dual-axis line tension", style.line_tension)?;

    let labels = shared_labels(KIND, series)?;
    let (bars, line) = (&series[0], &series[1]);
    let bar_color = bars.color(ctx.theme, 0);
    let line_color = line.color(ctx.theme, 1);

    let mut descriptor = chart_frame(ctx, ChartType::Bar, labels);
    descriptor.datasets.push(DatasetDescriptor {
        label: bars.label().to_owned(),
        mark: MarkType::Bar,
        values: bars.values().to_vec(),
        tooltip_labels: tooltip_labels(bars.label(), bars.values(), style.primary_tooltip_format),
        axis: Some(AxisId::Primary),
        style: DatasetStyle {
            fill: Paint::Solid(bar_color.with_alpha(style.bar_alpha)),
            bar_corner_radius_px: style.bar_corner_radius_px,
            bar_percentage: Some(style.bar_percentage),
            ..DatasetStyle::default()
        },
    });
    descriptor.datasets.push(DatasetDescriptor {
        label: line.label().to_owned(),
        mark: MarkType::Line,
        values: line.values().to_vec(),
        tooltip_labels: tooltip_labels(
            line.label(),
            line.values(),
            style.secondary_tooltip_format,
        ),
        axis: Some(AxisId::Secondary),
        style: DatasetStyle {
            stroke: Some(line_color),
            stroke_width_px: style.line_width_px,
            tension: style.line_tension,
            point_radius_px: style.line_point_radius_px,
            point_fill: Paint::Solid(line_color),
            ..DatasetStyle::default()
        },
    });

    descriptor.scales.push(value_scale(
        AxisId::Primary,
        AxisPosition::Left,
        &style.primary_axis,
        ctx.theme,
    ));
    let mut secondary = value_scale(
        AxisId::Secondary,
        AxisPosition::Right,
        &style.secondary_axis,
        ctx.theme,
    );
    secondary.grid_on_chart_area = false;
    descriptor.scales.push(secondary);

    Ok(descriptor)
}
