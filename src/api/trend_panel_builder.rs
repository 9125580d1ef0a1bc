use crate::core::SeriesShape;
use crate::error::DashboardResult;
use crate::render::{
    AxisId, AxisPosition, ChartDescriptor, ChartType, DatasetDescriptor, DatasetStyle, MarkType,
    Paint, StrokeStyle,
};

use super::panel_descriptor_builder::{
    PanelBuildContext, ResolvedSeries, area_paint, chart_frame, require_fraction,
    require_non_negative, require_shape, require_some_series, shared_labels, tooltip_labels,
    value_scale,
};
use super::{SeriesRole, TrendStyle};

const KIND: &str = "trend";

/// One line per series over their shared axis.
///
/// `Secondary` series are drawn with the secondary stroke, width and point
/// radius. Point colors follow `point_bands` when set, else the line color.
pub fn build_trend_panel(
    ctx: &PanelBuildContext<'_>,
    series: &[ResolvedSeries<'_>],
    style: &TrendStyle,
) -> DashboardResult<ChartDescriptor> {
    require_some_series(KIND, series)?;
    require_shape(KIND, series, SeriesShape::Indexed)?;
    require_fraction("trend tension", style.tension)?;
    require_non_negative("trend line width", style.line_width_px)?;
    require_non_negative("trend point radius", style.point_radius_px)?;

    let labels = shared_labels(KIND, series)?;
    let mut descriptor = chart_frame(ctx, ChartType::Line, labels);
    descriptor.scales.push(value_scale(
        AxisId::Primary,
        AxisPosition::Left,
        &style.value_axis,
        ctx.theme,
    ));

    for (index, resolved) in series.iter().enumerate() {
        let color = resolved.color(ctx.theme, index);
        let values = resolved.values();
        let secondary = resolved.reference.role == SeriesRole::Secondary;
        let (fill, fill_area) = area_paint(resolved.reference.fill, color);
        let point_fill = match &style.point_bands {
            Some(bands) => Paint::PerPoint(bands.resolve_all(values)),
            None => Paint::Solid(color),
        };
        let (stroke_width_px, stroke_style, point_radius_px) = if secondary {
            (
                style.secondary_line_width_px,
                style.secondary_stroke.clone(),
                style.secondary_point_radius_px,
            )
        } else {
            (style.line_width_px, StrokeStyle::Solid, style.point_radius_px)
        };

        descriptor.datasets.push(DatasetDescriptor {
            label: resolved.label().to_owned(),
            mark: MarkType::Line,
            values: values.to_vec(),
            tooltip_labels: tooltip_labels(resolved.label(), values, style.tooltip_format),
            axis: Some(AxisId::Primary),
            style: DatasetStyle {
                stroke: Some(color),
                stroke_width_px,
                stroke_style,
                fill,
                fill_area,
                tension: style.tension,
                point_radius_px,
                point_fill,
                ..DatasetStyle::default()
            },
        });
    }

    Ok(descriptor)
}
