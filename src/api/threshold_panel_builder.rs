use crate::core::SeriesShape;
use crate::error::DashboardResult;
use crate::render::{
    AxisId, AxisPosition, ChartDescriptor, ChartType, DatasetDescriptor, DatasetStyle, MarkType,
    Paint,
};

use super::panel_descriptor_builder::{
    PanelBuildContext, ResolvedSeries, area_paint, chart_frame, require_exact_series,
    require_fraction, require_shape, shared_labels, tooltip_labels, value_scale,
};
use super::{ThresholdMark, ThresholdStyle};

const KIND: &str = "threshold";

/// A single series whose point or bar colors come from threshold bands.
///
/// Bands are resolved once here; the descriptor carries concrete colors.
pub fn build_threshold_panel(
    ctx: &PanelBuildContext<'_>,
    series: &[ResolvedSeries<'_>],
    style: &ThresholdStyle,
) -> DashboardResult<ChartDescriptor> {
    require_exact_series(KIND, series, 1)?;
    require_shape(KIND, series, SeriesShape::Indexed)?;
    require_fraction("threshold tension", style.tension)?;
    if let Some(percentage) = style.bar_percentage {
        require_fraction("threshold bar percentage", percentage)?;
    }

    let resolved = &series[0];
    let values = resolved.values();
    let colors = style.bands.resolve_all(values);
    let labels = shared_labels(KIND, series)?;

    let (chart_type, mark, dataset_style) = match style.mark {
        ThresholdMark::Line => {
            let color = resolved.color(ctx.theme, 0);
            let (fill, fill_area) = area_paint(resolved.reference.fill, color);
            (
                ChartType::Line,
                MarkType::Line,
                DatasetStyle {
                    stroke: Some(color),
                    stroke_width_px: style.line_width_px,
                    fill,
                    fill_area,
                    tension: style.tension,
                    point_radius_px: style.point_radius_px,
                    point_fill: Paint::PerPoint(colors),
                    ..DatasetStyle::default()
                },
            )
        }
        ThresholdMark::Bar => (
            ChartType::Bar,
            MarkType::Bar,
            DatasetStyle {
                fill: Paint::PerPoint(colors),
                bar_corner_radius_px: style.bar_corner_radius_px,
                bar_percentage: style.bar_percentage,
                ..DatasetStyle::default()
            },
        ),
    };

    let mut descriptor = chart_frame(ctx, chart_type, labels);
    descriptor.scales.push(value_scale(
        AxisId::Primary,
        AxisPosition::Left,
        &style.value_axis,
        ctx.theme,
    ));
    descriptor.datasets.push(DatasetDescriptor {
        label: resolved.label().to_owned(),
        mark,
        values: values.to_vec(),
        tooltip_labels: tooltip_labels(resolved.label(), values, style.tooltip_format),
        axis: Some(AxisId::Primary),
        style: dataset_style,
    });

    Ok(descriptor)
}
