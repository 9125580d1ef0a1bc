use crate::core::SeriesShape;
use crate::error::{DashboardError, DashboardResult};
use crate::render::{
    AxisId, AxisPosition, ChartDescriptor, ChartType, DatasetDescriptor, DatasetStyle, MarkType,
    Paint, ScaleDescriptor,
};

use super::RadarStyle;
use super::panel_descriptor_builder::{
    PanelBuildContext, ResolvedSeries, chart_frame, require_fraction, require_shape,
    require_some_series, shared_labels, tooltip_labels,
};

const KIND: &str = "radar";

/// One translucent polygon per entity over shared dimensions.
///
/// The first entity is filled more strongly than the rest.
pub fn build_radar_panel(
    ctx: &PanelBuildContext<'_>,
    series: &[ResolvedSeries<'_>],
    style: &RadarStyle,
) -> DashboardResult<ChartDescriptor> {
    require_some_series(KIND, series)?;
    require_shape(KIND, series, SeriesShape::Categorical)?;
    require_fraction("radar lead fill alpha", style.lead_fill_alpha)?;
    require_fraction("radar fill alpha", style.fill_alpha)?;
    if !(style.min.is_finite() && style.max.is_finite() && style.min < style.max) {
        return Err(DashboardError::InvalidData(format!(
            "radar bounds {}..{} are not an increasing range",
            style.min, style.max
        )));
    }

    let mut descriptor = chart_frame(ctx, ChartType::Radar, shared_labels(KIND, series)?);

    let mut radial = ScaleDescriptor::new(AxisId::Radial, AxisPosition::Radial, style.tooltip_format);
    radial.min = Some(style.min);
    radial.max = Some(style.max);
    radial.show_ticks = false;
    radial.grid_color = Some(style.grid_color.unwrap_or(ctx.theme.grid_color));
    radial.point_label_color = Some(ctx.theme.text_color);
    radial.point_label_font_size_px = Some(style.point_label_font_size_px);
    descriptor.scales.push(radial);

    for (index, entity) in series.iter().enumerate() {
        let color = entity.color(ctx.theme, index);
        let fill_alpha = if index == 0 {
            style.lead_fill_alpha
        } else {
            style.fill_alpha
        };
        descriptor.datasets.push(DatasetDescriptor {
            label: entity.label().to_owned(),
            mark: MarkType::Polygon,
            values: entity.values().to_vec(),
            tooltip_labels: tooltip_labels(entity.label(), entity.values(), style.tooltip_format),
            axis: Some(AxisId::Radial),
            style: DatasetStyle {
                stroke: Some(color),
                stroke_width_px: style.line_width_px,
                fill: Paint::Solid(color.with_alpha(fill_alpha)),
                fill_area: true,
                point_radius_px: style.point_radius_px,
                point_fill: Paint::Solid(color),
                ..DatasetStyle::default()
            },
        });
    }

    Ok(descriptor)
}
