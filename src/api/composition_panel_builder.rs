use crate::core::{SeriesShape, tooltip_label};
use crate::error::{DashboardError, DashboardResult};
use crate::render::{ChartDescriptor, ChartType, DatasetDescriptor, DatasetStyle, MarkType, Paint};

use super::CompositionStyle;
use super::panel_descriptor_builder::{
    PanelBuildContext, ResolvedSeries, chart_frame, require_exact_series, require_fraction,
    require_non_negative, require_shape,
};

const KIND: &str = "composition";

/// Doughnut over one categorical series, one slice per category.
pub fn build_composition_panel(
    ctx: &PanelBuildContext<'_>,
    series: &[ResolvedSeries<'_>],
    style: &CompositionStyle,
) -> DashboardResult<ChartDescriptor> {
    require_exact_series(KIND, series, 1)?;
    require_shape(KIND, series, SeriesShape::Categorical)?;
    require_fraction("composition slice alpha", style.slice_alpha)?;
    require_non_negative("composition hover offset", style.hover_offset_px)?;
    if !(0.0..100.0).contains(&style.cutout_percent) {
        return Err(DashboardError::InvalidData(
            "composition cutout must be within 0..100 percent".to_owned(),
        ));
    }

    let resolved = &series[0];
    let values = resolved.values();
    if values.iter().any(|value| *value < 0.0) {
        return Err(DashboardError::InvalidData(format!(
            "composition series `{}` has negative slices",
            resolved.reference.name
        )));
    }

    let colors = match &style.colors {
        Some(colors) if colors.len() != values.len() => {
            return Err(DashboardError::InvalidData(format!(
                "composition has {} colors for {} slices",
                colors.len(),
                values.len()
            )));
        }
        Some(colors) => colors.clone(),
        None => (0..values.len())
            .map(|index| ctx.theme.palette_color(index).with_alpha(style.slice_alpha))
            .collect(),
    };

    let tooltip_labels = resolved
        .series
        .iter()
        .map(|(category, value)| tooltip_label(category, value, style.tooltip_format))
        .collect();

    let mut descriptor = chart_frame(
        ctx,
        ChartType::Doughnut,
        resolved.series.labels().labels().to_vec(),
    );
    descriptor.cutout_percent = Some(style.cutout_percent);
    descriptor.datasets.push(DatasetDescriptor {
        label: resolved.label().to_owned(),
        mark: MarkType::Slice,
        values: values.to_vec(),
        tooltip_labels,
        axis: None,
        style: DatasetStyle {
            stroke_width_px: style.stroke_width_px,
            fill: Paint::PerPoint(colors),
            hover_offset_px: Some(style.hover_offset_px),
            ..DatasetStyle::default()
        },
    });

    Ok(descriptor)
}
