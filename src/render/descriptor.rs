use serde::{Deserialize, Serialize};

use crate::core::FormatRule;
use crate::error::{DashboardError, DashboardResult};
use crate::render::{Color, GuideLine, LinearGradient, StrokeStyle};

/// Chart family understood by the charting collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    Line,
    Bar,
    Doughnut,
    Radar,
}

/// How one dataset is drawn. A bar chart may mix in a line dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkType {
    Line,
    Bar,
    Slice,
    Polygon,
}

/// Value axis identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisId {
    /// Left amount axis (`y`).
    Primary,
    /// Right percentage axis (`y1`).
    Secondary,
    /// Radar radial axis (`r`).
    Radial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisPosition {
    Left,
    Right,
    Radial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
}

/// Area/bar/slice paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    #[default]
    None,
    Solid(Color),
    /// One color per data point, same order as the values.
    PerPoint(Vec<Color>),
    /// Top-to-bottom fade, resolved by the surface into [`Paint::Gradient`].
    VerticalGradient { top: Color, bottom: Color },
    Gradient(LinearGradient),
}

impl Paint {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    fn validate(&self, value_count: usize) -> DashboardResult<()> {
        match self {
            Self::None => Ok(()),
            Self::Solid(color) => color.validate(),
            Self::PerPoint(colors) => {
                if colors.len() != value_count {
                    return Err(DashboardError::InvalidData(format!(
                        "per-point paint has {} colors for {value_count} values",
                        colors.len()
                    )));
                }
                colors.iter().try_for_each(|color| color.validate())
            }
            Self::VerticalGradient { top, bottom } => {
                top.validate()?;
                bottom.validate()
            }
            Self::Gradient(gradient) => {
                gradient.start.validate()?;
                gradient.end.validate()
            }
        }
    }
}

/// Visual attributes of one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStyle {
    pub stroke: Option<Color>,
    pub stroke_width_px: f64,
    pub stroke_style: StrokeStyle,
    pub fill: Paint,
    /// Whether the area under a line is filled.
    pub fill_area: bool,
    /// Curve smoothing in `0..=1`.
    pub tension: f64,
    pub point_radius_px: f64,
    pub point_fill: Paint,
    pub bar_corner_radius_px: f64,
    /// Fraction of the category slot a bar occupies.
    pub bar_percentage: Option<f64>,
    pub hover_offset_px: Option<f64>,
}

impl Default for DatasetStyle {
    fn default() -> Self {
        Self {
            stroke: None,
            stroke_width_px: 0.0,
            stroke_style: StrokeStyle::Solid,
            fill: Paint::None,
            fill_area: false,
            tension: 0.0,
            point_radius_px: 0.0,
            point_fill: Paint::None,
            bar_corner_radius_px: 0.0,
            bar_percentage: None,
            hover_offset_px: None,
        }
    }
}

/// One dataset of a chart, with its hover text already formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    pub label: String,
    pub mark: MarkType,
    pub values: Vec<f64>,
    /// Tooltip text per value, same order as `values`.
    pub tooltip_labels: Vec<String>,
    pub axis: Option<AxisId>,
    pub style: DatasetStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleDescriptor {
    pub id: AxisId,
    pub position: AxisPosition,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub suggested_max: Option<f64>,
    pub tick_format: FormatRule,
    pub show_ticks: bool,
    pub grid_color: Option<Color>,
    /// `false` keeps a secondary axis from drawing gridlines over the plot.
    pub grid_on_chart_area: bool,
    pub point_label_color: Option<Color>,
    pub point_label_font_size_px: Option<f64>,
}

impl ScaleDescriptor {
    #[must_use]
    pub fn new(id: AxisId, position: AxisPosition, tick_format: FormatRule) -> Self {
        Self {
            id,
            position,
            min: None,
            max: None,
            suggested_max: None,
            tick_format,
            show_ticks: true,
            grid_color: None,
            grid_on_chart_area: true,
            point_label_color: None,
            point_label_font_size_px: None,
        }
    }

    fn validate(&self) -> DashboardResult<()> {
        for bound in [self.min, self.max, self.suggested_max].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(DashboardError::InvalidData(
                    "axis bounds must be finite".to_owned(),
                ));
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min >= max {
                return Err(DashboardError::InvalidData(format!(
                    "axis min {min} must be below max {max}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendDescriptor {
    pub display: bool,
    pub position: LegendPosition,
    pub use_point_style: bool,
    pub point_style_width_px: f64,
    pub padding_px: f64,
    pub font_size_px: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipDescriptor {
    pub background: Color,
    pub title_color: Color,
    pub body_color: Color,
    pub border_color: Color,
    pub border_width_px: f64,
    pub padding_px: f64,
    pub corner_radius_px: f64,
    pub display_colors: bool,
}

/// Chart-wide text and border defaults taken from the theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDefaults {
    pub text_color: Color,
    pub border_color: Color,
    pub font_family: String,
}

/// Fully styled, backend-agnostic description of one chart.
///
/// Built by the panel builders and handed to a [`crate::render::ChartSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub title: Option<String>,
    pub chart_type: ChartType,
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetDescriptor>,
    pub scales: Vec<ScaleDescriptor>,
    pub guide_lines: Vec<GuideLine>,
    pub legend: LegendDescriptor,
    pub tooltip: TooltipDescriptor,
    pub defaults: ChartDefaults,
    /// Inner radius of doughnut charts, percent of the outer radius.
    pub cutout_percent: Option<f64>,
}

impl ChartDescriptor {
    #[must_use]
    pub fn scale(&self, id: AxisId) -> Option<&ScaleDescriptor> {
        self.scales.iter().find(|scale| scale.id == id)
    }

    #[must_use]
    pub fn dataset(&self, label: &str) -> Option<&DatasetDescriptor> {
        self.datasets.iter().find(|dataset| dataset.label == label)
    }

    /// Checks internal consistency before the descriptor reaches a surface.
    pub fn validate(&self) -> DashboardResult<()> {
        if self.datasets.is_empty() {
            return Err(DashboardError::InvalidData(
                "chart descriptor must have at least one dataset".to_owned(),
            ));
        }
        for dataset in &self.datasets {
            let count = dataset.values.len();
            if count != self.labels.len() {
                return Err(DashboardError::InvalidData(format!(
                    "dataset `{}` has {count} values for {} labels",
                    dataset.label,
                    self.labels.len()
                )));
            }
            if dataset.tooltip_labels.len() != count {
                return Err(DashboardError::InvalidData(format!(
                    "dataset `{}` tooltip labels do not match its values",
                    dataset.label
                )));
            }
            if let Some(axis) = dataset.axis.filter(|axis| self.scale(*axis).is_none()) {
                return Err(DashboardError::InvalidData(format!(
                    "dataset `{}` references undeclared axis {axis:?}",
                    dataset.label
                )));
            }
            if let Some(stroke) = dataset.style.stroke {
                stroke.validate()?;
            }
            dataset.style.stroke_style.validate()?;
            dataset.style.fill.validate(count)?;
            dataset.style.point_fill.validate(count)?;
        }
        for scale in &self.scales {
            scale.validate()?;
        }
        for guide in &self.guide_lines {
            guide.validate()?;
        }
        Ok(())
    }
}
