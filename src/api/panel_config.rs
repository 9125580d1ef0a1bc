use serde::{Deserialize, Serialize};

use crate::core::FormatRule;
use crate::render::{Color, GuideLine, LegendPosition, StrokeStyle};

use super::bands::ThresholdBands;
use super::theme::palette;

/// How a referenced series participates in its panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeriesRole {
    #[default]
    Primary,
    /// Drawn de-emphasized: dashed and thinner in trend panels.
    Secondary,
}

/// Area under a line, tinted from the dataset color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AreaFill {
    Solid { alpha: f64 },
    /// Vertical fade from `top_alpha` at the top of the plot to `bottom_alpha`.
    Gradient { top_alpha: f64, bottom_alpha: f64 },
}

/// A series reference by registry name plus its presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRef {
    pub name: String,
    /// Dataset label; the registry name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub role: SeriesRole,
    /// Dataset color; the theme palette by position when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<AreaFill>,
}

impl SeriesRef {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            role: SeriesRole::Primary,
            color: None,
            fill: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: SeriesRole) -> Self {
        self.role = role;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: AreaFill) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// Bounds and tick formatting of a value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValueAxisConfig {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub suggested_max: Option<f64>,
    pub tick_format: FormatRule,
}

impl ValueAxisConfig {
    #[must_use]
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_suggested_max(mut self, suggested_max: f64) -> Self {
        self.suggested_max = Some(suggested_max);
        self
    }

    #[must_use]
    pub fn with_tick_format(mut self, tick_format: FormatRule) -> Self {
        self.tick_format = tick_format;
        self
    }
}

/// Legend overrides; each kind has its own default placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub display: bool,
    pub position: LegendPosition,
    pub font_size_px: Option<f64>,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            display: true,
            position: LegendPosition::Top,
            font_size_px: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendStyle {
    pub line_width_px: f64,
    pub tension: f64,
    pub point_radius_px: f64,
    pub secondary_line_width_px: f64,
    pub secondary_point_radius_px: f64,
    pub secondary_stroke: StrokeStyle,
    /// Per-point coloring of line markers by value.
    pub point_bands: Option<ThresholdBands<Color>>,
    pub tooltip_format: FormatRule,
    pub value_axis: ValueAxisConfig,
}

impl Default for TrendStyle {
    fn default() -> Self {
        Self {
            line_width_px: 2.5,
            tension: 0.4,
            point_radius_px: 3.0,
            secondary_line_width_px: 2.0,
            secondary_point_radius_px: 2.0,
            secondary_stroke: StrokeStyle::dashed(6.0, 3.0),
            point_bands: None,
            tooltip_format: FormatRule::Amount,
            value_axis: ValueAxisConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DualAxisStyle {
    pub bar_alpha: f64,
    pub bar_corner_radius_px: f64,
    pub bar_percentage: f64,
    pub line_width_px: f64,
    pub line_tension: f64,
    pub line_point_radius_px: f64,
    pub primary_axis: ValueAxisConfig,
    pub secondary_axis: ValueAxisConfig,
    pub primary_tooltip_format: FormatRule,
    pub secondary_tooltip_format: FormatRule,
}

impl Default for DualAxisStyle {
    fn default() -> Self {
        Self {
            bar_alpha: 0.6,
            bar_corner_radius_px: 4.0,
            bar_percentage: 0.6,
            line_width_px: 2.5,
            line_tension: 0.3,
            line_point_radius_px: 4.0,
            primary_axis: ValueAxisConfig::default(),
            secondary_axis: ValueAxisConfig::default()
                .with_bounds(0.0, 100.0)
                .with_tick_format(FormatRule::percent()),
            primary_tooltip_format: FormatRule::Currency,
            secondary_tooltip_format: FormatRule::percent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignedBarStyle {
    /// Fill for `value >= 0`.
    pub positive_color: Color,
    pub negative_color: Color,
    pub bar_corner_radius_px: f64,
    pub bar_percentage: f64,
    pub zero_line: GuideLine,
    pub tooltip_format: FormatRule,
    pub value_axis: ValueAxisConfig,
}

impl Default for SignedBarStyle {
    fn default() -> Self {
        Self {
            positive_color: palette::ROSE.with_alpha(0.6),
            negative_color: palette::EMERALD.with_alpha(0.7),
            bar_corner_radius_px: 4.0,
            bar_percentage: 0.7,
            zero_line: GuideLine {
                value: 0.0,
                color: palette::WHITE.with_alpha(0.3),
                width_px: 1.0,
                stroke: StrokeStyle::dashed(4.0, 4.0),
            },
            tooltip_format: FormatRule::Amount,
            value_axis: ValueAxisConfig::default(),
        }
    }
}

/// Mark used by a threshold-colored panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdMark {
    /// Points colored by band, line in the series color.
    #[default]
    Line,
    /// Each bar filled by band.
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdStyle {
    pub bands: ThresholdBands<Color>,
    #[serde(default)]
    pub mark: ThresholdMark,
    #[serde(default = "default_threshold_line_width")]
    pub line_width_px: f64,
    #[serde(default = "default_threshold_tension")]
    pub tension: f64,
    #[serde(default = "default_threshold_point_radius")]
    pub point_radius_px: f64,
    #[serde(default = "default_threshold_bar_radius")]
    pub bar_corner_radius_px: f64,
    #[serde(default)]
    pub bar_percentage: Option<f64>,
    #[serde(default = "FormatRule::percent")]
    pub tooltip_format: FormatRule,
    #[serde(default = "default_threshold_value_axis")]
    pub value_axis: ValueAxisConfig,
}

impl ThresholdStyle {
    #[must_use]
    pub fn new(bands: ThresholdBands<Color>, mark: ThresholdMark) -> Self {
        Self {
            bands,
            mark,
            line_width_px: default_threshold_line_width(),
            tension: default_threshold_tension(),
            point_radius_px: default_threshold_point_radius(),
            bar_corner_radius_px: default_threshold_bar_radius(),
            bar_percentage: None,
            tooltip_format: FormatRule::percent(),
            value_axis: default_threshold_value_axis(),
        }
    }

    #[must_use]
    pub fn with_tooltip_format(mut self, tooltip_format: FormatRule) -> Self {
        self.tooltip_format = tooltip_format;
        self
    }

    #[must_use]
    pub fn with_value_axis(mut self, value_axis: ValueAxisConfig) -> Self {
        self.value_axis = value_axis;
        self
    }

    #[must_use]
    pub fn with_bar_shape(mut self, corner_radius_px: f64, bar_percentage: f64) -> Self {
        self.bar_corner_radius_px = corner_radius_px;
        self.bar_percentage = Some(bar_percentage);
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, point_radius_px: f64) -> Self {
        self.point_radius_px = point_radius_px;
        self
    }
}

fn default_threshold_line_width() -> f64 {
    2.5
}

fn default_threshold_tension() -> f64 {
    0.4
}

fn default_threshold_point_radius() -> f64 {
    4.0
}

fn default_threshold_bar_radius() -> f64 {
    4.0
}

fn default_threshold_value_axis() -> ValueAxisConfig {
    ValueAxisConfig::default().with_tick_format(FormatRule::percent())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionStyle {
    /// Slice colors in category order; the theme palette when absent.
    pub colors: Option<Vec<Color>>,
    /// Alpha applied to palette colors. Explicit colors are used as given.
    pub slice_alpha: f64,
    pub cutout_percent: f64,
    pub hover_offset_px: f64,
    pub stroke_width_px: f64,
    pub tooltip_format: FormatRule,
}

impl Default for CompositionStyle {
    fn default() -> Self {
        Self {
            colors: None,
            slice_alpha: 0.8,
            cutout_percent: 60.0,
            hover_offset_px: 12.0,
            stroke_width_px: 0.0,
            tooltip_format: FormatRule::Amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupedBarStyle {
    pub bar_alpha: f64,
    pub bar_corner_radius_px: f64,
    pub bar_percentage: Option<f64>,
    pub tooltip_format: FormatRule,
    pub value_axis: ValueAxisConfig,
}

impl Default for GroupedBarStyle {
    fn default() -> Self {
        Self {
            bar_alpha: 0.7,
            bar_corner_radius_px: 4.0,
            bar_percentage: None,
            tooltip_format: FormatRule::Amount,
            value_axis: ValueAxisConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarStyle {
    pub min: f64,
    pub max: f64,
    /// Fill alpha of the first entity's polygon.
    pub lead_fill_alpha: f64,
    pub fill_alpha: f64,
    pub line_width_px: f64,
    pub point_radius_px: f64,
    /// Radial grid; a faint palette tint when absent.
    pub grid_color: Option<Color>,
    pub point_label_font_size_px: f64,
    pub tooltip_format: FormatRule,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            lead_fill_alpha: 0.15,
            fill_alpha: 0.1,
            line_width_px: 2.0,
            point_radius_px: 3.0,
            grid_color: Some(palette::INDIGO.with_alpha(0.15)),
            point_label_font_size_px: 11.0,
            tooltip_format: FormatRule::Plain,
        }
    }
}

/// Visual intent of a panel, with its kind-specific style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelKind {
    /// Lines over a shared category axis.
    Trend(TrendStyle),
    /// Bars on an amount axis plus a line on a percentage axis.
    DualAxis(DualAxisStyle),
    /// Bars colored by sign with a zero guide line.
    SignedBar(SignedBarStyle),
    /// One series whose points are colored by threshold bands.
    Threshold(ThresholdStyle),
    /// Doughnut over one categorical series.
    Composition(CompositionStyle),
    /// Categorical metrics compared entity by entity.
    GroupedBar(GroupedBarStyle),
    /// One polygon per entity over shared dimensions.
    Radar(RadarStyle),
}

impl PanelKind {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Trend(_) => "trend",
            Self::DualAxis(_) => "dual_axis",
            Self::SignedBar(_) => "signed_bar",
            Self::Threshold(_) => "threshold",
            Self::Composition(_) => "composition",
            Self::GroupedBar(_) => "grouped_bar",
            Self::Radar(_) => "radar",
        }
    }

    pub(crate) fn default_legend(&self) -> LegendConfig {
        match self {
            Self::Composition(_) => LegendConfig {
                display: true,
                position: LegendPosition::Bottom,
                font_size_px: Some(11.0),
            },
            _ => LegendConfig::default(),
        }
    }
}

/// Everything needed to draw one panel: series by name plus visual intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub kind: PanelKind,
    pub series: Vec<SeriesRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendConfig>,
    /// Detach and replace a chart already bound to the target.
    #[serde(default)]
    pub allow_replace: bool,
}

impl PanelConfig {
    #[must_use]
    pub fn new(kind: PanelKind) -> Self {
        Self {
            title: None,
            kind,
            series: Vec::new(),
            legend: None,
            allow_replace: false,
        }
    }

    #[must_use]
    pub fn trend(style: TrendStyle) -> Self {
        Self::new(PanelKind::Trend(style))
    }

    #[must_use]
    pub fn dual_axis(style: DualAxisStyle) -> Self {
        Self::new(PanelKind::DualAxis(style))
    }

    #[must_use]
    pub fn signed_bar(style: SignedBarStyle) -> Self {
        Self::new(PanelKind::SignedBar(style))
    }

    #[must_use]
    pub fn threshold(style: ThresholdStyle) -> Self {
        Self::new(PanelKind::Threshold(style))
    }

    #[must_use]
    pub fn composition(style: CompositionStyle) -> Self {
        Self::new(PanelKind::Composition(style))
    }

    #[must_use]
    pub fn grouped_bar(style: GroupedBarStyle) -> Self {
        Self::new(PanelKind::GroupedBar(style))
    }

    #[must_use]
    pub fn radar(style: RadarStyle) -> Self {
        Self::new(PanelKind::Radar(style))
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesRef) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendConfig) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn with_allow_replace(mut self, allow_replace: bool) -> Self {
        self.allow_replace = allow_replace;
        self
    }

    /// Legend for this panel: the override, or the kind's default.
    #[must_use]
    pub fn resolved_legend(&self) -> LegendConfig {
        self.legend.unwrap_or_else(|| self.kind.default_legend())
    }
}
