use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};
use crate::render::{
    ChartDefaults, Color, LegendDescriptor, LegendPosition, TooltipDescriptor,
};

/// Named colors of the default investor-report theme.
pub mod palette {
    use crate::render::Color;

    pub const INDIGO: Color = Color::hex(0x6366f1);
    pub const CYAN: Color = Color::hex(0x06b6d4);
    pub const PURPLE: Color = Color::hex(0xa855f7);
    pub const EMERALD: Color = Color::hex(0x10b981);
    pub const AMBER: Color = Color::hex(0xf59e0b);
    pub const ROSE: Color = Color::hex(0xf43f5e);
    pub const SLATE: Color = Color::hex(0x94a3b8);
    pub const WHITE: Color = Color::hex(0xffffff);
}

/// Styling of the hover tooltip box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipBoxStyle {
    pub background: Color,
    pub title_color: Color,
    pub body_color: Color,
    pub border_color: Color,
    pub border_width_px: f64,
    pub padding_px: f64,
    pub corner_radius_px: f64,
    pub display_colors: bool,
}

impl Default for TooltipBoxStyle {
    fn default() -> Self {
        Self {
            background: Color::rgba(15, 23, 42, 0.95),
            title_color: Color::hex(0xf1f5f9),
            body_color: Color::hex(0xcbd5e1),
            border_color: palette::INDIGO.with_alpha(0.3),
            border_width_px: 1.0,
            padding_px: 12.0,
            corner_radius_px: 8.0,
            display_colors: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendStyle {
    pub use_point_style: bool,
    pub point_style_width_px: f64,
    pub padding_px: f64,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            use_point_style: true,
            point_style_width_px: 10.0,
            padding_px: 14.0,
        }
    }
}

/// Shared defaults applied to every panel.
///
/// Passed by reference into each panel build and never mutated afterwards;
/// per-panel overrides live on the panel's own style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeProfile {
    /// Colors assigned to datasets and slices by position.
    pub palette: Vec<Color>,
    pub text_color: Color,
    pub border_color: Color,
    pub grid_color: Color,
    pub font_family: String,
    pub tooltip: TooltipBoxStyle,
    pub legend: LegendStyle,
}

impl Default for ThemeProfile {
    fn default() -> Self {
        Self {
            palette: vec![
                palette::INDIGO,
                palette::CYAN,
                palette::PURPLE,
                palette::EMERALD,
                palette::AMBER,
                palette::ROSE,
            ],
            text_color: palette::SLATE,
            border_color: palette::INDIGO.with_alpha(0.08),
            grid_color: palette::INDIGO.with_alpha(0.06),
            font_family: "'Inter', sans-serif".to_owned(),
            tooltip: TooltipBoxStyle::default(),
            legend: LegendStyle::default(),
        }
    }
}

impl ThemeProfile {
    /// Replaces the positional palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    #[must_use]
    pub fn with_grid_color(mut self, color: Color) -> Self {
        self.grid_color = color;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipBoxStyle) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Palette color for dataset/slice `index`, wrapping around.
    #[must_use]
    pub fn palette_color(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            return self.text_color;
        }
        self.palette[index % self.palette.len()]
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self.palette.is_empty() {
            return Err(DashboardError::InvalidData(
                "theme palette must not be empty".to_owned(),
            ));
        }
        for color in self
            .palette
            .iter()
            .chain([&self.text_color, &self.border_color, &self.grid_color])
        {
            color.validate()?;
        }
        for (name, value) in [
            ("tooltip border width", self.tooltip.border_width_px),
            ("tooltip padding", self.tooltip.padding_px),
            ("tooltip corner radius", self.tooltip.corner_radius_px),
            ("legend padding", self.legend.padding_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DashboardError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn chart_defaults(&self) -> ChartDefaults {
        ChartDefaults {
            text_color: self.text_color,
            border_color: self.border_color,
            font_family: self.font_family.clone(),
        }
    }

    pub(crate) fn tooltip_descriptor(&self) -> TooltipDescriptor {
        let tooltip = &self.tooltip;
        TooltipDescriptor {
            background: tooltip.background,
            title_color: tooltip.title_color,
            body_color: tooltip.body_color,
            border_color: tooltip.border_color,
            border_width_px: tooltip.border_width_px,
            padding_px: tooltip.padding_px,
            corner_radius_px: tooltip.corner_radius_px,
            display_colors: tooltip.display_colors,
        }
    }

    pub(crate) fn legend_descriptor(
        &self,
        position: LegendPosition,
        font_size_px: Option<f64>,
    ) -> LegendDescriptor {
        LegendDescriptor {
            display: true,
            position,
            use_point_style: self.legend.use_point_style,
            point_style_width_px: self.legend.point_style_width_px,
            padding_px: self.legend.padding_px,
            font_size_px,
        }
    }
}
