use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use crate::error::{DashboardError, DashboardResult};

/// sRGB color with straight alpha in `0..=1`.
///
/// Serialized as a CSS color string (`#6366f1` or `rgba(99,102,241,0.08)`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);

    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from `0xRRGGBB`.
    #[must_use]
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    pub fn validate(self) -> DashboardResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(DashboardError::InvalidData(
                "color alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "rgba({},{},{},{})",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

impl FromStr for Color {
    type Err = DashboardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let raw = input.trim();
        let invalid = || DashboardError::InvalidData(format!("unsupported css color `{raw}`"));

        if raw.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }
        if let Some(hex) = raw.strip_prefix('#') {
            let expanded: String = match hex.len() {
                3 => hex.chars().flat_map(|c| [c, c]).collect(),
                6 => hex.to_owned(),
                _ => return Err(invalid()),
            };
            let rgb = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
            return Ok(Self::hex(rgb));
        }

        let (body, has_alpha) = if let Some(body) = raw.strip_prefix("rgba(") {
            (body, true)
        } else if let Some(body) = raw.strip_prefix("rgb(") {
            (body, false)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected_parts = if has_alpha { 4 } else { 3 };
        if parts.len() != expected_parts {
            return Err(invalid());
        }
        let channel = |part: &str| part.parse::<u8>().map_err(|_| invalid());
        let alpha = if has_alpha {
            parts[3].parse::<f64>().map_err(|_| invalid())?
        } else {
            1.0
        };
        let color = Self::rgba(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            alpha,
        );
        color.validate()?;
        Ok(color)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Stroke pattern for lines and guide lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StrokeStyle {
    #[default]
    Solid,
    /// Alternating on/off lengths in pixels.
    Dashed(SmallVec<[f64; 2]>),
}

impl StrokeStyle {
    #[must_use]
    pub fn dashed(on_px: f64, off_px: f64) -> Self {
        Self::Dashed(SmallVec::from_buf([on_px, off_px]))
    }

    #[must_use]
    pub fn dash_pattern(&self) -> &[f64] {
        match self {
            Self::Solid => &[],
            Self::Dashed(pattern) => pattern.as_slice(),
        }
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self
            .dash_pattern()
            .iter()
            .any(|len| !len.is_finite() || *len < 0.0)
        {
            return Err(DashboardError::InvalidData(
                "dash lengths must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Horizontal reference line drawn across the plot at a fixed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub value: f64,
    pub color: Color,
    pub width_px: f64,
    #[serde(default)]
    pub stroke: StrokeStyle,
}

impl GuideLine {
    pub fn validate(&self) -> DashboardResult<()> {
        if !self.value.is_finite() {
            return Err(DashboardError::InvalidData(
                "guide line value must be finite".to_owned(),
            ));
        }
        if !self.width_px.is_finite() || self.width_px <= 0.0 {
            return Err(DashboardError::InvalidData(
                "guide line width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()?;
        self.stroke.validate()
    }
}

/// Two-stop vertical gradient resolved against a target's drawable height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub start: Color,
    pub end: Color,
}

impl LinearGradient {
    /// Top-to-bottom gradient spanning `height_px`.
    #[must_use]
    pub fn vertical(height_px: f64, top: Color, bottom: Color) -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            x1: 0.0,
            y1: height_px,
            start: top,
            end: bottom,
        }
    }
}
