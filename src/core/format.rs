//! Presentation-only value formatting shared by tooltips and axis ticks.
//!
//! Rules are data, not closures, so every panel formats through the same
//! functions and stored series values are never touched.

use serde::{Deserialize, Serialize};

use crate::core::primitives::{to_fixed, to_plain};

/// Magnitude at which amounts switch to the 万 (ten-thousand) unit.
pub const WAN_THRESHOLD: f64 = 10_000.0;
pub const WAN_SUFFIX: &str = "万";
pub const CURRENCY_PREFIX: &str = "¥";

const TOOLTIP_WAN_PRECISION: u32 = 2;
const TICK_WAN_PRECISION: u32 = 0;

/// How a value is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormatRule {
    /// Amounts: `¥585.32万` from 10,000 up, the plain number below.
    #[default]
    Amount,
    /// Always scaled to 万 with the currency prefix.
    Currency,
    /// Percentage-role values: `41.6%`.
    Percent { precision: u32 },
    /// The number as-is.
    Plain,
}

impl FormatRule {
    #[must_use]
    pub const fn percent() -> Self {
        Self::Percent { precision: 1 }
    }
}

/// Formats a value for a tooltip line.
#[must_use]
pub fn format_tooltip_value(value: f64, rule: FormatRule) -> String {
    match rule {
        FormatRule::Amount if value.abs() >= WAN_THRESHOLD => wan_currency(value),
        FormatRule::Amount | FormatRule::Plain => to_plain(value),
        FormatRule::Currency => wan_currency(value),
        FormatRule::Percent { precision } => format!("{}%", to_fixed(value, precision)),
    }
}

/// Formats a value for an axis tick. Same rule as tooltips, coarser precision.
#[must_use]
pub fn format_axis_tick(value: f64, rule: FormatRule) -> String {
    match rule {
        FormatRule::Amount | FormatRule::Currency if value.abs() >= WAN_THRESHOLD => format!(
            "{}{WAN_SUFFIX}",
            to_fixed(value / WAN_THRESHOLD, TICK_WAN_PRECISION)
        ),
        FormatRule::Amount | FormatRule::Currency | FormatRule::Plain => to_plain(value),
        FormatRule::Percent { .. } => format!("{}%", to_plain(value)),
    }
}

/// `"{label}: {value}"` as shown in a tooltip body.
#[must_use]
pub fn tooltip_label(label: &str, value: f64, rule: FormatRule) -> String {
    format!("{label}: {}", format_tooltip_value(value, rule))
}

fn wan_currency(value: f64) -> String {
    format!(
        "{CURRENCY_PREFIX}{}{WAN_SUFFIX}",
        to_fixed(value / WAN_THRESHOLD, TOOLTIP_WAN_PRECISION)
    )
}
