//! chart-dashboard: declarative panel assembly for static reporting dashboards.
//!
//! Named series live in a [`core::SeriesRegistry`]; panels reference them by
//! name and are turned into themed, tooltip-annotated chart descriptors that
//! a [`render::ChartSurface`] draws.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod report;
pub mod telemetry;

pub use api::{DashboardLayout, PanelConfig, PanelRenderer, ThemeProfile};
pub use core::{Derivation, FormatRule, Series, SeriesRegistry};
pub use error::{DashboardError, DashboardResult};
