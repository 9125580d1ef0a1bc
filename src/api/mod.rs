//! Panel assembly: configuration types, the per-kind descriptor builders and
//! the renderer that binds built charts to render targets.

mod bands;
mod composition_panel_builder;
mod dual_axis_panel_builder;
mod grouped_bar_panel_builder;
mod layout;
mod panel_config;
mod panel_descriptor_builder;
mod radar_panel_builder;
mod renderer;
mod signed_bar_panel_builder;
mod theme;
mod threshold_panel_builder;
mod trend_panel_builder;

pub use bands::{BandComparison, ThresholdBand, ThresholdBands};
pub use composition_panel_builder::build_composition_panel;
pub use dual_axis_panel_builder::build_dual_axis_panel;
pub use grouped_bar_panel_builder::build_grouped_bar_panel;
pub use layout::{
    DASHBOARD_LAYOUT_JSON_SCHEMA_V1, DashboardLayout, DashboardLayoutJsonContractV1, PanelSpec,
    render_layout,
};
pub use panel_config::{
    AreaFill, CompositionStyle, DualAxisStyle, GroupedBarStyle, LegendConfig, PanelConfig,
    PanelKind, RadarStyle, SeriesRef, SeriesRole, SignedBarStyle, ThresholdMark, ThresholdStyle,
    TrendStyle, ValueAxisConfig,
};
pub use panel_descriptor_builder::{PanelBuildContext, ResolvedSeries, build_panel_descriptor};
pub use radar_panel_builder::build_radar_panel;
pub use renderer::PanelRenderer;
pub use signed_bar_panel_builder::build_signed_bar_panel;
pub use theme::{LegendStyle, ThemeProfile, TooltipBoxStyle, palette};
pub use threshold_panel_builder::build_threshold_panel;
pub use trend_panel_builder::build_trend_panel;
