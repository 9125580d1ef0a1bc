//! Backend side of the dashboard: chart descriptors and the surfaces that
//! consume them.

mod descriptor;
mod html_page;
mod primitives;
mod recording_surface;
mod surface;

pub use descriptor::{
    AxisId, AxisPosition, ChartDefaults, ChartDescriptor, ChartType, DatasetDescriptor,
    DatasetStyle, LegendDescriptor, LegendPosition, MarkType, Paint, ScaleDescriptor,
    TooltipDescriptor,
};
pub use html_page::{HtmlPageOptions, HtmlPageSurface, chart_js_config};
pub use primitives::{Color, GuideLine, LinearGradient, StrokeStyle};
pub use recording_surface::{AttachedChart, DEFAULT_TARGET_HEIGHT_PX, RecordingSurface};
pub use surface::{ChartHandle, ChartSurface, RenderTarget};
