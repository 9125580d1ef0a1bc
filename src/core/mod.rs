//! Series data model: shared axes, base and derived series, and the registry
//! that owns them for the lifetime of a dashboard.

pub mod axis;
pub mod derive;
pub mod format;
pub mod primitives;
pub mod registry;
pub mod series;

pub use axis::CategoryAxis;
pub use derive::Derivation;
pub use format::{FormatRule, format_axis_tick, format_tooltip_value, tooltip_label};
pub use registry::SeriesRegistry;
pub use series::{Series, SeriesOrigin, SeriesShape};
