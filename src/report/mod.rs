//! Built-in year-end investor report: its dataset and fourteen-panel layout.

pub mod data;
mod layout;

pub use data::populate_registry;
pub use layout::{REPORT_TITLE, layout};
