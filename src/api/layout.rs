use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::SeriesRegistry;
use crate::error::{DashboardError, DashboardResult};
use crate::render::{ChartHandle, ChartSurface, HtmlPageOptions, HtmlPageSurface, RenderTarget};

use super::{PanelConfig, PanelRenderer, ThemeProfile};

pub const DASHBOARD_LAYOUT_JSON_SCHEMA_V1: u32 = 1;

/// One panel placed on a named render target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub target: RenderTarget,
    pub config: PanelConfig,
}

impl PanelSpec {
    #[must_use]
    pub fn new(target: RenderTarget, config: PanelConfig) -> Self {
        Self { target, config }
    }
}

/// Ordered panels making up one dashboard page, plus the shared theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    #[serde(default)]
    pub theme: ThemeProfile,
    pub panels: Vec<PanelSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayoutJsonContractV1 {
    pub schema_version: u32,
    pub layout: DashboardLayout,
}

impl DashboardLayout {
    #[must_use]
    pub fn new(title: impl Into<String>, theme: ThemeProfile) -> Self {
        Self {
            title: title.into(),
            theme,
            panels: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_panel(mut self, target: RenderTarget, config: PanelConfig) -> Self {
        self.panels.push(PanelSpec::new(target, config));
        self
    }

    pub fn to_json_contract_v1_pretty(&self) -> DashboardResult<String> {
        let payload = DashboardLayoutJsonContractV1 {
            schema_version: DASHBOARD_LAYOUT_JSON_SCHEMA_V1,
            layout: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DashboardError::InvalidData(format!("failed to serialize layout contract v1: {e}"))
        })
    }

    /// Accepts either a bare layout or a versioned contract envelope.
    ///
    /// Input without a `schema_version` key is reported as a bare layout.
    pub fn from_json_compat_str(input: &str) -> DashboardResult<Self> {
        let bare_error = match serde_json::from_str::<DashboardLayout>(input) {
            Ok(layout) => {
                layout.theme.validate()?;
                return Ok(layout);
            }
            Err(e) => e,
        };
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidData(format!("failed to parse layout json payload: {e}"))
        })?;
        if value.get("schema_version").is_none() {
            return Err(DashboardError::InvalidData(format!(
                "failed to parse layout json: {bare_error}"
            )));
        }
        let payload: DashboardLayoutJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            DashboardError::InvalidData(format!("failed to parse layout contract v1: {e}"))
        })?;
        if payload.schema_version != DASHBOARD_LAYOUT_JSON_SCHEMA_V1 {
            return Err(DashboardError::InvalidData(format!(
                "unsupported layout schema version: {}",
                payload.schema_version
            )));
        }
        payload.layout.theme.validate()?;
        Ok(payload.layout)
    }

    /// Renders every panel onto `surface` and hands the surface back.
    pub fn render<S: ChartSurface>(&self, registry: &SeriesRegistry, surface: S) -> DashboardResult<S> {
        let mut renderer = PanelRenderer::new(registry, self.theme.clone(), surface)?;
        render_layout(&mut renderer, self)?;
        Ok(renderer.into_surface())
    }

    /// Renders the layout into one self-contained HTML page.
    pub fn render_html_page(
        &self,
        registry: &SeriesRegistry,
        options: HtmlPageOptions,
    ) -> DashboardResult<String> {
        self.render(registry, HtmlPageSurface::new(options))?
            .finish(&self.title)
    }
}

/// Renders `layout`'s panels in order, stopping at the first failure.
pub fn render_layout<S: ChartSurface>(
    renderer: &mut PanelRenderer<'_, S>,
    layout: &DashboardLayout,
) -> DashboardResult<Vec<ChartHandle>> {
    let handles = layout
        .panels
        .iter()
        .map(|panel| renderer.render_panel(&panel.target, &panel.config))
        .collect::<DashboardResult<Vec<_>>>()?;
    debug!(title = %layout.title, panels = handles.len(), "render layout");
    Ok(handles)
}
