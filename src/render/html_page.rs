use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::error::{DashboardError, DashboardResult};
use crate::render::{
    AxisId, AxisPosition, ChartDescriptor, ChartHandle, ChartSurface, ChartType, Color,
    DatasetDescriptor, LegendPosition, LinearGradient, MarkType, Paint, RenderTarget,
    ScaleDescriptor,
};

/// Page-level settings of the exported HTML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlPageOptions {
    pub chart_js_src: String,
    pub annotation_plugin_src: String,
    /// Height of each chart box; gradients span this height.
    pub chart_height_px: f64,
    pub lang: String,
}

impl Default for HtmlPageOptions {
    fn default() -> Self {
        Self {
            chart_js_src: "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"
                .to_owned(),
            annotation_plugin_src:
                "https://cdn.jsdelivr.net/npm/chartjs-plugin-annotation@3.0.1/dist/chartjs-plugin-annotation.min.js"
                    .to_owned(),
            chart_height_px: 260.0,
            lang: "zh-CN".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PageChart {
    target: RenderTarget,
    title: Option<String>,
    config: Value,
}

/// Surface that collects Chart.js configurations into one self-contained page.
///
/// Tooltip text comes from the labels precomputed in each descriptor; only
/// tick labels are formatted in the browser, because the library picks tick
/// values at draw time.
#[derive(Debug, Default)]
pub struct HtmlPageSurface {
    options: HtmlPageOptions,
    charts: IndexMap<ChartHandle, PageChart>,
    next_id: u64,
}

impl HtmlPageSurface {
    #[must_use]
    pub fn new(options: HtmlPageOptions) -> Self {
        Self {
            options,
            charts: IndexMap::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub fn options(&self) -> &HtmlPageOptions {
        &self.options
    }

    #[must_use]
    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    /// Chart.js configuration emitted for `target`.
    #[must_use]
    pub fn config_for(&self, target: &RenderTarget) -> Option<&Value> {
        self.charts
            .values()
            .find(|chart| &chart.target == target)
            .map(|chart| &chart.config)
    }

    /// Renders the complete HTML document.
    pub fn finish(&self, title: &str) -> DashboardResult<String> {
        let panels: Vec<Value> = self
            .charts
            .values()
            .map(|chart| json!({ "target": chart.target.as_str(), "config": chart.config }))
            .collect();
        let panels_json = serde_json::to_string(&panels).map_err(|e| {
            DashboardError::InvalidData(format!("failed to serialize chart configs: {e}"))
        })?;
        // A literal `</` would close the inline script early.
        let panels_json = panels_json.replace("</", "<\\/");

        let mut cards = String::new();
        for chart in self.charts.values() {
            let heading = chart
                .title
                .as_deref()
                .map(|title| format!("<h2>{}</h2>", escape_html(title)))
                .unwrap_or_default();
            cards.push_str(&format!(
                "<article class=\"card\">{heading}<div class=\"chart-box\" style=\"height:{}px\"><canvas id=\"{}\"></canvas></div></article>\n",
                self.options.chart_height_px,
                escape_html(chart.target.as_str()),
            ));
        }

        let title = escape_html(title);
        debug!(charts = self.charts.len(), "finish html page");
        Ok(format!(
            "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{title}</title>\n<script src=\"{chart_js}\"></script>\n<script src=\"{annotation}\"></script>\n<style>\n{PAGE_CSS}</style>\n</head>\n<body>\n<main class=\"dashboard\">\n<h1>{title}</h1>\n<section class=\"grid\">\n{cards}</section>\n</main>\n<script>\nconst PANELS = {panels_json};\n{BOOTSTRAP_JS}</script>\n</body>\n</html>\n",
            lang = escape_html(&self.options.lang),
            chart_js = escape_html(&self.options.chart_js_src),
            annotation = escape_html(&self.options.annotation_plugin_src),
        ))
    }
}

impl ChartSurface for HtmlPageSurface {
    fn construct(
        &mut self,
        target: &RenderTarget,
        descriptor: &ChartDescriptor,
    ) -> DashboardResult<ChartHandle> {
        descriptor.validate()?;
        if self.charts.values().any(|chart| &chart.target == target) {
            return Err(DashboardError::InvalidData(format!(
                "canvas `{target}` already holds a chart on this page"
            )));
        }
        self.next_id += 1;
        let handle = ChartHandle::new(self.next_id);
        self.charts.insert(
            handle,
            PageChart {
                target: target.clone(),
                title: descriptor.title.clone(),
                config: chart_js_config(descriptor, self.options.chart_height_px),
            },
        );
        Ok(handle)
    }

    fn detach(&mut self, handle: ChartHandle) -> DashboardResult<()> {
        self.charts
            .shift_remove(&handle)
            .map(|_| ())
            .ok_or_else(|| {
                DashboardError::InvalidData(format!("chart handle {} is not on this page", handle.id()))
            })
    }

    fn linear_gradient(&self, _target: &RenderTarget, top: Color, bottom: Color) -> LinearGradient {
        LinearGradient::vertical(self.options.chart_height_px, top, bottom)
    }
}

/// Translates a descriptor into a Chart.js v4 configuration object.
///
/// Unresolved vertical gradients are spread over `gradient_height_px`.
#[must_use]
pub fn chart_js_config(descriptor: &ChartDescriptor, gradient_height_px: f64) -> Value {
    let datasets: Vec<Value> = descriptor
        .datasets
        .iter()
        .map(|dataset| dataset_config(descriptor.chart_type, dataset, gradient_height_px))
        .collect();

    let mut scales = Map::new();
    for scale in &descriptor.scales {
        scales.insert(axis_key(scale.id).to_owned(), scale_config(scale));
    }

    let mut annotations = Map::new();
    for (index, guide) in descriptor.guide_lines.iter().enumerate() {
        annotations.insert(
            format!("guide{index}"),
            json!({
                "type": "line",
                "yMin": guide.value,
                "yMax": guide.value,
                "borderColor": guide.color,
                "borderWidth": guide.width_px,
                "borderDash": guide.stroke.dash_pattern(),
            }),
        );
    }

    let legend = &descriptor.legend;
    let mut legend_labels = json!({
        "usePointStyle": legend.use_point_style,
        "pointStyleWidth": legend.point_style_width_px,
        "padding": legend.padding_px,
    });
    if let Some(size) = legend.font_size_px {
        legend_labels["font"] = json!({ "size": size });
    }

    let legend_position = match legend.position {
        LegendPosition::Top => "top",
        LegendPosition::Bottom => "bottom",
    };

    let tooltip = &descriptor.tooltip;
    let mut options = json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "color": descriptor.defaults.text_color,
        "borderColor": descriptor.defaults.border_color,
        "font": { "family": descriptor.defaults.font_family },
        "plugins": {
            "legend": {
                "display": legend.display,
                "position": legend_position,
                "labels": legend_labels,
            },
            "tooltip": {
                "backgroundColor": tooltip.background,
                "titleColor": tooltip.title_color,
                "bodyColor": tooltip.body_color,
                "borderColor": tooltip.border_color,
                "borderWidth": tooltip.border_width_px,
                "padding": tooltip.padding_px,
                "cornerRadius": tooltip.corner_radius_px,
                "displayColors": tooltip.display_colors,
            },
            "annotation": { "annotations": annotations },
        },
        "scales": scales,
    });
    if let Some(cutout) = descriptor.cutout_percent {
        options["cutout"] = json!(format!("{cutout}%"));
    }

    json!({
        "type": chart_type_key(descriptor.chart_type),
        "data": { "labels": descriptor.labels, "datasets": datasets },
        "options": options,
    })
}

fn dataset_config(
    chart_type: ChartType,
    dataset: &DatasetDescriptor,
    gradient_height_px: f64,
) -> Value {
    let style = &dataset.style;
    let mut config = json!({
        "label": dataset.label,
        "data": dataset.values,
        "tooltipLabels": dataset.tooltip_labels,
        "borderWidth": style.stroke_width_px,
    });
    if chart_type == ChartType::Bar && dataset.mark == MarkType::Line {
        config["type"] = json!("line");
    }
    if let Some(stroke) = style.stroke {
        config["borderColor"] = json!(stroke);
    }
    if !style.stroke_style.dash_pattern().is_empty() {
        config["borderDash"] = json!(style.stroke_style.dash_pattern());
    }
    match &style.fill {
        Paint::None => {
            if dataset.mark == MarkType::Line {
                config["backgroundColor"] = json!("transparent");
            }
        }
        Paint::Solid(color) => config["backgroundColor"] = json!(color),
        Paint::PerPoint(colors) => config["backgroundColor"] = json!(colors),
        Paint::VerticalGradient { top, bottom } => {
            config["gradientFill"] =
                json!(LinearGradient::vertical(gradient_height_px, *top, *bottom));
        }
        Paint::Gradient(gradient) => config["gradientFill"] = json!(gradient),
    }
    match &style.point_fill {
        Paint::Solid(color) => config["pointBackgroundColor"] = json!(color),
        Paint::PerPoint(colors) => config["pointBackgroundColor"] = json!(colors),
        _ => {}
    }
    if matches!(dataset.mark, MarkType::Line | MarkType::Polygon) {
        config["tension"] = json!(style.tension);
        config["pointRadius"] = json!(style.point_radius_px);
    }
    if dataset.mark == MarkType::Line {
        config["fill"] = json!(style.fill_area);
    }
    if dataset.mark == MarkType::Bar {
        config["borderRadius"] = json!(style.bar_corner_radius_px);
        if let Some(percentage) = style.bar_percentage {
            config["barPercentage"] = json!(percentage);
        }
    }
    if let Some(offset) = style.hover_offset_px {
        config["hoverOffset"] = json!(offset);
    }
    if let Some(axis) = dataset.axis.filter(|axis| *axis != AxisId::Radial) {
        config["yAxisID"] = json!(axis_key(axis));
    }
    config
}

fn scale_config(scale: &ScaleDescriptor) -> Value {
    let mut config = json!({
        "ticks": { "display": scale.show_ticks },
        "tickFormat": scale.tick_format,
        "grid": { "drawOnChartArea": scale.grid_on_chart_area },
    });
    match scale.position {
        AxisPosition::Left => config["position"] = json!("left"),
        AxisPosition::Right => config["position"] = json!("right"),
        AxisPosition::Radial => {}
    }
    if let Some(color) = scale.grid_color {
        config["grid"]["color"] = json!(color);
    }
    if let Some(min) = scale.min {
        config["min"] = json!(min);
    }
    if let Some(max) = scale.max {
        config["max"] = json!(max);
    }
    if let Some(suggested_max) = scale.suggested_max {
        config["suggestedMax"] = json!(suggested_max);
    }
    if scale.point_label_color.is_some() || scale.point_label_font_size_px.is_some() {
        let mut point_labels = json!({});
        if let Some(color) = scale.point_label_color {
            point_labels["color"] = json!(color);
        }
        if let Some(size) = scale.point_label_font_size_px {
            point_labels["font"] = json!({ "size": size });
        }
        config["pointLabels"] = point_labels;
    }
    config
}

fn chart_type_key(chart_type: ChartType) -> &'static str {
    match chart_type {
        ChartType::Line => "line",
        ChartType::Bar => "bar",
        ChartType::Doughnut => "doughnut",
        ChartType::Radar => "radar",
    }
}

fn axis_key(axis: AxisId) -> &'static str {
    match axis {
        AxisId::Primary => "y",
        AxisId::Secondary => "y1",
        AxisId::Radial => "r",
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const PAGE_CSS: &str = r#"* { box-sizing: border-box; }
body { margin: 0; background: #0b1020; color: #e2e8f0; font-family: 'Inter', sans-serif; }
.dashboard { max-width: 1440px; margin: 0 auto; padding: 32px 24px; }
h1 { font-size: 24px; font-weight: 600; margin: 0 0 24px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(420px, 1fr)); gap: 20px; }
.card { background: rgba(15,23,42,0.85); border: 1px solid rgba(99,102,241,0.15); border-radius: 14px; padding: 18px; }
.card h2 { font-size: 14px; font-weight: 500; color: #cbd5e1; margin: 0 0 12px; }
.chart-box { position: relative; }
"#;

// Tick labels mirror `core::format::format_axis_tick`.
const BOOTSTRAP_JS: &str = r#"(function () {
  const fmtTick = (rule, v) => {
    switch (rule.kind) {
      case 'percent': return v + '%';
      case 'plain': return v;
      default: return Math.abs(v) >= 10000 ? (v / 10000).toFixed(0) + '万' : v;
    }
  };
  for (const panel of PANELS) {
    const cfg = panel.config;
    for (const ds of cfg.data.datasets) {
      if (ds.gradientFill) {
        const g = ds.gradientFill;
        ds.backgroundColor = ctx => {
          const grad = ctx.chart.ctx.createLinearGradient(g.x0, g.y0, g.x1, g.y1);
          grad.addColorStop(0, g.start);
          grad.addColorStop(1, g.end);
          return grad;
        };
      }
    }
    cfg.options.plugins.tooltip.callbacks = {
      label: ctx => ctx.dataset.tooltipLabels[ctx.dataIndex]
    };
    for (const scale of Object.values(cfg.options.scales)) {
      const rule = scale.tickFormat;
      scale.ticks = Object.assign({}, scale.ticks, { callback: v => fmtTick(rule, v) });
    }
    new Chart(document.getElementById(panel.target), cfg);
  }
})();
"#;
