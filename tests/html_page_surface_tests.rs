use chart_dashboard::api::{
    AreaFill, CompositionStyle, DualAxisStyle, PanelConfig, PanelRenderer, SeriesRef,
    SignedBarStyle, ThemeProfile, TrendStyle, palette,
};
use chart_dashboard::core::{CategoryAxis, Series, SeriesRegistry};
use chart_dashboard::render::{HtmlPageOptions, HtmlPageSurface, RenderTarget};
use serde_json::json;

fn registry() -> SeriesRegistry {
    let axis = CategoryAxis::new(["24/01", "24/02"]);
    let mut registry = SeriesRegistry::new();
    registry
        .register(
            "profit",
            Series::indexed(axis.clone(), [437198.0, -43711.0]).expect("profit"),
        )
        .expect("profit");
    registry
        .register("margin", Series::indexed(axis.clone(), [41.63, 27.16]).expect("margin"))
        .expect("margin");
    registry
        .register(
            "overdue",
            Series::indexed(axis, [0.0, 49797.0]).expect("overdue"),
        )
        .expect("overdue");
    registry
        .register(
            "revenue",
            Series::categorical([("租金收入", 10_251_940.0), ("尾款收入", 2_407_173.0)])
                .expect("revenue"),
        )
        .expect("revenue");
    registry.freeze();
    registry
}

fn target(key: &str) -> RenderTarget {
    RenderTarget::new(key).expect("target")
}

fn render(configs: &[(&str, PanelConfig)]) -> HtmlPageSurface {
    let registry = registry();
    let mut renderer = PanelRenderer::new(
        &registry,
        ThemeProfile::default(),
        HtmlPageSurface::new(HtmlPageOptions::default()),
    )
    .expect("renderer");
    for (key, config) in configs {
        renderer.render_panel(&target(key), config).expect("render");
    }
    renderer.into_surface()
}

#[test]
fn dual_axis_config_maps_axes_and_precomputed_tooltips() {
    let surface = render(&[(
        "chartProfitDual",
        PanelConfig::dual_axis(DualAxisStyle::default())
            .with_series(SeriesRef::new("profit").with_label("利润金额"))
            .with_series(SeriesRef::new("margin").with_label("利润率%")),
    )]);
    let config = surface.config_for(&target("chartProfitDual")).expect("config");

    assert_eq!(config["type"], json!("bar"));
    assert_eq!(config["data"]["labels"], json!(["24/01", "24/02"]));
    let datasets = config["data"]["datasets"].as_array().expect("datasets");
    assert_eq!(datasets[0]["yAxisID"], json!("y"));
    assert_eq!(datasets[0]["tooltipLabels"][0], json!("利润金额: ¥43.72万"));
    assert_eq!(datasets[1]["type"], json!("line"));
    assert_eq!(datasets[1]["yAxisID"], json!("y1"));
    assert_eq!(datasets[1]["tooltipLabels"][0], json!("利润率%: 41.6%"));

    let y1 = &config["options"]["scales"]["y1"];
    assert_eq!(y1["position"], json!("right"));
    assert_eq!(y1["max"], json!(100.0));
    assert_eq!(y1["grid"]["drawOnChartArea"], json!(false));
    assert_eq!(y1["tickFormat"]["kind"], json!("percent"));
}

#[test]
fn guide_lines_become_annotations_and_gradients_span_the_box() {
    let surface = render(&[
        (
            "chartRecovery",
            PanelConfig::signed_bar(SignedBarStyle::default()).with_series(SeriesRef::new("profit")),
        ),
        (
            "chartOverdue",
            PanelConfig::trend(TrendStyle::default()).with_series(
                SeriesRef::new("overdue")
                    .with_color(palette::ROSE)
                    .with_fill(AreaFill::Gradient {
                        top_alpha: 0.25,
                        bottom_alpha: 0.0,
                    }),
            ),
        ),
    ]);

    let recovery = surface.config_for(&target("chartRecovery")).expect("recovery");
    let guide = &recovery["options"]["plugins"]["annotation"]["annotations"]["guide0"];
    assert_eq!(guide["yMin"], json!(0.0));
    assert_eq!(guide["borderDash"], json!([4.0, 4.0]));
    assert_eq!(
        recovery["data"]["datasets"][0]["backgroundColor"],
        json!(["rgba(244,63,94,0.6)", "rgba(16,185,129,0.7)"])
    );

    let overdue = surface.config_for(&target("chartOverdue")).expect("overdue");
    let gradient = &overdue["data"]["datasets"][0]["gradientFill"];
    assert_eq!(gradient["y1"], json!(260.0));
    assert_eq!(gradient["start"], json!("rgba(244,63,94,0.25)"));
    assert_eq!(overdue["data"]["datasets"][0]["fill"], json!(true));
}

#[test]
fn doughnut_config_carries_cutout_and_bottom_legend() {
    let surface = render(&[(
        "chartRevenueCompose",
        PanelConfig::composition(CompositionStyle::default()).with_series(SeriesRef::new("revenue")),
    )]);
    let config = surface.config_for(&target("chartRevenueCompose")).expect("config");
    assert_eq!(config["type"], json!("doughnut"));
    assert_eq!(config["options"]["cutout"], json!("60%"));
    assert_eq!(config["options"]["plugins"]["legend"]["position"], json!("bottom"));
    assert_eq!(
        config["options"]["plugins"]["legend"]["labels"]["font"]["size"],
        json!(11.0)
    );
    assert_eq!(
        config["data"]["datasets"][0]["tooltipLabels"],
        json!(["租金收入: ¥1025.19万", "尾款收入: ¥240.72万"])
    );
    assert!(config["data"]["datasets"][0].get("yAxisID").is_none());
}

#[test]
fn finished_page_has_one_canvas_per_panel_and_escapes_text() {
    let surface = render(&[
        (
            "chartRecovery",
            PanelConfig::signed_bar(SignedBarStyle::default())
                .with_title("回款 <月度>")
                .with_series(SeriesRef::new("profit").with_label("</script>")),
        ),
        (
            "chartOverdue",
            PanelConfig::trend(TrendStyle::default()).with_series(SeriesRef::new("overdue")),
        ),
    ]);
    assert_eq!(surface.chart_count(), 2);

    let page = surface.finish("经营 & 报表").expect("page");
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>经营 &amp; 报表</title>"));
    assert!(page.contains("<canvas id=\"chartRecovery\"></canvas>"));
    assert!(page.contains("<canvas id=\"chartOverdue\"></canvas>"));
    assert!(page.contains("<h2>回款 &lt;月度&gt;</h2>"));
    assert!(page.contains("chart.umd.min.js"));
    assert!(!page.contains("\"</script>"));
    assert_eq!(page.matches("</script>").count(), 3);
}

#[test]
fn a_canvas_cannot_hold_two_charts() {
    let registry = registry();
    let mut renderer = PanelRenderer::new(
        &registry,
        ThemeProfile::default(),
        HtmlPageSurface::new(HtmlPageOptions::default()),
    )
    .expect("renderer");
    let config =
        PanelConfig::trend(TrendStyle::default()).with_series(SeriesRef::new("overdue"));
    renderer.render_panel(&target("chartOverdue"), &config).expect("first");
    renderer
        .render_panel(&target("chartOverdue"), &config.clone().with_allow_replace(true))
        .expect("replacement detaches first");
    assert_eq!(renderer.surface().chart_count(), 1);
}
