use chart_dashboard::api::{DashboardLayout, palette};
use chart_dashboard::render::{
    AxisId, ChartType, HtmlPageOptions, Paint, RecordingSurface, RenderTarget,
};
use chart_dashboard::report::{self, REPORT_TITLE, data::names};

fn target(key: &str) -> RenderTarget {
    RenderTarget::new(key).expect("target")
}

#[test]
fn registry_holds_every_report_series_and_is_frozen() {
    let registry = report::populate_registry().expect("registry");
    assert!(registry.is_frozen());
    assert_eq!(registry.len(), 18);

    let rate = registry.get(names::OVERDUE_RATE).expect("overdue rate");
    assert!(rate.is_derived());
    assert_eq!(rate.len(), 18);
    assert_eq!(rate.values()[0], 0.0);
    assert_eq!(rate.values()[1], 6.3);
    assert_eq!(rate.values()[7], 11.7);
    assert_eq!(rate.values()[17], 100.0);
    assert_eq!(rate.value_at("25/09"), Some(108.2));
}

#[test]
fn layout_lists_fourteen_panels_in_page_order() {
    let layout = report::layout().expect("layout");
    assert_eq!(layout.title, REPORT_TITLE);
    let targets: Vec<&str> = layout.panels.iter().map(|panel| panel.target.as_str()).collect();
    assert_eq!(
        targets,
        vec![
            "chartMain",
            "chartProfitDual",
            "chartRecovery",
            "chartOverdue",
            "chartOverdueRate",
            "chartRevenueCompose",
            "chartStoreReceivable",
            "chartStoreOrder",
            "chartLeaseEcom",
            "chartRadar",
            "chartCumulative",
            "chartMarginBar",
            "chartExpenseCat",
            "chartExpenseMonth",
        ]
    );
}

#[test]
fn whole_report_renders_onto_a_recording_surface() {
    let registry = report::populate_registry().expect("registry");
    let surface = report::layout()
        .expect("layout")
        .render(&registry, RecordingSurface::new())
        .expect("render");
    assert_eq!(surface.attached_count(), 14);
    assert!(surface.detached().is_empty());

    let dual = surface.chart_on(&target("chartProfitDual")).expect("dual");
    assert_eq!(dual.descriptor.datasets[0].tooltip_labels[7], "利润金额: ¥146.03万");
    assert_eq!(dual.descriptor.datasets[1].tooltip_labels[17], "利润率%: 41.6%");
    assert_eq!(
        dual.descriptor.scale(AxisId::Secondary).expect("y1").max,
        Some(50.0)
    );

    let rate = surface.chart_on(&target("chartOverdueRate")).expect("rate");
    match &rate.descriptor.datasets[0].style.point_fill {
        Paint::PerPoint(colors) => {
            assert_eq!(colors[1], palette::EMERALD);
            assert_eq!(colors[13], palette::AMBER);
            assert_eq!(colors[14], palette::ROSE);
            assert_eq!(colors[16], palette::ROSE);
        }
        other => panic!("expected per-point colors, got {other:?}"),
    }
    assert_eq!(rate.descriptor.datasets[0].tooltip_labels[1], "逾期率: 6.3%");

    let margin = surface.chart_on(&target("chartMarginBar")).expect("margin");
    assert_eq!(margin.descriptor.chart_type, ChartType::Bar);
    match &margin.descriptor.datasets[0].style.fill {
        Paint::PerPoint(colors) => {
            assert_eq!(colors[0], palette::INDIGO.with_alpha(0.7));
            assert_eq!(colors[16], palette::ROSE.with_alpha(0.6));
            assert_eq!(colors[17], palette::EMERALD.with_alpha(0.8));
        }
        other => panic!("expected per-point fill, got {other:?}"),
    }

    let radar = surface.chart_on(&target("chartRadar")).expect("radar");
    assert_eq!(radar.descriptor.chart_type, ChartType::Radar);
    assert_eq!(radar.descriptor.datasets.len(), 3);
}

#[test]
fn rendering_leaves_the_registry_untouched() {
    let registry = report::populate_registry().expect("registry");
    let before: Vec<Vec<f64>> = registry
        .names()
        .map(|name| registry.values(name).expect("values").to_vec())
        .collect();
    report::layout()
        .expect("layout")
        .render(&registry, RecordingSurface::new())
        .expect("render");
    let after: Vec<Vec<f64>> = registry
        .names()
        .map(|name| registry.values(name).expect("values").to_vec())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn report_exports_as_one_html_page() {
    let registry = report::populate_registry().expect("registry");
    let layout = report::layout().expect("layout");
    let page = layout
        .render_html_page(&registry, HtmlPageOptions::default())
        .expect("page");
    assert!(page.contains(REPORT_TITLE));
    assert_eq!(page.matches("<canvas id=").count(), 14);
    assert!(page.contains("利润金额: ¥146.03万"));
}

#[test]
fn report_layout_survives_the_json_contract() {
    let layout = report::layout().expect("layout");
    let json = layout.to_json_contract_v1_pretty().expect("serialize");
    let parsed = DashboardLayout::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, layout);
}
