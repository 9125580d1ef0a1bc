use chart_dashboard::api::{
    AreaFill, CompositionStyle, DualAxisStyle, GroupedBarStyle, PanelConfig, RadarStyle,
    ResolvedSeries, SeriesRef, SeriesRole, SignedBarStyle, ThemeProfile, ThresholdBands,
    ThresholdMark, ThresholdStyle, TrendStyle, build_panel_descriptor, palette,
};
use chart_dashboard::core::{CategoryAxis, Series};
use chart_dashboard::error::DashboardError;
use chart_dashboard::render::{
    AxisId, ChartDescriptor, ChartType, LegendPosition, MarkType, Paint, StrokeStyle,
};

fn months(len: usize) -> CategoryAxis {
    CategoryAxis::new((1..=len).map(|m| format!("24/{m:02}")))
}

fn build(config: &PanelConfig, series: &[Series]) -> Result<ChartDescriptor, DashboardError> {
    let resolved: Vec<ResolvedSeries<'_>> = config
        .series
        .iter()
        .zip(series)
        .map(|(reference, series)| ResolvedSeries::new(reference, series))
        .collect();
    build_panel_descriptor(config, &resolved, &ThemeProfile::default())
}

#[test]
fn trend_panel_styles_each_line_by_role() {
    let axis = months(3);
    let series = [
        Series::indexed(axis.clone(), [800626.0, 793161.0, 1142292.0]).expect("receivables"),
        Series::indexed(axis.clone(), [583143.0, 601811.0, 750122.0]).expect("investment"),
        Series::indexed(axis, [75330.0, 176946.0, 225010.0]).expect("costs"),
    ];
    let config = PanelConfig::trend(TrendStyle::default())
        .with_title("走势")
        .with_series(
            SeriesRef::new("receivables")
                .with_label("待收金额")
                .with_fill(AreaFill::Solid { alpha: 0.08 }),
        )
        .with_series(SeriesRef::new("investment").with_label("实际出资"))
        .with_series(
            SeriesRef::new("costs")
                .with_label("成本支出")
                .with_color(palette::PURPLE)
                .with_role(SeriesRole::Secondary),
        );

    let descriptor = build(&config, &series).expect("trend");
    assert_eq!(descriptor.chart_type, ChartType::Line);
    assert_eq!(descriptor.title.as_deref(), Some("走势"));
    assert_eq!(descriptor.labels, vec!["24/01", "24/02", "24/03"]);
    assert_eq!(descriptor.datasets.len(), 3);

    let receivables = descriptor.dataset("待收金额").expect("receivables");
    assert_eq!(receivables.style.stroke, Some(palette::INDIGO));
    assert_eq!(receivables.style.fill, Paint::Solid(palette::INDIGO.with_alpha(0.08)));
    assert!(receivables.style.fill_area);
    assert_eq!(receivables.style.tension, 0.4);
    assert_eq!(receivables.tooltip_labels[0], "待收金额: ¥80.06万");

    let investment = descriptor.dataset("实际出资").expect("investment");
    assert_eq!(investment.style.stroke, Some(palette::CYAN));
    assert!(!investment.style.fill_area);

    let costs = descriptor.dataset("成本支出").expect("costs");
    assert_eq!(costs.style.stroke, Some(palette::PURPLE));
    assert_eq!(costs.style.stroke_style, StrokeStyle::dashed(6.0, 3.0));
    assert_eq!(costs.style.stroke_width_px, 2.0);
    assert_eq!(costs.style.point_radius_px, 2.0);
}

#[test]
fn trend_gradient_fill_stays_unresolved_until_rendered() {
    let series = [Series::indexed(months(2), [0.0, 49797.0]).expect("overdue")];
    let config = PanelConfig::trend(TrendStyle::default()).with_series(
        SeriesRef::new("overdue")
            .with_color(palette::ROSE)
            .with_fill(AreaFill::Gradient {
                top_alpha: 0.25,
                bottom_alpha: 0.0,
            }),
    );
    let descriptor = build(&config, &series).expect("trend");
    assert_eq!(
        descriptor.datasets[0].style.fill,
        Paint::VerticalGradient {
            top: palette::ROSE.with_alpha(0.25),
            bottom: palette::ROSE.with_alpha(0.0),
        }
    );
    assert_eq!(descriptor.datasets[0].tooltip_labels, vec!["overdue: 0", "overdue: ¥4.98万"]);
}

#[test]
fn trend_series_must_share_one_axis() {
    let series = [
        Series::indexed(months(2), [1.0, 2.0]).expect("a"),
        Series::indexed(CategoryAxis::new(["x", "y"]), [1.0, 2.0]).expect("b"),
    ];
    let config = PanelConfig::trend(TrendStyle::default())
        .with_series(SeriesRef::new("a"))
        .with_series(SeriesRef::new("b"));
    assert!(matches!(build(&config, &series), Err(DashboardError::InvalidData(_))));
}

#[test]
fn dual_axis_puts_bars_left_and_percentages_right() {
    let axis = months(2);
    let series = [
        Series::indexed(axis.clone(), [5_853_230.0, 191_360.0]).expect("profit"),
        Series::indexed(axis, [27.16, 24.13]).expect("margin"),
    ];
    let config = PanelConfig::dual_axis(DualAxisStyle::default())
        .with_series(
            SeriesRef::new("profit")
                .with_label("利润金额")
                .with_color(palette::EMERALD),
        )
        .with_series(
            SeriesRef::new("margin")
                .with_label("利润率%")
                .with_color(palette::AMBER),
        );

    let descriptor = build(&config, &series).expect("dual axis");
    assert_eq!(descriptor.chart_type, ChartType::Bar);

    let bars = &descriptor.datasets[0];
    assert_eq!(bars.mark, MarkType::Bar);
    assert_eq!(bars.axis, Some(AxisId::Primary));
    assert_eq!(bars.style.fill, Paint::Solid(palette::EMERALD.with_alpha(0.6)));
    assert_eq!(bars.tooltip_labels[0], "利润金额: ¥585.32万");
    assert_eq!(bars.tooltip_labels[1], "利润金额: ¥19.14万");

    let line = &descriptor.datasets[1];
    assert_eq!(line.mark, MarkType::Line);
    assert_eq!(line.axis, Some(AxisId::Secondary));
    assert_eq!(line.tooltip_labels, vec!["利润率%: 27.2%", "利润率%: 24.1%"]);

    let secondary = descriptor.scale(AxisId::Secondary).expect("secondary axis");
    assert_eq!((secondary.min, secondary.max), (Some(0.0), Some(100.0)));
    assert!(!secondary.grid_on_chart_area);
    assert!(descriptor.scale(AxisId::Primary).expect("primary").grid_on_chart_area);
}

#[test]
fn dual_axis_requires_exactly_two_series() {
    let axis = months(1);
    let series = [
        Series::indexed(axis.clone(), [1.0]).expect("a"),
        Series::indexed(axis.clone(), [2.0]).expect("b"),
        Series::indexed(axis, [3.0]).expect("c"),
    ];
    let config = PanelConfig::dual_axis(DualAxisStyle::default())
        .with_series(SeriesRef::new("a"))
        .with_series(SeriesRef::new("b"))
        .with_series(SeriesRef::new("c"));
    assert!(matches!(build(&config, &series), Err(DashboardError::InvalidData(_))));

    let single = PanelConfig::dual_axis(DualAxisStyle::default()).with_series(SeriesRef::new("a"));
    assert!(matches!(build(&single, &series[..1]), Err(DashboardError::InvalidData(_))));
}

#[test]
fn signed_bar_colors_by_sign_and_draws_zero_line() {
    let series = [Series::indexed(months(3), [437198.0, 0.0, -614439.0]).expect("investment")];
    let style = SignedBarStyle::default();
    let config = PanelConfig::signed_bar(style.clone()).with_series(SeriesRef::new("investment"));

    let descriptor = build(&config, &series).expect("signed bar");
    assert_eq!(
        descriptor.datasets[0].style.fill,
        Paint::PerPoint(vec![
            style.positive_color,
            style.positive_color,
            style.negative_color
        ])
    );
    assert_eq!(descriptor.guide_lines.len(), 1);
    assert_eq!(descriptor.guide_lines[0].value, 0.0);
    assert_eq!(descriptor.guide_lines[0].stroke, StrokeStyle::dashed(4.0, 4.0));
    assert_eq!(descriptor.datasets[0].values, vec![437198.0, 0.0, -614439.0]);
}

#[test]
fn threshold_line_colors_points_and_keeps_line_color() {
    let series = [Series::indexed(months(3), [6.3, 35.0, 100.0]).expect("rate")];
    let bands = ThresholdBands::above(
        [(50.0, palette::ROSE), (30.0, palette::AMBER)],
        palette::EMERALD,
    )
    .expect("bands");
    let config = PanelConfig::threshold(ThresholdStyle::new(bands, ThresholdMark::Line))
        .with_series(SeriesRef::new("rate").with_label("逾期率").with_color(palette::AMBER));

    let descriptor = build(&config, &series).expect("threshold");
    let dataset = &descriptor.datasets[0];
    assert_eq!(descriptor.chart_type, ChartType::Line);
    assert_eq!(dataset.style.stroke, Some(palette::AMBER));
    assert_eq!(
        dataset.style.point_fill,
        Paint::PerPoint(vec![palette::EMERALD, palette::AMBER, palette::ROSE])
    );
    assert_eq!(dataset.tooltip_labels[1], "逾期率: 35.0%");
}

#[test]
fn threshold_bar_fills_each_bar_by_band() {
    let series = [Series::indexed(months(3), [41.63, 27.16, 18.82]).expect("margin")];
    let bands = ThresholdBands::at_least(
        [(35.0, palette::EMERALD), (25.0, palette::INDIGO)],
        palette::ROSE,
    )
    .expect("bands");
    let style = ThresholdStyle::new(bands, ThresholdMark::Bar).with_bar_shape(6.0, 0.7);
    let config = PanelConfig::threshold(style).with_series(SeriesRef::new("margin"));

    let descriptor = build(&config, &series).expect("threshold bar");
    let dataset = &descriptor.datasets[0];
    assert_eq!(descriptor.chart_type, ChartType::Bar);
    assert_eq!(
        dataset.style.fill,
        Paint::PerPoint(vec![palette::EMERALD, palette::INDIGO, palette::ROSE])
    );
    assert_eq!(dataset.style.bar_corner_radius_px, 6.0);
    assert_eq!(dataset.style.bar_percentage, Some(0.7));
}

#[test]
fn composition_uses_palette_slices_and_bottom_legend() {
    let series = [Series::categorical([
        ("租金收入", 10_251_940.0),
        ("尾款收入", 2_407_173.0),
        ("买断金", 16.0),
    ])
    .expect("revenue")];
    let config = PanelConfig::composition(CompositionStyle::default())
        .with_series(SeriesRef::new("revenue"));

    let descriptor = build(&config, &series).expect("composition");
    assert_eq!(descriptor.chart_type, ChartType::Doughnut);
    assert_eq!(descriptor.cutout_percent, Some(60.0));
    assert_eq!(descriptor.legend.position, LegendPosition::Bottom);
    assert_eq!(descriptor.legend.font_size_px, Some(11.0));
    assert!(descriptor.scales.is_empty());

    let slices = &descriptor.datasets[0];
    assert_eq!(slices.mark, MarkType::Slice);
    assert_eq!(
        slices.style.fill,
        Paint::PerPoint(vec![
            palette::INDIGO.with_alpha(0.8),
            palette::CYAN.with_alpha(0.8),
            palette::PURPLE.with_alpha(0.8),
        ])
    );
    assert_eq!(
        slices.tooltip_labels,
        vec!["租金收入: ¥1025.19万", "尾款收入: ¥240.72万", "买断金: 16"]
    );
    assert_eq!(slices.style.hover_offset_px, Some(12.0));
}

#[test]
fn composition_rejects_indexed_series_and_wrong_color_count() {
    let indexed = [Series::indexed(months(2), [1.0, 2.0]).expect("indexed")];
    let config = PanelConfig::composition(CompositionStyle::default())
        .with_series(SeriesRef::new("indexed"));
    assert!(matches!(build(&config, &indexed), Err(DashboardError::InvalidData(_))));

    let categorical = [Series::categorical([("a", 1.0), ("b", 2.0)]).expect("categorical")];
    let style = CompositionStyle {
        colors: Some(vec![palette::ROSE]),
        ..CompositionStyle::default()
    };
    let config = PanelConfig::composition(style).with_series(SeriesRef::new("categorical"));
    assert!(matches!(build(&config, &categorical), Err(DashboardError::InvalidData(_))));
}

#[test]
fn grouped_bar_needs_matching_entities() {
    let entities = ["涛涛好物", "刚刚好物", "太太租物", "总平台"];
    let series = [
        Series::categorical(entities.into_iter().zip([3011805.0, 0.0, 105082.0, 3116887.0]))
            .expect("lease"),
        Series::categorical(entities.into_iter().zip([0.0, 1250200.0, 15797.0, 1265996.0]))
            .expect("ecom"),
    ];
    let config = PanelConfig::grouped_bar(GroupedBarStyle::default())
        .with_series(SeriesRef::new("lease").with_label("租赁业绩"))
        .with_series(SeriesRef::new("ecom").with_label("电商业绩"));
    let descriptor = build(&config, &series).expect("grouped");
    assert_eq!(descriptor.labels, entities.to_vec());
    assert_eq!(
        descriptor.datasets[1].style.fill,
        Paint::Solid(palette::CYAN.with_alpha(0.7))
    );

    let mismatched = [
        series[0].clone(),
        Series::categorical([("涛涛好物", 1.0), ("总平台", 2.0)]).expect("other"),
    ];
    assert!(matches!(build(&config, &mismatched), Err(DashboardError::InvalidData(_))));
}

#[test]
fn radar_highlights_the_lead_entity() {
    let dimensions = ["订单数", "总待收", "租金", "放款", "业绩"];
    let series = [
        Series::categorical(dimensions.into_iter().zip([100.0, 78.0, 92.0, 71.0, 69.0]))
            .expect("lead"),
        Series::categorical(dimensions.into_iter().zip([32.0, 20.0, 0.02, 23.0, 29.0]))
            .expect("second"),
    ];
    let config = PanelConfig::radar(RadarStyle::default())
        .with_series(SeriesRef::new("lead").with_label("涛涛好物"))
        .with_series(SeriesRef::new("second").with_label("刚刚好物"));

    let descriptor = build(&config, &series).expect("radar");
    let radial = descriptor.scale(AxisId::Radial).expect("radial");
    assert_eq!((radial.min, radial.max), (Some(0.0), Some(100.0)));
    assert!(!radial.show_ticks);
    assert_eq!(radial.point_label_font_size_px, Some(11.0));
    assert_eq!(
        descriptor.datasets[0].style.fill,
        Paint::Solid(palette::INDIGO.with_alpha(0.15))
    );
    assert_eq!(
        descriptor.datasets[1].style.fill,
        Paint::Solid(palette::CYAN.with_alpha(0.1))
    );
    assert_eq!(descriptor.datasets[1].tooltip_labels[2], "刚刚好物: 0.02");
}

#[test]
fn building_never_alters_series_values() {
    let series = [Series::indexed(months(2), [5_853_230.0, -856_310.0]).expect("values")];
    let config = PanelConfig::signed_bar(SignedBarStyle::default()).with_series(SeriesRef::new("v"));
    let first = build(&config, &series).expect("first");
    let second = build(&config, &series).expect("second");
    assert_eq!(first, second);
    assert_eq!(series[0].values(), &[5_853_230.0, -856_310.0]);
}
