use crate::api::{
    AreaFill, CompositionStyle, DashboardLayout, DualAxisStyle, GroupedBarStyle, PanelConfig,
    RadarStyle, SeriesRef, SeriesRole, SignedBarStyle, ThemeProfile, ThresholdBands,
    ThresholdMark, ThresholdStyle, TrendStyle, ValueAxisConfig, palette,
};
use crate::core::FormatRule;
use crate::error::DashboardResult;
use crate::render::RenderTarget;

use super::data::{STORES, names};

pub const REPORT_TITLE: &str = "手机业务 2025 年终经营报表";

/// The fourteen report panels, keyed by canvas id, in page order.
pub fn layout() -> DashboardResult<DashboardLayout> {
    let panels = [
        ("chartMain", main_trend()),
        ("chartProfitDual", profit_dual_axis()),
        ("chartRecovery", investment_recovery()),
        ("chartOverdue", overdue_amount()),
        ("chartOverdueRate", overdue_rate()?),
        ("chartRevenueCompose", revenue_composition()),
        ("chartStoreReceivable", store_receivable()),
        ("chartStoreOrder", store_orders()),
        ("chartLeaseEcom", lease_vs_ecommerce()),
        ("chartRadar", store_radar()),
        ("chartCumulative", cumulative_cost()),
        ("chartMarginBar", margin_bar()?),
        ("chartExpenseCat", expense_categories()),
        ("chartExpenseMonth", monthly_expense()),
    ];

    let mut layout = DashboardLayout::new(REPORT_TITLE, ThemeProfile::default());
    for (target, config) in panels {
        layout = layout.with_panel(RenderTarget::new(target)?, config);
    }
    Ok(layout)
}

fn main_trend() -> PanelConfig {
    PanelConfig::trend(TrendStyle::default())
        .with_title("待收 · 出资 · 成本走势")
        .with_series(
            SeriesRef::new(names::RECEIVABLES)
                .with_label("待收金额")
                .with_color(palette::INDIGO)
                .with_fill(AreaFill::Solid { alpha: 0.08 }),
        )
        .with_series(
            SeriesRef::new(names::INVESTMENT)
                .with_label("实际出资")
                .with_color(palette::CYAN)
                .with_fill(AreaFill::Solid { alpha: 0.06 }),
        )
        .with_series(
            SeriesRef::new(names::COSTS)
                .with_label("成本支出")
                .with_color(palette::PURPLE)
                .with_role(SeriesRole::Secondary),
        )
}

fn profit_dual_axis() -> PanelConfig {
    let style = DualAxisStyle {
        secondary_axis: ValueAxisConfig::default()
            .with_bounds(0.0, 50.0)
            .with_tick_format(FormatRule::percent()),
        ..DualAxisStyle::default()
    };
    PanelConfig::dual_axis(style)
        .with_title("利润与利润率")
        .with_series(
            SeriesRef::new(names::PROFIT)
                .with_label("利润金额")
                .with_color(palette::EMERALD),
        )
        .with_series(
            SeriesRef::new(names::MARGIN_RATE)
                .with_label("利润率%")
                .with_color(palette::AMBER),
        )
}

fn investment_recovery() -> PanelConfig {
    PanelConfig::signed_bar(SignedBarStyle::default())
        .with_title("出资回本进度")
        .with_series(SeriesRef::new(names::INVESTMENT).with_label("实际出资(负=已回本)"))
}

fn overdue_amount() -> PanelConfig {
    PanelConfig::trend(TrendStyle::default())
        .with_title("逾期金额")
        .with_series(
            SeriesRef::new(names::OVERDUE)
                .with_label("逾期金额")
                .with_color(palette::ROSE)
                .with_fill(AreaFill::Gradient {
                    top_alpha: 0.25,
                    bottom_alpha: 0.0,
                }),
        )
}

fn overdue_rate() -> DashboardResult<PanelConfig> {
    let bands = ThresholdBands::above(
        [(50.0, palette::ROSE), (30.0, palette::AMBER)],
        palette::EMERALD,
    )?;
    let style = ThresholdStyle::new(bands, ThresholdMark::Line).with_value_axis(
        ValueAxisConfig::default()
            .with_bounds(0.0, 110.0)
            .with_tick_format(FormatRule::percent()),
    );
    Ok(PanelConfig::threshold(style)
        .with_title("逾期率")
        .with_series(
            SeriesRef::new(names::OVERDUE_RATE)
                .with_label("逾期率")
                .with_color(palette::AMBER)
                .with_fill(AreaFill::Gradient {
                    top_alpha: 0.2,
                    bottom_alpha: 0.0,
                }),
        ))
}

fn revenue_composition() -> PanelConfig {
    let style = CompositionStyle {
        colors: Some(vec![
            palette::INDIGO.with_alpha(0.8),
            palette::CYAN.with_alpha(0.8),
            palette::PURPLE.with_alpha(0.8),
            palette::EMERALD.with_alpha(0.8),
            palette::AMBER.with_alpha(0.8),
            palette::ROSE.with_alpha(0.6),
        ]),
        ..CompositionStyle::default()
    };
    PanelConfig::composition(style)
        .with_title("收入构成")
        .with_series(SeriesRef::new(names::REVENUE_COMPOSITION).with_label("收入"))
}

fn store_receivable() -> PanelConfig {
    let style = CompositionStyle {
        colors: Some(vec![
            palette::ROSE.with_alpha(0.75),
            palette::AMBER.with_alpha(0.75),
            palette::EMERALD.with_alpha(0.75),
        ]),
        hover_offset_px: 10.0,
        ..CompositionStyle::default()
    };
    PanelConfig::composition(style)
        .with_title("门店待收集中度")
        .with_series(SeriesRef::new(names::STORE_RECEIVABLE).with_label("待收"))
}

fn store_orders() -> PanelConfig {
    let style = CompositionStyle {
        hover_offset_px: 10.0,
        tooltip_format: FormatRule::Plain,
        ..CompositionStyle::default()
    };
    PanelConfig::composition(style)
        .with_title("门店订单占比")
        .with_series(SeriesRef::new(names::STORE_ORDERS).with_label("订单数"))
}

fn lease_vs_ecommerce() -> PanelConfig {
    PanelConfig::grouped_bar(GroupedBarStyle::default())
        .with_title("租赁 vs 电商业绩")
        .with_series(
            SeriesRef::new(names::LEASE_PERFORMANCE)
                .with_label("租赁业绩")
                .with_color(palette::INDIGO),
        )
        .with_series(
            SeriesRef::new(names::ECOMMERCE_PERFORMANCE)
                .with_label("电商业绩")
                .with_color(palette::CYAN),
        )
}

fn store_radar() -> PanelConfig {
    names::STORE_RADAR.into_iter().zip(STORES).fold(
        PanelConfig::radar(RadarStyle::default()).with_title("门店综合对比"),
        |config, (name, store)| config.with_series(SeriesRef::new(name).with_label(store)),
    )
}

fn cumulative_cost() -> PanelConfig {
    let style = TrendStyle {
        point_radius_px: 4.0,
        ..TrendStyle::default()
    };
    PanelConfig::trend(style)
        .with_title("累计成本")
        .with_series(
            SeriesRef::new(names::CUMULATIVE_COST)
                .with_label("累计成本")
                .with_color(palette::AMBER)
                .with_fill(AreaFill::Gradient {
                    top_alpha: 0.15,
                    bottom_alpha: 0.0,
                }),
        )
}

fn margin_bar() -> DashboardResult<PanelConfig> {
    let bands = ThresholdBands::at_least(
        [
            (35.0, palette::EMERALD.with_alpha(0.8)),
            (25.0, palette::INDIGO.with_alpha(0.7)),
        ],
        palette::ROSE.with_alpha(0.6),
    )?;
    let style = ThresholdStyle::new(bands, ThresholdMark::Bar)
        .with_bar_shape(6.0, 0.7)
        .with_value_axis(
            ValueAxisConfig::default()
                .with_suggested_max(50.0)
                .with_tick_format(FormatRule::percent()),
        );
    Ok(PanelConfig::threshold(style)
        .with_title("月度利润率")
        .with_series(SeriesRef::new(names::MARGIN_RATE).with_label("利润率")))
}

fn expense_categories() -> PanelConfig {
    let style = CompositionStyle {
        colors: Some(vec![
            palette::INDIGO.with_alpha(0.8),
            palette::ROSE.with_alpha(0.7),
            palette::AMBER.with_alpha(0.7),
            palette::CYAN.with_alpha(0.7),
            palette::PURPLE.with_alpha(0.7),
        ]),
        hover_offset_px: 10.0,
        ..CompositionStyle::default()
    };
    PanelConfig::composition(style)
        .with_title("支出分类")
        .with_series(SeriesRef::new(names::EXPENSE_CATEGORIES).with_label("支出"))
}

fn monthly_expense() -> PanelConfig {
    let style = GroupedBarStyle {
        bar_alpha: 0.6,
        bar_percentage: Some(0.7),
        ..GroupedBarStyle::default()
    };
    PanelConfig::grouped_bar(style)
        .with_title("月度支出")
        .with_series(
            SeriesRef::new(names::MONTHLY_EXPENSE)
                .with_label("月度支出")
                .with_color(palette::PURPLE),
        )
}
