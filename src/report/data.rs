//! Figures of the 2025 year-end mobile-leasing investor report.
//!
//! All values are precomputed aggregates in yuan unless noted.

use tracing::debug;

use crate::core::{CategoryAxis, Derivation, Series, SeriesRegistry};
use crate::error::DashboardResult;

pub const MONTHS: [&str; 18] = [
    "24/01", "24/02", "24/03", "24/04", "24/05", "24/06", "24/07", "24/08", "24/09", "24/10",
    "24/11", "24/12", "25/01", "25/02", "25/03", "25/04", "25/09", "当前",
];

pub const RECEIVABLES: [f64; 18] = [
    800626.0, 793161.0, 1142292.0, 1714885.0, 2183231.0, 3507317.0, 5019747.0, 5853230.0,
    5711282.0, 5436476.0, 5559407.0, 5348382.0, 5200521.0, 4586267.0, 3992471.0, 3647527.0,
    2273437.0, 2056908.0,
];

/// Net capital still invested; negative once the business has paid it back.
pub const INVESTMENT: [f64; 18] = [
    583143.0, 601811.0, 750122.0, 1113441.0, 1484822.0, 2204088.0, 3202145.0, 3707303.0,
    3309735.0, 3014486.0, 2806621.0, 2634353.0, 2016459.0, 1412205.0, 826605.0, 437198.0,
    -614439.0, -856310.0,
];

pub const COSTS: [f64; 18] = [
    75330.0, 176946.0, 225010.0, 395219.0, 687467.0, 866871.0, 1262963.0, 1637156.0, 1857819.0,
    2191338.0, 2335110.0, 2671996.0, 2671996.0, 2671996.0, 2671996.0, 2528825.0, 2580296.0,
    2439236.0,
];

pub const OVERDUE: [f64; 18] = [
    0.0, 49797.0, 0.0, 27201.0, 46607.0, 104688.0, 391368.0, 685629.0, 759430.0, 1000438.0,
    1019315.0, 1451169.0, 1525081.0, 2172447.0, 2067337.0, 2142722.0, 2460085.0, 2056908.0,
];

pub const PROFIT: [f64; 18] = [
    217484.0, 191350.0, 392171.0, 574243.0, 651803.0, 1198540.0, 1426234.0, 1460299.0,
    1642117.0, 1421552.0, 1733471.0, 1262860.0, 1658981.0, 1001615.0, 1098529.0, 1067607.0,
    427790.0, 856310.0,
];

/// Profit margin in percent.
pub const MARGIN_RATE: [f64; 18] = [
    27.16, 24.13, 34.33, 33.49, 29.85, 34.17, 28.41, 24.95, 28.75, 26.15, 31.18, 23.61, 31.90,
    21.84, 27.52, 29.27, 18.82, 41.63,
];

pub const CUMULATIVE_MONTHS: [&str; 11] = [
    "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
];

pub const CUMULATIVE_COST: [f64; 11] = [
    168816.0, 211330.0, 360389.0, 645137.0, 808061.0, 1173793.0, 1531906.0, 1741889.0,
    2067548.0, 2201180.0, 2562726.0,
];

pub const EXPENSE_CATEGORIES: [(&str, f64); 5] = [
    ("固定支出", 933361.0),
    ("提成", 617157.0),
    ("一次性支出", 319748.0),
    ("风控充值", 53500.0),
    ("资金成本", 120247.0),
];

pub const EXPENSE_MONTHS: [&str; 12] = [
    "24/01", "24/02", "24/03", "24/04", "24/05", "24/06", "24/07", "24/08", "24/09", "24/10",
    "24/11", "24/12",
];

pub const MONTHLY_EXPENSE: [f64; 12] = [
    78813.0, 71994.0, 37494.0, 144888.0, 232944.0, 174506.0, 298870.0, 256570.0, 102050.0,
    296443.0, 129457.0, 220984.0,
];

pub const REVENUE_COMPOSITION: [(&str, f64); 6] = [
    ("租金收入", 10251940.0),
    ("尾款收入", 2407173.0),
    ("增值费", 166612.0),
    ("延保服务", 418858.0),
    ("首付款", 31206.0),
    ("买断金", 16.0),
];

pub const STORES: [&str; 3] = ["涛涛好物", "刚刚好物", "太太租物"];

pub const STORE_RECEIVABLE: [f64; 3] = [1612442.0, 414804.0, 29662.0];

/// Order counts, not amounts.
pub const STORE_ORDERS: [f64; 3] = [726.0, 232.0, 74.0];

/// Stores plus the platform total.
pub const PERFORMANCE_ENTITIES: [&str; 4] = ["涛涛好物", "刚刚好物", "太太租物", "总平台"];

pub const LEASE_PERFORMANCE: [f64; 4] = [3011805.0, 0.0, 105082.0, 3116887.0];

pub const ECOMMERCE_PERFORMANCE: [f64; 4] = [0.0, 1250200.0, 15797.0, 1265996.0];

pub const RADAR_DIMENSIONS: [&str; 5] = ["订单数", "总待收", "租金", "放款", "业绩"];

/// Per-store scores on a 0..100 scale, same order as [`STORES`].
pub const STORE_RADAR: [[f64; 5]; 3] = [
    [100.0, 78.0, 92.0, 71.0, 69.0],
    [32.0, 20.0, 0.02, 23.0, 29.0],
    [10.0, 1.4, 7.6, 6.3, 2.8],
];

/// Registry names used by the report layout.
pub mod names {
    pub const RECEIVABLES: &str = "receivables";
    pub const INVESTMENT: &str = "investment";
    pub const COSTS: &str = "costs";
    pub const OVERDUE: &str = "overdue";
    pub const PROFIT: &str = "profit";
    pub const MARGIN_RATE: &str = "margin_rate";
    pub const OVERDUE_RATE: &str = "overdue_rate";
    pub const CUMULATIVE_COST: &str = "cumulative_cost";
    pub const EXPENSE_CATEGORIES: &str = "expense_categories";
    pub const MONTHLY_EXPENSE: &str = "monthly_expense";
    pub const REVENUE_COMPOSITION: &str = "revenue_composition";
    pub const STORE_RECEIVABLE: &str = "store_receivable";
    pub const STORE_ORDERS: &str = "store_orders";
    pub const LEASE_PERFORMANCE: &str = "lease_performance";
    pub const ECOMMERCE_PERFORMANCE: &str = "ecommerce_performance";
    pub const STORE_RADAR: [&str; 3] = ["radar_taotao", "radar_ganggang", "radar_taitai"];
}

/// Loads every report series, derives the overdue rate and freezes the registry.
pub fn populate_registry() -> DashboardResult<SeriesRegistry> {
    let mut registry = SeriesRegistry::new();

    let months = CategoryAxis::new(MONTHS);
    for (name, values) in [
        (names::RECEIVABLES, RECEIVABLES),
        (names::INVESTMENT, INVESTMENT),
        (names::COSTS, COSTS),
        (names::OVERDUE, OVERDUE),
        (names::PROFIT, PROFIT),
        (names::MARGIN_RATE, MARGIN_RATE),
    ] {
        registry.register(name, Series::indexed(months.clone(), values)?)?;
    }
    registry.derive(
        names::OVERDUE_RATE,
        &Derivation::ratio_percent(names::OVERDUE, names::RECEIVABLES, 1),
    )?;

    registry.register(
        names::CUMULATIVE_COST,
        Series::indexed(CategoryAxis::new(CUMULATIVE_MONTHS), CUMULATIVE_COST)?,
    )?;
    registry.register(
        names::MONTHLY_EXPENSE,
        Series::indexed(CategoryAxis::new(EXPENSE_MONTHS), MONTHLY_EXPENSE)?,
    )?;
    registry.register(
        names::EXPENSE_CATEGORIES,
        Series::categorical(EXPENSE_CATEGORIES)?,
    )?;
    registry.register(
        names::REVENUE_COMPOSITION,
        Series::categorical(REVENUE_COMPOSITION)?,
    )?;
    registry.register(
        names::STORE_RECEIVABLE,
        Series::categorical(STORES.into_iter().zip(STORE_RECEIVABLE))?,
    )?;
    registry.register(
        names::STORE_ORDERS,
        Series::categorical(STORES.into_iter().zip(STORE_ORDERS))?,
    )?;
    registry.register(
        names::LEASE_PERFORMANCE,
        Series::categorical(PERFORMANCE_ENTITIES.into_iter().zip(LEASE_PERFORMANCE))?,
    )?;
    registry.register(
        names::ECOMMERCE_PERFORMANCE,
        Series::categorical(PERFORMANCE_ENTITIES.into_iter().zip(ECOMMERCE_PERFORMANCE))?,
    )?;
    for (name, scores) in names::STORE_RADAR.into_iter().zip(STORE_RADAR) {
        registry.register(
            name,
            Series::categorical(RADAR_DIMENSIONS.into_iter().zip(scores))?,
        )?;
    }

    registry.freeze();
    debug!(series = registry.len(), "report registry populated");
    Ok(registry)
}
