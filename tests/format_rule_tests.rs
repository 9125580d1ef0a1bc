use chart_dashboard::core::{FormatRule, format_axis_tick, format_tooltip_value, tooltip_label};

#[test]
fn currency_tooltip_scales_to_wan_with_two_decimals() {
    assert_eq!(format_tooltip_value(5_853_230.0, FormatRule::Currency), "¥585.32万");
    assert_eq!(format_tooltip_value(427_790.0, FormatRule::Currency), "¥42.78万");
    assert_eq!(format_tooltip_value(9_000.0, FormatRule::Currency), "¥0.90万");
}

#[test]
fn amount_tooltip_switches_unit_at_ten_thousand() {
    assert_eq!(format_tooltip_value(10_000.0, FormatRule::Amount), "¥1.00万");
    assert_eq!(format_tooltip_value(9_999.0, FormatRule::Amount), "9999");
    assert_eq!(format_tooltip_value(0.02, FormatRule::Amount), "0.02");
    assert_eq!(format_tooltip_value(-856_310.0, FormatRule::Amount), "¥-85.63万");
}

#[test]
fn percent_tooltip_uses_fixed_precision() {
    assert_eq!(format_tooltip_value(41.63, FormatRule::percent()), "41.6%");
    assert_eq!(format_tooltip_value(6.3, FormatRule::percent()), "6.3%");
    assert_eq!(
        format_tooltip_value(27.16, FormatRule::Percent { precision: 2 }),
        "27.16%"
    );
}

#[test]
fn plain_tooltip_keeps_number_as_is() {
    assert_eq!(format_tooltip_value(726.0, FormatRule::Plain), "726");
    assert_eq!(format_tooltip_value(1_612_442.0, FormatRule::Plain), "1612442");
}

#[test]
fn axis_ticks_are_coarser_than_tooltips() {
    assert_eq!(format_axis_tick(2_000_000.0, FormatRule::Amount), "200万");
    assert_eq!(format_axis_tick(5_853_230.0, FormatRule::Currency), "585万");
    assert_eq!(format_axis_tick(-600_000.0, FormatRule::Amount), "-60万");
    assert_eq!(format_axis_tick(5_000.0, FormatRule::Amount), "5000");
    assert_eq!(format_axis_tick(25.0, FormatRule::percent()), "25%");
    assert_eq!(format_axis_tick(0.0, FormatRule::Plain), "0");
}

#[test]
fn tooltip_label_prefixes_the_dataset_label() {
    assert_eq!(
        tooltip_label("利润金额", 1_460_299.0, FormatRule::Currency),
        "利润金额: ¥146.03万"
    );
    assert_eq!(tooltip_label("逾期率", 6.3, FormatRule::percent()), "逾期率: 6.3%");
}

#[test]
fn format_rule_serializes_as_tagged_object() {
    let json = serde_json::to_string(&FormatRule::Percent { precision: 1 }).expect("serialize");
    assert_eq!(json, r#"{"kind":"percent","precision":1}"#);
    let parsed: FormatRule = serde_json::from_str(r#"{"kind":"currency"}"#).expect("parse");
    assert_eq!(parsed, FormatRule::Currency);
    assert_eq!(FormatRule::default(), FormatRule::Amount);
}
