use approx::assert_relative_eq;
use chart_dashboard::core::{CategoryAxis, Derivation, Series, SeriesOrigin, SeriesRegistry};
use chart_dashboard::error::DashboardError;

fn registry_with(entries: &[(&str, &[f64])]) -> SeriesRegistry {
    let len = entries.first().map_or(0, |(_, values)| values.len());
    let axis = CategoryAxis::new((0..len).map(|i| format!("m{i}")));
    let mut registry = SeriesRegistry::new();
    for (name, values) in entries {
        registry
            .register(*name, Series::indexed(axis.clone(), values.to_vec()).expect("series"))
            .expect("register");
    }
    registry
}

#[test]
fn overdue_rate_matches_rounded_percentage() {
    let mut registry = registry_with(&[
        ("overdue", &[0.0, 49797.0, 685629.0]),
        ("receivables", &[800626.0, 793161.0, 5853230.0]),
    ]);
    registry
        .derive(
            "overdue_rate",
            &Derivation::ratio_percent("overdue", "receivables", 1),
        )
        .expect("derive");

    let rate = registry.get("overdue_rate").expect("rate");
    assert_eq!(rate.values(), &[0.0, 6.3, 11.7]);
    assert!(rate.is_derived());
    assert_eq!(
        rate.origin(),
        &SeriesOrigin::Derived {
            inputs: vec!["overdue".to_owned(), "receivables".to_owned()]
        }
    );
    assert_eq!(rate.labels(), registry.get("overdue").expect("overdue").labels());
}

#[test]
fn zero_and_negative_denominators_yield_zero() {
    let mut registry = registry_with(&[("num", &[5.0, 5.0, 5.0]), ("den", &[0.0, -4.0, 4.0])]);
    registry
        .derive("ratio", &Derivation::ratio_percent("num", "den", 2))
        .expect("derive");
    assert_eq!(registry.values("ratio").expect("ratio"), &[0.0, 0.0, 125.0]);
}

#[test]
fn unrounded_ratio_keeps_full_precision() {
    let mut registry = registry_with(&[("num", &[1.0, 2.0]), ("den", &[3.0, 3.0])]);
    registry
        .derive(
            "share",
            &Derivation::Ratio {
                numerator: "num".to_owned(),
                denominator: "den".to_owned(),
                scale: 1.0,
                precision: None,
            },
        )
        .expect("derive");
    let share = registry.values("share").expect("share");
    assert_relative_eq!(share[0], 1.0 / 3.0);
    assert_relative_eq!(share[1], 2.0 / 3.0);
}

#[test]
fn difference_sum_and_running_total() {
    let mut registry = registry_with(&[
        ("receivables", &[10.0, 20.0, 30.0]),
        ("costs", &[1.0, 2.0, 3.0]),
        ("fees", &[0.5, 0.5, 0.5]),
    ]);
    registry
        .derive("margin", &Derivation::difference("receivables", "costs"))
        .expect("difference");
    registry
        .derive("outflow", &Derivation::sum(["costs", "fees"]))
        .expect("sum");
    registry
        .derive("cumulative", &Derivation::cumulative_sum("costs"))
        .expect("cumulative");

    assert_eq!(registry.values("margin").expect("margin"), &[9.0, 18.0, 27.0]);
    assert_eq!(registry.values("outflow").expect("outflow"), &[1.5, 2.5, 3.5]);
    assert_eq!(registry.values("cumulative").expect("cumulative"), &[1.0, 3.0, 6.0]);
}

#[test]
fn missing_input_is_reported_with_both_names() {
    let mut registry = registry_with(&[("overdue", &[1.0])]);
    let err = registry
        .derive(
            "overdue_rate",
            &Derivation::ratio_percent("overdue", "receivables", 1),
        )
        .expect_err("missing input");
    assert_eq!(
        err,
        DashboardError::MissingInput {
            name: "overdue_rate".to_owned(),
            input: "receivables".to_owned(),
        }
    );
    assert!(!registry.contains("overdue_rate"));
}

#[test]
fn categorical_input_is_rejected() {
    let mut registry = registry_with(&[("profit", &[1.0, 2.0])]);
    registry
        .register("stores", Series::categorical([("a", 1.0), ("b", 2.0)]).expect("stores"))
        .expect("register");
    let err = registry
        .derive("bad", &Derivation::difference("profit", "stores"))
        .expect_err("categorical input");
    assert!(matches!(err, DashboardError::InvalidData(_)));
}

#[test]
fn duplicate_derived_name_is_rejected() {
    let mut registry = registry_with(&[("a", &[1.0]), ("b", &[2.0])]);
    let err = registry
        .derive("a", &Derivation::difference("a", "b"))
        .expect_err("duplicate");
    assert!(matches!(err, DashboardError::DuplicateName { .. }));
}

#[test]
fn shorter_later_input_counts_as_absent() {
    let mut registry = SeriesRegistry::new();
    registry
        .register(
            "long",
            Series::indexed(CategoryAxis::new(["a", "b", "c"]), [10.0, 10.0, 10.0]).expect("long"),
        )
        .expect("register");
    registry
        .register(
            "short",
            Series::indexed(CategoryAxis::new(["a", "b"]), [2.0, 5.0]).expect("short"),
        )
        .expect("register");
    registry
        .derive("ratio", &Derivation::ratio_percent("long", "short", 0))
        .expect("ratio");
    registry
        .derive("sum", &Derivation::sum(["long", "short"]))
        .expect("sum");

    assert_eq!(registry.values("ratio").expect("ratio"), &[500.0, 200.0, 0.0]);
    assert_eq!(registry.values("sum").expect("sum"), &[12.0, 15.0, 10.0]);
    assert_eq!(registry.get("sum").expect("sum").len(), 3);
}

#[test]
fn inputs_on_unrelated_axes_are_rejected() {
    let mut registry = SeriesRegistry::new();
    registry
        .register(
            "num",
            Series::indexed(CategoryAxis::new(["2月", "3月"]), [1.0, 2.0]).expect("num"),
        )
        .expect("register");
    registry
        .register(
            "den",
            Series::indexed(CategoryAxis::new(["24/01", "24/02", "24/03"]), [10.0, 10.0, 10.0])
                .expect("den"),
        )
        .expect("register");

    let err = registry
        .derive("rate", &Derivation::ratio_percent("num", "den", 1))
        .expect_err("unrelated axes");
    assert!(matches!(err, DashboardError::InvalidData(_)));
    let err = registry
        .derive_with("custom", &["den", "num"], |row| row[0] + row[1])
        .expect_err("unrelated axes");
    assert!(matches!(err, DashboardError::InvalidData(_)));
    assert!(!registry.contains("rate"));
    assert!(!registry.contains("custom"));
}

#[test]
fn derive_with_replaces_non_finite_results_by_zero() {
    let mut registry = registry_with(&[("num", &[1.0, 4.0]), ("den", &[0.0, 2.0])]);
    registry
        .derive_with("raw_ratio", &["num", "den"], |row| row[0] / row[1])
        .expect("derive_with");
    assert_eq!(registry.values("raw_ratio").expect("raw"), &[0.0, 2.0]);
}

#[test]
fn derive_with_requires_inputs() {
    let mut registry = SeriesRegistry::new();
    let err = registry
        .derive_with("empty", &[], |_| 1.0)
        .expect_err("no inputs");
    assert!(matches!(err, DashboardError::InvalidData(_)));
}

#[test]
fn derivation_round_trips_through_json() {
    let derivation = Derivation::ratio_percent("overdue", "receivables", 1);
    let json = serde_json::to_string(&derivation).expect("serialize");
    assert!(json.contains("\"kind\":\"ratio\""));
    let parsed: Derivation = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed, derivation);
    assert_eq!(parsed.inputs(), vec!["overdue", "receivables"]);
}
