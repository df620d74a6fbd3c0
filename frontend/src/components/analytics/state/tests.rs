use super::*;
use chrono::NaiveDate;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
}

#[test]
fn distribution_percentages_sum_to_hundred() {
    let counts = BTreeMap::from([
        (FaultType::Normal, 60_i64),
        (FaultType::InverterFault, 25),
        (FaultType::PartialShading, 15),
    ]);

    let slices = fault_distribution(&counts);
    let total: f64 = slices.iter().map(|s| s.percent).sum();
    assert!((total - 100.0).abs() < 1e-9);

    let normal = slices.iter().find(|s| s.label == "NORMAL").unwrap();
    assert_eq!(normal.count, 60);
    assert!((normal.percent - 60.0).abs() < 1e-9);
    assert_eq!(normal.color, "#28a745");
}

#[test]
fn empty_counts_produce_zero_percentages() {
    let counts = BTreeMap::from([(Severity::Critical, 0_i64), (Severity::Low, 0)]);
    let slices = severity_distribution(&counts);
    assert!(slices.iter().all(|s| s.percent == 0.0));
}

#[test]
fn trend_bars_scale_to_the_maximum() {
    let points = vec![
        TrendPoint {
            date: date(1),
            total_count: 5,
            fault_type_counts: BTreeMap::new(),
            severity_counts: BTreeMap::new(),
        },
        TrendPoint {
            date: date(2),
            total_count: 10,
            fault_type_counts: BTreeMap::new(),
            severity_counts: BTreeMap::new(),
        },
        TrendPoint {
            date: date(3),
            total_count: 0,
            fault_type_counts: BTreeMap::new(),
            severity_counts: BTreeMap::new(),
        },
    ];

    let bars = trend_bars(&points);
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].height, 50.0);
    assert_eq!(bars[1].height, 100.0);
    assert_eq!(bars[2].height, 0.0);
    assert_eq!(bars[0].label, "08-01");
}

#[test]
fn trend_bars_handle_empty_series() {
    assert!(trend_bars(&[]).is_empty());
}

#[test]
fn every_fault_and_severity_has_a_color() {
    for fault in FaultType::ALL {
        assert!(fault_color(fault).starts_with('#'));
    }
    for severity in [
        Severity::None,
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ] {
        assert!(severity_color(severity).starts_with('#'));
    }
}
