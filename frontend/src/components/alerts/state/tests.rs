use super::*;
use solarwatch_shared::date::from_unix_millis;
use solarwatch_shared::{ConfidenceLevel, FaultType};

fn alert(id: i64, severity: Severity, acknowledged: bool, created_ms: i64) -> Alert {
    Alert {
        id,
        panel_id: format!("P{:03}", id),
        fault_type: FaultType::InverterFault,
        severity,
        message: "test".to_string(),
        confidence: ConfidenceLevel::Medium,
        confidence_score: 0.7,
        status: AlertStatus::Open,
        created_at: from_unix_millis(created_ms),
        resolved_at: None,
        acknowledged,
        acknowledged_at: acknowledged.then(|| from_unix_millis(created_ms)),
        acknowledged_by: None,
        assigned_technician_id: None,
        technician_notes: None,
    }
}

fn sample() -> Vec<Alert> {
    vec![
        alert(1, Severity::Critical, false, 3_000),
        alert(2, Severity::High, true, 1_000),
        alert(3, Severity::Medium, false, 2_000),
        alert(4, Severity::Critical, true, 4_000),
        alert(5, Severity::Low, false, 5_000),
    ]
}

// =========================================================
// 统计
// =========================================================

#[test]
fn stats_equal_direct_predicate_counts() {
    let alerts = sample();
    let stats = AlertStats::compute(&alerts);

    assert_eq!(
        stats.critical,
        alerts
            .iter()
            .filter(|a| a.severity == Severity::Critical)
            .count()
    );
    assert_eq!(
        stats.high,
        alerts.iter().filter(|a| a.severity == Severity::High).count()
    );
    assert_eq!(
        stats.medium,
        alerts
            .iter()
            .filter(|a| a.severity == Severity::Medium)
            .count()
    );
    assert_eq!(
        stats.unacknowledged,
        alerts.iter().filter(|a| !a.acknowledged).count()
    );
}

#[test]
fn stats_recomputation_is_idempotent() {
    let alerts = sample();
    // 同一份数据重复计算（模拟重渲染），结果不变
    assert_eq!(AlertStats::compute(&alerts), AlertStats::compute(&alerts));
}

// =========================================================
// 过滤与排序
// =========================================================

#[test]
fn unacknowledged_filter_keeps_only_pending_alerts() {
    let filtered = apply(&sample(), AlertFilter::Unacknowledged, AlertSort::Timestamp);
    assert_eq!(filtered.len(), 3);
    assert!(filtered.iter().all(|a| !a.acknowledged));
}

#[test]
fn severity_filter_matches_exactly() {
    let filtered = apply(
        &sample(),
        AlertFilter::Severity(Severity::Critical),
        AlertSort::Timestamp,
    );
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|a| a.severity == Severity::Critical));
}

#[test]
fn timestamp_sort_is_newest_first() {
    let sorted = apply(&sample(), AlertFilter::All, AlertSort::Timestamp);
    let ids: Vec<i64> = sorted.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![5, 4, 1, 3, 2]);
}

#[test]
fn severity_sort_is_most_urgent_first() {
    let sorted = apply(&sample(), AlertFilter::All, AlertSort::Severity);
    let severities: Vec<Severity> = sorted.iter().map(|a| a.severity).collect();
    let mut expected = severities.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(severities, expected);
    assert_eq!(severities[0], Severity::Critical);
}

#[test]
fn apply_does_not_mutate_input() {
    let alerts = sample();
    let before = alerts.clone();
    let _ = apply(&alerts, AlertFilter::Unacknowledged, AlertSort::Severity);
    assert_eq!(alerts, before);
}

#[test]
fn filter_values_round_trip_through_select() {
    for filter in [
        AlertFilter::All,
        AlertFilter::Unacknowledged,
        AlertFilter::Acknowledged,
        AlertFilter::Severity(Severity::High),
        AlertFilter::Status(AlertStatus::InProgress),
    ] {
        assert_eq!(AlertFilter::from_value(filter.as_value()), filter);
    }
}

// =========================================================
// 本地乐观更新
// =========================================================

#[test]
fn acknowledge_touches_only_the_target() {
    let mut alerts = sample();
    let at = from_unix_millis(10_000);

    assert!(acknowledge_local(&mut alerts, 3, at));

    let target = alerts.iter().find(|a| a.id == 3).unwrap();
    assert!(target.acknowledged);
    assert_eq!(target.acknowledged_at, Some(at));

    // 其余条目保持原样
    for alert in alerts.iter().filter(|a| a.id != 3) {
        let untouched = sample().into_iter().find(|o| o.id == alert.id).unwrap();
        assert_eq!(*alert, untouched);
    }
}

#[test]
fn acknowledge_missing_id_changes_nothing() {
    let mut alerts = sample();
    let before = alerts.clone();
    assert!(!acknowledge_local(&mut alerts, 999, from_unix_millis(0)));
    assert_eq!(alerts, before);
}

#[test]
fn status_update_moves_single_alert_forward() {
    let mut alerts = sample();
    assert!(update_status_local(&mut alerts, 1, AlertStatus::InProgress));
    assert_eq!(
        alerts.iter().find(|a| a.id == 1).unwrap().status,
        AlertStatus::InProgress
    );
    assert!(alerts
        .iter()
        .filter(|a| a.id != 1)
        .all(|a| a.status == AlertStatus::Open));
}
