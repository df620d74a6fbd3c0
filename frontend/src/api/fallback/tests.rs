use super::*;

fn reading(voltage: f64, current: f64, temperature: f64, irradiance: f64, power: f64) -> SensorReading {
    SensorReading {
        voltage,
        current,
        temperature,
        irradiance,
        power,
    }
}

fn now() -> NaiveDateTime {
    from_unix_millis(1_700_000_000_000)
}

// =========================================================
// 规则分类器测试
// =========================================================

#[test]
fn high_temperature_wins_over_other_rules() {
    // 该组读数同时满足高温与低压条件，高温分支优先
    let prediction = classify(&reading(20.1, 7.3, 42.0, 820.0, 146.7), now());
    assert_eq!(prediction.predicted_fault, FaultType::PanelDegradation);
    assert_eq!(prediction.severity, Severity::High);
    assert_eq!(prediction.confidence_score, 0.92);
}

#[test]
fn low_power_under_strong_irradiance_means_shading() {
    // 850 W/m² 下功率远低于 voltage * current * 0.7
    let prediction = classify(&reading(30.0, 8.0, 25.0, 850.0, 100.0), now());
    assert_eq!(prediction.predicted_fault, FaultType::PartialShading);
    assert_eq!(prediction.severity, Severity::Medium);
    assert_eq!(prediction.confidence, ConfidenceLevel::Medium);
}

#[test]
fn low_electrical_readings_mean_inverter_fault() {
    let prediction = classify(&reading(20.0, 7.0, 25.0, 500.0, 120.0), now());
    assert_eq!(prediction.predicted_fault, FaultType::InverterFault);
    assert_eq!(prediction.severity, Severity::Critical);

    // 电流过低同样触发
    let prediction = classify(&reading(32.0, 4.0, 25.0, 500.0, 120.0), now());
    assert_eq!(prediction.predicted_fault, FaultType::InverterFault);
}

#[test]
fn healthy_readings_classify_as_normal() {
    let prediction = classify(&reading(32.5, 8.2, 25.0, 850.0, 266.5), now());
    assert_eq!(prediction.predicted_fault, FaultType::Normal);
    assert_eq!(prediction.severity, Severity::Low);
    assert_eq!(prediction.confidence_score, 0.85);
}

#[test]
fn probabilities_sum_to_one_on_every_branch() {
    let cases = [
        reading(32.5, 8.2, 25.0, 850.0, 266.5),
        reading(30.0, 8.0, 25.0, 850.0, 100.0),
        reading(20.0, 7.0, 25.0, 500.0, 120.0),
        reading(20.1, 7.3, 42.0, 820.0, 146.7),
    ];
    for case in &cases {
        let prediction = classify(case, now());
        let total: f64 = prediction.all_probabilities.values().sum();
        assert!(
            (total - 1.0).abs() <= 0.01,
            "probabilities sum to {} for {:?}",
            total,
            prediction.predicted_fault
        );
        assert_eq!(prediction.all_probabilities.len(), FaultType::ALL.len());
    }
}

#[test]
fn classifier_echoes_input_and_timestamp() {
    let input = reading(32.5, 8.2, 25.0, 850.0, 266.5);
    let prediction = classify(&input, now());
    assert_eq!(prediction.input_values, Some(input));
    assert_eq!(prediction.timestamp, Some(now()));
    assert!(prediction.maintenance_recommendation.is_some());
}

// =========================================================
// 合成告警测试
// =========================================================

#[test]
fn synthetic_alerts_are_deterministic_per_seed() {
    let first = synthetic_alerts(10, 42, now());
    let second = synthetic_alerts(10, 42, now());
    assert_eq!(first, second);

    let other = synthetic_alerts(10, 43, now());
    assert_ne!(first, other);
}

#[test]
fn synthetic_alerts_draw_from_fixed_enumerations() {
    for alert in synthetic_alerts(50, 7, now()) {
        assert!(SYNTHETIC_SEVERITIES.contains(&alert.severity));
        assert!(FaultType::FAULTS.contains(&alert.fault_type));
        assert!(alert.panel_id.starts_with('P') && alert.panel_id.len() == 4);
        assert!(alert.created_at <= now());
        assert_eq!(alert.message, alert_message(alert.fault_type, alert.severity));
    }
}

#[test]
fn synthetic_acknowledgement_always_carries_timestamp() {
    let alerts = synthetic_alerts(100, 99, now());
    assert!(alerts.iter().any(|a| a.acknowledged));
    assert!(alerts.iter().any(|a| !a.acknowledged));
    for alert in alerts {
        assert_eq!(alert.acknowledged, alert.acknowledged_at.is_some());
    }
}

#[test]
fn synthetic_timestamps_stay_within_a_day() {
    let now = now();
    for alert in synthetic_alerts(50, 3, now) {
        let age = to_unix_millis(&now) - to_unix_millis(&alert.created_at);
        assert!((0..MILLIS_PER_DAY).contains(&age));
    }
}
