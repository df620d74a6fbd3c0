use super::*;
use crate::api::ApiErrorKind;

#[test]
fn valid_inputs_parse_into_a_reading() {
    let reading = parse_reading("32.5", "8.2", "25.0", "850.0", "266.5").unwrap();
    assert_eq!(reading.voltage, 32.5);
    assert_eq!(reading.power, 266.5);
}

#[test]
fn whitespace_is_tolerated() {
    let reading = parse_reading(" 32.5 ", "8.2", "25", "850", "266.5").unwrap();
    assert_eq!(reading.temperature, 25.0);
}

#[test]
fn first_invalid_field_is_named_in_the_error() {
    // 校验在任何网络调用之前完成，错误必须点名字段
    let err = parse_reading("abc", "8.2", "25", "850", "266.5").unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Validation);
    assert_eq!(err.to_string(), "voltage must be a valid number");

    let err = parse_reading("32.5", "8.2", "25", "", "266.5").unwrap_err();
    assert_eq!(err.to_string(), "irradiance must be a valid number");

    let err = parse_reading("32.5", "8.2", "25", "850", "12watts").unwrap_err();
    assert_eq!(err.to_string(), "power must be a valid number");
}

#[test]
fn non_finite_numbers_are_rejected() {
    let err = parse_reading("NaN", "8.2", "25", "850", "266.5").unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Validation);
    assert!(parse_reading("inf", "8.2", "25", "850", "266.5").is_err());
}

#[test]
fn faulty_sample_triggers_the_degradation_branch() {
    // 示例数据与离线分类器的阈值联动：faulty 组温度超过 40
    let [voltage, current, temperature, irradiance, power] = Sample::Faulty.values();
    assert!(temperature > 40.0);

    let reading = parse_reading(
        &voltage.to_string(),
        &current.to_string(),
        &temperature.to_string(),
        &irradiance.to_string(),
        &power.to_string(),
    )
    .unwrap();
    assert_eq!(reading.voltage, 20.1);
}
