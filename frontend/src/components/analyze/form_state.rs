//! 传感器分析表单状态
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有与重置
//! - 字段级数值校验（任何网络调用之前完成）
//! - 示例数据的填充

use crate::api::{ApiError, ApiResult};
use leptos::prelude::*;
use solarwatch_shared::SensorReading;

#[cfg(test)]
mod tests;

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub voltage: RwSignal<String>,
    pub current: RwSignal<String>,
    pub temperature: RwSignal<String>,
    pub irradiance: RwSignal<String>,
    pub power: RwSignal<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            voltage: RwSignal::new(String::new()),
            current: RwSignal::new(String::new()),
            temperature: RwSignal::new(String::new()),
            irradiance: RwSignal::new(String::new()),
            power: RwSignal::new(String::new()),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.voltage.set(String::new());
        self.current.set(String::new());
        self.temperature.set(String::new());
        self.irradiance.set(String::new());
        self.power.set(String::new());
    }

    /// 填充示例数据
    pub fn load_sample(&self, sample: Sample) {
        let [voltage, current, temperature, irradiance, power] = sample.values();
        self.voltage.set(voltage.to_string());
        self.current.set(current.to_string());
        self.temperature.set(temperature.to_string());
        self.irradiance.set(irradiance.to_string());
        self.power.set(power.to_string());
    }

    /// 校验并转换为请求对象；任何字段不可解析即失败
    pub fn to_reading(&self) -> ApiResult<SensorReading> {
        parse_reading(
            &self.voltage.get_untracked(),
            &self.current.get_untracked(),
            &self.temperature.get_untracked(),
            &self.irradiance.get_untracked(),
            &self.power.get_untracked(),
        )
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================
// 校验（纯函数部分）
// =========================================================

/// 单字段解析：失败时错误消息点名该字段
fn parse_field(name: &str, value: &str) -> ApiResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ApiError::validation(format!("{} must be a valid number", name)))
}

/// 五个字段全部可解析才构造读数，校验顺序固定
pub fn parse_reading(
    voltage: &str,
    current: &str,
    temperature: &str,
    irradiance: &str,
    power: &str,
) -> ApiResult<SensorReading> {
    Ok(SensorReading {
        voltage: parse_field("voltage", voltage)?,
        current: parse_field("current", current)?,
        temperature: parse_field("temperature", temperature)?,
        irradiance: parse_field("irradiance", irradiance)?,
        power: parse_field("power", power)?,
    })
}

// =========================================================
// 示例数据
// =========================================================

/// 表单下方的三组示例读数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Normal,
    Shaded,
    Faulty,
}

impl Sample {
    /// [voltage, current, temperature, irradiance, power]
    pub fn values(&self) -> [f64; 5] {
        match self {
            Sample::Normal => [32.5, 8.2, 25.0, 850.0, 266.5],
            Sample::Shaded => [27.5, 4.2, 23.0, 550.0, 115.5],
            Sample::Faulty => [20.1, 7.3, 42.0, 820.0, 146.7],
        }
    }
}
