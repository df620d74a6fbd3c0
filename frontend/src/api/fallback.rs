//! 合成数据源模块
//!
//! 后端不可用时页面不应退化为空白或报错，而是切换到本地合成数据
//! 保持可演示。该行为是产品决策，不是错误处理的副作用，所以这里
//! 把"数据来源"做成显式抽象：`AlertSource` 有实时与合成两个实现，
//! 由页面在失败时显式切换并记录日志。
//!
//! 传感器分析的降级走同一条路：`classify` 是一个确定性的阈值
//! 规则分类器，阈值与概率分布表是固定的。

use super::alerts::AlertsApi;
use super::error::ApiResult;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use solarwatch_shared::date::{MILLIS_PER_DAY, from_unix_millis, to_unix_millis};
use solarwatch_shared::{
    Alert, AlertStatus, ConfidenceLevel, FaultType, Prediction, SensorReading, Severity,
};
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

// =========================================================
// 数据来源抽象 (Data Source Seam)
// =========================================================

/// 告警数据来源
///
/// 实时实现包装资源客户端；合成实现完全本地生成。
/// 页面持有两者，失败时切换，不在 catch 分支里偷偷造数据。
#[async_trait(?Send)]
pub trait AlertSource {
    async fn fetch(&self) -> ApiResult<Vec<Alert>>;

    /// 是否为合成数据（UI 据此展示降级提示）
    fn is_synthetic(&self) -> bool;
}

/// 实时数据源：直接转发资源客户端
pub struct LiveAlerts {
    api: AlertsApi,
}

impl LiveAlerts {
    pub fn new(api: AlertsApi) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl AlertSource for LiveAlerts {
    async fn fetch(&self) -> ApiResult<Vec<Alert>> {
        self.api.list().await
    }

    fn is_synthetic(&self) -> bool {
        false
    }
}

/// 合成数据源：本地伪随机生成一组貌似合理的告警
pub struct SyntheticAlerts {
    seed: u64,
    now_ms: i64,
    count: usize,
}

impl SyntheticAlerts {
    pub fn new(seed: u64, now_ms: i64) -> Self {
        Self {
            seed,
            now_ms,
            count: 10,
        }
    }
}

#[async_trait(?Send)]
impl AlertSource for SyntheticAlerts {
    async fn fetch(&self) -> ApiResult<Vec<Alert>> {
        Ok(synthetic_alerts(
            self.count,
            self.seed,
            from_unix_millis(self.now_ms),
        ))
    }

    fn is_synthetic(&self) -> bool {
        true
    }
}

// =========================================================
// 伪随机数发生器
// =========================================================

/// 线性同余发生器
///
/// 只求"看起来随机"且可复现，不用于任何安全场景。
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        // 避免零种子退化
        Self(seed | 1)
    }

    fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    /// [0, n) 区间的取值
    fn below(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }
}

// =========================================================
// 合成告警
// =========================================================

const SYNTHETIC_SEVERITIES: [Severity; 3] = [Severity::Critical, Severity::High, Severity::Medium];
const SYNTHETIC_CONFIDENCE: [ConfidenceLevel; 3] = [
    ConfidenceLevel::High,
    ConfidenceLevel::Medium,
    ConfidenceLevel::Low,
];

/// 生成一组合成告警
///
/// 同一 `seed` 与 `now` 下输出完全确定。时间戳落在过去 24 小时内，
/// 约三成已确认（确认标志与时间戳同时给出）。
pub fn synthetic_alerts(count: usize, seed: u64, now: NaiveDateTime) -> Vec<Alert> {
    let mut rng = Lcg::new(seed);
    let now_ms = to_unix_millis(&now);

    (0..count)
        .map(|index| {
            let fault_type = FaultType::FAULTS[rng.below(4) as usize];
            let severity = SYNTHETIC_SEVERITIES[rng.below(3) as usize];
            let created_at =
                from_unix_millis(now_ms - rng.below(MILLIS_PER_DAY as u32) as i64);
            let acknowledged = rng.below(10) < 3;

            Alert {
                id: (index + 1) as i64,
                panel_id: format!("P{:03}", (index % 24) + 1),
                fault_type,
                severity,
                message: alert_message(fault_type, severity).to_string(),
                confidence: SYNTHETIC_CONFIDENCE[rng.below(3) as usize],
                confidence_score: 0.60 + rng.below(40) as f64 / 100.0,
                status: AlertStatus::Open,
                created_at,
                resolved_at: None,
                acknowledged,
                acknowledged_at: acknowledged.then_some(now),
                acknowledged_by: None,
                assigned_technician_id: None,
                technician_notes: None,
            }
        })
        .collect()
}

/// 故障类别 × 严重程度的提示文案表
pub fn alert_message(fault_type: FaultType, severity: Severity) -> &'static str {
    match (fault_type, severity) {
        (FaultType::InverterFault, Severity::Critical) => {
            "Inverter failure detected - immediate attention required"
        }
        (FaultType::InverterFault, Severity::High) => {
            "Inverter performance degraded - maintenance recommended"
        }
        (FaultType::InverterFault, _) => "Inverter anomaly detected - monitor closely",
        (FaultType::PartialShading, Severity::Critical) => {
            "Severe shading affecting power output"
        }
        (FaultType::PartialShading, Severity::High) => "Significant shading detected",
        (FaultType::PartialShading, _) => "Partial shading observed",
        (FaultType::PanelDegradation, Severity::Critical) => {
            "Critical panel degradation - replacement needed"
        }
        (FaultType::PanelDegradation, Severity::High) => {
            "Significant panel degradation detected"
        }
        (FaultType::PanelDegradation, _) => "Panel performance decline observed",
        (FaultType::DustAccumulation, Severity::Critical) => {
            "Heavy dust accumulation - cleaning required"
        }
        (FaultType::DustAccumulation, Severity::High) => "Dust buildup affecting efficiency",
        (FaultType::DustAccumulation, _) => "Dust accumulation detected",
        (FaultType::Normal, _) => "System anomaly detected",
    }
}

// =========================================================
// 规则分类器 (Offline Classifier)
// =========================================================

/// 离线规则分类器
///
/// 阈值判定顺序即优先级：
/// 1. temperature > 40            -> PANEL_DEGRADATION / HIGH
/// 2. irradiance > 700 且功率低于
///    voltage * current * 0.7     -> PARTIAL_SHADING / MEDIUM
/// 3. voltage < 25 或 current < 5 -> INVERTER_FAULT / CRITICAL
/// 4. 其余                        -> NORMAL / LOW
///
/// 每个分支带固定的概率分布表，合计为 1。
pub fn classify(reading: &SensorReading, now: NaiveDateTime) -> Prediction {
    let SensorReading {
        voltage,
        current,
        temperature,
        irradiance,
        power,
    } = *reading;

    let (fault, severity, confidence, score, description, recommendation, table) =
        if temperature > 40.0 {
            (
                FaultType::PanelDegradation,
                Severity::High,
                ConfidenceLevel::High,
                0.92,
                "High temperature detected, indicating potential panel degradation.",
                "Inspect panel for physical damage and ensure proper ventilation.",
                [
                    (FaultType::PanelDegradation, 0.92),
                    (FaultType::Normal, 0.03),
                    (FaultType::PartialShading, 0.02),
                    (FaultType::InverterFault, 0.02),
                    (FaultType::DustAccumulation, 0.01),
                ],
            )
        } else if irradiance > 700.0 && power < voltage * current * 0.7 {
            (
                FaultType::PartialShading,
                Severity::Medium,
                ConfidenceLevel::Medium,
                0.78,
                "Power output lower than expected for given irradiance levels.",
                "Check for obstructions causing shading on the panel.",
                [
                    (FaultType::PartialShading, 0.78),
                    (FaultType::Normal, 0.10),
                    (FaultType::DustAccumulation, 0.08),
                    (FaultType::PanelDegradation, 0.02),
                    (FaultType::InverterFault, 0.02),
                ],
            )
        } else if voltage < 25.0 || current < 5.0 {
            (
                FaultType::InverterFault,
                Severity::Critical,
                ConfidenceLevel::High,
                0.89,
                "Low voltage or current readings indicate potential inverter issues.",
                "Immediate inspection of inverter and electrical connections required.",
                [
                    (FaultType::InverterFault, 0.89),
                    (FaultType::Normal, 0.05),
                    (FaultType::PanelDegradation, 0.03),
                    (FaultType::PartialShading, 0.02),
                    (FaultType::DustAccumulation, 0.01),
                ],
            )
        } else {
            (
                FaultType::Normal,
                Severity::Low,
                ConfidenceLevel::High,
                0.85,
                "Panel operating within normal parameters.",
                "Continue regular monitoring.",
                [
                    (FaultType::Normal, 0.85),
                    (FaultType::PartialShading, 0.05),
                    (FaultType::PanelDegradation, 0.03),
                    (FaultType::InverterFault, 0.04),
                    (FaultType::DustAccumulation, 0.03),
                ],
            )
        };

    Prediction {
        id: None,
        predicted_fault: fault,
        confidence,
        confidence_score: score,
        severity,
        description: Some(description.to_string()),
        maintenance_recommendation: Some(recommendation.to_string()),
        input_values: Some(*reading),
        all_probabilities: BTreeMap::from(table),
        timestamp: Some(now),
    }
}
