//! 统计分析页面的图表输入派生
//!
//! 把原始计数转换成展示结构（占比条与趋势条），不依赖图表库。
//! 原始数据不动，窗口切换时只重算趋势部分。

use solarwatch_shared::protocol::TrendPoint;
use solarwatch_shared::{FaultType, Severity};
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// 可选的趋势窗口（天）
pub const TREND_WINDOWS: [u32; 3] = [7, 30, 90];

/// 分布图的一个扇区/条目
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSlice {
    pub label: &'static str,
    pub count: i64,
    /// 占比（0..100）
    pub percent: f64,
    /// 样式层使用的颜色值
    pub color: &'static str,
}

fn slices<K: Copy>(
    counts: &BTreeMap<K, i64>,
    label: impl Fn(K) -> &'static str,
    color: impl Fn(K) -> &'static str,
) -> Vec<DistributionSlice> {
    let total: i64 = counts.values().sum();
    counts
        .iter()
        .map(|(key, count)| DistributionSlice {
            label: label(*key),
            count: *count,
            percent: if total > 0 {
                *count as f64 * 100.0 / total as f64
            } else {
                0.0
            },
            color: color(*key),
        })
        .collect()
}

/// 故障类别分布
pub fn fault_distribution(counts: &BTreeMap<FaultType, i64>) -> Vec<DistributionSlice> {
    slices(counts, |fault: FaultType| fault.as_str(), fault_color)
}

/// 严重程度分布
pub fn severity_distribution(counts: &BTreeMap<Severity, i64>) -> Vec<DistributionSlice> {
    slices(
        counts,
        |severity: Severity| severity.as_str(),
        severity_color,
    )
}

/// 趋势折线/柱状输入：每天一个点，带相对高度（0..100）
#[derive(Debug, Clone, PartialEq)]
pub struct TrendBar {
    pub label: String,
    pub count: i64,
    /// 相对最大值的高度百分比
    pub height: f64,
}

pub fn trend_bars(points: &[TrendPoint]) -> Vec<TrendBar> {
    let max = points.iter().map(|p| p.total_count).max().unwrap_or(0);
    points
        .iter()
        .map(|point| TrendBar {
            label: point.date.format("%m-%d").to_string(),
            count: point.total_count,
            height: if max > 0 {
                point.total_count as f64 * 100.0 / max as f64
            } else {
                0.0
            },
        })
        .collect()
}

// 颜色映射沿用既有的严重程度/故障配色

pub fn fault_color(fault: FaultType) -> &'static str {
    match fault {
        FaultType::Normal => "#28a745",
        FaultType::PartialShading => "#ffc107",
        FaultType::PanelDegradation => "#fd7e14",
        FaultType::InverterFault => "#dc3545",
        FaultType::DustAccumulation => "#6c757d",
    }
}

pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::None => "#28a745",
        Severity::Low => "#ffc107",
        Severity::Medium => "#fd7e14",
        Severity::High => "#dc3545",
        Severity::Critical => "#6f42c1",
    }
}
