//! 告警页面的派生状态
//!
//! 列表的过滤、排序与统计都是纯函数：同一份输入反复计算得到
//! 同一份输出，重渲染不产生累积效应。

use chrono::NaiveDateTime;
use solarwatch_shared::{Alert, AlertStatus, Severity};

#[cfg(test)]
mod tests;

// =========================================================
// 过滤与排序
// =========================================================

/// 列表过滤条件（严重程度与确认/状态两个维度合并到一个选择器）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertFilter {
    #[default]
    All,
    Unacknowledged,
    Acknowledged,
    Severity(Severity),
    Status(AlertStatus),
}

impl AlertFilter {
    pub fn matches(&self, alert: &Alert) -> bool {
        match self {
            AlertFilter::All => true,
            AlertFilter::Unacknowledged => !alert.acknowledged,
            AlertFilter::Acknowledged => alert.acknowledged,
            AlertFilter::Severity(severity) => alert.severity == *severity,
            AlertFilter::Status(status) => alert.status == *status,
        }
    }

    /// select 控件的取值映射
    pub fn from_value(value: &str) -> Self {
        match value {
            "unacknowledged" => AlertFilter::Unacknowledged,
            "acknowledged" => AlertFilter::Acknowledged,
            "CRITICAL" => AlertFilter::Severity(Severity::Critical),
            "HIGH" => AlertFilter::Severity(Severity::High),
            "MEDIUM" => AlertFilter::Severity(Severity::Medium),
            "LOW" => AlertFilter::Severity(Severity::Low),
            "OPEN" => AlertFilter::Status(AlertStatus::Open),
            "IN_PROGRESS" => AlertFilter::Status(AlertStatus::InProgress),
            "RESOLVED" => AlertFilter::Status(AlertStatus::Resolved),
            _ => AlertFilter::All,
        }
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            AlertFilter::All => "all",
            AlertFilter::Unacknowledged => "unacknowledged",
            AlertFilter::Acknowledged => "acknowledged",
            AlertFilter::Severity(severity) => severity.as_str(),
            AlertFilter::Status(status) => status.as_str(),
        }
    }
}

/// 排序键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertSort {
    /// 创建时间倒序（默认）
    #[default]
    Timestamp,
    /// 严重程度从高到低
    Severity,
    /// 面板编号字典序
    Panel,
    /// 故障类别字典序
    FaultType,
}

impl AlertSort {
    pub fn from_value(value: &str) -> Self {
        match value {
            "severity" => AlertSort::Severity,
            "panel" => AlertSort::Panel,
            "fault_type" => AlertSort::FaultType,
            _ => AlertSort::Timestamp,
        }
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            AlertSort::Timestamp => "timestamp",
            AlertSort::Severity => "severity",
            AlertSort::Panel => "panel",
            AlertSort::FaultType => "fault_type",
        }
    }
}

/// 过滤 + 排序，返回展示用的新列表，原列表不动
pub fn apply(alerts: &[Alert], filter: AlertFilter, sort: AlertSort) -> Vec<Alert> {
    let mut filtered: Vec<Alert> = alerts
        .iter()
        .filter(|alert| filter.matches(alert))
        .cloned()
        .collect();

    match sort {
        AlertSort::Timestamp => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        AlertSort::Severity => filtered.sort_by(|a, b| b.severity.cmp(&a.severity)),
        AlertSort::Panel => filtered.sort_by(|a, b| a.panel_id.cmp(&b.panel_id)),
        AlertSort::FaultType => {
            filtered.sort_by(|a, b| a.fault_type.as_str().cmp(b.fault_type.as_str()))
        }
    }

    filtered
}

// =========================================================
// 统计
// =========================================================

/// 概览卡片的计数，列表变化时整体重算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertStats {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub unacknowledged: usize,
}

impl AlertStats {
    pub fn compute(alerts: &[Alert]) -> Self {
        let mut stats = Self::default();
        for alert in alerts {
            match alert.severity {
                Severity::Critical => stats.critical += 1,
                Severity::High => stats.high += 1,
                Severity::Medium => stats.medium += 1,
                _ => {}
            }
            if !alert.acknowledged {
                stats.unacknowledged += 1;
            }
        }
        stats
    }
}

// =========================================================
// 本地乐观更新
// =========================================================

/// 本地确认：只翻转目标告警的标志并补时间戳，其余条目不动。
/// 返回是否找到了目标。
pub fn acknowledge_local(alerts: &mut [Alert], id: i64, at: NaiveDateTime) -> bool {
    match alerts.iter_mut().find(|alert| alert.id == id) {
        Some(alert) => {
            alert.acknowledge(at);
            true
        }
        None => false,
    }
}

/// 本地状态流转，服务端确认后的响应会整体覆盖
pub fn update_status_local(alerts: &mut [Alert], id: i64, status: AlertStatus) -> bool {
    match alerts.iter_mut().find(|alert| alert.id == id) {
        Some(alert) => {
            alert.status = status;
            true
        }
        None => false,
    }
}
