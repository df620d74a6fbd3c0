use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

use chrono::{NaiveDate, NaiveDateTime};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中保存会话令牌的键
pub const STORAGE_KEY_TOKEN: &str = "token";
/// LocalStorage 中保存序列化用户对象的键
pub const STORAGE_KEY_USER: &str = "user";
/// LocalStorage 中保存主题偏好的键
pub const STORAGE_KEY_THEME: &str = "theme";

pub const HEADER_AUTHORIZATION: &str = "Authorization";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 用户角色，仅用于 UI 可见性控制（非安全边界）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Technician,
    Viewer,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn is_technician(&self) -> bool {
        matches!(self, Role::Technician)
    }

    pub fn is_viewer(&self) -> bool {
        matches!(self, Role::Viewer)
    }

    /// 角色是否在给定集合中
    pub fn is_any_of(&self, roles: &[Role]) -> bool {
        roles.contains(self)
    }

    // --- 能力谓词：每个能力对应一个固定的角色白名单 ---
    // 仅控制菜单与路由的可见性，后端不做对应校验。

    pub fn can_access_analytics(&self) -> bool {
        self.is_any_of(&[Role::Admin])
    }

    pub fn can_access_history(&self) -> bool {
        self.is_any_of(&[Role::Admin])
    }

    pub fn can_analyze(&self) -> bool {
        self.is_any_of(&[Role::Admin, Role::Technician])
    }

    pub fn can_access_panels(&self) -> bool {
        self.is_any_of(&[Role::Admin, Role::Technician])
    }

    pub fn can_access_alerts(&self) -> bool {
        self.is_any_of(&[Role::Admin, Role::Technician])
    }

    pub fn can_access_settings(&self) -> bool {
        self.is_admin()
    }

    pub fn can_access_user_management(&self) -> bool {
        self.is_admin()
    }

    pub fn can_assign_work(&self) -> bool {
        self.is_admin()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Technician => "TECHNICIAN",
            Role::Viewer => "VIEWER",
        }
    }
}

/// 故障严重程度
///
/// 枚举顺序即紧急程度排序：`Critical > High > Medium > Low > None`。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    #[default]
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::None => "NONE",
        }
    }

    /// 所有可用于筛选的严重程度（不含 None）
    pub const FILTERABLE: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];
}

/// 故障类别（与 ML 推理侧的分类标签一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FaultType {
    Normal,
    PartialShading,
    PanelDegradation,
    InverterFault,
    DustAccumulation,
}

impl FaultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultType::Normal => "NORMAL",
            FaultType::PartialShading => "PARTIAL_SHADING",
            FaultType::PanelDegradation => "PANEL_DEGRADATION",
            FaultType::InverterFault => "INVERTER_FAULT",
            FaultType::DustAccumulation => "DUST_ACCUMULATION",
        }
    }

    pub const ALL: [FaultType; 5] = [
        FaultType::Normal,
        FaultType::PartialShading,
        FaultType::PanelDegradation,
        FaultType::InverterFault,
        FaultType::DustAccumulation,
    ];

    /// 真实故障类别（不含 Normal），用于告警合成
    pub const FAULTS: [FaultType; 4] = [
        FaultType::PartialShading,
        FaultType::PanelDegradation,
        FaultType::InverterFault,
        FaultType::DustAccumulation,
    ];
}

/// 告警处理状态，单向流转：Open -> InProgress -> Resolved
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Open => "OPEN",
            AlertStatus::InProgress => "IN_PROGRESS",
            AlertStatus::Resolved => "RESOLVED",
        }
    }

    /// 当前状态允许的下一个状态（UI 据此决定展示哪个操作按钮）
    pub fn next(&self) -> Option<AlertStatus> {
        match self {
            AlertStatus::Open => Some(AlertStatus::InProgress),
            AlertStatus::InProgress => Some(AlertStatus::Resolved),
            AlertStatus::Resolved => None,
        }
    }
}

/// 预测置信度档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    High,
    #[default]
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "HIGH",
            ConfidenceLevel::Medium => "MEDIUM",
            ConfidenceLevel::Low => "LOW",
        }
    }
}

/// 面板运行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PanelStatus {
    #[default]
    Active,
    Maintenance,
    Offline,
}

impl PanelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelStatus::Active => "ACTIVE",
            PanelStatus::Maintenance => "MAINTENANCE",
            PanelStatus::Offline => "OFFLINE",
        }
    }

    pub const ALL: [PanelStatus; 3] = [
        PanelStatus::Active,
        PanelStatus::Maintenance,
        PanelStatus::Offline,
    ];
}

/// 电站：一组面板的站点聚合
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: i64,
    pub name: String,
    pub location: String,
    #[serde(rename = "capacityKW")]
    pub capacity_kw: f64,
    pub created_at: Option<NaiveDateTime>,
    pub panel_count: Option<i64>,
}

/// 单块光伏面板
///
/// `panel_id` 是人工编号（系统内唯一），`id` 是后端主键。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub id: i64,
    pub panel_id: String,
    pub plant_id: i64,
    pub plant_name: Option<String>,
    pub installation_date: Option<NaiveDate>,
    /// 额定功率 (W)
    pub capacity: f64,
    pub status: PanelStatus,
    pub assigned_technician_id: Option<i64>,
}

/// 由故障预测派生的告警，带确认与处理流程
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: i64,
    pub panel_id: String,
    pub fault_type: FaultType,
    pub severity: Severity,
    pub message: String,
    pub confidence: ConfidenceLevel,
    pub confidence_score: f64,
    pub status: AlertStatus,
    pub created_at: NaiveDateTime,
    pub resolved_at: Option<NaiveDateTime>,
    pub acknowledged: bool,
    pub acknowledged_at: Option<NaiveDateTime>,
    pub acknowledged_by: Option<i64>,
    pub assigned_technician_id: Option<i64>,
    pub technician_notes: Option<String>,
}

impl Alert {
    /// 本地确认：同时设置标志与时间戳，保证二者一致
    pub fn acknowledge(&mut self, at: NaiveDateTime) {
        self.acknowledged = true;
        self.acknowledged_at = Some(at);
    }
}

/// 一次传感器读数（分析请求的输入）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub voltage: f64,
    pub current: f64,
    pub temperature: f64,
    pub irradiance: f64,
    pub power: f64,
}

/// 一条故障分类结果（历史记录中的一项）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub id: Option<i64>,
    pub predicted_fault: FaultType,
    pub confidence: ConfidenceLevel,
    pub confidence_score: f64,
    pub severity: Severity,
    pub description: Option<String>,
    pub maintenance_recommendation: Option<String>,
    pub input_values: Option<SensorReading>,
    /// 各故障类别的概率分布，合计应约等于 1
    pub all_probabilities: std::collections::BTreeMap<FaultType, f64>,
    pub timestamp: Option<NaiveDateTime>,
}

/// 当前登录用户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: Option<String>,
    pub role: Role,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// 显示名：优先姓名，否则用户名
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            _ => self.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_ordered_by_urgency() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
        assert!(Severity::Low > Severity::None);
    }

    #[test]
    fn alert_status_flows_forward_only() {
        assert_eq!(AlertStatus::Open.next(), Some(AlertStatus::InProgress));
        assert_eq!(AlertStatus::InProgress.next(), Some(AlertStatus::Resolved));
        assert_eq!(AlertStatus::Resolved.next(), None);
    }

    #[test]
    fn settings_is_admin_only() {
        assert!(Role::Admin.can_access_settings());
        assert!(!Role::Technician.can_access_settings());
        assert!(!Role::Viewer.can_access_settings());
    }

    #[test]
    fn panels_and_alerts_exclude_viewer() {
        for role in [Role::Admin, Role::Technician] {
            assert!(role.can_access_panels());
            assert!(role.can_access_alerts());
        }
        assert!(!Role::Viewer.can_access_panels());
        assert!(!Role::Viewer.can_access_alerts());
    }

    #[test]
    fn analytics_and_history_are_admin_only() {
        assert!(Role::Admin.can_access_analytics());
        assert!(Role::Admin.can_access_history());
        for role in [Role::Technician, Role::Viewer] {
            assert!(!role.can_access_analytics());
            assert!(!role.can_access_history());
        }
    }

    #[test]
    fn acknowledge_sets_flag_and_timestamp_together() {
        let mut alert = Alert {
            id: 1,
            panel_id: "P001".to_string(),
            fault_type: FaultType::InverterFault,
            severity: Severity::Critical,
            message: "test".to_string(),
            confidence: ConfidenceLevel::High,
            confidence_score: 0.9,
            status: AlertStatus::Open,
            created_at: date::from_unix_millis(1_700_000_000_000),
            resolved_at: None,
            acknowledged: false,
            acknowledged_at: None,
            acknowledged_by: None,
            assigned_technician_id: None,
            technician_notes: None,
        };

        let at = date::from_unix_millis(1_700_000_100_000);
        alert.acknowledge(at);
        assert!(alert.acknowledged);
        assert_eq!(alert.acknowledged_at, Some(at));
    }
}
