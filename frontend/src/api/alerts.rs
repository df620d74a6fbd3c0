//! 告警资源客户端
//!
//! 覆盖告警的查询与处置流程：确认、状态流转、指派、备注。
//! 处置操作的参数按后端约定走查询串，备注走 text/plain 请求体。

use super::error::ApiResult;
use super::gateway::ApiGateway;
use solarwatch_shared::{Alert, AlertStatus, Severity};

#[derive(Clone, Debug, PartialEq)]
pub struct AlertsApi {
    gw: ApiGateway,
}

impl AlertsApi {
    pub(super) fn new(gw: ApiGateway) -> Self {
        Self { gw }
    }

    pub async fn list(&self) -> ApiResult<Vec<Alert>> {
        self.gw
            .get("/alerts")
            .await
            .map_err(|e| e.context("Failed to fetch alerts"))
    }

    #[allow(dead_code)]
    pub async fn unacknowledged(&self) -> ApiResult<Vec<Alert>> {
        self.gw
            .get("/alerts/unacknowledged")
            .await
            .map_err(|e| e.context("Failed to fetch unacknowledged alerts"))
    }

    #[allow(dead_code)]
    pub async fn by_panel(&self, panel_id: i64) -> ApiResult<Vec<Alert>> {
        self.gw
            .get(&format!("/alerts/panel/{}", panel_id))
            .await
            .map_err(|e| e.context("Failed to fetch alerts for panel"))
    }

    #[allow(dead_code)]
    pub async fn by_severity(&self, severity: Severity) -> ApiResult<Vec<Alert>> {
        self.gw
            .get(&format!("/alerts/severity/{}", severity.as_str()))
            .await
            .map_err(|e| e.context("Failed to fetch alerts by severity"))
    }

    #[allow(dead_code)]
    pub async fn by_status(&self, status: AlertStatus) -> ApiResult<Vec<Alert>> {
        self.gw
            .get(&format!("/alerts/status/{}", status.as_str()))
            .await
            .map_err(|e| e.context("Failed to fetch alerts by status"))
    }

    /// 确认告警，返回更新后的完整对象
    pub async fn acknowledge(&self, alert_id: i64, user_id: i64) -> ApiResult<Alert> {
        self.gw
            .post_empty(&format!(
                "/alerts/{}/acknowledge?userId={}",
                alert_id, user_id
            ))
            .await
            .map_err(|e| e.context("Failed to acknowledge alert"))
    }

    /// 状态流转；合法性由按钮可见性约束，客户端不做校验
    pub async fn update_status(
        &self,
        alert_id: i64,
        status: AlertStatus,
        user_id: i64,
    ) -> ApiResult<Alert> {
        self.gw
            .put_empty(&format!(
                "/alerts/{}/status?status={}&userId={}",
                alert_id,
                status.as_str(),
                user_id
            ))
            .await
            .map_err(|e| e.context("Failed to update alert status"))
    }

    #[allow(dead_code)]
    pub async fn assign_technician(&self, alert_id: i64, technician_id: i64) -> ApiResult<Alert> {
        self.gw
            .put_empty(&format!(
                "/alerts/{}/assign?technicianId={}",
                alert_id, technician_id
            ))
            .await
            .map_err(|e| e.context("Failed to assign technician"))
    }

    #[allow(dead_code)]
    pub async fn add_notes(&self, alert_id: i64, notes: &str) -> ApiResult<Alert> {
        self.gw
            .put_text(&format!("/alerts/{}/notes", alert_id), notes)
            .await
            .map_err(|e| e.context("Failed to add notes"))
    }

    #[allow(dead_code)]
    pub async fn unacknowledged_count(&self) -> ApiResult<i64> {
        self.gw
            .get("/alerts/stats/unacknowledged-count")
            .await
            .map_err(|e| e.context("Failed to fetch unacknowledged count"))
    }

    #[allow(dead_code)]
    pub async fn critical_count(&self) -> ApiResult<i64> {
        self.gw
            .get("/alerts/stats/critical-count")
            .await
            .map_err(|e| e.context("Failed to fetch critical count"))
    }
}
