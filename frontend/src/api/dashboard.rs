//! 总览统计客户端

use super::error::ApiResult;
use super::gateway::ApiGateway;
use solarwatch_shared::protocol::DashboardStats;

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardApi {
    gw: ApiGateway,
}

impl DashboardApi {
    pub(super) fn new(gw: ApiGateway) -> Self {
        Self { gw }
    }

    pub async fn stats(&self) -> ApiResult<DashboardStats> {
        self.gw
            .get("/dashboard/stats")
            .await
            .map_err(|e| e.context("Failed to fetch dashboard stats"))
    }
}
