//! 统计分析客户端

use super::error::ApiResult;
use super::gateway::ApiGateway;
use solarwatch_shared::protocol::{AnalyticsSummary, AnalyticsTrends};

#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsApi {
    gw: ApiGateway,
}

impl AnalyticsApi {
    pub(super) fn new(gw: ApiGateway) -> Self {
        Self { gw }
    }

    pub async fn summary(&self) -> ApiResult<AnalyticsSummary> {
        self.gw
            .get("/analytics/summary")
            .await
            .map_err(|e| e.context("Failed to fetch analytics summary"))
    }

    /// 最近 N 天的逐日趋势
    pub async fn trends(&self, days: u32) -> ApiResult<AnalyticsTrends> {
        self.gw
            .get(&format!("/analytics/trends?days={}", days))
            .await
            .map_err(|e| e.context("Failed to fetch analytics trends"))
    }
}
