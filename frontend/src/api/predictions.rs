//! 传感器分析与预测历史客户端

use super::error::ApiResult;
use super::gateway::ApiGateway;
use solarwatch_shared::protocol::{HistoryQuery, HistoryResponse};
use solarwatch_shared::{Prediction, SensorReading};

#[derive(Clone, Debug, PartialEq)]
pub struct PredictionsApi {
    gw: ApiGateway,
}

impl PredictionsApi {
    pub(super) fn new(gw: ApiGateway) -> Self {
        Self { gw }
    }

    /// 提交一次传感器读数做故障分析
    pub async fn analyze(&self, reading: &SensorReading) -> ApiResult<Prediction> {
        self.gw
            .post("/solar-panel/analyze", reading)
            .await
            .map_err(|e| e.context("Analysis failed"))
    }

    /// 历史记录，可分页并按故障类别/严重程度过滤。
    /// 返回的是分页信封还是平铺数组由后端版本决定，见 `HistoryResponse`。
    pub async fn history(&self, query: &HistoryQuery) -> ApiResult<HistoryResponse> {
        self.gw
            .get(&format!(
                "/solar-panel/history?{}",
                query.to_query_string()
            ))
            .await
            .map_err(|e| e.context("Failed to fetch history"))
    }

    #[allow(dead_code)]
    pub async fn recent(&self) -> ApiResult<Vec<Prediction>> {
        self.gw
            .get("/solar-panel/history/recent")
            .await
            .map_err(|e| e.context("Failed to fetch recent history"))
    }

    #[allow(dead_code)]
    pub async fn get(&self, id: i64) -> ApiResult<Prediction> {
        self.gw
            .get(&format!("/solar-panel/history/{}", id))
            .await
            .map_err(|e| e.context("Failed to fetch prediction"))
    }
}
