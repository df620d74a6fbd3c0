//! 电站资源客户端

use super::error::ApiResult;
use super::gateway::ApiGateway;
use solarwatch_shared::Plant;
use solarwatch_shared::protocol::PlantRequest;

#[derive(Clone, Debug, PartialEq)]
pub struct PlantsApi {
    gw: ApiGateway,
}

impl PlantsApi {
    pub(super) fn new(gw: ApiGateway) -> Self {
        Self { gw }
    }

    /// 获取全部电站
    pub async fn list(&self) -> ApiResult<Vec<Plant>> {
        self.gw
            .get("/plants")
            .await
            .map_err(|e| e.context("Failed to fetch plants"))
    }

    #[allow(dead_code)]
    pub async fn get(&self, id: i64) -> ApiResult<Plant> {
        self.gw
            .get(&format!("/plants/{}", id))
            .await
            .map_err(|e| e.context("Failed to fetch plant"))
    }

    pub async fn create(&self, request: &PlantRequest) -> ApiResult<Plant> {
        self.gw
            .post("/plants", request)
            .await
            .map_err(|e| e.context("Failed to create plant"))
    }

    pub async fn update(&self, id: i64, request: &PlantRequest) -> ApiResult<Plant> {
        self.gw
            .put(&format!("/plants/{}", id), request)
            .await
            .map_err(|e| e.context("Failed to update plant"))
    }

    /// 删除电站（后端级联删除所属面板）
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.gw
            .delete(&format!("/plants/{}", id))
            .await
            .map_err(|e| e.context("Failed to delete plant"))
    }
}
