//! 面板资源客户端
//!
//! 创建时使用人工编号 `panel_id` 加电站引用，其余操作都按后端主键。

use super::error::ApiResult;
use super::gateway::ApiGateway;
use solarwatch_shared::Panel;
use solarwatch_shared::protocol::PanelRequest;

#[derive(Clone, Debug, PartialEq)]
pub struct PanelsApi {
    gw: ApiGateway,
}

impl PanelsApi {
    pub(super) fn new(gw: ApiGateway) -> Self {
        Self { gw }
    }

    pub async fn list(&self) -> ApiResult<Vec<Panel>> {
        self.gw
            .get("/panels")
            .await
            .map_err(|e| e.context("Failed to fetch panels"))
    }

    #[allow(dead_code)]
    pub async fn get(&self, id: i64) -> ApiResult<Panel> {
        self.gw
            .get(&format!("/panels/{}", id))
            .await
            .map_err(|e| e.context("Failed to fetch panel"))
    }

    /// 按电站过滤的面板列表
    pub async fn by_plant(&self, plant_id: i64) -> ApiResult<Vec<Panel>> {
        self.gw
            .get(&format!("/panels/plant/{}", plant_id))
            .await
            .map_err(|e| e.context("Failed to fetch panels"))
    }

    pub async fn create(&self, request: &PanelRequest) -> ApiResult<Panel> {
        self.gw
            .post("/panels", request)
            .await
            .map_err(|e| e.context("Failed to create panel"))
    }

    pub async fn update(&self, id: i64, request: &PanelRequest) -> ApiResult<Panel> {
        self.gw
            .put(&format!("/panels/{}", id), request)
            .await
            .map_err(|e| e.context("Failed to update panel"))
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.gw
            .delete(&format!("/panels/{}", id))
            .await
            .map_err(|e| e.context("Failed to delete panel"))
    }
}
