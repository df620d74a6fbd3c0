//! API 客户端聚合模块
//!
//! 每个后端资源一个子模块，全部通过同一个网关实例发请求。
//! `SolarApi` 在应用根部构造并放入 Context，组件用 `use_api` 获取。

mod alerts;
mod analytics;
mod auth;
mod dashboard;
mod error;
mod fallback;
mod gateway;
mod panels;
mod plants;
mod predictions;

pub use alerts::AlertsApi;
pub use analytics::AnalyticsApi;
pub use auth::AuthApi;
pub use dashboard::DashboardApi;
pub use error::{ApiError, ApiErrorKind, ApiResult};
pub use fallback::{AlertSource, LiveAlerts, SyntheticAlerts, classify, synthetic_alerts};
pub use gateway::ApiGateway;
pub use panels::PanelsApi;
pub use plants::PlantsApi;
pub use predictions::PredictionsApi;

use crate::config::AppConfig;
use leptos::prelude::*;

/// 全部资源客户端的聚合
///
/// 各客户端共享同一个网关（廉价 Clone），作为一个整体放入 Context。
#[derive(Clone, Debug, PartialEq)]
pub struct SolarApi {
    pub auth: AuthApi,
    pub plants: PlantsApi,
    pub panels: PanelsApi,
    pub alerts: AlertsApi,
    pub predictions: PredictionsApi,
    pub analytics: AnalyticsApi,
    pub dashboard: DashboardApi,
}

impl SolarApi {
    pub fn new(config: &AppConfig) -> Self {
        let gw = ApiGateway::new(config.api_url());
        Self {
            auth: AuthApi::new(gw.clone()),
            plants: PlantsApi::new(gw.clone()),
            panels: PanelsApi::new(gw.clone()),
            alerts: AlertsApi::new(gw.clone()),
            predictions: PredictionsApi::new(gw.clone()),
            analytics: AnalyticsApi::new(gw.clone()),
            dashboard: DashboardApi::new(gw),
        }
    }
}

/// 从 Context 获取 API 聚合实例
pub fn use_api() -> SolarApi {
    use_context::<SolarApi>().expect("SolarApi should be provided at the app root")
}
