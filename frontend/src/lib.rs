//! SolarWatch 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `api`: HTTP 网关与各资源客户端（含合成数据源）
//! - `auth`: 会话状态与角色能力谓词
//! - `web::route` / `web::router`: 路由定义与带守卫的路由服务
//! - `theme`: 主题偏好
//! - `components`: 页面与展示组件层

mod api;
mod auth;
mod config;
mod theme;

mod components {
    pub mod alerts;
    pub mod analytics;
    pub mod analyze;
    pub mod dashboard;
    pub mod history;
    pub mod icons;
    pub mod layout;
    pub mod login;
    pub mod panels;
    pub mod plants;
    pub mod register;
    pub mod settings;
    pub mod widgets;
}

use crate::api::SolarApi;
use crate::auth::{AuthContext, init_auth};
use crate::components::alerts::AlertsPage;
use crate::components::analytics::AnalyticsPage;
use crate::components::analyze::AnalyzePage;
use crate::components::dashboard::DashboardPage;
use crate::components::history::HistoryPage;
use crate::components::layout::AppShell;
use crate::components::login::LoginPage;
use crate::components::panels::PanelsPage;
use crate::components::plants::PlantsPage;
use crate::components::register::RegisterPage;
use crate::components::settings::SettingsPage;
use crate::config::AppConfig;
use crate::theme::ThemeContext;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装（LocalStorage、定时器、
// History 路由、请求序号），减少对 gloo-* 系列 crate 的依赖。
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod seq;
    mod storage;
    mod timer;

    pub use seq::RequestSeq;
    pub use storage::{BrowserSession, SessionStore};
    pub use timer::{Interval, Timeout};
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 已认证页面统一包在 AppShell 里
fn shell(content: AnyView) -> AnyView {
    view! { <AppShell>{content}</AppShell> }.into_any()
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => shell(view! { <DashboardPage /> }.into_any()),
        AppRoute::Plants => shell(view! { <PlantsPage /> }.into_any()),
        AppRoute::Panels => shell(view! { <PanelsPage /> }.into_any()),
        AppRoute::Alerts => shell(view! { <AlertsPage /> }.into_any()),
        AppRoute::History => shell(view! { <HistoryPage /> }.into_any()),
        AppRoute::Analytics => shell(view! { <AnalyticsPage /> }.into_any()),
        AppRoute::Analyze => shell(view! { <AnalyzePage /> }.into_any()),
        AppRoute::Settings => shell(view! { <SettingsPage /> }.into_any()),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 加载配置并构造 API 聚合实例
    let config = AppConfig::load();
    let api = SolarApi::new(&config);
    provide_context(api.clone());

    // 2. 主题上下文（读取持久化偏好并应用）
    provide_context(ThemeContext::new());

    // 3. 认证上下文：恢复持久会话或回退到演示身份
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx, &api);

    // 4. 认证与角色信号注入路由服务实现双层守卫（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();
    let role = auth_ctx.role_signal();

    view! {
        <Router is_authenticated=is_authenticated role=role>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
