//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、认证要求以及角色能力要求。

use solarwatch_shared::Role;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 注册页面
    Register,
    /// 总览面板 (需要认证)
    Dashboard,
    /// 电站管理
    Plants,
    /// 面板管理
    Panels,
    /// 告警中心
    Alerts,
    /// 预测历史
    History,
    /// 统计分析
    Analytics,
    /// 传感器数据分析
    Analyze,
    /// 系统设置
    Settings,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/register" => Self::Register,
            "/dashboard" => Self::Dashboard,
            "/plants" => Self::Plants,
            "/panels" => Self::Panels,
            "/alerts" => Self::Alerts,
            "/history" => Self::History,
            "/analytics" => Self::Analytics,
            "/analyze" => Self::Analyze,
            "/settings" => Self::Settings,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Plants => "/plants",
            Self::Panels => "/panels",
            Self::Alerts => "/alerts",
            Self::History => "/history",
            Self::Analytics => "/analytics",
            Self::Analyze => "/analyze",
            Self::Settings => "/settings",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::Register | Self::NotFound)
    }

    /// 角色能力守卫：当前角色是否允许访问该路由
    ///
    /// 只影响导航可见性与前端重定向，不构成安全边界。
    pub fn allowed_for(&self, role: Option<Role>) -> bool {
        let Some(role) = role else {
            return !self.requires_auth();
        };
        match self {
            Self::Analytics => role.can_access_analytics(),
            Self::History => role.can_access_history(),
            Self::Analyze => role.can_analyze(),
            Self::Plants | Self::Panels => role.can_access_panels(),
            Self::Alerts => role.can_access_alerts(),
            Self::Settings => role.can_access_settings(),
            _ => true,
        }
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }

    /// 角色能力不足时的重定向目标
    pub fn capability_failure_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        for route in [
            AppRoute::Dashboard,
            AppRoute::Plants,
            AppRoute::Panels,
            AppRoute::Alerts,
            AppRoute::History,
            AppRoute::Analytics,
            AppRoute::Analyze,
            AppRoute::Settings,
            AppRoute::Register,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn viewer_is_limited_to_read_only_pages() {
        let viewer = Some(Role::Viewer);
        assert!(AppRoute::Dashboard.allowed_for(viewer));
        assert!(!AppRoute::Panels.allowed_for(viewer));
        assert!(!AppRoute::Alerts.allowed_for(viewer));
        assert!(!AppRoute::Analytics.allowed_for(viewer));
        assert!(!AppRoute::Settings.allowed_for(viewer));
    }

    #[test]
    fn technician_can_work_but_not_administer() {
        let tech = Some(Role::Technician);
        assert!(AppRoute::Panels.allowed_for(tech));
        assert!(AppRoute::Alerts.allowed_for(tech));
        assert!(AppRoute::Analyze.allowed_for(tech));
        assert!(!AppRoute::Analytics.allowed_for(tech));
        assert!(!AppRoute::Settings.allowed_for(tech));
    }

    #[test]
    fn unauthenticated_only_reaches_public_routes() {
        assert!(AppRoute::Login.allowed_for(None));
        assert!(AppRoute::Register.allowed_for(None));
        assert!(!AppRoute::Dashboard.allowed_for(None));
    }
}
