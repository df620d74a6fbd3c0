//! 会话生命周期客户端
//!
//! 登录/注册成功时把返回的令牌与用户对象写入会话存储（副作用），
//! 注销只做尽力而为的服务端通知，本地清理由 `auth` 模块负责。

use super::error::ApiResult;
use super::gateway::ApiGateway;
use crate::web::{BrowserSession, SessionStore};
use solarwatch_shared::User;
use solarwatch_shared::protocol::{AuthResponse, LoginRequest, RegisterRequest};

#[derive(Clone, Debug, PartialEq)]
pub struct AuthApi {
    gw: ApiGateway,
}

impl AuthApi {
    pub(super) fn new(gw: ApiGateway) -> Self {
        Self { gw }
    }

    /// 登录；成功后持久化令牌与用户
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        let response: AuthResponse = self
            .gw
            .post("/auth/login", request)
            .await
            .map_err(|e| e.context("Login failed"))?;
        BrowserSession.save_session(&response.token, &response.user);
        Ok(response)
    }

    /// 注册；成功后与登录一样持久化会话
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        let response: AuthResponse = self
            .gw
            .post("/auth/register", request)
            .await
            .map_err(|e| e.context("Registration failed"))?;
        BrowserSession.save_session(&response.token, &response.user);
        Ok(response)
    }

    /// 通知服务端注销。调用方不应依赖其成功与否。
    pub async fn logout(&self) -> ApiResult<()> {
        self.gw
            .post_unit("/auth/logout")
            .await
            .map_err(|e| e.context("Logout failed"))
    }

    #[allow(dead_code)]
    pub async fn profile(&self) -> ApiResult<User> {
        self.gw
            .get("/auth/profile")
            .await
            .map_err(|e| e.context("Failed to fetch profile"))
    }

    /// 校验持久化的令牌是否仍然有效
    pub async fn validate(&self) -> ApiResult<serde_json::Value> {
        self.gw
            .get("/auth/validate")
            .await
            .map_err(|e| e.context("Token validation failed"))
    }
}
