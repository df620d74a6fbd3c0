//! 认证状态模块
//!
//! 管理当前用户与角色，与路由系统解耦：路由服务只消费注入的信号。
//! 会话持久化走 `SessionStore` 抽象；真实凭据路径（login/register）
//! 与演示身份路径（`demo` 子模块）严格分开，互不复用代码。
//!
//! 角色能力谓词只控制 UI 可见性，后端不会据此做访问控制。

use crate::api::{ApiResult, SolarApi};
use crate::web::{BrowserSession, SessionStore};
use leptos::prelude::*;
use leptos::task::spawn_local;
use solarwatch_shared::protocol::{LoginRequest, RegisterRequest};
use solarwatch_shared::{Role, User};

pub mod demo;

#[cfg(test)]
mod tests;

/// 认证状态
#[derive(Clone, Default, PartialEq)]
pub struct AuthState {
    /// 当前用户（未登录时为 None）
    pub user: Option<User>,
    /// 是否已登录
    pub is_logged_in: bool,
    /// 是否正在加载（登录请求进行中）
    pub is_loading: bool,
}

impl AuthState {
    /// 从持久化会话恢复状态
    ///
    /// 存在令牌与用户时乐观地视为已登录（调用方随后异步验证令牌）；
    /// 否则回退到演示用管理员身份，保证应用开箱可用。
    /// 返回值第二项表示是否恢复了真实会话。
    pub fn restore<S: SessionStore>(storage: &S) -> (Self, bool) {
        match (storage.token(), storage.load_user()) {
            (Some(_), Some(user)) => (
                Self {
                    user: Some(user),
                    is_logged_in: true,
                    is_loading: false,
                },
                true,
            ),
            _ => (
                Self {
                    user: Some(demo::default_admin()),
                    is_logged_in: true,
                    is_loading: false,
                },
                false,
            ),
        }
    }

    pub fn logged_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_logged_in: true,
            is_loading: false,
        }
    }

    pub fn logged_out() -> Self {
        Self::default()
    }

    /// 注销：无条件清除持久化会话并回到未登录状态。
    /// 不依赖服务端注销调用的结果。
    pub fn apply_logout<S: SessionStore>(storage: &S) -> Self {
        storage.clear_session();
        Self::logged_out()
    }

    /// 演示模式角色切换：原地替换角色，无服务端交互
    pub fn switch_role(&mut self, role: Role) {
        match &mut self.user {
            Some(user) => user.role = role,
            None => self.user = Some(demo::demo_user(role)),
        }
        self.is_logged_in = true;
        self.is_loading = false;
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    // --- 能力谓词透传（仅 UI 可见性） ---

    pub fn can_access_analytics(&self) -> bool {
        self.role().is_some_and(|r| r.can_access_analytics())
    }

    pub fn can_access_history(&self) -> bool {
        self.role().is_some_and(|r| r.can_access_history())
    }

    pub fn can_analyze(&self) -> bool {
        self.role().is_some_and(|r| r.can_analyze())
    }

    pub fn can_access_panels(&self) -> bool {
        self.role().is_some_and(|r| r.can_access_panels())
    }

    pub fn can_access_alerts(&self) -> bool {
        self.role().is_some_and(|r| r.can_access_alerts())
    }

    pub fn can_access_settings(&self) -> bool {
        self.role().is_some_and(|r| r.can_access_settings())
    }

    pub fn can_access_user_management(&self) -> bool {
        self.role().is_some_and(|r| r.can_access_user_management())
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_logged_in)
    }

    /// 当前角色信号（用于路由能力守卫注入）
    pub fn role_signal(&self) -> Signal<Option<Role>> {
        let state = self.state;
        Signal::derive(move || state.get().role())
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 恢复持久化会话后异步验证令牌；验证失败触发注销。
pub fn init_auth(ctx: &AuthContext, api: &SolarApi) {
    let (state, had_session) = AuthState::restore(&BrowserSession);
    ctx.set_state.set(state);

    if had_session {
        let api = api.clone();
        let set_state = ctx.set_state;
        spawn_local(async move {
            if api.auth.validate().await.is_err() {
                set_state.set(AuthState::apply_logout(&BrowserSession));
            }
        });
    }
}

/// 凭据登录（真实认证路径）
///
/// 令牌与用户的持久化由资源客户端完成，这里只更新内存状态。
pub async fn login(
    ctx: &AuthContext,
    api: &SolarApi,
    username: String,
    password: String,
) -> ApiResult<()> {
    ctx.set_state.update(|state| state.is_loading = true);
    match api.auth.login(&LoginRequest { username, password }).await {
        Ok(response) => {
            ctx.set_state.set(AuthState::logged_in(response.user));
            Ok(())
        }
        Err(err) => {
            ctx.set_state.update(|state| state.is_loading = false);
            Err(err)
        }
    }
}

/// 注册新账号（真实认证路径）
pub async fn register(
    ctx: &AuthContext,
    api: &SolarApi,
    request: RegisterRequest,
) -> ApiResult<()> {
    ctx.set_state.update(|state| state.is_loading = true);
    match api.auth.register(&request).await {
        Ok(response) => {
            ctx.set_state.set(AuthState::logged_in(response.user));
            Ok(())
        }
        Err(err) => {
            ctx.set_state.update(|state| state.is_loading = false);
            Err(err)
        }
    }
}

/// 注销并清除状态
///
/// 服务端通知是尽力而为的：无论其成败，本地令牌与用户立即清除。
/// 导航由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext, api: &SolarApi) {
    let api = api.clone();
    spawn_local(async move {
        let _ = api.auth.logout().await;
    });
    ctx.set_state.set(AuthState::apply_logout(&BrowserSession));
}

/// 演示模式角色切换（登录页快捷入口与顶栏切换器共用）
pub fn switch_role(ctx: &AuthContext, role: Role) {
    ctx.set_state.update(|state| state.switch_role(role));
}
