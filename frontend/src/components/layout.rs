//! 页面框架：侧边导航 + 顶栏
//!
//! 导航项按角色能力谓词过滤；顶栏带演示模式角色切换器与主题开关。

use crate::api::use_api;
use crate::auth::{logout, switch_role, use_auth};
use crate::components::icons::*;
use crate::theme::use_theme;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use solarwatch_shared::Role;

/// 单个导航项；高亮当前路由
#[component]
fn NavLink(route: AppRoute, label: &'static str, children: Children) -> impl IntoView {
    let router = use_router();
    view! {
        <li>
            <a
                class=move || {
                    if router.current_route().get() == route { "active" } else { "" }
                }
                on:click=move |_| router.navigate(route.to_path())
            >
                {children()}
                {label}
            </a>
        </li>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;

    view! {
        <aside class="w-60 min-h-screen bg-base-100 shadow-xl hidden lg:flex flex-col">
            <div class="flex items-center gap-2 p-4 text-primary">
                <Sun class="h-7 w-7" />
                <span class="text-xl font-bold text-base-content">"SolarWatch"</span>
            </div>
            <ul class="menu px-2 gap-1 flex-1">
                <NavLink route=AppRoute::Dashboard label="总览">
                    <LayoutDashboard class="h-4 w-4" />
                </NavLink>
                <Show when=move || state.get().can_access_panels()>
                    <NavLink route=AppRoute::Plants label="电站管理">
                        <Factory class="h-4 w-4" />
                    </NavLink>
                    <NavLink route=AppRoute::Panels label="面板管理">
                        <PanelTop class="h-4 w-4" />
                    </NavLink>
                </Show>
                <Show when=move || state.get().can_access_alerts()>
                    <NavLink route=AppRoute::Alerts label="告警中心">
                        <BellRing class="h-4 w-4" />
                    </NavLink>
                </Show>
                <Show when=move || state.get().can_analyze()>
                    <NavLink route=AppRoute::Analyze label="传感器分析">
                        <FlaskConical class="h-4 w-4" />
                    </NavLink>
                </Show>
                <Show when=move || state.get().can_access_history()>
                    <NavLink route=AppRoute::History label="预测历史">
                        <Clock class="h-4 w-4" />
                    </NavLink>
                </Show>
                <Show when=move || state.get().can_access_analytics()>
                    <NavLink route=AppRoute::Analytics label="统计分析">
                        <PieChart class="h-4 w-4" />
                    </NavLink>
                </Show>
                <Show when=move || state.get().can_access_settings()>
                    <NavLink route=AppRoute::Settings label="系统设置">
                        <Settings class="h-4 w-4" />
                    </NavLink>
                </Show>
            </ul>
            <div class="p-4 text-xs text-base-content/40">
                "角色切换仅为演示便利，不构成访问控制"
            </div>
        </aside>
    }
}

#[component]
fn Header() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let theme = use_theme();
    let state = auth.state;

    // 演示模式角色切换：本地替换角色，无服务端交互
    let on_role_change = move |ev| {
        let role = match event_target_value(&ev).as_str() {
            "TECHNICIAN" => Role::Technician,
            "VIEWER" => Role::Viewer,
            _ => Role::Admin,
        };
        switch_role(&auth, role);
    };

    let api_for_logout = api.clone();
    let on_logout = move |_| logout(&auth, &api_for_logout);
    let is_dark = theme.is_dark();

    view! {
        <header class="navbar bg-base-100 shadow px-4 gap-2">
            <div class="flex-1 gap-2">
                <span class="text-lg font-bold">"SolarWatch 监控面板"</span>
                <span class="badge badge-neutral hidden md:inline-flex">"演示模式"</span>
            </div>
            <div class="flex-none items-center gap-2">
                <select
                    class="select select-bordered select-sm"
                    on:change=on_role_change
                    prop:value=move || {
                        state.get().role().map(|r| r.as_str()).unwrap_or("ADMIN")
                    }
                >
                    <option value="ADMIN">"管理员"</option>
                    <option value="TECHNICIAN">"技术员"</option>
                    <option value="VIEWER">"访客"</option>
                </select>
                <button class="btn btn-ghost btn-circle" on:click=move |_| theme.toggle()>
                    <Show
                        when=move || is_dark.get()
                        fallback=|| view! { <Moon class="h-5 w-5" /> }
                    >
                        <Sun class="h-5 w-5" />
                    </Show>
                </button>
                <span class="hidden md:inline text-sm opacity-70">
                    {move || {
                        state.get().user.map(|u| u.display_name()).unwrap_or_default()
                    }}
                </span>
                <button class="btn btn-outline btn-error btn-sm gap-2" on:click=on_logout>
                    <LogOut class="h-4 w-4" />
                    "退出"
                </button>
            </div>
        </header>
    }
}

/// 已认证页面的统一框架
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200 flex">
            <Sidebar />
            <div class="flex-1 flex flex-col min-w-0">
                <Header />
                <main class="flex-1 p-4 md:p-8">{children()}</main>
            </div>
        </div>
    }
}
