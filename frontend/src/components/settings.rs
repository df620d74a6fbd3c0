//! 系统设置页面（仅管理员路由可达）
//!
//! 当前只承载主题偏好与会话信息展示；偏好即时持久化。

use crate::auth::use_auth;
use crate::theme::use_theme;
use leptos::prelude::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();
    let theme = use_theme();
    let state = auth.state;
    let is_dark = theme.is_dark();

    view! {
        <div class="space-y-6 max-w-2xl">
            <div>
                <h1 class="text-2xl font-bold">"系统设置"</h1>
                <p class="text-base-content/60 text-sm">"界面偏好与会话信息"</p>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body gap-3">
                    <h3 class="card-title">"界面"</h3>
                    <label class="label cursor-pointer justify-start gap-4">
                        <span class="label-text">"暗色主题"</span>
                        <input
                            type="checkbox"
                            class="toggle toggle-primary"
                            prop:checked=move || is_dark.get()
                            on:change=move |_| theme.toggle()
                        />
                    </label>
                    <p class="text-xs opacity-50">
                        "主题偏好保存在浏览器本地，下次打开时自动恢复"
                    </p>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body gap-2">
                    <h3 class="card-title">"当前会话"</h3>
                    <div class="text-sm space-y-1">
                        <div>
                            <span class="opacity-60">"用户："</span>
                            {move || {
                                state.get().user.map(|u| u.display_name()).unwrap_or_default()
                            }}
                        </div>
                        <div>
                            <span class="opacity-60">"角色："</span>
                            {move || {
                                state
                                    .get()
                                    .role()
                                    .map(|r| r.as_str())
                                    .unwrap_or("--")
                            }}
                        </div>
                    </div>
                    <p class="text-xs opacity-50">
                        "演示模式下的角色切换仅影响界面可见性，不是访问控制边界"
                    </p>
                </div>
            </div>
        </div>
    }
}
