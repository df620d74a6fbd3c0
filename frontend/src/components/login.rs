//! 登录页面
//!
//! 两条并行的入口：演示模式的角色卡片（本地切换，不访问后端）
//! 与真实的凭据登录表单。

use crate::api::use_api;
use crate::auth::{login, switch_role, use_auth};
use crate::components::icons::ShieldCheck;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use solarwatch_shared::Role;

/// 角色卡片的静态描述
#[derive(Clone, Copy)]
struct RoleOption {
    role: Role,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const ROLE_OPTIONS: [RoleOption; 3] = [
    RoleOption {
        role: Role::Admin,
        icon: "👑",
        title: "管理员",
        description: "完整的系统访问与管理权限",
        features: ["管理全部面板", "查看统计分析", "用户管理", "系统设置"],
    },
    RoleOption {
        role: Role::Technician,
        icon: "🔧",
        title: "技术员",
        description: "面板维护与告警处置",
        features: ["管理面板", "处理告警", "运行诊断", "查看报告"],
    },
    RoleOption {
        role: Role::Viewer,
        icon: "👁",
        title: "访客",
        description: "只读的面板监控视图",
        features: ["查看总览", "监控状态", "查看告警", "阅读报告"],
    },
];

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let router = use_router();

    let (selected, set_selected) = signal(Role::Admin);
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 快捷登录：演示身份路径，路由服务监听认证状态后自动跳转
    let quick_login = move |role: Role| {
        switch_role(&auth, role);
    };

    let api_submit = api.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if username.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("请输入用户名与密码".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api_submit.clone();
        spawn_local(async move {
            let result = login(
                &auth,
                &api,
                username.get_untracked(),
                password.get_untracked(),
            )
            .await;
            if let Err(err) = result {
                set_error_msg.set(Some(err.to_string()));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-3xl">
                <div class="text-center mb-2">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"SolarWatch"</h1>
                        <p class="text-base-content/70">"光伏故障检测监控系统"</p>
                        <div class="badge badge-accent badge-outline">"🎭 演示模式"</div>
                    </div>
                </div>

                <h2 class="text-lg font-bold self-start">"选择角色"</h2>
                <div class="grid md:grid-cols-3 gap-4 w-full">
                    {ROLE_OPTIONS
                        .into_iter()
                        .map(|option| {
                            view! {
                                <div
                                    class=move || {
                                        if selected.get() == option.role {
                                            "card bg-base-100 shadow-xl cursor-pointer ring-2 ring-primary"
                                        } else {
                                            "card bg-base-100 shadow cursor-pointer"
                                        }
                                    }
                                    on:click=move |_| set_selected.set(option.role)
                                >
                                    <div class="card-body p-4 gap-2">
                                        <div class="flex items-center gap-2">
                                            <span class="text-2xl">{option.icon}</span>
                                            <div>
                                                <h3 class="font-bold">{option.title}</h3>
                                                <p class="text-xs text-base-content/60">
                                                    {option.description}
                                                </p>
                                            </div>
                                        </div>
                                        <ul class="text-xs text-base-content/70 space-y-1">
                                            {option
                                                .features
                                                .into_iter()
                                                .map(|feature| view! { <li>"• " {feature}</li> })
                                                .collect_view()}
                                        </ul>
                                        <button
                                            class="btn btn-sm btn-outline btn-primary mt-2"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                quick_login(option.role);
                                            }
                                        >
                                            "快捷登录"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="btn btn-primary w-full max-w-xs"
                    on:click=move |_| quick_login(selected.get())
                >
                    "以所选角色进入"
                </button>

                <div class="divider">"或使用账号登录"</div>

                <div class="card shrink-0 w-full max-w-md shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"用户名"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder="admin"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-4">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || {
                                    if is_submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "登录中..."
                                        }
                                            .into_any()
                                    } else {
                                        "登录".into_any()
                                    }
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center text-base-content/60">
                            "没有账号？"
                            <a
                                class="link link-primary"
                                on:click=move |_| router.navigate("/register")
                            >
                                "注册"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
