//! 注册页面
//!
//! 两次密码一致性属于本地校验，不一致时不发出请求。

use crate::api::{ApiError, use_api};
use crate::auth::{register, use_auth};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use solarwatch_shared::protocol::RegisterRequest;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let api_submit = api.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        if username.get().trim().is_empty() || email.get().trim().is_empty() {
            set_error_msg.set(Some("请填写用户名与邮箱".to_string()));
            return;
        }
        if password.get() != confirm.get() {
            // 本地校验：密码不一致不发请求
            set_error_msg.set(Some(
                ApiError::validation("Passwords do not match").to_string(),
            ));
            return;
        }

        set_is_submitting.set(true);
        let request = RegisterRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            role: None,
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
        };
        let api = api_submit.clone();
        spawn_local(async move {
            if let Err(err) = register(&auth, &api, request).await {
                set_error_msg.set(Some(err.to_string()));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-2xl font-bold">"注册 SolarWatch 账号"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"用户名"</span></label>
                            <input
                                type="text"
                                class="input input-bordered"
                                prop:value=username
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"邮箱"</span></label>
                            <input
                                type="email"
                                class="input input-bordered"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="grid grid-cols-2 gap-2">
                            <div class="form-control">
                                <label class="label"><span class="label-text">"名"</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=first_name
                                    on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"姓"</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=last_name
                                    on:input=move |ev| set_last_name.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"密码"</span></label>
                            <input
                                type="password"
                                class="input input-bordered"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"确认密码"</span>
                            </label>
                            <input
                                type="password"
                                class="input input-bordered"
                                prop:value=confirm
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-control mt-4">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || {
                                    if is_submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "提交中..."
                                        }
                                            .into_any()
                                    } else {
                                        "注册".into_any()
                                    }
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center text-base-content/60">
                            "已有账号？"
                            <a class="link link-primary" on:click=move |_| router.navigate("/")>
                                "返回登录"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
