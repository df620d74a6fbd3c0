//! 告警中心页面
//!
//! 取数失败时切换到合成数据源（演示连续性优先于错误提示）；
//! 过滤、排序、统计全部在本地派生；确认与状态流转先做乐观更新，
//! 实时数据下再回写服务端。30 秒轮询，卸载时清除。

pub mod state;

use crate::api::{AlertSource, LiveAlerts, SyntheticAlerts, use_api};
use crate::auth::use_auth;
use crate::components::icons::RefreshCw;
use crate::components::widgets::{
    ConfidenceBar, ErrorAlert, LoadingSpinner, SeverityBadge, StatusBadge, SyntheticBadge,
};
use crate::web::Interval;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use solarwatch_shared::date::{format_datetime, format_optional, from_unix_millis};
use solarwatch_shared::{Alert, AlertStatus};
use state::{AlertFilter, AlertSort, AlertStats};

#[component]
pub fn AlertsPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();

    let (alerts, set_alerts) = signal(Vec::<Alert>::new());
    let (loading, set_loading) = signal(true);
    let (synthetic, set_synthetic) = signal(false);
    // 处置操作（确认/流转）的失败提示；取数失败走合成数据，不进这里
    let (action_error, set_action_error) = signal(Option::<String>::None);
    let (filter, set_filter) = signal(AlertFilter::All);
    let (sort, set_sort) = signal(AlertSort::Timestamp);

    let api_load = api.clone();
    let load = move || {
        let api = api_load.clone();
        set_loading.set(true);
        spawn_local(async move {
            let live = LiveAlerts::new(api.alerts.clone());
            match live.fetch().await {
                Ok(list) => {
                    set_synthetic.set(false);
                    set_alerts.set(list);
                }
                Err(err) => {
                    // 产品决策：保持页面可用，切换到合成数据而不是报错
                    warn!("加载告警失败，切换到合成数据源: {}", err);
                    let now_ms = js_sys::Date::now() as i64;
                    let source = SyntheticAlerts::new(now_ms as u64, now_ms);
                    if let Ok(list) = source.fetch().await {
                        set_synthetic.set(true);
                        set_alerts.set(list);
                    }
                }
            }
            set_loading.set(false);
        });
    };

    load();
    let interval = Interval::new(30_000, {
        let load = load.clone();
        move || load()
    });
    on_cleanup(move || drop(interval));

    // 展示列表与统计：同一份数据的纯派生
    let visible = move || state::apply(&alerts.get(), filter.get(), sort.get());
    let counts = move || AlertStats::compute(&alerts.get());

    let current_user_id = move || {
        auth.state
            .get_untracked()
            .user
            .map(|u| u.user_id)
            .unwrap_or(1)
    };

    // 确认：乐观翻转本地标志；实时数据下回写服务端并以响应覆盖。
    // Callback 实现 Copy，可以被列表项的事件闭包反复捕获。
    let acknowledge = Callback::new({
        let api = api.clone();
        move |id: i64| {
            let at = from_unix_millis(js_sys::Date::now() as i64);
            set_alerts.update(|list| {
                let _ = state::acknowledge_local(list, id, at);
            });

            if !synthetic.get_untracked() {
                let api = api.clone();
                let user_id = current_user_id();
                spawn_local(async move {
                    match api.alerts.acknowledge(id, user_id).await {
                        Ok(updated) => set_alerts.update(|list| {
                            if let Some(slot) = list.iter_mut().find(|a| a.id == updated.id) {
                                *slot = updated;
                            }
                        }),
                        Err(err) => set_action_error.set(Some(err.to_string())),
                    }
                });
            }
        }
    });

    // 状态流转：按钮只在 status.next() 存在时出现
    let transition = Callback::new({
        let api = api.clone();
        move |(id, next): (i64, AlertStatus)| {
            set_alerts.update(|list| {
                let _ = state::update_status_local(list, id, next);
            });

            if !synthetic.get_untracked() {
                let api = api.clone();
                let user_id = current_user_id();
                spawn_local(async move {
                    match api.alerts.update_status(id, next, user_id).await {
                        Ok(updated) => set_alerts.update(|list| {
                            if let Some(slot) = list.iter_mut().find(|a| a.id == updated.id) {
                                *slot = updated;
                            }
                        }),
                        Err(err) => set_action_error.set(Some(err.to_string())),
                    }
                });
            }
        }
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between flex-wrap gap-2">
                <div>
                    <h1 class="text-2xl font-bold">"告警中心"</h1>
                    <p class="text-base-content/60 text-sm">"故障告警的监控与处置"</p>
                </div>
                <div class="flex items-center gap-2">
                    <SyntheticBadge visible=synthetic />
                    <button
                        class="btn btn-primary btn-sm gap-2"
                        on:click={
                            let load = load.clone();
                            move |_| load()
                        }
                    >
                        <RefreshCw class="h-4 w-4" />
                        "刷新"
                    </button>
                </div>
            </div>

            <ErrorAlert message=action_error />

            // 概览计数卡片
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <div class="card bg-base-100 shadow p-4">
                    <div class="text-3xl font-bold text-error">{move || counts().critical}</div>
                    <div class="text-sm opacity-70">"Critical 告警"</div>
                    <div class="text-xs opacity-50">"需要立即处理"</div>
                </div>
                <div class="card bg-base-100 shadow p-4">
                    <div class="text-3xl font-bold text-warning">{move || counts().high}</div>
                    <div class="text-sm opacity-70">"High 告警"</div>
                    <div class="text-xs opacity-50">"尽快安排处理"</div>
                </div>
                <div class="card bg-base-100 shadow p-4">
                    <div class="text-3xl font-bold text-info">{move || counts().medium}</div>
                    <div class="text-sm opacity-70">"Medium 告警"</div>
                    <div class="text-xs opacity-50">"保持关注"</div>
                </div>
                <div class="card bg-base-100 shadow p-4">
                    <div class="text-3xl font-bold">{move || counts().unacknowledged}</div>
                    <div class="text-sm opacity-70">"未确认"</div>
                    <div class="text-xs opacity-50">"等待确认"</div>
                </div>
            </div>

            // 过滤与排序
            <div class="flex flex-wrap gap-4 items-end">
                <div class="form-control">
                    <label class="label"><span class="label-text">"筛选"</span></label>
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| {
                            set_filter.set(AlertFilter::from_value(&event_target_value(&ev)))
                        }
                    >
                        <option value="all">"全部告警"</option>
                        <option value="unacknowledged">"未确认"</option>
                        <option value="acknowledged">"已确认"</option>
                        <option value="CRITICAL">"Critical"</option>
                        <option value="HIGH">"High"</option>
                        <option value="MEDIUM">"Medium"</option>
                        <option value="LOW">"Low"</option>
                        <option value="OPEN">"Open"</option>
                        <option value="IN_PROGRESS">"In Progress"</option>
                        <option value="RESOLVED">"Resolved"</option>
                    </select>
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">"排序"</span></label>
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| {
                            set_sort.set(AlertSort::from_value(&event_target_value(&ev)))
                        }
                    >
                        <option value="timestamp">"时间"</option>
                        <option value="severity">"严重程度"</option>
                        <option value="panel">"面板编号"</option>
                        <option value="fault_type">"故障类别"</option>
                    </select>
                </div>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSpinner message="加载告警..." /> }
            >
                <Show
                    when=move || !visible().is_empty()
                    fallback=|| {
                        view! {
                            <div class="card bg-base-100 shadow p-8 text-center text-base-content/50">
                                <div class="text-3xl mb-2">"✓"</div>
                                "没有符合条件的告警，系统运行正常"
                            </div>
                        }
                    }
                >
                    <div class="space-y-3">
                        <For
                            each=visible
                            key=|alert| (alert.id, alert.acknowledged, alert.status)
                            children=move |alert: Alert| {
                                let id = alert.id;
                                let acked = alert.acknowledged;
                                let next_status = alert.status.next();
                                let panel_id = alert.panel_id.clone();
                                let severity = alert.severity;
                                let status = alert.status;
                                let fault = alert.fault_type.as_str();
                                let message = alert.message.clone();
                                let confidence = alert.confidence;
                                let score = alert.confidence_score;
                                let created = format_datetime(&alert.created_at);
                                let resolved = alert.resolved_at.map(|dt| format_datetime(&dt));
                                let acked_at = format_optional(&alert.acknowledged_at);
                                let notes = alert
                                    .technician_notes
                                    .clone()
                                    .filter(|notes| !notes.is_empty());
                                view! {
                                    <div class="card bg-base-100 shadow">
                                        <div class="card-body p-4 gap-2">
                                            <div class="flex items-center justify-between flex-wrap gap-2">
                                                <div class="flex items-center gap-2">
                                                    <span class="font-mono font-bold">{panel_id}</span>
                                                    <SeverityBadge severity=severity />
                                                    <StatusBadge status=status />
                                                    <span class="badge badge-ghost">{fault}</span>
                                                </div>
                                                <div class="flex items-center gap-2">
                                                    <Show when=move || !acked>
                                                        <button
                                                            class="btn btn-sm btn-outline btn-success"
                                                            on:click=move |_| acknowledge.run(id)
                                                        >
                                                            "✓ 确认"
                                                        </button>
                                                    </Show>
                                                    {next_status
                                                        .map(|next| {
                                                            let label = match next {
                                                                AlertStatus::InProgress => "→ 开始处理",
                                                                AlertStatus::Resolved => "✓ 标记解决",
                                                                AlertStatus::Open => "重新打开",
                                                            };
                                                            view! {
                                                                <button
                                                                    class="btn btn-sm btn-outline"
                                                                    on:click=move |_| {
                                                                        transition.run((id, next))
                                                                    }
                                                                >
                                                                    {label}
                                                                </button>
                                                            }
                                                        })}
                                                </div>
                                            </div>

                                            <p class="text-sm">{message}</p>
                                            <ConfidenceBar confidence=confidence score=score />

                                            <div class="flex flex-wrap gap-4 text-xs opacity-60">
                                                <span>"创建于 " {created}</span>
                                                {resolved
                                                    .map(|at| view! { <span>"解决于 " {at}</span> })}
                                                {acked
                                                    .then(|| {
                                                        view! { <span>"✓ 已确认于 " {acked_at}</span> }
                                                    })}
                                            </div>

                                            {notes
                                                .map(|notes| {
                                                    view! {
                                                        <div class="text-xs bg-base-200 rounded p-2">
                                                            "技术员备注：" {notes}
                                                        </div>
                                                    }
                                                })}
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
