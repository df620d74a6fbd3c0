//! 总览页面
//!
//! 顶部统计来自 /dashboard/stats，30 秒轮询；
//! 下方的最近告警小组件独立取数（60 秒轮询），后端不可用时
//! 切换到合成数据源保持可演示。

use crate::api::{AlertSource, LiveAlerts, SyntheticAlerts, use_api};
use crate::components::alerts::state::{self, AlertFilter, AlertSort, AlertStats};
use crate::components::icons::RefreshCw;
use crate::components::widgets::{
    ErrorAlert, LoadingSpinner, SeverityBadge, StatCard, SyntheticBadge,
};
use crate::web::Interval;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use solarwatch_shared::Alert;
use solarwatch_shared::date::{format_datetime, from_unix_millis};
use solarwatch_shared::protocol::DashboardStats;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();

    let (stats, set_stats) = signal(Option::<DashboardStats>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let api_load = api.clone();
    let load = move || {
        let api = api_load.clone();
        spawn_local(async move {
            match api.dashboard.stats().await {
                Ok(data) => {
                    set_error.set(None);
                    set_stats.set(Some(data));
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    };

    // 初始加载 + 30 秒轮询，组件卸载时清除定时器
    load();
    let interval = Interval::new(30_000, {
        let load = load.clone();
        move || load()
    });
    on_cleanup(move || drop(interval));

    // 统计卡片的取值派生
    let stat = move |pick: fn(&DashboardStats) -> i64| {
        Signal::derive(move || {
            stats
                .get()
                .map(|s| pick(&s).to_string())
                .unwrap_or_else(|| "--".to_string())
        })
    };

    let retry = Callback::new({
        let load = load.clone();
        move |_| load()
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">"系统总览"</h1>
                    <p class="text-base-content/60 text-sm">"电站、面板与告警的实时概况"</p>
                </div>
            </div>

            <ErrorAlert message=error on_retry=retry />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSpinner message="加载统计数据..." /> }
            >
                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <StatCard
                        title="电站总数"
                        value=stat(|s| s.total_plants)
                        value_class="stat-value text-primary"
                    />
                    <StatCard title="面板总数" value=stat(|s| s.total_panels) />
                    <StatCard
                        title="运行中"
                        value=stat(|s| s.active_panels)
                        value_class="stat-value text-success"
                    />
                    <StatCard
                        title="维护中"
                        value=stat(|s| s.maintenance_panels)
                        value_class="stat-value text-warning"
                    />
                    <StatCard
                        title="离线"
                        value=stat(|s| s.offline_panels)
                        value_class="stat-value text-error"
                    />
                </div>

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <StatCard title="告警总数" value=stat(|s| s.total_alerts) />
                    <StatCard
                        title="未处理"
                        value=stat(|s| s.open_alerts)
                        value_class="stat-value text-warning"
                    />
                    <StatCard
                        title="严重告警"
                        value=stat(|s| s.critical_alerts)
                        value_class="stat-value text-error"
                        desc="需要立即处理"
                    />
                    <StatCard title="高优先级" value=stat(|s| s.high_alerts) />
                </div>
            </Show>

            <RecentAlerts />
        </div>
    }
}

/// 最近告警小组件
///
/// 取数失败时切换到合成数据源而不是报错，确认操作只做本地翻转
/// （完整处置流程在告警中心页面）。
#[component]
fn RecentAlerts() -> impl IntoView {
    let api = use_api();

    let (alerts, set_alerts) = signal(Vec::<Alert>::new());
    let (loading, set_loading) = signal(true);
    let (synthetic, set_synthetic) = signal(false);
    let (filter, set_filter) = signal(AlertFilter::All);

    let api_load = api.clone();
    let load = move || {
        let api = api_load.clone();
        spawn_local(async move {
            let live = LiveAlerts::new(api.alerts.clone());
            match live.fetch().await {
                Ok(list) => {
                    set_synthetic.set(false);
                    set_alerts.set(list);
                }
                Err(err) => {
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
    let interval = Interval::new(60_000, {
        let load = load.clone();
        move || load()
    });
    on_cleanup(move || drop(interval));

    let visible = move || {
        let mut list = state::apply(&alerts.get(), filter.get(), AlertSort::Timestamp);
        list.truncate(10);
        list
    };
    let counts = move || AlertStats::compute(&alerts.get());

    let acknowledge = move |id: i64| {
        let at = from_unix_millis(js_sys::Date::now() as i64);
        set_alerts.update(|list| {
            let _ = state::acknowledge_local(list, id, at);
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body gap-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <h3 class="card-title">"最近告警"</h3>
                        <SyntheticBadge visible=synthetic />
                    </div>
                    <div class="flex items-center gap-2">
                        <select
                            class="select select-bordered select-sm"
                            on:change=move |ev| {
                                set_filter.set(AlertFilter::from_value(&event_target_value(&ev)))
                            }
                        >
                            <option value="all">"全部"</option>
                            <option value="unacknowledged">"未确认"</option>
                            <option value="CRITICAL">"Critical"</option>
                            <option value="HIGH">"High"</option>
                            <option value="MEDIUM">"Medium"</option>
                        </select>
                        <button
                            class="btn btn-ghost btn-sm btn-circle"
                            on:click={
                                let load = load.clone();
                                move |_| load()
                            }
                        >
                            <RefreshCw class="h-4 w-4" />
                        </button>
                    </div>
                </div>

                <div class="flex gap-4 text-sm">
                    <span class="text-error font-bold">
                        {move || counts().critical}
                        " Critical"
                    </span>
                    <span class="text-warning font-bold">{move || counts().high} " High"</span>
                    <span class="text-info font-bold">{move || counts().medium} " Medium"</span>
                    <span class="opacity-60">{move || counts().unacknowledged} " 未确认"</span>
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <LoadingSpinner message="加载告警..." /> }
                >
                    <Show
                        when=move || !visible().is_empty()
                        fallback=|| {
                            view! {
                                <div class="text-center py-6 text-base-content/50">
                                    "暂无告警，系统运行正常"
                                </div>
                            }
                        }
                    >
                        <ul class="space-y-2">
                            <For
                                each=visible
                                key=|alert| (alert.id, alert.acknowledged)
                                children=move |alert: Alert| {
                                    let id = alert.id;
                                    let acked = alert.acknowledged;
                                    view! {
                                        <li class="flex items-center gap-3 p-3 rounded-lg bg-base-200">
                                            <span class="font-mono text-sm font-bold">
                                                {alert.panel_id.clone()}
                                            </span>
                                            <SeverityBadge severity=alert.severity />
                                            <span class="text-sm flex-1 truncate">
                                                {alert.message.clone()}
                                            </span>
                                            <span class="text-xs opacity-50 hidden md:inline">
                                                {format_datetime(&alert.created_at)}
                                            </span>
                                            <Show when=move || !acked>
                                                <button
                                                    class="btn btn-xs btn-outline btn-success"
                                                    title="确认告警"
                                                    on:click=move |_| acknowledge(id)
                                                >
                                                    "✓"
                                                </button>
                                            </Show>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
