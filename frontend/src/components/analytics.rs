//! 统计分析页面
//!
//! 概要快照与趋势序列并行取数；切换趋势窗口（7/30/90 天）时
//! 只重新拉取趋势，概要不动。图表输入结构在 `state` 中派生。

pub mod state;

use crate::api::use_api;
use crate::components::widgets::{ErrorAlert, LoadingSpinner, StatCard};
use leptos::prelude::*;
use leptos::task::spawn_local;
use solarwatch_shared::protocol::{AnalyticsSummary, AnalyticsTrends};
use state::{DistributionSlice, TREND_WINDOWS, TrendBar};

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let api = use_api();

    let (summary, set_summary) = signal(Option::<AnalyticsSummary>::None);
    let (trends, set_trends) = signal(Option::<AnalyticsTrends>::None);
    let (days, set_days) = signal(30_u32);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    // 首次加载：概要与趋势并行
    let load_all = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                let (summary_result, trends_result) = futures::join!(
                    api.analytics.summary(),
                    api.analytics.trends(days.get_untracked())
                );
                match (summary_result, trends_result) {
                    (Ok(s), Ok(t)) => {
                        set_summary.set(Some(s));
                        set_trends.set(Some(t));
                        set_error.set(None);
                    }
                    (Err(err), _) | (_, Err(err)) => set_error.set(Some(err.to_string())),
                }
                set_loading.set(false);
            });
        }
    };
    load_all();

    // 窗口切换：只重取趋势
    let change_window = Callback::new({
        let api = api.clone();
        move |window: u32| {
            set_days.set(window);
            let api = api.clone();
            spawn_local(async move {
                match api.analytics.trends(window).await {
                    Ok(t) => set_trends.set(Some(t)),
                    Err(err) => set_error.set(Some(err.to_string())),
                }
            });
        }
    });

    let retry = Callback::new({
        let load_all = load_all.clone();
        move |_| load_all()
    });

    // 图表输入结构的派生
    let fault_slices = move || {
        summary
            .get()
            .map(|s| state::fault_distribution(&s.fault_type_counts))
            .unwrap_or_default()
    };
    let severity_slices = move || {
        summary
            .get()
            .map(|s| state::severity_distribution(&s.severity_counts))
            .unwrap_or_default()
    };
    let bars = move || {
        trends
            .get()
            .map(|t| state::trend_bars(&t.daily_trends))
            .unwrap_or_default()
    };

    let total = Signal::derive(move || {
        summary
            .get()
            .map(|s| s.total_predictions.to_string())
            .unwrap_or_else(|| "--".to_string())
    });
    let critical = Signal::derive(move || {
        summary
            .get()
            .and_then(|s| s.critical_faults)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "--".to_string())
    });
    let normal = Signal::derive(move || {
        summary
            .get()
            .and_then(|s| s.normal_operations)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "--".to_string())
    });
    let most_common = Signal::derive(move || {
        summary
            .get()
            .and_then(|s| s.most_common_fault)
            .map(|f| f.as_str().to_string())
            .unwrap_or_else(|| "--".to_string())
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">"统计分析"</h1>
                <p class="text-base-content/60 text-sm">"预测结果的分布与趋势"</p>
            </div>

            <ErrorAlert message=error on_retry=retry />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSpinner message="加载统计数据..." /> }
            >
                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <StatCard
                        title="预测总数"
                        value=total
                        value_class="stat-value text-primary"
                    />
                    <StatCard
                        title="严重故障"
                        value=critical
                        value_class="stat-value text-error"
                    />
                    <StatCard
                        title="正常运行"
                        value=normal
                        value_class="stat-value text-success"
                    />
                    <StatCard
                        title="最常见故障"
                        value=most_common
                        value_class="stat-value text-lg"
                    />
                </div>

                <div class="grid lg:grid-cols-2 gap-6">
                    <DistributionCard title="故障类别分布" slices=Signal::derive(fault_slices) />
                    <DistributionCard title="严重程度分布" slices=Signal::derive(severity_slices) />
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body gap-4">
                        <div class="flex items-center justify-between">
                            <h3 class="card-title">
                                {move || format!("最近 {} 天预测趋势", days.get())}
                            </h3>
                            <div class="join">
                                {TREND_WINDOWS
                                    .into_iter()
                                    .map(|window| {
                                        view! {
                                            <button
                                                class=move || {
                                                    if days.get() == window {
                                                        "btn btn-sm join-item btn-active"
                                                    } else {
                                                        "btn btn-sm join-item"
                                                    }
                                                }
                                                on:click=move |_| change_window.run(window)
                                            >
                                                {format!("{} 天", window)}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <Show
                            when=move || !bars().is_empty()
                            fallback=|| {
                                view! {
                                    <div class="text-center py-8 text-base-content/50">
                                        "该时间窗口内暂无数据"
                                    </div>
                                }
                            }
                        >
                            <div class="flex items-end gap-1 h-40">
                                <For
                                    each=bars
                                    key=|bar| bar.label.clone()
                                    children=move |bar: TrendBar| {
                                        let TrendBar {
                                            label,
                                            count,
                                            height,
                                        } = bar;
                                        let style = format!("height: {:.1}%", height.max(2.0));
                                        let title = format!("{}: {}", label, count);
                                        view! {
                                            <div
                                                class="flex-1 bg-primary/70 rounded-t tooltip"
                                                style=style
                                                title=title
                                            ></div>
                                        }
                                    }
                                />
                            </div>
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// 分布卡片：彩色占比条列表
#[component]
fn DistributionCard(
    title: &'static str,
    #[prop(into)] slices: Signal<Vec<DistributionSlice>>,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body gap-3">
                <h3 class="card-title">{title}</h3>
                <Show
                    when=move || !slices.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="text-center py-6 text-base-content/50">"暂无数据"</div>
                        }
                    }
                >
                    <For
                        each=move || slices.get()
                        key=|slice| slice.label
                        children=move |slice: DistributionSlice| {
                            let width = format!(
                                "width: {:.1}%; background-color: {}",
                                slice.percent,
                                slice.color,
                            );
                            let dot = format!("background-color: {}", slice.color);
                            view! {
                                <div class="space-y-1">
                                    <div class="flex items-center justify-between text-sm">
                                        <span class="flex items-center gap-2">
                                            <span
                                                class="inline-block w-3 h-3 rounded-full"
                                                style=dot
                                            ></span>
                                            {slice.label}
                                        </span>
                                        <span class="opacity-70">
                                            {format!("{} ({:.1}%)", slice.count, slice.percent)}
                                        </span>
                                    </div>
                                    <div class="w-full bg-base-200 rounded h-2">
                                        <div class="h-2 rounded" style=width></div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}
