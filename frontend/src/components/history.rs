//! 预测历史页面
//!
//! 过滤参数属于服务端查询：每次变更重新发起请求；
//! 响应可能是分页信封或平铺数组，解析交给 `HistoryResponse`。
//! 连续请求用单调序号守卫，过期响应直接丢弃。

use crate::api::use_api;
use crate::components::widgets::{
    ConfidenceBar, EmptyState, ErrorAlert, LoadingSpinner, SeverityBadge,
};
use crate::web::RequestSeq;
use leptos::prelude::*;
use leptos::task::spawn_local;
use solarwatch_shared::date::format_optional;
use solarwatch_shared::protocol::{HistoryQuery, Pagination};
use solarwatch_shared::{FaultType, Prediction, Severity};

/// 每页条数
const PAGE_SIZE: u32 = 20;

fn parse_fault(value: &str) -> Option<FaultType> {
    FaultType::ALL.into_iter().find(|f| f.as_str() == value)
}

fn parse_severity(value: &str) -> Option<Severity> {
    Severity::FILTERABLE
        .into_iter()
        .chain([Severity::None])
        .find(|s| s.as_str() == value)
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let api = use_api();

    let (predictions, set_predictions) = signal(Vec::<Prediction>::new());
    let (pagination, set_pagination) = signal(Pagination::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (fault_filter, set_fault_filter) = signal(Option::<FaultType>::None);
    let (severity_filter, set_severity_filter) = signal(Option::<Severity>::None);
    let seq = RequestSeq::new();

    let fetch_page = {
        let api = api.clone();
        let seq = seq.clone();
        move |page: u32| {
            let api = api.clone();
            let seq = seq.clone();
            let token = seq.next();
            let query = HistoryQuery {
                page,
                size: PAGE_SIZE,
                fault_type: fault_filter.get_untracked(),
                severity: severity_filter.get_untracked(),
            };
            set_loading.set(true);
            spawn_local(async move {
                let result = api.predictions.history(&query).await;
                // 期间有更新的请求发出：本次响应已过期
                if !seq.is_current(token) {
                    return;
                }
                match result {
                    Ok(response) => {
                        let (items, page_info) = response.into_parts();
                        set_predictions.set(items);
                        set_pagination.set(page_info);
                        set_error.set(None);
                    }
                    Err(err) => set_error.set(Some(err.to_string())),
                }
                set_loading.set(false);
            });
        }
    };

    fetch_page(0);

    let on_fault_change = {
        let fetch_page = fetch_page.clone();
        move |ev| {
            set_fault_filter.set(parse_fault(&event_target_value(&ev)));
            fetch_page(0);
        }
    };
    let on_severity_change = {
        let fetch_page = fetch_page.clone();
        move |ev| {
            set_severity_filter.set(parse_severity(&event_target_value(&ev)));
            fetch_page(0);
        }
    };
    let prev_page = Callback::new({
        let fetch_page = fetch_page.clone();
        move |_: ()| {
            let p = pagination.get_untracked();
            if p.has_prev() {
                fetch_page(p.page - 1);
            }
        }
    });
    let next_page = Callback::new({
        let fetch_page = fetch_page.clone();
        move |_: ()| {
            let p = pagination.get_untracked();
            if p.has_next() {
                fetch_page(p.page + 1);
            }
        }
    });
    let retry = Callback::new({
        let fetch_page = fetch_page.clone();
        move |_| fetch_page(pagination.get_untracked().page)
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">"预测历史"</h1>
                <p class="text-base-content/60 text-sm">"查看并筛选全部故障检测记录"</p>
            </div>

            <ErrorAlert message=error on_retry=retry />

            // 服务端过滤条件
            <div class="card bg-base-100 shadow p-4">
                <div class="flex flex-wrap gap-4 items-end">
                    <div class="form-control">
                        <label class="label"><span class="label-text">"故障类别"</span></label>
                        <select class="select select-bordered select-sm" on:change=on_fault_change>
                            <option value="">"全部类别"</option>
                            {FaultType::ALL
                                .into_iter()
                                .map(|fault| {
                                    view! { <option value=fault.as_str()>{fault.as_str()}</option> }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">"严重程度"</span></label>
                        <select
                            class="select select-bordered select-sm"
                            on:change=on_severity_change
                        >
                            <option value="">"全部"</option>
                            {Severity::FILTERABLE
                                .into_iter()
                                .map(|severity| {
                                    view! {
                                        <option value=severity.as_str()>{severity.as_str()}</option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="text-sm opacity-60 ml-auto">
                        {move || format!("共 {} 条记录", pagination.get().total_elements)}
                    </div>
                </div>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSpinner message="加载历史记录..." /> }
            >
                <Show
                    when=move || !predictions.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="card bg-base-100 shadow">
                                <EmptyState
                                    icon="🗂"
                                    title="暂无记录"
                                    description="当前筛选条件下没有预测记录"
                                />
                            </div>
                        }
                    }
                >
                    <div class="card bg-base-100 shadow overflow-x-auto">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"时间"</th>
                                    <th>"预测故障"</th>
                                    <th>"严重程度"</th>
                                    <th>"置信度"</th>
                                    <th class="hidden md:table-cell">"说明"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || predictions.get()
                                    key=|p| (p.id, p.timestamp)
                                    children=move |prediction: Prediction| {
                                        let timestamp = format_optional(&prediction.timestamp);
                                        let fault = prediction.predicted_fault.as_str();
                                        let severity = prediction.severity;
                                        let confidence = prediction.confidence;
                                        let score = prediction.confidence_score;
                                        let description =
                                            prediction.description.clone().unwrap_or_default();
                                        view! {
                                            <tr>
                                                <td class="text-xs">{timestamp}</td>
                                                <td>
                                                    <span class="badge badge-ghost">{fault}</span>
                                                </td>
                                                <td>
                                                    <SeverityBadge severity=severity />
                                                </td>
                                                <td>
                                                    <ConfidenceBar
                                                        confidence=confidence
                                                        score=score
                                                    />
                                                </td>
                                                <td class="hidden md:table-cell text-xs opacity-70">
                                                    {description}
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>

                    // 客户端翻页，受 totalPages 约束
                    <div class="flex items-center justify-center gap-4">
                        <button
                            class="btn btn-sm"
                            disabled=move || !pagination.get().has_prev()
                            on:click=move |_| prev_page.run(())
                        >
                            "上一页"
                        </button>
                        <span class="text-sm opacity-70">
                            {move || {
                                let p = pagination.get();
                                format!("第 {} / {} 页", p.page + 1, p.total_pages.max(1))
                            }}
                        </span>
                        <button
                            class="btn btn-sm"
                            disabled=move || !pagination.get().has_next()
                            on:click=move |_| next_page.run(())
                        >
                            "下一页"
                        </button>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
