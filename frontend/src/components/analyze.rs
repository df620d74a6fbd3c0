//! 传感器数据分析页面
//!
//! 字段校验在本地完成（失败不发请求）；后端分析不可用时降级到
//! 离线规则分类器，结果上标注数据来源。

mod form_state;

use crate::api::{classify, use_api};
use crate::components::widgets::{ConfidenceBar, EmptyState, SeverityBadge};
use form_state::{FormState, Sample};
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use solarwatch_shared::Prediction;
use solarwatch_shared::date::{format_optional, from_unix_millis};

#[component]
pub fn AnalyzePage() -> impl IntoView {
    let api = use_api();
    let form = FormState::new();

    let (result, set_result) = signal(Option::<Prediction>::None);
    // 结果是否来自离线分类器
    let (offline, set_offline) = signal(false);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let api_submit = api.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_result.set(None);

        // 校验失败直接返回，不发出任何网络请求
        let reading = match form.to_reading() {
            Ok(reading) => reading,
            Err(err) => {
                set_error.set(Some(err.to_string()));
                return;
            }
        };

        set_loading.set(true);
        let api = api_submit.clone();
        spawn_local(async move {
            let now = from_unix_millis(js_sys::Date::now() as i64);
            match api.predictions.analyze(&reading).await {
                Ok(prediction) => {
                    set_offline.set(false);
                    set_result.set(Some(prediction));
                }
                Err(err) => {
                    // 后端不可用时的降级：离线规则分类器，表单保持可演示
                    warn!("后端分析不可用，使用离线规则分类器: {}", err);
                    set_offline.set(true);
                    set_result.set(Some(classify(&reading, now)));
                }
            }
            set_loading.set(false);
        });
    };

    let reset = move |_| {
        form.reset();
        set_result.set(None);
        set_error.set(None);
    };

    let load_sample = move |sample: Sample| {
        form.load_sample(sample);
        set_result.set(None);
        set_error.set(None);
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">"传感器数据分析"</h1>
                <p class="text-base-content/60 text-sm">"输入面板传感器读数以检测潜在故障"</p>
            </div>

            <div class="grid lg:grid-cols-2 gap-6">
                // 输入表单
                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body gap-3" on:submit=on_submit>
                        <h3 class="card-title">"传感器读数"</h3>

                        <Show when=move || error.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="grid grid-cols-2 gap-3">
                            <SensorField
                                label="电压 Voltage (V)"
                                placeholder="例如 32.5"
                                value=form.voltage
                            />
                            <SensorField
                                label="电流 Current (A)"
                                placeholder="例如 8.2"
                                value=form.current
                            />
                            <SensorField
                                label="温度 Temperature (°C)"
                                placeholder="例如 25.0"
                                value=form.temperature
                            />
                            <SensorField
                                label="辐照度 Irradiance (W/m²)"
                                placeholder="例如 850.0"
                                value=form.irradiance
                            />
                        </div>
                        <SensorField
                            label="功率 Power (W)"
                            placeholder="例如 266.5"
                            value=form.power
                        />

                        <div class="flex gap-2 mt-2">
                            <button class="btn btn-primary" disabled=move || loading.get()>
                                {move || {
                                    if loading.get() { "分析中..." } else { "🔍 分析" }
                                }}
                            </button>
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=reset
                                disabled=move || loading.get()
                            >
                                "重置"
                            </button>
                        </div>

                        <div class="divider text-xs">"填充示例数据"</div>
                        <div class="flex flex-wrap gap-2">
                            <button
                                type="button"
                                class="btn btn-xs btn-success btn-outline"
                                on:click=move |_| load_sample(Sample::Normal)
                            >
                                "正常面板"
                            </button>
                            <button
                                type="button"
                                class="btn btn-xs btn-warning btn-outline"
                                on:click=move |_| load_sample(Sample::Shaded)
                            >
                                "遮挡面板"
                            </button>
                            <button
                                type="button"
                                class="btn btn-xs btn-error btn-outline"
                                on:click=move |_| load_sample(Sample::Faulty)
                            >
                                "故障面板"
                            </button>
                        </div>
                    </form>
                </div>

                // 分析结果
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body gap-3">
                        <div class="flex items-center gap-2">
                            <h3 class="card-title">"分析结果"</h3>
                            <Show when=move || offline.get() && result.get().is_some()>
                                <span
                                    class="badge badge-neutral badge-outline"
                                    title="后端不可用，结果来自本地规则分类器"
                                >
                                    "离线规则"
                                </span>
                            </Show>
                        </div>

                        <Show when=move || loading.get()>
                            <div class="flex items-center gap-2 text-base-content/60">
                                <span class="loading loading-spinner loading-sm"></span>
                                "正在分析传感器数据..."
                            </div>
                        </Show>

                        {move || {
                            result
                                .get()
                                .map(|prediction| view! { <ResultCard prediction=prediction /> })
                        }}

                        <Show when=move || result.get().is_none() && !loading.get()>
                            <EmptyState
                                icon="🔍"
                                title="等待分析"
                                description="填写左侧表单并点击分析以检测潜在故障"
                            />
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// 单个数值输入框
#[component]
fn SensorField(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                type="text"
                class="input input-bordered"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// 结果卡片（纯展示）
#[component]
fn ResultCard(prediction: Prediction) -> impl IntoView {
    let fault = prediction.predicted_fault.as_str();
    let severity = prediction.severity;
    let confidence = prediction.confidence;
    let score = prediction.confidence_score;
    let description = prediction.description.clone();
    let recommendation = prediction.maintenance_recommendation.clone();
    let timestamp = format_optional(&prediction.timestamp);
    let probabilities: Vec<(&'static str, f64)> = prediction
        .all_probabilities
        .iter()
        .map(|(fault, probability)| (fault.as_str(), *probability))
        .collect();

    view! {
        <div class="space-y-3">
            <div class="flex items-center justify-between">
                <span class="text-xl font-bold">{fault}</span>
                <SeverityBadge severity=severity />
            </div>

            <ConfidenceBar confidence=confidence score=score />

            {description
                .map(|text| {
                    view! {
                        <div class="bg-base-200 rounded p-3 text-sm">
                            <div class="font-bold mb-1">"说明"</div>
                            {text}
                        </div>
                    }
                })}

            {recommendation
                .map(|text| {
                    view! {
                        <div class="bg-warning/10 border border-warning/30 rounded p-3 text-sm">
                            <div class="font-bold mb-1">"维护建议"</div>
                            {text}
                        </div>
                    }
                })}

            <div>
                <div class="font-bold text-sm mb-2">"各故障类别概率"</div>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-2">
                    {probabilities
                        .into_iter()
                        .map(|(fault, probability)| {
                            view! {
                                <div class="bg-base-200 rounded p-2">
                                    <div class="text-xs opacity-60">{fault}</div>
                                    <div class="font-bold">
                                        {format!("{:.1}%", probability * 100.0)}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="text-xs opacity-50 pt-2 border-t border-base-200">
                "分析完成于 " {timestamp}
            </div>
        </div>
    }
}
