//! 无状态展示组件
//!
//! 徽标、进度条、错误提示等纯 Props 驱动的渲染器，
//! 不发请求、不持有业务状态。

use leptos::prelude::*;
use solarwatch_shared::{AlertStatus, ConfidenceLevel, PanelStatus, Severity};

// =========================================================
// 徽标配色
// =========================================================

pub fn severity_badge_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "badge badge-error",
        Severity::High => "badge badge-warning",
        Severity::Medium => "badge badge-info",
        Severity::Low => "badge badge-success",
        Severity::None => "badge badge-ghost",
    }
}

pub fn status_badge_class(status: AlertStatus) -> &'static str {
    match status {
        AlertStatus::Open => "badge badge-warning badge-outline",
        AlertStatus::InProgress => "badge badge-info badge-outline",
        AlertStatus::Resolved => "badge badge-success badge-outline",
    }
}

pub fn panel_status_badge_class(status: PanelStatus) -> &'static str {
    match status {
        PanelStatus::Active => "badge badge-success",
        PanelStatus::Maintenance => "badge badge-warning",
        PanelStatus::Offline => "badge badge-ghost",
    }
}

// =========================================================
// 组件
// =========================================================

/// 严重程度徽标
#[component]
pub fn SeverityBadge(severity: Severity) -> impl IntoView {
    view! { <span class=severity_badge_class(severity)>{severity.as_str()}</span> }
}

/// 告警状态徽标
#[component]
pub fn StatusBadge(status: AlertStatus) -> impl IntoView {
    view! { <span class=status_badge_class(status)>{status.as_str()}</span> }
}

/// 面板运行状态徽标
#[component]
pub fn PanelStatusBadge(status: PanelStatus) -> impl IntoView {
    view! { <span class=panel_status_badge_class(status)>{status.as_str()}</span> }
}

/// 置信度进度条
#[component]
pub fn ConfidenceBar(confidence: ConfidenceLevel, score: f64) -> impl IntoView {
    let percent = (score * 100.0).clamp(0.0, 100.0);
    view! {
        <div class="flex items-center gap-2">
            <progress class="progress progress-primary w-32" value=percent max="100"></progress>
            <span class="text-sm opacity-70">
                {format!("{} ({:.1}%)", confidence.as_str(), percent)}
            </span>
        </div>
    }
}

/// 加载指示
#[component]
pub fn LoadingSpinner(#[prop(optional)] message: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-3 py-8 text-base-content/60">
            <span class="loading loading-spinner loading-md"></span>
            {message.map(|msg| view! { <span>{msg}</span> })}
        </div>
    }
}

/// 页面级错误提示，带可选的重试按钮
///
/// 所有页面的取数失败都走这里展示，重试回调重新发起同一次请求。
#[component]
pub fn ErrorAlert(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div role="alert" class="alert alert-error mb-4">
                <span>{move || message.get().unwrap_or_default()}</span>
                {on_retry.map(|retry| {
                    view! {
                        <button class="btn btn-sm btn-outline" on:click=move |_| retry.run(())>
                            "重试"
                        </button>
                    }
                })}
            </div>
        </Show>
    }
}

/// 空状态占位
#[component]
pub fn EmptyState(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 text-base-content/60">
            <div class="text-4xl mb-2">{icon}</div>
            <h3 class="text-lg font-bold">{title}</h3>
            <p class="text-sm">{description}</p>
        </div>
    }
}

/// 统计卡片
#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] desc: Option<&'static str>,
    #[prop(optional, default = "stat-value")] value_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-title">{title}</div>
            <div class=value_class>{move || value.get()}</div>
            {desc.map(|d| view! { <div class="stat-desc">{d}</div> })}
        </div>
    }
}

/// 合成数据提示徽标（后端不可用时展示）
#[component]
pub fn SyntheticBadge(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <span class="badge badge-neutral badge-outline" title="后端不可用，当前展示本地合成数据">
                "演示数据"
            </span>
        </Show>
    }
}
