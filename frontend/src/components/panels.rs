//! 面板管理页面
//!
//! 面板创建使用人工编号加电站引用；列表可按电站过滤
//! （走服务端的 plant 范围查询）。

use crate::api::{ApiError, use_api};
use crate::components::widgets::{EmptyState, ErrorAlert, LoadingSpinner, PanelStatusBadge};
use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use solarwatch_shared::protocol::PanelRequest;
use solarwatch_shared::{Panel, PanelStatus, Plant};

fn parse_status(value: &str) -> PanelStatus {
    PanelStatus::ALL
        .into_iter()
        .find(|status| status.as_str() == value)
        .unwrap_or_default()
}

#[component]
pub fn PanelsPage() -> impl IntoView {
    let api = use_api();

    let (panels, set_panels) = signal(Vec::<Panel>::new());
    let (plants, set_plants) = signal(Vec::<Plant>::new());
    let (plant_filter, set_plant_filter) = signal(Option::<i64>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    // 表单状态
    let (panel_code, set_panel_code) = signal(String::new());
    let (plant_choice, set_plant_choice) = signal(String::new());
    let (install_date, set_install_date) = signal(String::new());
    let (capacity, set_capacity) = signal(String::new());
    let (status, set_status) = signal(PanelStatus::Active);
    let (editing, set_editing) = signal(Option::<i64>::None);
    let (saving, set_saving) = signal(false);

    // 电站过滤变化时重新取数（服务端范围查询）
    let load = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                let result = match plant_filter.get_untracked() {
                    Some(plant_id) => api.panels.by_plant(plant_id).await,
                    None => api.panels.list().await,
                };
                match result {
                    Ok(list) => {
                        set_panels.set(list);
                        set_error.set(None);
                    }
                    Err(err) => set_error.set(Some(err.to_string())),
                }
                set_loading.set(false);
            });
        }
    };
    load();

    // 电站下拉选项只取一次
    {
        let api = api.clone();
        spawn_local(async move {
            if let Ok(list) = api.plants.list().await {
                set_plants.set(list);
            }
        });
    }

    let on_filter_change = {
        let load = load.clone();
        move |ev| {
            let value = event_target_value(&ev);
            set_plant_filter.set(value.parse::<i64>().ok());
            load();
        }
    };

    let reset_form = move || {
        set_panel_code.set(String::new());
        set_plant_choice.set(String::new());
        set_install_date.set(String::new());
        set_capacity.set(String::new());
        set_status.set(PanelStatus::Active);
        set_editing.set(None);
    };

    let on_submit = {
        let api = api.clone();
        let load = load.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            if panel_code.get().trim().is_empty() {
                set_error.set(Some("请填写面板编号".to_string()));
                return;
            }
            let Ok(plant_id) = plant_choice.get().parse::<i64>() else {
                set_error.set(Some("请选择所属电站".to_string()));
                return;
            };
            let capacity_watts = match capacity.get().trim().parse::<f64>() {
                Ok(value) if value.is_finite() => value,
                _ => {
                    set_error.set(Some(
                        ApiError::validation("capacity must be a valid number").to_string(),
                    ));
                    return;
                }
            };
            let date_input = install_date.get();
            let installation_date = if date_input.trim().is_empty() {
                None
            } else {
                match NaiveDate::parse_from_str(date_input.trim(), "%Y-%m-%d") {
                    Ok(date) => Some(date),
                    Err(_) => {
                        set_error.set(Some(
                            ApiError::validation("installationDate must be YYYY-MM-DD")
                                .to_string(),
                        ));
                        return;
                    }
                }
            };

            let request = PanelRequest {
                panel_id: panel_code.get_untracked().trim().to_string(),
                plant_id,
                installation_date,
                capacity: capacity_watts,
                status: status.get_untracked(),
                assigned_technician_id: None,
            };

            set_saving.set(true);
            set_error.set(None);
            let api = api.clone();
            let load = load.clone();
            let editing_id = editing.get_untracked();
            spawn_local(async move {
                let result = match editing_id {
                    Some(id) => api.panels.update(id, &request).await.map(|_| ()),
                    None => api.panels.create(&request).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        reset_form();
                        load();
                    }
                    Err(err) => set_error.set(Some(err.to_string())),
                }
                set_saving.set(false);
            });
        }
    };

    let edit = Callback::new(move |panel: Panel| {
        set_panel_code.set(panel.panel_id.clone());
        set_plant_choice.set(panel.plant_id.to_string());
        set_install_date.set(
            panel
                .installation_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );
        set_capacity.set(panel.capacity.to_string());
        set_status.set(panel.status);
        set_editing.set(Some(panel.id));
    });

    let delete = Callback::new({
        let api = api.clone();
        let load = load.clone();
        move |id: i64| {
            let api = api.clone();
            let load = load.clone();
            spawn_local(async move {
                match api.panels.delete(id).await {
                    Ok(()) => load(),
                    Err(err) => set_error.set(Some(err.to_string())),
                }
            });
        }
    });

    let retry = Callback::new({
        let load = load.clone();
        move |_| load()
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">"面板管理"</h1>
                <p class="text-base-content/60 text-sm">
                    "面板编号在系统内唯一；运行状态决定列表中的颜色标识"
                </p>
            </div>

            <ErrorAlert message=error on_retry=retry />

            // 新增 / 编辑表单
            <div class="card bg-base-100 shadow p-4">
                <form class="flex flex-wrap gap-3 items-end" on:submit=on_submit>
                    <div class="form-control">
                        <label class="label"><span class="label-text">"面板编号"</span></label>
                        <input
                            type="text"
                            class="input input-bordered input-sm"
                            placeholder="P001"
                            prop:value=panel_code
                            on:input=move |ev| set_panel_code.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">"所属电站"</span></label>
                        <select
                            class="select select-bordered select-sm"
                            prop:value=plant_choice
                            on:change=move |ev| set_plant_choice.set(event_target_value(&ev))
                        >
                            <option value="">"选择电站"</option>
                            <For
                                each=move || plants.get()
                                key=|plant| plant.id
                                children=move |plant: Plant| {
                                    view! {
                                        <option value=plant.id.to_string()>
                                            {plant.name.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">"安装日期"</span></label>
                        <input
                            type="text"
                            class="input input-bordered input-sm"
                            placeholder="2026-01-15"
                            prop:value=install_date
                            on:input=move |ev| set_install_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">"功率 (W)"</span></label>
                        <input
                            type="text"
                            class="input input-bordered input-sm"
                            placeholder="450"
                            prop:value=capacity
                            on:input=move |ev| set_capacity.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">"状态"</span></label>
                        <select
                            class="select select-bordered select-sm"
                            on:change=move |ev| set_status.set(parse_status(&event_target_value(&ev)))
                        >
                            {PanelStatus::ALL
                                .into_iter()
                                .map(|option| {
                                    view! {
                                        <option
                                            value=option.as_str()
                                            selected=move || status.get() == option
                                        >
                                            {option.as_str()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <button class="btn btn-primary btn-sm" disabled=move || saving.get()>
                        {move || {
                            if editing.get().is_some() { "保存修改" } else { "新增面板" }
                        }}
                    </button>
                    <Show when=move || editing.get().is_some()>
                        <button
                            type="button"
                            class="btn btn-ghost btn-sm"
                            on:click=move |_| reset_form()
                        >
                            "取消编辑"
                        </button>
                    </Show>
                </form>
            </div>

            // 电站过滤
            <div class="flex items-center gap-2">
                <span class="text-sm opacity-70">"按电站筛选："</span>
                <select class="select select-bordered select-sm" on:change=on_filter_change>
                    <option value="">"全部电站"</option>
                    <For
                        each=move || plants.get()
                        key=|plant| plant.id
                        children=move |plant: Plant| {
                            view! {
                                <option value=plant.id.to_string()>{plant.name.clone()}</option>
                            }
                        }
                    />
                </select>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSpinner message="加载面板列表..." /> }
            >
                <Show
                    when=move || !panels.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="card bg-base-100 shadow">
                                <EmptyState
                                    icon="🔆"
                                    title="暂无面板"
                                    description="使用上方表单登记第一块面板"
                                />
                            </div>
                        }
                    }
                >
                    <div class="card bg-base-100 shadow overflow-x-auto">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"编号"</th>
                                    <th>"电站"</th>
                                    <th class="hidden md:table-cell">"安装日期"</th>
                                    <th>"功率 (W)"</th>
                                    <th>"状态"</th>
                                    <th class="hidden md:table-cell">"维护技术员"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || panels.get()
                                    key=|panel| panel.id
                                    children=move |panel: Panel| {
                                        let id = panel.id;
                                        let panel_for_edit = panel.clone();
                                        let plant_name = panel
                                            .plant_name
                                            .clone()
                                            .unwrap_or_else(|| format!("#{}", panel.plant_id));
                                        let installed = panel
                                            .installation_date
                                            .map(|date| date.format("%Y-%m-%d").to_string())
                                            .unwrap_or_else(|| "--".to_string());
                                        let technician = panel
                                            .assigned_technician_id
                                            .map(|id| format!("#{}", id))
                                            .unwrap_or_else(|| "未指派".to_string());
                                        view! {
                                            <tr>
                                                <td class="font-mono font-bold">
                                                    {panel.panel_id.clone()}
                                                </td>
                                                <td>{plant_name}</td>
                                                <td class="hidden md:table-cell">{installed}</td>
                                                <td>{format!("{:.0}", panel.capacity)}</td>
                                                <td>
                                                    <PanelStatusBadge status=panel.status />
                                                </td>
                                                <td class="hidden md:table-cell text-xs opacity-60">
                                                    {technician}
                                                </td>
                                                <td class="flex gap-1">
                                                    <button
                                                        class="btn btn-xs btn-outline"
                                                        on:click=move |_| {
                                                            edit.run(panel_for_edit.clone())
                                                        }
                                                    >
                                                        "编辑"
                                                    </button>
                                                    <button
                                                        class="btn btn-xs btn-outline btn-error"
                                                        on:click=move |_| delete.run(id)
                                                    >
                                                        "删除"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
