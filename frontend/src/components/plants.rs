//! 电站管理页面
//!
//! 列表与表单在同一页：表单既用于新增也用于编辑（带回填）。
//! 任何变更成功后都重新取数，本地副本不作为权威数据。

use crate::api::{ApiError, use_api};
use crate::components::widgets::{EmptyState, ErrorAlert, LoadingSpinner};
use leptos::prelude::*;
use leptos::task::spawn_local;
use solarwatch_shared::Plant;
use solarwatch_shared::date::format_optional;
use solarwatch_shared::protocol::PlantRequest;

#[component]
pub fn PlantsPage() -> impl IntoView {
    let api = use_api();

    let (plants, set_plants) = signal(Vec::<Plant>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    // 表单状态
    let (name, set_name) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (capacity, set_capacity) = signal(String::new());
    let (editing, set_editing) = signal(Option::<i64>::None);
    let (saving, set_saving) = signal(false);

    let load = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.plants.list().await {
                    Ok(list) => {
                        set_plants.set(list);
                        set_error.set(None);
                    }
                    Err(err) => set_error.set(Some(err.to_string())),
                }
                set_loading.set(false);
            });
        }
    };
    load();

    let reset_form = move || {
        set_name.set(String::new());
        set_location.set(String::new());
        set_capacity.set(String::new());
        set_editing.set(None);
    };

    let on_submit = {
        let api = api.clone();
        let load = load.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            if name.get().trim().is_empty() || location.get().trim().is_empty() {
                set_error.set(Some("请填写电站名称与位置".to_string()));
                return;
            }
            let capacity_kw = match capacity.get().trim().parse::<f64>() {
                Ok(value) if value.is_finite() => value,
                _ => {
                    set_error.set(Some(
                        ApiError::validation("capacityKW must be a valid number").to_string(),
                    ));
                    return;
                }
            };

            let request = PlantRequest {
                name: name.get_untracked().trim().to_string(),
                location: location.get_untracked().trim().to_string(),
                capacity_kw,
            };

            set_saving.set(true);
            set_error.set(None);
            let api = api.clone();
            let load = load.clone();
            let editing_id = editing.get_untracked();
            spawn_local(async move {
                let result = match editing_id {
                    Some(id) => api.plants.update(id, &request).await.map(|_| ()),
                    None => api.plants.create(&request).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        reset_form();
                        // 以服务端为准，重新取数
                        load();
                    }
                    Err(err) => set_error.set(Some(err.to_string())),
                }
                set_saving.set(false);
            });
        }
    };

    let edit = Callback::new(move |plant: Plant| {
        set_name.set(plant.name.clone());
        set_location.set(plant.location.clone());
        set_capacity.set(plant.capacity_kw.to_string());
        set_editing.set(Some(plant.id));
    });

    let delete = Callback::new({
        let api = api.clone();
        let load = load.clone();
        move |id: i64| {
            let api = api.clone();
            let load = load.clone();
            spawn_local(async move {
                match api.plants.delete(id).await {
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
                <h1 class="text-2xl font-bold">"电站管理"</h1>
                <p class="text-base-content/60 text-sm">
                    "站点的增删改查；删除电站会级联删除其下属面板"
                </p>
            </div>

            <ErrorAlert message=error on_retry=retry />

            // 新增 / 编辑表单
            <div class="card bg-base-100 shadow p-4">
                <form class="flex flex-wrap gap-3 items-end" on:submit=on_submit>
                    <div class="form-control">
                        <label class="label"><span class="label-text">"名称"</span></label>
                        <input
                            type="text"
                            class="input input-bordered input-sm"
                            placeholder="Solar Farm A"
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">"位置"</span></label>
                        <input
                            type="text"
                            class="input input-bordered input-sm"
                            placeholder="CA"
                            prop:value=location
                            on:input=move |ev| set_location.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"容量 (kW)"</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered input-sm"
                            placeholder="5000"
                            prop:value=capacity
                            on:input=move |ev| set_capacity.set(event_target_value(&ev))
                        />
                    </div>
                    <button class="btn btn-primary btn-sm" disabled=move || saving.get()>
                        {move || {
                            if editing.get().is_some() { "保存修改" } else { "新增电站" }
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

            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSpinner message="加载电站列表..." /> }
            >
                <Show
                    when=move || !plants.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="card bg-base-100 shadow">
                                <EmptyState
                                    icon="🏭"
                                    title="暂无电站"
                                    description="使用上方表单创建第一个电站"
                                />
                            </div>
                        }
                    }
                >
                    <div class="card bg-base-100 shadow overflow-x-auto">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"名称"</th>
                                    <th>"位置"</th>
                                    <th>"容量 (kW)"</th>
                                    <th>"面板数"</th>
                                    <th class="hidden md:table-cell">"创建时间"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || plants.get()
                                    key=|plant| plant.id
                                    children=move |plant: Plant| {
                                        let id = plant.id;
                                        let plant_for_edit = plant.clone();
                                        let created = format_optional(&plant.created_at);
                                        let panel_count = plant
                                            .panel_count
                                            .map(|n| n.to_string())
                                            .unwrap_or_else(|| "--".to_string());
                                        view! {
                                            <tr>
                                                <td class="font-bold">{plant.name.clone()}</td>
                                                <td>{plant.location.clone()}</td>
                                                <td>{format!("{:.1}", plant.capacity_kw)}</td>
                                                <td>{panel_count}</td>
                                                <td class="hidden md:table-cell text-xs opacity-60">
                                                    {created}
                                                </td>
                                                <td class="flex gap-1">
                                                    <button
                                                        class="btn btn-xs btn-outline"
                                                        on:click=move |_| {
                                                            edit.run(plant_for_edit.clone())
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
