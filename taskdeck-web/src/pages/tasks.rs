use shared::models::task::{
    CreateTaskRequest, SortKey, SortOrder, StatusFilter, Task, TaskQuery, UpdateTaskRequest,
    filter_tasks,
};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

use crate::api::TaskDeckClient;
use crate::components::{TaskForm, TaskFormData, TaskList, Toast};
use crate::session::Session;

/// Task list page: filters, search, and the full CRUD surface.
///
/// Every mutation re-fetches the list from the backend; the fetched copy is
/// never reconciled locally.
#[function_component(TasksPage)]
pub fn tasks_page() -> Html {
    let tasks = use_state(Vec::<Task>::new);
    let status = use_state(StatusFilter::default);
    let sort = use_state(SortKey::default);
    let order = use_state(SortOrder::default);
    let search = use_state(String::new);
    let editing = use_state(|| None::<Task>);
    let busy_task = use_state(|| None::<String>);
    let form_busy = use_state(|| false);
    let error = use_state(|| None::<String>);
    // Bumped after every mutation to re-run the fetch effect.
    let reload = use_state(|| 0u32);
    let user_id = use_selector(|session: &Session| {
        session.user.as_ref().map(|user| user.id.clone())
    });

    {
        let tasks_handle = tasks.clone();
        let error_handle = error.clone();
        let deps = ((*user_id).clone(), *status, *sort, *order, *reload);
        use_effect_with(deps, move |(id_opt, status, sort, order, _)| {
            if let Some(id) = id_opt.clone() {
                let query = TaskQuery {
                    status: *status,
                    sort: Some(*sort),
                    order: Some(*order),
                    ..TaskQuery::default()
                };
                spawn_local(async move {
                    let client = TaskDeckClient::shared();
                    match client.list_tasks(&id, &query).await {
                        Ok(fetched) => {
                            tasks_handle.set(fetched);
                            error_handle.set(None);
                        }
                        Err(err) => {
                            error_handle.set(Some(format!("Failed to load tasks: {err}")));
                        }
                    }
                });
            }
            || ()
        });
    }

    let bump_reload = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(reload.wrapping_add(1)))
    };

    let on_form_submit = {
        let user_id = user_id.clone();
        let editing_handle = editing.clone();
        let form_busy = form_busy.clone();
        let error = error.clone();
        let bump_reload = bump_reload.clone();
        Callback::from(move |data: TaskFormData| {
            let Some(id) = (*user_id).clone() else {
                return;
            };
            if *form_busy {
                return;
            }
            form_busy.set(true);

            let editing_handle = editing_handle.clone();
            let form_busy = form_busy.clone();
            let error = error.clone();
            let bump_reload = bump_reload.clone();
            let current_edit = (*editing_handle).clone();
            spawn_local(async move {
                let client = TaskDeckClient::shared();
                let outcome = match current_edit {
                    Some(task) => {
                        let payload = UpdateTaskRequest {
                            title: Some(data.title),
                            description: data.description,
                            completed: None,
                        };
                        client.update_task(&id, &task.id, &payload).await.map(|_| ())
                    }
                    None => {
                        let payload = CreateTaskRequest::new(data.title, data.description);
                        client.create_task(&id, &payload).await.map(|_| ())
                    }
                };
                match outcome {
                    Ok(()) => {
                        editing_handle.set(None);
                        bump_reload.emit(());
                    }
                    Err(err) => {
                        error.set(Some(format!("Failed to save task: {err}")));
                    }
                }
                form_busy.set(false);
            });
        })
    };

    let on_toggle = {
        let user_id = user_id.clone();
        let busy_task = busy_task.clone();
        let error = error.clone();
        let bump_reload = bump_reload.clone();
        Callback::from(move |(task_id, completed): (String, bool)| {
            let Some(id) = (*user_id).clone() else {
                return;
            };
            if busy_task.is_some() {
                return;
            }
            busy_task.set(Some(task_id.clone()));

            let busy_task = busy_task.clone();
            let error = error.clone();
            let bump_reload = bump_reload.clone();
            spawn_local(async move {
                let client = TaskDeckClient::shared();
                match client.toggle_complete(&id, &task_id, completed).await {
                    Ok(_) => bump_reload.emit(()),
                    Err(err) => {
                        error.set(Some(format!("Failed to update task: {err}")));
                    }
                }
                busy_task.set(None);
            });
        })
    };

    let on_delete = {
        let user_id = user_id.clone();
        let busy_task = busy_task.clone();
        let error = error.clone();
        let bump_reload = bump_reload.clone();
        Callback::from(move |task_id: String| {
            let Some(id) = (*user_id).clone() else {
                return;
            };
            if busy_task.is_some() {
                return;
            }
            busy_task.set(Some(task_id.clone()));

            let busy_task = busy_task.clone();
            let error = error.clone();
            let bump_reload = bump_reload.clone();
            spawn_local(async move {
                let client = TaskDeckClient::shared();
                match client.delete_task(&id, &task_id).await {
                    Ok(()) => bump_reload.emit(()),
                    Err(err) => {
                        error.set(Some(format!("Failed to delete task: {err}")));
                    }
                }
                busy_task.set(None);
            });
        })
    };

    let on_edit = {
        let user_id = user_id.clone();
        let editing = editing.clone();
        Callback::from(move |task: Task| {
            let Some(id) = (*user_id).clone() else {
                return;
            };
            let editing = editing.clone();
            spawn_local(async move {
                // Edit the backend's current copy; the row may be stale.
                let client = TaskDeckClient::shared();
                match client.get_task(&id, &task.id).await {
                    Ok(fresh) => editing.set(Some(fresh)),
                    Err(_) => editing.set(Some(task)),
                }
            });
        })
    };

    let on_cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |()| editing.set(None))
    };

    let on_status_change = {
        let status = status.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                status.set(select.value().parse().unwrap_or_default());
            }
        })
    };

    let on_sort_change = {
        let sort = sort.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                sort.set(select.value().parse().unwrap_or_default());
            }
        })
    };

    let on_order_toggle = {
        let order = order.clone();
        Callback::from(move |_: MouseEvent| {
            let next = match *order {
                SortOrder::Asc => SortOrder::Desc,
                SortOrder::Desc => SortOrder::Asc,
            };
            order.set(next);
        })
    };

    let on_search_change = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    let on_dismiss = {
        let error = error.clone();
        Callback::from(move |()| error.set(None))
    };

    // The backend already filtered by status; the search box narrows locally.
    let visible = filter_tasks(&tasks, *status, &search);

    let order_icon = match *order {
        SortOrder::Asc => IconId::HeroiconsOutlineArrowUp,
        SortOrder::Desc => IconId::HeroiconsOutlineArrowDown,
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Tasks"}</h1>

            <TaskForm
                editing={(*editing).clone()}
                busy={*form_busy}
                on_submit={on_form_submit}
                on_cancel={(*editing).is_some().then_some(on_cancel_edit)}
            />

            <div class="flex flex-wrap items-center gap-2">
                <select class="select select-bordered select-sm" onchange={on_status_change}>
                    { for StatusFilter::iter().map(|option| html! {
                        <option
                            value={option.to_string()}
                            selected={option == *status}
                        >
                            { option.label() }
                        </option>
                    }) }
                </select>
                <select class="select select-bordered select-sm" onchange={on_sort_change}>
                    { for SortKey::iter().map(|option| html! {
                        <option
                            value={option.to_string()}
                            selected={option == *sort}
                        >
                            { option.label() }
                        </option>
                    }) }
                </select>
                <button class="btn btn-ghost btn-sm" type="button" onclick={on_order_toggle}>
                    <Icon icon_id={order_icon} class="w-4 h-4" />
                </button>
                <input
                    class="input input-bordered input-sm flex-1 min-w-48"
                    type="search"
                    placeholder="Search tasks..."
                    value={(*search).clone()}
                    oninput={on_search_change}
                />
            </div>

            <TaskList
                tasks={visible}
                busy_task={(*busy_task).clone()}
                on_toggle={on_toggle}
                on_edit={on_edit}
                on_delete={on_delete}
            />

            <Toast message={(*error).clone()} on_dismiss={on_dismiss} />
        </div>
    }
}
