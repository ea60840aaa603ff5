use shared::models::task::{SortKey, SortOrder, Task, TaskQuery, TaskStats, sort_tasks};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::api::TaskDeckClient;
use crate::components::Toast;
use crate::routes::MainRoute;
use crate::session::Session;

const RECENT_TASK_COUNT: usize = 5;

/// Dashboard page: aggregate statistics plus quick navigation.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let tasks = use_state(Vec::<Task>::new);
    let error = use_state(|| None::<String>);
    let user_id = use_selector(|session: &Session| {
        session.user.as_ref().map(|user| user.id.clone())
    });

    {
        let tasks_handle = tasks.clone();
        let error_handle = error.clone();
        use_effect_with((*user_id).clone(), move |id_opt| {
            if let Some(id) = id_opt.clone() {
                spawn_local(async move {
                    let client = TaskDeckClient::shared();
                    match client.list_tasks(&id, &TaskQuery::default()).await {
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

    let stats = TaskStats::from_tasks(&tasks);

    let recent = {
        let mut recent = (*tasks).clone();
        sort_tasks(&mut recent, SortKey::CreatedAt, SortOrder::Desc);
        recent.truncate(RECENT_TASK_COUNT);
        recent
    };

    let on_dismiss = {
        let error = error.clone();
        Callback::from(move |()| error.set(None))
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Dashboard"}</h1>

            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineClipboardDocumentList} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Total"}</div>
                    <div class="stat-value text-primary">{ stats.total }</div>
                    <div class="stat-desc">{"Tasks on your list"}</div>
                </div>

                <div class="stat">
                    <div class="stat-figure text-success">
                        <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Completed"}</div>
                    <div class="stat-value text-success">{ stats.completed }</div>
                    <div class="stat-desc">{ format!("{}% done", stats.completion_percent) }</div>
                </div>

                <div class="stat">
                    <div class="stat-figure text-secondary">
                        <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Pending"}</div>
                    <div class="stat-value text-secondary">{ stats.pending }</div>
                    <div class="stat-desc">{"Still open"}</div>
                </div>
            </div>

            <progress
                class="progress progress-success w-full"
                value={stats.completion_percent.to_string()}
                max="100"
            />

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                // Tasks card
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineClipboardDocumentList} class="w-6 h-6" />
                            {"Tasks"}
                        </h2>
                        <p>{"Create, edit and complete your to-dos."}</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Tasks} classes="btn btn-primary">
                                {"Open tasks"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>

                // Assistant card
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-6 h-6" />
                            {"Assistant"}
                        </h2>
                        <p>{"Ask the assistant about your day."}</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Assistant} classes="btn btn-secondary">
                                {"Start chatting"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
            </div>

            <div class="card bg-base-200 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Recently added"}</h2>
                    {
                        if recent.is_empty() {
                            html! { <p class="text-base-content/60">{"Nothing here yet."}</p> }
                        } else {
                            html! {
                                <ul class="space-y-1">
                                    { for recent.iter().map(|task| html! {
                                        <li key={task.id.clone()} class="flex items-center gap-2">
                                            {
                                                if task.completed {
                                                    html! { <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-4 h-4 text-success" /> }
                                                } else {
                                                    html! { <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-4 h-4 text-secondary" /> }
                                                }
                                            }
                                            <span>{ &task.title }</span>
                                        </li>
                                    }) }
                                </ul>
                            }
                        }
                    }
                </div>
            </div>

            <Toast message={(*error).clone()} on_dismiss={on_dismiss} />
        </div>
    }
}
