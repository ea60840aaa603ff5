use shared::models::task::Task;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
    pub tasks: Vec<Task>,
    /// Id of the task with a mutation in flight; its controls are disabled.
    #[prop_or_default]
    pub busy_task: Option<String>,
    /// Emits `(task_id, new_completed)` when a row checkbox is flipped.
    pub on_toggle: Callback<(String, bool)>,
    pub on_edit: Callback<Task>,
    pub on_delete: Callback<String>,
}

#[function_component(TaskList)]
pub fn task_list(props: &TaskListProps) -> Html {
    if props.tasks.is_empty() {
        return html! {
            <div class="text-center text-base-content/60 py-8">
                {"No tasks match. Add one above."}
            </div>
        };
    }

    let rows = props.tasks.iter().map(|task| {
        let row_busy = props.busy_task.as_deref() == Some(task.id.as_str());

        let on_toggle = {
            let on_toggle = props.on_toggle.clone();
            let id = task.id.clone();
            let next = !task.completed;
            Callback::from(move |_: Event| on_toggle.emit((id.clone(), next)))
        };
        let on_edit = {
            let on_edit = props.on_edit.clone();
            let task = task.clone();
            Callback::from(move |_: MouseEvent| on_edit.emit(task.clone()))
        };
        let on_delete = {
            let on_delete = props.on_delete.clone();
            let id = task.id.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
        };

        let title_class = if task.completed {
            "line-through text-base-content/50"
        } else {
            ""
        };

        html! {
            <tr key={task.id.clone()}>
                <td>
                    <input
                        type="checkbox"
                        class="checkbox checkbox-success"
                        checked={task.completed}
                        disabled={row_busy}
                        onchange={on_toggle}
                    />
                </td>
                <td>
                    <div class={classes!("font-medium", title_class)}>{ &task.title }</div>
                    {
                        task.description.as_ref().map_or_else(
                            || html! {},
                            |description| html! {
                                <div class="text-sm text-base-content/60">{ description }</div>
                            },
                        )
                    }
                </td>
                <td class="text-sm text-base-content/60">{ task.created_at.clone() }</td>
                <td>
                    {
                        if task.completed {
                            html! { <span class="badge badge-success badge-outline">{"Done"}</span> }
                        } else {
                            html! { <span class="badge badge-outline">{"Open"}</span> }
                        }
                    }
                </td>
                <td class="text-right">
                    <button class="btn btn-ghost btn-sm" type="button" disabled={row_busy} onclick={on_edit}>
                        <Icon icon_id={IconId::HeroiconsOutlinePencilSquare} class="w-4 h-4" />
                    </button>
                    <button class="btn btn-ghost btn-sm text-error" type="button" disabled={row_busy} onclick={on_delete}>
                        {
                            if row_busy {
                                html! { <span class="loading loading-spinner loading-xs"></span> }
                            } else {
                                html! { <Icon icon_id={IconId::HeroiconsOutlineTrash} class="w-4 h-4" /> }
                            }
                        }
                    </button>
                </td>
            </tr>
        }
    });

    html! {
        <div class="overflow-x-auto">
            <table class="table">
                <thead>
                    <tr>
                        <th></th>
                        <th>{"Task"}</th>
                        <th>{"Created"}</th>
                        <th>{"Status"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for rows }
                </tbody>
            </table>
        </div>
    }
}
