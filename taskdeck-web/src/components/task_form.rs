use shared::models::task::Task;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Trimmed form input handed back to the page on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFormData {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
    /// Task being edited; `None` means the form creates a new one.
    #[prop_or_default]
    pub editing: Option<Task>,
    /// True while the submitting request is in flight.
    #[prop_or_default]
    pub busy: bool,
    pub on_submit: Callback<TaskFormData>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

#[function_component(TaskForm)]
pub fn task_form(props: &TaskFormProps) -> Html {
    let title = use_state(String::new);
    let description = use_state(String::new);

    // Reload the fields whenever a different task enters edit mode.
    {
        let title = title.clone();
        let description = description.clone();
        use_effect_with(props.editing.clone(), move |editing| {
            match editing {
                Some(task) => {
                    title.set(task.title.clone());
                    description.set(task.description.clone().unwrap_or_default());
                }
                None => {
                    title.set(String::new());
                    description.set(String::new());
                }
            }
            || ()
        });
    }

    let onsubmit = {
        let title_handle = title.clone();
        let description_handle = description.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let trimmed_title = (*title_handle).trim().to_string();
            if trimmed_title.is_empty() {
                return;
            }
            let trimmed_description = (*description_handle).trim().to_string();
            on_submit.emit(TaskFormData {
                title: trimmed_title,
                description: (!trimmed_description.is_empty()).then_some(trimmed_description),
            });
            title_handle.set(String::new());
            description_handle.set(String::new());
        })
    };

    let on_title_change = {
        let title = title.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                title.set(input.value());
            }
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                description.set(input.value());
            }
        })
    };

    let is_editing = props.editing.is_some();
    let heading = if is_editing { "Edit task" } else { "New task" };
    let submit_label = if is_editing { "Save" } else { "Add task" };
    let disable_submit = (*title).trim().is_empty() || props.busy;

    let cancel_button = props.on_cancel.clone().map(|on_cancel| {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_cancel.emit(());
        });
        html! {
            <button class="btn btn-ghost" type="button" {onclick}>{"Cancel"}</button>
        }
    });

    html! {
        <form class="card bg-base-200 shadow p-4 space-y-3" onsubmit={onsubmit}>
            <h2 class="font-semibold">{ heading }</h2>
            <div class="form-control">
                <label class="label" for="task-title">
                    <span class="label-text">{"Title"}</span>
                </label>
                <input
                    id="task-title"
                    class="input input-bordered"
                    type="text"
                    required=true
                    value={(*title).clone()}
                    oninput={on_title_change}
                />
            </div>
            <div class="form-control">
                <label class="label" for="task-description">
                    <span class="label-text">{"Description"}</span>
                </label>
                <textarea
                    id="task-description"
                    class="textarea textarea-bordered"
                    value={(*description).clone()}
                    oninput={on_description_change}
                />
            </div>
            <div class="flex justify-end gap-2">
                { cancel_button }
                <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                    { if props.busy { "Saving..." } else { submit_label } }
                </button>
            </div>
        </form>
    }
}
