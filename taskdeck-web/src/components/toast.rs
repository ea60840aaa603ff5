use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    /// Message to display; `None` hides the toast.
    #[prop_or_default]
    pub message: Option<String>,
    /// Invoked when the toast is dismissed, by click or timeout.
    pub on_dismiss: Callback<()>,
}

/// Transient dismissible error notification.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.message.clone(), move |message| {
            let timer = message
                .as_ref()
                .map(|_| Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(())));
            move || drop(timer)
        });
    }

    let Some(message) = props.message.clone() else {
        return html! {};
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast toast-end z-50">
            <div class="alert alert-error shadow-lg">
                <span>{ message }</span>
                <button class="btn btn-ghost btn-xs" type="button" {onclick}>{"✕"}</button>
            </div>
        </div>
    }
}
