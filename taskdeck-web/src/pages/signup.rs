use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::{use_selector, use_store};

use crate::routes::MainRoute;
use crate::session::{self, Session};

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_selector(|session: &Session| session.is_loading);
    let (_session, dispatch) = use_store::<Session>();
    let navigator = use_navigator();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let confirm_handle = confirm.clone();
        let error_handle = error.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            if *confirm_handle != password_value {
                error_handle.set(Some("passwords do not match".to_string()));
                return;
            }
            error_handle.set(None);
            let error_ref = error_handle.clone();
            let dispatch = dispatch.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                match session::signup(&dispatch, email_value, password_value).await {
                    Ok(()) => {
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Err(err) => {
                        error_ref.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let text_input = |id: &'static str,
                      label: &'static str,
                      kind: &'static str,
                      handle: &UseStateHandle<String>| {
        let handle_for_input = handle.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle_for_input.set(input.value());
            }
        });
        html! {
            <div class="form-control">
                <label class="label" for={id}>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id={id}
                    class="input input-bordered"
                    type={kind}
                    required=true
                    value={(**handle).clone()}
                    oninput={oninput}
                />
            </div>
        }
    };

    let is_busy = *busy;
    let disable_submit =
        (*email).is_empty() || (*password).is_empty() || (*confirm).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Create account"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    { text_input("email", "Email", "email", &email) }
                    { text_input("password", "Password", "password", &password) }
                    { text_input("confirm", "Confirm password", "password", &confirm) }
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Creating account..." } else { "Sign up" }}
                        </button>
                    </div>
                    <div class="text-sm text-center mt-2">
                        {"Already registered? "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            {"Sign in"}
                        </Link<MainRoute>>
                    </div>
                </form>
            </div>
        </div>
    }
}
