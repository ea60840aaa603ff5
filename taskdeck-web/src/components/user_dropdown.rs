use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::{use_selector, use_store};

use crate::routes::MainRoute;
use crate::session::{self, Session};

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator().unwrap();
    let (_session, dispatch) = use_store::<Session>();
    let user_state = use_selector(|session: &Session| session.user.clone());
    let Some(user) = (*user_state).clone() else {
        return html! {};
    };

    let logout_button = {
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                session::logout(&dispatch).await;
                navigator.push(&MainRoute::Login);
            });
        });
        html! {
            <li><a {onclick}>{"Sign out"}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <Icon icon_id={IconId::HeroiconsOutlineUserCircle} class="w-6 h-6" />
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-xs text-base-content/70">{ &user.email }</div>
                </li>
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
