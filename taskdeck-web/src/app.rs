use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with, use_state};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::components::loading::Loading;
use crate::routes::MainRoute;
use crate::session::{self, Session};

/// Application shell: resolves the persisted session once, then routes.
#[function_component(App)]
pub fn app() -> Html {
    let (_session, dispatch) = use_store::<Session>();
    let bootstrapped = use_state(|| false);

    {
        let bootstrapped = bootstrapped.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                session::initialize(&dispatch).await;
                bootstrapped.set(true);
            });
            || ()
        });
    }

    if !*bootstrapped {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={crate::routes::switch} />
        </BrowserRouter>
    }
}
