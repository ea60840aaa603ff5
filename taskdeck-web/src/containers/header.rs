use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::components::header_nav_item::HeaderNavItem;
use crate::components::user_dropdown::UserDropdown;
use crate::routes::MainRoute;
use crate::session::Session;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let authenticated = use_selector(|session: &Session| session.is_authenticated());

    let nav_items = MainRoute::header_routes()
        .into_iter()
        .map(|route| {
            html! {
                <HeaderNavItem route={route} current_route={props.current_route.clone()} />
            }
        })
        .collect::<Html>();

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="text-lg">
                    {"TaskDeck"}
                </Link<MainRoute>>
            </a>
            <ul class="menu menu-horizontal">
                { nav_items }
            </ul>
            <div class="flex items-center gap-2">
                {
                    if *authenticated {
                        html! { <UserDropdown /> }
                    } else {
                        html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                {"Sign in"}
                            </Link<MainRoute>>
                        }
                    }
                }
            </div>
        </nav>
    }
}
