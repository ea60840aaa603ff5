use yew::{Html, Properties, classes, function_component, html};
use yew_icons::Icon;
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct HeaderNavItemProps {
    pub route: MainRoute,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let active_route_class = if props.current_route.as_ref() == Some(&props.route) {
        "btn-soft"
    } else {
        ""
    };

    html! {
        <li>
            <Link<MainRoute>
                to={props.route.clone()}
                classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}
            >
                <Icon icon_id={props.route.icon_id()} class="w-5 h-5" />
                { props.route.title() }
            </Link<MainRoute>>
        </li>
    }
}
