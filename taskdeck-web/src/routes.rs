use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::components::loading::Loading;
use crate::containers::layout::Layout;
use crate::pages::{AssistantPage, DashboardPage, ErrorPage, LoginPage, SignupPage, TasksPage};
use crate::session::Session;

/// The application routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/tasks")]
    Tasks,
    #[at("/assistant")]
    Assistant,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Label shown in the header navigation.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Dashboard",
            Self::Login => "Sign in",
            Self::Signup => "Sign up",
            Self::Tasks => "Tasks",
            Self::Assistant => "Assistant",
            Self::NotFound => "Not found",
        }
    }

    /// Icon shown next to the label in the header navigation.
    pub fn icon_id(&self) -> IconId {
        match self {
            Self::Home => IconId::HeroiconsOutlineHome,
            Self::Login | Self::Signup => IconId::HeroiconsOutlineArrowRightOnRectangle,
            Self::Tasks => IconId::HeroiconsOutlineClipboardDocumentList,
            Self::Assistant => IconId::HeroiconsOutlineChatBubbleLeftRight,
            Self::NotFound => IconId::HeroiconsOutlineQuestionMarkCircle,
        }
    }

    /// The routes listed in the header for signed-in users.
    pub fn header_routes() -> Vec<Self> {
        Self::iter()
            .filter(|route| matches!(route, Self::Home | Self::Tasks | Self::Assistant))
            .collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct RequireSessionProps {
    #[prop_or_default]
    pub children: Children,
}

/// Guard composed around every protected page.
///
/// Unauthenticated visitors are redirected to the login page; while the
/// session is still resolving, a placeholder renders instead.
#[function_component(RequireSession)]
pub fn require_session(props: &RequireSessionProps) -> Html {
    let state = use_selector(|session: &Session| (session.is_authenticated(), session.is_loading));
    let (authenticated, loading) = *state;

    if loading {
        return html! { <Loading /> };
    }
    if !authenticated {
        return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
    }
    html! { <>{ props.children.clone() }</> }
}

#[derive(Properties, PartialEq)]
struct MainRouteViewProps {
    route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let authenticated = use_selector(|session: &Session| session.is_authenticated());

    let protected = |route: MainRoute, page: Html| {
        html! {
            <RequireSession>
                <Layout current_route={route}>
                    { page }
                </Layout>
            </RequireSession>
        }
    };

    match props.route.clone() {
        MainRoute::Login => {
            if *authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::Signup => {
            if *authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <SignupPage /> }
            }
        }
        MainRoute::Home => protected(MainRoute::Home, html! { <DashboardPage /> }),
        MainRoute::Tasks => protected(MainRoute::Tasks, html! { <TasksPage /> }),
        MainRoute::Assistant => protected(MainRoute::Assistant, html! { <AssistantPage /> }),
        MainRoute::NotFound => protected(MainRoute::NotFound, html! { <ErrorPage /> }),
    }
}

/// Switch function for the application routes.
pub fn switch(route: MainRoute) -> Html {
    html! { <MainRouteView {route} /> }
}
