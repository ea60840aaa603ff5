use web_sys::window;
use yew::{Children, Html, Properties, function_component, html, use_effect_with};

use crate::containers::header::Header;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(window) = window() {
            if let Some(document) = window.document() {
                if let Some(html_element) = document.document_element() {
                    html_element
                        .set_attribute("data-theme", "dark")
                        .unwrap_or_default();
                }
            }
        }
        || {}
    });

    html! {
        <>
            <Header current_route={props.current_route.clone()} />
            <div class="min-h-screen bg-base-100 flex flex-col">
                <main class="flex-grow p-4">
                    { props.children.clone() }
                </main>
                <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                    <div>
                        <p>{"TaskDeck · Powered by Rust, Yew and DaisyUI"}</p>
                    </div>
                </footer>
            </div>
        </>
    }
}
