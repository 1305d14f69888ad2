use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::pages::landing::LandingPage;

#[component]
pub fn App() -> impl IntoView {
    // Start at the top of the page on mount; the browser may otherwise
    // restore a scroll position from a previous visit.
    Effect::new(move |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <Router>
            <div class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=LandingPage />
                </Routes>
            </div>
        </Router>
    }
}
