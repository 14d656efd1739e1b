//! Main application component

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use mediassist_common::HOME_ROUTE;
use crate::components::navbar::Navbar;
use crate::config;
use crate::pages::{home::HomePage, search::SearchPage};

#[component]
pub fn App() -> impl IntoView {
    let api = config::api_base();
    gloo::console::debug!("Doctor API:", api.doctors_url());
    provide_context(api);

    view! {
        <Router>
            <Navbar />
            <main class="container">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/search") view=SearchPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"404"</h1>
            <p class="text-muted">"Page not found"</p>
            <a href=HOME_ROUTE class="btn btn-primary">"Go Home"</a>
        </div>
    }
}
