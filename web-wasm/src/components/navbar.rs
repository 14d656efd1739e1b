//! Navigation header component

use leptos::prelude::*;
use mediassist_common::{HOME_ROUTE, SEARCH_ROUTE};

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="navbar">
            <div class="navbar-inner">
                <a href=HOME_ROUTE class="brand">
                    <img src="/stethoscope.png" alt="Logo" class="brand-logo" />
                    "MediAssist"
                </a>
                <nav class="navbar-links">
                    <a href=HOME_ROUTE>"Home"</a>
                    <a href=SEARCH_ROUTE>"Search"</a>
                    <a href=SEARCH_ROUTE class="btn btn-primary">"Get Started"</a>
                </nav>
            </div>
        </header>
    }
}
