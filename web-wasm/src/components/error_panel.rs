//! Fetch error panel with a manual retry

use leptos::prelude::*;

#[component]
pub fn ErrorPanel<F>(message: String, on_retry: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="error-panel" role="alert">
            <h3>"Something went wrong"</h3>
            <p>{message}</p>
            <button
                class="btn btn-secondary"
                on:click=move |_| on_retry(())
            >
                "Retry"
            </button>
        </div>
    }
}
