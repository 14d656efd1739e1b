//! Doctor grid with loading, empty and error states

use leptos::prelude::*;
use mediassist_common::ResultsState;
use crate::components::{doctor_card::DoctorCard, error_panel::ErrorPanel};

#[component]
pub fn DoctorResults<F>(
    state: Memo<ResultsState>,
    on_retry: F,
    empty_title: &'static str,
    empty_hint: &'static str,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    move || match state.get() {
        ResultsState::Failed(message) => {
            view! { <ErrorPanel message=message on_retry=on_retry.clone() /> }.into_any()
        }
        ResultsState::Loading => view! {
            <div class="loading">
                <span class="spinner"></span>
            </div>
        }
        .into_any(),
        ResultsState::Empty => view! {
            <div class="empty-results">
                <div class="empty-icon">"😕"</div>
                <h3>{empty_title}</h3>
                <p class="text-muted">{empty_hint}</p>
            </div>
        }
        .into_any(),
        ResultsState::Populated(doctors) => view! {
            <div class="doctor-grid">
                <For
                    each=move || doctors.clone()
                    key=|doctor| doctor.id.clone()
                    children=|doctor| view! { <DoctorCard doctor=doctor /> }
                />
            </div>
        }
        .into_any(),
    }
}
