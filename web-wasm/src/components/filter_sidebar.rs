//! Results sidebar: rating, availability and facet links

use leptos::prelude::*;
use mediassist_common::{Facets, FilterState, RatingThreshold, SearchQuery};

#[component]
pub fn FilterSidebar(
    filters: RwSignal<FilterState>,
    facets: Memo<Facets>,
    query: SearchQuery,
) -> impl IntoView {
    let rating_buttons = RatingThreshold::ALL
        .into_iter()
        .map(|threshold| {
            view! {
                <button
                    class=move || {
                        if filters.with(|f| f.min_rating == threshold) {
                            "btn btn-small btn-primary"
                        } else {
                            "btn btn-small btn-ghost"
                        }
                    }
                    on:click=move |_| filters.update(|f| f.min_rating = threshold)
                >
                    {threshold.label()}
                </button>
            }
        })
        .collect_view();

    let specialty_query = query.clone();
    let specialty_links = move || {
        facets.with(|f| {
            f.specialties
                .iter()
                .map(|specialty| {
                    let href = SearchQuery {
                        specialty: Some(specialty.clone()),
                        location: specialty_query.location.clone(),
                    }
                    .to_route();
                    view! { <li><a href=href>{specialty.clone()}</a></li> }
                })
                .collect_view()
        })
    };

    let location_links = move || {
        facets.with(|f| {
            f.locations
                .iter()
                .map(|location| {
                    let href = SearchQuery {
                        specialty: query.specialty.clone(),
                        location: Some(location.clone()),
                    }
                    .to_route();
                    view! { <li><a href=href>{location.clone()}</a></li> }
                })
                .collect_view()
        })
    };

    view! {
        <aside class="filter-sidebar">
            <div class="sidebar-header">
                <h2>"Filters"</h2>
                <button class="link-button" on:click=move |_| filters.update(|f| f.clear())>
                    "Clear all"
                </button>
            </div>

            <div class="filter-group">
                <h3>"Minimum Rating"</h3>
                <div class="rating-buttons">{rating_buttons}</div>
            </div>

            <div class="filter-group">
                <h3>"Availability"</h3>
                <label class="checkbox-row">
                    <input
                        type="checkbox"
                        prop:checked=move || filters.with(|f| f.accepting_new_patients)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            filters.update(|f| f.accepting_new_patients = checked);
                        }
                    />
                    <span>"Accepting New Patients"</span>
                </label>
                <label class="checkbox-row">
                    <input
                        type="checkbox"
                        prop:checked=move || filters.with(|f| f.telehealth_available)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            filters.update(|f| f.telehealth_available = checked);
                        }
                    />
                    <span>"Telehealth Available"</span>
                </label>
            </div>

            <div class="filter-group">
                <h3>"Specialties"</h3>
                <ul class="facet-list">{specialty_links}</ul>
            </div>

            <div class="filter-group">
                <h3>"Locations"</h3>
                <ul class="facet-list">{location_links}</ul>
            </div>
        </aside>
    }
}
