//! Results view
//!
//! The search terms come from the URL. Each distinct query mounts a fresh
//! `SearchResults` with its own fetch and sidebar state.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use mediassist_common::query::{LOCATION_PARAM, SPECIALTY_PARAM};
use mediassist_common::{
    search_heading, ApiBase, Facets, Feed, FilterState, ResultsState, SearchQuery, SearchTerms,
};
use crate::api::doctors::{retry_fetch, start_fetch};
use crate::components::{doctor_results::DoctorResults, filter_sidebar::FilterSidebar};

const SORT_OPTIONS: [&str; 4] = [
    "Rating: High to Low",
    "Rating: Low to High",
    "Name: A-Z",
    "Name: Z-A",
];

#[component]
pub fn SearchPage() -> impl IntoView {
    let params = use_query_map();
    let query = Memo::new(move |_| {
        params.with(|p| {
            SearchQuery::new(
                p.get(SPECIALTY_PARAM).unwrap_or_default(),
                p.get(LOCATION_PARAM).unwrap_or_default(),
            )
        })
    });

    move || view! { <SearchResults query=query.get() /> }
}

#[component]
fn SearchResults(query: SearchQuery) -> impl IntoView {
    let api = expect_context::<ApiBase>();
    let terms = SearchTerms::from_query(&query);
    let heading = search_heading(&terms);

    let feed = RwSignal::new(Feed::default());
    let filters = RwSignal::new(FilterState::default());
    start_fetch(feed, api.clone());

    let results = Memo::new(move |_| {
        let filters = filters.get();
        feed.with(|f| ResultsState::derive(f.state(), &terms, &filters))
    });
    let facets = Memo::new(move |_| {
        feed.with(|f| f.records().map(Facets::from_records).unwrap_or_default())
    });
    let on_retry = move |_: ()| retry_fetch(feed, api.clone());

    view! {
        <div class="page search-page">
            <h1 class="page-title">"Find Your Doctor"</h1>
            <p class="page-subtitle">{heading}</p>

            <div class="search-layout">
                <FilterSidebar filters=filters facets=facets query=query />

                <section class="results">
                    <div class="results-toolbar">
                        <p class="results-summary">{move || results.with(|r| r.summary())}</p>
                        <label class="sort-by">
                            <span>"Sort by: "</span>
                            // display only, results keep source order
                            <select class="select">
                                {SORT_OPTIONS
                                    .into_iter()
                                    .map(|option| view! { <option>{option}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>

                    <DoctorResults
                        state=results
                        on_retry=on_retry
                        empty_title="No doctors match your search"
                        empty_hint="Try adjusting your filters or search criteria to find what you're looking for."
                    />
                </section>
            </div>
        </div>
    }
}
