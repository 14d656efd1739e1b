//! Hero search form component

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use mediassist_common::HeroSearch as HeroSearchForm;

#[component]
pub fn HeroSearch() -> impl IntoView {
    let form = RwSignal::new(HeroSearchForm::default());
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(query) = form.try_update(|f| f.submit()).flatten() {
            navigate(&query.to_route(), Default::default());
        }
    };

    view! {
        <section class="hero-search">
            <div class="hero-search-header">
                <h2>"Find the Right Doctor"</h2>
                <p class="text-muted">"Search from a curated list of top-rated doctors near you"</p>
            </div>

            <form class="hero-search-form" on:submit=on_submit>
                <div class="form-group">
                    <input
                        type="text"
                        name="specialty"
                        placeholder="Specialty"
                        prop:value=move || form.with(|f| f.specialty().to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.set_specialty(value));
                        }
                    />
                    {move || form.with(|f| f.error()).map(|err| view! {
                        <p class="form-error">{err.to_string()}</p>
                    })}
                </div>

                <div class="form-group">
                    <input
                        type="text"
                        name="location"
                        placeholder="Location"
                        prop:value=move || form.with(|f| f.location().to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.set_location(value));
                        }
                    />
                </div>

                <button type="submit" class="btn btn-primary">"Search"</button>
            </form>
        </section>
    }
}
