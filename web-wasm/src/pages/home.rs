//! Landing view: hero search and top rated doctors

use leptos::prelude::*;
use mediassist_common::{top_doctors, ApiBase, Feed, ResultsState, SEARCH_ROUTE, TOP_DOCTOR_COUNT};
use crate::api::doctors::{retry_fetch, start_fetch};
use crate::components::{doctor_results::DoctorResults, hero_search::HeroSearch};

const VALUE_PROPS: [(&str, &str); 3] = [
    ("Verified Professionals", "All doctors are thoroughly vetted for credentials and expertise."),
    ("Instant Booking", "Schedule appointments 24/7 with real-time availability."),
    ("Digital Records", "Access your medical history and prescriptions anytime."),
];

const TESTIMONIALS: [(&str, &str, &str, &str); 3] = [
    (
        "RS",
        "Raj Sharma",
        "Mumbai",
        "Found an amazing cardiologist through this platform. The booking process was seamless and the doctor was incredibly knowledgeable.",
    ),
    (
        "PP",
        "Priya Patel",
        "Pune",
        "The telehealth option saved me during lockdown. I could consult with my doctor without leaving home. Highly recommend!",
    ),
    (
        "AM",
        "Amit Mehta",
        "Bhopal",
        "As a senior citizen, I appreciate how easy this platform is to use. Found a great physician who understands my needs.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<ApiBase>();
    let feed = RwSignal::new(Feed::default());
    start_fetch(feed, api.clone());

    let showcase = Memo::new(move |_| {
        feed.with(|f| ResultsState::from_fetch(f.state(), |records| top_doctors(records, TOP_DOCTOR_COUNT)))
    });
    let on_retry = move |_: ()| retry_fetch(feed, api.clone());

    view! {
        <div class="page home-page">
            <section class="hero">
                <div class="hero-content">
                    <h1>"Find the Perfect Healthcare Specialist"</h1>
                    <p class="hero-lead">
                        "Connect with top-rated doctors, book appointments instantly, and take control of your health journey."
                    </p>
                    <HeroSearch />
                </div>
                <img class="hero-image" src="/group-doctors.png" alt="Doctor Group" />
            </section>

            <section class="value-props">
                {VALUE_PROPS
                    .into_iter()
                    .map(|(title, text)| view! {
                        <div class="card">
                            <h3>{title}</h3>
                            <p class="text-muted">{text}</p>
                        </div>
                    })
                    .collect_view()}
            </section>

            <section class="top-doctors">
                <h2>"Top Rated Doctors"</h2>
                <p class="text-muted">
                    "Highly recommended by patients for their expertise and compassionate care"
                </p>
                <DoctorResults
                    state=showcase
                    on_retry=on_retry
                    empty_title="No doctors to show yet"
                    empty_hint="Check back soon for our top rated specialists."
                />
            </section>

            <section class="testimonials">
                <h2>"What Patients Say"</h2>
                <div class="testimonial-grid">
                    {TESTIMONIALS
                        .into_iter()
                        .map(|(initials, name, city, quote)| view! {
                            <div class="testimonial">
                                <div class="stars">"★★★★★"</div>
                                <p class="quote">{format!("\"{}\"", quote)}</p>
                                <div class="patient">
                                    <span class="initials">{initials}</span>
                                    <div>
                                        <p class="patient-name">{name}</p>
                                        <p class="text-muted">{city}</p>
                                    </div>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="call-to-action">
                <h2>"Ready to Find Your Doctor?"</h2>
                <p class="text-muted">
                    "Join thousands of patients who have found the right care through our platform."
                </p>
                <a href=SEARCH_ROUTE class="btn btn-primary btn-large">"Get Started Now"</a>
            </section>
        </div>
    }
}
