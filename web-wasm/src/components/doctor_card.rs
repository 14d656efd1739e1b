//! Doctor card component

use leptos::prelude::*;
use mediassist_common::DoctorRecord;

#[component]
pub fn DoctorCard(doctor: DoctorRecord) -> impl IntoView {
    let rating = doctor.rating_label();

    view! {
        <div class="doctor-card">
            <img class="doctor-avatar" src=doctor.avatar.clone() alt=doctor.name.clone() />

            <div class="doctor-info">
                <h3>{doctor.name.clone()}</h3>
                <p class="doctor-specialty">{doctor.specialty.clone()}</p>
            </div>

            <div class="doctor-rating">
                <span class="star">"★"</span>
                <span>{rating}</span>
            </div>

            <p class="doctor-location">{doctor.location.clone()}</p>

            <div class="doctor-badges">
                {doctor.accepting_new_patients.then(|| view! {
                    <span class="badge badge-success">"Accepting Patients"</span>
                })}
                {doctor.offers_telehealth.then(|| view! {
                    <span class="badge badge-info">"Telehealth"</span>
                })}
            </div>

            // booking is not wired to anything
            <button type="button" class="btn btn-primary btn-block">"Book Appointment"</button>
        </div>
    }
}
