//! Terminal rendering of doctor cards and result listings

use mediassist_common::{DoctorRecord, Facets, FilterState, ResultsState, SearchTerms};

pub const ACCEPTING_BADGE: &str = "Accepting Patients";
pub const TELEHEALTH_BADGE: &str = "Telehealth";

/// Text form of one doctor card
pub fn doctor_card(doctor: &DoctorRecord) -> String {
    let mut lines = vec![
        format!("{}  ★ {}", doctor.name, doctor.rating_label()),
        format!("  {} · {}", doctor.specialty, doctor.location),
    ];

    let badges = badges(doctor);
    if !badges.is_empty() {
        lines.push(format!("  {}", badges.join(" ")));
    }
    lines.push("  [Book Appointment]".to_string());
    lines.join("\n")
}

fn badges(doctor: &DoctorRecord) -> Vec<String> {
    let mut badges = Vec::new();
    if doctor.accepting_new_patients {
        badges.push(format!("[{}]", ACCEPTING_BADGE));
    }
    if doctor.offers_telehealth {
        badges.push(format!("[{}]", TELEHEALTH_BADGE));
    }
    badges
}

/// Summary line plus one card per record, or the failure message
pub fn results(state: &ResultsState) -> String {
    let mut out = state.summary();
    match state {
        ResultsState::Failed(message) => {
            out.push_str(&format!("\n✖ {}", message));
        }
        ResultsState::Empty => {
            out.push_str("\nTry adjusting your filters or search terms.");
        }
        ResultsState::Populated(doctors) => {
            for doctor in doctors {
                out.push_str("\n\n");
                out.push_str(&doctor_card(doctor));
            }
        }
        ResultsState::Loading => {}
    }
    out
}

/// Active sidebar filters, `None` when nothing is set
pub fn active_filters(filters: &FilterState) -> Option<String> {
    if filters.is_cleared() {
        return None;
    }

    let mut parts = Vec::new();
    if filters.min_rating.value() > 0.0 {
        parts.push(format!("rating {}", filters.min_rating.label()));
    }
    if filters.accepting_new_patients {
        parts.push("accepting new patients".to_string());
    }
    if filters.telehealth_available {
        parts.push("telehealth".to_string());
    }
    Some(format!("Filters: {}", parts.join(", ")))
}

pub fn heading(terms: &SearchTerms) -> String {
    format!("Find Your Doctor\n{}", mediassist_common::search_heading(terms))
}

pub fn facets(facets: &Facets) -> String {
    format!(
        "Specialties:\n{}\n\nLocations:\n{}",
        bullet_list(&facets.specialties),
        bullet_list(&facets.locations)
    )
}

fn bullet_list(values: &[String]) -> String {
    if values.is_empty() {
        return "  (none)".to_string();
    }
    values
        .iter()
        .map(|v| format!("  - {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}
