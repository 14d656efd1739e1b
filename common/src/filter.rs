//! Results filter pipeline
//!
//! A record is shown only when every predicate passes:
//! specialty and location (case-insensitive substring), minimum rating,
//! accepting-new-patients and telehealth toggles.

use crate::query::SearchQuery;
use crate::types::DoctorRecord;

/// Minimum rating choices offered by the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RatingThreshold {
    #[default]
    Any,
    Three,
    Four,
    FourAndHalf,
}

impl RatingThreshold {
    pub const ALL: [RatingThreshold; 4] = [
        RatingThreshold::Any,
        RatingThreshold::Three,
        RatingThreshold::Four,
        RatingThreshold::FourAndHalf,
    ];

    pub fn value(&self) -> f64 {
        match self {
            RatingThreshold::Any => 0.0,
            RatingThreshold::Three => 3.0,
            RatingThreshold::Four => 4.0,
            RatingThreshold::FourAndHalf => 4.5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingThreshold::Any => "Any",
            RatingThreshold::Three => "3+",
            RatingThreshold::Four => "4+",
            RatingThreshold::FourAndHalf => "4.5+",
        }
    }

    /// Parse a CLI / form value (`any`, `0`, `3`, `4`, `4.5`, `4.5+`)
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().trim_end_matches('+');
        match value.to_ascii_lowercase().as_str() {
            "any" | "0" => Some(RatingThreshold::Any),
            "3" => Some(RatingThreshold::Three),
            "4" => Some(RatingThreshold::Four),
            "4.5" => Some(RatingThreshold::FourAndHalf),
            _ => None,
        }
    }
}

/// Sidebar filter state, local to one results view
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterState {
    pub min_rating: RatingThreshold,
    pub accepting_new_patients: bool,
    pub telehealth_available: bool,
}

impl FilterState {
    /// Reset the sidebar; search terms are not part of this state
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    pub fn is_cleared(&self) -> bool {
        *self == FilterState::default()
    }
}

/// Lowercased search terms taken from the results URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerms {
    specialty: String,
    location: String,
}

impl SearchTerms {
    pub fn new(specialty: &str, location: &str) -> Self {
        Self {
            specialty: specialty.to_lowercase(),
            location: location.to_lowercase(),
        }
    }

    pub fn from_query(query: &SearchQuery) -> Self {
        Self::new(
            query.specialty.as_deref().unwrap_or_default(),
            query.location.as_deref().unwrap_or_default(),
        )
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

fn contains_term(field: &str, term: &str) -> bool {
    term.is_empty() || field.to_lowercase().contains(term)
}

pub fn matches_specialty(doctor: &DoctorRecord, terms: &SearchTerms) -> bool {
    contains_term(&doctor.specialty, &terms.specialty)
}

pub fn matches_location(doctor: &DoctorRecord, terms: &SearchTerms) -> bool {
    contains_term(&doctor.location, &terms.location)
}

pub fn matches_rating(doctor: &DoctorRecord, filters: &FilterState) -> bool {
    doctor.rating >= filters.min_rating.value()
}

pub fn matches_accepting(doctor: &DoctorRecord, filters: &FilterState) -> bool {
    !filters.accepting_new_patients || doctor.accepting_new_patients
}

pub fn matches_telehealth(doctor: &DoctorRecord, filters: &FilterState) -> bool {
    !filters.telehealth_available || doctor.offers_telehealth
}

/// Conjunction of all predicates
pub fn matches(doctor: &DoctorRecord, terms: &SearchTerms, filters: &FilterState) -> bool {
    matches_specialty(doctor, terms)
        && matches_location(doctor, terms)
        && matches_rating(doctor, filters)
        && matches_accepting(doctor, filters)
        && matches_telehealth(doctor, filters)
}

/// Matching subset of `doctors`, in source order
pub fn filter_doctors(
    doctors: &[DoctorRecord],
    terms: &SearchTerms,
    filters: &FilterState,
) -> Vec<DoctorRecord> {
    doctors
        .iter()
        .filter(|doctor| matches(doctor, terms, filters))
        .cloned()
        .collect()
}

/// Distinct specialties and locations of a record set, first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub specialties: Vec<String>,
    pub locations: Vec<String>,
}

impl Facets {
    pub fn from_records(doctors: &[DoctorRecord]) -> Self {
        let mut facets = Facets::default();
        for doctor in doctors {
            push_distinct(&mut facets.specialties, &doctor.specialty);
            push_distinct(&mut facets.locations, &doctor.location);
        }
        facets
    }
}

fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}
