//! Results view state and its supporting text

use crate::feed::FetchState;
use crate::filter::{filter_doctors, FilterState, SearchTerms};
use crate::types::DoctorRecord;

/// What the results area shows; exactly one at a time
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsState {
    Failed(String),
    Loading,
    Empty,
    Populated(Vec<DoctorRecord>),
}

impl ResultsState {
    /// Map a fetch state, selecting the records to show once loaded
    ///
    /// Priority: failed > loading > empty > populated.
    pub fn from_fetch<F>(fetch: &FetchState, select: F) -> Self
    where
        F: FnOnce(&[DoctorRecord]) -> Vec<DoctorRecord>,
    {
        match fetch {
            FetchState::Failed(message) => ResultsState::Failed(message.clone()),
            FetchState::Loading => ResultsState::Loading,
            FetchState::Loaded(records) => Self::from_records(select(records)),
        }
    }

    /// State for an already selected record list
    pub fn from_records(records: Vec<DoctorRecord>) -> Self {
        if records.is_empty() {
            ResultsState::Empty
        } else {
            ResultsState::Populated(records)
        }
    }

    /// Results view state for the current filter inputs
    pub fn derive(fetch: &FetchState, terms: &SearchTerms, filters: &FilterState) -> Self {
        Self::from_fetch(fetch, |records| filter_doctors(records, terms, filters))
    }

    /// Records to render as cards
    pub fn doctors(&self) -> &[DoctorRecord] {
        match self {
            ResultsState::Populated(doctors) => doctors,
            _ => &[],
        }
    }

    /// Line above the result grid
    pub fn summary(&self) -> String {
        match self {
            ResultsState::Failed(_) => "Could not load doctors".to_string(),
            ResultsState::Loading => "Loading...".to_string(),
            ResultsState::Empty => "No doctors found".to_string(),
            ResultsState::Populated(doctors) if doctors.len() == 1 => "Found 1 doctor".to_string(),
            ResultsState::Populated(doctors) => format!("Found {} doctors", doctors.len()),
        }
    }
}

/// Page subtitle describing the active search terms
pub fn search_heading(terms: &SearchTerms) -> String {
    let mut heading = if terms.specialty().is_empty() {
        "All Specialties".to_string()
    } else {
        format!("Specializing in {}", terms.specialty())
    };
    if !terms.location().is_empty() {
        heading.push_str(&format!(" in {}", terms.location()));
    }
    heading
}
