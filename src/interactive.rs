//! Interactive doctor finder
//!
//! Hero search prompts, then a results view that can be refined with
//! the same filters as the web sidebar. Every new search is a fresh
//! view: one fetch, filters reset.

use dialoguer::{Confirm, Input, Select};
use mediassist_common::{
    Feed, FilterState, HeroSearch, RatingThreshold, ResultsState, SearchQuery, SearchTerms,
};

use crate::client::DoctorClient;
use crate::error::{MediAssistError, Result};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsAction {
    Retry,
    Refine,
    Clear,
    NewSearch,
    Quit,
}

impl ResultsAction {
    pub fn label(&self) -> &'static str {
        match self {
            ResultsAction::Retry => "Retry",
            ResultsAction::Refine => "Refine filters",
            ResultsAction::Clear => "Clear all filters",
            ResultsAction::NewSearch => "New search",
            ResultsAction::Quit => "Quit",
        }
    }
}

/// Actions offered under a results listing
///
/// Retry only after a failed fetch; filters only once data is in.
pub fn actions_for(state: &ResultsState) -> Vec<ResultsAction> {
    match state {
        ResultsState::Failed(_) => vec![
            ResultsAction::Retry,
            ResultsAction::NewSearch,
            ResultsAction::Quit,
        ],
        ResultsState::Loading => vec![ResultsAction::NewSearch, ResultsAction::Quit],
        ResultsState::Empty | ResultsState::Populated(_) => vec![
            ResultsAction::Refine,
            ResultsAction::Clear,
            ResultsAction::NewSearch,
            ResultsAction::Quit,
        ],
    }
}

pub async fn run_finder(client: &DoctorClient) -> Result<()> {
    loop {
        let query = prompt_search()?;
        if !run_results_view(client, &query).await? {
            return Ok(());
        }
    }
}

/// One results view; returns `true` when the user asked for a new search
async fn run_results_view(client: &DoctorClient, query: &SearchQuery) -> Result<bool> {
    let terms = SearchTerms::from_query(query);
    let mut feed = Feed::default();
    let mut filters = FilterState::default();

    let ticket = feed.begin();
    client.load_into(&mut feed, ticket).await;

    loop {
        let state = ResultsState::derive(feed.state(), &terms, &filters);

        println!("\n{}", render::heading(&terms));
        if let Some(active) = render::active_filters(&filters) {
            println!("{}", active);
        }
        println!("{}\n", render::results(&state));

        match prompt_action(&actions_for(&state))? {
            ResultsAction::Retry => {
                if let Some(ticket) = feed.retry() {
                    client.load_into(&mut feed, ticket).await;
                }
            }
            ResultsAction::Refine => filters = prompt_filters(&filters)?,
            ResultsAction::Clear => filters.clear(),
            ResultsAction::NewSearch => return Ok(true),
            ResultsAction::Quit => return Ok(false),
        }
    }
}

/// Ask for specialty and location until the pair is valid
pub fn prompt_search() -> Result<SearchQuery> {
    let mut form = HeroSearch::default();

    loop {
        let specialty = prompt_text("Specialty (e.g. Cardiology)", form.specialty())?;
        form.set_specialty(specialty);
        let location = prompt_text("Location (e.g. Pune)", form.location())?;
        form.set_location(location);

        if let Some(query) = form.submit() {
            return Ok(query);
        }
        if let Some(err) = form.error() {
            println!("✖ {}", err);
        }
    }
}

fn prompt_text(prompt: &str, initial: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| MediAssistError::Prompt(e.to_string()))
}

fn prompt_action(actions: &[ResultsAction]) -> Result<ResultsAction> {
    let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
    let index = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| MediAssistError::Prompt(e.to_string()))?;
    Ok(actions.get(index).copied().unwrap_or(ResultsAction::Quit))
}

fn prompt_filters(current: &FilterState) -> Result<FilterState> {
    let labels: Vec<&str> = RatingThreshold::ALL.iter().map(|t| t.label()).collect();
    let selected = RatingThreshold::ALL
        .iter()
        .position(|t| *t == current.min_rating)
        .unwrap_or(0);

    let index = Select::new()
        .with_prompt("Minimum rating")
        .items(&labels)
        .default(selected)
        .interact()
        .map_err(|e| MediAssistError::Prompt(e.to_string()))?;

    let accepting_new_patients = prompt_toggle("Accepting new patients only?", current.accepting_new_patients)?;
    let telehealth_available = prompt_toggle("Telehealth available only?", current.telehealth_available)?;

    Ok(FilterState {
        min_rating: RatingThreshold::ALL.get(index).copied().unwrap_or_default(),
        accepting_new_patients,
        telehealth_available,
    })
}

fn prompt_toggle(prompt: &str, current: bool) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(current)
        .interact()
        .map_err(|e| MediAssistError::Prompt(e.to_string()))
}
