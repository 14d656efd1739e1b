//! Hero search form
//!
//! Collects specialty and location, and turns a submit into a results
//! route. A location without a specialty is rejected.

use crate::error::ValidationError;
use crate::query::SearchQuery;

/// Validate trimmed inputs and build the query to navigate to
pub fn validate_search(specialty: &str, location: &str) -> Result<SearchQuery, ValidationError> {
    let specialty = specialty.trim();
    let location = location.trim();

    if specialty.is_empty() && !location.is_empty() {
        return Err(ValidationError::SpecialtyRequired);
    }

    Ok(SearchQuery::new(specialty, location))
}

/// Form state: raw input text plus the error currently shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroSearch {
    specialty: String,
    location: String,
    error: Option<ValidationError>,
}

impl HeroSearch {
    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn set_specialty(&mut self, value: impl Into<String>) {
        self.specialty = value.into();
        self.error = None;
    }

    pub fn set_location(&mut self, value: impl Into<String>) {
        self.location = value.into();
        self.error = None;
    }

    /// Returns the query to navigate with, or records the error and returns `None`
    pub fn submit(&mut self) -> Option<SearchQuery> {
        match validate_search(&self.specialty, &self.location) {
            Ok(query) => {
                self.error = None;
                Some(query)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}
