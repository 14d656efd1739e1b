//! MediAssist Common Library
//!
//! Types and search logic shared by the CLI and the Web (WASM) app

pub mod types;
pub mod error;
pub mod endpoint;
pub mod query;
pub mod filter;
pub mod search_form;
pub mod showcase;
pub mod feed;
pub mod results;

pub use types::{decode_doctors, DoctorId, DoctorRecord};
pub use error::{Error, Result, ValidationError};
pub use endpoint::{ApiBase, DEFAULT_API_URL};
pub use query::{SearchQuery, HOME_ROUTE, SEARCH_ROUTE};
pub use filter::{filter_doctors, matches, Facets, FilterState, RatingThreshold, SearchTerms};
pub use search_form::{validate_search, HeroSearch};
pub use showcase::{top_doctors, TOP_DOCTOR_COUNT};
pub use feed::{Feed, FetchState, FetchTicket};
pub use results::{search_heading, ResultsState};
