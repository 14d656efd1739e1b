//! Fetch lifecycle of one view
//!
//! A view issues one fetch on mount. A failed fetch can be retried by
//! hand; there is no automatic retry. Completions carrying a ticket
//! older than the latest one are dropped.

use std::fmt::Display;

use crate::types::DoctorRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Loading,
    Failed(String),
    Loaded(Vec<DoctorRecord>),
}

/// Handle for one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
    state: FetchState,
    issued: u64,
}

impl Feed {
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Number of fetches issued so far
    pub fn fetches_issued(&self) -> u64 {
        self.issued
    }

    /// Record set, once loaded
    pub fn records(&self) -> Option<&[DoctorRecord]> {
        match &self.state {
            FetchState::Loaded(records) => Some(records),
            _ => None,
        }
    }

    /// Start a fetch; the caller performs exactly one request per ticket
    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        self.state = FetchState::Loading;
        FetchTicket(self.issued)
    }

    /// Apply a finished fetch; returns `false` for a superseded ticket
    pub fn complete<E: Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<DoctorRecord>, E>,
    ) -> bool {
        if ticket.0 != self.issued {
            return false;
        }
        self.state = match result {
            Ok(records) => FetchState::Loaded(records),
            Err(err) => FetchState::Failed(err.to_string()),
        };
        true
    }

    /// Manual retry, only offered after a failure
    pub fn retry(&mut self) -> Option<FetchTicket> {
        match self.state {
            FetchState::Failed(_) => Some(self.begin()),
            _ => None,
        }
    }
}
