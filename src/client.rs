//! HTTP client for the doctor API

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use mediassist_common::{decode_doctors, ApiBase, DoctorRecord, Feed, FetchTicket};
use reqwest::header::ACCEPT;
use tracing::{debug, info, warn};

use crate::error::{MediAssistError, Result};

pub struct DoctorClient {
    http: reqwest::Client,
    api: ApiBase,
}

impl DoctorClient {
    pub fn new(api: ApiBase, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mediassist/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, api })
    }

    /// One `GET {api}/doctors`; the full record set, unfiltered
    pub async fn fetch_doctors(&self) -> Result<Vec<DoctorRecord>> {
        let url = self.api.doctors_url();
        debug!(%url, "fetching doctors");

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "doctor API returned an error");
            return Err(MediAssistError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let doctors = decode_doctors(&body)?;
        info!(count = doctors.len(), "doctors loaded");
        Ok(doctors)
    }

    /// `fetch_doctors` behind a terminal spinner
    pub async fn fetch_with_spinner(&self) -> Result<Vec<DoctorRecord>> {
        let spinner = spinner("Loading doctors...");
        let result = self.fetch_doctors().await;
        spinner.finish_and_clear();

        if let Err(err) = &result {
            warn!(error = %err, "doctor fetch failed");
        }
        result
    }

    /// Perform the request for `ticket` and apply it to `feed`
    pub async fn load_into(&self, feed: &mut Feed, ticket: FetchTicket) {
        let result = self.fetch_with_spinner().await;
        feed.complete(ticket, result);
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
