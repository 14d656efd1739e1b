//! Doctor API (fetch via web-sys)
//!
//! Each view owns a `Feed`; these helpers issue the request for a ticket
//! and write the outcome back into the view's signal.

use leptos::prelude::*;
use mediassist_common::{decode_doctors, ApiBase, DoctorRecord, Error, Feed, FetchTicket};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Request, RequestInit, RequestMode, Response};

/// `GET {API}/doctors`, returning the raw body
async fn request_doctors(api: &ApiBase) -> Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&api.doctors_url(), &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let body = JsFuture::from(resp.text()?).await?;
    Ok(body.as_string().unwrap_or_default())
}

/// Human readable message for a JS-side failure
fn describe(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    match err.dyn_ref::<js_sys::Error>() {
        Some(js_err) => String::from(js_err.message()),
        None => format!("{:?}", err),
    }
}

pub async fn fetch_doctors(api: &ApiBase) -> Result<Vec<DoctorRecord>, Error> {
    let body = request_doctors(api)
        .await
        .map_err(|e| Error::Fetch(describe(&e)))?;
    decode_doctors(&body)
}

fn spawn_fetch(feed: RwSignal<Feed>, api: ApiBase, ticket: FetchTicket) {
    spawn_local(async move {
        let result = fetch_doctors(&api).await;
        if let Err(err) = &result {
            gloo::console::error!("Error fetching doctors:", err.to_string());
        }
        // try_update: the view may have been torn down meanwhile
        feed.try_update(|f| f.complete(ticket, result));
    });
}

fn begin_ticket(feed: RwSignal<Feed>) -> Option<FetchTicket> {
    feed.try_update(|f| f.begin())
}

/// `None` unless the last fetch failed
fn retry_ticket(feed: RwSignal<Feed>) -> Option<FetchTicket> {
    feed.try_update(|f| f.retry()).flatten()
}

/// Initial fetch on view mount
pub fn start_fetch(feed: RwSignal<Feed>, api: ApiBase) {
    if let Some(ticket) = begin_ticket(feed) {
        spawn_fetch(feed, api, ticket);
    }
}

/// Manual retry from the error panel
pub fn retry_fetch(feed: RwSignal<Feed>, api: ApiBase) {
    if let Some(ticket) = retry_ticket(feed) {
        gloo::console::debug!("Retrying doctor fetch");
        spawn_fetch(feed, api, ticket);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_retry_issues_one_ticket_per_failure() {
        let feed = RwSignal::new(Feed::default());

        let first = begin_ticket(feed).expect("signal is alive");
        assert!(retry_ticket(feed).is_none());

        feed.update(|f| {
            f.complete(first, Err::<Vec<DoctorRecord>, _>("offline"));
        });
        assert!(retry_ticket(feed).is_some());
        assert!(retry_ticket(feed).is_none());
        assert_eq!(feed.with(|f| f.fetches_issued()), 2);
    }

    #[wasm_bindgen_test]
    fn wasm_disposed_feed_ignores_tickets() {
        let feed = RwSignal::new(Feed::default());
        feed.dispose();
        assert!(begin_ticket(feed).is_none());
        assert!(retry_ticket(feed).is_none());
    }

    #[wasm_bindgen_test]
    async fn wasm_unreachable_api_is_fetch_error() {
        let api = ApiBase::new("http://127.0.0.1:9").expect("valid base");
        let result = fetch_doctors(&api).await;
        assert!(matches!(result, Err(Error::Fetch(_))));
    }
}
