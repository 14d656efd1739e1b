//! Doctor API client tests
//!
//! A one-shot local HTTP server stands in for the API

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use mediassist::client::DoctorClient;
use mediassist::error::MediAssistError;
use mediassist_common::{ApiBase, DoctorId, Feed, FetchState};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const DOCTORS_JSON: &str = r#"[
  {"id": 1, "name": "Dr. Asha Rao", "specialty": "Cardiology", "location": "Pune",
   "rating": 4.8, "acceptingNewPatients": true, "offersTelehealth": false, "avatar": ""},
  {"id": "d-2", "name": "Dr. Vikram Singh", "specialty": "Dermatology", "location": "Mumbai",
   "rating": 4.1, "acceptingNewPatients": false, "offersTelehealth": true, "avatar": ""}
]"#;

/// Serve every connection with the given status and body; returns base URL and hit counter
async fn serve(status: &'static str, body: &'static str) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else { break };
            counter.fetch_add(1, Ordering::SeqCst);

            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}", addr), hits)
}

fn client(base: &str) -> DoctorClient {
    let api = ApiBase::new(base).expect("valid base");
    DoctorClient::new(api, Duration::from_secs(5)).expect("client")
}

#[tokio::test]
async fn test_fetch_doctors_success() {
    let (base, hits) = serve("200 OK", DOCTORS_JSON).await;
    let doctors = client(&base).fetch_doctors().await.expect("fetch");

    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors[0].id, DoctorId::Number(1));
    assert_eq!(doctors[1].id, DoctorId::Text("d-2".into()));
    assert!(doctors[1].offers_telehealth);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_server_error_status() {
    let (base, _) = serve("500 Internal Server Error", "{}").await;
    let result = client(&base).fetch_doctors().await;

    assert!(matches!(result, Err(MediAssistError::Status(500))));
}

#[tokio::test]
async fn test_non_array_body_is_decode_error() {
    let (base, _) = serve("200 OK", r#"{"doctors": []}"#).await;
    let result = client(&base).fetch_doctors().await;

    assert!(matches!(result, Err(MediAssistError::Common(_))));
}

#[tokio::test]
async fn test_unreachable_api() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let result = client(&format!("http://{}", addr)).fetch_doctors().await;
    assert!(matches!(result, Err(MediAssistError::Http(_))));
}

/// Failed load, then one manual retry issues exactly one more request
#[tokio::test]
async fn test_feed_retry_after_failure() {
    let (bad, bad_hits) = serve("503 Service Unavailable", "").await;
    let mut feed = Feed::default();

    let ticket = feed.begin();
    client(&bad).load_into(&mut feed, ticket).await;
    assert!(matches!(feed.state(), FetchState::Failed(msg) if msg.contains("503")));
    assert_eq!(bad_hits.load(Ordering::SeqCst), 1);

    let (good, good_hits) = serve("200 OK", DOCTORS_JSON).await;
    let retry = feed.retry().expect("retry offered");
    client(&good).load_into(&mut feed, retry).await;

    assert_eq!(feed.records().map(|r| r.len()), Some(2));
    assert_eq!(good_hits.load(Ordering::SeqCst), 1);
    assert_eq!(bad_hits.load(Ordering::SeqCst), 1);
    assert!(feed.retry().is_none());
}
