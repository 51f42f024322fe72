//! Integration tests for the blocking client.
//!
//! The mock server runs on the test's tokio runtime; every blocking call (and
//! the blocking client's construction and drop) happens on a
//! `spawn_blocking` thread.

#![cfg(feature = "blocking")]

use std::time::{Duration, Instant};

use request_client::http::blocking::Client;
use request_client::prelude::{Cookie, ErrorStage, HttpError, RequestOptions, REQUEST_TIMEOUT};
use wiremock::matchers::{body_bytes, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run_blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blocking_get_and_post() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200).set_body_string("from get"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/b"))
        .and(body_bytes(b"payload".to_vec()))
        .respond_with(ResponseTemplate::new(200).set_body_string("from post"))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let (got, posted) = run_blocking(move || {
        let client = Client::new();
        let got = client.get(&format!("{uri}/a"), None).unwrap();
        let posted = client
            .post(&format!("{uri}/b"), b"payload", None)
            .unwrap();
        (got, posted)
    })
    .await;

    assert_eq!(&got[..], b"from get");
    assert_eq!(&posted[..], b"from post");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blocking_not_found_is_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let body = run_blocking(move || Client::new().request("DELETE", &uri, &[], None))
        .await
        .unwrap();
    assert_eq!(&body[..], b"gone");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blocking_headers_and_cookies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let uri = server.uri();
    run_blocking(move || {
        let opts = RequestOptions::merged([
            RequestOptions::new()
                .header("X-Mode", "a")
                .cookie(Cookie::new("one", "1")),
            RequestOptions::new()
                .header("x-mode", "b")
                .cookie(Cookie::new("two", "2")),
        ]);
        Client::new().get(&uri, Some(&opts))
    })
    .await
    .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let headers = &requests[0].headers;
    assert_eq!(headers.get_all("x-mode").iter().count(), 1);
    assert_eq!(headers.get("x-mode").unwrap(), "b");
    assert_eq!(headers.get("cookie").unwrap(), "one=1; two=2");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blocking_failure_stages() {
    let err = run_blocking(|| Client::new().get("no-scheme.example", None))
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::Construction(_)));

    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let err = run_blocking(move || Client::new().get(&format!("http://{addr}/"), None))
        .await
        .unwrap_err();
    assert_eq!(err.stage(), ErrorStage::Transport);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blocking_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = run_blocking(move || {
        let transport = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        Client::with_transport(transport).get(&uri, None)
    })
    .await
    .unwrap_err();

    assert_eq!(err.stage(), ErrorStage::Transport);
    assert!(err.is_timeout());
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "waits out the full 10 s request timeout"]
async fn test_blocking_default_client_times_out_after_fixed_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(REQUEST_TIMEOUT + Duration::from_secs(5)))
        .mount(&server)
        .await;

    let uri = server.uri();
    let (err, elapsed) = run_blocking(move || {
        let client = Client::new();
        let started = Instant::now();
        let err = client.get(&uri, None).unwrap_err();
        (err, started.elapsed())
    })
    .await;

    assert_eq!(err.stage(), ErrorStage::Transport);
    assert!(err.is_timeout());
    assert!(elapsed >= REQUEST_TIMEOUT, "timed out early: {elapsed:?}");
    assert!(elapsed < REQUEST_TIMEOUT + Duration::from_secs(2), "timed out late: {elapsed:?}");
}
