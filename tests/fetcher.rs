mod common;

use catalog_courier_bot::archive::{ArchiveFetcher, Source};
use catalog_courier_bot::error::GetError;
use common::{staged_files, state_for};
use httpmock::prelude::*;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Answers one request with `200` and sends the body a byte at a time, `gap` apart.
/// With `stall_after = Some(n)` the host goes quiet after `n` bytes.
async fn trickling_host(body: &'static [u8], gap: Duration, stall_after: Option<usize>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;
        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        if socket.write_all(head.as_bytes()).await.is_err() {
            return;
        }
        for (sent, byte) in body.iter().enumerate() {
            if stall_after == Some(sent) {
                tokio::time::sleep(Duration::from_secs(60)).await;
            }
            tokio::time::sleep(gap).await;
            if socket.write_all(&[*byte]).await.is_err() {
                return;
            }
        }
    });
    format!("http://{addr}/{{appid}}.zip")
}

fn fetcher_for(template: String, staging: &TempDir, idle: Duration) -> ArchiveFetcher {
    ArchiveFetcher::new(
        reqwest::Client::new(),
        template.clone(),
        template,
        staging.path().to_path_buf(),
    )
    .with_idle_timeout(idle)
}

#[tokio::test]
async fn invalid_identifiers_never_reach_the_network() {
    let server = MockServer::start_async().await;
    let staging = TempDir::new().unwrap();
    let any = server
        .mock_async(|when, then| {
            when.any_request();
            then.status(200).body("zip");
        })
        .await;

    let state = state_for(&server, staging.path());
    for raw in ["", "abc", "44a", "-1", "440 ", "4.4"] {
        let err = state.fetcher.fetch(raw).await.unwrap_err();
        assert!(matches!(err, GetError::InvalidIdentifier(_)), "{raw:?}");
    }
    any.assert_hits_async(0).await;
    assert_eq!(staged_files(staging.path()), 0);
}

#[tokio::test]
async fn secondary_is_used_when_primary_misses() {
    let server = MockServer::start_async().await;
    let staging = TempDir::new().unwrap();
    let primary = server
        .mock_async(|when, then| {
            when.method(GET).path("/primary/730.zip");
            then.status(403);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/secondary/730.zip")
                .header("user-agent", "Mozilla/5.0");
            then.status(200).body("PK\x03\x04archive");
        })
        .await;

    let state = state_for(&server, staging.path());
    let result = state.fetcher.fetch("730").await.unwrap();

    primary.assert_async().await;
    assert_eq!(result.source, Source::Secondary);
    assert_ne!(result.source.label(), "primary");
    assert_eq!(result.archive.attachment_name(), "730.zip");
    assert_eq!(result.archive.size_bytes().await.unwrap(), 11);
    assert!(result.archive.path().starts_with(staging.path()));

    result.archive.discard().await.unwrap();
    assert_eq!(staged_files(staging.path()), 0);
}

#[tokio::test]
async fn only_http_200_counts_as_a_hit() {
    let server = MockServer::start_async().await;
    let staging = TempDir::new().unwrap();
    server
        .mock_async(|when, then| {
            when.method(GET).path("/primary/8.zip");
            then.status(204);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/secondary/8.zip");
            then.status(500);
        })
        .await;

    let state = state_for(&server, staging.path());
    let err = state.fetcher.fetch("8").await.unwrap_err();
    assert!(matches!(err, GetError::NotFound(_)));
    assert_eq!(staged_files(staging.path()), 0);
}

#[tokio::test]
async fn concurrent_fetches_of_one_id_use_separate_files() {
    let server = MockServer::start_async().await;
    let staging = TempDir::new().unwrap();
    server
        .mock_async(|when, then| {
            when.method(GET).path("/primary/440.zip");
            then.status(200).body("same archive");
        })
        .await;

    let state = state_for(&server, staging.path());
    let (a, b) = tokio::join!(state.fetcher.fetch("440"), state.fetcher.fetch("440"));
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_ne!(a.archive.path(), b.archive.path());
    assert_eq!(staged_files(staging.path()), 2);
    drop(a);
    assert_eq!(b.archive.size_bytes().await.unwrap(), 12);
    drop(b);
    assert_eq!(staged_files(staging.path()), 0);
}

#[tokio::test]
async fn slow_download_that_keeps_sending_outlives_the_idle_timeout() {
    let staging = TempDir::new().unwrap();
    let template = trickling_host(b"PK\x03\x04slow", Duration::from_millis(250), None).await;
    let fetcher = fetcher_for(template, &staging, Duration::from_secs(1));

    let started = Instant::now();
    let result = fetcher.fetch("440").await.unwrap();

    // Eight bytes a quarter second apart: the whole body takes longer than one idle window.
    assert!(started.elapsed() > Duration::from_secs(1));
    assert_eq!(result.source, Source::Primary);
    assert_eq!(result.archive.size_bytes().await.unwrap(), 8);
    result.archive.discard().await.unwrap();
    assert_eq!(staged_files(staging.path()), 0);
}

#[tokio::test]
async fn host_that_goes_quiet_mid_body_is_a_stalled_transfer() {
    let staging = TempDir::new().unwrap();
    let template = trickling_host(b"PK\x03\x04gone", Duration::from_millis(50), Some(3)).await;
    let fetcher = fetcher_for(template, &staging, Duration::from_millis(500));

    let started = Instant::now();
    let err = fetcher.fetch("440").await.unwrap_err();

    assert!(matches!(err, GetError::Stalled(idle) if idle == Duration::from_millis(500)));
    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(err.user_message().contains("stalled"));
    assert_eq!(staged_files(staging.path()), 0);
}
