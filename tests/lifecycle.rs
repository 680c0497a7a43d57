#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]

//! Session lifecycle: `close`, `is_closed` and the `scoped` guard.

pub mod common;

use std::time::Duration;

use httpmock::{Method::GET, MockServer};
use polymarket_gamma_sdk::error::{Closed, Kind};
use polymarket_gamma_sdk::types::request::MarketsRequest;
use reqwest::StatusCode;
use serde_json::json;

use crate::common::{client, market};

#[tokio::test]
async fn calls_after_close_fail_without_network() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = client(&server);

    let mock = server.mock(|when, then| {
        when.method(GET).path("/markets");
        then.status(StatusCode::OK)
            .json_body(json!([market("1", "one", "One?")]));
    });

    client.markets().list(&MarketsRequest::default()).await?;
    client.close();

    let err = client
        .markets()
        .list(&MarketsRequest::default())
        .await
        .unwrap_err();

    assert!(client.is_closed());
    assert_eq!(err.kind(), Kind::Closed);
    assert!(err.downcast_ref::<Closed>().is_some());
    assert_eq!(client.status().await.unwrap_err().kind(), Kind::Closed);
    mock.assert_calls(1);

    Ok(())
}

#[tokio::test]
async fn clones_share_the_session() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = client(&server);
    let clone = client.clone();

    clone.close();

    assert!(client.is_closed());
    assert_eq!(
        client.events().by_id("1").await.unwrap_err().kind(),
        Kind::Closed
    );

    Ok(())
}

#[tokio::test]
async fn scoped_closes_after_success() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = client(&server);

    let mock = server.mock(|when, then| {
        when.method(GET).path("/status");
        then.status(StatusCode::OK).body("OK");
    });

    let status = client
        .clone()
        .scoped(|client| async move { client.status().await })
        .await?;

    assert_eq!(status, "OK");
    assert!(client.is_closed());
    assert_eq!(client.status().await.unwrap_err().kind(), Kind::Closed);
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn scoped_closes_after_error() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = client(&server);

    let mock = server.mock(|when, then| {
        when.method(GET).path("/markets/missing");
        then.status(StatusCode::NOT_FOUND);
    });

    let err = client
        .clone()
        .scoped(|client| async move { client.markets().by_id("missing").await })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Kind::NotFound);
    assert!(client.is_closed());
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn scoped_closes_after_panic() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = client(&server);

    let handle = tokio::spawn(client.clone().scoped(|_client| async {
        panic!("caller bug");
    }));

    assert!(handle.await.unwrap_err().is_panic());
    assert!(client.is_closed());

    Ok(())
}

#[tokio::test]
async fn scoped_closes_when_cancelled() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = client(&server);

    let outcome = tokio::time::timeout(
        Duration::from_millis(50),
        client.clone().scoped(|_client| async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }),
    )
    .await;

    assert!(outcome.is_err());
    assert!(client.is_closed());

    Ok(())
}

#[tokio::test]
async fn scoped_closes_when_dropped_unpolled() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = client(&server);

    let scope = client.clone().scoped(|client| async move { client.status().await });
    drop(scope);

    assert!(client.is_closed());

    Ok(())
}

#[tokio::test]
async fn concurrent_calls_share_one_client() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = client(&server);

    let mock = server.mock(|when, then| {
        when.method(GET).path("/markets/7");
        then.status(StatusCode::OK)
            .json_body(market("7", "seven", "Seven?"));
    });

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.markets().by_id("7").await })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await??.id, "7");
    }
    mock.assert_calls(8);

    Ok(())
}
