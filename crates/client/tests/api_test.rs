mod common;

use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use bedbet_client::api::TOKEN_REQUIRED;
use bedbet_core::errors::BetError;
use pretty_assertions::assert_eq;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::json;

use common::{context, recording_get, spawn_server, team_json, Recorder};

#[tokio::test]
async fn test_auth_headers_with_token() {
    let ctx = context("http://127.0.0.1:9", Some("abc"));

    let headers = ctx.api.auth_headers().await.unwrap();

    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
}

#[tokio::test]
async fn test_auth_headers_without_token() {
    let ctx = context("http://127.0.0.1:9", None);

    let headers = ctx.api.auth_headers().await.unwrap();

    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert!(headers.get(AUTHORIZATION).is_none());
}

#[tokio::test]
async fn test_authed_call_without_token_never_reaches_server() {
    let recorder = Recorder::new();
    let router = Router::new().route(
        "/team/list",
        recording_get(&recorder, StatusCode::OK, json!({ "status_code": 200, "teams": [] })),
    );
    let base = spawn_server(router).await;
    let ctx = context(&base, None);

    let err = ctx.api.team_list().await.unwrap_err();

    match err {
        BetError::Authentication(message) => assert_eq!(message, TOKEN_REQUIRED),
        other => panic!("expected authentication error, got {:?}", other),
    }
    assert_eq!(recorder.count(), 0);
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let recorder = Recorder::new();
    let router = Router::new().route(
        "/user/info",
        recording_get(&recorder, StatusCode::OK, json!({ "user": { "coin": 7 } })),
    );
    let base = spawn_server(router).await;
    let ctx = context(&base, Some("abc"));

    let info = ctx.api.user_info().await.unwrap();

    assert_eq!(info.coin, Some(7));
    assert_eq!(recorder.requests()[0].authorization.as_deref(), Some("Bearer abc"));
}

#[tokio::test]
async fn test_detail_message_is_surfaced() {
    let recorder = Recorder::new();
    let router = Router::new().route(
        "/team/list",
        recording_get(
            &recorder,
            StatusCode::UNAUTHORIZED,
            json!({ "detail": { "message": "Token expired" } }),
        ),
    );
    let base = spawn_server(router).await;
    let ctx = context(&base, Some("abc"));

    let err = ctx.api.team_list().await.unwrap_err();

    match err {
        BetError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Token expired");
        }
        other => panic!("expected api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_team_list_checks_embedded_status() {
    let recorder = Recorder::new();
    let router = Router::new().route(
        "/team/list",
        recording_get(
            &recorder,
            StatusCode::OK,
            json!({ "status_code": 500, "message": "", "teams": [] }),
        ),
    );
    let base = spawn_server(router).await;
    let ctx = context(&base, Some("abc"));

    let err = ctx.api.team_list().await.unwrap_err();

    assert_eq!(err.user_message(), "Failed to get teams");
}

#[tokio::test]
async fn test_team_uid_is_path_encoded() {
    let router = Router::new().route(
        "/team/info/:id",
        get(|Path(id): Path<String>| async move {
            Json(json!({
                "team": team_json(
                    &id,
                    "2024-06-01T23:00:00+09:00",
                    "2024-06-02T07:00:00+09:00",
                    json!([]),
                    0
                )
            }))
        }),
    );
    let base = spawn_server(router).await;
    let ctx = context(&base, Some("abc"));

    let team = ctx.api.team_info("team 1/b").await.unwrap();

    assert_eq!(team.team_uid, "team 1/b");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // nothing listens on the discard port
    let ctx = context("http://127.0.0.1:9", Some("abc"));

    let err = ctx.api.user_info().await.unwrap_err();

    assert!(matches!(err, BetError::Network(_)));
}
