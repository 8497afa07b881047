//! Tests for the JSON API, driven in-process through the router.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use four_in_a_row::{SharedGame, router};
use http_body_util::BodyExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(computer_moves: bool, static_dir: &std::path::Path) -> Router {
    let game = SharedGame::with_rng(StdRng::seed_from_u64(31), computer_moves);
    router(game, static_dir)
}

fn api(computer_moves: bool) -> Router {
    app(computer_moves, std::path::Path::new("does-not-exist"))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Value {
    let (status, bytes) = send(app, method, uri, body).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&bytes).unwrap()
}

fn fresh_json() -> Value {
    json!({
        "board": vec![""; 16],
        "phase": "awaiting_coin_flip",
        "gameState": "flip",
        "startingPlayer": null,
        "player": null,
        "comp": null,
        "currentPlayer": null,
        "disable": false,
        "winnerCombo": null,
    })
}

#[tokio::test]
async fn test_initial_state() {
    let app = api(false);
    assert_eq!(call(&app, Method::GET, "/api/state", None).await, fresh_json());
}

#[tokio::test]
async fn test_flip_starts_game() {
    let app = api(false);
    let state = call(&app, Method::POST, "/api/flip", None).await;
    assert_eq!(state["phase"], "in_progress");
    assert_eq!(state["gameState"], "start");
    assert_eq!(state["player"], "O");
    assert_eq!(state["comp"], "X");
    assert_eq!(state["disable"], false);
    assert_eq!(state["currentPlayer"], state["startingPlayer"]);
    assert!(state["startingPlayer"] == "X" || state["startingPlayer"] == "O");

    // The state endpoint reports the same game.
    assert_eq!(call(&app, Method::GET, "/api/state", None).await, state);
}

#[tokio::test]
async fn test_invalid_moves_return_unchanged_state() {
    let app = api(false);
    let started = call(&app, Method::POST, "/api/flip", None).await;

    for index in [99, 16, -1] {
        let state = call(&app, Method::POST, "/api/move", Some(json!({ "index": index }))).await;
        assert_eq!(state, started);
    }

    let after_move = call(&app, Method::POST, "/api/move", Some(json!({ "index": 6 }))).await;
    assert_ne!(after_move, started);
    let again = call(&app, Method::POST, "/api/move", Some(json!({ "index": 6 }))).await;
    assert_eq!(again, after_move);
}

#[tokio::test]
async fn test_move_before_flip_is_ignored() {
    let app = api(false);
    let state = call(&app, Method::POST, "/api/move", Some(json!({ "index": 0 }))).await;
    assert_eq!(state, fresh_json());
}

#[tokio::test]
async fn test_win_then_reset() {
    let app = api(false);
    let started = call(&app, Method::POST, "/api/flip", None).await;
    let starter = started["startingPlayer"].clone();

    let mut state = started;
    for index in [0, 4, 1, 5, 2, 6, 3] {
        state = call(&app, Method::POST, "/api/move", Some(json!({ "index": index }))).await;
    }
    assert_eq!(state["disable"], true);
    assert_eq!(state["phase"], "finished");
    assert_eq!(state["winnerCombo"], json!([0, 1, 2, 3]));
    assert_eq!(state["board"][0], starter);
    assert_eq!(state["board"][3], starter);

    let locked = call(&app, Method::POST, "/api/move", Some(json!({ "index": 10 }))).await;
    assert_eq!(locked, state);

    let reset = call(&app, Method::POST, "/api/reset", None).await;
    assert_eq!(reset, fresh_json());
}

#[tokio::test]
async fn test_server_driven_computer() {
    let app = api(true);
    let state = call(&app, Method::POST, "/api/flip", None).await;
    assert_eq!(state["currentPlayer"], "O");
    if state["startingPlayer"] == "X" {
        assert_eq!(state["board"][0], "X");
    }

    let state = call(&app, Method::POST, "/api/move", Some(json!({ "index": 15 }))).await;
    assert_eq!(state["board"][15], "O");
    assert_eq!(state["currentPlayer"], "O");
}

#[tokio::test]
async fn test_malformed_move_body_is_noop() {
    let app = api(false);
    let started = call(&app, Method::POST, "/api/flip", None).await;

    for body in [json!({}), json!({ "index": "abc" }), json!({ "index": 3.0 }), json!([4])] {
        let state = call(&app, Method::POST, "/api/move", Some(body)).await;
        assert_eq!(state, started);
    }

    // No content type and no body at all.
    let (status, bytes) = send(&app, Method::POST, "/api/move", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&bytes).unwrap(), started);

    // Not JSON.
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/move")
        .header("content-type", "text/plain")
        .body(Body::from("index=3"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(serde_json::from_slice::<Value>(&bytes).unwrap(), started);
}

#[tokio::test]
async fn test_wrong_method() {
    let app = api(false);
    let (status, _) = send(&app, Method::GET, "/api/move", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_static_files_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Four in a Row</h1>").unwrap();
    let app = app(false, dir.path());

    let (status, body) = send(&app, Method::GET, "/index.html", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>Four in a Row</h1>");

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>Four in a Row</h1>");

    let (status, _) = send(&app, Method::GET, "/missing.js", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
