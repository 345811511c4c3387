//! Test setup helpers - builders for scoreboards and in-process HTTP apps
#![allow(dead_code)] // Test utilities may not all be used in every test

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use arenascore::{api, AppState, MatchClock, PlayerId, Scoreboard};

// ============================================================================
// Scoreboard Builder
// ============================================================================

pub struct ScoreboardBuilder {
    names: Vec<String>,
    increment: Option<u32>,
}

impl ScoreboardBuilder {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            increment: None,
        }
    }

    pub fn with_players(mut self, names: &[&str]) -> Self {
        self.names.extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn with_increment(mut self, value: u32) -> Self {
        self.increment = Some(value);
        self
    }

    /// Builds the scoreboard and returns player ids in registration order
    pub fn build(self) -> (Scoreboard, Vec<PlayerId>) {
        let mut scoreboard = Scoreboard::new();
        if let Some(value) = self.increment {
            scoreboard
                .set_increment(value)
                .expect("test increment should be allowed");
        }
        let ids = self
            .names
            .iter()
            .map(|name| scoreboard.add_player(name).expect("valid test name").id)
            .collect();
        (scoreboard, ids)
    }
}

// ============================================================================
// In-process HTTP app
// ============================================================================

pub struct TestApp {
    pub state: AppState,
    pub clock: MatchClock,
}

impl TestApp {
    pub fn new() -> Self {
        let clock = MatchClock::new();
        Self {
            state: AppState::new(Scoreboard::new(), clock.clone()),
            clock,
        }
    }

    fn router(&self) -> Router {
        api::router().with_state(self.state.clone())
    }

    /// Sends a request and returns the status with the raw body
    pub async fn send(&self, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    /// Sends a request, asserts the status and decodes the JSON body
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        uri: &str,
        body: Option<&str>,
        expected: StatusCode,
    ) -> T {
        let (status, bytes) = self.send(method, uri, body).await;
        assert_eq!(
            status,
            expected,
            "{} {} returned {}: {}",
            method,
            uri,
            status,
            String::from_utf8_lossy(&bytes)
        );
        serde_json::from_slice(&bytes).unwrap()
    }

    pub async fn add_player(&self, name: &str) -> PlayerId {
        let body = format!(r#"{{"name": "{}"}}"#, name);
        let player: serde_json::Value = self
            .call("POST", "/players", Some(&body), StatusCode::CREATED)
            .await;
        PlayerId(player["id"].as_u64().unwrap())
    }

    pub async fn score(&self, id: PlayerId, positive: bool) -> serde_json::Value {
        let body = format!(r#"{{"positive": {}}}"#, positive);
        self.call(
            "POST",
            &format!("/players/{}/score", id),
            Some(&body),
            StatusCode::OK,
        )
        .await
    }
}
