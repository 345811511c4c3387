use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::clock::MatchClock;
use crate::scoring::{Scoreboard, ScoreboardError};

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// One writer at a time: each gesture is applied to completion before the next
    pub scoreboard: Arc<RwLock<Scoreboard>>,
    pub clock: MatchClock,
}

impl AppState {
    pub fn new(scoreboard: Scoreboard, clock: MatchClock) -> Self {
        Self {
            scoreboard: Arc::new(RwLock::new(scoreboard)),
            clock,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<ScoreboardError> for AppError {
    fn from(err: ScoreboardError) -> Self {
        match err {
            ScoreboardError::EmptyName | ScoreboardError::InvalidIncrement(_) => {
                AppError::BadRequest(err.to_string())
            }
            ScoreboardError::PlayerNotFound(_) => AppError::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
