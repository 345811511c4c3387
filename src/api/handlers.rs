use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use super::types::{
    AddPlayerRequest, ClockResponse, IncrementRequest, MatchResponse, ScoreRequest,
    SummaryResponse,
};
use crate::history::HistoryEvent;
use crate::player::{Player, PlayerId, RankedPlayer};
use crate::shared::{AppError, AppState};
use crate::stats::{DistributionRow, PlayerAnalytics};

/// HTTP handler for the ranked player list
///
/// GET /players
#[instrument(name = "list_players", skip(state))]
pub async fn list_players(State(state): State<AppState>) -> Json<Vec<RankedPlayer>> {
    let scoreboard = state.scoreboard.read().await;
    Json(scoreboard.list_players())
}

/// HTTP handler for adding a player
///
/// POST /players
/// Returns the created player, or 400 if the name is blank
#[instrument(name = "add_player", skip(state))]
pub async fn add_player(
    State(state): State<AppState>,
    Json(request): Json<AddPlayerRequest>,
) -> Result<(StatusCode, Json<Player>), AppError> {
    let mut scoreboard = state.scoreboard.write().await;
    let player = scoreboard.add_player(&request.name)?;

    Ok((StatusCode::CREATED, Json(player)))
}

/// HTTP handler for removing a player
///
/// DELETE /players/:id
/// Always 204; removing an unknown player is not an error
#[instrument(name = "remove_player", skip(state))]
pub async fn remove_player(State(state): State<AppState>, Path(id): Path<u64>) -> StatusCode {
    let mut scoreboard = state.scoreboard.write().await;
    scoreboard.remove_player(PlayerId(id));
    StatusCode::NO_CONTENT
}

/// HTTP handler for a plus or minus score action
///
/// POST /players/:id/score
/// Returns the recorded history event for the UI to animate
#[instrument(name = "apply_score", skip(state))]
pub async fn apply_score(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<HistoryEvent>, AppError> {
    let mut scoreboard = state.scoreboard.write().await;
    let event = scoreboard.apply_delta(PlayerId(id), request.positive)?;
    Ok(Json(event))
}

/// HTTP handler for one player's score series, oldest first
///
/// GET /players/:id/history
#[instrument(name = "player_history", skip(state))]
pub async fn player_history(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<Vec<HistoryEvent>> {
    let scoreboard = state.scoreboard.read().await;
    Json(scoreboard.history_for(PlayerId(id)))
}

/// HTTP handler for the analytics panel
///
/// GET /players/:id/analytics
#[instrument(name = "player_analytics", skip(state))]
pub async fn player_analytics(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<PlayerAnalytics>, AppError> {
    let scoreboard = state.scoreboard.read().await;
    let analytics = scoreboard.player_analytics(PlayerId(id))?;
    Ok(Json(analytics))
}

/// HTTP handler for the match timeline, newest first
///
/// GET /history
#[instrument(name = "list_history", skip(state))]
pub async fn list_history(State(state): State<AppState>) -> Json<Vec<HistoryEvent>> {
    let scoreboard = state.scoreboard.read().await;
    Json(scoreboard.history().iter().cloned().collect())
}

/// POST /round/next
#[instrument(name = "advance_round", skip(state))]
pub async fn advance_round(State(state): State<AppState>) -> Json<MatchResponse> {
    let mut scoreboard = state.scoreboard.write().await;
    scoreboard.advance_round();
    Json(MatchResponse::from(scoreboard.match_state()))
}

/// HTTP handler for changing the step size
///
/// PUT /increment
/// Returns 400 and leaves the step unchanged for values outside the allowed set
#[instrument(name = "set_increment", skip(state))]
pub async fn set_increment(
    State(state): State<AppState>,
    Json(request): Json<IncrementRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let mut scoreboard = state.scoreboard.write().await;
    scoreboard.set_increment(request.value)?;
    Ok(Json(MatchResponse::from(scoreboard.match_state())))
}

/// HTTP handler for resetting the match
///
/// POST /reset
/// Zeroes scores, clears history, restarts the round count and the clock.
/// Players are kept.
#[instrument(name = "reset_match", skip(state))]
pub async fn reset_match(State(state): State<AppState>) -> Json<MatchResponse> {
    let mut scoreboard = state.scoreboard.write().await;
    scoreboard.reset_match();
    state.clock.reset();

    info!("Match and clock reset");

    Json(MatchResponse::from(scoreboard.match_state()))
}

/// GET /stats
#[instrument(name = "get_stats", skip(state))]
pub async fn get_stats(State(state): State<AppState>) -> Json<SummaryResponse> {
    let scoreboard = state.scoreboard.read().await;
    let match_state = scoreboard.match_state();

    Json(SummaryResponse {
        stats: scoreboard.statistics().summary(),
        round: match_state.round,
        score_increment: match_state.score_increment.value(),
        total_points: match_state.total_points,
        total_changes: match_state.total_changes,
        clock: ClockResponse::from(&state.clock),
    })
}

/// GET /distribution
#[instrument(name = "get_distribution", skip(state))]
pub async fn get_distribution(State(state): State<AppState>) -> Json<Vec<DistributionRow>> {
    let scoreboard = state.scoreboard.read().await;
    Json(scoreboard.statistics().distribution())
}

/// GET /clock
#[instrument(name = "get_clock", skip(state))]
pub async fn get_clock(State(state): State<AppState>) -> Json<ClockResponse> {
    Json(ClockResponse::from(&state.clock))
}
