// HTTP adapter
//
// JSON endpoints the browser scoreboard calls. Handlers translate requests
// into scoreboard commands and queries and shape the results; no scoring
// rules live here.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::shared::AppState;

pub use handlers::*;

mod handlers;
pub mod types;

/// All scoreboard routes, ready for `with_state`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/players", get(list_players).post(add_player))
        .route("/players/:id", delete(remove_player))
        .route("/players/:id/score", post(apply_score))
        .route("/players/:id/history", get(player_history))
        .route("/players/:id/analytics", get(player_analytics))
        .route("/history", get(list_history))
        .route("/round/next", post(advance_round))
        .route("/increment", put(set_increment))
        .route("/reset", post(reset_match))
        .route("/stats", get(get_stats))
        .route("/distribution", get(get_distribution))
        .route("/clock", get(get_clock))
}
