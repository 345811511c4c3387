use arenascore::{
    api,
    clock::start_clock_task,
    AppState, MatchClock, Scoreboard, ServerConfig,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arenascore=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    info!(?config, "Starting Arena Score server");

    let clock = MatchClock::new();
    tokio::spawn(start_clock_task(clock.clone(), config.clock.clone()));

    let app_state = AppState::new(Scoreboard::new(), clock);

    let mut app = api::router()
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    if config.allow_any_origin {
        app = app.layer(CorsLayer::permissive());
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await
}
