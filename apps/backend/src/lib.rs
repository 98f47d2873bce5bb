pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::{JsonFileUsageStore, QuizSession, Synthesizer, UsageMeter};

use crate::config::{Config, GameDefaults};
use crate::error::ApiError;
use crate::services::tts::GoogleTtsSynthesizer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<QuizSession>>,
    pub meter: Arc<UsageMeter>,
    pub http: reqwest::Client,
    pub defaults: GameDefaults,
}

impl AppState {
    /// Host one session over the given meter and optional synthesizer.
    pub fn new(
        meter: Arc<UsageMeter>,
        synthesizer: Option<Arc<dyn Synthesizer>>,
        defaults: GameDefaults,
    ) -> Self {
        let session = QuizSession::new(Arc::clone(&meter), synthesizer);
        Self {
            session: Arc::new(Mutex::new(session)),
            meter,
            http: reqwest::Client::new(),
            defaults,
        }
    }

    /// Lock the session. Never hold the guard across an await.
    pub fn session(&self) -> Result<MutexGuard<'_, QuizSession>, ApiError> {
        self.session
            .lock()
            .map_err(|_| ApiError::Internal("session lock poisoned".to_string()))
    }
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading usage data from {}", config.usage_file.display());
    let meter = Arc::new(UsageMeter::open(
        JsonFileUsageStore::new(&config.usage_file),
        config.monthly_char_limit,
    ));

    let synthesizer: Option<Arc<dyn Synthesizer>> = match &config.google_tts_api_key {
        Some(key) => match GoogleTtsSynthesizer::new(key.clone()) {
            Ok(provider) => {
                tracing::info!("Google TTS client initialized");
                Some(Arc::new(provider))
            }
            Err(e) => {
                tracing::error!("Failed to initialize Google TTS: {}", e);
                None
            }
        },
        None => {
            tracing::warn!("GOOGLE_TTS_API_KEY not set, audio disabled");
            None
        }
    };

    let state = AppState::new(meter, synthesizer, config.defaults);
    let app = build_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// All API routes over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Vocabulary routes
        .route("/api/set_languages", post(routes::vocabulary::set_languages))
        .route("/api/load_rows", post(routes::vocabulary::load_rows))
        .route("/api/load_csv", post(routes::vocabulary::load_file))
        .route("/api/load_excel", post(routes::vocabulary::load_file))
        .route("/api/load_google_sheet", post(routes::vocabulary::load_google_sheet))
        // Game routes
        .route("/api/start_game", post(routes::game::start_game))
        .route("/api/next_question", get(routes::game::next_question))
        .route("/api/show_solution", post(routes::game::show_solution))
        .route("/api/hide_solution", post(routes::game::hide_solution))
        .route("/api/check_answer", post(routes::game::check_answer))
        .route("/api/pass_question", post(routes::game::pass_question))
        .route("/api/end_game", post(routes::game::end_game))
        // Audio routes
        .route("/api/play_audio", post(routes::audio::play_audio))
        .route("/api/usage_info", get(routes::audio::usage_info))
        .route("/api/status", get(routes::status::status))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
