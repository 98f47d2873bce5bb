//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring the router to an in-memory usage store
//! - A recording mock synthesizer in place of the TTS provider
//! - Helpers for loading vocabulary and starting games

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::Value;

use vocab_core::{MemoryUsageStore, MockMode, MockSynthesizer, Synthesizer, UsageMeter};
use vocab_drill_backend::config::GameDefaults;
use vocab_drill_backend::{build_router, AppState};

/// Test context containing the router and its collaborators.
pub struct TestContext {
    pub meter: Arc<UsageMeter>,
    pub synth: Arc<MockSynthesizer>,
    app: Router,
}

impl TestContext {
    /// Audio enabled, default quota.
    pub fn new() -> Self {
        Self::build(MockMode::Audio(fixtures::MOCK_AUDIO.to_vec()), 1_000_000, true)
    }

    /// Audio enabled with a custom monthly quota.
    pub fn with_quota(limit: u64) -> Self {
        Self::build(MockMode::Audio(fixtures::MOCK_AUDIO.to_vec()), limit, true)
    }

    /// Synthesizer that fails every call.
    pub fn with_failing_audio(message: &str) -> Self {
        Self::build(MockMode::Error(message.to_string()), 1_000_000, true)
    }

    /// No synthesizer configured.
    pub fn without_audio() -> Self {
        Self::build(MockMode::Empty, 1_000_000, false)
    }

    fn build(mode: MockMode, limit: u64, audio: bool) -> Self {
        let meter = Arc::new(UsageMeter::open(MemoryUsageStore::new(), limit));
        let synth = Arc::new(MockSynthesizer::new(mode));

        let synthesizer: Option<Arc<dyn Synthesizer>> = if audio {
            Some(synth.clone() as Arc<dyn Synthesizer>)
        } else {
            None
        };

        let state = AppState::new(Arc::clone(&meter), synthesizer, GameDefaults::default());
        let app = build_router(state);

        Self { meter, synth, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}

/// Load rows and assert the load succeeded.
pub async fn load_rows(server: &TestServer, rows: &[(&str, &str)]) -> Value {
    let response = server
        .post("/api/load_rows")
        .json(&fixtures::rows_request(rows))
        .await;
    response.assert_status_ok();
    response.json()
}

/// Start a game and return the first turn.
pub async fn start_game(
    server: &TestServer,
    mode: &str,
    max_questions: u32,
    max_passes: u32,
) -> Value {
    let response = server
        .post("/api/start_game")
        .json(&fixtures::start_request(mode, max_questions, max_passes))
        .await;
    response.assert_status_ok();
    response.json()
}
