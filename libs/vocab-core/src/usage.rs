//! Monthly speech-synthesis usage metering.
//!
//! Characters sent to the synthesis provider are counted per calendar month
//! against a fixed quota. The counter is the only durable state in the
//! game; it is loaded once through a [`UsageStore`] and saved after every
//! change.

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::QuizError;

/// Free-tier ceiling of the synthesis provider, in characters per month.
pub const DEFAULT_MONTHLY_CHAR_LIMIT: u64 = 1_000_000;

/// Format a date as its period key, e.g. `2025-06`.
pub fn period_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Persisted usage record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageState {
    #[serde(rename = "current_month")]
    pub period_key: String,
    pub characters_used: u64,
    pub requests_made: u64,
}

impl UsageState {
    /// Zeroed record for a period.
    pub fn fresh(period_key: String) -> Self {
        Self {
            period_key,
            characters_used: 0,
            requests_made: 0,
        }
    }
}

/// Usage figures reported to front-ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    pub characters_used: u64,
    pub characters_limit: u64,
    pub characters_remaining: u64,
    pub requests_made: u64,
    pub current_month: String,
}

/// Source of the current date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Error)]
pub enum UsageStoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid usage record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable storage for the usage record.
pub trait UsageStore: Send + Sync {
    /// Load the record; `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<UsageState>, UsageStoreError>;

    fn save(&self, state: &UsageState) -> Result<(), UsageStoreError>;
}

/// Usage record kept in a small JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileUsageStore {
    path: PathBuf,
}

impl JsonFileUsageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UsageStore for JsonFileUsageStore {
    fn load(&self) -> Result<Option<UsageState>, UsageStoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, state: &UsageState) -> Result<(), UsageStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string(state)?)?;
        Ok(())
    }
}

/// In-process store, for tests and hosts without a writable disk.
#[derive(Debug, Default)]
pub struct MemoryUsageStore {
    state: Mutex<Option<UsageState>>,
}

impl MemoryUsageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing record.
    pub fn with_state(state: UsageState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
        }
    }

    /// Last saved record.
    pub fn stored(&self) -> Option<UsageState> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl UsageStore for MemoryUsageStore {
    fn load(&self) -> Result<Option<UsageState>, UsageStoreError> {
        Ok(self.stored())
    }

    fn save(&self, state: &UsageState) -> Result<(), UsageStoreError> {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = Some(state.clone());
        Ok(())
    }
}

/// Quota gate for speech synthesis.
///
/// All reads and writes go through one mutex, so concurrent audio requests
/// never lose increments.
pub struct UsageMeter {
    limit: u64,
    state: Mutex<UsageState>,
    store: Box<dyn UsageStore>,
    clock: Box<dyn Clock>,
}

impl UsageMeter {
    /// Open a meter on the system clock.
    pub fn open(store: impl UsageStore + 'static, limit: u64) -> Self {
        Self::with_clock(store, limit, SystemClock)
    }

    /// Open a meter, loading the stored record or starting a fresh one.
    pub fn with_clock(
        store: impl UsageStore + 'static,
        limit: u64,
        clock: impl Clock + 'static,
    ) -> Self {
        let current = period_key(clock.today());

        let state = match store.load() {
            Ok(Some(state)) => state,
            Ok(None) => {
                let state = UsageState::fresh(current);
                persist(&store, &state);
                state
            }
            Err(e) => {
                tracing::error!("Error loading usage data: {}", e);
                UsageState::fresh(current)
            }
        };

        let meter = Self {
            limit,
            state: Mutex::new(state),
            store: Box::new(store),
            clock: Box::new(clock),
        };
        meter.check_and_reset();
        meter
    }

    /// Zero the counters if the calendar month changed.
    pub fn check_and_reset(&self) {
        let _state = self.current();
    }

    /// Whether `chars` more characters fit in this month's quota, and how
    /// many remain.
    pub fn can_consume(&self, chars: u64) -> (bool, u64) {
        let quota = self.quota(chars);
        (quota.allowed, quota.remaining)
    }

    /// Like [`can_consume`](Self::can_consume), but rejects with the quota
    /// message.
    pub fn ensure_available(&self, chars: u64) -> Result<u64, QuizError> {
        let quota = self.quota(chars);
        if !quota.allowed {
            return Err(QuizError::AudioUnavailable(format!(
                "Monthly limit exceeded. Used: {}/{} characters",
                quota.used, self.limit
            )));
        }
        Ok(quota.remaining)
    }

    /// Record one successful synthesis request of `chars` characters.
    pub fn consume(&self, chars: u64) {
        let mut state = self.current();
        state.characters_used += chars;
        state.requests_made += 1;
        persist(self.store.as_ref(), &state);

        tracing::info!(
            "Updated usage: {}/{} characters used",
            state.characters_used,
            self.limit
        );
    }

    pub fn snapshot(&self) -> UsageSnapshot {
        let state = self.current();
        UsageSnapshot {
            characters_used: state.characters_used,
            characters_limit: self.limit,
            characters_remaining: self.limit.saturating_sub(state.characters_used),
            requests_made: state.requests_made,
            current_month: state.period_key.clone(),
        }
    }

    fn quota(&self, chars: u64) -> Quota {
        let state = self.current();
        let remaining = self.limit.saturating_sub(state.characters_used);
        Quota {
            allowed: remaining >= chars,
            remaining,
            used: state.characters_used,
        }
    }

    /// Lock the state, rolling it over to the current month first.
    fn current(&self) -> MutexGuard<'_, UsageState> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let key = period_key(self.clock.today());
        if state.period_key != key {
            *state = UsageState::fresh(key);
            persist(self.store.as_ref(), &state);
            tracing::info!("Monthly usage counter reset");
        }
        state
    }
}

struct Quota {
    allowed: bool,
    remaining: u64,
    used: u64,
}

fn persist(store: &dyn UsageStore, state: &UsageState) {
    if let Err(e) = store.save(state) {
        tracing::error!("Error saving usage data: {}", e);
    }
}
