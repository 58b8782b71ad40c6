//! In-process session state.
//!
//! Everything here is reset on restart; there is no persistence layer.

use crate::config::AppConfig;
use crate::llm::LlmProvider;
use crate::models::Recipe;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The latest recipe plus every recipe produced in this process lifetime.
///
/// History is append-only, unbounded, and keeps duplicates.
#[derive(Debug, Default)]
pub struct SessionState {
    pub latest: Recipe,
    pub history: Vec<Recipe>,
}

impl SessionState {
    /// Store a freshly generated or modified recipe.
    pub fn record(&mut self, recipe: Recipe) {
        self.latest = recipe.clone();
        self.history.push(recipe);
    }
}

/// Shared application context handed to every handler.
///
/// Session mutations go through the lock, so individual writes are atomic.
/// The completion call itself runs outside the critical section; when two
/// requests overlap, whichever completion finishes last wins `latest`.
#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub llm: Arc<dyn LlmProvider>,
    pub session: RwLock<SessionState>,
}

impl AppContext {
    pub fn new(config: AppConfig, llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            config,
            llm,
            session: RwLock::new(SessionState::default()),
        }
    }
}
