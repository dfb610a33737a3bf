//! Application State
//!
//! Shared state accessible by all API handlers: the current snapshot, the
//! assistant conversation, and the in-memory map token. Wrapped in Arc for
//! thread-safe sharing across async tasks.
//!
//! Refreshes are last-write-wins: the periodic task and manual refresh both
//! call [`AppState::refresh_snapshot`], and whichever writes last simply
//! replaces the displayed snapshot. Nothing persists across restarts.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::assistant::Conversation;
use crate::config::Config;
use crate::generator::{generate_snapshot, Snapshot};

/// Shared application state for all handlers
pub struct AppState {
    /// Current civic snapshot and forecast
    snapshot: RwLock<Snapshot>,
    /// Assistant conversation history
    conversation: RwLock<Conversation>,
    /// Map-provider access token, held only in memory
    map_token: RwLock<Option<String>>,
    /// Service configuration
    pub config: Config,
    /// Server start time for uptime tracking
    start_time: Instant,
}

impl AppState {
    /// Create state with an initial snapshot generated on the spot
    pub fn new(config: Config) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            snapshot: RwLock::new(generate_snapshot(&mut rng)),
            conversation: RwLock::new(Conversation::new()),
            map_token: RwLock::new(None),
            config,
            start_time: Instant::now(),
        }
    }

    /// Get a copy of the current snapshot
    pub async fn snapshot(&self) -> Snapshot {
        self.snapshot.read().await.clone()
    }

    /// Regenerate the snapshot and return the new value
    pub async fn refresh_snapshot(&self) -> Snapshot {
        let fresh = {
            let mut rng = rand::thread_rng();
            generate_snapshot(&mut rng)
        };
        let mut guard = self.snapshot.write().await;
        *guard = fresh.clone();
        tracing::debug!(
            risk_level = %fresh.civic.risk_level,
            confidence = fresh.civic.confidence,
            "Snapshot refreshed"
        );
        fresh
    }

    /// Run the responder against the conversation: append the user turn and
    /// the assistant turn, returning the assistant's reply text
    pub async fn converse(&self, message: &str) -> String {
        let reply = crate::assistant::respond(message);
        let mut conversation = self.conversation.write().await;
        conversation.push_user(message);
        conversation.push_assistant(reply);
        reply.to_string()
    }

    /// Get a copy of the conversation history
    pub async fn conversation(&self) -> Conversation {
        self.conversation.read().await.clone()
    }

    /// Reset the conversation to the initial greeting
    pub async fn clear_conversation(&self) -> Conversation {
        let mut conversation = self.conversation.write().await;
        conversation.clear();
        conversation.clone()
    }

    /// Store the map-provider token (in memory only)
    pub async fn set_map_token(&self, token: String) {
        *self.map_token.write().await = Some(token);
    }

    /// Whether a non-empty map token has been configured
    pub async fn has_map_token(&self) -> bool {
        self.map_token
            .read()
            .await
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Age of the current snapshot in seconds
    pub async fn snapshot_age_seconds(&self) -> i64 {
        let generated_at = self.snapshot.read().await.generated_at;
        (chrono::Utc::now() - generated_at).num_seconds().max(0)
    }

    /// Spawn the periodic refresh task
    ///
    /// Regenerates the snapshot every `refresh.interval_secs`. The first tick
    /// is skipped; the constructor already generated the initial snapshot.
    pub fn start_periodic_refresh(state: Arc<Self>) -> JoinHandle<()> {
        let period = Duration::from_secs(state.config.refresh.interval_secs.max(1));

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // completes immediately
            loop {
                interval.tick().await;
                let snapshot = state.refresh_snapshot().await;
                tracing::info!(
                    risk_level = %snapshot.civic.risk_level,
                    "Periodic snapshot refresh"
                );
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::GREETING;

    fn test_state() -> AppState {
        AppState::new(Config::default())
    }

    #[tokio::test]
    async fn test_refresh_replaces_snapshot() {
        let state = test_state();
        let before = state.snapshot().await;
        let after = state.refresh_snapshot().await;

        assert!(after.generated_at >= before.generated_at);
        assert_eq!(state.snapshot().await, after);
    }

    #[tokio::test]
    async fn test_converse_appends_two_turns() {
        let state = test_state();
        let reply = state.converse("predict dengue risk").await;
        assert!(!reply.is_empty());

        let conversation = state.conversation().await;
        assert_eq!(conversation.len(), 3); // greeting + user + assistant
    }

    #[tokio::test]
    async fn test_clear_conversation() {
        let state = test_state();
        state.converse("hello").await;

        let cleared = state.clear_conversation().await;
        assert_eq!(cleared.len(), 1);
        assert_eq!(cleared.turns()[0].text, GREETING);
    }

    #[tokio::test]
    async fn test_map_token_lifecycle() {
        let state = test_state();
        assert!(!state.has_map_token().await);

        state.set_map_token("pk.test-token".to_string()).await;
        assert!(state.has_map_token().await);

        state.set_map_token("   ".to_string()).await;
        assert!(!state.has_map_token().await);
    }
}
