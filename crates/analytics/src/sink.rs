//! Analytics sinks: where events go besides the on-screen log.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{AnalyticsError, AnalyticsEvent, Result};

/// Trait for analytics backends that receive logged events.
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    /// Forwards one event to the backend.
    async fn log_event(&self, event: &AnalyticsEvent) -> Result<()>;
}

/// An event as received by an [`InMemoryAnalyticsSink`].
#[derive(Debug, Clone, Serialize)]
pub struct DispatchedEvent {
    /// Identifier assigned on receipt.
    pub dispatch_id: Uuid,

    /// The event itself, with typed parameters.
    pub event: AnalyticsEvent,

    /// When the sink received the event.
    pub dispatched_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct InMemorySinkState {
    events: Vec<DispatchedEvent>,
    fail_on_log: bool,
}

/// In-memory analytics sink for tests and the demo.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnalyticsSink {
    state: Arc<RwLock<InMemorySinkState>>,
}

impl InMemoryAnalyticsSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent `log_event` calls fail.
    pub async fn set_fail_on_log(&self, fail: bool) {
        self.state.write().await.fail_on_log = fail;
    }

    /// Returns the received events in arrival order.
    pub async fn events(&self) -> Vec<DispatchedEvent> {
        self.state.read().await.events.clone()
    }

    /// Returns the names of received events in arrival order.
    pub async fn event_names(&self) -> Vec<String> {
        self.state
            .read()
            .await
            .events
            .iter()
            .map(|e| e.event.name().to_string())
            .collect()
    }

    /// Returns the number of received events.
    pub async fn event_count(&self) -> usize {
        self.state.read().await.events.len()
    }
}

#[async_trait]
impl AnalyticsSink for InMemoryAnalyticsSink {
    async fn log_event(&self, event: &AnalyticsEvent) -> Result<()> {
        let mut state = self.state.write().await;

        if state.fail_on_log {
            return Err(AnalyticsError::Sink(format!(
                "sink rejected event {}",
                event.name()
            )));
        }

        state.events.push(DispatchedEvent {
            dispatch_id: Uuid::new_v4(),
            event: event.clone(),
            dispatched_at: Utc::now(),
        });
        Ok(())
    }
}

/// Sink that emits each event as a structured `tracing` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

#[async_trait]
impl AnalyticsSink for TracingSink {
    async fn log_event(&self, event: &AnalyticsEvent) -> Result<()> {
        let params = serde_json::to_string(event.params())?;
        tracing::info!(event_name = event.name(), %params, "analytics event logged");
        Ok(())
    }
}
