//! Event recorder and the on-screen event log.

use std::collections::VecDeque;
use std::sync::Arc;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::Serialize;
use tracing::debug;

use crate::event::check_name;
use crate::{AnalyticsEvent, EventParams, Result};

static GLOBAL_LOG: Lazy<EventLog> = Lazy::new(EventLog::new);

/// Shape of a recorded event: every parameter value is a string.
#[derive(Serialize)]
struct RecordedEvent<'a> {
    event_name: &'a str,
    params: IndexMap<&'a str, String>,
}

/// Renders an event as pretty-printed JSON for display.
///
/// The output has the shape
/// `{"event_name": <name>, "params": {<key>: <string value>, ...}}` with keys
/// in insertion order. Parameter values are stringified, so numbers, booleans
/// and item lists lose their type. Blank event names are rejected.
pub fn record(event_name: &str, params: &EventParams) -> Result<String> {
    check_name(event_name)?;
    let recorded = RecordedEvent {
        event_name,
        params: params.iter().map(|(k, v)| (k, v.to_string())).collect(),
    };
    Ok(serde_json::to_string_pretty(&recorded)?)
}

/// Most-recent-first list of recorded events.
///
/// Clones share the same list. Entries are never removed; the log grows for
/// as long as it lives.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Arc<RwLock<VecDeque<String>>>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide log, creating it on first access.
    pub fn global() -> Self {
        GLOBAL_LOG.clone()
    }

    /// Returns true if both handles point at the same log.
    pub fn same_log(&self, other: &EventLog) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Inserts an entry at the front.
    pub fn prepend(&self, entry: impl Into<String>) {
        self.entries.write().push_front(entry.into());
    }

    /// Returns a copy of the entries, most recent first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.read().iter().cloned().collect()
    }

    /// Returns the entry at `index`, where 0 is the most recent.
    pub fn get(&self, index: usize) -> Option<String> {
        self.entries.read().get(index).cloned()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Concatenates all entries, most recent first, each followed by a newline.
    pub fn joined(&self) -> String {
        self.entries.read().iter().fold(String::new(), |mut out, entry| {
            out.push_str(entry);
            out.push('\n');
            out
        })
    }
}

/// Formats events and prepends them to an [`EventLog`].
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    log: EventLog,
}

impl EventRecorder {
    /// Creates a recorder writing to the given log.
    pub fn new(log: EventLog) -> Self {
        Self { log }
    }

    /// Creates a recorder writing to the process-wide log.
    pub fn global() -> Self {
        Self::new(EventLog::global())
    }

    /// Returns the log this recorder writes to.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Formats the event, inserts it at the front of the log and returns the
    /// formatted string.
    pub fn append(&self, event_name: &str, params: &EventParams) -> Result<String> {
        let formatted = record(event_name, params)?;
        self.log.prepend(formatted.clone());

        debug!(event_name, params = params.len(), "event recorded");
        metrics::counter!("analytics_events_recorded_total", "event" => event_name.to_string())
            .increment(1);
        Ok(formatted)
    }

    /// Same as [`EventRecorder::append`] for an already built event.
    pub fn append_event(&self, event: &AnalyticsEvent) -> Result<String> {
        self.append(event.name(), event.params())
    }
}
