//! Analytics events for the storefront demo.
//!
//! This crate provides:
//! - [`EventParams`], ordered key/value parameters of an event
//! - [`AnalyticsEvent`] and the e-commerce event names and parameter keys
//! - [`record`], which renders an event as pretty-printed JSON
//! - [`EventLog`] and [`EventRecorder`] for the most-recent-first display log
//! - [`AnalyticsSink`] for forwarding events to an analytics backend

pub mod error;
pub mod event;
pub mod params;
pub mod recorder;
pub mod sink;

pub use error::{AnalyticsError, Result};
pub use event::{AnalyticsEvent, keys, names};
pub use params::{EventParams, ParamValue};
pub use recorder::{EventLog, EventRecorder, record};
pub use sink::{AnalyticsSink, DispatchedEvent, InMemoryAnalyticsSink, TracingSink};
