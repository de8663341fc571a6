//! Analytics events and sinks
//!
//! The snippet reports four events over a capability-typed sink. Delivery is
//! fire-and-forget: the component never observes success or failure.

use crate::types::Currency;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Payload carried by every snippet event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventProps {
    pub currency: Currency,
    #[serde(rename = "installmentsCount")]
    pub installments_count: u32,
}

/// Events emitted by the snippet card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsEvent {
    /// The card appeared on screen
    SnippetCardRendered(EventProps),
    /// The card was tapped
    LearnMoreClicked(EventProps),
    /// The learn-more web view appeared
    LearnMorePopUpOpened(EventProps),
    /// The learn-more modal was dismissed
    LearnMorePopUpClosed(EventProps),
}

impl AnalyticsEvent {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::SnippetCardRendered(_) => "SnippetCard.rendered",
            AnalyticsEvent::LearnMoreClicked(_) => "LearnMore.clicked",
            AnalyticsEvent::LearnMorePopUpOpened(_) => "LearnMore.popUpOpened",
            AnalyticsEvent::LearnMorePopUpClosed(_) => "LearnMore.popUpClosed",
        }
    }

    pub fn props(&self) -> EventProps {
        match self {
            AnalyticsEvent::SnippetCardRendered(p)
            | AnalyticsEvent::LearnMoreClicked(p)
            | AnalyticsEvent::LearnMorePopUpOpened(p)
            | AnalyticsEvent::LearnMorePopUpClosed(p) => *p,
        }
    }
}

/// Envelope posted to the collector endpoint
#[derive(Debug, Serialize)]
pub struct EventEnvelope {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub event: &'static str,
    pub properties: EventProps,
}

impl EventEnvelope {
    pub fn new(event: &AnalyticsEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event: event.name(),
            properties: event.props(),
        }
    }
}

/// Destination for snippet events
///
/// Injected into the UI as a capability so tests can substitute a recorder.
pub trait AnalyticsSink: Send + Sync {
    fn send(&self, event: AnalyticsEvent);
}

/// Cloneable handle shared with components through context
#[derive(Clone)]
pub struct AnalyticsHandle {
    inner: Arc<dyn AnalyticsSink>,
}

impl AnalyticsHandle {
    pub fn new(sink: impl AnalyticsSink + 'static) -> Self {
        Self {
            inner: Arc::new(sink),
        }
    }

    pub fn send(&self, event: AnalyticsEvent) {
        self.inner.send(event);
    }
}

/// Sink that writes events to the structured log
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn send(&self, event: AnalyticsEvent) {
        let props = event.props();
        tracing::info!(
            event = event.name(),
            currency = props.currency.code(),
            installments_count = props.installments_count,
            "analytics event"
        );
    }
}

/// Sink that POSTs enveloped events to a collector endpoint
///
/// Each send spawns a detached task; failures are logged and dropped.
pub struct HttpSink {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl AnalyticsSink for HttpSink {
    fn send(&self, event: AnalyticsEvent) {
        let envelope = EventEnvelope::new(&event);
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        tokio::spawn(async move {
            let result = client.post(&endpoint).json(&envelope).send().await;
            match result {
                Ok(response) if !response.status().is_success() => {
                    tracing::warn!(
                        event = envelope.event,
                        status = %response.status(),
                        "analytics collector rejected event"
                    );
                }
                Err(e) => {
                    tracing::warn!(event = envelope.event, "failed to deliver event: {}", e);
                }
                Ok(_) => {}
            }
        });
    }
}

/// Test double that records every event in order
#[cfg(test)]
pub struct RecordingSink {
    events: std::sync::Mutex<Vec<AnalyticsEvent>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn handle(sink: &Arc<Self>) -> AnalyticsHandle {
        AnalyticsHandle {
            inner: sink.clone(),
        }
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl AnalyticsSink for RecordingSink {
    fn send(&self, event: AnalyticsEvent) {
        self.events.lock().unwrap().push(event);
    }
}
