use std::sync::Arc;

use booo_core::DEFAULT_CONTAINER_ID;
use log::{debug, error, info};

use super::{EventDocument, EventRecord, ScheduleError, ScheduleSource};
use crate::{
    dom::{CardReveal, Document, IconRenderer, InlineIcons, RevealPlan, TimedReveal},
    templates::fragments::{event_list, events_empty, events_error},
};

/// Result of one schedule load
#[derive(Debug)]
pub enum ScheduleOutcome {
    Events(Vec<EventRecord>),
    Empty,
    Failed(ScheduleError),
}

impl ScheduleOutcome {
    pub fn card_count(&self) -> usize {
        match self {
            ScheduleOutcome::Events(events) => events.len(),
            ScheduleOutcome::Empty | ScheduleOutcome::Failed(_) => 0,
        }
    }
}

/// Where load failures are reported. Users only ever see the generic
/// error block.
pub trait Diagnostics: Send + Sync {
    fn schedule_failed(&self, location: &str, error: &ScheduleError);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn schedule_failed(&self, location: &str, error: &ScheduleError) {
        error!(target: "schedule", "error loading schedule from {}: {}", location, error);
    }
}

/// Fetches the schedule document and renders it into the events container
pub struct EventListLoader {
    container_id: String,
    source: Arc<dyn ScheduleSource>,
    icons: Arc<dyn IconRenderer>,
    reveal: Arc<dyn CardReveal>,
    diagnostics: Arc<dyn Diagnostics>,
    plan: RevealPlan,
}

impl EventListLoader {
    pub fn new(source: Arc<dyn ScheduleSource>) -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            source,
            icons: Arc::new(InlineIcons::new()),
            reveal: Arc::new(TimedReveal),
            diagnostics: Arc::new(LogDiagnostics),
            plan: RevealPlan::default(),
        }
    }

    pub fn with_container_id(mut self, id: &str) -> Self {
        self.container_id = id.to_string();
        self
    }

    pub fn with_icons(mut self, icons: Arc<dyn IconRenderer>) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_reveal(mut self, reveal: Arc<dyn CardReveal>) -> Self {
        self.reveal = reveal;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_reveal_plan(mut self, plan: RevealPlan) -> Self {
        self.plan = plan;
        self
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn reveal_plan(&self) -> RevealPlan {
        self.plan
    }

    /// Reads and classifies the schedule without touching any document
    pub async fn fetch(&self) -> ScheduleOutcome {
        let bytes = match self.source.read().await {
            Ok(bytes) => bytes,
            Err(e) => return ScheduleOutcome::Failed(e),
        };

        match serde_json::from_slice::<EventDocument>(&bytes) {
            Ok(document) => {
                let events = document.into_events();
                if events.is_empty() {
                    ScheduleOutcome::Empty
                } else {
                    ScheduleOutcome::Events(events)
                }
            }
            Err(e) => ScheduleOutcome::Failed(e.into()),
        }
    }

    /// Fills the events container of `document`.
    ///
    /// Returns `None` without reading anything when the page has no events
    /// container. Otherwise the container ends up holding exactly one of:
    /// the cards, the empty-state message, or the error message.
    pub async fn load(&self, document: &dyn Document) -> Option<ScheduleOutcome> {
        let Some(container) = document.get_element_by_id(&self.container_id) else {
            debug!("no #{} on page, skipping schedule load", self.container_id);
            return None;
        };

        let outcome = self.fetch().await;
        let markup = match &outcome {
            ScheduleOutcome::Events(events) => event_list(events, &self.plan),
            ScheduleOutcome::Empty => events_empty(),
            ScheduleOutcome::Failed(err) => {
                self.diagnostics
                    .schedule_failed(&self.source.location(), err);
                events_error()
            }
        };
        container.set_inner_html(markup.into_string());

        if let ScheduleOutcome::Events(events) = &outcome {
            self.icons.create_icons(document);
            self.reveal
                .schedule(container, self.plan.for_cards(events.len()));
            info!("rendered {} scheduled events", events.len());
        }

        Some(outcome)
    }
}
