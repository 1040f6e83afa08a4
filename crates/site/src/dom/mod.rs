//! Minimal document model the event list renders into.
//!
//! The server renders fragments into an in-memory [`Page`]; tests inspect the
//! same structures instead of a live browser.

mod icons;
mod reveal;

use std::sync::{Arc, RwLock};

pub use icons::{IconRenderer, InlineIcons};
pub use reveal::{CardReveal, ClientReveal, RevealPlan, TimedReveal};

/// An element whose children can be replaced wholesale
pub trait Container: Send + Sync {
    fn id(&self) -> &str;
    fn inner_html(&self) -> String;
    /// Replaces every child in one write. Concurrent writers: last one wins.
    fn set_inner_html(&self, html: String);
    /// Bumped by every content write
    fn generation(&self) -> u64;
    /// Reveals card `index` of the content written at `generation`.
    /// Returns `false`, revealing nothing, once that content is replaced.
    fn reveal_card(&self, generation: u64, index: usize) -> bool;
}

/// Element lookup by id
pub trait Document: Send + Sync {
    fn get_element_by_id(&self, id: &str) -> Option<Arc<dyn Container>>;
    fn elements(&self) -> Vec<Arc<dyn Container>>;
}

#[derive(Debug, Default)]
struct ContainerState {
    html: String,
    generation: u64,
    revealed: Vec<usize>,
}

#[derive(Debug)]
pub struct HtmlContainer {
    id: String,
    state: RwLock<ContainerState>,
}

impl HtmlContainer {
    pub fn new(id: &str, html: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            state: RwLock::new(ContainerState {
                html: html.into(),
                generation: 0,
                revealed: Vec::new(),
            }),
        }
    }

    /// Card indices revealed since the last content write, in reveal order
    pub fn revealed_cards(&self) -> Vec<usize> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .revealed
            .clone()
    }
}

impl Container for HtmlContainer {
    fn id(&self) -> &str {
        &self.id
    }

    fn inner_html(&self) -> String {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .html
            .clone()
    }

    fn set_inner_html(&self, html: String) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.html = html;
        state.generation = state.generation.wrapping_add(1);
        state.revealed.clear();
    }

    fn generation(&self) -> u64 {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .generation
    }

    fn reveal_card(&self, generation: u64, index: usize) -> bool {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if state.generation != generation {
            return false;
        }
        if !state.revealed.contains(&index) {
            state.revealed.push(index);
        }
        true
    }
}

/// A page made of independently addressable containers
#[derive(Debug, Default)]
pub struct Page {
    elements: Vec<Arc<HtmlContainer>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, id: &str, html: impl Into<String>) -> Self {
        self.elements.push(Arc::new(HtmlContainer::new(id, html)));
        self
    }

    pub fn element(&self, id: &str) -> Option<Arc<HtmlContainer>> {
        self.elements.iter().find(|e| e.id == id).cloned()
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.element(id).map(|e| e.inner_html())
    }
}

impl Document for Page {
    fn get_element_by_id(&self, id: &str) -> Option<Arc<dyn Container>> {
        self.element(id).map(|e| e as Arc<dyn Container>)
    }

    fn elements(&self) -> Vec<Arc<dyn Container>> {
        self.elements
            .iter()
            .map(|e| e.clone() as Arc<dyn Container>)
            .collect()
    }
}
