use super::Effect;

/// Scroll offset past which the scroll-to-top button shows
const SCROLL_TOP_THRESHOLD: f64 = 300.0;
/// Sections count as current this far before their top edge
const NAV_OFFSET: f64 = 100.0;

/// Position of a `section[id]` on the page
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: &str, top: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            top,
            height,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ScrollToTop {
    visible: bool,
}

impl ScrollToTop {
    /// Emits only when visibility changes
    pub fn on_scroll(&mut self, offset: f64) -> Option<Effect> {
        let visible = offset > SCROLL_TOP_THRESHOLD;
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(Effect::SetScrollTopVisible(visible))
    }
}

#[derive(Debug, Default, Clone)]
pub struct ActiveNav {
    current: Option<String>,
}

impl ActiveNav {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Emits only when the active section changes
    pub fn on_scroll(&mut self, sections: &[Section], offset: f64) -> Option<Effect> {
        let active = active_section(sections, offset).map(str::to_string);
        if active == self.current {
            return None;
        }
        self.current = active.clone();
        Some(Effect::SetActiveNav(active))
    }
}

/// Last section whose shifted range contains `offset`
pub fn active_section(sections: &[Section], offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.top - NAV_OFFSET;
            offset >= top && offset < top + s.height
        })
        .map(|s| s.id.as_str())
}

/// Vertical blob offsets while the hero is on screen; empty past it
pub fn parallax_offsets(scrolled: f64, hero_height: f64, blobs: usize) -> Vec<f64> {
    if scrolled >= hero_height {
        return Vec::new();
    }
    (0..blobs)
        .map(|index| {
            let speed = 0.3 + index as f64 * 0.1;
            -(scrolled * speed)
        })
        .collect()
}

/// Effects of following an in-page anchor
pub fn smooth_scroll(href: &str, known_ids: &[&str]) -> Vec<Effect> {
    if href == "#" {
        return vec![Effect::PreventDefault];
    }
    match href.strip_prefix('#') {
        Some(id) if known_ids.contains(&id) => vec![
            Effect::PreventDefault,
            Effect::ScrollIntoView { id: id.to_string() },
            Effect::PushHistory {
                href: href.to_string(),
            },
        ],
        _ => Vec::new(),
    }
}
