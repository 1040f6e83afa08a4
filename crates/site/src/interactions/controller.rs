use rand::Rng;

use super::{
    parallax_offsets, smooth_scroll, ActiveNav, ClickTarget, CounterAnimation, EasterEgg, Effect,
    MobileMenu, ScrollToTop, Section, TwitterWidget, UiEvent,
};
use crate::{dom::RevealPlan, schedule::ScheduleOutcome};

/// Measured geometry the scroll handlers work from
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub sections: Vec<Section>,
    pub hero_height: f64,
    pub blobs: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleStatus {
    Loading,
    Loaded { cards: usize },
    Empty,
    Failed,
}

/// Owns every piece of interactive page state. Created once per page view.
#[derive(Debug)]
pub struct SiteController {
    layout: PageLayout,
    reveal: RevealPlan,
    menu: MobileMenu,
    scroll_top: ScrollToTop,
    nav: ActiveNav,
    counters: CounterAnimation,
    twitter: TwitterWidget,
    easter_egg: EasterEgg,
    schedule: ScheduleStatus,
}

impl SiteController {
    pub fn new(layout: PageLayout, reveal: RevealPlan) -> Self {
        Self {
            layout,
            reveal,
            menu: MobileMenu::default(),
            scroll_top: ScrollToTop::default(),
            nav: ActiveNav::default(),
            counters: CounterAnimation::default(),
            twitter: TwitterWidget::default(),
            easter_egg: EasterEgg::default(),
            schedule: ScheduleStatus::Loading,
        }
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn active_nav(&self) -> Option<&str> {
        self.nav.current()
    }

    pub fn schedule_status(&self) -> ScheduleStatus {
        self.schedule
    }

    /// Page start-up: icons, Twitter widget, initial nav highlight
    pub fn start(&mut self, twitter_script_present: bool) -> Vec<Effect> {
        let mut effects = vec![Effect::RenderIcons];
        effects.extend(self.twitter.inject(twitter_script_present));
        effects.extend(self.nav.on_scroll(&self.layout.sections, 0.0));
        effects
    }

    pub fn handle(&mut self, event: UiEvent) -> Vec<Effect> {
        self.handle_with_rng(event, &mut rand::thread_rng())
    }

    pub fn handle_with_rng<R: Rng + ?Sized>(&mut self, event: UiEvent, rng: &mut R) -> Vec<Effect> {
        match event {
            UiEvent::Click { target, at } => {
                let mut effects = self.menu.on_click(&target);
                match &target {
                    ClickTarget::Logo => {
                        effects.extend(smooth_scroll("#", &[]));
                        for effect in self.easter_egg.on_logo_click(at, rng) {
                            if !effects.contains(&effect) {
                                effects.push(effect);
                            }
                        }
                    }
                    ClickTarget::Anchor(href) | ClickTarget::MobileLink(href) => {
                        effects.extend(smooth_scroll(href, &self.section_ids()));
                    }
                    ClickTarget::ScrollToTopButton => effects.push(Effect::ScrollToTop),
                    ClickTarget::MenuButton | ClickTarget::InsideMenu | ClickTarget::Elsewhere => {}
                }
                effects
            }
            UiEvent::Scroll { offset } => {
                let mut effects = Vec::new();
                effects.extend(self.scroll_top.on_scroll(offset));
                effects.extend(self.nav.on_scroll(&self.layout.sections, offset));
                effects.extend(
                    parallax_offsets(offset, self.layout.hero_height, self.layout.blobs)
                        .into_iter()
                        .enumerate()
                        .map(|(index, y)| Effect::TranslateBlob { index, y }),
                );
                effects
            }
            UiEvent::Intersection { element, kind } => {
                if kind == super::Observed::Counters {
                    return self.counters.on_visible().into_iter().collect();
                }
                let mut effects = vec![Effect::MarkVisible { element }];
                if kind.refreshes_icons() {
                    effects.push(Effect::RenderIcons);
                }
                effects
            }
            UiEvent::TwitterScript(status) => vec![self.twitter.on_script(status)],
            UiEvent::FetchComplete(outcome) => self.on_schedule(&outcome),
        }
    }

    fn on_schedule(&mut self, outcome: &ScheduleOutcome) -> Vec<Effect> {
        self.schedule = match outcome {
            ScheduleOutcome::Events(events) => ScheduleStatus::Loaded {
                cards: events.len(),
            },
            ScheduleOutcome::Empty => ScheduleStatus::Empty,
            ScheduleOutcome::Failed(_) => ScheduleStatus::Failed,
        };
        match self.schedule {
            ScheduleStatus::Loaded { cards } => vec![
                Effect::RenderIcons,
                Effect::RevealCards(self.reveal.for_cards(cards)),
            ],
            _ => Vec::new(),
        }
    }

    fn section_ids(&self) -> Vec<&str> {
        self.layout.sections.iter().map(|s| s.id.as_str()).collect()
    }
}
