//! Browser-independent model of the page's interactive behaviour.
//!
//! A host (browser shim, test) feeds [`UiEvent`]s into a [`SiteController`]
//! and applies the returned [`Effect`]s. All state lives in the controller.

mod controller;
mod counter;
mod easter_egg;
mod menu;
mod scroll;
mod twitter;

use std::time::{Duration, Instant};

pub use controller::{PageLayout, ScheduleStatus, SiteController};
pub use counter::{counter_frames, CounterAnimation};
pub use easter_egg::{ConfettiPiece, EasterEgg, CONFETTI_COLORS};
pub use menu::MobileMenu;
pub use scroll::{active_section, parallax_offsets, smooth_scroll, ActiveNav, ScrollToTop, Section};
pub use twitter::{ScriptStatus, TwitterWidget, TWITTER_WIDGET_SRC};

use crate::{dom::RevealPlan, schedule::ScheduleOutcome};

/// What was clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    MenuButton,
    /// A link inside the mobile menu, with its href
    MobileLink(String),
    /// Anywhere else inside the open mobile menu
    InsideMenu,
    /// The brand link in the navigation bar (`href="#"`)
    Logo,
    ScrollToTopButton,
    /// An in-page anchor (`href="#..."`) outside the mobile menu
    Anchor(String),
    Elsewhere,
}

/// Element kinds observed for entering the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observed {
    SectionHeader,
    FeatureCard,
    ScheduleCard,
    FaqItem,
    GameCard,
    Testimonial,
    Counters,
}

impl Observed {
    /// Whether revealing this kind re-renders icons
    fn refreshes_icons(self) -> bool {
        !matches!(self, Observed::Testimonial | Observed::Counters)
    }
}

#[derive(Debug)]
pub enum UiEvent {
    Click { target: ClickTarget, at: Instant },
    Scroll { offset: f64 },
    Intersection { element: String, kind: Observed },
    TwitterScript(ScriptStatus),
    FetchComplete(ScheduleOutcome),
}

/// Side effects for the host to apply, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PreventDefault,
    ShowMobileMenu,
    HideMobileMenu,
    /// Fade-in class added shortly after the menu opens
    FadeInMobileMenu { after: Duration },
    SetScrollTopVisible(bool),
    ScrollToTop,
    ScrollIntoView { id: String },
    PushHistory { href: String },
    /// `None` clears every nav link
    SetActiveNav(Option<String>),
    TranslateBlob { index: usize, y: f64 },
    MarkVisible { element: String },
    RenderIcons,
    AnimateCounters,
    InjectScript { src: String },
    HideTwitterLoading { after: Duration },
    ShowTwitterError,
    Confetti(Vec<ConfettiPiece>),
    ShowCongratulations,
    RevealCards(RevealPlan),
}
