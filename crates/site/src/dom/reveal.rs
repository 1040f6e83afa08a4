use std::{sync::Arc, time::Duration};

use booo_core::{DEFAULT_REVEAL_INITIAL_DELAY_MS, DEFAULT_REVEAL_STAGGER_MS};
use log::debug;
use tokio::time::{sleep, sleep_until, Instant};

use super::Container;

/// Timing of the fade-in after a card list has been written. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealPlan {
    pub initial_delay: Duration,
    pub stagger: Duration,
    pub cards: usize,
}

impl Default for RevealPlan {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_REVEAL_INITIAL_DELAY_MS),
            Duration::from_millis(DEFAULT_REVEAL_STAGGER_MS),
        )
    }
}

impl RevealPlan {
    pub fn new(initial_delay: Duration, stagger: Duration) -> Self {
        Self {
            initial_delay,
            stagger,
            cards: 0,
        }
    }

    pub fn for_cards(self, cards: usize) -> Self {
        Self { cards, ..self }
    }

    /// Offset of card `index` from the end of the initial delay
    pub fn delay_for(&self, index: usize) -> Duration {
        self.stagger.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// `animation-delay` value written on card `index`
    pub fn css_delay(&self, index: usize) -> String {
        format!("{}ms", self.delay_for(index).as_millis())
    }
}

/// Reveals rendered cards one after another
pub trait CardReveal: Send + Sync {
    fn schedule(&self, container: Arc<dyn Container>, plan: RevealPlan);
}

/// Reveals cards on tokio timers. Must be called inside a runtime.
///
/// A schedule only applies to the content present when it was made; it
/// stops as soon as the container is written again.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimedReveal;

impl CardReveal for TimedReveal {
    fn schedule(&self, container: Arc<dyn Container>, plan: RevealPlan) {
        let generation = container.generation();
        tokio::spawn(async move {
            sleep(plan.initial_delay).await;
            let start = Instant::now();
            for index in 0..plan.cards {
                sleep_until(start + plan.delay_for(index)).await;
                if !container.reveal_card(generation, index) {
                    debug!("#{}: content replaced, reveal stopped", container.id());
                    return;
                }
            }
        });
    }
}

/// For fragments sent to a browser: the page's reveal script applies the
/// same plan once the fragment is swapped in.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClientReveal;

impl CardReveal for ClientReveal {
    fn schedule(&self, container: Arc<dyn Container>, plan: RevealPlan) {
        debug!(
            "#{}: {} cards revealed client-side, {:?} apart",
            container.id(),
            plan.cards,
            plan.stagger
        );
    }
}
