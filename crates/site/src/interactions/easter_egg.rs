use std::time::{Duration, Instant};

use rand::Rng;

use super::Effect;

const CLICKS_TO_TRIGGER: u32 = 5;
const STREAK_WINDOW: Duration = Duration::from_secs(2);
const COOLDOWN: Duration = Duration::from_secs(5);
const CONFETTI_PIECES: usize = 50;
const CONFETTI_INTERVAL: Duration = Duration::from_millis(30);

pub const CONFETTI_COLORS: [&str; 4] = ["#ef4444", "#3b82f6", "#10b981", "#eab308"];

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub delay: Duration,
    pub color: &'static str,
    /// Horizontal start position as a fraction of the viewport width
    pub left: f64,
    pub rotation_deg: f64,
}

/// Logo click counter: five quick clicks set off confetti
#[derive(Debug, Default, Clone)]
pub struct EasterEgg {
    clicks: u32,
    streak_started: Option<Instant>,
    triggered_at: Option<Instant>,
}

impl EasterEgg {
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn on_logo_click<R: Rng + ?Sized>(&mut self, at: Instant, rng: &mut R) -> Vec<Effect> {
        self.expire(at);

        if self.clicks == 0 {
            self.streak_started = Some(at);
        }
        self.clicks += 1;

        if self.clicks != CLICKS_TO_TRIGGER {
            return Vec::new();
        }

        self.triggered_at = Some(at);
        vec![
            Effect::PreventDefault,
            Effect::Confetti(confetti(rng)),
            Effect::ShowCongratulations,
        ]
    }

    fn expire(&mut self, now: Instant) {
        let expired = match (self.triggered_at, self.streak_started) {
            (Some(triggered), _) => now.saturating_duration_since(triggered) >= COOLDOWN,
            (None, Some(started)) => now.saturating_duration_since(started) >= STREAK_WINDOW,
            (None, None) => false,
        };
        if expired {
            *self = Self::default();
        }
    }
}

fn confetti<R: Rng + ?Sized>(rng: &mut R) -> Vec<ConfettiPiece> {
    (0..CONFETTI_PIECES)
        .map(|i| ConfettiPiece {
            delay: CONFETTI_INTERVAL * i as u32,
            color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
            left: rng.gen::<f64>(),
            rotation_deg: rng.gen_range(0.0..360.0),
        })
        .collect()
}
