use super::Effect;

const DURATION_MS: f64 = 2000.0;
const FRAME_MS: f64 = 16.0;

/// The statistics counters animate once, on first sight
#[derive(Debug, Default, Clone, Copy)]
pub struct CounterAnimation {
    started: bool,
}

impl CounterAnimation {
    pub fn on_visible(&mut self) -> Option<Effect> {
        if self.started {
            return None;
        }
        self.started = true;
        Some(Effect::AnimateCounters)
    }
}

/// Text shown on each animation frame for a counter counting up to `target`
pub fn counter_frames(target: u32) -> Vec<String> {
    let target = f64::from(target);
    let increment = target / (DURATION_MS / FRAME_MS);
    let mut frames = Vec::new();
    let mut current = increment;
    while current < target {
        frames.push(format!("{}", current.floor()));
        current += increment;
    }
    frames.push(format!("{}+", target));
    frames
}
