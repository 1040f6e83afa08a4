use std::time::Duration;

use super::Effect;

pub const TWITTER_WIDGET_SRC: &str = "https://platform.twitter.com/widgets.js";

/// The loading message stays up this long after the widget script loads
const HIDE_LOADING_AFTER: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStatus {
    Loaded,
    Failed,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TwitterWidget {
    injected: bool,
}

impl TwitterWidget {
    /// Injects the widget script unless it is already on the page
    pub fn inject(&mut self, already_present: bool) -> Option<Effect> {
        if self.injected || already_present {
            self.injected = true;
            return None;
        }
        self.injected = true;
        Some(Effect::InjectScript {
            src: TWITTER_WIDGET_SRC.to_string(),
        })
    }

    pub fn on_script(&self, status: ScriptStatus) -> Effect {
        match status {
            ScriptStatus::Loaded => Effect::HideTwitterLoading {
                after: HIDE_LOADING_AFTER,
            },
            ScriptStatus::Failed => Effect::ShowTwitterError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_is_injected_once() {
        let mut widget = TwitterWidget::default();
        assert!(matches!(widget.inject(false), Some(Effect::InjectScript { .. })));
        assert_eq!(widget.inject(false), None);
    }

    #[test]
    fn existing_script_is_not_duplicated() {
        let mut widget = TwitterWidget::default();
        assert_eq!(widget.inject(true), None);
    }

    #[test]
    fn load_result_drives_loading_message() {
        let widget = TwitterWidget::default();
        assert_eq!(
            widget.on_script(ScriptStatus::Loaded),
            Effect::HideTwitterLoading {
                after: Duration::from_secs(1)
            }
        );
        assert_eq!(widget.on_script(ScriptStatus::Failed), Effect::ShowTwitterError);
    }
}
