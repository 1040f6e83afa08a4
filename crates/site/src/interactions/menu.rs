use std::time::Duration;

use super::{ClickTarget, Effect};

const FADE_IN_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn on_click(&mut self, target: &ClickTarget) -> Vec<Effect> {
        match target {
            ClickTarget::MenuButton => self.toggle(),
            ClickTarget::InsideMenu => Vec::new(),
            // links and outside clicks only ever close
            _ if self.open => self.toggle(),
            _ => Vec::new(),
        }
    }

    fn toggle(&mut self) -> Vec<Effect> {
        self.open = !self.open;
        if self.open {
            vec![
                Effect::ShowMobileMenu,
                Effect::FadeInMobileMenu {
                    after: FADE_IN_DELAY,
                },
            ]
        } else {
            vec![Effect::HideMobileMenu]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_toggles() {
        let mut menu = MobileMenu::default();

        let effects = menu.on_click(&ClickTarget::MenuButton);
        assert!(menu.is_open());
        assert_eq!(effects[0], Effect::ShowMobileMenu);

        let effects = menu.on_click(&ClickTarget::MenuButton);
        assert!(!menu.is_open());
        assert_eq!(effects, vec![Effect::HideMobileMenu]);
    }

    #[test]
    fn link_and_outside_clicks_close_an_open_menu() {
        for target in [
            ClickTarget::MobileLink("#schedule".to_string()),
            ClickTarget::Elsewhere,
            ClickTarget::Logo,
        ] {
            let mut menu = MobileMenu::default();
            menu.on_click(&ClickTarget::MenuButton);

            assert_eq!(menu.on_click(&target), vec![Effect::HideMobileMenu]);
            assert!(!menu.is_open());
        }
    }

    #[test]
    fn clicks_never_open_a_closed_menu_except_the_button() {
        let mut menu = MobileMenu::default();
        assert!(menu.on_click(&ClickTarget::Elsewhere).is_empty());
        assert!(menu.on_click(&ClickTarget::MobileLink("#faq".to_string())).is_empty());
        assert!(!menu.is_open());
    }

    #[test]
    fn clicks_inside_the_menu_keep_it_open() {
        let mut menu = MobileMenu::default();
        menu.on_click(&ClickTarget::MenuButton);
        assert!(menu.on_click(&ClickTarget::InsideMenu).is_empty());
        assert!(menu.is_open());
    }
}
