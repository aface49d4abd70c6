use crate::ui::widgets;
use ratatui::prelude::*;

/// At most one popup is visible at a time; showing one hides the rest.
pub struct Popups<Key> {
    visible: Option<Key>,
}

impl<Key> Default for Popups<Key> {
    fn default() -> Self {
        Self { visible: None }
    }
}

impl<Key> Popups<Key>
where
    Key: PartialEq<Key> + Copy,
{
    pub fn show(&mut self, popup: Key) {
        self.visible = Some(popup);
    }

    pub fn toggle_visible(&mut self, popup: Key) {
        if self.is_visible(popup) {
            self.hide();
        } else {
            self.show(popup)
        }
    }

    pub fn hide(&mut self) {
        self.visible = None;
    }

    pub fn any_visible(&self) -> bool {
        self.visible.is_some()
    }

    pub fn is_visible(&self, popup: Key) -> bool {
        self.visible == Some(popup)
    }

    pub fn render(&self, f: &mut Frame, popup: Key, title: &str, text: &str) {
        if !self.is_visible(popup) {
            return;
        }

        widgets::popup::render_text(f, title, text);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[derive(strum::EnumIter, PartialEq, Eq, Copy, Clone)]
    enum Popup {
        A,
        B,
        C,
    }

    #[test]
    fn only_one_popup_is_visible_at_a_time() {
        let mut popups = Popups::<Popup>::default();

        for popup in Popup::iter() {
            assert!(!popups.is_visible(popup));
        }

        for popup in Popup::iter() {
            popups.show(popup);
            assert!(popups.is_visible(popup));

            for other in Popup::iter().filter(|&other| other != popup) {
                assert!(!popups.is_visible(other));
            }
        }

        popups.hide();

        for popup in Popup::iter() {
            assert!(!popups.is_visible(popup));
        }
    }

    #[test]
    fn toggling_twice_returns_to_hidden() {
        let mut popups = Popups::<Popup>::default();

        popups.toggle_visible(Popup::A);
        assert!(popups.is_visible(Popup::A));

        popups.toggle_visible(Popup::A);
        assert!(!popups.any_visible());
    }
}
