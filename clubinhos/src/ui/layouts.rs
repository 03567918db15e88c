//! Shared screen geometry: title row, body, key hints and centered popups.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

use super::theme::{HELP_BAR_HEIGHT, SCREEN_MARGIN, TITLE_HEIGHT};

/// Body rows kept before the help bar gets squeezed
const MIN_BODY_HEIGHT: u16 = 10;

/// Split a frame into (title, body, help bar)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let [title, body, help] = Layout::vertical([
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Min(MIN_BODY_HEIGHT),
        Constraint::Length(HELP_BAR_HEIGHT),
    ])
    .margin(SCREEN_MARGIN)
    .areas(area);

    (title, body, help)
}

/// Title text on the left, one cell for the throbber on the right
pub fn title_with_loading(area: Rect) -> (Rect, Rect) {
    let [text, throbber] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(1)]).areas(area);
    (text, throbber)
}

/// Popup dimensions as percentages of the area it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupSize {
    pub width: u16,
    pub height: u16,
}

impl PopupSize {
    pub const LOGIN_FORM: Self = Self {
        width: 60,
        height: 60,
    };

    pub const HELP: Self = Self {
        width: 80,
        height: 80,
    };
}

pub fn centered_popup(size: PopupSize, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(size.height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(size.width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_bar_sits_at_the_bottom_inside_the_margin() {
        let (title, body, help) = screen_layout(Rect::new(0, 0, 120, 40));

        assert_eq!(title, Rect::new(2, 2, 116, TITLE_HEIGHT));
        assert_eq!(help.height, HELP_BAR_HEIGHT);
        assert_eq!(help.bottom(), 38);
        assert_eq!(body.top(), title.bottom());
        assert_eq!(body.bottom(), help.top());
    }

    #[test]
    fn popup_is_centered() {
        let size = PopupSize {
            width: 50,
            height: 50,
        };
        assert_eq!(
            centered_popup(size, Rect::new(0, 0, 100, 40)),
            Rect::new(25, 10, 50, 20)
        );
    }
}
