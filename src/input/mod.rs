use drag_scroll::PointerKind;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{Key, NamedKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    StepForward,
    StepBackward,
    ScrollToStart,
    ScrollToEnd,
    ReloadConfig,
    None,
}

pub fn handle_key_event(event: &KeyEvent) -> InputAction {
    if event.state != ElementState::Pressed {
        return InputAction::None;
    }
    match &event.logical_key {
        Key::Named(named) => named_key_action(named),
        Key::Character(s) if s.eq_ignore_ascii_case("r") => InputAction::ReloadConfig,
        _ => InputAction::None,
    }
}

fn named_key_action(key: &NamedKey) -> InputAction {
    match key {
        NamedKey::ArrowRight | NamedKey::ArrowDown | NamedKey::PageDown => InputAction::StepForward,
        NamedKey::ArrowLeft | NamedKey::ArrowUp | NamedKey::PageUp => InputAction::StepBackward,
        NamedKey::Home => InputAction::ScrollToStart,
        NamedKey::End => InputAction::ScrollToEnd,
        _ => InputAction::None,
    }
}

/// Only the primary button drags.
pub fn pointer_kind(state: ElementState, button: MouseButton) -> Option<PointerKind> {
    if button != MouseButton::Left {
        return None;
    }
    Some(match state {
        ElementState::Pressed => PointerKind::Down,
        ElementState::Released => PointerKind::Up,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_step_both_ways() {
        assert_eq!(named_key_action(&NamedKey::ArrowRight), InputAction::StepForward);
        assert_eq!(named_key_action(&NamedKey::ArrowDown), InputAction::StepForward);
        assert_eq!(named_key_action(&NamedKey::ArrowLeft), InputAction::StepBackward);
        assert_eq!(named_key_action(&NamedKey::PageUp), InputAction::StepBackward);
    }

    #[test]
    fn home_and_end() {
        assert_eq!(named_key_action(&NamedKey::Home), InputAction::ScrollToStart);
        assert_eq!(named_key_action(&NamedKey::End), InputAction::ScrollToEnd);
        assert_eq!(named_key_action(&NamedKey::Tab), InputAction::None);
    }

    #[test]
    fn only_left_button_drags() {
        assert_eq!(pointer_kind(ElementState::Pressed, MouseButton::Left), Some(PointerKind::Down));
        assert_eq!(pointer_kind(ElementState::Released, MouseButton::Left), Some(PointerKind::Up));
        assert_eq!(pointer_kind(ElementState::Pressed, MouseButton::Right), None);
    }
}
