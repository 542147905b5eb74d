// keys.rs - Keyboard bindings for the controller

use conway::{Direction, Event};
use egui::Key;

/// Help lines shown in the status overlay.
pub const HELP: &[&str] = &[
    "space : birth/kill",
    "s : start/stop",
    "n : next",
    "r : random",
    "c : clear",
    "1-7 : stamp pattern",
    "esc : quit",
];

/// Fresh key presses only; releases and auto-repeat are dropped.
pub fn event_for_input(event: &egui::Event) -> Option<Event> {
    match event {
        egui::Event::Key { key, pressed: true, repeat: false, .. } => event_for_key(*key),
        _ => None,
    }
}

pub fn event_for_key(key: Key) -> Option<Event> {
    let event = match key {
        Key::Escape => Event::Quit,
        Key::ArrowLeft => Event::MoveCursor(Direction::Left),
        Key::ArrowRight => Event::MoveCursor(Direction::Right),
        Key::ArrowUp => Event::MoveCursor(Direction::Up),
        Key::ArrowDown => Event::MoveCursor(Direction::Down),
        Key::Space => Event::ToggleCellAtCursor,
        Key::S => Event::ToggleRun,
        Key::N => Event::SingleStep,
        Key::C => Event::Clear,
        Key::R => Event::Randomize,
        Key::Num1 => Event::StampPattern(0),
        Key::Num2 => Event::StampPattern(1),
        Key::Num3 => Event::StampPattern(2),
        Key::Num4 => Event::StampPattern(3),
        Key::Num5 => Event::StampPattern(4),
        Key::Num6 => Event::StampPattern(5),
        Key::Num7 => Event::StampPattern(6),
        _ => return None,
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::patterns::PATTERNS;
    use egui::Modifiers;

    fn key_event(key: Key, pressed: bool, repeat: bool) -> egui::Event {
        egui::Event::Key { key, pressed, repeat, modifiers: Modifiers::NONE }
    }

    #[test]
    fn held_keys_fire_once() {
        assert_eq!(event_for_input(&key_event(Key::S, true, false)), Some(Event::ToggleRun));
        assert_eq!(event_for_input(&key_event(Key::S, true, true)), None);
        assert_eq!(event_for_input(&key_event(Key::Space, true, true)), None);
        assert_eq!(event_for_input(&key_event(Key::S, false, false)), None);
    }

    #[test]
    fn bindings() {
        assert_eq!(event_for_key(Key::S), Some(Event::ToggleRun));
        assert_eq!(event_for_key(Key::Escape), Some(Event::Quit));
        assert_eq!(event_for_key(Key::ArrowUp), Some(Event::MoveCursor(Direction::Up)));
        assert_eq!(event_for_key(Key::Q), None);
    }

    #[test]
    fn every_digit_names_a_pattern() {
        for key in [Key::Num1, Key::Num2, Key::Num3, Key::Num4, Key::Num5, Key::Num6, Key::Num7] {
            match event_for_key(key) {
                Some(Event::StampPattern(i)) => assert!(i < PATTERNS.len()),
                other => panic!("{key:?} mapped to {other:?}"),
            }
        }
    }
}
