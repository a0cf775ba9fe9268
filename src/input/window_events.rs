use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::{EventHandler, MouseButton};
use macroquad::prelude::{is_quit_requested, prevent_quit};

use super::{InputEvent, PointerButton};

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Left,
            MouseButton::Right => PointerButton::Right,
            MouseButton::Middle => PointerButton::Middle,
            MouseButton::Unknown => PointerButton::Other,
        }
    }
}

/// Raw window event feed.
///
/// Registers a macroquad input subscriber so every mouse event since the
/// last drain is replayed in order, and takes over window-close handling
/// so a close request arrives as `InputEvent::Quit` instead of ending the
/// process.
pub struct WindowEvents {
    subscriber: usize,
}

impl WindowEvents {
    pub fn subscribe() -> Self {
        prevent_quit();
        Self {
            subscriber: register_input_subscriber(),
        }
    }

    /// Append everything received since the previous call
    pub fn drain_into(&mut self, events: &mut Vec<InputEvent>) {
        repeat_all_miniquad_input(&mut Collector { events: &mut *events }, self.subscriber);
        if is_quit_requested() {
            events.push(InputEvent::Quit);
        }
    }
}

struct Collector<'a> {
    events: &'a mut Vec<InputEvent>,
}

impl EventHandler for Collector<'_> {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn mouse_motion_event(&mut self, x: f32, y: f32) {
        self.events.push(InputEvent::PointerMoved { x, y });
    }

    fn mouse_button_down_event(&mut self, button: MouseButton, x: f32, y: f32) {
        self.events.push(InputEvent::PointerDown { button: button.into(), x, y });
    }

    fn mouse_button_up_event(&mut self, button: MouseButton, x: f32, y: f32) {
        self.events.push(InputEvent::PointerUp { button: button.into(), x, y });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_buttons_map_to_pointer_buttons() {
        assert_eq!(PointerButton::from(MouseButton::Left), PointerButton::Left);
        assert_eq!(PointerButton::from(MouseButton::Right), PointerButton::Right);
        assert_eq!(PointerButton::from(MouseButton::Middle), PointerButton::Middle);
        assert_eq!(PointerButton::from(MouseButton::Unknown), PointerButton::Other);
    }

    #[test]
    fn test_collector_translates_in_order() {
        let mut events = Vec::new();
        let mut collector = Collector { events: &mut events };
        collector.mouse_motion_event(10.0, 20.0);
        collector.mouse_button_down_event(MouseButton::Left, 150.0, 120.0);
        collector.mouse_button_up_event(MouseButton::Left, 151.0, 121.0);
        collector.mouse_button_down_event(MouseButton::Unknown, 5.0, 6.0);

        assert_eq!(
            events,
            vec![
                InputEvent::PointerMoved { x: 10.0, y: 20.0 },
                InputEvent::PointerDown { button: PointerButton::Left, x: 150.0, y: 120.0 },
                InputEvent::PointerUp { button: PointerButton::Left, x: 151.0, y: 121.0 },
                InputEvent::PointerDown { button: PointerButton::Other, x: 5.0, y: 6.0 },
            ]
        );
    }

    #[test]
    fn test_collector_appends_to_existing_events() {
        let mut events = vec![InputEvent::Quit];
        Collector { events: &mut events }.mouse_button_up_event(MouseButton::Right, 1.0, 2.0);
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            InputEvent::PointerUp { button: PointerButton::Right, x: 1.0, y: 2.0 }
        );
    }
}
