//! Pointer input: platform-neutral events and the click state machine.

use std::collections::VecDeque;

mod window_events;

pub use window_events::WindowEvents;

/// Pointer buttons the tracker distinguishes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Other,
}

/// One platform event, already translated out of the windowing library
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Window close or interrupt request
    Quit,
    PointerDown { button: PointerButton, x: f32, y: f32 },
    PointerUp { button: PointerButton, x: f32, y: f32 },
    PointerMoved { x: f32, y: f32 },
    /// Anything else the platform reports; ignored by the core
    Other,
}

/// Axis-aligned rectangle in window pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Point containment, edges included
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x
            && x <= self.x + self.width
            && y >= self.y
            && y <= self.y + self.height
    }
}

/// Press state of a tracked button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Up,
    /// Went down during the current batch and nobody consumed the click yet
    Pressed,
    /// Down, but the press has already been reported or belongs to an older batch
    Held,
}

/// InputTracker turns a stream of `InputEvent`s into edge-triggered clicks.
///
/// Clicks are consume-on-read: every physical press is returned by
/// `take_left_click` exactly once, in arrival order, even when several
/// presses and releases land in the same batch. `begin_batch` marks the
/// start of a polling cycle and drops presses nobody read.
#[derive(Debug, Default)]
pub struct InputTracker {
    left: ButtonState,
    pending: VecDeque<(f32, f32)>,
    x: f32,
    y: f32,
    quit: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume exactly one event
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { button: PointerButton::Left, x, y } => {
                self.left = ButtonState::Pressed;
                self.pending.push_back((x, y));
                self.x = x;
                self.y = y;
            }
            InputEvent::PointerUp { button: PointerButton::Left, .. } => {
                self.left = ButtonState::Up;
            }
            InputEvent::Quit => self.quit = true,
            _ => {}
        }
    }

    /// Start a new polling cycle. Unread presses from the previous one expire.
    pub fn begin_batch(&mut self) {
        self.pending.clear();
        if self.left == ButtonState::Pressed {
            self.left = ButtonState::Held;
        }
    }

    /// True once for each press-edge seen in the current batch
    pub fn left_clicked(&mut self) -> bool {
        self.take_left_click().is_some()
    }

    /// Consume the oldest unread click, returning where it happened.
    /// `x`, `y` and `inside` then refer to this click.
    pub fn take_left_click(&mut self) -> Option<(f32, f32)> {
        let (x, y) = self.pending.pop_front()?;
        self.x = x;
        self.y = y;
        if self.pending.is_empty() && self.left == ButtonState::Pressed {
            self.left = ButtonState::Held;
        }
        Some((x, y))
    }

    pub fn left_state(&self) -> ButtonState {
        self.left
    }

    /// X coordinate of the last recorded or taken press
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Y coordinate of the last recorded or taken press
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Hit-test the last recorded or taken press against `rect`
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Whether a quit event has been seen
    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: Rect = Rect::new(100.0, 100.0, 200.0, 100.0);

    fn down(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown { button: PointerButton::Left, x, y }
    }

    fn up(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerUp { button: PointerButton::Left, x, y }
    }

    #[test]
    fn test_click_reported_once() {
        let mut tracker = InputTracker::new();
        tracker.handle_event(&down(10.0, 20.0));
        assert!(tracker.left_clicked());
        assert!(!tracker.left_clicked());
        assert_eq!(tracker.left_state(), ButtonState::Held);
    }

    #[test]
    fn test_press_and_release_in_one_batch_still_clicks() {
        let mut tracker = InputTracker::new();
        tracker.begin_batch();
        tracker.handle_event(&down(10.0, 20.0));
        tracker.handle_event(&up(12.0, 22.0));
        assert_eq!(tracker.left_state(), ButtonState::Up);
        assert_eq!(tracker.take_left_click(), Some((10.0, 20.0)));
        assert!(!tracker.left_clicked());
    }

    #[test]
    fn test_unread_press_expires_with_batch() {
        let mut tracker = InputTracker::new();
        tracker.handle_event(&down(10.0, 20.0));
        tracker.begin_batch();
        assert!(!tracker.left_clicked());
        assert_eq!(tracker.left_state(), ButtonState::Held);
    }

    #[test]
    fn test_down_while_held_is_a_new_press() {
        let mut tracker = InputTracker::new();
        tracker.handle_event(&down(1.0, 1.0));
        assert!(tracker.left_clicked());
        tracker.handle_event(&down(5.0, 6.0));
        assert_eq!(tracker.left_state(), ButtonState::Pressed);
        assert!(tracker.left_clicked());
        assert_eq!((tracker.x(), tracker.y()), (5.0, 6.0));
    }

    #[test]
    fn test_other_events_change_nothing() {
        let mut tracker = InputTracker::new();
        tracker.handle_event(&InputEvent::PointerMoved { x: 3.0, y: 4.0 });
        tracker.handle_event(&InputEvent::Other);
        tracker.handle_event(&InputEvent::PointerDown { button: PointerButton::Right, x: 3.0, y: 4.0 });
        assert_eq!(tracker.left_state(), ButtonState::Up);
        assert!(!tracker.left_clicked());
        assert_eq!((tracker.x(), tracker.y()), (0.0, 0.0));
        assert!(!tracker.quit_requested());
    }

    #[test]
    fn test_quit_is_recorded() {
        let mut tracker = InputTracker::new();
        tracker.handle_event(&InputEvent::Quit);
        assert!(tracker.quit_requested());
    }

    #[test]
    fn test_inside_button() {
        let mut tracker = InputTracker::new();
        tracker.handle_event(&down(150.0, 120.0));
        assert!(tracker.inside(&BUTTON));

        tracker.handle_event(&down(50.0, 50.0));
        assert!(!tracker.inside(&BUTTON));
    }

    #[test]
    fn test_every_press_in_one_batch_is_delivered() {
        let mut tracker = InputTracker::new();
        tracker.begin_batch();
        tracker.handle_event(&down(150.0, 120.0));
        tracker.handle_event(&up(150.0, 120.0));
        tracker.handle_event(&down(20.0, 20.0));
        tracker.handle_event(&up(20.0, 20.0));

        let mut delivered = Vec::new();
        while let Some(at) = tracker.take_left_click() {
            delivered.push((at, tracker.inside(&BUTTON)));
        }
        assert_eq!(delivered, vec![((150.0, 120.0), true), ((20.0, 20.0), false)]);
        assert!(!tracker.left_clicked());
    }

    #[test]
    fn test_rect_edges_are_inclusive() {
        assert!(BUTTON.contains(100.0, 100.0));
        assert!(BUTTON.contains(300.0, 200.0));
        assert!(!BUTTON.contains(300.5, 150.0));
        assert!(!BUTTON.contains(150.0, 99.9));
    }
}
