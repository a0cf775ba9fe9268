//! Display backends. The driver only talks to `Renderer` and `EventSource`,
//! so the text and window backends are interchangeable.

mod graphics;
mod layout;
mod text;

pub use graphics::GraphicsRenderer;
pub use layout::SurfaceLayout;
pub use text::{Terminal, TextRenderer, terminal_grid};

use std::time::Duration;

use crate::domain::Grid;
use crate::error::RenderError;
use crate::input::InputEvent;

/// What the driver should do once a pause ends
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseOutcome {
    Continue,
    Quit,
}

/// Something that can show a grid and pace the loop
#[allow(async_fn_in_trait)]
pub trait Renderer {
    /// Present `grid` as one complete frame
    async fn render(&mut self, grid: &Grid) -> Result<(), RenderError>;

    /// Wait roughly `duration`, returning early with `Quit` if a
    /// close request shows up meanwhile
    async fn pause(&mut self, duration: Duration) -> PauseOutcome;
}

/// Source of platform events for the input tracker
pub trait EventSource {
    /// Every event received since the previous call, oldest first
    fn poll_events(&mut self) -> Vec<InputEvent>;
}
