use std::time::{Duration, Instant};

use macroquad::prelude::*;
use tracing::{debug, info};

use super::{EventSource, PauseOutcome, Renderer, SurfaceLayout};
use crate::domain::Grid as CellGrid;
use crate::error::RenderError;
use crate::input::{InputEvent, WindowEvents};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 150.0 / 255.0, 1.0); // Bright green
const DEAD_COLOR: Color = Color::new(15.0 / 255.0, 15.0 / 255.0, 15.0 / 255.0, 1.0); // Very dark gray

/// Window backend built on macroquad.
///
/// Each frame is rasterized into a one-pixel-per-cell image, uploaded to a
/// nearest-filtered texture and drawn scaled by the cell size. The texture
/// is the display surface, so pauses can keep presenting it without holding
/// on to the grid.
pub struct GraphicsRenderer {
    layout: SurfaceLayout,
    image: Image,
    texture: Texture2D,
    events: WindowEvents,
    pending: Vec<InputEvent>,
}

impl GraphicsRenderer {
    /// Acquire the window surface. Fails if the layout does not fit the
    /// window macroquad actually opened.
    pub fn acquire(layout: SurfaceLayout) -> Result<Self, RenderError> {
        let (actual_width, actual_height) = (screen_width(), screen_height());
        let (needed_width, needed_height) = layout.grid_extent();
        if actual_width < needed_width || actual_height < needed_height {
            return Err(RenderError::init(
                "graphics",
                format!(
                    "window is {actual_width}x{actual_height}px, grid needs {needed_width}x{needed_height}px"
                ),
            ));
        }

        let image = Image::gen_image_color(layout.columns as u16, layout.rows as u16, DEAD_COLOR);
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);
        let events = WindowEvents::subscribe();

        info!(
            rows = layout.rows,
            columns = layout.columns,
            cell_size = layout.cell_size,
            "graphics renderer ready"
        );
        Ok(Self {
            layout,
            image,
            texture,
            events,
            pending: Vec::new(),
        })
    }

    fn rasterize(&mut self, grid: &CellGrid) {
        assert_eq!(
            grid.dimensions(),
            (self.layout.rows, self.layout.columns),
            "grid does not match the surface layout"
        );
        for (row, column, cell) in grid.iter_cells() {
            let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
            self.image.set_pixel(column as u32, row as u32, color);
        }
        self.texture.update(&self.image);
    }

    fn present(&self) {
        let (width, height) = self.layout.grid_extent();
        clear_background(BLACK);
        draw_texture_ex(
            &self.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(width, height)),
                ..Default::default()
            },
        );
    }

    fn quit_pending(&self) -> bool {
        self.pending.iter().any(|event| matches!(event, InputEvent::Quit))
    }
}

impl Renderer for GraphicsRenderer {
    async fn render(&mut self, grid: &CellGrid) -> Result<(), RenderError> {
        self.rasterize(grid);
        self.present();
        next_frame().await;
        self.events.drain_into(&mut self.pending);
        Ok(())
    }

    async fn pause(&mut self, duration: Duration) -> PauseOutcome {
        let deadline = Instant::now() + duration;
        loop {
            self.events.drain_into(&mut self.pending);
            if self.quit_pending() {
                return PauseOutcome::Quit;
            }
            if Instant::now() >= deadline {
                return PauseOutcome::Continue;
            }
            self.present();
            next_frame().await;
        }
    }
}

impl EventSource for GraphicsRenderer {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.events.drain_into(&mut self.pending);
        std::mem::take(&mut self.pending)
    }
}

/// Releases the image and texture. macroquad has no call to undo
/// `prevent_quit` or unregister an input subscriber, so for the rest of the
/// process window close stays intercepted and the subscriber slot stays
/// allocated. The binary exits right after the renderer is dropped.
impl Drop for GraphicsRenderer {
    fn drop(&mut self) {
        debug!("graphics renderer released");
    }
}
