mod config;
mod surface;

pub use config::{
    ClickHandler, DriverConfig, DEFAULT_CELL_SIZE, DEFAULT_COLORS, DEFAULT_COLOR_EMPTY,
    DEFAULT_SPEED,
};
pub use surface::{Color, Surface};

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::Grid;
use crate::error::LifeError;

/// Driver runs one [`Grid`] against a pixel surface: it advances the
/// simulation on a fixed interval and repaints only the cells each
/// generation changed.
///
/// The driver never blits a full frame on its own. Hosts that mutate
/// the grid out of band (clicks, stamps, randomize, clear) call
/// [`redraw`](Self::redraw) to resynchronize the surface.
pub struct Driver {
    /// The simulation being driven. Public so hosts and click handlers
    /// share a single mutation path.
    pub grid: Grid,
    config: DriverConfig,
    running: bool,
    accumulator: Duration,
    generation: u64,
    palette_rng: StdRng,
}

impl Driver {
    /// Size a grid to `surface` and wrap it in a driver.
    ///
    /// Grid dimensions are `floor(pixels / cell_size)` per axis. A
    /// surface or cell size that cannot host at least one full cell is
    /// rejected.
    pub fn new(surface: &dyn Surface, config: DriverConfig) -> Result<Self, LifeError> {
        let (width_px, height_px) = surface.size_px();
        let cell = config.cell_size;
        let (width, height) = if cell == 0 {
            (0, 0)
        } else {
            ((width_px / cell) as usize, (height_px / cell) as usize)
        };
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidHostSurface {
                width_px,
                height_px,
                cell_size: cell,
            });
        }

        let palette_rng = match config.palette_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        log::info!("driver created: {width}x{height} cells at {cell}px");
        Ok(Self {
            grid: Grid::new(width, height)?,
            config,
            running: false,
            accumulator: Duration::ZERO,
            generation: 0,
            palette_rng,
        })
    }

    /// Generations advanced since creation
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the periodic schedule is active
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Interval between generations
    pub const fn speed(&self) -> Duration {
        self.config.speed
    }

    /// Pixel edge length per cell
    pub const fn cell_size(&self) -> u32 {
        self.config.cell_size
    }

    /// Begin advancing on the configured interval; no-op while running
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            log::debug!("driver started");
        }
    }

    /// Halt the periodic schedule. The partial interval is dropped, so
    /// a restart waits one full interval before the next generation.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.accumulator = Duration::ZERO;
            log::debug!("driver stopped");
        }
    }

    /// Flip between started and stopped; returns the new running state
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
        self.running
    }

    /// Replace the interval between generations
    pub fn set_speed(&mut self, speed: Duration) {
        self.config.speed = speed;
    }

    /// Feed elapsed host time. Once the accumulated time reaches the
    /// configured interval one generation runs and the accumulator
    /// resets; at most one generation runs per call. Returns whether a
    /// generation ran.
    pub fn tick(&mut self, elapsed: Duration, surface: &mut dyn Surface) -> bool {
        if !self.running {
            return false;
        }
        self.accumulator += elapsed;
        if self.accumulator < self.config.speed {
            return false;
        }
        self.accumulator = Duration::ZERO;
        self.step(surface);
        true
    }

    /// Advance one generation immediately and repaint the cells it
    /// changed. Works regardless of the running state, so hosts and
    /// tests can single-step.
    pub fn step(&mut self, surface: &mut dyn Surface) {
        let changed = self.grid.advance();
        self.generation += 1;
        log::trace!(
            "generation {}: {} cells changed",
            self.generation,
            changed.len()
        );
        for &(x, y) in &changed {
            let alive = self.grid.is_alive(x as i32, y as i32);
            self.paint_cell(surface, x, y, alive);
        }
    }

    /// Repaint every cell from current grid state. The periodic path
    /// only paints generation diffs, so this is the resync point after
    /// out-of-band grid mutations.
    pub fn redraw(&mut self, surface: &mut dyn Surface) {
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let alive = self.grid.is_alive(x as i32, y as i32);
                self.paint_cell(surface, x, y, alive);
            }
        }
    }

    /// Translate a pointer position into a cell coordinate and forward
    /// it to the configured click handler. The coordinate is not
    /// range-checked; pointers outside the surface yield out-of-range
    /// values that grid operations wrap. Pure translation: the handler
    /// owns any mutation and the host owns any repaint.
    pub fn handle_click(&mut self, px: f32, py: f32) -> (i32, i32) {
        let (ox, oy) = self.config.origin_px;
        let cell = self.config.cell_size as f32;
        let cx = ((px - ox) / cell).floor() as i32;
        let cy = ((py - oy) / cell).floor() as i32;
        if let Some(handler) = self.config.on_click.as_mut() {
            handler(&mut self.grid, cx, cy);
        }
        (cx, cy)
    }

    fn paint_cell(&mut self, surface: &mut dyn Surface, x: usize, y: usize, alive: bool) {
        let size = self.config.cell_size;
        let px = x as u32 * size;
        let py = y as u32 * size;
        if alive {
            let color = self.pick_color();
            surface.fill_rect(px, py, size, size, color);
        } else if self.config.transparent {
            surface.clear_rect(px, py, size, size);
        } else {
            surface.fill_rect(px, py, size, size, self.config.color_empty);
        }
    }

    fn pick_color(&mut self) -> Color {
        if self.config.colors.is_empty() {
            return self.config.color_empty;
        }
        let idx = self.palette_rng.random_range(0..self.config.colors.len());
        self.config.colors[idx]
    }
}
