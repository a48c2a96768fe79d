use std::time::Duration;

use super::surface::Color;
use crate::engine::Grid;

/// Callback fired when the host reports a pointer interaction. Receives
/// the grid plus the translated cell coordinate under the pointer. The
/// coordinate may lie outside the grid when the pointer does; grid
/// operations wrap it.
pub type ClickHandler = Box<dyn FnMut(&mut Grid, i32, i32)>;

/// Palette live cells are painted from when none is configured; one
/// entry is picked uniformly at random per paint.
pub const DEFAULT_COLORS: [Color; 5] = [
    Color::rgb(0x1b, 0x9e, 0x77),
    Color::rgb(0xd9, 0x5f, 0x02),
    Color::rgb(0x75, 0x70, 0xb3),
    Color::rgb(0xe7, 0x29, 0x8a),
    Color::rgb(0x66, 0xa6, 0x1e),
];

/// Fill used for dead cells on opaque surfaces
pub const DEFAULT_COLOR_EMPTY: Color = Color::rgb(0xee, 0xee, 0xee);

/// Interval between generations unless configured otherwise
pub const DEFAULT_SPEED: Duration = Duration::from_millis(100);

/// Pixel edge length of one cell unless configured otherwise
pub const DEFAULT_CELL_SIZE: u32 = 8;

/// Options accepted by [`Driver::new`](super::Driver::new). Build one
/// with `DriverConfig::default()` and override what the host cares
/// about.
pub struct DriverConfig {
    /// Pixel edge length per cell
    pub cell_size: u32,
    /// Palette for live cells; a random entry is used per paint
    pub colors: Vec<Color>,
    /// When true dead cells are erased, when false they are painted
    /// with `color_empty`
    pub transparent: bool,
    /// Dead-cell fill for opaque surfaces
    pub color_empty: Color,
    /// Interval between generations
    pub speed: Duration,
    /// Pixel offset of the surface inside the host's pointer coordinate
    /// space; subtracted before click translation
    pub origin_px: (f32, f32),
    /// Seed for the palette rng; `None` draws from OS entropy
    pub palette_seed: Option<u64>,
    /// Pointer callback, forwarded the grid and the clicked cell
    pub on_click: Option<ClickHandler>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            colors: DEFAULT_COLORS.to_vec(),
            transparent: true,
            color_empty: DEFAULT_COLOR_EMPTY,
            speed: DEFAULT_SPEED,
            origin_px: (0.0, 0.0),
            palette_seed: None,
            on_click: None,
        }
    }
}
