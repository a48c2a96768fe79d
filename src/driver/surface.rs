/// RGBA color with 8-bit components, the painting currency between the
/// driver and whatever backend implements [`Surface`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully opaque color from red, green and blue components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from red, green, blue and alpha components
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Pixel surface the driver paints generations onto.
///
/// Implementations are retained: a filled rect stays visible until the
/// same area is filled again or cleared. Rectangles arrive cell-aligned
/// in surface pixels, with `(0, 0)` the surface's top-left corner.
pub trait Surface {
    /// Drawable size in pixels
    fn size_px(&self) -> (u32, u32);

    /// Paint a solid rectangle
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color);

    /// Erase a rectangle back to the surface's notion of empty
    fn clear_rect(&mut self, x: u32, y: u32, width: u32, height: u32);
}
