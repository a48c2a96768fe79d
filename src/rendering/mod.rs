use std::collections::HashMap;

use macroquad::color::Color as MqColor;
use macroquad::shapes::draw_rectangle;

use crate::driver::{Color, Surface};

/// Retained canvas over macroquad's immediate-mode drawing.
///
/// macroquad redraws from scratch every frame, while the driver only
/// paints cells that changed. The canvas bridges the two by keeping
/// every filled rect keyed by its pixel origin and replaying them on
/// [`present`](Self::present); clearing a rect just drops it.
pub struct CanvasSurface {
    origin: (f32, f32),
    width_px: u32,
    height_px: u32,
    rects: HashMap<(u32, u32), (u32, u32, Color)>,
}

impl CanvasSurface {
    /// Canvas of the given pixel size, drawn at `origin` in window
    /// coordinates
    pub fn new(origin: (f32, f32), width_px: u32, height_px: u32) -> Self {
        Self {
            origin,
            width_px,
            height_px,
            rects: HashMap::new(),
        }
    }

    /// Window position of the canvas's top-left corner
    pub const fn origin(&self) -> (f32, f32) {
        self.origin
    }

    /// Replay the retained rects; call once per frame
    pub fn present(&self) {
        for (&(x, y), &(w, h, color)) in &self.rects {
            draw_rectangle(
                self.origin.0 + x as f32,
                self.origin.1 + y as f32,
                w as f32,
                h as f32,
                to_macroquad(color),
            );
        }
    }
}

impl Surface for CanvasSurface {
    fn size_px(&self) -> (u32, u32) {
        (self.width_px, self.height_px)
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        self.rects.insert((x, y), (width, height, color));
    }

    fn clear_rect(&mut self, x: u32, y: u32, _width: u32, _height: u32) {
        self.rects.remove(&(x, y));
    }
}

fn to_macroquad(color: Color) -> MqColor {
    MqColor::from_rgba(color.r, color.g, color.b, color.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_then_clear_leaves_no_rect() {
        let mut canvas = CanvasSurface::new((0.0, 0.0), 64, 64);
        canvas.fill_rect(8, 8, 8, 8, Color::rgb(1, 2, 3));
        assert_eq!(canvas.rects.len(), 1);

        canvas.clear_rect(8, 8, 8, 8);
        assert!(canvas.rects.is_empty());
    }

    #[test]
    fn refilling_a_rect_replaces_it() {
        let mut canvas = CanvasSurface::new((0.0, 0.0), 64, 64);
        canvas.fill_rect(0, 0, 8, 8, Color::rgb(1, 2, 3));
        canvas.fill_rect(0, 0, 8, 8, Color::rgb(4, 5, 6));

        assert_eq!(canvas.rects.len(), 1);
        assert_eq!(canvas.rects[&(0, 0)], (8, 8, Color::rgb(4, 5, 6)));
    }

    #[test]
    fn reports_its_pixel_size() {
        let canvas = CanvasSurface::new((0.0, 32.0), 640, 480);
        assert_eq!(canvas.size_px(), (640, 480));
        assert_eq!(canvas.origin(), (0.0, 32.0));
    }
}
