use thiserror::Error;

/// Failures reported by the library. Coordinate-taking operations are
/// total (coordinates wrap onto the torus), so only construction can
/// go wrong.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifeError {
    /// A grid needs at least one cell on each axis.
    #[error("grid dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// The surface handed to the driver cannot host a single cell at
    /// the configured cell size.
    #[error("surface of {width_px}x{height_px}px cannot host {cell_size}px cells")]
    InvalidHostSurface {
        width_px: u32,
        height_px: u32,
        cell_size: u32,
    },
}
