// Engine layer - cell rules, toroidal grid, pattern library
pub mod engine;

// Driver layer - timer scheduling, diff painting, input translation
pub mod driver;

// Infrastructure layer - macroquad canvas backend
pub mod rendering;

mod error;

// Re-exports for convenience
pub use driver::{Color, Driver, DriverConfig, Surface};
pub use engine::{patterns, Cell, Grid, Pattern};
pub use error::LifeError;
pub use rendering::CanvasSurface;
