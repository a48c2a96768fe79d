mod cell;
mod grid;
pub mod patterns;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::Pattern;
