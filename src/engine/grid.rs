use rand::Rng;

use super::Cell;
use crate::error::LifeError;

/// Grid manages the 2D cell field on a torus: coordinates wrap on both
/// axes, so the leftmost column neighbors the rightmost and the top row
/// neighbors the bottom.
///
/// Two buffers back the field. `advance` writes the next generation into
/// the scratch buffer while reading only the current one, then swaps, so
/// a half-stepped grid is never observable.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
            scratch: vec![Cell::Dead; width * height],
        })
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Normalize a coordinate pair onto the torus. i64 math keeps the
    /// wrap total for any i32 input.
    fn wrap(&self, x: i64, y: i64) -> (usize, usize) {
        let wx = x.rem_euclid(self.width as i64) as usize;
        let wy = y.rem_euclid(self.height as i64) as usize;
        (wx, wy)
    }

    /// Check a cell; out-of-range and negative coordinates wrap
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        let (x, y) = self.wrap(x as i64, y as i64);
        self.cells[self.get_index(x, y)].is_alive()
    }

    /// Set a single cell, wrapping the coordinates first
    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) {
        let (x, y) = self.wrap(x as i64, y as i64);
        let idx = self.get_index(x, y);
        self.cells[idx] = Cell::from(alive);
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Set every cell alive independently with probability `density`,
    /// clamped to [0, 1]. NaN counts as 0. Pass a seeded rng for
    /// reproducible fills.
    pub fn randomize<R: Rng>(&mut self, density: f64, rng: &mut R) {
        // clamp propagates NaN, which random_bool rejects
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        for cell in &mut self.cells {
            *cell = Cell::from(rng.random_bool(density));
        }
    }

    /// Stamp a list of `(dx, dy)` offsets alive relative to the anchor.
    /// Additive: live cells outside the pattern keep their state.
    pub fn stamp_pattern(&mut self, x: i32, y: i32, offsets: &[(i32, i32)]) {
        for &(dx, dy) in offsets {
            let (px, py) = self.wrap(x as i64 + dx as i64, y as i64 + dy as i64);
            let idx = self.get_index(px, py);
            self.cells[idx] = Cell::Alive;
        }
    }

    /// Count live cells among the 8 wrapped neighbor offsets.
    pub fn count_live_neighbors(&self, x: i32, y: i32) -> u8 {
        let (x, y) = self.wrap(x as i64, y as i64);
        self.live_neighbors_at(x, y)
    }

    /// Neighbor count for an in-range coordinate. On grids narrower than
    /// 3 cells an offset can wrap back onto the center; the center never
    /// counts toward its own total, so those are skipped.
    fn live_neighbors_at(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for dy in -1..=1i64 {
            for dx in -1..=1i64 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = self.wrap(x as i64 + dx, y as i64 + dy);
                if (nx, ny) == (x, y) {
                    continue;
                }
                if self.cells[self.get_index(nx, ny)].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advance the simulation by one generation and report which cells
    /// changed, as `(x, y)` pairs in row-major order. Every next state
    /// is derived from the pre-advance field only.
    pub fn advance(&mut self) -> Vec<(usize, usize)> {
        let mut changed = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.get_index(x, y);
                let current = self.cells[idx];
                let next = current.next_state(self.live_neighbors_at(x, y));
                self.scratch[idx] = next;
                if next != current {
                    changed.push((x, y));
                }
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
        changed
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::engine::patterns;

    fn live_set(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|&(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn new_grid_starts_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            LifeError::InvalidDimension { width: 0, height: 5 }
        );
        assert_eq!(
            Grid::new(5, 0).unwrap_err(),
            LifeError::InvalidDimension { width: 5, height: 0 }
        );
    }

    #[test]
    fn coordinates_wrap_in_both_directions() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set_cell(-1, -1, true);
        assert!(grid.is_alive(9, 9));
        grid.set_cell(10, 12, true);
        assert!(grid.is_alive(0, 2));
        assert!(grid.is_alive(-10, -8));
    }

    #[test]
    fn neighbor_count_sees_wrapped_corners() {
        let mut grid = Grid::new(8, 6).unwrap();
        grid.set_cell(0, 0, true);
        assert_eq!(grid.count_live_neighbors(7, 5), 1);
        assert_eq!(grid.count_live_neighbors(7, 0), 1);
        assert_eq!(grid.count_live_neighbors(0, 5), 1);
        assert_eq!(grid.count_live_neighbors(1, 1), 1);
        assert_eq!(grid.count_live_neighbors(4, 3), 0);
    }

    #[test]
    fn neighbor_count_never_includes_the_center() {
        let mut lone = Grid::new(3, 3).unwrap();
        lone.set_cell(1, 1, true);
        assert_eq!(lone.count_live_neighbors(1, 1), 0);

        let mut unit = Grid::new(1, 1).unwrap();
        unit.set_cell(0, 0, true);
        assert_eq!(unit.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn lone_cell_dies() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_cell(1, 1, true);
        grid.advance();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn blinker_oscillates() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_cell(1, 2, true);
        grid.set_cell(2, 2, true);
        grid.set_cell(3, 2, true);

        grid.advance();
        assert_eq!(live_set(&grid), vec![(2, 1), (2, 2), (2, 3)]);

        grid.advance();
        assert_eq!(live_set(&grid), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn glider_translates_diagonally_over_four_generations() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.stamp_pattern(1, 1, patterns::GLIDER.cells);
        let before = live_set(&grid);

        for _ in 0..4 {
            grid.advance();
        }

        let expected: Vec<(usize, usize)> =
            before.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        assert_eq!(live_set(&grid), expected);
    }

    #[test]
    fn advance_reports_exactly_the_changed_cells() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.stamp_pattern(1, 2, patterns::BLINKER.cells);
        let changed = grid.advance();
        assert_eq!(changed, vec![(2, 1), (1, 2), (3, 2), (2, 3)]);
    }

    #[test]
    fn static_pattern_reports_no_changes() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.stamp_pattern(2, 2, patterns::BLOCK.cells);
        assert!(grid.advance().is_empty());
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn advance_is_a_pure_function_of_state() {
        let mut a = Grid::new(12, 9).unwrap();
        a.randomize(0.5, &mut StdRng::seed_from_u64(99));
        let mut b = a.clone();

        a.advance();
        b.advance();
        assert_eq!(live_set(&a), live_set(&b));
    }

    #[test]
    fn cleared_grid_stays_dead() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.randomize(1.0, &mut StdRng::seed_from_u64(3));
        grid.clear();
        assert!(grid.advance().is_empty());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn stamp_is_additive() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set_cell(8, 8, true);
        grid.stamp_pattern(0, 0, patterns::BLOCK.cells);
        assert!(grid.is_alive(8, 8));
        assert_eq!(grid.population(), 5);
    }

    #[test]
    fn stamp_wraps_around_the_edges() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.stamp_pattern(4, 4, patterns::BLOCK.cells);
        assert_eq!(live_set(&grid), vec![(0, 0), (4, 0), (0, 4), (4, 4)]);
    }

    #[test]
    fn randomize_is_reproducible_with_a_seeded_rng() {
        let mut a = Grid::new(16, 16).unwrap();
        let mut b = Grid::new(16, 16).unwrap();
        a.randomize(0.5, &mut StdRng::seed_from_u64(42));
        b.randomize(0.5, &mut StdRng::seed_from_u64(42));
        assert_eq!(live_set(&a), live_set(&b));
    }

    #[test]
    fn randomize_density_extremes() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        grid.randomize(0.0, &mut rng);
        assert_eq!(grid.population(), 0);
        grid.randomize(1.0, &mut rng);
        assert_eq!(grid.population(), 64);
        // out-of-range densities clamp instead of panicking
        grid.randomize(2.0, &mut rng);
        assert_eq!(grid.population(), 64);
        grid.randomize(-1.0, &mut rng);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn randomize_treats_nan_density_as_zero() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        grid.randomize(1.0, &mut rng);
        grid.randomize(f64::NAN, &mut rng);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn randomize_lands_near_the_requested_density() {
        let mut grid = Grid::new(50, 50).unwrap();
        grid.randomize(0.5, &mut StdRng::seed_from_u64(7));
        let pop = grid.population();
        assert!((1000..1500).contains(&pop), "population {pop} far from 50%");
    }
}
