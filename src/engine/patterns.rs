use super::Grid;

/// Represents a pattern that can be stamped on the grid
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    /// Relative coordinates of alive cells
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// Number of alive cells in the pattern
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding-box width in cells
    pub fn width(&self) -> i32 {
        span(self.cells.iter().map(|&(dx, _)| dx))
    }

    /// Bounding-box height in cells
    pub fn height(&self) -> i32 {
        span(self.cells.iter().map(|&(_, dy)| dy))
    }

    /// Stamp the pattern on the grid anchored at `(x, y)`; cells that
    /// fall past an edge wrap around
    pub fn stamp(&self, grid: &mut Grid, x: i32, y: i32) {
        grid.stamp_pattern(x, y, self.cells);
    }
}

fn span(values: impl Iterator<Item = i32>) -> i32 {
    let mut bounds = None;
    for v in values {
        bounds = match bounds {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        };
    }
    match bounds {
        Some((min, max)) => max - min + 1,
        None => 0,
    }
}

/// Glider - simplest spaceship, moves down-right one cell every 4 generations
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    description: "Moves diagonally (period 4)",
    cells: &[
        (1, 0),
        (2, 1),
        (0, 2), (1, 2), (2, 2),
    ],
};

/// Blinker - period 2 oscillator
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    description: "Oscillator (period 2)",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

/// Block - simple still life
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    description: "Still life",
    cells: &[
        (0, 0), (1, 0),
        (0, 1), (1, 1),
    ],
};

/// Lightweight Spaceship (LWSS)
pub const LWSS: Pattern = Pattern {
    name: "LWSS",
    description: "Lightweight Spaceship (period 4)",
    cells: &[
        (1, 0), (4, 0),
        (0, 1),
        (0, 2), (4, 2),
        (0, 3), (1, 3), (2, 3), (3, 3),
    ],
};

/// R-pentomino - classic methuselah (stabilizes after 1103 generations)
pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    description: "Methuselah - stabilizes at gen 1103",
    cells: &[
        (1, 0), (2, 0),
        (0, 1), (1, 1),
        (1, 2),
    ],
};

/// Weekender - orthogonal spaceship by David Eppstein
pub const WEEKENDER: Pattern = Pattern {
    name: "Weekender",
    description: "Orthogonal spaceship (speed 2c/7)",
    cells: &[
        // Legs
        (1, 0), (14, 0),
        (1, 1), (14, 1),
        (0, 2), (2, 2), (13, 2), (15, 2),
        (1, 3), (14, 3),
        (1, 4), (14, 4),
        // Body
        (2, 5), (6, 5), (7, 5), (8, 5), (9, 5), (13, 5),
        (6, 6), (7, 6), (8, 6), (9, 6),
        (2, 7), (3, 7), (4, 7), (5, 7), (10, 7), (11, 7), (12, 7), (13, 7),
        // Tail
        (4, 9), (11, 9),
        (5, 10), (6, 10), (9, 10), (10, 10),
    ],
};

/// Siesta - two mirrored sombrero halves
pub const SIESTA: Pattern = Pattern {
    name: "Siesta",
    description: "Oscillator (period 5)",
    cells: &[
        // Top half
        (5, 0), (11, 0),
        (1, 1), (2, 1), (4, 1), (6, 1), (10, 1), (12, 1), (14, 1), (15, 1),
        (5, 2), (11, 2),
        (0, 3), (3, 3), (4, 3), (12, 3), (13, 3), (16, 3),
        (1, 4), (2, 4), (3, 4), (13, 4), (14, 4), (15, 4),
        // Bottom half
        (1, 5), (2, 5), (3, 5), (13, 5), (14, 5), (15, 5),
        (0, 6), (3, 6), (4, 6), (12, 6), (13, 6), (16, 6),
        (5, 7), (11, 7),
        (1, 8), (2, 8), (4, 8), (6, 8), (10, 8), (12, 8), (14, 8), (15, 8),
        (5, 9), (11, 9),
    ],
};

/// Get all available patterns
pub fn all() -> &'static [Pattern] {
    const ALL: &[Pattern] = &[
        GLIDER,
        BLINKER,
        BLOCK,
        LWSS,
        R_PENTOMINO,
        WEEKENDER,
        SIESTA,
    ];
    ALL
}
