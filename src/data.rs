/// A grid site, 0-indexed. Only constructed from coordinates already checked against the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

impl Site {
    /// Neighbor one step in `d`, if it lies inside an `n`-by-`n` grid.
    pub fn step(&self, d: Direction, n: usize) -> Option<Site> {
        let (dr, dc) = d.offset();
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if row < 0 || col < 0 || row >= n as isize || col >= n as isize {
            return None;
        }
        Some(Site { row: row as usize, col: col as usize })
    }

    pub fn neighbors(&self, n: usize) -> Vec<Site> {
        Direction::adjacent_directions()
            .into_iter()
            .filter_map(|d| self.step(d, n))
            .collect()
    }
}

/// Shifts user-facing 1-indexed coordinates onto the 0-indexed grid.
pub fn from_one_indexed(row: i64, col: i64) -> (i64, i64) {
    (row - 1, col - 1)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    North, East, South, West,
}

impl Direction {
    /// (row, col) delta; row 0 is the top.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    pub fn adjacent_directions() -> Vec<Direction> {
        vec![Direction::North, Direction::East,
        Direction::South, Direction::West]
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SiteState {
    Blocked, Open, Full,
}

impl SiteState {
    pub fn get_char_encoding(&self) -> char {
        match self {
            SiteState::Blocked => '□',
            SiteState::Open => '▪',
            SiteState::Full => '▣',
        }
    }
}
