use crate::Position;
use itertools::iproduct;
use ndarray::Array2;
use rand::Rng;

/// One cell of the fixed mine layout: a mine, or the number of mines among
/// its up-to-8 in-bounds neighbors. Mine cells never carry a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Mine,
    Count(u8),
}

/// The hidden mine layout and its adjacency counts, generated once and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Array2<Cell>,
    width: usize,
    height: usize,
}

impl Board {
    /// Generates a board where each cell is independently a mine with
    /// probability `density`.
    ///
    /// `width` and `height` must be at least 1 and `density` must lie in
    /// [0, 1); this is a caller contract, not checked here. There is no
    /// first-click safety: the layout is fixed before any cell is revealed.
    pub fn generate(width: usize, height: usize, density: f64) -> Self {
        Self::generate_with_rng(width, height, density, &mut rand::thread_rng())
    }

    /// Like [`Board::generate`], but sampling from the given RNG so tests
    /// and benchmarks can replay a layout from a seed.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        density: f64,
        rng: &mut R,
    ) -> Self {
        let mines = Array2::from_shape_simple_fn((height, width), || rng.gen_bool(density));
        Self::from_mine_grid(mines)
    }

    /// Builds a board with mines exactly at the given positions. Positions
    /// outside the grid are ignored.
    pub fn with_mines<I>(width: usize, height: usize, mines: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut grid = Array2::from_elem((height, width), false);
        for pos in mines {
            if pos.x >= 0 && (pos.x as usize) < width && pos.y >= 0 && (pos.y as usize) < height {
                grid[(pos.y as usize, pos.x as usize)] = true;
            }
        }
        Self::from_mine_grid(grid)
    }

    fn from_mine_grid(mines: Array2<bool>) -> Self {
        let (height, width) = mines.dim();
        let cells = Array2::from_shape_fn((height, width), |(y, x)| {
            if mines[(y, x)] {
                Cell::Mine
            } else {
                let count = Position::new(x as i32, y as i32)
                    .neighbors()
                    .filter(|n| {
                        n.x >= 0
                            && (n.x as usize) < width
                            && n.y >= 0
                            && (n.y as usize) < height
                            && mines[(n.y as usize, n.x as usize)]
                    })
                    .count();
                Cell::Count(count as u8)
            }
        });
        Self {
            cells,
            width,
            height,
        }
    }

    /// Returns the cell at `pos`, or `None` when `pos` is outside the grid.
    /// Neighbor scans rely on this so they never branch on bounds.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    pub fn is_mine(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Mine)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn num_cells(&self) -> usize {
        self.width * self.height
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (width, height) = (self.width, self.height);
        iproduct!(0..height, 0..width).map(|(y, x)| Position::new(x as i32, y as i32))
    }

    fn index(&self, pos: Position) -> Option<(usize, usize)> {
        if pos.x < 0 || pos.x as usize >= self.width || pos.y < 0 || pos.y as usize >= self.height {
            return None;
        }
        Some((pos.y as usize, pos.x as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_counts_for_known_layout() {
        let board = Board::with_mines(3, 3, vec![Position::new(2, 0)]);

        assert_eq!(board.cell(Position::new(2, 0)), Some(Cell::Mine));
        assert_eq!(board.cell(Position::new(0, 0)), Some(Cell::Count(0)));
        assert_eq!(board.cell(Position::new(1, 0)), Some(Cell::Count(1)));
        assert_eq!(board.cell(Position::new(1, 1)), Some(Cell::Count(1)));
        assert_eq!(board.cell(Position::new(2, 1)), Some(Cell::Count(1)));
        assert_eq!(board.cell(Position::new(0, 1)), Some(Cell::Count(0)));
        assert_eq!(board.cell(Position::new(0, 2)), Some(Cell::Count(0)));
        assert_eq!(board.cell(Position::new(2, 2)), Some(Cell::Count(0)));
    }

    #[test]
    fn test_out_of_bounds_is_absent() {
        let board = Board::with_mines(2, 2, vec![]);

        assert_eq!(board.cell(Position::new(-1, 0)), None);
        assert_eq!(board.cell(Position::new(0, -1)), None);
        assert_eq!(board.cell(Position::new(2, 0)), None);
        assert_eq!(board.cell(Position::new(0, 2)), None);
        assert!(!board.is_mine(Position::new(-1, -1)));
    }

    #[test]
    fn test_zero_density_has_no_mines() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::generate_with_rng(8, 8, 0.0, &mut rng);
        assert!(board.positions().all(|pos| !board.is_mine(pos)));
    }

    proptest! {
        #[test]
        fn adjacency_counts_match_mine_neighbors(
            width in 1usize..=16,
            height in 1usize..=16,
            density in 0.0f64..0.6,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = Board::generate_with_rng(width, height, density, &mut rng);

            for pos in board.positions() {
                if let Some(Cell::Count(count)) = board.cell(pos) {
                    let mines = pos.neighbors().filter(|&n| board.is_mine(n)).count();
                    prop_assert_eq!(count as usize, mines);
                }
            }
        }
    }
}
