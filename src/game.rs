use crate::{Board, Cell, Position};
use log::debug;
use ndarray::Array2;
use std::collections::HashSet;

/// The player-visible value of one cell.
///
/// `Mine` can only be observed after a losing reveal; while the game is in
/// progress a revealed cell always shows its count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Hidden,
    Flagged,
    Count(u8),
    Mine,
}

/// A game played upon a board: tracks which cells have been revealed and
/// flagged, and detects the win and loss conditions.
///
/// Once `finished` is set the game is immutable in effect; further clicks
/// and flags are ignored.
#[derive(Debug)]
pub struct Game {
    board: Board,
    revealed: Array2<bool>,
    flags: HashSet<Position>,
    // Mine positions cached from the board so the win check does not rescan it.
    mines: HashSet<Position>,
    revealed_count: usize,
    moves: usize,
    finished: bool,
    won: bool,
}

impl Game {
    pub fn new(board: Board) -> Self {
        let mines = board
            .positions()
            .filter(|&pos| board.is_mine(pos))
            .collect();
        let revealed = Array2::from_elem((board.height(), board.width()), false);
        Self {
            board,
            revealed,
            flags: HashSet::new(),
            mines,
            revealed_count: 0,
            moves: 0,
            finished: false,
            won: false,
        }
    }

    /// Has the cell at `pos` been revealed? False out of bounds.
    pub fn cell_revealed(&self, pos: Position) -> bool {
        self.index(pos).map_or(false, |idx| self.revealed[idx])
    }

    /// Has the cell at `pos` been flagged?
    pub fn cell_flagged(&self, pos: Position) -> bool {
        self.flags.contains(&pos)
    }

    /// This game's view of the cell at `pos`: flag first, then hidden, then
    /// the board value. `None` out of bounds.
    pub fn view(&self, pos: Position) -> Option<CellView> {
        self.index(pos)?;
        if self.cell_flagged(pos) {
            return Some(CellView::Flagged);
        }
        if !self.cell_revealed(pos) {
            return Some(CellView::Hidden);
        }
        match self.board.cell(pos) {
            Some(Cell::Mine) => Some(CellView::Mine),
            Some(Cell::Count(n)) => Some(CellView::Count(n)),
            None => None,
        }
    }

    /// Every position with its display state, row-major. This is the
    /// enumeration a renderer consumes.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellView)> + '_ {
        self.board.positions().map(|pos| {
            let view = self.view(pos).unwrap_or(CellView::Hidden);
            (pos, view)
        })
    }

    /// Flips the flag on `pos`. Counts as a move and re-checks the win
    /// condition. Flagging a revealed cell is permitted; it is never
    /// meaningful but it is not an error.
    pub fn toggle_flag(&mut self, pos: Position) {
        if self.finished {
            debug!("ignoring flag on finished game at {:?}", pos);
            return;
        }
        if self.index(pos).is_none() {
            return;
        }

        self.moves += 1;
        if !self.flags.remove(&pos) {
            self.flags.insert(pos);
        }
        self.check_win();
    }

    /// Reveals the cell at `pos`. Clicking a revealed or flagged cell is a
    /// no-op. Clicking a mine ends the game; clicking a zero-count cell
    /// reveals its whole zero region and the numbered border around it.
    pub fn click(&mut self, pos: Position) {
        if self.finished {
            debug!("ignoring click on finished game at {:?}", pos);
            return;
        }
        let Some(idx) = self.index(pos) else {
            return;
        };
        if self.revealed[idx] || self.cell_flagged(pos) {
            return;
        }

        self.moves += 1;

        match self.board.cell(pos) {
            Some(Cell::Mine) => {
                self.revealed[idx] = true;
                self.revealed_count += 1;
                self.finished = true;
                self.won = false;
                debug!("mine hit at {:?} after {} moves", pos, self.moves);
                return;
            }
            Some(Cell::Count(0)) => self.flood_reveal(pos),
            Some(Cell::Count(_)) => {
                self.revealed[idx] = true;
                self.revealed_count += 1;
            }
            None => return,
        }

        self.check_win();
    }

    /// Reveals the connected zero-count region around `start` plus its
    /// numbered border. Iterative: an explicit work stack keeps large boards
    /// from exhausting the call stack.
    fn flood_reveal(&mut self, start: Position) {
        let mut stack = vec![start];

        while let Some(pos) = stack.pop() {
            let Some(idx) = self.index(pos) else {
                continue;
            };
            if self.revealed[idx] {
                continue;
            }

            self.revealed[idx] = true;
            self.revealed_count += 1;

            // Only zero cells spread; numbered border cells end the fill.
            if self.board.cell(pos) == Some(Cell::Count(0)) {
                stack.extend(pos.neighbors());
            }
        }
    }

    /// Win requires both clauses: the flag set must be exactly the mine set,
    /// and every non-mine cell must be revealed. Neither alone ends the game.
    fn check_win(&mut self) {
        if self.flags != self.mines {
            return;
        }
        if self.revealed_count == self.board.num_cells() - self.mines.len() {
            self.finished = true;
            self.won = true;
            debug!("game won after {} moves", self.moves);
        }
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    fn index(&self, pos: Position) -> Option<(usize, usize)> {
        if pos.x < 0
            || pos.x as usize >= self.board.width()
            || pos.y < 0
            || pos.y as usize >= self.board.height()
        {
            return None;
        }
        Some((pos.y as usize, pos.x as usize))
    }
}
