use crate::{CellView, Game, Position};

/// A censored, read-only view of a game in progress.
///
/// This is the only channel the solver reads the board through: it exposes
/// flag state, revealed counts, and nothing else. Raw mine placement is
/// simply not reachable from here, so a deduction that cheats fails to
/// compile rather than failing review.
#[derive(Debug)]
pub struct BoardView<'a> {
    game: &'a Game,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }

    /// What the player could see at `pos` right now: `Flagged`, `Hidden`, or
    /// a revealed count. `None` out of bounds.
    pub fn observe(&self, pos: Position) -> Option<CellView> {
        self.game.view(pos)
    }

    pub fn width(&self) -> usize {
        self.game.width()
    }

    pub fn height(&self) -> usize {
        self.game.height()
    }
}
