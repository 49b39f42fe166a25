mod deduction;
mod heuristic;
mod view;

pub use view::BoardView;

use crate::{Game, Position};
use log::debug;

/// A single certain action derived by the deduction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverAction {
    Reveal(Position),
    Flag(Position),
}

/// Plays a game automatically: exhaustive deduction first, one ranked guess
/// when deduction has nothing left.
///
/// The solver keeps no state between turns; everything it knows is rebuilt
/// from the observable board on every call.
#[derive(Debug, Clone)]
pub struct Solver {
    /// Reserved tuning knob on the guessing fallback, exposed to callers
    /// alongside the board construction parameters. No decision consults it
    /// yet.
    pub board_density_threshold: f64,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            board_density_threshold: 0.2,
        }
    }
}

impl Solver {
    pub fn new(board_density_threshold: f64) -> Self {
        Self {
            board_density_threshold,
        }
    }

    /// Runs one solver turn. Deduction sweeps are applied and re-run until
    /// they produce nothing, so a single turn may issue many clicks and
    /// flags; only when a whole turn deduces nothing is a single heuristic
    /// guess clicked instead. Returns whether any action was taken.
    ///
    /// A finished game takes no action and reports `false`.
    pub fn step(&self, game: &mut Game) -> bool {
        if game.finished() {
            return false;
        }

        let mut deduced = false;
        loop {
            let actions = deduction::sweep(&BoardView::new(game));
            if actions.is_empty() {
                break;
            }
            debug!("deduction sweep issued {} actions", actions.len());
            deduced = true;

            for action in actions {
                match action {
                    SolverAction::Flag(pos) => game.toggle_flag(pos),
                    SolverAction::Reveal(pos) => game.click(pos),
                }
                if game.finished() {
                    return true;
                }
            }
        }
        if deduced {
            return true;
        }

        match heuristic::select(&BoardView::new(game)) {
            Some(pos) => {
                game.click(pos);
                true
            }
            None => false,
        }
    }
}
