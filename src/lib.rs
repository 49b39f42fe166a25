pub mod board;
pub mod config;
pub mod game;
pub mod position;
pub mod solver;

pub use board::{Board, Cell};
pub use config::{BatchConfig, ConfigError};
pub use game::{CellView, Game};
pub use position::Position;
pub use solver::{BoardView, Solver, SolverAction};
