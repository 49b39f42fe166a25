use super::view::BoardView;
use super::SolverAction;
use crate::{CellView, Position};
use itertools::iproduct;
use log::trace;
use ndarray::Array2;

/// Per-cell certainty accumulated during one deduction sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Knowledge {
    Unknown,
    Safe,
    Mine,
}

/// Runs one flag-complete / reveal-complete sweep over a fresh snapshot of
/// the observable board and returns every action the sweep is certain of.
///
/// The snapshot is recaptured by the caller before the next sweep: a reveal
/// can cascade through a zero region, so patching the old observation grid
/// incrementally would go stale. Flags only touch a single cell, which is
/// why they are patched into the knowledge grid mid-sweep instead.
pub(super) fn sweep(view: &BoardView) -> Vec<SolverAction> {
    let (width, height) = (view.width(), view.height());

    let observed = Array2::from_shape_fn((height, width), |(y, x)| {
        view.observe(Position::new(x as i32, y as i32))
            .unwrap_or(CellView::Hidden)
    });

    // Seed knowledge from the observations: flags are mines, revealed
    // numbers are safe, and a revealed 0 clears its whole neighborhood.
    let mut knowledge = Array2::from_shape_fn((height, width), |(y, x)| match observed[(y, x)] {
        CellView::Flagged => Knowledge::Mine,
        CellView::Count(_) => Knowledge::Safe,
        _ => Knowledge::Unknown,
    });
    for (y, x) in iproduct!(0..height, 0..width) {
        if observed[(y, x)] == CellView::Count(0) {
            for npos in Position::new(x as i32, y as i32).neighbors() {
                if let Some(idx) = index(npos, width, height) {
                    knowledge[idx] = Knowledge::Safe;
                }
            }
        }
    }

    let mut actions = Vec::new();

    // Flag-complete: when a number has exactly as many unknown-or-mine
    // neighbors as its count, every one of them is a mine.
    for (y, x) in iproduct!(0..height, 0..width) {
        let CellView::Count(n) = observed[(y, x)] else {
            continue;
        };
        let pos = Position::new(x as i32, y as i32);

        let candidates: Vec<(Position, (usize, usize))> = pos
            .neighbors()
            .filter_map(|npos| index(npos, width, height).map(|idx| (npos, idx)))
            .filter(|&(_, idx)| knowledge[idx] != Knowledge::Safe)
            .collect();

        if candidates.len() == n as usize {
            for (npos, idx) in candidates {
                if knowledge[idx] == Knowledge::Unknown {
                    knowledge[idx] = Knowledge::Mine;
                    trace!("flag-complete: {:?} must be a mine (from {:?})", npos, pos);
                    actions.push(SolverAction::Flag(npos));
                }
            }
        }
    }

    // Reveal-complete: when a number already has its full complement of
    // known mines, its remaining unknown neighbors are all safe.
    for (y, x) in iproduct!(0..height, 0..width) {
        let CellView::Count(n) = observed[(y, x)] else {
            continue;
        };
        let pos = Position::new(x as i32, y as i32);

        let mut known_mines = 0usize;
        let mut unknowns: Vec<(Position, (usize, usize))> = Vec::new();
        for npos in pos.neighbors() {
            let Some(idx) = index(npos, width, height) else {
                continue;
            };
            match knowledge[idx] {
                Knowledge::Mine => known_mines += 1,
                Knowledge::Unknown => unknowns.push((npos, idx)),
                Knowledge::Safe => {}
            }
        }

        if known_mines == n as usize && !unknowns.is_empty() {
            for (npos, idx) in unknowns {
                knowledge[idx] = Knowledge::Safe;
                trace!("reveal-complete: {:?} must be safe (from {:?})", npos, pos);
                actions.push(SolverAction::Reveal(npos));
            }
        }
    }

    actions
}

fn index(pos: Position, width: usize, height: usize) -> Option<(usize, usize)> {
    if pos.x < 0 || pos.x as usize >= width || pos.y < 0 || pos.y as usize >= height {
        return None;
    }
    Some((pos.y as usize, pos.x as usize))
}
