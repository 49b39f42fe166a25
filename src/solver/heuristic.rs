use super::view::BoardView;
use crate::{CellView, Position};
use itertools::iproduct;
use log::debug;

/// Picks the hidden, unflagged cell with the lowest estimated mine risk, or
/// `None` when no such cell exists.
///
/// Each revealed number contributes its local mine density (mines still
/// unaccounted for, divided by its hidden neighbors) to every hidden
/// neighbor, and a cell's risk is the mean over its contributing numbers.
/// Overlapping constraints are treated as independent; the estimate is a
/// ranking device, not a calibrated probability. Ties go to the first cell
/// in row-major order.
pub(super) fn select(view: &BoardView) -> Option<Position> {
    let (width, height) = (view.width(), view.height());

    // Fallback risk for cells with no revealed number next to them,
    // approximating the board-wide density of remaining mines.
    // TODO: flagged cells are folded into the hidden pool and the mine
    // numerator is never accumulated, so this always computes 0; decide the
    // intended numerator before tuning guess quality.
    let mut unknown_cells = 0usize;
    let presumed_mines = 0usize;
    for (y, x) in iproduct!(0..height, 0..width) {
        match view.observe(Position::new(x as i32, y as i32)) {
            Some(CellView::Hidden) | Some(CellView::Flagged) => unknown_cells += 1,
            _ => {}
        }
    }
    let baseline = if unknown_cells > 0 {
        presumed_mines as f64 / unknown_cells as f64
    } else {
        0.0
    };

    let mut best: Option<(Position, f64)> = None;
    for (y, x) in iproduct!(0..height, 0..width) {
        let pos = Position::new(x as i32, y as i32);
        if view.observe(pos) != Some(CellView::Hidden) {
            continue;
        }

        let mut total = 0.0;
        let mut contributors = 0usize;
        for npos in pos.neighbors() {
            let Some(CellView::Count(n)) = view.observe(npos) else {
                continue;
            };

            let mut flagged = 0i32;
            let mut hidden = 0usize;
            for nnpos in npos.neighbors() {
                match view.observe(nnpos) {
                    Some(CellView::Flagged) => flagged += 1,
                    Some(CellView::Hidden) => hidden += 1,
                    _ => {}
                }
            }

            // A satisfied (or over-flagged) number says nothing about its
            // remaining neighbors.
            let remaining = n as i32 - flagged;
            if remaining <= 0 || hidden == 0 {
                continue;
            }
            total += remaining as f64 / hidden as f64;
            contributors += 1;
        }

        let risk = if contributors > 0 {
            total / contributors as f64
        } else {
            baseline
        };

        match best {
            Some((_, best_risk)) if risk >= best_risk => {}
            _ => best = Some((pos, risk)),
        }
    }

    best.map(|(pos, risk)| {
        debug!("guessing {:?} with estimated risk {:.3}", pos, risk);
        pos
    })
}
