use autosweeper::{Board, CellView, Game, Solver};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn play(board: Board) -> Game {
    let solver = Solver::default();
    let mut game = Game::new(board);
    while !game.finished() {
        if !solver.step(&mut game) {
            break;
        }
    }
    game
}

#[test]
fn seeded_games_always_terminate() {
    for seed in 0..40u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::generate_with_rng(12, 12, 0.12, &mut rng);
        let game = play(board);

        assert!(game.finished(), "game for seed {seed} stalled");
        assert!(game.moves() >= 1);
    }
}

#[test]
fn won_games_reveal_everything_but_the_mines() {
    for seed in 0..40u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::generate_with_rng(10, 10, 0.08, &mut rng);
        let layout = board.clone();
        let game = play(board);
        if !game.won() {
            continue;
        }

        for pos in layout.positions() {
            if layout.is_mine(pos) {
                assert!(game.cell_flagged(pos), "mine {pos:?} unflagged in a win");
                assert!(!game.cell_revealed(pos), "mine {pos:?} revealed in a win");
            } else {
                assert!(game.cell_revealed(pos), "safe {pos:?} hidden in a win");
            }
        }
    }
}

#[test]
fn lost_games_show_exactly_one_mine() {
    let mut losses = 0;
    for seed in 0..60u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::generate_with_rng(8, 8, 0.25, &mut rng);
        let game = play(board);
        if game.won() {
            continue;
        }
        losses += 1;

        let shown_mines = game
            .cells()
            .filter(|(_, view)| *view == CellView::Mine)
            .count();
        assert_eq!(shown_mines, 1, "seed {seed}: a loss reveals the mine hit");
    }
    assert!(losses > 0, "expected some losses at this density");
}

#[test]
fn terminal_state_is_stable_under_further_steps() {
    let mut rng = StdRng::seed_from_u64(11);
    let board = Board::generate_with_rng(9, 9, 0.15, &mut rng);
    let solver = Solver::default();
    let mut game = Game::new(board);

    while !game.finished() {
        if !solver.step(&mut game) {
            break;
        }
    }

    let won = game.won();
    let moves = game.moves();
    for _ in 0..3 {
        assert!(!solver.step(&mut game));
    }
    assert_eq!(game.won(), won);
    assert_eq!(game.moves(), moves);
}

#[test]
fn sparse_boards_are_usually_won() {
    let mut wins = 0;
    for seed in 0..30u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::generate_with_rng(8, 8, 0.05, &mut rng);
        if play(board).won() {
            wins += 1;
        }
    }
    assert!(wins > 0, "solver won none of 30 sparse games");
}
