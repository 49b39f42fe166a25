use autosweeper::{BatchConfig, Board, ConfigError, Game, Solver};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("autosweeper: {}", e);
        eprintln!("usage: autosweeper [width height density [games]]");
        std::process::exit(2);
    }
}

fn run() -> Result<(), ConfigError> {
    let config = BatchConfig::from_args(std::env::args().skip(1))?;
    let solver = Solver::default();

    let mut wins = 0usize;
    let mut move_log = Vec::with_capacity(config.games);

    for i in 0..config.games {
        let board = Board::generate(config.width, config.height, config.density);
        let mut game = Game::new(board);

        while !game.finished() {
            if !solver.step(&mut game) {
                break;
            }
        }

        if game.won() {
            wins += 1;
        }
        move_log.push(game.moves());
        println!(
            "[{}/{}] win? {}, moves: {}",
            i + 1,
            config.games,
            game.won(),
            game.moves()
        );
    }

    if move_log.is_empty() {
        return Ok(());
    }

    println!(
        "Board with {}x{} WxH, mine density={}",
        config.width, config.height, config.density
    );
    println!(
        "{} wins out of {} games ({:.2}%)",
        wins,
        move_log.len(),
        wins as f64 / move_log.len() as f64 * 100.0
    );
    println!(
        "{:.2} moves on average",
        move_log.iter().sum::<usize>() as f64 / move_log.len() as f64
    );

    // Games lost on the very first click say nothing about the solver.
    let survived: Vec<usize> = move_log.iter().copied().filter(|&m| m > 1).collect();
    if !survived.is_empty() {
        println!(
            "{:.2} moves on average discounting lose-on-first-click",
            survived.iter().sum::<usize>() as f64 / survived.len() as f64
        );
    }

    Ok(())
}
