use criterion::{Criterion, criterion_group, criterion_main};
use engine::{Board, Difficulty, GameRng, GameState, GameStatus, Mark, calculate_move};

fn bench_single_move_empty_board() {
    let board = Board::new();
    let mut rng = GameRng::new(42);
    calculate_move(&board, Mark::X, Difficulty::Hard, &mut rng);
}

fn bench_single_move_mid_game() {
    let mut board = Board::new();
    board.set_cell(4, Mark::X);
    board.set_cell(0, Mark::O);
    board.set_cell(2, Mark::X);
    board.set_cell(6, Mark::O);

    let mut rng = GameRng::new(42);
    calculate_move(&board, Mark::X, Difficulty::Hard, &mut rng);
}

fn bench_full_self_play() {
    let mut state = GameState::new();
    let mut rng = GameRng::new(42);

    while state.status == GameStatus::InProgress {
        let position = calculate_move(&state.board, state.current_mark, Difficulty::Hard, &mut rng);
        state
            .place_mark(position)
            .expect("self-play move must be legal");
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("full_self_play", |b| b.iter(bench_full_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
