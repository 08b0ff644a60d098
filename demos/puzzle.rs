//! 8-puzzle solver demo.
//!
//! Run: cargo run --bin puzzle

use gridsearch_puzzle::{Board, ManhattanDistance, Solver};

fn main() {
    env_logger::init();

    let start = match Board::new([1, 2, 3, 4, 0, 6, 7, 5, 8]) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut solver = Solver::new();
    solve_and_print(&mut solver, start);

    println!();
    let scrambled = Board::GOAL.scrambled(&mut rand::rng(), 30);
    solve_and_print(&mut solver, scrambled);
}

fn solve_and_print(solver: &mut Solver, start: Board) {
    println!("{start}");
    if !start.is_solvable() {
        println!("No solution exists.");
        return;
    }
    match solver.solve(start, &ManhattanDistance) {
        Some(moves) => {
            let labels: Vec<String> = moves.iter().map(ToString::to_string).collect();
            println!("Moves to solve: [{}]", labels.join(", "));
            println!("Total steps: {}", moves.len());
        }
        None => println!("No solution found."),
    }
}
