//! Island counting demo.
//!
//! Run: cargo run --bin islands

use gridsearch_islands::{count_islands, Grid, Strategy};

const LAYOUT: &str = "
11000
11000
00100
00011
";

fn main() {
    env_logger::init();

    let grid = match Grid::parse(LAYOUT) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("{grid}");
    for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
        println!(
            "{strategy} - number of islands: {}",
            count_islands(&grid, strategy)
        );
    }
}
