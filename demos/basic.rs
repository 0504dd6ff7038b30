//! Basic example of driving the puzzle engine

use tileslide_core::{Direction, Grid, Shuffler, ShufflerConfig};

fn main() {
    // Start from the solved board
    let mut grid = Grid::new();
    println!("Solved board:");
    println!("{}", grid);

    // Scramble it with a modest move budget
    let mut shuffler = Shuffler::with_config(ShufflerConfig { move_count: 30 });
    let applied = shuffler.shuffle(&mut grid);
    println!("Scrambled ({} of 30 attempted moves applied):", applied);
    println!("{}", grid);

    // Slide a few tiles by hand
    for direction in [Direction::Up, Direction::Left] {
        let moved = grid.slide(direction);
        println!(
            "slide {}: {}",
            direction,
            if moved { "ok" } else { "out of bounds" }
        );
    }
    println!("{}", grid);
    println!("Solved: {}", grid.is_solved());
}
