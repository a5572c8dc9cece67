//! Measure the greedy solver's fuel gap on random grids.
//!
//! Run: cargo run --bin compare

use rand::{Rng, RngExt, SeedableRng};
use trove_core::Matrix;
use trove_paths::{DpSolver, GreedySolver, Solver, index_chests};

/// Grid where every chest in `1..=p` occurs at least once.
fn random_grid(rng: &mut impl Rng, rows: i32, cols: i32, p: i32) -> Matrix {
    let data: Vec<Vec<i32>> = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    let i = r * cols + c;
                    if i < p { i + 1 } else { rng.random_range(1..=p) }
                })
                .collect()
        })
        .collect();
    Matrix::from_rows(rows, cols, &data).expect("generated shape is valid")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let mut solvers: Vec<(&str, Box<dyn Solver>)> = vec![
        ("optimal", Box::new(DpSolver::new())),
        ("nearest", Box::new(GreedySolver::new())),
        (
            "lookahead",
            Box::new(GreedySolver::with_lookahead(GreedySolver::DEFAULT_WEIGHT)),
        ),
    ];

    print!("{:>11} {:>4}", "grid", "p");
    for (name, _) in &solvers {
        print!(" {name:>12}");
    }
    println!();

    for &(rows, cols, p) in &[(5, 5, 3), (10, 10, 5), (20, 20, 10), (50, 50, 20), (100, 100, 40)] {
        let matrix = random_grid(&mut rng, rows, cols, p);
        let layers = index_chests(&matrix, p)?;

        print!("{rows:>7}x{cols:<3} {p:>4}");
        for (_, solver) in &mut solvers {
            let result = solver.solve(&layers)?;
            print!(" {:>12.5}", result.fuel);
        }
        println!();
    }
    Ok(())
}
