//! Solve one hunt from a JSON request.
//!
//! Run: cargo run --bin solve -- request.json
//!
//! The request mirrors what the HTTP layer accepts:
//! `{"n": 3, "m": 3, "p": 3, "matrix": [[3,2,2],[2,2,2],[2,2,1]]}`.
//! With no file argument the request is read from stdin; `--json` prints the
//! full comparison as JSON instead of the summary.

use std::io::Read;

use serde::Deserialize;
use trove_core::Matrix;

#[derive(Deserialize)]
struct Request {
    n: i32,
    m: i32,
    p: i32,
    matrix: Vec<Vec<i32>>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut json = false;
    let mut input = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            input = Some(arg);
        }
    }

    let raw = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let request: Request = serde_json::from_str(&raw)?;
    let matrix = Matrix::from_rows(request.n, request.m, &request.matrix)?;
    let comparison = trove_paths::compare(&matrix, request.p)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    println!("optimal fuel: {:.5}", comparison.optimal.fuel);
    for step in &comparison.optimal.path {
        println!("  {} chest {}", step.pos, step.chest);
    }
    println!(
        "greedy fuel:  {:.5} (+{:.5}, {:.1}%)",
        comparison.greedy.fuel,
        comparison.gap,
        comparison.gap_ratio * 100.0
    );
    Ok(())
}
