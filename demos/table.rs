//! Example: full DP grid for the textbook instance.
//!
//! Run with:
//! `cargo run --example render_table`

use knapsack_lab::{solvers::tabular, Instance};

fn main() {
    // Capacity 6, four items: weights 1, 2, 4, 5 and utilities 2, 3, 3, 4.
    let instance = match Instance::new(vec![1, 2, 4, 5], vec![2, 3, 3, 4], 6) {
        Ok(instance) => instance,
        Err(err) => {
            eprintln!("invalid instance: {err}");
            std::process::exit(1);
        }
    };

    let solution = match tabular::solve(&instance) {
        Ok(solution) => solution,
        Err(err) => {
            eprintln!("solve failed: {err}");
            std::process::exit(1);
        }
    };

    println!("{}", solution.table.render());
    println!("optimal value: {}", solution.value);
    println!("chosen items:  {:?}", solution.chosen);
}
