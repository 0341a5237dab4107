//! Example: comparative run of the three solvers.
//!
//! Run with:
//! `cargo run --example compare`

use knapsack_lab::HarnessBuilder;

fn main() {
    let sizes = vec![50, 100, 200, 300, 400];
    let harness = HarnessBuilder::new(sizes).with_seed(7).build();

    let report = match harness.run() {
        Ok(report) => report,
        Err(err) => {
            eprintln!("comparative run failed: {err}");
            std::process::exit(1);
        }
    };

    println!("n, capacity, linear_s, tabular_s, greedy_s, quality");
    for entry in &report.entries {
        println!(
            "{}, {}, {:.6}, {:.6}, {:.6}, {:.4}",
            entry.n,
            entry.capacity,
            entry.linear_time.as_secs_f64(),
            entry.tabular_time.as_secs_f64(),
            entry.greedy_time.as_secs_f64(),
            entry.quality
        );
    }

    // Raw series, ready for external charting.
    println!();
    println!("quality series (n, greedy/optimal): {:?}", report.quality_series());
}
