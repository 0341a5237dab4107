use knapsack_lab::{Harness, HarnessBuilder};

#[test]
fn seeded_run_reports_every_size_in_order() {
    let harness = HarnessBuilder::new(vec![10, 20, 40]).with_seed(99).build();
    let report = harness.run().expect("exact solvers must agree");

    assert_eq!(report.entries.len(), 3);
    for (entry, &n) in report.entries.iter().zip(&[10usize, 20, 40]) {
        assert_eq!(entry.n, n);
        assert_eq!(entry.capacity, n as u64 * 50);
        assert!(entry.greedy_value <= entry.optimal);
        assert!(entry.quality > 0.0);
        assert!(entry.quality <= 1.0);
    }
}

#[test]
fn equal_seeds_reproduce_equal_values() {
    let first = HarnessBuilder::new(vec![15, 30])
        .with_seed(7)
        .build()
        .run()
        .unwrap();
    let second = HarnessBuilder::new(vec![15, 30])
        .with_seed(7)
        .build()
        .run()
        .unwrap();

    for (a, b) in first.entries.iter().zip(&second.entries) {
        assert_eq!(a.optimal, b.optimal);
        assert_eq!(a.greedy_value, b.greedy_value);
        assert_eq!(a.capacity, b.capacity);
    }
}

#[test]
fn series_accessors_cover_every_entry() {
    let report = Harness::new(vec![8, 16]).run().unwrap();
    assert_eq!(report.linear_series().len(), 2);
    assert_eq!(report.tabular_series().len(), 2);
    assert_eq!(report.greedy_series().len(), 2);

    let quality = report.quality_series();
    assert_eq!(quality.len(), 2);
    assert_eq!(quality[0].0, 8);
    assert_eq!(quality[1].0, 16);
}

#[test]
fn no_sizes_yield_an_empty_report() {
    let report = Harness::new(vec![]).run().unwrap();
    assert!(report.entries.is_empty());
    assert!(report.quality_series().is_empty());
}

#[test]
fn custom_capacity_factor_is_applied() {
    let report = HarnessBuilder::new(vec![12])
        .with_seed(3)
        .with_capacity_factor(10)
        .build()
        .run()
        .unwrap();
    assert_eq!(report.entries[0].capacity, 120);
}
