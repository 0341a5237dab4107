#![cfg(feature = "heavy")]
use knapsack_lab::solvers::{greedy, linear, tabular};
use knapsack_lab::Instance;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_instance(rng: &mut StdRng, n: usize, capacity: u64) -> Instance {
    let weight_bound = (capacity / 10).max(2);
    let weights = (0..n).map(|_| rng.gen_range(1..weight_bound)).collect();
    let utilities = (0..n).map(|_| rng.gen_range(1..1_000)).collect();
    Instance::new(weights, utilities, capacity).unwrap()
}

#[test]
fn heavy_stress_exact_agreement_medium() {
    let mut rng = StdRng::seed_from_u64(123);
    let instance = random_instance(&mut rng, 2_000, 20_000);

    let linear_value = linear::solve(&instance).unwrap();
    let solution = tabular::solve(&instance).unwrap();
    assert_eq!(linear_value, solution.value);

    let approx = greedy::solve(&instance);
    assert!(approx.value <= linear_value);
}
