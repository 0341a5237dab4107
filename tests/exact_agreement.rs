use knapsack_lab::solvers::{greedy, linear, tabular};
use knapsack_lab::Instance;
use proptest::prelude::*;

fn instance_strategy() -> impl Strategy<Value = Instance> {
    (
        prop::collection::vec((1u64..30, 0u64..100), 0..12),
        0u64..120,
    )
        .prop_map(|(items, capacity)| {
            let weights = items.iter().map(|&(w, _)| w).collect();
            let utilities = items.iter().map(|&(_, u)| u).collect();
            Instance::new(weights, utilities, capacity).expect("strategy builds valid instances")
        })
}

proptest! {
    #[test]
    fn exact_solvers_agree(instance in instance_strategy()) {
        let linear_value = linear::solve(&instance).unwrap();
        let solution = tabular::solve(&instance).unwrap();
        prop_assert_eq!(linear_value, solution.value);
    }

    #[test]
    fn greedy_never_beats_optimal(instance in instance_strategy()) {
        let optimal = linear::solve(&instance).unwrap();
        let solution = greedy::solve(&instance);
        prop_assert!(solution.value <= optimal);
    }

    #[test]
    fn tabular_chosen_set_is_feasible_and_consistent(instance in instance_strategy()) {
        let solution = tabular::solve(&instance).unwrap();
        let weight: u64 = solution.chosen.iter().map(|&j| instance.weights()[j - 1]).sum();
        let utility: u64 = solution.chosen.iter().map(|&j| instance.utilities()[j - 1]).sum();
        prop_assert!(weight <= instance.capacity());
        prop_assert_eq!(utility, solution.value);
        prop_assert!(solution.chosen.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn greedy_chosen_set_is_feasible_and_consistent(instance in instance_strategy()) {
        let solution = greedy::solve(&instance);
        let weight: u64 = solution.chosen.iter().map(|&j| instance.weights()[j - 1]).sum();
        let utility: u64 = solution.chosen.iter().map(|&j| instance.utilities()[j - 1]).sum();
        prop_assert!(weight <= instance.capacity());
        prop_assert_eq!(utility, solution.value);
        prop_assert!(solution.chosen.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn repeated_solves_are_identical(instance in instance_strategy()) {
        prop_assert_eq!(
            linear::solve(&instance).unwrap(),
            linear::solve(&instance).unwrap()
        );

        let first = tabular::solve(&instance).unwrap();
        let second = tabular::solve(&instance).unwrap();
        prop_assert_eq!(first.value, second.value);
        prop_assert_eq!(first.chosen, second.chosen);

        prop_assert_eq!(greedy::solve(&instance), greedy::solve(&instance));
    }
}
