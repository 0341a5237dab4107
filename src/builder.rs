use crate::harness::{
    Harness, DEFAULT_CAPACITY_FACTOR, DEFAULT_SEED, DEFAULT_UTILITY_BOUND,
};

pub struct HarnessBuilder {
    sizes: Vec<usize>,
    seed: Option<u64>,
    capacity_factor: Option<u64>,
    utility_bound: Option<u64>,
}

impl HarnessBuilder {
    pub fn new(sizes: Vec<usize>) -> Self {
        Self {
            sizes,
            seed: None,
            capacity_factor: None,
            utility_bound: None,
        }
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn with_capacity_factor(mut self, factor: u64) -> Self {
        self.capacity_factor = Some(factor);
        self
    }
    pub fn with_utility_bound(mut self, bound: u64) -> Self {
        self.utility_bound = Some(bound);
        self
    }
    pub fn build(self) -> Harness {
        Harness::with_settings(
            self.sizes,
            self.seed.unwrap_or(DEFAULT_SEED),
            self.capacity_factor.unwrap_or(DEFAULT_CAPACITY_FACTOR),
            self.utility_bound.unwrap_or(DEFAULT_UTILITY_BOUND),
        )
    }
}
