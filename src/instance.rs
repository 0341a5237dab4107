//! Problem instances shared by all three solvers.
//!
//! An [`Instance`] is a plain data bundle: one weight and one utility per
//! item, plus the knapsack capacity. Shape invariants are checked once at
//! construction; solvers may then assume equal-length sequences and strictly
//! positive weights. Capacity is unsigned, so a negative capacity is
//! unrepresentable by type.

use crate::error::Error;

/// One item, viewed with its 1-based original id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: usize,
    pub weight: u64,
    pub utility: u64,
}

/// An immutable 0/1 knapsack instance.
#[derive(Clone, Debug)]
pub struct Instance {
    weights: Vec<u64>,
    utilities: Vec<u64>,
    capacity: u64,
}

impl Instance {
    /// Build an instance, rejecting malformed input before any solver runs.
    ///
    /// # Errors
    /// [`Error::LengthMismatch`] if the sequences differ in length,
    /// [`Error::ZeroWeight`] if any item weighs nothing.
    pub fn new(weights: Vec<u64>, utilities: Vec<u64>, capacity: u64) -> Result<Self, Error> {
        if weights.len() != utilities.len() {
            return Err(Error::LengthMismatch {
                weights: weights.len(),
                utilities: utilities.len(),
            });
        }
        if let Some(pos) = weights.iter().position(|&w| w == 0) {
            return Err(Error::ZeroWeight { id: pos + 1 });
        }
        Ok(Self {
            weights,
            utilities,
            capacity,
        })
    }

    /// Number of items n.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    pub fn utilities(&self) -> &[u64] {
        &self.utilities
    }

    /// Iterate the items in original order, ids starting at 1.
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.weights
            .iter()
            .zip(&self.utilities)
            .enumerate()
            .map(|(i, (&weight, &utility))| Item {
                id: i + 1,
                weight,
                utility,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_input() {
        let instance = Instance::new(vec![1, 2, 4, 5], vec![2, 3, 3, 4], 6).unwrap();
        assert_eq!(instance.len(), 4);
        assert_eq!(instance.capacity(), 6);
        assert!(!instance.is_empty());
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = Instance::new(vec![1, 2], vec![3], 10).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                weights: 2,
                utilities: 1
            }
        ));
    }

    #[test]
    fn rejects_zero_weight_with_one_based_id() {
        let err = Instance::new(vec![3, 0, 5], vec![1, 1, 1], 10).unwrap_err();
        assert!(matches!(err, Error::ZeroWeight { id: 2 }));
    }

    #[test]
    fn empty_instance_is_valid() {
        let instance = Instance::new(vec![], vec![], 7).unwrap();
        assert!(instance.is_empty());
        assert_eq!(instance.items().count(), 0);
    }

    #[test]
    fn items_carry_original_ids() {
        let instance = Instance::new(vec![9, 7], vec![10, 20], 16).unwrap();
        let items: Vec<_> = instance.items().collect();
        assert_eq!(
            items,
            vec![
                Item {
                    id: 1,
                    weight: 9,
                    utility: 10
                },
                Item {
                    id: 2,
                    weight: 7,
                    utility: 20
                },
            ]
        );
    }
}
