//! Shared allocation helpers for the table-based solvers.
//!
//! Both exact solvers size their storage through [`table_dims`] and obtain
//! it through [`try_zeroed`], so an instance that is too large surfaces as a
//! catchable error instead of an abort.

use crate::error::Error;

/// Compute `(capacity + 1, n + 1)` as addressable row/column counts.
///
/// The linear solver passes `n = 0` to size its single capacity-indexed
/// vector.
pub fn table_dims(n: usize, capacity: u64) -> Result<(usize, usize), Error> {
    let rows = capacity.saturating_add(1);
    let cols = (n as u64).saturating_add(1);
    let fits = capacity != u64::MAX
        && rows
            .checked_mul(cols)
            .map_or(false, |cells| usize::try_from(cells).is_ok())
        && usize::try_from(rows).is_ok();
    if !fits {
        return Err(Error::TableTooLarge { rows, cols });
    }
    Ok((rows as usize, n + 1))
}

/// Allocate a zero-filled value buffer without aborting on out-of-memory.
pub fn try_zeroed(cells: usize) -> Result<Vec<u64>, Error> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(cells)
        .map_err(|source| Error::AllocationFailed { cells, source })?;
    buf.resize(cells, 0);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::{table_dims, try_zeroed};
    use crate::error::Error;

    #[test]
    fn dims_for_small_instances() {
        assert_eq!(table_dims(4, 6).unwrap(), (7, 5));
        assert_eq!(table_dims(0, 0).unwrap(), (1, 1));
        assert_eq!(table_dims(0, 9).unwrap(), (10, 1));
    }

    #[test]
    fn dims_reject_unaddressable_tables() {
        assert!(matches!(
            table_dims(3, u64::MAX),
            Err(Error::TableTooLarge { .. })
        ));
        assert!(matches!(
            table_dims(usize::MAX, u64::MAX - 1),
            Err(Error::TableTooLarge { .. })
        ));
    }

    #[test]
    fn zeroed_buffer_is_zeroed() {
        let buf = try_zeroed(16).unwrap();
        assert_eq!(buf.len(), 16);
        assert!(buf.iter().all(|&v| v == 0));
    }

    #[test]
    fn impossible_allocation_is_reported_not_fatal() {
        let err = try_zeroed(usize::MAX).unwrap_err();
        assert!(matches!(err, Error::AllocationFailed { cells, .. } if cells == usize::MAX));
    }
}
