//! Table number allocation.
//!
//! New tables first fill the holes left by deleted tables, lowest first,
//! and only then extend past the current maximum.

use serde_json::Value;

use crate::errors::{DomainError, DomainResult};

/// Message returned for a missing, non-numeric or non-positive quantity
pub const QUANTITY_ERROR: &str = "Quantity is required and must be a positive number";

/// Compute the numbers for `quantity` new tables
///
/// Returns an ascending sequence of `quantity` distinct positive integers,
/// none of which appear in `existing`. Holes in `1..=max(existing)` are used
/// before numbers above the maximum. Zero and duplicate entries in `existing`
/// are ignored. Returns `None` when the plan would run past `u32::MAX`.
pub fn allocate(existing: &[u32], quantity: u32) -> Option<Vec<u32>> {
    let mut taken: Vec<u32> = existing.iter().copied().filter(|n| *n > 0).collect();
    taken.sort_unstable();
    taken.dedup();

    // The quantity-th free number is at most quantity + taken.len()
    if u64::from(quantity) + taken.len() as u64 > u64::from(u32::MAX) {
        return None;
    }

    let quantity = quantity as usize;
    let mut allocated = Vec::new();
    // Widened so the step past a stored u32::MAX cannot wrap
    let mut next = 1u64;

    // Linear walk over the sorted numbers, collecting the gaps between them
    for &number in &taken {
        while next < u64::from(number) && allocated.len() < quantity {
            allocated.push(u32::try_from(next).ok()?);
            next += 1;
        }
        if allocated.len() == quantity {
            return Some(allocated);
        }
        next = u64::from(number) + 1;
    }

    while allocated.len() < quantity {
        allocated.push(u32::try_from(next).ok()?);
        next += 1;
    }

    Some(allocated)
}

/// Check the allocation contract against the numbers it was computed from
pub fn verify_allocation(existing: &[u32], quantity: u32, allocated: &[u32]) -> bool {
    allocated.len() == quantity as usize
        && allocated.windows(2).all(|pair| pair[0] < pair[1])
        && allocated
            .iter()
            .all(|n| *n > 0 && !existing.contains(n))
}

/// Read the `quantity` field of a create request
///
/// Accepts any positive whole JSON number (`2` and `2.0` alike) that fits in
/// a `u32`. Strings, booleans, fractions and non-positive values are
/// rejected, so the check happens before any store access.
pub fn parse_quantity(value: Option<&Value>) -> DomainResult<u32> {
    value
        .and_then(whole_number)
        .filter(|q| *q > 0)
        .and_then(|q| u32::try_from(q).ok())
        .ok_or_else(|| DomainError::validation(QUANTITY_ERROR))
}

fn whole_number(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f > 0.0 && *f <= f64::from(u32::MAX))
            .map(|f| f as u64)
    })
}
