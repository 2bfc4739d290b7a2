//! Weighted priority classification.
//!
//! The distribution is a declared table of `(class, weight)` rows. Sampling
//! walks the cumulative sum and returns the first row whose threshold lies
//! above a uniform `[0, 1)` draw.

use rand::Rng;

use crate::lead::PriorityClass;

/// hot 30% / warm 30% / new 30% / closed 10% (thresholds 0.3, 0.6, 0.9, 1.0).
pub const PRIORITY_DISTRIBUTION: &[(PriorityClass, f64)] = &[
    (PriorityClass::Hot, 0.3),
    (PriorityClass::Warm, 0.3),
    (PriorityClass::New, 0.3),
    (PriorityClass::Closed, 0.1),
];

/// Map a uniform draw `u` in `[0, 1)` onto the table.
///
/// Draws at or past the final cumulative threshold (float rounding) land on
/// the last row. Returns `None` only for an empty table.
pub fn pick<T: Copy>(table: &[(T, f64)], u: f64) -> Option<T> {
    let mut acc = 0.0;
    for &(item, weight) in table {
        acc += weight;
        if u < acc {
            return Some(item);
        }
    }
    table.last().map(|&(item, _)| item)
}

pub fn sample<T: Copy, R: Rng + ?Sized>(rng: &mut R, table: &[(T, f64)]) -> Option<T> {
    pick(table, rng.random::<f64>())
}

/// Draw a priority class from [`PRIORITY_DISTRIBUTION`].
pub fn sample_priority<R: Rng + ?Sized>(rng: &mut R) -> PriorityClass {
    sample(rng, PRIORITY_DISTRIBUTION).unwrap_or(PriorityClass::New)
}
