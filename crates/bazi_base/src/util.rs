//! Shared arithmetic for cycle indices.

/// Floored modulo: always in `0..n` for positive `n`, including negative `a`.
///
/// Cycle positions before an epoch (negative day offsets, years before
/// the reference year) must still land on a valid table index.
pub const fn floor_mod(a: i64, n: i64) -> i64 {
    a.rem_euclid(n)
}
