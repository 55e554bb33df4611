//! Order-sensitive hash mixing.
//!
//! Handles hash by folding their id and generation into a single 64-bit
//! value. The mix must be order-sensitive so that `{id: a, gen: b}` and
//! `{id: b, gen: a}` do not collide by construction.

/// Fold `value` into `seed`, producing a new seed.
///
/// Golden-ratio increment plus a shift-xor fold of the previous seed, so
/// the result depends on both the values and the order they were mixed in.
/// Not a cryptographic hash; collisions across distinct inputs are
/// permitted, equal inputs always produce equal outputs.
pub fn combine(seed: u64, value: u64) -> u64 {
    seed ^ value
        .wrapping_add(0x9e37_79b9_7f4a_7c15)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}
