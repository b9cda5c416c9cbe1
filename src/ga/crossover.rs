//! Permutation crossover operators.
//!
//! Both operators recombine two parent tours **in place**: after the call
//! the two slices hold the children. They borrow the parents mutably for
//! the duration of the call only and keep nothing afterwards.
//!
//! # Operators
//!
//! - [`cycle_crossover`] (CX): exchanges the values of one random cycle
//! - [`order_crossover`] (OX): exchanges a segment, refills the rest in
//!   relative order
//!
//! # References
//!
//! - Oliver, Smith & Holland (1987), "A Study of Permutation Crossover
//!   Operators on the Traveling Salesman Problem"
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use super::random_segment;
use rand::Rng;

/// The crossover operator applied to consecutive pairs of the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Cycle crossover (CX).
    #[default]
    Cycle,
    /// Order crossover (OX).
    Order,
}

impl Crossover {
    /// All available crossover operators.
    pub const ALL: [Crossover; 2] = [Crossover::Cycle, Crossover::Order];

    /// Recombines two parents in place.
    ///
    /// # Panics
    /// Panics if the parents have different lengths.
    pub fn apply<R: Rng>(&self, parent1: &mut [usize], parent2: &mut [usize], rng: &mut R) {
        match self {
            Crossover::Cycle => cycle_crossover(parent1, parent2, rng),
            Crossover::Order => order_crossover(parent1, parent2, rng),
        }
    }
}

// ============================================================================
// Cycle crossover
// ============================================================================

/// Cycle crossover (CX) starting from a uniformly random index.
///
/// See [`cycle_crossover_from`].
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn cycle_crossover<R: Rng>(parent1: &mut [usize], parent2: &mut [usize], rng: &mut R) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    if parent1.is_empty() {
        return;
    }
    let start = rng.random_range(0..parent1.len());
    cycle_crossover_from(parent1, parent2, start);
}

/// Cycle crossover (CX) from a given start index.
///
/// # Algorithm
///
/// 1. Map every value of `parent1` to its index
/// 2. From `start`, repeatedly jump to the index in `parent1` of the value
///    `parent2` holds at the current index, until `start` comes around again
/// 3. Swap `parent1[i]` and `parent2[i]` for every index on that cycle
///
/// Positions off the cycle keep their values, so both children stay valid
/// permutations. Identical parents produce the cycle `{start}` and are left
/// unchanged.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths or `start` is out of range.
pub fn cycle_crossover_from(parent1: &mut [usize], parent2: &mut [usize], start: usize) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start < n, "start index {start} out of range for length {n}");

    let mut position = vec![0; n];
    for (i, &v) in parent1.iter().enumerate() {
        position[v] = i;
    }

    let mut in_cycle = vec![false; n];
    let mut index = start;
    while !in_cycle[index] {
        in_cycle[index] = true;
        index = position[parent2[index]];
    }

    for i in (0..n).filter(|&i| in_cycle[i]) {
        std::mem::swap(&mut parent1[i], &mut parent2[i]);
    }
}

// ============================================================================
// Order crossover
// ============================================================================

/// Order crossover (OX) over a uniformly random segment.
///
/// See [`order_crossover_segment`].
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn order_crossover<R: Rng>(parent1: &mut [usize], parent2: &mut [usize], rng: &mut R) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    if parent1.is_empty() {
        return;
    }
    let (start, end) = random_segment(parent1.len(), rng);
    order_crossover_segment(parent1, parent2, start, end);
}

/// Order crossover (OX) over the segment `[start, end]`.
///
/// # Algorithm
///
/// 1. For each parent, keep (in order) its values that do **not** occur in
///    the other parent's segment
/// 2. Swap the segments between the parents verbatim
/// 3. Refill each parent from `end + 1`, wrapping around to `start - 1`,
///    with its kept values
///
/// After the call, each parent's segment equals the other parent's segment
/// before the call.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths or `start > end` or
/// `end >= n`.
pub fn order_crossover_segment(
    parent1: &mut [usize],
    parent2: &mut [usize],
    start: usize,
    end: usize,
) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start <= end && end < n, "invalid segment [{start}, {end}] for length {n}");

    let mut in_segment1 = vec![false; n];
    let mut in_segment2 = vec![false; n];
    for i in start..=end {
        in_segment1[parent1[i]] = true;
        in_segment2[parent2[i]] = true;
    }

    let rest1: Vec<usize> = parent1.iter().copied().filter(|&v| !in_segment2[v]).collect();
    let rest2: Vec<usize> = parent2.iter().copied().filter(|&v| !in_segment1[v]).collect();

    parent1[start..=end].swap_with_slice(&mut parent2[start..=end]);

    let mut pos = (end + 1) % n;
    for (&v1, &v2) in rest1.iter().zip(&rest2) {
        parent1[pos] = v1;
        parent2[pos] = v2;
        pos = (pos + 1) % n;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tour::is_valid_permutation;
    use proptest::prelude::*;

    // ---- Cycle crossover ----

    #[test]
    fn test_cx_known_cycle() {
        let mut p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let mut p2 = vec![1, 2, 0, 4, 3, 6, 7, 5];
        cycle_crossover_from(&mut p1, &mut p2, 0);
        assert_eq!(p1, vec![1, 2, 0, 3, 4, 5, 6, 7]);
        assert_eq!(p2, vec![0, 1, 2, 4, 3, 6, 7, 5]);
    }

    #[test]
    fn test_cx_whole_permutation_cycle_swaps_parents() {
        let mut p1 = vec![0, 1, 2, 3];
        let mut p2 = vec![1, 2, 3, 0];
        cycle_crossover_from(&mut p1, &mut p2, 2);
        assert_eq!(p1, vec![1, 2, 3, 0]);
        assert_eq!(p2, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_cx_identical_parents_noop() {
        let mut rng = create_rng(42);
        let original = vec![3, 0, 4, 1, 2];
        for _ in 0..50 {
            let mut p1 = original.clone();
            let mut p2 = original.clone();
            cycle_crossover(&mut p1, &mut p2, &mut rng);
            assert_eq!(p1, original);
            assert_eq!(p2, original);
        }
    }

    #[test]
    fn test_cx_single_element() {
        let mut rng = create_rng(42);
        let mut p1 = vec![0];
        let mut p2 = vec![0];
        cycle_crossover(&mut p1, &mut p2, &mut rng);
        assert_eq!(p1, vec![0]);
        assert_eq!(p2, vec![0]);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_cx_length_mismatch_panics() {
        let mut rng = create_rng(42);
        cycle_crossover(&mut [0, 1, 2], &mut [1, 0], &mut rng);
    }

    // ---- Order crossover ----

    #[test]
    fn test_ox_known_segment() {
        let mut p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let mut p2 = vec![7, 6, 5, 4, 3, 2, 1, 0];
        order_crossover_segment(&mut p1, &mut p2, 2, 4);
        assert_eq!(p1, vec![6, 7, 5, 4, 3, 0, 1, 2]);
        assert_eq!(p2, vec![1, 0, 2, 3, 4, 7, 6, 5]);
    }

    #[test]
    fn test_ox_full_segment_swaps_parents() {
        let mut p1 = vec![0, 1, 2, 3];
        let mut p2 = vec![2, 3, 0, 1];
        order_crossover_segment(&mut p1, &mut p2, 0, 3);
        assert_eq!(p1, vec![2, 3, 0, 1]);
        assert_eq!(p2, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_ox_segment_invariant_every_segment() {
        let a = vec![4, 2, 7, 0, 5, 1, 6, 3];
        let b = vec![1, 6, 0, 3, 7, 2, 4, 5];
        let n = a.len();
        for start in 0..n {
            for end in start..n {
                let mut p1 = a.clone();
                let mut p2 = b.clone();
                order_crossover_segment(&mut p1, &mut p2, start, end);
                assert_eq!(&p1[start..=end], &b[start..=end]);
                assert_eq!(&p2[start..=end], &a[start..=end]);
                assert!(is_valid_permutation(&p1, n), "[{start},{end}] c1 {p1:?}");
                assert!(is_valid_permutation(&p2, n), "[{start},{end}] c2 {p2:?}");
            }
        }
    }

    #[test]
    fn test_ox_two_elements() {
        let mut rng = create_rng(42);
        for _ in 0..20 {
            let mut p1 = vec![0, 1];
            let mut p2 = vec![1, 0];
            order_crossover(&mut p1, &mut p2, &mut rng);
            assert!(is_valid_permutation(&p1, 2));
            assert!(is_valid_permutation(&p2, 2));
        }
    }

    // ---- Catalog ----

    #[test]
    fn test_catalog_dispatch() {
        let mut rng = create_rng(7);
        for op in Crossover::ALL {
            let mut p1: Vec<usize> = (0..10).collect();
            let mut p2: Vec<usize> = (0..10).rev().collect();
            op.apply(&mut p1, &mut p2, &mut rng);
            assert!(is_valid_permutation(&p1, 10), "{op:?} c1 {p1:?}");
            assert!(is_valid_permutation(&p2, 10), "{op:?} c2 {p2:?}");
        }
        assert_eq!(Crossover::default(), Crossover::Cycle);
    }

    // ---- Properties ----

    fn parents() -> impl Strategy<Value = (Vec<usize>, Vec<usize>, u64)> {
        (2usize..40).prop_flat_map(|n| {
            let identity: Vec<usize> = (0..n).collect();
            (
                Just(identity.clone()).prop_shuffle(),
                Just(identity).prop_shuffle(),
                any::<u64>(),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_crossover_preserves_bijectivity((a, b, seed) in parents()) {
            let n = a.len();
            let mut rng = create_rng(seed);
            for op in Crossover::ALL {
                let mut p1 = a.clone();
                let mut p2 = b.clone();
                op.apply(&mut p1, &mut p2, &mut rng);
                prop_assert!(is_valid_permutation(&p1, n));
                prop_assert!(is_valid_permutation(&p2, n));
            }
        }

        #[test]
        fn prop_cx_positions_keep_or_exchange((a, b, seed) in parents()) {
            let mut rng = create_rng(seed);
            let mut p1 = a.clone();
            let mut p2 = b.clone();
            cycle_crossover(&mut p1, &mut p2, &mut rng);
            for i in 0..a.len() {
                let kept = p1[i] == a[i] && p2[i] == b[i];
                let exchanged = p1[i] == b[i] && p2[i] == a[i];
                prop_assert!(kept || exchanged);
            }
        }
    }
}
