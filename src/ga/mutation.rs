//! Permutation mutation operators.
//!
//! Each operator perturbs a single tour in place and keeps it a valid
//! permutation. The random operators draw their indices from the supplied
//! generator and delegate to a deterministic counterpart that takes the
//! indices explicitly.
//!
//! | Operator | Random | Deterministic | Cost |
//! |---|---|---|---|
//! | Swap | [`swap_mutation`] | [`swap_at`] | O(1) |
//! | Insertion | [`insertion_mutation`] | [`insert_at`] | O(n) |
//! | Reversal | [`reversal_mutation`] | [`reverse_segment`] | O(n) |
//! | Block move | [`block_move_mutation`] | [`move_block`] | O(n) |
//! | Scramble | [`scramble_mutation`] | | O(n) |
//!
//! # References
//!
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use super::random_segment;
use rand::Rng;

/// The mutation operator applied to selected members of the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// Exchange two random positions.
    Swap,
    /// Move one element to a random position.
    Insertion,
    /// Reverse a random segment (2-opt move).
    #[default]
    Reversal,
    /// Move a random block to a random position.
    BlockMove,
    /// Shuffle a random segment.
    Scramble,
}

impl Mutation {
    /// All available mutation operators.
    pub const ALL: [Mutation; 5] = [
        Mutation::Swap,
        Mutation::Insertion,
        Mutation::Reversal,
        Mutation::BlockMove,
        Mutation::Scramble,
    ];

    /// Mutates a tour in place.
    pub fn apply<R: Rng>(&self, perm: &mut [usize], rng: &mut R) {
        match self {
            Mutation::Swap => swap_mutation(perm, rng),
            Mutation::Insertion => insertion_mutation(perm, rng),
            Mutation::Reversal => reversal_mutation(perm, rng),
            Mutation::BlockMove => block_move_mutation(perm, rng),
            Mutation::Scramble => scramble_mutation(perm, rng),
        }
    }
}

// ============================================================================
// Random operators
// ============================================================================

/// Swap mutation: exchange two positions drawn with replacement.
///
/// Drawing the same position twice leaves the tour unchanged.
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    swap_at(perm, i, j);
}

/// Insertion mutation: remove the element at a random index and reinsert it
/// at another random index.
pub fn insertion_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let from = rng.random_range(0..n);
    let to = rng.random_range(0..n);
    insert_at(perm, from, to);
}

/// Reversal mutation: reverse a random segment.
pub fn reversal_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let (start, stop) = random_segment(n, rng);
    reverse_segment(perm, start, stop);
}

/// Block move mutation: move a random block to a random insertion index.
///
/// If the insertion index falls inside the block, the tour is unchanged.
pub fn block_move_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let (start, stop) = random_segment(n, rng);
    let insertion = rng.random_range(0..n);
    move_block(perm, start, stop, insertion);
}

/// Scramble mutation: shuffle a random segment `[start, stop]` in place.
///
/// For each `i` in `start..stop`, swaps position `i` with a uniformly
/// chosen position in `[i, stop]`.
pub fn scramble_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let (start, stop) = random_segment(n, rng);
    for i in start..stop {
        let j = rng.random_range(i..=stop);
        perm.swap(i, j);
    }
}

// ============================================================================
// Deterministic moves
// ============================================================================

/// Exchanges the values at positions `i` and `j`.
pub fn swap_at(perm: &mut [usize], i: usize, j: usize) {
    perm.swap(i, j);
}

/// Removes the element at `from` and reinserts it at `to`.
///
/// Elements between the two positions shift by one: left when
/// `from < to`, right when `from > to`.
pub fn insert_at(perm: &mut [usize], from: usize, to: usize) {
    if from < to {
        perm[from..=to].rotate_left(1);
    } else if from > to {
        perm[to..=from].rotate_right(1);
    }
}

/// Reverses the segment `[start, stop]` in place.
///
/// Applying the same reversal twice restores the tour.
///
/// # Panics
/// Panics if `start > stop` or `stop` is out of bounds.
pub fn reverse_segment(perm: &mut [usize], start: usize, stop: usize) {
    perm[start..=stop].reverse();
}

/// Moves the block `[start, stop]` as a unit so that it sits at `insertion`.
///
/// - `insertion > stop`: the block shifts right until its last element
///   lands on `insertion`
/// - `insertion < start`: the block shifts left until its first element
///   lands on `insertion`
/// - `insertion` inside the block: no change
///
/// The result is the same as walking the block one adjacent swap at a time.
///
/// # Panics
/// Panics if `start > stop` or any index is out of bounds.
pub fn move_block(perm: &mut [usize], start: usize, stop: usize, insertion: usize) {
    let len = stop - start + 1;
    if insertion > stop {
        perm[start..=insertion].rotate_left(len);
    } else if insertion < start {
        perm[insertion..=stop].rotate_right(len);
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
    use rand::Rng;

    // ---- Swap ----

    #[test]
    fn test_swap_at() {
        let mut perm = vec![0, 1, 2, 3];
        swap_at(&mut perm, 0, 3);
        assert_eq!(perm, vec![3, 1, 2, 0]);
        swap_at(&mut perm, 2, 2);
        assert_eq!(perm, vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_swap_single_element() {
        let mut rng = create_rng(42);
        let mut perm = vec![0];
        swap_mutation(&mut perm, &mut rng);
        assert_eq!(perm, vec![0]);
    }

    // ---- Insertion ----

    #[test]
    fn test_insert_at_left_shift() {
        let mut perm = vec![0, 1, 2, 3, 4, 5];
        insert_at(&mut perm, 1, 4);
        assert_eq!(perm, vec![0, 2, 3, 4, 1, 5]);
    }

    #[test]
    fn test_insert_at_right_shift() {
        let mut perm = vec![0, 1, 2, 3, 4, 5];
        insert_at(&mut perm, 4, 1);
        assert_eq!(perm, vec![0, 4, 1, 2, 3, 5]);
    }

    #[test]
    fn test_insert_at_same_index() {
        let mut perm = vec![0, 1, 2];
        insert_at(&mut perm, 1, 1);
        assert_eq!(perm, vec![0, 1, 2]);
    }

    // ---- Reversal ----

    #[test]
    fn test_reverse_segment() {
        let mut perm = vec![0, 1, 2, 3, 4, 5];
        reverse_segment(&mut perm, 1, 4);
        assert_eq!(perm, vec![0, 4, 3, 2, 1, 5]);
    }

    #[test]
    fn test_reverse_self_inverse() {
        let original = vec![5, 3, 0, 4, 1, 2, 6];
        for start in 0..original.len() {
            for stop in start..original.len() {
                let mut perm = original.clone();
                reverse_segment(&mut perm, start, stop);
                reverse_segment(&mut perm, start, stop);
                assert_eq!(perm, original, "[{start}, {stop}]");
            }
        }
    }

    #[test]
    fn test_reversal_changes_eventually() {
        let mut rng = create_rng(42);
        let original = vec![0, 1, 2, 3, 4];
        let mut changed = false;
        for _ in 0..100 {
            let mut perm = original.clone();
            reversal_mutation(&mut perm, &mut rng);
            assert!(is_valid_permutation(&perm, 5));
            if perm != original {
                changed = true;
                break;
            }
        }
        assert!(changed, "reversal should change the tour eventually");
    }

    // ---- Block move ----

    #[test]
    fn test_move_block_right() {
        let mut perm = vec![0, 1, 2, 3, 4, 5, 6];
        move_block(&mut perm, 1, 2, 5);
        assert_eq!(perm, vec![0, 3, 4, 5, 1, 2, 6]);
    }

    #[test]
    fn test_move_block_left() {
        let mut perm = vec![0, 1, 2, 3, 4, 5, 6];
        move_block(&mut perm, 4, 5, 1);
        assert_eq!(perm, vec![0, 4, 5, 1, 2, 3, 6]);
    }

    #[test]
    fn test_move_block_inside_is_noop() {
        let original = vec![0, 1, 2, 3, 4, 5, 6];
        for insertion in 2..=5 {
            let mut perm = original.clone();
            move_block(&mut perm, 2, 5, insertion);
            assert_eq!(perm, original, "insertion {insertion} inside block");
        }
    }

    #[test]
    fn test_move_block_matches_adjacent_swap_walk() {
        // Reference: walk each block element one adjacent swap at a time.
        fn walk(perm: &mut [usize], start: usize, stop: usize, insertion: usize) {
            if insertion > stop {
                let k = insertion - stop;
                for i in (start..=stop).rev() {
                    for j in 0..k {
                        perm.swap(i + j, i + j + 1);
                    }
                }
            } else if insertion < start {
                let k = start - insertion;
                for i in start..=stop {
                    for j in 0..k {
                        perm.swap(i - j, i - j - 1);
                    }
                }
            }
        }

        let original: Vec<usize> = vec![6, 2, 7, 0, 3, 5, 1, 4];
        let n = original.len();
        for start in 0..n {
            for stop in start..n {
                for insertion in 0..n {
                    let mut expected = original.clone();
                    walk(&mut expected, start, stop, insertion);
                    let mut actual = original.clone();
                    move_block(&mut actual, start, stop, insertion);
                    assert_eq!(actual, expected, "block [{start},{stop}] to {insertion}");
                }
            }
        }
    }

    // ---- Scramble ----

    #[test]
    fn test_scramble_only_touches_segment() {
        let mut rng = create_rng(3);
        let original: Vec<usize> = (0..20).collect();
        for _ in 0..100 {
            let mut perm = original.clone();
            scramble_mutation(&mut perm, &mut rng);
            assert!(is_valid_permutation(&perm, 20));
            let first = perm.iter().zip(&original).position(|(a, b)| a != b);
            let last = perm.iter().zip(&original).rposition(|(a, b)| a != b);
            if let (Some(first), Some(last)) = (first, last) {
                let mut moved: Vec<usize> = perm[first..=last].to_vec();
                moved.sort_unstable();
                assert_eq!(moved, original[first..=last].to_vec());
            }
        }
    }

    // ---- Catalog ----

    #[test]
    fn test_catalog_default_is_reversal() {
        assert_eq!(Mutation::default(), Mutation::Reversal);
    }

    #[test]
    fn test_catalog_tiny_tours() {
        let mut rng = create_rng(42);
        for op in Mutation::ALL {
            let mut empty: Vec<usize> = vec![];
            op.apply(&mut empty, &mut rng);
            let mut one = vec![0];
            op.apply(&mut one, &mut rng);
            assert_eq!(one, vec![0]);
        }
    }

    // ---- Properties ----

    fn tour() -> impl Strategy<Value = (Vec<usize>, u64)> {
        (2usize..50).prop_flat_map(|n| {
            (Just((0..n).collect::<Vec<usize>>()).prop_shuffle(), any::<u64>())
        })
    }

    proptest! {
        #[test]
        fn prop_mutation_preserves_bijectivity((perm, seed) in tour()) {
            let n = perm.len();
            let mut rng = create_rng(seed);
            for op in Mutation::ALL {
                let mut mutated = perm.clone();
                for _ in 0..5 {
                    op.apply(&mut mutated, &mut rng);
                }
                prop_assert!(is_valid_permutation(&mutated, n), "{:?}: {:?}", op, mutated);
            }
        }

        #[test]
        fn prop_insert_at_moves_one_element(
            (perm, seed) in tour(),
        ) {
            let n = perm.len();
            let mut rng = create_rng(seed);
            let from = rng.random_range(0..n);
            let to = rng.random_range(0..n);
            let mut moved = perm.clone();
            insert_at(&mut moved, from, to);
            prop_assert_eq!(moved[to], perm[from]);
            prop_assert!(is_valid_permutation(&moved, n));
        }
    }
}
