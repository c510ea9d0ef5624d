//! Sample decoding and bijection validation
//!
//! Decoding and validation stay separate on purpose: a malformed-length
//! sample, a decoding result, and a constraint violation are three different
//! things, and the selector wants to know which one it is looking at.

use thiserror::Error;

/// Which one-hot constraint a decoded candidate violates.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    #[error("expected {expected} pairs, got {got}")]
    WrongPairCount { expected: usize, got: usize },

    #[error("pair ({0}, {1}) out of range")]
    OutOfRange(usize, usize),

    #[error("agent {0} assigned more than once")]
    RowDuplicated(usize),

    #[error("agent {0} has no assignment")]
    RowMissing(usize),

    #[error("slot {0} assigned more than once")]
    ColumnDuplicated(usize),

    #[error("slot {0} is unassigned")]
    ColumnMissing(usize),
}

/// Decode a length-N² bit vector into (agent, slot) pairs.
///
/// Pure index arithmetic, no validation: bit at position `p` maps to
/// `(p / n, p % n)`. Caller is expected to pass a vector of length `n * n`;
/// extra positions would decode to out-of-range rows, which
/// [`validate_assignment`] rejects.
pub fn decode_sample(bits: &[u8], n: usize) -> Vec<(usize, usize)> {
    bits.iter()
        .enumerate()
        .filter(|(_, b)| **b != 0)
        .map(|(p, _)| (p / n, p % n))
        .collect()
}

/// Check that a decoded pair list is a true bijection on `0..n`.
///
/// Exactly n pairs, every agent exactly once, every slot exactly once. The
/// pair-count check also defends against samplers emitting duplicate cells.
pub fn validate_assignment(
    pairs: &[(usize, usize)],
    n: usize,
) -> Result<(), ConstraintViolation> {
    if pairs.len() != n {
        return Err(ConstraintViolation::WrongPairCount { expected: n, got: pairs.len() });
    }

    let mut row_counts = vec![0usize; n];
    let mut col_counts = vec![0usize; n];
    for &(i, j) in pairs {
        if i >= n || j >= n {
            return Err(ConstraintViolation::OutOfRange(i, j));
        }
        row_counts[i] += 1;
        col_counts[j] += 1;
    }

    for (i, &c) in row_counts.iter().enumerate() {
        if c > 1 {
            return Err(ConstraintViolation::RowDuplicated(i));
        }
        if c == 0 {
            return Err(ConstraintViolation::RowMissing(i));
        }
    }
    for (j, &c) in col_counts.iter().enumerate() {
        if c > 1 {
            return Err(ConstraintViolation::ColumnDuplicated(j));
        }
        if c == 0 {
            return Err(ConstraintViolation::ColumnMissing(j));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubo::flat_index;
    use crate::sampler::BitVector;

    fn bits_for_permutation(perm: &[usize]) -> BitVector {
        let n = perm.len();
        let mut bits = vec![0u8; n * n];
        for (i, &j) in perm.iter().enumerate() {
            bits[flat_index(i, j, n)] = 1;
        }
        bits
    }

    #[test]
    fn test_decode_permutation_round_trip() {
        let perm = [2usize, 0, 1];
        let pairs = decode_sample(&bits_for_permutation(&perm), 3);
        assert_eq!(pairs, vec![(0, 2), (1, 0), (2, 1)]);
    }

    #[test]
    fn test_decode_all_zero() {
        let pairs = decode_sample(&vec![0u8; 9], 3);
        assert!(pairs.is_empty(), "no set bits should decode to no pairs");
    }

    #[test]
    fn test_validate_accepts_bijection() {
        assert_eq!(validate_assignment(&[(0, 1), (1, 0), (2, 2)], 3), Ok(()));
    }

    #[test]
    fn test_validate_wrong_pair_count() {
        assert_eq!(
            validate_assignment(&[(0, 0)], 2),
            Err(ConstraintViolation::WrongPairCount { expected: 2, got: 1 })
        );
        assert_eq!(
            validate_assignment(&[], 1),
            Err(ConstraintViolation::WrongPairCount { expected: 1, got: 0 })
        );
    }

    #[test]
    fn test_validate_row_duplicated() {
        assert_eq!(
            validate_assignment(&[(0, 0), (0, 1)], 2),
            Err(ConstraintViolation::RowDuplicated(0))
        );
    }

    #[test]
    fn test_validate_column_duplicated() {
        assert_eq!(
            validate_assignment(&[(0, 1), (1, 1)], 2),
            Err(ConstraintViolation::ColumnDuplicated(1))
        );
    }

    #[test]
    fn test_validate_out_of_range() {
        assert_eq!(
            validate_assignment(&[(0, 0), (1, 5)], 2),
            Err(ConstraintViolation::OutOfRange(1, 5))
        );
    }

    #[test]
    fn test_validate_via_decoded_bits() {
        // Row 0 has two set bits; pair count still equals n, so the row
        // check has to catch it.
        let bits = vec![1, 1, 0, 0, 0, 0, 0, 0, 1];
        let pairs = decode_sample(&bits, 3);
        assert_eq!(pairs.len(), 3);
        assert_eq!(validate_assignment(&pairs, 3), Err(ConstraintViolation::RowDuplicated(0)));
    }

    #[test]
    fn test_validate_missing_row_with_padded_count() {
        // Row 1 never appears; row 0 absorbs the extra pair, so the
        // duplicate check reports first (with exactly n pairs, a missing
        // row always implies a duplicated one).
        assert_eq!(
            validate_assignment(&[(0, 0), (0, 1), (2, 2)], 3),
            Err(ConstraintViolation::RowDuplicated(0))
        );
    }

    #[test]
    fn test_validate_missing_row_reported_at_lowest_index() {
        // Row 0 absent, row 1 doubled: the scan hits the missing row first.
        assert_eq!(
            validate_assignment(&[(1, 0), (1, 1), (2, 2)], 3),
            Err(ConstraintViolation::RowMissing(0))
        );
    }

    #[test]
    fn test_validate_missing_column_reported_at_lowest_index() {
        // Rows form a valid cover but column 0 is never used.
        assert_eq!(
            validate_assignment(&[(0, 1), (1, 1), (2, 2)], 3),
            Err(ConstraintViolation::ColumnMissing(0))
        );
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_permutation(max_n: usize) -> impl Strategy<Value = Vec<usize>> {
            (1..=max_n).prop_flat_map(|n| Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
        }

        proptest! {
            /// Property: one-hot encoding of any permutation decodes back to
            /// exactly that permutation and validates
            #[test]
            fn prop_permutation_round_trip(perm in arb_permutation(8)) {
                let n = perm.len();
                let pairs = decode_sample(&bits_for_permutation(&perm), n);
                prop_assert_eq!(pairs.len(), n);
                for (i, &(row, col)) in pairs.iter().enumerate() {
                    prop_assert_eq!(row, i);
                    prop_assert_eq!(col, perm[i]);
                }
                prop_assert_eq!(validate_assignment(&pairs, n), Ok(()));
            }

            /// Property: dropping any single pair from a bijection is caught
            #[test]
            fn prop_missing_pair_rejected(perm in arb_permutation(6)) {
                let n = perm.len();
                let mut pairs = decode_sample(&bits_for_permutation(&perm), n);
                pairs.pop();
                prop_assert!(validate_assignment(&pairs, n).is_err());
            }
        }
    }
}
