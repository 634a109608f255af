//! Circular suffix ranking for the Burrows-Wheeler Transform.
//!
//! Ranks the n cyclic rotations of a byte string in lexicographic order
//! without materializing any rotated copy: rotations are compared by
//! modular indexing into the original buffer, at most n byte comparisons
//! per pair. Rotations that compare equal over a full cycle (periodic
//! input) are ordered by ascending start offset, the same tie-break the
//! inverse transform's counting sort uses.

use crate::error::{BwtError, Result};
use std::cmp::Ordering;

/// Sorted order of the cyclic rotations of a byte string.
///
/// Position `i` of the rank array holds the start offset of the rotation
/// occupying sorted position `i`; the ranks always form a permutation of
/// `0..len`.
#[derive(Debug, Clone)]
pub struct CircularSuffixes {
    ranks: Vec<usize>,
}

impl CircularSuffixes {
    /// Sort the cyclic rotations of `data`.
    pub fn new(data: &[u8]) -> Self {
        Self { ranks: rank(data) }
    }

    /// Length of the underlying string.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether the underlying string is empty.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Start offset of the rotation at sorted position `i`.
    pub fn index(&self, i: usize) -> Result<usize> {
        self.ranks.get(i).copied().ok_or(BwtError::IndexOutOfRange {
            index: i,
            len: self.ranks.len(),
        })
    }

    /// All start offsets in sorted order.
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }
}

/// Rank the cyclic rotations of `data` in lexicographic order.
/// Returns the start offsets of the rotations, sorted.
pub fn rank(data: &[u8]) -> Vec<usize> {
    let n = data.len();
    let mut order: Vec<usize> = (0..n).collect();
    if n < 2 {
        return order;
    }

    // Pack the first few bytes of each rotation into an integer key so
    // most comparisons resolve without the full cyclic walk.
    let key_len = n.min(4);
    let mut keys: Vec<u32> = Vec::with_capacity(n);
    for i in 0..n {
        let mut key = 0u32;
        for j in 0..key_len {
            key = (key << 8) | u32::from(data[(i + j) % n]);
        }
        keys.push(key);
    }

    order.sort_by(|&a, &b| match keys[a].cmp(&keys[b]) {
        Ordering::Equal => compare_rotations(data, a, b, key_len),
        other => other,
    });

    order
}

/// Compare the rotations starting at `a` and `b` from position `from`
/// onward, wrapping modulo the string length. A full equal cycle falls
/// back to the start offsets themselves.
fn compare_rotations(data: &[u8], a: usize, b: usize, from: usize) -> Ordering {
    let n = data.len();
    for k in from..n {
        let ord = data[(a + k) % n].cmp(&data[(b + k) % n]);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.cmp(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_empty() {
        assert!(rank(b"").is_empty());
    }

    #[test]
    fn test_rank_single() {
        assert_eq!(rank(b"z"), vec![0]);
    }

    #[test]
    fn test_rank_known_order() {
        // Rotations of "cabacb" sort as: abacbc(1), acbcab(3),
        // bacbca(2), bcabac(5), cabacb(0), cbcaba(4).
        assert_eq!(rank(b"cabacb"), vec![1, 3, 2, 5, 0, 4]);
    }

    #[test]
    fn test_rank_is_permutation() {
        let data = b"mississippi";
        let mut ranks = rank(data);
        ranks.sort_unstable();
        let expected: Vec<usize> = (0..data.len()).collect();
        assert_eq!(ranks, expected);
    }

    #[test]
    fn test_rank_identical_bytes_is_identity() {
        // All rotations of a constant string are equal; the tie-break
        // must keep ascending start offsets.
        let data = vec![b'a'; 25];
        let expected: Vec<usize> = (0..25).collect();
        assert_eq!(rank(&data), expected);
    }

    #[test]
    fn test_rank_periodic_input() {
        // "abab" has period 2: rotations 0 and 2 are equal, as are 1
        // and 3. Equal pairs keep ascending offset order.
        assert_eq!(rank(b"abab"), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_index_accessor() {
        let suffixes = CircularSuffixes::new(b"cabacb");
        assert_eq!(suffixes.len(), 6);
        assert_eq!(suffixes.index(0).unwrap(), 1);
        assert_eq!(suffixes.index(5).unwrap(), 4);
    }

    #[test]
    fn test_index_out_of_range() {
        let suffixes = CircularSuffixes::new(b"abc");
        let err = suffixes.index(3).unwrap_err();
        assert!(matches!(err, BwtError::IndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn test_empty_suffixes() {
        let suffixes = CircularSuffixes::new(b"");
        assert!(suffixes.is_empty());
        assert!(suffixes.index(0).is_err());
    }
}
