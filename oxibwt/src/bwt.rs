//! Burrows-Wheeler Transform.
//!
//! `transform` sorts the cyclic rotations of a block and emits the last
//! column of the sorted rotation matrix together with the row at which
//! the unrotated input landed. `inverse_transform` rebuilds the block in
//! linear time from that pair via a stable key-indexed counting sort
//! over the 256-byte alphabet; its tie-break (ascending original
//! position) matches the rotation sort's, which is what makes the pair
//! a true inverse.
//!
//! `encode`/`decode` wrap the pair in the serialized form: a 4-byte
//! big-endian row index followed by the last column. An empty block
//! serializes to an empty stream with no header.

use crate::error::{BwtError, Result};
use crate::suffix;

/// Perform the Burrows-Wheeler Transform.
/// Returns the last column of the sorted rotation matrix and the row
/// index holding the original string.
pub fn transform(data: &[u8]) -> (Vec<u8>, u32) {
    if data.is_empty() {
        return (Vec::new(), 0);
    }

    let n = data.len();
    let ranks = suffix::rank(data);

    let row = ranks
        .iter()
        .position(|&i| i == 0)
        .expect("offset 0 always present in a rotation permutation") as u32;

    // Last column: the byte preceding each rotation's start.
    let last_column = ranks.iter().map(|&i| data[(i + n - 1) % n]).collect();

    (last_column, row)
}

/// Perform the inverse Burrows-Wheeler Transform.
/// Reconstructs the original block from the last column and the row
/// index of the original string.
pub fn inverse_transform(data: &[u8], row: u32) -> Result<Vec<u8>> {
    if data.is_empty() {
        if row == 0 {
            return Ok(Vec::new());
        }
        return Err(BwtError::EmptyBody { index: row });
    }

    let n = data.len();
    if row as usize >= n {
        return Err(BwtError::IndexOutOfRange {
            index: row as usize,
            len: n,
        });
    }

    // Key-indexed counting: starts[b] is where byte value b begins in
    // the sorted first column.
    let mut counts = [0usize; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }

    let mut starts = [0usize; 256];
    let mut total = 0;
    for (start, &count) in starts.iter_mut().zip(counts.iter()) {
        *start = total;
        total += count;
    }

    // next[i] is the position in `data` the i-th sorted byte came from.
    // Placing equal bytes in input order keeps the mapping stable, the
    // same tie-break the rotation sort applied.
    let mut next = vec![0usize; n];
    let mut positions = starts;
    for (i, &byte) in data.iter().enumerate() {
        next[positions[byte as usize]] = i;
        positions[byte as usize] += 1;
    }

    // Follow the chain from the original row, emitting first-column
    // bytes; data[next[i]] is the sorted byte at row i.
    let mut result = Vec::with_capacity(n);
    let mut cur = next[row as usize];
    for _ in 0..n {
        result.push(data[cur]);
        cur = next[cur];
    }

    Ok(result)
}

/// Serialize the transform of `data`: 4 big-endian bytes holding the
/// original row index, then the last column. Empty input yields an
/// empty stream with no header.
pub fn encode(data: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let (last_column, row) = transform(data);
    let mut out = Vec::with_capacity(4 + last_column.len());
    out.extend_from_slice(&row.to_be_bytes());
    out.extend_from_slice(&last_column);
    out
}

/// Parse a serialized transform and invert it. An empty stream decodes
/// to the empty block; a stream shorter than the 4-byte header is a
/// format error.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    if data.len() < 4 {
        return Err(BwtError::TruncatedHeader {
            available: data.len(),
        });
    }

    let row = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
    inverse_transform(&data[4..], row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_empty() {
        let (last_column, row) = transform(b"");
        assert!(last_column.is_empty());
        assert_eq!(row, 0);
    }

    #[test]
    fn test_transform_single() {
        let (last_column, row) = transform(b"a");
        assert_eq!(last_column, b"a");
        assert_eq!(row, 0);
    }

    #[test]
    fn test_transform_two_bytes() {
        let (last_column, row) = transform(b"ba");
        assert_eq!(last_column, b"ba");
        assert_eq!(row, 1);
    }

    #[test]
    fn test_transform_abracadabra() {
        let (last_column, row) = transform(b"abracadabra!");
        assert_eq!(last_column, b"ard!rcaaaabb");
        assert_eq!(row, 3);
    }

    #[test]
    fn test_transform_banana() {
        let (last_column, row) = transform(b"banana");
        assert_eq!(last_column, b"nnbaaa");
        assert_eq!(row, 3);
    }

    #[test]
    fn test_roundtrip() {
        let test_cases = [
            b"hello world".as_slice(),
            b"abracadabra!",
            b"mississippi",
            b"aaaaaaaaaaaaaaaaaaaaaaaaa",
            b"abcde",
            b"the quick brown fox jumps over the lazy dog",
        ];

        for data in test_cases {
            let (last_column, row) = transform(data);
            let recovered = inverse_transform(&last_column, row).unwrap();
            assert_eq!(recovered, data, "Failed for: {:?}", data);
        }
    }

    #[test]
    fn test_transform_groups_similar() {
        let data = b"abababab";
        let (last_column, _) = transform(data);

        let mut runs = 1;
        for i in 1..last_column.len() {
            if last_column[i] != last_column[i - 1] {
                runs += 1;
            }
        }

        // The alternating input should collapse into few runs.
        assert!(runs <= 4, "BWT should group similar bytes");
    }

    #[test]
    fn test_inverse_row_out_of_range() {
        let err = inverse_transform(b"abc", 3).unwrap_err();
        assert!(matches!(err, BwtError::IndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn test_inverse_nonzero_row_empty_body() {
        let err = inverse_transform(b"", 1).unwrap_err();
        assert!(matches!(err, BwtError::EmptyBody { index: 1 }));
    }

    #[test]
    fn test_encode_layout() {
        let encoded = encode(b"ba");
        assert_eq!(encoded, [0, 0, 0, 1, b'b', b'a']);
    }

    #[test]
    fn test_encode_empty_has_no_header() {
        assert!(encode(b"").is_empty());
    }

    #[test]
    fn test_decode_truncated_header() {
        for len in 1..4 {
            let err = decode(&vec![0u8; len]).unwrap_err();
            assert!(
                matches!(err, BwtError::TruncatedHeader { available } if available == len),
                "expected truncated-header error for {} bytes",
                len
            );
        }
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode(b"").unwrap().is_empty());
    }

    #[test]
    fn test_serialized_roundtrip() {
        let data = b"how many boards would the mongols hoard";
        assert_eq!(decode(&encode(data)).unwrap(), data);
    }
}
