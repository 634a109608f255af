//! Move-to-Front coding.
//!
//! Replaces each byte with its current position in a recency-ordered
//! list of all 256 byte values, then moves that byte to the front of
//! the list. Output length equals input length and there is no header.
//! After a BWT the coded stream is dominated by small values, which
//! suits a downstream entropy coder.

/// Move-to-front code a byte stream.
pub fn transform(data: &[u8]) -> Vec<u8> {
    let mut list: [u8; 256] = std::array::from_fn(|i| i as u8);
    let mut result = Vec::with_capacity(data.len());

    for &byte in data {
        let pos = list
            .iter()
            .position(|&b| b == byte)
            .expect("every byte value is present in the recency list");
        result.push(pos as u8);

        // Rotating the prefix moves the byte to the front and shifts
        // everything before it back by one.
        list[..=pos].rotate_right(1);
    }

    result
}

/// Invert a move-to-front coded stream.
pub fn inverse_transform(data: &[u8]) -> Vec<u8> {
    let mut list: [u8; 256] = std::array::from_fn(|i| i as u8);
    let mut result = Vec::with_capacity(data.len());

    for &pos in data {
        result.push(list[pos as usize]);
        list[..=pos as usize].rotate_right(1);
    }

    result
}
