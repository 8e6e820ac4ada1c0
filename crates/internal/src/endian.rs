//! Byte-order helpers for multi-precision integers stored as byte strings
//!
//! Domain parameters are stored least-significant byte first. Published
//! curve constants and most wire formats are most-significant byte first.

/// Copy a little-endian integer into `out` as big-endian
///
/// The value is right-aligned in `out`; leading bytes are zero-filled.
/// Returns the number of bytes the value occupies (`le.len()`), or `None`
/// if `out` is shorter than `le`.
pub fn le_to_be_into(le: &[u8], out: &mut [u8]) -> Option<usize> {
    if out.len() < le.len() {
        return None;
    }

    let pad = out.len() - le.len();
    out[..pad].fill(0);
    for (dst, src) in out[pad..].iter_mut().zip(le.iter().rev()) {
        *dst = *src;
    }
    Some(le.len())
}

/// Copy a big-endian integer into `out` as little-endian
///
/// Higher bytes of `out` beyond the value are zero-filled. Returns `None` if
/// `out` is shorter than `be`.
pub fn be_to_le_into(be: &[u8], out: &mut [u8]) -> Option<usize> {
    if out.len() < be.len() {
        return None;
    }

    for (dst, src) in out.iter_mut().zip(be.iter().rev()) {
        *dst = *src;
    }
    out[be.len()..].fill(0);
    Some(be.len())
}

/// Number of significant bits in a little-endian integer
///
/// Zero (including the empty string) has bit length 0.
pub fn le_bit_length(le: &[u8]) -> usize {
    match le.iter().rposition(|&b| b != 0) {
        Some(top) => top * 8 + (8 - le[top].leading_zeros() as usize),
        None => 0,
    }
}
