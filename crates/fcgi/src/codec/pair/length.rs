//! Variable-width length prefix used by name/value pairs.
//!
//! A length below 128 is a single byte with the top bit clear. Anything larger
//! takes four big-endian bytes with the top bit of the first byte set, which
//! leaves 31 bits for the value.

use bytes::BufMut;

use crate::ensure;
use crate::protocol::{MAX_PAIR_LEN, ParseError, SendError};

/// Largest length that fits the one byte form
const SHORT_LEN_MAX: usize = 0x7F;

/// Top bit of the first prefix byte, set for the four byte form
const LONG_LEN_FLAG: u8 = 0x80;

const LONG_LEN_SIZE: usize = 4;

/// Returns how many bytes the prefix for `len` occupies on the wire.
#[inline]
pub fn len_prefix_size(len: usize) -> usize {
    if len <= SHORT_LEN_MAX { 1 } else { LONG_LEN_SIZE }
}

pub(crate) fn check_len(field: &'static str, len: usize) -> Result<(), SendError> {
    ensure!(len <= MAX_PAIR_LEN, SendError::length_too_large(field, len));
    Ok(())
}

/// Writes the length prefix for `len` into `dst`.
///
/// # Errors
///
/// Returns [`SendError::LengthTooLarge`] if `len` exceeds [`MAX_PAIR_LEN`]; nothing is
/// written in that case.
pub fn encode_len<B: BufMut>(len: usize, dst: &mut B) -> Result<(), SendError> {
    check_len("length", len)?;
    put_len(len, dst);
    Ok(())
}

/// Writes a length already known to be within [`MAX_PAIR_LEN`].
#[inline]
pub(crate) fn put_len<B: BufMut>(len: usize, dst: &mut B) {
    if len <= SHORT_LEN_MAX {
        // fits in 7 bits
        dst.put_u8(len as u8);
    } else {
        let [b0, b1, b2, b3] = (len as u32).to_be_bytes();
        dst.put_slice(&[LONG_LEN_FLAG | (b0 & 0x7F), b1, b2, b3]);
    }
}

/// Reads one length prefix from the start of `buf`.
///
/// Returns the decoded length and the number of prefix bytes consumed.
///
/// # Errors
///
/// Returns [`ParseError::TruncatedBuffer`] with the number of missing bytes when `buf`
/// is empty, or when the first byte announces the four byte form and fewer than
/// three bytes follow it.
pub fn decode_len(buf: &[u8]) -> Result<(usize, usize), ParseError> {
    let Some(&first) = buf.first() else {
        return Err(ParseError::truncated(1));
    };

    if first & LONG_LEN_FLAG == 0 {
        return Ok((usize::from(first), 1));
    }

    let Some(&[b0, b1, b2, b3]) = buf.first_chunk::<LONG_LEN_SIZE>() else {
        return Err(ParseError::truncated(LONG_LEN_SIZE - buf.len()));
    };

    let len = u32::from_be_bytes([b0 & 0x7F, b1, b2, b3]);
    Ok((len as usize, LONG_LEN_SIZE))
}
