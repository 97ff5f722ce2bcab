//! Name/value pair encoding.
//!
//! Each pair is written as `name_len ++ value_len ++ name ++ value`, where both
//! lengths use the variable width prefix from the [`length`](super::length) module.
//! A block is simply the concatenation of its encoded pairs.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use super::length::{check_len, len_prefix_size, put_len};
use crate::protocol::SendError;

/// Returns the number of bytes `pack_pair(name, value)` produces.
#[inline]
pub fn encoded_pair_len(name: &[u8], value: &[u8]) -> usize {
    len_prefix_size(name.len()) + len_prefix_size(value.len()) + name.len() + value.len()
}

/// Encodes a single name/value pair.
///
/// # Errors
///
/// Returns [`SendError::LengthTooLarge`] if `name` or `value` is longer than
/// [`MAX_PAIR_LEN`](crate::protocol::MAX_PAIR_LEN).
///
/// # Example
///
/// ```
/// use micro_fcgi::codec::pack_pair;
///
/// let bytes = pack_pair(b"HOST", b"localhost").unwrap();
/// assert_eq!(&bytes[..], b"\x04\x09HOSTlocalhost");
/// ```
pub fn pack_pair(name: &[u8], value: &[u8]) -> Result<Bytes, SendError> {
    let mut dst = BytesMut::new();
    pack_pair_into(name, value, &mut dst)?;
    Ok(dst.freeze())
}

/// Encodes a single name/value pair, appending it to `dst`.
///
/// Both lengths are validated before anything is written, so `dst` is left
/// untouched on error.
///
/// # Errors
///
/// Returns [`SendError::LengthTooLarge`] if `name` or `value` is longer than
/// [`MAX_PAIR_LEN`](crate::protocol::MAX_PAIR_LEN).
pub fn pack_pair_into(name: &[u8], value: &[u8], dst: &mut BytesMut) -> Result<(), SendError> {
    check_len("name", name.len())?;
    check_len("value", value.len())?;

    dst.reserve(encoded_pair_len(name, value));
    put_len(name.len(), dst);
    put_len(value.len(), dst);
    dst.put_slice(name);
    dst.put_slice(value);
    Ok(())
}

/// Encodes a sequence of name/value pairs into one block, preserving order.
///
/// On error no partial block is returned.
///
/// # Errors
///
/// Returns [`SendError::LengthTooLarge`] for the first name or value longer than
/// [`MAX_PAIR_LEN`](crate::protocol::MAX_PAIR_LEN).
pub fn pack_pairs<I, N, V>(pairs: I) -> Result<Bytes, SendError>
where
    I: IntoIterator<Item = (N, V)>,
    N: AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    let mut dst = BytesMut::new();
    let mut count = 0usize;
    for (name, value) in pairs {
        pack_pair_into(name.as_ref(), value.as_ref(), &mut dst)?;
        count += 1;
    }
    trace!(pairs = count, block_size = dst.len(), "packed name/value pairs");
    Ok(dst.freeze())
}
