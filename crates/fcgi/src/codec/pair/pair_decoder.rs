//! Name/value pair decoding.
//!
//! A block has no outer count or terminator: pairs are read back to back until
//! the buffer is exhausted. Every length is checked against the bytes that are
//! actually left before anything is sliced, so malformed input surfaces as
//! [`ParseError::TruncatedBuffer`] rather than an out of bounds read.

use bytes::Bytes;
use tracing::{debug, trace};

use super::length::decode_len;
use crate::ensure;
use crate::protocol::{Pair, ParseError};

/// Lazy, borrowing iterator over the pairs of an encoded block.
///
/// Yields `(name, value)` slices pointing into the original buffer. After the
/// first error the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    remaining: &'a [u8],
}

impl<'a> Pairs<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { remaining: buf }
    }

    /// The bytes not yet consumed
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        self.remaining
    }

    fn next_pair(&mut self) -> Result<(&'a [u8], &'a [u8]), ParseError> {
        let buf = self.remaining;

        let (name_len, name_prefix) = decode_len(buf)?;
        let (value_len, value_prefix) = decode_len(&buf[name_prefix..])?;

        let payload = &buf[name_prefix + value_prefix..];
        let payload_len = name_len + value_len;
        ensure!(payload.len() >= payload_len, ParseError::truncated(payload_len - payload.len()));

        let (name, rest) = payload.split_at(name_len);
        let (value, rest) = rest.split_at(value_len);
        self.remaining = rest;
        Ok((name, value))
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = Result<(&'a [u8], &'a [u8]), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }

        let result = self.next_pair();
        if let Err(e) = &result {
            debug!(cause = %e, remaining = self.remaining.len(), "malformed name/value block");
            self.remaining = &[];
        }
        Some(result)
    }
}

impl std::iter::FusedIterator for Pairs<'_> {}

/// Decodes a whole name/value block into owned pairs, preserving order.
///
/// An empty buffer yields an empty sequence.
///
/// # Errors
///
/// - [`ParseError::TruncatedBuffer`] if a length prefix or a pair payload runs past the
///   end of `buf`; the error carries the number of missing bytes
/// - [`ParseError::AllocationFailure`] if the output could not be allocated
///
/// No partially decoded sequence is returned on error.
///
/// # Example
///
/// ```
/// use micro_fcgi::codec::{pack_pair, unpack_pairs};
///
/// let block = pack_pair(b"REQUEST_METHOD", b"GET").unwrap();
/// let pairs = unpack_pairs(&block).unwrap();
/// assert_eq!(&pairs[0].name()[..], b"REQUEST_METHOD");
/// assert_eq!(&pairs[0].value()[..], b"GET");
/// ```
pub fn unpack_pairs(buf: &[u8]) -> Result<Vec<Pair>, ParseError> {
    collect_pairs(buf, try_copy)
}

/// Same as [`unpack_pairs`] but the returned pairs share `buf`'s storage instead of copying it.
///
/// # Errors
///
/// Returns [`ParseError::TruncatedBuffer`] if the block ends inside a pair, or
/// [`ParseError::AllocationFailure`] if the pair list could not be allocated.
pub fn unpack_pairs_shared(buf: &Bytes) -> Result<Vec<Pair>, ParseError> {
    collect_pairs(buf, |slice| Ok(buf.slice_ref(slice)))
}

fn collect_pairs<F>(buf: &[u8], mut to_bytes: F) -> Result<Vec<Pair>, ParseError>
where
    F: FnMut(&[u8]) -> Result<Bytes, ParseError>,
{
    let mut pairs = Vec::new();
    for item in Pairs::new(buf) {
        let (name, value) = item?;
        pairs.try_reserve(1)?;
        pairs.push(Pair::new(to_bytes(name)?, to_bytes(value)?));
    }

    trace!(pairs = pairs.len(), block_size = buf.len(), "unpacked name/value pairs");
    Ok(pairs)
}

fn try_copy(slice: &[u8]) -> Result<Bytes, ParseError> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(slice.len())?;
    vec.extend_from_slice(slice);
    Ok(Bytes::from(vec))
}
