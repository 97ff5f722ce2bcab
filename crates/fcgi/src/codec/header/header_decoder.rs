//! FastCGI record header decoder
//!
//! Only the first [`HEADER_LEN`] bytes of the input are examined; anything after
//! them belongs to the record body or to the following records.

use bytes::{Buf, BytesMut};
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::protocol::{HEADER_LEN, ParseError, RecordHeader};

/// Decodes a record header from the start of `buf`.
///
/// `buf` may be longer than a header, e.g. the start of a socket read. The
/// reserved byte is read but not surfaced.
///
/// # Errors
///
/// Returns [`ParseError::TruncatedBuffer`] if `buf` holds fewer than 8 bytes.
///
/// # Example
///
/// ```
/// use micro_fcgi::codec::unpack_header;
///
/// let header = unpack_header(&[1, 6, 0x01, 0x2C, 0x00, 0x08, 5, 0]).unwrap();
/// assert_eq!(header.into_tuple(), (1, 6, 300, 8, 5));
/// ```
pub fn unpack_header(buf: &[u8]) -> Result<RecordHeader, ParseError> {
    let Some(&[version, record_type, request_id_hi, request_id_lo, content_length_hi, content_length_lo, padding_length, _reserved]) =
        buf.first_chunk::<HEADER_LEN>()
    else {
        return Err(ParseError::truncated(HEADER_LEN - buf.len()));
    };

    Ok(RecordHeader {
        version,
        record_type,
        request_id: u16::from_be_bytes([request_id_hi, request_id_lo]),
        content_length: u16::from_be_bytes([content_length_hi, content_length_lo]),
        padding_length,
    })
}

/// Decoder for record headers implementing the [`Decoder`] trait.
///
/// Returns `Ok(None)` until a whole header is buffered, then consumes exactly
/// [`HEADER_LEN`] bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderDecoder;

impl Decoder for HeaderDecoder {
    type Item = RecordHeader;
    type Error = ParseError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.len() < HEADER_LEN {
            return Ok(None);
        }

        let header = unpack_header(src)?;
        src.advance(HEADER_LEN);
        trace!(
            record_type = header.record_type,
            request_id = header.request_id,
            content_length = header.content_length,
            "parsed record header"
        );
        Ok(Some(header))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{encode_header, pack_header};

    #[test]
    fn decode_reference_header() {
        let header = unpack_header(&[1, 6, 0x01, 0x2C, 0x00, 0x08, 5, 0]).unwrap();
        assert_eq!(header, RecordHeader::new(1, 6, 300, 8, 5));
    }

    #[test]
    fn reserved_byte_ignored_and_tail_untouched() {
        let header = unpack_header(&[1, 1, 0, 1, 0, 8, 0, 0xEE, 0xAA, 0xBB]).unwrap();
        assert_eq!(header.into_tuple(), (1, 1, 1, 8, 0));
    }

    #[test]
    fn short_buffers() {
        for len in 0..HEADER_LEN {
            let buf = vec![1u8; len];
            let error = unpack_header(&buf).unwrap_err();
            assert_eq!(error.missing_bytes(), Some(HEADER_LEN - len));
        }
    }

    #[test]
    fn round_trip() {
        let bytes_values = [0usize, 1, 127, 128, 255];
        let word_values = [0usize, 1, 255, 256, 300, 0x7FFF, 0x8000, 65535];

        for &byte in &bytes_values {
            for &word in &word_values {
                let bytes = pack_header(byte, 255 - byte, word, 65535 - word, byte).unwrap();
                let header = unpack_header(&bytes).unwrap();
                assert_eq!(
                    header.into_tuple(),
                    (byte as u8, (255 - byte) as u8, word as u16, (65535 - word) as u16, byte as u8)
                );
                assert_eq!(encode_header(&header), bytes);
            }
        }
    }

    #[test]
    fn decoder_waits_for_full_header() {
        let mut buf = BytesMut::from(&[1u8, 5, 0, 2, 0][..]);
        assert!(HeaderDecoder.decode(&mut buf).unwrap().is_none());
        assert_eq!(buf.len(), 5);

        buf.extend_from_slice(&[0, 0, 0, 0xAB]);
        let header = HeaderDecoder.decode(&mut buf).unwrap().unwrap();
        assert_eq!(header.request_id, 2);
        assert_eq!(&buf[..], &[0xAB]);
    }
}
