//! FastCGI record header encoder
//!
//! Wire layout, 8 bytes:
//!
//! ```text
//! [version][type][request_id hi][request_id lo][content_length hi][content_length lo][padding_length][reserved = 0]
//! ```

use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;

use crate::protocol::{HEADER_LEN, RecordHeader, SendError};

const U8_MAX: usize = u8::MAX as usize;
const U16_MAX: usize = u16::MAX as usize;

/// Serializes a header into its 8 wire bytes, 16-bit fields in network byte order.
#[inline]
pub fn encode_header(header: &RecordHeader) -> [u8; HEADER_LEN] {
    let [request_id_hi, request_id_lo] = header.request_id.to_be_bytes();
    let [content_length_hi, content_length_lo] = header.content_length.to_be_bytes();
    [
        header.version,
        header.record_type,
        request_id_hi,
        request_id_lo,
        content_length_hi,
        content_length_lo,
        header.padding_length,
        0,
    ]
}

/// Builds header bytes from caller-side integers.
///
/// # Errors
///
/// Returns [`SendError::ValueOutOfRange`] naming the first field that does not fit
/// its width: 8 bits for `version`, `record_type` and `padding_length`, 16 bits for
/// `request_id` and `content_length`. Values are never truncated.
///
/// # Example
///
/// ```
/// use micro_fcgi::codec::pack_header;
///
/// let bytes = pack_header(1, 6, 300, 8, 5).unwrap();
/// assert_eq!(bytes, [1, 6, 0x01, 0x2C, 0x00, 0x08, 5, 0]);
/// assert!(pack_header(1, 6, 70_000, 8, 5).is_err());
/// ```
pub fn pack_header(
    version: usize,
    record_type: usize,
    request_id: usize,
    content_length: usize,
    padding_length: usize,
) -> Result<[u8; HEADER_LEN], SendError> {
    let header = RecordHeader {
        version: narrow("version", version, U8_MAX)?,
        record_type: narrow("record_type", record_type, U8_MAX)?,
        request_id: narrow("request_id", request_id, U16_MAX)?,
        content_length: narrow("content_length", content_length, U16_MAX)?,
        padding_length: narrow("padding_length", padding_length, U8_MAX)?,
    };
    Ok(encode_header(&header))
}

fn narrow<T: TryFrom<usize>>(field: &'static str, value: usize, max: usize) -> Result<T, SendError> {
    T::try_from(value).map_err(|_overflow| SendError::value_out_of_range(field, value, max))
}

/// Encoder for record headers implementing the [`Encoder`] trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderEncoder;

impl Encoder<RecordHeader> for HeaderEncoder {
    type Error = SendError;

    fn encode(&mut self, item: RecordHeader, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.put_slice(&encode_header(&item));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let header = RecordHeader::new(1, 6, 300, 8, 5);
        assert_eq!(encode_header(&header), [1, 6, 0x01, 0x2C, 0x00, 0x08, 5, 0]);
    }

    #[test]
    fn big_endian_fields() {
        let bytes = pack_header(0xFF, 0xFE, 0xABCD, 0x1234, 0xFD).unwrap();
        assert_eq!(bytes, [0xFF, 0xFE, 0xAB, 0xCD, 0x12, 0x34, 0xFD, 0x00]);
    }

    #[test]
    fn field_limits() {
        pack_header(255, 255, 65535, 65535, 255).unwrap();

        let cases = [
            (pack_header(256, 1, 1, 0, 0), "version", 255),
            (pack_header(1, 256, 1, 0, 0), "record_type", 255),
            (pack_header(1, 1, 65536, 0, 0), "request_id", 65535),
            (pack_header(1, 1, 1, 65536, 0), "content_length", 65535),
            (pack_header(1, 1, 1, 0, 256), "padding_length", 255),
        ];

        for (result, expected_field, expected_max) in cases {
            match result {
                Err(SendError::ValueOutOfRange { field, max, .. }) => {
                    assert_eq!(field, expected_field);
                    assert_eq!(max, expected_max);
                }
                other => panic!("expected out of range for {expected_field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn out_of_range_keeps_value() {
        let error = pack_header(1, 1, 1, usize::MAX, 0).unwrap_err();
        assert!(matches!(
            error,
            SendError::ValueOutOfRange { field: "content_length", value: usize::MAX, max: 65535 }
        ));
    }

    #[test]
    fn encoder_appends() {
        let mut dst = BytesMut::from(&b"xx"[..]);
        HeaderEncoder.encode(RecordHeader::new(1, 4, 1, 0, 0), &mut dst).unwrap();
        assert_eq!(&dst[..], &[b'x', b'x', 1, 4, 0, 1, 0, 0, 0, 0]);
    }
}
