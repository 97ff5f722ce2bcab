//! FastCGI record decoder module
//!
//! Frames complete records out of a stream of bytes. A record is only produced
//! once its header, content and padding are all buffered, so a partial record
//! never leaves the decoder.
//!
//! # Example
//!
//! ```
//! use micro_fcgi::codec::RecordDecoder;
//! use micro_fcgi::protocol::RecordType;
//! use tokio_util::codec::Decoder;
//! use bytes::BytesMut;
//!
//! let mut decoder = RecordDecoder::new();
//! let mut buffer = BytesMut::from(&[1u8, 5, 0, 1, 0, 2, 0, 0, b'h', b'i'][..]);
//! let record = decoder.decode(&mut buffer).unwrap().unwrap();
//! assert_eq!(record.kind(), Some(RecordType::Stdin));
//! assert_eq!(&record.content[..], b"hi");
//! ```

use bytes::{Buf, BytesMut};
use tokio_util::codec::Decoder;
use tracing::{error, trace};

use crate::codec::header::unpack_header;
use crate::protocol::{HEADER_LEN, ParseError, Record};

/// A decoder producing one [`Record`] per complete frame.
///
/// The decoder is stateless between frames: it peeks the header, waits until
/// `HEADER_LEN + content_length + padding_length` bytes are available, and only
/// then consumes them. Padding is discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordDecoder;

impl RecordDecoder {
    /// Creates a new `RecordDecoder` instance
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decoder for RecordDecoder {
    type Item = Record;
    type Error = ParseError;

    /// Attempts to decode one record from the provided buffer
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))`: a whole record was buffered and consumed
    /// - `Ok(None)`: need more data, nothing was consumed
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.len() < HEADER_LEN {
            return Ok(None);
        }

        let header = unpack_header(src)?;
        let frame_len = header.frame_len();
        if src.len() < frame_len {
            src.reserve(frame_len - src.len());
            return Ok(None);
        }

        src.advance(HEADER_LEN);
        let content = src.split_to(usize::from(header.content_length)).freeze();
        src.advance(usize::from(header.padding_length));

        let record = Record { record_type: header.record_type, request_id: header.request_id, content };
        trace!(%record, "decoded record");
        Ok(Some(record))
    }

    /// Decodes what is left once the peer stops sending.
    ///
    /// A clean end of stream leaves the buffer empty. Leftover bytes that do not
    /// form a whole record are reported as [`ParseError::TruncatedBuffer`].
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(record) = self.decode(src)? {
            return Ok(Some(record));
        }

        if src.is_empty() {
            return Ok(None);
        }

        let missing = match unpack_header(src) {
            Ok(header) => header.frame_len() - src.len(),
            Err(e) => {
                error!(received = src.len(), "partial record header received");
                return Err(e);
            }
        };
        error!(received = src.len(), missing, "partial record received");
        Err(ParseError::truncated(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_header;
    use crate::protocol::{RecordHeader, RecordType};

    fn frame(record_type: RecordType, request_id: u16, content: &[u8], padding: u8) -> Vec<u8> {
        let header = RecordHeader::new(1, record_type.as_u8(), request_id, content.len() as u16, padding);
        let mut bytes = encode_header(&header).to_vec();
        bytes.extend_from_slice(content);
        bytes.extend(std::iter::repeat_n(0u8, usize::from(padding)));
        bytes
    }

    #[test]
    fn decode_single_record() {
        let mut buf = BytesMut::from(&frame(RecordType::Params, 1, b"\x01\x01ab", 0)[..]);
        let record = RecordDecoder::new().decode(&mut buf).unwrap().unwrap();

        assert_eq!(record.kind(), Some(RecordType::Params));
        assert_eq!(record.request_id, 1);
        assert_eq!(&record.content[..], b"\x01\x01ab");
        assert!(buf.is_empty());
    }

    #[test]
    fn padding_is_discarded() {
        let mut bytes = frame(RecordType::Stdout, 3, b"hello", 3);
        bytes.extend_from_slice(&frame(RecordType::Stdout, 3, b"", 0));
        let mut buf = BytesMut::from(&bytes[..]);
        let mut decoder = RecordDecoder::new();

        let first = decoder.decode(&mut buf).unwrap().unwrap();
        assert_eq!(&first.content[..], b"hello");

        let second = decoder.decode(&mut buf).unwrap().unwrap();
        assert!(second.is_stream_end());
        assert!(decoder.decode(&mut buf).unwrap().is_none());
    }

    #[test]
    fn partial_frame_consumes_nothing() {
        let bytes = frame(RecordType::Stdin, 2, b"0123456789", 6);
        let mut decoder = RecordDecoder::new();

        for end in 0..bytes.len() {
            let mut buf = BytesMut::from(&bytes[..end]);
            assert!(decoder.decode(&mut buf).unwrap().is_none());
            assert_eq!(buf.len(), end);
        }

        let mut buf = BytesMut::from(&bytes[..]);
        assert!(decoder.decode(&mut buf).unwrap().is_some());
    }

    #[test]
    fn eof_with_leftover_bytes() {
        let bytes = frame(RecordType::Stdin, 2, b"0123456789", 0);
        let mut decoder = RecordDecoder::new();

        let mut buf = BytesMut::from(&bytes[..12]);
        let error = decoder.decode_eof(&mut buf).unwrap_err();
        assert_eq!(error.missing_bytes(), Some(6));

        let mut buf = BytesMut::from(&bytes[..3]);
        let error = decoder.decode_eof(&mut buf).unwrap_err();
        assert_eq!(error.missing_bytes(), Some(5));

        let mut buf = BytesMut::new();
        assert!(decoder.decode_eof(&mut buf).unwrap().is_none());
    }

    #[test]
    fn consumes_exactly_one_frame() {
        let first = frame(RecordType::Stdout, 4, b"abc", 5);
        let second = frame(RecordType::Stderr, 4, b"oops", 0);
        let mut bytes = first.clone();
        bytes.extend_from_slice(&second[..HEADER_LEN + 2]);
        let mut buf = BytesMut::from(&bytes[..]);
        let mut decoder = RecordDecoder::new();

        let record = decoder.decode(&mut buf).unwrap().unwrap();
        assert_eq!(&record.content[..], b"abc");
        assert_eq!(&buf[..], &second[..HEADER_LEN + 2]);

        assert!(decoder.decode(&mut buf).unwrap().is_none());
        assert_eq!(&buf[..], &second[..HEADER_LEN + 2]);

        buf.extend_from_slice(&second[HEADER_LEN + 2..]);
        let record = decoder.decode(&mut buf).unwrap().unwrap();
        assert_eq!(record.kind(), Some(RecordType::Stderr));
        assert_eq!(&record.content[..], b"oops");
        assert!(buf.is_empty());
    }

    #[test]
    fn unknown_record_type_is_framed() {
        let mut bytes = encode_header(&RecordHeader::new(1, 42, 0, 1, 0)).to_vec();
        bytes.push(7);
        let mut buf = BytesMut::from(&bytes[..]);

        let record = RecordDecoder::new().decode(&mut buf).unwrap().unwrap();
        assert_eq!(record.kind(), None);
        assert_eq!(record.record_type, 42);
        assert_eq!(record.to_string(), "<Record 42, req id 0, 1 bytes>");
    }
}
