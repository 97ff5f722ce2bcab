//! FastCGI record encoder module
//!
//! Writes a [`Record`] as header followed by its content. Optionally pads the
//! content to an 8-byte boundary, which the protocol recommends but does not
//! require.
//!
//! # Example
//!
//! ```
//! use micro_fcgi::codec::RecordEncoder;
//! use micro_fcgi::protocol::{Record, RecordType};
//! use tokio_util::codec::Encoder;
//! use bytes::BytesMut;
//!
//! let mut encoder = RecordEncoder::new();
//! let mut buffer = BytesMut::new();
//! encoder.encode(Record::new(RecordType::Stdout, 1, &b"hi"[..]), &mut buffer).unwrap();
//! assert_eq!(&buffer[..], &[1, 6, 0, 1, 0, 2, 0, 0, b'h', b'i']);
//! ```

use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;
use tracing::{error, trace};

use crate::codec::header::HeaderEncoder;
use crate::protocol::{FCGI_VERSION_1, HEADER_LEN, MAX_CONTENT_LEN, Record, RecordHeader, SendError};

/// Records are aligned to this many bytes when padding is enabled
const ALIGNMENT: usize = 8;

const ZERO_PADDING: [u8; ALIGNMENT] = [0; ALIGNMENT];

/// Encoder for FastCGI records.
#[derive(Debug, Clone, Copy)]
pub struct RecordEncoder {
    header_encoder: HeaderEncoder,
    version: u8,
    padding: bool,
}

impl RecordEncoder {
    /// Creates an encoder writing version 1 headers without padding
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the protocol version written into every header
    #[must_use]
    pub fn with_version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// Enables or disables padding content to an 8-byte boundary
    #[must_use]
    pub fn with_padding(mut self, padding: bool) -> Self {
        self.padding = padding;
        self
    }

    fn padding_for(&self, content_length: usize) -> usize {
        if self.padding { (ALIGNMENT - content_length % ALIGNMENT) % ALIGNMENT } else { 0 }
    }
}

impl Default for RecordEncoder {
    fn default() -> Self {
        Self { header_encoder: HeaderEncoder, version: FCGI_VERSION_1, padding: false }
    }
}

impl Encoder<Record> for RecordEncoder {
    type Error = SendError;

    /// Encodes one record into the provided buffer.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::ContentTooLarge`] if the content exceeds
    /// [`MAX_CONTENT_LEN`]; nothing is written in that case.
    fn encode(&mut self, item: Record, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let Ok(content_length) = u16::try_from(item.content.len()) else {
            error!(content_length = item.content.len(), max = MAX_CONTENT_LEN, "record content too large");
            return Err(SendError::content_too_large(item.content.len()));
        };

        let padding = self.padding_for(item.content.len());
        let header = RecordHeader {
            version: self.version,
            record_type: item.record_type,
            request_id: item.request_id,
            content_length,
            // below ALIGNMENT
            padding_length: padding as u8,
        };

        dst.reserve(HEADER_LEN + item.content.len() + padding);
        self.header_encoder.encode(header, dst)?;
        dst.put_slice(&item.content);
        dst.put_slice(&ZERO_PADDING[..padding]);

        trace!(%item, padding, "encoded record");
        Ok(())
    }
}
