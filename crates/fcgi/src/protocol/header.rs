use crate::protocol::{HEADER_LEN, RecordType};

/// The fixed 8-byte prefix of every FastCGI record.
///
/// Fields hold logical (host order) values. The reserved trailing byte of the
/// wire layout is not represented: it is written as zero and ignored on read.
///
/// See [`pack_header`](crate::codec::pack_header) and
/// [`unpack_header`](crate::codec::unpack_header) for the wire conversion.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct RecordHeader {
    pub version: u8,
    pub record_type: u8,
    pub request_id: u16,
    pub content_length: u16,
    pub padding_length: u8,
}

impl RecordHeader {
    pub fn new(version: u8, record_type: u8, request_id: u16, content_length: u16, padding_length: u8) -> Self {
        Self { version, record_type, request_id, content_length, padding_length }
    }

    /// Returns the typed record type, or `None` for codes the protocol does not define
    #[inline]
    pub fn kind(&self) -> Option<RecordType> {
        RecordType::from_u8(self.record_type)
    }

    /// Number of bytes following the header that belong to this record
    #[inline]
    pub fn body_len(&self) -> usize {
        usize::from(self.content_length) + usize::from(self.padding_length)
    }

    /// Total size of the record on the wire, header included
    #[inline]
    pub fn frame_len(&self) -> usize {
        HEADER_LEN + self.body_len()
    }

    /// Converts into the `(version, record_type, request_id, content_length, padding_length)` tuple
    pub fn into_tuple(self) -> (u8, u8, u16, u16, u8) {
        (self.version, self.record_type, self.request_id, self.content_length, self.padding_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths() {
        let header = RecordHeader::new(1, RecordType::Stdout.as_u8(), 1, 300, 4);
        assert_eq!(header.kind(), Some(RecordType::Stdout));
        assert_eq!(header.body_len(), 304);
        assert_eq!(header.frame_len(), 312);

        let max = RecordHeader::new(1, 200, u16::MAX, u16::MAX, u8::MAX);
        assert_eq!(max.kind(), None);
        assert_eq!(max.frame_len(), 8 + 65535 + 255);
    }
}
