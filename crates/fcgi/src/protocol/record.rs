use std::fmt;
use std::iter::FusedIterator;

use bytes::Bytes;

use crate::ensure;
use crate::protocol::{
    BeginRequestBody, EndRequestBody, FIXED_BODY_LEN, MAX_CONTENT_LEN, ParseError, RecordType, UnknownTypeBody,
};

/// A complete FastCGI record: type, request id and content, with padding already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub record_type: u8,
    pub request_id: u16,
    pub content: Bytes,
}

impl Record {
    pub fn new(record_type: impl Into<u8>, request_id: u16, content: impl Into<Bytes>) -> Self {
        Self { record_type: record_type.into(), request_id, content: content.into() }
    }

    /// Creates a record with no content, e.g. the end of a `FCGI_PARAMS` or `FCGI_STDIN` stream
    pub fn empty(record_type: impl Into<u8>, request_id: u16) -> Self {
        Self::new(record_type, request_id, Bytes::new())
    }

    #[inline]
    pub fn kind(&self) -> Option<RecordType> {
        RecordType::from_u8(self.record_type)
    }

    /// Returns true if this record closes a stream (`FCGI_PARAMS`, `FCGI_STDIN`, ...)
    #[inline]
    pub fn is_stream_end(&self) -> bool {
        self.content.is_empty()
    }

    /// Splits a stream payload (`FCGI_STDOUT`, `FCGI_PARAMS`, ...) into records of at
    /// most [`MAX_CONTENT_LEN`] bytes each, in order.
    ///
    /// The chunks share `content`'s storage. An empty payload yields no records;
    /// call [`RecordStream::with_end`] to append the empty record closing the stream.
    ///
    /// # Example
    ///
    /// ```
    /// use micro_fcgi::protocol::{MAX_CONTENT_LEN, Record, RecordType};
    ///
    /// let records: Vec<Record> = Record::stream(RecordType::Stdout, 1, vec![b'x'; MAX_CONTENT_LEN + 1]).with_end().collect();
    /// assert_eq!(records.len(), 3);
    /// assert_eq!(records[0].content.len(), MAX_CONTENT_LEN);
    /// assert_eq!(records[1].content.len(), 1);
    /// assert!(records[2].is_stream_end());
    /// ```
    pub fn stream(record_type: impl Into<u8>, request_id: u16, content: impl Into<Bytes>) -> RecordStream {
        RecordStream { record_type: record_type.into(), request_id, remaining: content.into(), end: false }
    }

    /// Reads the body of an `FCGI_BEGIN_REQUEST` record.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidBody`] if this is not a begin-request record
    /// or its content is not exactly [`FIXED_BODY_LEN`] bytes.
    pub fn begin_request_body(&self) -> Result<BeginRequestBody, ParseError> {
        BeginRequestBody::decode(self.fixed_body(RecordType::BeginRequest)?)
    }

    /// Reads the body of an `FCGI_END_REQUEST` record.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidBody`] on a type or length mismatch.
    pub fn end_request_body(&self) -> Result<EndRequestBody, ParseError> {
        EndRequestBody::decode(self.fixed_body(RecordType::EndRequest)?)
    }

    /// Reads the body of an `FCGI_UNKNOWN_TYPE` record.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidBody`] on a type or length mismatch.
    pub fn unknown_type_body(&self) -> Result<UnknownTypeBody, ParseError> {
        UnknownTypeBody::decode(self.fixed_body(RecordType::UnknownType)?)
    }

    fn fixed_body(&self, expected: RecordType) -> Result<&[u8], ParseError> {
        ensure!(
            self.record_type == expected.as_u8(),
            ParseError::invalid_body(format!("expected {expected} record, found type {}", self.record_type))
        );
        ensure!(
            self.content.len() == FIXED_BODY_LEN,
            ParseError::invalid_body(format!("{expected} body must be {FIXED_BODY_LEN} bytes, found {}", self.content.len()))
        );
        Ok(&self.content)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "<Record {kind}, req id {}, {} bytes>", self.request_id, self.content.len()),
            None => write!(f, "<Record {}, req id {}, {} bytes>", self.record_type, self.request_id, self.content.len()),
        }
    }
}

/// Iterator over the records of one stream payload, created by [`Record::stream`].
#[derive(Debug, Clone)]
pub struct RecordStream {
    record_type: u8,
    request_id: u16,
    remaining: Bytes,
    end: bool,
}

impl RecordStream {
    /// Appends an empty record after the payload, closing the stream
    #[must_use]
    pub fn with_end(mut self) -> Self {
        self.end = true;
        self
    }
}

impl Iterator for RecordStream {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.remaining.is_empty() {
            let len = self.remaining.len().min(MAX_CONTENT_LEN);
            let content = self.remaining.split_to(len);
            return Some(Record { record_type: self.record_type, request_id: self.request_id, content });
        }

        if self.end {
            self.end = false;
            return Some(Record::empty(self.record_type, self.request_id));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.len().div_ceil(MAX_CONTENT_LEN) + usize::from(self.end);
        (len, Some(len))
    }
}

impl ExactSizeIterator for RecordStream {}

impl FusedIterator for RecordStream {}
