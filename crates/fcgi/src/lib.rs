//! A FastCGI wire codec
//!
//! This crate translates between raw bytes and the two low level structures of
//! the FastCGI protocol:
//!
//! - **Name/value pair blocks**, the encoding of `FCGI_PARAMS` and the management
//!   `FCGI_GET_VALUES` records: length-prefixed byte pairs packed back to back
//! - **Record headers**, the fixed 8-byte prefix of every record
//!
//! On top of these it offers `tokio_util` codecs that frame whole records, so a
//! caller owning the socket can plug them into `FramedRead` / `FramedWrite`.
//!
//! Connection handling, request dispatch and the responder/authorizer/filter
//! roles are left to the caller. The codec performs no I/O and keeps no state
//! between calls, so it can be used from any number of tasks at once.
//!
//! # Example
//!
//! ```
//! use micro_fcgi::codec::{pack_pair, unpack_pairs, pack_header, unpack_header};
//!
//! let block = pack_pair(b"SERVER_SOFTWARE", b"micro-fcgi").unwrap();
//! let pairs = unpack_pairs(&block).unwrap();
//! assert_eq!(&pairs[0].value()[..], b"micro-fcgi");
//!
//! let header = unpack_header(&pack_header(1, 4, 1, block.len(), 0).unwrap()).unwrap();
//! assert_eq!(header.request_id, 1);
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: value types, constants and errors
//! - [`codec`]: encoding and decoding
//!
//! # Error Handling
//!
//! - [`protocol::ParseError`]: decode failures, most notably
//!   `TruncatedBuffer { missing }` when input ends early
//! - [`protocol::SendError`]: encode failures for values that do not fit their field
//! - [`protocol::FcgiError`]: top-level error wrapping both
//!
//! Decoding never panics on malformed input and never reads past the end of the
//! supplied buffer.

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
