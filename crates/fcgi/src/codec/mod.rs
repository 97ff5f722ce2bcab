//! FastCGI codec module for encoding and decoding wire structures
//!
//! This module translates between raw bytes and the types in
//! [`protocol`](crate::protocol). All functions are pure: they allocate only
//! their own output and keep no state between calls.
//!
//! # Architecture
//!
//! - Name/value pairs, via the [`pair`] module:
//!   - [`pack_pair`] / [`pack_pairs`]: encode pairs
//!   - [`unpack_pairs`] / [`Pairs`]: decode a block
//!
//! - Record headers, via the [`header`] module:
//!   - [`pack_header`]: encode a header, checking field widths
//!   - [`unpack_header`]: decode a header from at least 8 bytes
//!
//! - Record framing for `tokio_util` streams:
//!   - [`RecordDecoder`]: frames incoming records
//!   - [`RecordEncoder`]: writes outgoing records
//!
//! # Example
//!
//! ```
//! use micro_fcgi::codec::{pack_pairs, unpack_pairs, pack_header, unpack_header};
//!
//! let block = pack_pairs([("SCRIPT_FILENAME", "/srv/index.php"), ("REQUEST_METHOD", "GET")]).unwrap();
//! let header = pack_header(1, 4, 1, block.len(), 0).unwrap();
//!
//! assert_eq!(usize::from(unpack_header(&header).unwrap().content_length), block.len());
//! assert_eq!(unpack_pairs(&block).unwrap().len(), 2);
//! ```

pub mod header;
pub mod pair;
mod record_decoder;
mod record_encoder;

pub use header::{HeaderDecoder, HeaderEncoder, encode_header, pack_header, unpack_header};
pub use pair::{
    Pairs, decode_len, encode_len, encoded_pair_len, len_prefix_size, pack_pair, pack_pair_into, pack_pairs,
    unpack_pairs, unpack_pairs_shared,
};
pub use record_decoder::RecordDecoder;
pub use record_encoder::RecordEncoder;
