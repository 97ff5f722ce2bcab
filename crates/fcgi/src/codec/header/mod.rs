//! FastCGI record header processing
//!
//! Every record starts with the same fixed 8-byte header. This module converts
//! it between [`RecordHeader`](crate::protocol::RecordHeader) and its wire form,
//! writing `request_id` and `content_length` in network byte order.
//!
//! # Components
//!
//! - [`pack_header`] / [`encode_header`]: header to bytes
//! - [`unpack_header`]: bytes to header
//! - [`HeaderEncoder`] / [`HeaderDecoder`]: the same as `tokio_util` codecs

mod header_decoder;
mod header_encoder;

pub use header_decoder::HeaderDecoder;
pub use header_decoder::unpack_header;
pub use header_encoder::HeaderEncoder;
pub use header_encoder::encode_header;
pub use header_encoder::pack_header;
