//! FastCGI protocol constants.
//!
//! Values follow the FastCGI 1.0 specification. Limits that bound encoding and
//! decoding are kept here so every codec shares the same numbers.

/// The only protocol version defined by FastCGI
pub const FCGI_VERSION_1: u8 = 1;

/// Size in bytes of every record header
pub const HEADER_LEN: usize = 8;

/// Size in bytes of the begin-request, end-request and unknown-type bodies
pub const FIXED_BODY_LEN: usize = 8;

/// Request id used by management records
pub const NULL_REQUEST_ID: u16 = 0;

/// Maximum content carried by a single record
pub const MAX_CONTENT_LEN: usize = u16::MAX as usize;

/// Maximum length of a pair name or value
pub const MAX_PAIR_LEN: usize = 0x7FFF_FFFF;

/// Flag bit in [`BeginRequestBody::flags`](crate::protocol::BeginRequestBody) asking the
/// application to keep the connection open after the request
pub const KEEP_CONN: u8 = 1;

/// Management variable: maximum concurrent transport connections
pub const FCGI_MAX_CONNS: &[u8] = b"FCGI_MAX_CONNS";

/// Management variable: maximum concurrent requests
pub const FCGI_MAX_REQS: &[u8] = b"FCGI_MAX_REQS";

/// Management variable: whether connections are multiplexed
pub const FCGI_MPXS_CONNS: &[u8] = b"FCGI_MPXS_CONNS";
