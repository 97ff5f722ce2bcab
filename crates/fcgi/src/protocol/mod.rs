//! Core FastCGI protocol types.
//!
//! This module holds the value types produced and consumed by the [`codec`](crate::codec)
//! module. Every type is a plain owned value: nothing here keeps state between calls.
//!
//! # Components
//!
//! - **Name/value pairs** ([`Pair`]): one entry of a `FCGI_PARAMS` or `FCGI_GET_VALUES` block
//! - **Record header** ([`RecordHeader`]): the 8-byte prefix of every record
//! - **Records** ([`Record`]): a header's type and request id together with its content, and [`RecordStream`] for splitting a long payload
//! - **Record bodies** ([`BeginRequestBody`], [`EndRequestBody`], [`UnknownTypeBody`])
//! - **Wire enums** ([`RecordType`], [`Role`], [`ProtocolStatus`])
//! - **Errors** ([`FcgiError`], [`ParseError`], [`SendError`])
//! - **Constants**: protocol limits such as [`HEADER_LEN`] and [`MAX_CONTENT_LEN`]

mod consts;
pub use consts::*;

mod pair;
pub use pair::Pair;

mod header;
pub use header::RecordHeader;

mod record_type;
pub use record_type::ProtocolStatus;
pub use record_type::RecordType;
pub use record_type::Role;

mod body;
pub use body::BeginRequestBody;
pub use body::EndRequestBody;
pub use body::UnknownTypeBody;

mod record;
pub use record::Record;
pub use record::RecordStream;

mod error;
pub use error::FcgiError;
pub use error::ParseError;
pub use error::SendError;
