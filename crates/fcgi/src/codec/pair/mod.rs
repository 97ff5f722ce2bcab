//! FastCGI name/value pair processing
//!
//! Name/value blocks carry the request environment in `FCGI_PARAMS` records and
//! the management variables in `FCGI_GET_VALUES` / `FCGI_GET_VALUES_RESULT`.
//!
//! # Components
//!
//! - `length`: the 1 or 4 byte length prefix shared by names and values
//! - [`pack_pair`] / [`pack_pairs`]: encode one pair or a whole block
//! - [`unpack_pairs`] / [`Pairs`]: decode a block eagerly or lazily

mod length;
mod pair_decoder;
mod pair_encoder;

pub use length::decode_len;
pub use length::encode_len;
pub use length::len_prefix_size;
pub use pair_decoder::Pairs;
pub use pair_decoder::unpack_pairs;
pub use pair_decoder::unpack_pairs_shared;
pub use pair_encoder::encoded_pair_len;
pub use pair_encoder::pack_pair;
pub use pair_encoder::pack_pair_into;
pub use pair_encoder::pack_pairs;
