//! Decodes a FastCGI request captured from a web server and prints its parameters.
//!
//! ```text
//! cargo run --example dump_params -- request.bin
//! ```
//!
//! Without an argument a small built-in request is used.

use std::error::Error;

use bytes::BytesMut;
use micro_fcgi::codec::{RecordDecoder, RecordEncoder, pack_pairs, unpack_pairs};
use micro_fcgi::protocol::{BeginRequestBody, Record, RecordType, Role};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn sample_request() -> Result<BytesMut, Box<dyn Error>> {
    let block = pack_pairs([("REQUEST_METHOD", "GET"), ("SCRIPT_NAME", "/index.php"), ("QUERY_STRING", "")])?;

    let mut encoder = RecordEncoder::new();
    let mut buf = BytesMut::new();
    encoder.encode(Record::new(RecordType::BeginRequest, 1, BeginRequestBody::new(Role::Responder, true).to_bytes().to_vec()), &mut buf)?;
    encoder.encode(Record::new(RecordType::Params, 1, block), &mut buf)?;
    encoder.encode(Record::empty(RecordType::Params, 1), &mut buf)?;
    Ok(buf)
}

fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut buf = match std::env::args().nth(1) {
        Some(path) => BytesMut::from(&std::fs::read(path)?[..]),
        None => sample_request()?,
    };

    let mut decoder = RecordDecoder::new();
    let mut params = BytesMut::new();
    loop {
        let record = match decoder.decode_eof(&mut buf) {
            Ok(Some(record)) => record,
            Ok(None) => break,
            Err(e) => {
                error!(cause = %e, "failed to decode record");
                return Err(e.into());
            }
        };

        info!(%record, "received");
        match record.kind() {
            Some(RecordType::Params) => params.extend_from_slice(&record.content),
            Some(_) => {}
            None => warn!(record_type = record.record_type, "unknown record type"),
        }
    }

    for pair in unpack_pairs(&params)? {
        info!(name = %String::from_utf8_lossy(pair.name()), value = %String::from_utf8_lossy(pair.value()), "param");
    }
    Ok(())
}
