//! Fixed-size record bodies.
//!
//! `FCGI_BEGIN_REQUEST`, `FCGI_END_REQUEST` and `FCGI_UNKNOWN_TYPE` records carry
//! an 8-byte body with big-endian integers followed by reserved zero bytes.

use bytes::{BufMut, BytesMut};

use crate::protocol::{FIXED_BODY_LEN, KEEP_CONN, ParseError, ProtocolStatus, Role};

fn fixed_body(buf: &[u8]) -> Result<&[u8; FIXED_BODY_LEN], ParseError> {
    buf.first_chunk::<FIXED_BODY_LEN>().ok_or_else(|| ParseError::truncated(FIXED_BODY_LEN - buf.len()))
}

/// Body of an `FCGI_BEGIN_REQUEST` record, wire layout `role:u16 flags:u8 reserved[5]`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BeginRequestBody {
    pub role: u16,
    pub flags: u8,
}

impl BeginRequestBody {
    pub fn new(role: Role, keep_conn: bool) -> Self {
        Self { role: role.as_u16(), flags: if keep_conn { KEEP_CONN } else { 0 } }
    }

    pub fn role(&self) -> Option<Role> {
        Role::from_u16(self.role)
    }

    #[inline]
    pub fn keep_conn(&self) -> bool {
        self.flags & KEEP_CONN != 0
    }

    pub fn to_bytes(&self) -> [u8; FIXED_BODY_LEN] {
        let [role_hi, role_lo] = self.role.to_be_bytes();
        [role_hi, role_lo, self.flags, 0, 0, 0, 0, 0]
    }

    pub fn encode(&self, dst: &mut BytesMut) {
        dst.put_slice(&self.to_bytes());
    }

    /// Reads the body from the first 8 bytes of `buf`; the reserved bytes are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::TruncatedBuffer`] if `buf` is shorter than [`FIXED_BODY_LEN`].
    pub fn decode(buf: &[u8]) -> Result<Self, ParseError> {
        let body = fixed_body(buf)?;
        Ok(Self { role: u16::from_be_bytes([body[0], body[1]]), flags: body[2] })
    }
}

/// Body of an `FCGI_END_REQUEST` record, wire layout `app_status:u32 protocol_status:u8 reserved[3]`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EndRequestBody {
    pub app_status: u32,
    pub protocol_status: u8,
}

impl EndRequestBody {
    pub fn new(app_status: u32, protocol_status: ProtocolStatus) -> Self {
        Self { app_status, protocol_status: protocol_status.as_u8() }
    }

    pub fn protocol_status(&self) -> Option<ProtocolStatus> {
        ProtocolStatus::from_u8(self.protocol_status)
    }

    pub fn to_bytes(&self) -> [u8; FIXED_BODY_LEN] {
        let [a, b, c, d] = self.app_status.to_be_bytes();
        [a, b, c, d, self.protocol_status, 0, 0, 0]
    }

    pub fn encode(&self, dst: &mut BytesMut) {
        dst.put_slice(&self.to_bytes());
    }

    /// # Errors
    ///
    /// Returns [`ParseError::TruncatedBuffer`] if `buf` is shorter than [`FIXED_BODY_LEN`].
    pub fn decode(buf: &[u8]) -> Result<Self, ParseError> {
        let body = fixed_body(buf)?;
        Ok(Self { app_status: u32::from_be_bytes([body[0], body[1], body[2], body[3]]), protocol_status: body[4] })
    }
}

/// Body of an `FCGI_UNKNOWN_TYPE` record, wire layout `record_type:u8 reserved[7]`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UnknownTypeBody {
    pub record_type: u8,
}

impl UnknownTypeBody {
    pub fn new(record_type: u8) -> Self {
        Self { record_type }
    }

    pub fn to_bytes(&self) -> [u8; FIXED_BODY_LEN] {
        [self.record_type, 0, 0, 0, 0, 0, 0, 0]
    }

    pub fn encode(&self, dst: &mut BytesMut) {
        dst.put_slice(&self.to_bytes());
    }

    /// # Errors
    ///
    /// Returns [`ParseError::TruncatedBuffer`] if `buf` is shorter than [`FIXED_BODY_LEN`].
    pub fn decode(buf: &[u8]) -> Result<Self, ParseError> {
        let body = fixed_body(buf)?;
        Ok(Self { record_type: body[0] })
    }
}
