//! Minimal DNS wire-format codec.
//!
//! The gateway forwards DNS messages opaquely and only looks inside them to
//! classify traffic and pick a cache lifetime. Malformed input degrades to an
//! empty name or a default TTL instead of an error.
//!
//! Compression pointers are never followed. A compressed question name reads
//! as an empty name.

mod base64url;
mod builder;
mod qname;
mod ttl;

pub use base64url::{decode_b64url, encode_b64url};
pub use builder::{FixedIdSource, MessageBuilder, RandomIdSource, TransactionIdSource};
pub use qname::{extract_qname, MAX_NAME_LEN};
pub use ttl::{extract_ttl, MAX_ANSWER_TTL, MIN_ANSWER_TTL};

/// Fixed size of the DNS message header.
pub const HEADER_LEN: usize = 12;

/// Label-length bits marking a compression pointer.
pub(crate) const POINTER_MASK: u8 = 0xC0;
