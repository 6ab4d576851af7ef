#![allow(dead_code)]

/// Builds a response to `query` carrying one A record per TTL in `ttls`.
/// Answer owners are compression pointers back to the question name.
pub fn answer_for(query: &[u8], ttls: &[u32]) -> Vec<u8> {
    let mut buf = query.to_vec();
    buf[2] |= 0x80;
    buf[6..8].copy_from_slice(&(ttls.len() as u16).to_be_bytes());
    for ttl in ttls {
        buf.extend_from_slice(&[0xC0, 0x0C, 0, 1, 0, 1]);
        buf.extend_from_slice(&ttl.to_be_bytes());
        buf.extend_from_slice(&[0, 4, 192, 0, 2, 1]);
    }
    buf
}

/// Same as [`answer_for`] but the owner name is written out in full.
pub fn uncompressed_answer(name: &str, ttl: u32) -> Vec<u8> {
    let mut buf = vec![0, 1, 0x81, 0x80, 0, 0, 0, 1, 0, 0, 0, 0];
    for label in name.split('.') {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.extend_from_slice(&[0, 0, 1, 0, 1]);
    buf.extend_from_slice(&ttl.to_be_bytes());
    buf.extend_from_slice(&[0, 4, 192, 0, 2, 1]);
    buf
}
