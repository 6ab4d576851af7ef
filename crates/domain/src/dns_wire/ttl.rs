use super::{HEADER_LEN, POINTER_MASK};

pub const MIN_ANSWER_TTL: u32 = 30;
pub const MAX_ANSWER_TTL: u32 = 1800;

/// Bounds-checked reader over a DNS message.
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn at(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    fn exhausted(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn u8(&mut self) -> Option<u8> {
        let b = *self.buf.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    fn u16(&mut self) -> Option<u16> {
        let bytes = self.buf.get(self.pos..self.pos + 2)?;
        self.pos += 2;
        Some(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn u32(&mut self) -> Option<u32> {
        let bytes = self.buf.get(self.pos..self.pos + 4)?;
        self.pos += 4;
        Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn skip(&mut self, n: usize) -> Option<()> {
        let end = self.pos.checked_add(n)?;
        if end > self.buf.len() {
            return None;
        }
        self.pos = end;
        Some(())
    }

    /// Skips length-prefixed labels up to and including the terminator.
    /// Pointers are not special-cased here.
    fn skip_labels(&mut self) -> Option<()> {
        loop {
            let len = self.u8()?;
            if len == 0 {
                return Some(());
            }
            self.skip(len as usize)?;
        }
    }

    /// Skips a record owner name, treating a leading pointer as two bytes.
    fn skip_owner_name(&mut self) -> Option<()> {
        let first = *self.buf.get(self.pos)?;
        if first & POINTER_MASK == POINTER_MASK {
            self.skip(2)
        } else {
            self.skip_labels()
        }
    }
}

/// Picks a cache TTL from the answer section of a DNS response.
///
/// Every answer with a positive TTL replaces the chosen value with its TTL
/// clamped into `[MIN_ANSWER_TTL, MAX_ANSWER_TTL]`, so the *last* positive
/// TTL wins rather than the smallest one. Returns `default` when no answer
/// carries a positive TTL or when the message cannot be walked.
///
/// Question names are skipped without pointer handling; a compressed
/// question section may be mis-parsed.
pub fn extract_ttl(message: &[u8], default: u32) -> u32 {
    walk_answers(message, default).unwrap_or(default)
}

fn walk_answers(message: &[u8], default: u32) -> Option<u32> {
    let mut header = Cursor::at(message, 4);
    let qdcount = header.u16()?;
    let ancount = header.u16()?;
    if message.len() < HEADER_LEN {
        return None;
    }

    let mut cursor = Cursor::at(message, HEADER_LEN);
    for _ in 0..qdcount {
        cursor.skip_labels()?;
        cursor.skip(4)?;
    }

    let mut chosen = default;
    for _ in 0..ancount {
        if cursor.exhausted() {
            break;
        }
        cursor.skip_owner_name()?;
        cursor.skip(4)?;
        let ttl = cursor.u32()?;
        let rdlength = cursor.u16()?;
        cursor.skip(rdlength as usize)?;

        if ttl > 0 {
            chosen = ttl.clamp(MIN_ANSWER_TTL, MAX_ANSWER_TTL);
        }
    }

    Some(chosen)
}
