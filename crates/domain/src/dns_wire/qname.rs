use super::{HEADER_LEN, POINTER_MASK};

/// Longest dotted name accepted before decoding stops.
pub const MAX_NAME_LEN: usize = 253;

/// Reads the first question name of a DNS message, lower-cased.
///
/// Each octet maps to the Latin-1 character of the same value, and Latin-1
/// upper-case letters are folded too. The length limit counts wire octets.
///
/// Never fails. Returns an empty string when the first name uses a
/// compression pointer, and whatever was decoded so far when the buffer is
/// short or the name grows past [`MAX_NAME_LEN`].
pub fn extract_qname(message: &[u8]) -> String {
    let mut labels: Vec<String> = Vec::new();
    let mut name_len = 0usize;
    let mut i = HEADER_LEN;

    while i < message.len() {
        let len = message[i];
        i += 1;
        if len == 0 {
            break;
        }
        if len & POINTER_MASK == POINTER_MASK {
            return String::new();
        }

        let end = (i + len as usize).min(message.len());
        let label: String = message[i..end]
            .iter()
            .flat_map(|&b| char::from(b).to_lowercase())
            .collect();

        if !labels.is_empty() {
            name_len += 1;
        }
        name_len += end - i;
        i = end;
        labels.push(label);

        if name_len > MAX_NAME_LEN {
            break;
        }
    }

    labels.join(".")
}
