use core::cmp::Ordering;

use soroban_sdk::{xdr::ToXdr, Env, String};

/// Upper bound on the byte length of fields that take part in search and sort.
pub const MAX_SEARCHABLE_LEN: usize = 128;
/// Room for a searchable field after lowercasing, which can grow UTF-8 text.
const MAX_FOLDED_LEN: usize = 2 * MAX_SEARCHABLE_LEN;
// ScVal discriminant and length word ahead of the bytes of an XDR string
const XDR_STRING_HEADER: u32 = 8;

pub fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Fixed-size copy of a host string, for byte-level comparisons.
pub struct TextBuf {
    bytes: [u8; MAX_FOLDED_LEN],
    len: usize,
}

impl TextBuf {
    fn empty() -> Self {
        Self {
            bytes: [0u8; MAX_FOLDED_LEN],
            len: 0,
        }
    }

    /// Returns `None` when the string is longer than [`MAX_SEARCHABLE_LEN`].
    pub fn load(text: &String) -> Option<Self> {
        let len = text.len() as usize;
        if len > MAX_SEARCHABLE_LEN {
            return None;
        }
        let mut buf = Self::empty();
        text.copy_into_slice(&mut buf.bytes[..len]);
        buf.len = len;
        Some(buf)
    }

    /// The first [`MAX_SEARCHABLE_LEN`] bytes of `text`.
    pub fn load_prefix(env: &Env, text: &String) -> Self {
        if let Some(buf) = Self::load(text) {
            return buf;
        }
        let start = XDR_STRING_HEADER;
        let prefix = text
            .clone()
            .to_xdr(env)
            .slice(start..start + MAX_SEARCHABLE_LEN as u32);

        let mut buf = Self::empty();
        prefix.copy_into_slice(&mut buf.bytes[..MAX_SEARCHABLE_LEN]);
        buf.len = MAX_SEARCHABLE_LEN;
        buf
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Unicode lowercase of the buffer. `None` if it is not valid UTF-8.
    pub fn to_lowercase(&self) -> Option<Self> {
        let text = core::str::from_utf8(self.as_bytes()).ok()?;

        let mut folded = Self::empty();
        for c in text.chars().flat_map(char::to_lowercase) {
            let mut utf8 = [0u8; 4];
            let encoded = c.encode_utf8(&mut utf8).as_bytes();
            let end = folded.len + encoded.len();
            if end > MAX_FOLDED_LEN {
                return None;
            }
            folded.bytes[folded.len..end].copy_from_slice(encoded);
            folded.len = end;
        }
        Some(folded)
    }
}

pub fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Orders names the way a user-facing list expects: letters compare
/// case-insensitively first, and only an otherwise equal pair is split by
/// case, lowercase first.
pub fn compare_name_bytes(a: &[u8], b: &[u8]) -> Ordering {
    let folded = a
        .iter()
        .map(u8::to_ascii_lowercase)
        .cmp(b.iter().map(u8::to_ascii_lowercase));
    if folded != Ordering::Equal {
        return folded;
    }

    for (x, y) in a.iter().zip(b.iter()) {
        if x != y {
            return if x.is_ascii_lowercase() {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
    }
    Ordering::Equal
}

/// [`compare_name_bytes`] over the leading [`MAX_SEARCHABLE_LEN`] bytes,
/// then shorter names first.
pub fn compare_names(env: &Env, a: &String, b: &String) -> Ordering {
    let prefix_a = TextBuf::load_prefix(env, a);
    let prefix_b = TextBuf::load_prefix(env, b);
    compare_name_bytes(prefix_a.as_bytes(), prefix_b.as_bytes()).then(a.len().cmp(&b.len()))
}
