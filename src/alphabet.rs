
pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

/// Slot index of `c` in a node's children, or `None` if `c` is not a lowercase ASCII letter.
pub fn get_idx(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Caller-side cleanup for raw input: trim, then lowercase.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
