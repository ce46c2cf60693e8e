//! Outbound text helpers.

/// Maximum length of a single Telegram text message, in UTF-16 code units (Telegram's own
/// measure: characters outside the BMP, such as most emoji, count as 2).
pub const MAX_MESSAGE_LEN: usize = 4096;

/// Splits `text` into consecutive chunks of at most `max_len` UTF-16 code units.
///
/// Chunks are cut on `char` boundaries only (no word or line logic), so concatenating
/// the result gives back `text`. Empty input yields no chunks. A `max_len` of 0 is treated as 1;
/// a single char wider than `max_len` gets a chunk of its own.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for c in text.chars() {
        let width = c.len_utf16();
        if current_len + width > max_len && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push(c);
        current_len += width;
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
