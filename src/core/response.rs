//! Reply splitting for Discord's message content limit
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Count the limit in characters, matching how Discord measures content
//! - 1.0.0: Initial release

/// Discord message content limit (characters)
pub const MESSAGE_LIMIT: usize = 2000;

/// Split text into pieces of at most `max_chars` characters.
///
/// Splits prefer line boundaries; a single line longer than the limit is cut
/// on character boundaries so multi-byte text is never broken mid-character.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.lines() {
        let line_len = line.chars().count() + 1;
        if current_len + line_len > max_chars {
            if !current.trim().is_empty() {
                chunks.push(current.trim_end().to_string());
            }
            current.clear();
            current_len = 0;

            if line_len > max_chars {
                chunks.extend(chunk_long_line(line, max_chars));
                continue;
            }
        }
        current.push_str(line);
        current.push('\n');
        current_len += line_len;
    }

    if !current.trim().is_empty() {
        chunks.push(current.trim_end().to_string());
    }
    chunks
}

fn chunk_long_line(line: &str, max_chars: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(max_chars)
        .map(|piece| piece.iter().collect())
        .collect()
}

/// Chunk text for message content (2000 character limit)
pub fn chunk_for_message(text: &str) -> Vec<String> {
    chunk_text(text, MESSAGE_LIMIT)
}
