use once_cell::sync::Lazy;
use regex::Regex;

/// Telegram hard-caps messages at 4096 chars; stay under it with headroom.
pub const MAX_MESSAGE_LEN: usize = 4000;

/// Characters Telegram's MarkdownV2 parser treats as reserved.
const RESERVED: [char; 18] = [
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^<]+?>").unwrap());

/// Escape MarkdownV2 reserved characters so Telegram accepts the message.
pub fn escape_markdown_v2(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if RESERVED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Remove basic HTML tags that NewsAPI leaves inside descriptions.
pub fn strip_html_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

/// Closing parens break the MarkdownV2 link syntax; percent-encode them.
pub fn escape_url(url: &str) -> String {
    url.replace(')', "%29")
}

/// Split an assembled message into chunks no longer than `max_len` bytes,
/// breaking at line boundaries. Each chunk is trimmed of surrounding
/// whitespace. If a single line exceeds the limit the chunk is hard-split
/// at the last char boundary that still fits.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut rest = text;

    while rest.len() > max_len {
        let mut cut = max_len;
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        let split_at = match rest[..cut].rfind('\n') {
            Some(pos) => pos,
            None => cut,
        };
        let part = rest[..split_at].trim();
        if !part.is_empty() {
            chunks.push(part.to_string());
        }
        rest = &rest[split_at..];
        // Skip the newline we split on so it doesn't lead the next chunk.
        if rest.starts_with('\n') {
            rest = &rest[1..];
        }
    }

    let tail = rest.trim();
    if !tail.is_empty() {
        chunks.push(tail.to_string());
    }
    chunks
}
