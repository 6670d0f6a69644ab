//! Log helpers for advice text coming from the network or fixture files.
//! Such text is untrusted: it may carry newlines or control characters that
//! would break a line-oriented log.

use std::fmt::Write;

/// Longest preview in characters before an ellipsis is appended.
pub const PREVIEW_CHARS: usize = 120;

/// Quote `s` for a single log line: control characters are escaped
/// (`\n`, `\r`, `\t`, otherwise `\xNN`) and long text is cut at
/// [`PREVIEW_CHARS`].
pub fn preview(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(PREVIEW_CHARS) + 4);
    out.push('"');
    for (count, ch) in s.chars().enumerate() {
        if count >= PREVIEW_CHARS {
            out.push('…');
            break;
        }
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
