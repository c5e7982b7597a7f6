// crates/infra/src/rendering.rs
use letter_tally_ports::decoding::ByteRendering;

/// Turns a decoded byte sequence into the text that enters the aggregate.
pub fn render_bytes(bytes: &[u8], mode: ByteRendering) -> String {
    match mode {
        ByteRendering::Repr => bytes_repr(bytes),
        ByteRendering::Text => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// The literal `b'...'` form of a byte sequence.
///
/// Quote character is `'` unless the bytes contain `'` but no `"`. The quote
/// character and backslash are backslash-escaped, tab/newline/carriage-return
/// use their short escapes, printable ASCII is emitted literally and every
/// other byte becomes `\xNN` lowercase hex.
fn bytes_repr(bytes: &[u8]) -> String {
    let has_single = bytes.contains(&b'\'');
    let has_double = bytes.contains(&b'"');
    let quote = if has_single && !has_double { '"' } else { '\'' };

    let mut out = String::with_capacity(bytes.len() + 3);
    out.push('b');
    out.push(quote);
    for &byte in bytes {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            _ if byte as char == quote => {
                out.push('\\');
                out.push(quote);
            }
            0x20..=0x7e => out.push(byte as char),
            _ => {
                use std::fmt::Write;
                let _ = write!(out, "\\x{byte:02x}");
            }
        }
    }
    out.push(quote);
    out
}
