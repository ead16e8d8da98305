//! Decoding of raw string lexemes into Rust strings.
//!
//! The lexer hands over the raw literal bytes, quotes included, having
//! already checked the escape *shape* (valid introducers, four hex digits
//! after `\u`). This module applies JSON string semantics: escape
//! substitution, `\uXXXX` decoding with UTF-16 surrogate-pair joining, and
//! UTF-8 validation of the unescaped spans. Lone surrogates are rejected.
use crate::error::ErrorKind;

const TRUNCATED: ErrorKind = ErrorKind::Syntax("truncated escape in string literal");

/// Decodes a raw string lexeme (both quotes still attached).
pub(crate) fn decode_string(raw: &[u8]) -> Result<String, ErrorKind> {
    let inner = match raw {
        [b'"', inner @ .., b'"'] => inner,
        _ => return Err(ErrorKind::Syntax("malformed string lexeme")),
    };

    let mut out = String::with_capacity(inner.len());
    let mut rest = inner;
    loop {
        match rest.iter().position(|&b| b == b'\\') {
            None => {
                push_utf8(&mut out, rest)?;
                return Ok(out);
            }
            Some(p) => {
                push_utf8(&mut out, &rest[..p])?;
                let consumed = decode_escape(&mut out, &rest[p..])?;
                rest = &rest[p + consumed..];
            }
        }
    }
}

/// Decodes one escape sequence at the start of `bytes` (which begins with
/// `\`), returning how many bytes it consumed.
fn decode_escape(out: &mut String, bytes: &[u8]) -> Result<usize, ErrorKind> {
    match bytes.get(1).ok_or(TRUNCATED)? {
        b'"' => out.push('"'),
        b'\\' => out.push('\\'),
        b'/' => out.push('/'),
        b'b' => out.push('\u{0008}'),
        b'f' => out.push('\u{000C}'),
        b'n' => out.push('\n'),
        b'r' => out.push('\r'),
        b't' => out.push('\t'),
        b'u' => return decode_unicode_escape(out, bytes),
        &other => return Err(ErrorKind::InvalidEscape(other)),
    }
    Ok(2)
}

fn decode_unicode_escape(out: &mut String, bytes: &[u8]) -> Result<usize, ErrorKind> {
    let unit = hex4(&bytes[2..])?;
    if is_low_surrogate(unit) {
        return Err(ErrorKind::UnpairedSurrogate(u32::from(unit)));
    }
    if is_high_surrogate(unit) {
        // A high surrogate is only valid immediately followed by a `\u`
        // low surrogate; the two decode to a single code point.
        if bytes.get(6) != Some(&b'\\') || bytes.get(7) != Some(&b'u') {
            return Err(ErrorKind::UnpairedSurrogate(u32::from(unit)));
        }
        let low = hex4(&bytes[8..])?;
        if !is_low_surrogate(low) {
            return Err(ErrorKind::UnpairedSurrogate(u32::from(unit)));
        }
        let code =
            0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
        let ch = char::from_u32(code).ok_or(ErrorKind::UnpairedSurrogate(code))?;
        out.push(ch);
        return Ok(12);
    }
    // A BMP scalar outside the surrogate range is always a valid char.
    let ch = char::from_u32(u32::from(unit)).ok_or(ErrorKind::UnpairedSurrogate(u32::from(unit)))?;
    out.push(ch);
    Ok(6)
}

fn hex4(bytes: &[u8]) -> Result<u16, ErrorKind> {
    let quad = bytes.get(..4).ok_or(TRUNCATED)?;
    let mut value: u16 = 0;
    for &b in quad {
        let digit = (b as char)
            .to_digit(16)
            .ok_or(ErrorKind::InvalidUnicodeEscape(b))?;
        value = (value << 4) | u16::try_from(digit).map_err(|_| TRUNCATED)?;
    }
    Ok(value)
}

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

fn push_utf8(out: &mut String, span: &[u8]) -> Result<(), ErrorKind> {
    match core::str::from_utf8(span) {
        Ok(s) => {
            out.push_str(s);
            Ok(())
        }
        Err(e) => {
            let start = e.valid_up_to();
            let len = e.error_len().unwrap_or(span.len() - start).min(4);
            Err(ErrorKind::InvalidUtf8(span[start..start + len].to_vec()))
        }
    }
}
