//! Request path sanitization.
//!
//! Runs once at request entry, before routing or the storage engine ever see
//! a path: decodes percent-escapes, then applies filesystem-path cleaning
//! (drop `.` segments, collapse repeated `/`, resolve `..`). The result can
//! never escape the root it was cleaned against.

use percent_encoding::percent_decode_str;

use crate::RustStackError;

/// Decode and normalize a request path.
///
/// # Errors
///
/// Returns [`RustStackError::InvalidPath`] if the input contains a malformed
/// percent-escape sequence or is not valid UTF-8 once decoded.
pub fn sanitize_path(input: &str) -> Result<String, RustStackError> {
    validate_percent_escapes(input)?;

    let decoded = percent_decode_str(input)
        .decode_utf8()
        .map_err(|_| RustStackError::InvalidPath(input.to_owned()))?;

    let had_leading_slash = decoded.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for raw_segment in decoded.split('/') {
        match raw_segment {
            "" | "." => continue,
            ".." => {
                // A `..` that would escape root is simply dropped: the
                // cleaned path can never climb above where it started.
                segments.pop();
            }
            segment => segments.push(segment),
        }
    }

    let mut cleaned = segments.join("/");
    if had_leading_slash {
        cleaned.insert(0, '/');
    }
    if cleaned.is_empty() {
        cleaned.push('/');
    }

    Ok(cleaned)
}

/// Reject `%` not followed by exactly two hex digits.
///
/// The `percent_decode_str` function silently passes malformed escapes
/// through unchanged; the spec requires rejecting them outright.
fn validate_percent_escapes(input: &str) -> Result<(), RustStackError> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(RustStackError::InvalidPath(input.to_owned()));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
