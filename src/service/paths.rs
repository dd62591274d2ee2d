use crate::error::{MobileFsError, Result};

/// Split a relative slash-delimited path spec into validated segments.
///
/// Empty input, a leading or trailing separator and empty interior segments
/// are rejected before any I/O happens.
pub(crate) fn segments(path: &str) -> Result<Vec<&str>> {
    if path.is_empty() {
        return Err(MobileFsError::invalid_path("path is empty"));
    }
    if path.starts_with('/') {
        return Err(MobileFsError::invalid_path(format!(
            "leading separator in {path:?}"
        )));
    }
    if path.ends_with('/') {
        return Err(MobileFsError::invalid_path(format!(
            "trailing separator in {path:?}"
        )));
    }
    let parts: Vec<&str> = path.split('/').collect();
    if parts.iter().any(|segment| segment.is_empty()) {
        return Err(MobileFsError::invalid_path(format!(
            "empty segment in {path:?}"
        )));
    }
    Ok(parts)
}

/// Decode percent-encoded characters in a file name.
///
/// Sequences that are not valid `%XX` escapes pass through verbatim, and
/// invalid UTF-8 after decoding is replaced, so the function never fails.
pub fn normalize_file_name(name: &str) -> String {
    let bytes = name.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Split an absolute path into its parent directory and leaf name
pub(crate) fn split_external(full_path: &str) -> Result<(&str, &str)> {
    match full_path.rsplit_once('/') {
        Some((dir, name)) if !name.is_empty() => {
            let dir = if dir.is_empty() { "/" } else { dir };
            Ok((dir, name))
        }
        _ => Err(MobileFsError::invalid_path(format!(
            "cannot split external path {full_path:?}"
        ))),
    }
}
