//! Path helpers for linking page assets.

use std::path::{Component, Path, PathBuf};

/// Express `target` relative to the directory `base`.
///
/// Both paths should already be absolute and normalized. Returns `None`
/// when they share no common root (different drive prefixes on Windows).
pub fn relative_path(target: &Path, base: &Path) -> Option<PathBuf> {
    let target: Vec<Component> = target.components().collect();
    let base: Vec<Component> = base.components().collect();

    if target.first() != base.first() {
        return None;
    }

    let common = target
        .iter()
        .zip(base.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Some(relative)
}

/// Percent-encode one path segment, leaving RFC 3986 unreserved characters
/// and the harmless sub-delimiters alone
fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'=' | b'@' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

/// Render a path for use in an HTML attribute: '/'-separated, with each
/// segment percent-encoded
pub fn to_url_path(path: &Path) -> String {
    path.components()
        .map(|c| match c {
            Component::RootDir => String::new(),
            Component::Prefix(prefix) => prefix.as_os_str().to_string_lossy().into_owned(),
            other => encode_segment(&other.as_os_str().to_string_lossy()),
        })
        .collect::<Vec<_>>()
        .join("/")
        .replace("//", "/")
}
