// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Platform-independent path normalization.
//!
//! Handler and plugin paths come from module authors on every platform, so
//! they are stored in one canonical form:
//!
//! - `\` separators become `/`
//! - a leading drive letter is uppercased (`c:/x` -> `C:/x`)
//! - duplicate separators and `.` segments are dropped
//! - `..` resolves against the previous segment; leading `..` is kept for
//!   relative paths and dropped at an absolute root
//! - a leading `/`, a UNC `//` prefix and a trailing `/` are preserved
//!
//! Normalization works on strings rather than [`std::path::Path`] because the
//! result must be identical regardless of the host platform.

/// Normalizes a path string into its canonical `/`-separated form.
///
/// The empty path normalizes to `"."`. Normalizing twice gives the same
/// result as normalizing once.
///
/// # Example
///
/// ```rust
/// use nitrokit::path::normalize;
///
/// assert_eq!(normalize("api\\users.ts"), "api/users.ts");
/// assert_eq!(normalize("./server//plugins/../api/"), "server/api/");
/// ```
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let path = path.replace('\\', "/");
    let (prefix, rest) = split_prefix(&path);
    let absolute = rest.starts_with('/') || prefix == "/";
    let bare = prefix.is_empty();
    let trailing_separator = path.ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }

    let body = segments.join("/");
    let mut normalized = prefix;
    if absolute {
        normalized.push('/');
    }

    if body.is_empty() {
        if absolute {
            // "//" alone is not a UNC prefix
            return if normalized == "//" { "/".to_string() } else { normalized };
        }
        if normalized.is_empty() {
            return if trailing_separator { "./" } else { "." }.to_string();
        }
        // bare drive letter, e.g. "C:"
        normalized.push('/');
        return normalized;
    }

    normalized.push_str(&body);
    if trailing_separator {
        normalized.push('/');
    }

    // "a/../c:/x" collapses onto something that now reads as a drive path
    if bare && !absolute && split_prefix(&normalized).0.len() == 2 {
        return normalize(&normalized);
    }
    normalized
}

/// Splits a (separator-normalized) path into its prefix and remainder.
///
/// The prefix is an uppercased drive letter (`"C:"`), `"/"` for a UNC path
/// (whose second slash is restored as the root), or empty.
fn split_prefix(path: &str) -> (String, &str) {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let drive = format!("{}:", (bytes[0] as char).to_ascii_uppercase());
        return (drive, &path[2..]);
    }

    if path.starts_with("//") && !path.starts_with("///") && path.len() > 2 {
        return ("/".to_string(), &path[2..]);
    }

    (String::new(), path)
}
