// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! HTTP methods and filename-based method inference.
//!
//! Server handler files may carry their method in the filename:
//! - `users.get.ts` → `GET`
//! - `users.post` → `POST`
//! - `users.ts` → any method

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    /// A verb segment at the end of the filename, optionally followed by one extension.
    static ref METHOD_SUFFIX: Regex =
        Regex::new(r"\.(get|head|patch|post|put|delete|connect|options|trace)(\.\w+)?$")
            .expect("method suffix pattern is valid");
}

/// An HTTP method a server handler can be scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `HEAD`
    Head,
    /// `PATCH`
    Patch,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `CONNECT`
    Connect,
    /// `OPTIONS`
    Options,
    /// `TRACE`
    Trace,
}

impl HttpMethod {
    /// All methods, in the order the filename suffix rule lists them.
    pub const ALL: [HttpMethod; 9] = [
        HttpMethod::Get,
        HttpMethod::Head,
        HttpMethod::Patch,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Connect,
        HttpMethod::Options,
        HttpMethod::Trace,
    ];

    /// Infers the method from a handler path's filename suffix.
    ///
    /// Matches `.<verb>` at the end of the path, optionally followed by one
    /// more dotted segment (usually the file extension). Returns `None` when
    /// the filename carries no method.
    ///
    /// ```rust
    /// use nitrokit::HttpMethod;
    ///
    /// assert_eq!(HttpMethod::from_handler_path("api/users.get.ts"), Some(HttpMethod::Get));
    /// assert_eq!(HttpMethod::from_handler_path("api/users.ts"), None);
    /// ```
    pub fn from_handler_path(path: &str) -> Option<Self> {
        METHOD_SUFFIX
            .captures(path)
            .and_then(|caps| caps.get(1))
            .and_then(|verb| verb.as_str().parse().ok())
    }

    /// Lowercase name as used in filenames and serialized config.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Connect => "connect",
            HttpMethod::Options => "options",
            HttpMethod::Trace => "trace",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown method name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown HTTP method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infers_verb_with_extension() {
        assert_eq!(HttpMethod::from_handler_path("api/users.get.ts"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::from_handler_path("api/users.delete.mjs"), Some(HttpMethod::Delete));
        assert_eq!(HttpMethod::from_handler_path("routes/[id].patch.js"), Some(HttpMethod::Patch));
    }

    #[test]
    fn test_infers_bare_verb_suffix() {
        assert_eq!(HttpMethod::from_handler_path("api/users.post"), Some(HttpMethod::Post));
        assert_eq!(HttpMethod::from_handler_path("x.options"), Some(HttpMethod::Options));
    }

    #[test]
    fn test_no_method_in_filename() {
        assert_eq!(HttpMethod::from_handler_path("api/users.ts"), None);
        assert_eq!(HttpMethod::from_handler_path("api/get.ts"), None);
        assert_eq!(HttpMethod::from_handler_path("api/users.getter.ts"), None);
        assert_eq!(HttpMethod::from_handler_path(""), None);
    }

    #[test]
    fn test_more_than_one_trailing_segment_is_not_a_method() {
        assert_eq!(HttpMethod::from_handler_path("api/users.get.d.ts"), None);
    }

    #[test]
    fn test_last_verb_wins() {
        assert_eq!(HttpMethod::from_handler_path("api/x.post.get.ts"), Some(HttpMethod::Get));
    }

    #[test]
    fn test_case_sensitive_suffix() {
        assert_eq!(HttpMethod::from_handler_path("api/users.GET.ts"), None);
    }

    #[test]
    fn test_parse_and_display() {
        for method in HttpMethod::ALL {
            assert_eq!(method.to_string().parse::<HttpMethod>(), Ok(method));
        }
        assert_eq!("POST".parse::<HttpMethod>(), Ok(HttpMethod::Post));
        assert!("fetch".parse::<HttpMethod>().is_err());
    }
}
