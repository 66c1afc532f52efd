// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Server handler descriptors.

use crate::method::HttpMethod;
use crate::path::normalize;
use serde::{Deserialize, Serialize};

/// A server route handler backed by a handler file.
///
/// # Example
///
/// ```rust
/// use nitrokit::ServerHandler;
///
/// let handler = ServerHandler::new("server/api/users.get.ts").with_route("/api/users");
/// assert_eq!(handler.route.as_deref(), Some("/api/users"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerHandler {
    /// URL pattern the handler serves (e.g. "/api/users"); `None` matches every route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    /// Path to the handler file.
    pub handler: String,

    /// Restricts the handler to one HTTP method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,

    /// Load the handler on first request instead of at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lazy: Option<bool>,

    /// Run the handler as middleware before route handlers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middleware: Option<bool>,
}

impl ServerHandler {
    /// Creates a handler for the given file with no route or method.
    pub fn new(handler: impl Into<String>) -> Self {
        Self {
            route: None,
            handler: handler.into(),
            method: None,
            lazy: None,
            middleware: None,
        }
    }

    /// Sets the route pattern.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Sets an explicit method.
    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Marks the handler as lazily loaded.
    pub fn with_lazy(mut self, lazy: bool) -> Self {
        self.lazy = Some(lazy);
        self
    }

    /// Marks the handler as middleware.
    pub fn with_middleware(mut self, middleware: bool) -> Self {
        self.middleware = Some(middleware);
        self
    }

    /// Returns the handler with a normalized path and, when no method was
    /// given, the method inferred from the filename.
    pub fn normalized(self) -> Self {
        let method = self
            .method
            .or_else(|| HttpMethod::from_handler_path(&self.handler));
        Self {
            method,
            handler: normalize(&self.handler),
            ..self
        }
    }
}

/// A handler that only exists while the dev server runs.
///
/// Dev handlers are stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerHandler {
    /// URL pattern the handler serves; `None` matches every route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    /// Handler reference (a file path or a host-side handler name).
    pub handler: String,
}

impl DevServerHandler {
    /// Creates a dev handler.
    pub fn new(route: Option<String>, handler: impl Into<String>) -> Self {
        Self {
            route,
            handler: handler.into(),
        }
    }
}
