// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! # nitrokit
//!
//! Registration helpers for a web framework's build-time server
//! configuration.
//!
//! Modules get a [`KitContext`] during the configuration phase and use it to
//! add server handlers, dev handlers, server plugins, prerender routes and
//! auto-imports. Work that depends on later build stages is queued as
//! [`PendingHook`] records and applied when the host fires the event.
//!
//! ## Quick Start
//!
//! ```rust
//! use nitrokit::{HookEvent, ImportsDirOptions, KitContext, PrerenderRoutesContext, ServerHandler};
//!
//! let mut ctx = KitContext::new();
//! ctx.add_server_handler(ServerHandler::new("server/api/health.get.ts").with_route("/health"));
//! ctx.add_server_plugin("server/plugins/logger.ts");
//! ctx.add_server_imports_dir("server/utils", ImportsDirOptions::default());
//! ctx.add_prerender_routes(vec!["/", "/about"]);
//!
//! // Host side
//! ctx.resolve_server_config();
//! ctx.build_server();
//! let mut prerender = PrerenderRoutesContext::new();
//! ctx.call_hook(HookEvent::PrerenderRoutes(&mut prerender));
//!
//! assert_eq!(prerender.routes.len(), 2);
//! assert!(ctx.server().is_ok());
//! ```

/// Configuration context and registration helpers.
pub mod context;
/// Error types.
pub mod error;
/// Server handler descriptors.
pub mod handler;
/// Lifecycle hooks.
pub mod hooks;
/// HTTP methods and filename-based inference.
pub mod method;
/// Path normalization.
pub mod path;
/// Server-runtime configuration and server instance.
pub mod server;
/// Input coercion helpers.
pub mod utils;

pub use context::{ImportsDirOptions, KitContext, KitOptions};
pub use error::{KitError, KitResult};
pub use handler::{DevServerHandler, ServerHandler};
pub use hooks::{HookEvent, HookName, HookRegistry, PendingHook, PrerenderRoutesContext};
pub use method::HttpMethod;
pub use server::{Import, ImportsConfig, ServerConfig, ServerInstance};
pub use utils::OneOrMany;
