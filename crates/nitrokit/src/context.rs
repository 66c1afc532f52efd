// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The build-time configuration context and its registration helpers.
//!
//! Modules receive a `&mut KitContext` during the configuration phase and
//! call the `add_*` helpers on it. Immediate registrations (handlers,
//! plugins) land in [`KitOptions`] right away; the rest queue a
//! [`PendingHook`] that the host applies when it fires the event.
//!
//! # Example
//!
//! ```rust
//! use nitrokit::{HttpMethod, KitContext, ServerHandler};
//!
//! let mut ctx = KitContext::new();
//! ctx.add_server_handler(ServerHandler::new("server/api/users.get.ts"));
//! ctx.add_prerender_routes(["/", "/about"]);
//!
//! assert_eq!(ctx.options().server_handlers[0].method, Some(HttpMethod::Get));
//! assert!(ctx.server().is_err());
//! ```

use crate::error::{KitError, KitResult};
use crate::handler::{DevServerHandler, ServerHandler};
use crate::hooks::{HookEvent, HookRegistry, PendingHook};
use crate::path::normalize;
use crate::server::{Import, ServerConfig, ServerInstance};
use crate::utils::OneOrMany;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Build options the registration helpers write into.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KitOptions {
    /// Server route handlers.
    #[serde(default)]
    pub server_handlers: Vec<ServerHandler>,

    /// Handlers that only exist in development.
    #[serde(default)]
    pub dev_server_handlers: Vec<DevServerHandler>,

    /// Server-runtime configuration.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Options for [`KitContext::add_server_imports_dir`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportsDirOptions {
    /// Insert the directories before the existing ones.
    pub prepend: bool,
}

impl ImportsDirOptions {
    /// Options that put the directories first.
    pub fn prepend() -> Self {
        Self { prepend: true }
    }
}

/// The configuration context shared by every registration helper.
#[derive(Debug, Default)]
pub struct KitContext {
    options: KitOptions,
    hooks: HookRegistry,
    server: Option<ServerInstance>,
}

impl KitContext {
    /// Creates a context with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context starting from existing options.
    pub fn with_options(options: KitOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Current build options.
    pub fn options(&self) -> &KitOptions {
        &self.options
    }

    /// Mutable access to the build options.
    pub fn options_mut(&mut self) -> &mut KitOptions {
        &mut self.options
    }

    /// Queued lifecycle hooks.
    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Adds a server route handler.
    ///
    /// Without an explicit method, the method is inferred from the handler
    /// filename (`users.get.ts` → `GET`). The handler path is normalized.
    pub fn add_server_handler(&mut self, handler: ServerHandler) {
        let handler = handler.normalized();
        debug!(
            "Server handler {} (method: {})",
            handler.handler,
            handler.method.map(|m| m.as_str()).unwrap_or("any")
        );
        self.options.server_handlers.push(handler);
    }

    /// Adds a development-only handler, stored exactly as given.
    pub fn add_dev_server_handler(&mut self, handler: DevServerHandler) {
        debug!("Dev server handler {}", handler.handler);
        self.options.dev_server_handlers.push(handler);
    }

    /// Adds a server plugin. The path is normalized.
    pub fn add_server_plugin(&mut self, plugin: &str) {
        let plugin = normalize(plugin);
        debug!("Server plugin {}", plugin);
        self.options.server.plugins_mut().push(plugin);
    }

    /// Adds routes to prerender.
    ///
    /// Accepts one route or a list. Missing and empty entries are dropped;
    /// if none remain nothing is registered. Otherwise a
    /// `prerender:routes` hook is queued that adds the routes every time
    /// the event fires.
    pub fn add_prerender_routes(&mut self, routes: impl Into<OneOrMany>) {
        let routes = routes.into().into_truthy();
        if routes.is_empty() {
            return;
        }

        debug!("Prerender routes: {}", routes.len());
        self.hooks.register(PendingHook::PrerenderRoutes { routes });
    }

    /// Returns the server instance.
    ///
    /// Only available once the host has fired `ready`. The instance is a
    /// snapshot: later changes to the options are not applied to it.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::ServerNotReady`] before the `ready` hook.
    pub fn server(&self) -> KitResult<&ServerInstance> {
        self.server.as_ref().ok_or(KitError::ServerNotReady)
    }

    /// Adds server auto-import entries.
    ///
    /// The entries are appended, in order and without deduplication, when
    /// `nitro:config` fires.
    pub fn add_server_imports(&mut self, imports: Vec<Import>) {
        debug!("Server imports: {}", imports.len());
        self.hooks.register(PendingHook::ServerImports { imports });
    }

    /// Adds directories scanned for server auto-imports.
    ///
    /// Applied when `nitro:config` fires: appended by default, or inserted
    /// in front of the existing directories with [`ImportsDirOptions::prepend`].
    pub fn add_server_imports_dir(
        &mut self,
        dirs: impl Into<OneOrMany>,
        options: ImportsDirOptions,
    ) {
        let dirs = dirs.into().into_present();
        debug!("Server import dirs: {:?} (prepend: {})", dirs, options.prepend);
        self.hooks.register(PendingHook::ServerImportsDir {
            dirs,
            prepend: options.prepend,
        });
    }

    /// Fires a lifecycle event on the queued hooks. Called by the host.
    ///
    /// Returns how many hooks ran.
    pub fn call_hook(&self, mut event: HookEvent<'_>) -> usize {
        self.hooks.call(&mut event)
    }

    /// Fires `nitro:config` on the context's own server configuration.
    pub fn resolve_server_config(&mut self) -> usize {
        let Self { options, hooks, .. } = self;
        hooks.call(&mut HookEvent::ServerConfig(&mut options.server))
    }

    /// Stores the built server and marks the context ready. Called by the host.
    pub fn ready(&mut self, server: ServerInstance) {
        debug!("Server ready ({} handlers)", server.handlers().len());
        self.server = Some(server);
    }

    /// Builds a server instance from the current options and marks the
    /// context ready.
    pub fn build_server(&mut self) -> &ServerInstance {
        let server = ServerInstance::new(
            self.options.server.clone(),
            self.options.server_handlers.clone(),
            self.options.dev_server_handlers.clone(),
        );
        debug!("Server built ({} handlers)", server.handlers().len());
        self.server.insert(server)
    }

    /// Returns true once the server has been built.
    pub fn is_ready(&self) -> bool {
        self.server.is_some()
    }
}
