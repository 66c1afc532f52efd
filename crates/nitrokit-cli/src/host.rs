// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Minimal host lifecycle.
//!
//! Plays the build stages in the order the framework runs them:
//! configuration, `nitro:config`, `ready`, then `prerender:routes`.

use crate::manifest::{Manifest, ProjectConfig};
use nitrokit::{
    DevServerHandler, HookEvent, KitContext, KitResult, PrerenderRoutesContext, ServerConfig,
    ServerHandler,
};
use serde::Serialize;

/// The outcome of running a manifest through the lifecycle.
pub struct Resolved {
    /// Project metadata from the manifest.
    pub project: ProjectConfig,
    /// The context after every stage has run.
    pub context: KitContext,
    /// Routes collected by `prerender:routes`, in insertion order.
    pub prerender_routes: Vec<String>,
}

/// Serializable view of a resolved build.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// Project metadata.
    pub project: &'a ProjectConfig,
    /// Server-runtime configuration of the built server.
    pub server: &'a ServerConfig,
    /// Route handlers of the built server.
    pub handlers: &'a [ServerHandler],
    /// Dev handlers, only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_handlers: Option<&'a [DevServerHandler]>,
    /// Routes to prerender.
    pub prerender: &'a [String],
}

/// Applies a manifest and runs the lifecycle on a fresh context.
pub fn resolve(manifest: &Manifest) -> Resolved {
    let mut context = manifest.context();
    manifest.apply(&mut context);

    let applied = context.resolve_server_config();
    tracing::info!("Applied {} server config hooks", applied);

    context.build_server();

    let mut prerender = PrerenderRoutesContext::new();
    context.call_hook(HookEvent::PrerenderRoutes(&mut prerender));
    tracing::info!("Collected {} prerender routes", prerender.routes.len());

    Resolved {
        project: manifest.project.clone(),
        context,
        prerender_routes: prerender.routes.into_iter().collect(),
    }
}

impl Resolved {
    /// Builds the report from the server instance.
    ///
    /// # Errors
    ///
    /// Fails if the server was never built.
    pub fn report(&self, include_dev: bool) -> KitResult<Report<'_>> {
        let server = self.context.server()?;
        Ok(Report {
            project: &self.project,
            server: server.options(),
            handlers: server.handlers(),
            dev_handlers: include_dev.then(|| server.dev_handlers()),
            prerender: &self.prerender_routes,
        })
    }
}
