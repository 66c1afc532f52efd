// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Module manifest loaded from `nitrokit.toml`.
//!
//! The manifest describes what a module registers, so the registration
//! helpers can be run without writing Rust.
//!
//! # Example Manifest
//!
//! ```toml
//! [project]
//! name = "my-app"
//!
//! [server]
//! plugins = ["server/plugins/base.ts"]
//!
//! [server.imports]
//! dirs = ["server/utils"]
//!
//! [[handlers]]
//! route = "/api/users"
//! handler = "server/api/users.get.ts"
//!
//! [[dev_handlers]]
//! route = "/__inspect"
//! handler = "dev/inspect"
//!
//! [register]
//! plugins = ["server/plugins/log.ts"]
//! prerender = ["/", "/about"]
//! imports = [{ name = "useDb", from = "~/server/db" }]
//! import_dirs = ["server/composables"]
//! prepend_import_dirs = ["server/early"]
//! ```

use nitrokit::{
    DevServerHandler, Import, ImportsDirOptions, KitContext, KitOptions, ServerConfig,
    ServerHandler,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "nitrokit.toml";

/// Main manifest structure loaded from `nitrokit.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Project metadata.
    #[serde(default)]
    pub project: ProjectConfig,
    /// Base server-runtime configuration, before any registration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Server route handlers.
    #[serde(default)]
    pub handlers: Vec<ServerHandler>,
    /// Development-only handlers.
    #[serde(default)]
    pub dev_handlers: Vec<DevServerHandler>,
    /// Plugins, routes and imports the module registers.
    #[serde(default)]
    pub register: RegisterConfig,
}

/// Project metadata configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Project name (default: "unnamed").
    #[serde(default = "default_name")]
    pub name: String,
    /// Project version (default: "0.1.0").
    #[serde(default = "default_version")]
    pub version: String,
}

/// Registrations applied through the `add_*` helpers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterConfig {
    /// Server plugin paths.
    #[serde(default)]
    pub plugins: Vec<String>,
    /// Routes to prerender.
    #[serde(default)]
    pub prerender: Vec<String>,
    /// Server auto-import entries.
    #[serde(default)]
    pub imports: Vec<Import>,
    /// Auto-import directories appended after the existing ones.
    #[serde(default)]
    pub import_dirs: Vec<String>,
    /// Auto-import directories inserted before the existing ones.
    #[serde(default)]
    pub prepend_import_dirs: Vec<String>,
}

fn default_name() -> String {
    "unnamed".to_string()
}

fn default_version() -> String {
    "0.1.0".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
        }
    }
}

/// Errors raised while loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Manifest path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The manifest is not valid TOML or does not match the expected shape.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// Manifest path.
        path: PathBuf,
        /// Underlying error.
        source: toml::de::Error,
    },
}

impl Manifest {
    /// Loads a manifest from the given path.
    ///
    /// If the file does not exist, returns the default manifest, which
    /// registers nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            tracing::debug!("No manifest at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses a manifest from TOML source.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Creates a context seeded with the manifest's base server configuration.
    pub fn context(&self) -> KitContext {
        KitContext::with_options(KitOptions {
            server: self.server.clone(),
            ..KitOptions::default()
        })
    }

    /// Runs the manifest's registrations against a context.
    ///
    /// Empty registration lists are skipped entirely, so an empty
    /// `imports` array does not create an import list.
    pub fn apply(&self, ctx: &mut KitContext) {
        for handler in &self.handlers {
            ctx.add_server_handler(handler.clone());
        }
        for handler in &self.dev_handlers {
            ctx.add_dev_server_handler(handler.clone());
        }
        for plugin in &self.register.plugins {
            ctx.add_server_plugin(plugin);
        }

        ctx.add_prerender_routes(self.register.prerender.clone());

        if !self.register.imports.is_empty() {
            ctx.add_server_imports(self.register.imports.clone());
        }
        if !self.register.import_dirs.is_empty() {
            ctx.add_server_imports_dir(
                self.register.import_dirs.clone(),
                ImportsDirOptions::default(),
            );
        }
        if !self.register.prepend_import_dirs.is_empty() {
            ctx.add_server_imports_dir(
                self.register.prepend_import_dirs.clone(),
                ImportsDirOptions::prepend(),
            );
        }
    }
}
