// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Server-runtime configuration and the built server instance.
//!
//! [`ServerConfig`] is the part of the build options handed to the server
//! runtime. Its lists are optional and created on first use, so a config
//! that nobody touched serializes to an empty table.

use crate::handler::{DevServerHandler, ServerHandler};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An auto-import entry: one export of a module made available by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    /// Exported name.
    pub name: String,

    /// Local alias, when it differs from `name`.
    #[serde(default, rename = "as", skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Module specifier the name is imported from.
    pub from: String,
}

impl Import {
    /// Creates an import of `name` from `from`.
    pub fn new(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            from: from.into(),
        }
    }

    /// Sets the local alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// Auto-import settings of the server runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportsConfig {
    /// Explicit import entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imports: Option<Vec<Import>>,

    /// Directories scanned for auto-imports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dirs: Option<Vec<String>>,
}

/// Server-runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server plugin paths, in registration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,

    /// Auto-import settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imports: Option<ImportsConfig>,

    /// Settings this crate does not interpret, kept for the runtime.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServerConfig {
    /// Returns the plugin list, creating it if absent.
    pub fn plugins_mut(&mut self) -> &mut Vec<String> {
        self.plugins.get_or_insert_with(Vec::new)
    }

    /// Returns the imports section, creating it if absent.
    pub fn imports_mut(&mut self) -> &mut ImportsConfig {
        self.imports.get_or_insert_with(ImportsConfig::default)
    }

    /// Returns the import entry list, creating it (and its section) if absent.
    pub fn import_entries_mut(&mut self) -> &mut Vec<Import> {
        self.imports_mut().imports.get_or_insert_with(Vec::new)
    }

    /// Returns the auto-import directory list, creating it (and its section) if absent.
    pub fn import_dirs_mut(&mut self) -> &mut Vec<String> {
        self.imports_mut().dirs.get_or_insert_with(Vec::new)
    }

    /// Auto-import directories, empty if none were configured.
    pub fn import_dirs(&self) -> &[String] {
        self.imports
            .as_ref()
            .and_then(|imports| imports.dirs.as_deref())
            .unwrap_or_default()
    }

    /// Import entries, empty if none were configured.
    pub fn import_entries(&self) -> &[Import] {
        self.imports
            .as_ref()
            .and_then(|imports| imports.imports.as_deref())
            .unwrap_or_default()
    }
}

/// The server built by the host once configuration is complete.
///
/// The instance holds a snapshot: changing the options it was built from,
/// or a clone of its own options, does not affect it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerInstance {
    options: ServerConfig,
    handlers: Vec<ServerHandler>,
    dev_handlers: Vec<DevServerHandler>,
}

impl ServerInstance {
    /// Builds an instance from resolved options.
    pub fn new(
        options: ServerConfig,
        handlers: Vec<ServerHandler>,
        dev_handlers: Vec<DevServerHandler>,
    ) -> Self {
        Self {
            options,
            handlers,
            dev_handlers,
        }
    }

    /// Server-runtime configuration the instance was built with.
    pub fn options(&self) -> &ServerConfig {
        &self.options
    }

    /// Route handlers the instance serves.
    pub fn handlers(&self) -> &[ServerHandler] {
        &self.handlers
    }

    /// Dev-only handlers the instance serves.
    pub fn dev_handlers(&self) -> &[DevServerHandler] {
        &self.dev_handlers
    }
}
