// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! CLI command implementations.
//!
//! - `resolve`: Print the resolved server configuration as JSON
//! - `handlers`: List the resolved server handlers
//! - `prerender`: Print the collected prerender routes

/// Resolved handler listing.
pub mod handlers;
/// Prerender route listing.
pub mod prerender;
/// Resolved configuration as JSON.
pub mod resolve;

use crate::host::{self, Resolved};
use crate::manifest::Manifest;
use std::path::Path;

/// Loads the manifest and runs it through the lifecycle.
pub(crate) fn load_and_resolve(config: &Path) -> anyhow::Result<Resolved> {
    let manifest = Manifest::load(config)?;
    tracing::debug!("Loaded manifest for {}", manifest.project.name);
    Ok(host::resolve(&manifest))
}
