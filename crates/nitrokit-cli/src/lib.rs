// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! nitrokit CLI library.
//!
//! Runs a module manifest through the registration helpers and a minimal
//! host lifecycle, then reports what the server would be built with.
//!
//! # Usage
//!
//! ```bash
//! nitrokit resolve       # Resolved configuration as JSON
//! nitrokit handlers      # Handler listing
//! nitrokit prerender     # Prerender routes
//! ```
//!
//! # Configuration
//!
//! Modules are described in `nitrokit.toml` (see [`manifest`]).

/// CLI commands (resolve, handlers, prerender).
pub mod commands;
/// Minimal host lifecycle.
pub mod host;
/// Module manifest from `nitrokit.toml`.
pub mod manifest;
