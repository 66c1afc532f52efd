// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for nitrokit.
//!
//! Registration itself never fails: handler paths, plugin paths and import
//! entries are accepted as given. The only failure is asking for the server
//! instance before the host has built it.

use thiserror::Error;

/// The main error type for nitrokit operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KitError {
    /// The server instance was requested before the `ready` hook fired.
    #[error("Server is not initialized yet. You can call `server()` only after the `ready` hook.")]
    ServerNotReady,
}

/// Convenience type alias for Results with [`KitError`].
pub type KitResult<T> = std::result::Result<T, KitError>;
