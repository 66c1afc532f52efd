// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Resolve command: prints the resolved configuration.

use super::load_and_resolve;
use std::path::Path;

/// Prints the resolved configuration as pretty JSON.
pub fn run(config: &Path, dev: bool) -> anyhow::Result<()> {
    let resolved = load_and_resolve(config)?;
    let report = resolved.report(dev)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
