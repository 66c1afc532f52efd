// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Prerender command: prints one route per line.

use super::load_and_resolve;
use std::path::Path;

/// Prints the routes collected by `prerender:routes`.
pub fn run(config: &Path) -> anyhow::Result<()> {
    let resolved = load_and_resolve(config)?;
    for route in &resolved.prerender_routes {
        println!("{}", route);
    }
    Ok(())
}
