// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Handlers command: lists the built server's handlers.

use super::load_and_resolve;
use console::style;
use nitrokit::{DevServerHandler, ServerHandler};
use std::path::Path;

/// Lists route handlers, then dev handlers.
pub fn run(config: &Path) -> anyhow::Result<()> {
    let resolved = load_and_resolve(config)?;
    let server = resolved.context.server()?;

    println!(
        "{} {}",
        style("Server handlers for").cyan(),
        style(&resolved.project.name).bold()
    );
    for handler in server.handlers() {
        let (method, rest) = format_handler(handler);
        println!("  {} {}", style(method).green(), rest);
    }

    if !server.dev_handlers().is_empty() {
        println!();
        println!("{}", style("Dev handlers").cyan());
        for handler in server.dev_handlers() {
            println!("  {}", format_dev_handler(handler));
        }
    }
    Ok(())
}

/// Formats a handler as a padded method column and `route -> handler`.
fn format_handler(handler: &ServerHandler) -> (String, String) {
    let method = handler
        .method
        .map(|m| m.as_str().to_uppercase())
        .unwrap_or_else(|| "*".to_string());
    let mut rest = format!(
        "{} -> {}",
        handler.route.as_deref().unwrap_or("*"),
        handler.handler
    );
    if handler.middleware == Some(true) {
        rest.push_str(" (middleware)");
    }
    if handler.lazy == Some(true) {
        rest.push_str(" (lazy)");
    }
    (format!("{:<7}", method), rest)
}

fn format_dev_handler(handler: &DevServerHandler) -> String {
    format!(
        "{} -> {}",
        handler.route.as_deref().unwrap_or("*"),
        handler.handler
    )
}
