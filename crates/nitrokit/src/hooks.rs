// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Lifecycle hooks queued on the configuration context.
//!
//! Registration helpers that act "later" do not store closures. They queue a
//! [`PendingHook`] record naming the event and carrying its payload; the host
//! fires an event with [`HookRegistry::call`] and every matching record is
//! applied in registration order. Records stay queued after firing, so an
//! event that fires twice applies them twice.
//!
//! # Events
//!
//! | Name               | Payload                       |
//! |--------------------|-------------------------------|
//! | `prerender:routes` | [`PrerenderRoutesContext`]    |
//! | `nitro:config`     | [`ServerConfig`]              |
//! | `ready`            | none (marks the server built) |

use crate::server::{Import, ServerConfig};
use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Names of the lifecycle events this crate registers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HookName {
    /// Collects the set of routes to prerender.
    #[serde(rename = "prerender:routes")]
    PrerenderRoutes,
    /// Final adjustments to the server-runtime configuration.
    #[serde(rename = "nitro:config")]
    ServerConfig,
    /// The server instance has been built.
    #[serde(rename = "ready")]
    Ready,
}

impl HookName {
    /// Event name as the host spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            HookName::PrerenderRoutes => "prerender:routes",
            HookName::ServerConfig => "nitro:config",
            HookName::Ready => "ready",
        }
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown hook name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown hook: {0}")]
pub struct UnknownHook(pub String);

impl FromStr for HookName {
    type Err = UnknownHook;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prerender:routes" => Ok(HookName::PrerenderRoutes),
            "nitro:config" => Ok(HookName::ServerConfig),
            "ready" => Ok(HookName::Ready),
            other => Err(UnknownHook(other.to_string())),
        }
    }
}

/// Payload of the `prerender:routes` event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerenderRoutesContext {
    /// Routes collected so far, in first-insertion order.
    pub routes: IndexSet<String>,
}

impl PrerenderRoutesContext {
    /// Creates an empty route set.
    pub fn new() -> Self {
        Self::default()
    }
}

/// An event being fired, borrowing its payload mutably.
#[derive(Debug)]
pub enum HookEvent<'a> {
    /// `prerender:routes`
    PrerenderRoutes(&'a mut PrerenderRoutesContext),
    /// `nitro:config`
    ServerConfig(&'a mut ServerConfig),
}

impl HookEvent<'_> {
    /// The event's name.
    pub fn name(&self) -> HookName {
        match self {
            HookEvent::PrerenderRoutes(_) => HookName::PrerenderRoutes,
            HookEvent::ServerConfig(_) => HookName::ServerConfig,
        }
    }
}

/// Work queued for a lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PendingHook {
    /// Adds routes to the prerender set.
    PrerenderRoutes {
        /// Routes to add.
        routes: Vec<String>,
    },
    /// Appends entries to the server's import list.
    ServerImports {
        /// Entries to append.
        imports: Vec<Import>,
    },
    /// Adds directories to the server's auto-import directory list.
    ServerImportsDir {
        /// Directories to add, in order.
        dirs: Vec<String>,
        /// Insert in front of existing entries instead of after them.
        prepend: bool,
    },
}

impl PendingHook {
    /// The event this record runs on.
    pub fn name(&self) -> HookName {
        match self {
            PendingHook::PrerenderRoutes { .. } => HookName::PrerenderRoutes,
            PendingHook::ServerImports { .. } | PendingHook::ServerImportsDir { .. } => {
                HookName::ServerConfig
            }
        }
    }

    /// Applies the record to a fired event.
    ///
    /// Returns false, leaving the payload untouched, when the event is not
    /// the one this record waits for.
    pub fn apply(&self, event: &mut HookEvent<'_>) -> bool {
        match (self, event) {
            (PendingHook::PrerenderRoutes { routes }, HookEvent::PrerenderRoutes(ctx)) => {
                ctx.routes.extend(routes.iter().cloned());
                true
            }
            (PendingHook::ServerImports { imports }, HookEvent::ServerConfig(config)) => {
                config.import_entries_mut().extend(imports.iter().cloned());
                true
            }
            (PendingHook::ServerImportsDir { dirs, prepend }, HookEvent::ServerConfig(config)) => {
                let list = config.import_dirs_mut();
                if *prepend {
                    list.splice(0..0, dirs.iter().cloned());
                } else {
                    list.extend(dirs.iter().cloned());
                }
                true
            }
            _ => false,
        }
    }
}

/// Ordered queue of pending hooks.
#[derive(Debug, Clone, Default)]
pub struct HookRegistry {
    hooks: Vec<PendingHook>,
}

impl HookRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a hook after all previously registered ones.
    pub fn register(&mut self, hook: PendingHook) {
        tracing::trace!("Queued hook on {}", hook.name());
        self.hooks.push(hook);
    }

    /// Fires an event: applies every matching hook in registration order.
    ///
    /// Returns how many hooks ran.
    pub fn call(&self, event: &mut HookEvent<'_>) -> usize {
        let name = event.name();
        let applied = self
            .hooks
            .iter()
            .filter(|hook| hook.name() == name)
            .filter(|hook| hook.apply(event))
            .count();
        tracing::debug!("Fired {} ({} hooks)", name, applied);
        applied
    }

    /// Hooks queued for the given event, in registration order.
    pub fn pending(&self, name: HookName) -> impl Iterator<Item = &PendingHook> {
        self.hooks.iter().filter(move |hook| hook.name() == name)
    }

    /// All queued hooks.
    pub fn iter(&self) -> impl Iterator<Item = &PendingHook> {
        self.hooks.iter()
    }

    /// Number of queued hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_name_round_trip() {
        for name in [HookName::PrerenderRoutes, HookName::ServerConfig, HookName::Ready] {
            assert_eq!(name.as_str().parse::<HookName>(), Ok(name));
        }
        assert!("build:done".parse::<HookName>().is_err());
    }

    #[test]
    fn test_apply_ignores_other_events() {
        let hook = PendingHook::PrerenderRoutes {
            routes: vec!["/a".to_string()],
        };
        let mut config = ServerConfig::default();
        assert!(!hook.apply(&mut HookEvent::ServerConfig(&mut config)));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_prepend_keeps_given_order() {
        let mut config = ServerConfig::default();
        config.import_dirs_mut().push("base".to_string());

        let hook = PendingHook::ServerImportsDir {
            dirs: vec!["a".to_string(), "b".to_string()],
            prepend: true,
        };
        hook.apply(&mut HookEvent::ServerConfig(&mut config));
        assert_eq!(config.import_dirs(), ["a", "b", "base"]);
    }

    #[test]
    fn test_call_runs_matching_hooks_in_order() {
        let mut registry = HookRegistry::new();
        registry.register(PendingHook::ServerImportsDir {
            dirs: vec!["first".to_string()],
            prepend: false,
        });
        registry.register(PendingHook::PrerenderRoutes {
            routes: vec!["/".to_string()],
        });
        registry.register(PendingHook::ServerImportsDir {
            dirs: vec!["second".to_string()],
            prepend: false,
        });

        let mut config = ServerConfig::default();
        let applied = registry.call(&mut HookEvent::ServerConfig(&mut config));

        assert_eq!(applied, 2);
        assert_eq!(config.import_dirs(), ["first", "second"]);
        assert_eq!(registry.pending(HookName::ServerConfig).count(), 2);
        assert_eq!(registry.pending(HookName::Ready).count(), 0);
    }

    #[test]
    fn test_hooks_stay_queued_after_firing() {
        let mut registry = HookRegistry::new();
        registry.register(PendingHook::ServerImports {
            imports: vec![Import::new("useDb", "~/db")],
        });

        let mut config = ServerConfig::default();
        registry.call(&mut HookEvent::ServerConfig(&mut config));
        registry.call(&mut HookEvent::ServerConfig(&mut config));

        assert_eq!(registry.len(), 1);
        assert_eq!(config.import_entries().len(), 2);
    }
}
