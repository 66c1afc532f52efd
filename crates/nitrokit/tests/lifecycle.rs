// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Integration tests for the configuration phase followed by the host lifecycle.

use nitrokit::{
    DevServerHandler, HookEvent, HookName, HttpMethod, Import, ImportsDirOptions, KitContext,
    KitError, KitOptions, PrerenderRoutesContext, ServerHandler,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("nitrokit=trace")
        .try_init();
}

/// A module's setup: the calls a module author makes during configuration.
fn module_setup(ctx: &mut KitContext) {
    ctx.add_server_handler(ServerHandler::new("server/api/users.get.ts").with_route("/api/users"));
    ctx.add_server_handler(
        ServerHandler::new("server\\api\\users.ts")
            .with_route("/api/users")
            .with_lazy(true),
    );
    ctx.add_dev_server_handler(DevServerHandler::new(
        Some("/__inspect".to_string()),
        "./dev//inspect",
    ));
    ctx.add_server_plugin("./server/plugins/../plugins/log.ts");
    ctx.add_prerender_routes(vec!["/", "/about", "/"]);
    ctx.add_prerender_routes(vec![None, Some("")]);
    ctx.add_server_imports(vec![Import::new("useDb", "~/server/db")]);
    ctx.add_server_imports_dir("server/composables", ImportsDirOptions::default());
    ctx.add_server_imports_dir(vec!["server/early"], ImportsDirOptions::prepend());
}

#[test]
fn test_full_lifecycle() {
    init_tracing();

    let mut options = KitOptions::default();
    options.server.import_dirs_mut().push("server/utils".to_string());
    let mut ctx = KitContext::with_options(options);

    module_setup(&mut ctx);

    // Configuration phase only queued the hooks.
    assert_eq!(ctx.hooks().len(), 4);
    assert_eq!(ctx.hooks().pending(HookName::PrerenderRoutes).count(), 1);
    assert_eq!(ctx.hooks().pending(HookName::ServerConfig).count(), 3);
    assert_eq!(ctx.options().server.import_dirs(), ["server/utils"]);
    assert_eq!(ctx.server().unwrap_err(), KitError::ServerNotReady);

    // Host: nitro:config
    assert_eq!(ctx.resolve_server_config(), 3);
    let server = &ctx.options().server;
    assert_eq!(
        server.import_dirs(),
        ["server/early", "server/utils", "server/composables"]
    );
    assert_eq!(server.import_entries(), [Import::new("useDb", "~/server/db")]);
    assert_eq!(
        server.plugins.as_deref(),
        Some(&["server/plugins/log.ts".to_string()][..])
    );

    // Host: ready
    ctx.build_server();
    let instance = ctx.server().unwrap();
    assert_eq!(instance.handlers().len(), 2);
    assert_eq!(instance.handlers()[0].method, Some(HttpMethod::Get));
    assert_eq!(instance.handlers()[1].handler, "server/api/users.ts");
    assert_eq!(instance.handlers()[1].method, None);
    assert_eq!(instance.dev_handlers()[0].handler, "./dev//inspect");

    // Host: prerender:routes
    let mut prerender = PrerenderRoutesContext::new();
    prerender.routes.insert("/sitemap.xml".to_string());
    ctx.call_hook(HookEvent::PrerenderRoutes(&mut prerender));
    let routes: Vec<&str> = prerender.routes.iter().map(String::as_str).collect();
    assert_eq!(routes, vec!["/sitemap.xml", "/", "/about"]);
}

#[test]
fn test_instance_ignores_later_changes() {
    let mut ctx = KitContext::new();
    ctx.add_server_plugin("a.ts");
    ctx.build_server();

    ctx.add_server_plugin("b.ts");
    ctx.options_mut().server_handlers.clear();

    let plugins = ctx.server().unwrap().options().plugins.clone().unwrap();
    assert_eq!(plugins, vec!["a.ts".to_string()]);
    assert_eq!(ctx.options().server.plugins.as_ref().unwrap().len(), 2);
}

#[test]
fn test_hook_fired_twice_applies_twice() {
    let mut ctx = KitContext::new();
    ctx.add_server_imports_dir("dir", ImportsDirOptions::default());

    ctx.resolve_server_config();
    ctx.resolve_server_config();
    assert_eq!(ctx.options().server.import_dirs(), ["dir", "dir"]);
}

#[test]
fn test_empty_imports_still_create_the_list() {
    let mut ctx = KitContext::new();
    ctx.add_server_imports(Vec::new());
    ctx.resolve_server_config();

    let imports = ctx.options().server.imports.as_ref().unwrap();
    assert_eq!(imports.imports.as_deref(), Some(&[][..]));
    assert!(imports.dirs.is_none());
}

#[test]
fn test_pending_hooks_are_inspectable() {
    let mut ctx = KitContext::new();
    ctx.add_server_imports_dir(["x", "y"], ImportsDirOptions::prepend());

    let json = serde_json::to_value(ctx.hooks().iter().collect::<Vec<_>>()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "kind": "server_imports_dir", "dirs": ["x", "y"], "prepend": true }])
    );
}
