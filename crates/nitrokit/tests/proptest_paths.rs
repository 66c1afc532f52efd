// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Property tests for path normalization and method inference.

use nitrokit::path::normalize;
use nitrokit::{HttpMethod, KitContext, ServerHandler};
use proptest::prelude::*;

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("".to_string()),
            Just(".".to_string()),
            Just("..".to_string()),
            "[a-zA-Z0-9_\\-]{1,6}",
            "[a-z]{1,4}\\.[a-z]{1,3}",
            "[a-zA-Z]:",
        ],
        0..6,
    )
    .prop_flat_map(|segments| {
        let len = segments.len().saturating_sub(1);
        (
            Just(segments),
            prop::collection::vec(prop_oneof![Just("/"), Just("\\"), Just("//")], len),
        )
    })
    .prop_map(|(segments, separators)| {
        let mut path = String::new();
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                path.push_str(separators[i - 1]);
            }
            path.push_str(segment);
        }
        path
    })
}

fn verb_strategy() -> impl Strategy<Value = HttpMethod> {
    prop::sample::select(HttpMethod::ALL.to_vec())
}

proptest! {
    #[test]
    fn normalize_is_idempotent(path in path_strategy()) {
        let once = normalize(&path);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_never_emits_backslashes(path in path_strategy()) {
        prop_assert!(!normalize(&path).contains('\\'));
    }

    #[test]
    fn normalize_is_idempotent_on_arbitrary_text(path in "[a-zA-Z0-9:./\\\\]{0,16}") {
        let once = normalize(&path);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn verb_suffix_is_inferred(
        stem in "[a-z]{1,8}(/[a-z]{1,8}){0,2}",
        verb in verb_strategy(),
        ext in prop::option::of("[a-z]{1,4}"),
    ) {
        let path = match ext {
            Some(ext) => format!("{}.{}.{}", stem, verb, ext),
            None => format!("{}.{}", stem, verb),
        };
        prop_assert_eq!(HttpMethod::from_handler_path(&path), Some(verb));
    }

    #[test]
    fn non_verb_suffix_infers_nothing(stem in "[a-z]{1,8}", ext in "(ts|js|mjs|vue)") {
        let path = format!("api/{}.{}", stem, ext);
        prop_assume!(!HttpMethod::ALL.iter().any(|m| stem == m.as_str()));
        prop_assert_eq!(HttpMethod::from_handler_path(&path), None);
    }

    #[test]
    fn registered_handler_path_is_normalized(path in path_strategy()) {
        let mut ctx = KitContext::new();
        ctx.add_server_handler(ServerHandler::new(path.clone()));
        prop_assert_eq!(&ctx.options().server_handlers[0].handler, &normalize(&path));
    }
}
