//! Property-based tests for destination builders.
//!
//! These tests use proptest to generate random identifiers and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::dest::{local_path, remote_url};
    use proptest::prelude::*;
    use std::path::Path;

    // Identifier-shaped strings: one or more slash-separated segments.
    const IDENTIFIER: &str = "[a-zA-Z0-9_.-]{1,20}(/[a-zA-Z0-9_.-]{1,20}){0,3}";

    proptest! {
        /// Property: local_path always stays prefixed by the output root
        /// for identifiers without traversal segments.
        #[test]
        fn local_path_preserves_root_prefix(id in IDENTIFIER) {
            let root = Path::new("/srv/projects");
            let path = local_path(root, &id);
            prop_assert!(
                path.starts_with(root),
                "path {:?} lost root prefix for identifier '{}'",
                path,
                id
            );
        }

        /// Property: distinct identifiers never collide on the same local
        /// path for a fixed output root.
        #[test]
        fn local_path_is_injective(a in IDENTIFIER, b in IDENTIFIER) {
            let root = Path::new("/srv/projects");
            if a != b {
                prop_assert_ne!(local_path(root, &a), local_path(root, &b));
            } else {
                prop_assert_eq!(local_path(root, &a), local_path(root, &b));
            }
        }

        /// Property: the remote URL embeds the identifier verbatim after
        /// the host separator.
        #[test]
        fn remote_url_embeds_identifier(id in IDENTIFIER) {
            let url = remote_url("github.com", &id);
            prop_assert_eq!(url.strip_prefix("git@github.com:"), Some(id.as_str()));
        }

        /// Property: remote_url is injective w.r.t. the identifier for a
        /// fixed host.
        #[test]
        fn remote_url_is_injective(a in IDENTIFIER, b in IDENTIFIER) {
            if a != b {
                prop_assert_ne!(remote_url("github.com", &a), remote_url("github.com", &b));
            }
        }

        /// Property: both builders are deterministic (same input = same output).
        #[test]
        fn builders_are_deterministic(id in IDENTIFIER) {
            let root = Path::new("./out");
            prop_assert_eq!(local_path(root, &id), local_path(root, &id));
            prop_assert_eq!(remote_url("github.com", &id), remote_url("github.com", &id));
        }
    }
}
