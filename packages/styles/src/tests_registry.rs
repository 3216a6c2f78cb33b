/// Registry lifecycle tests: the at-most-one-container discipline and
/// handle-scoped release.
use crate::*;

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn test_repeated_identical_apply_keeps_one_container() {
        let registry = StyleRegistry::new();
        let mut handles = Vec::new();
        for _ in 0..5 {
            handles.push(registry.apply(PreviewTheme::Light, ".x { color: red; }"));
            assert_eq!(registry.container_count(), 1);
        }
        assert_eq!(registry.container_count(), 1);
    }

    #[test]
    fn test_new_pair_replaces_prior_container() {
        let registry = StyleRegistry::new();
        let first = registry.apply(PreviewTheme::Light, "");
        let light_css = registry.rendered_css();

        let _second = registry.apply(PreviewTheme::Dark, ".hero { color: pink; }");
        assert_eq!(registry.container_count(), 1);
        assert_ne!(registry.rendered_css(), light_css);
        assert!(registry.rendered_css().contains(".hero"));

        // The first handle's container is already gone.
        assert!(!first.is_attached());
    }

    #[test]
    fn test_drop_removes_exactly_own_container() {
        let registry = StyleRegistry::new();
        let handle = registry.apply(PreviewTheme::Light, "");
        assert_eq!(registry.container_count(), 1);
        drop(handle);
        assert_eq!(registry.container_count(), 0);
        assert_eq!(registry.rendered_css(), "");
    }

    #[test]
    fn test_stale_handle_drop_leaves_newer_container_alone() {
        let registry = StyleRegistry::new();
        let first = registry.apply(PreviewTheme::Light, "");
        let second = registry.apply(PreviewTheme::Dark, "");

        // First was replaced; dropping it must not tear down the container
        // owned by `second`.
        drop(first);
        assert_eq!(registry.container_count(), 1);
        assert!(second.is_attached());
    }

    #[test]
    fn test_identical_pairs_inject_identical_bytes() {
        let registry = StyleRegistry::new();
        let _a = registry.apply(PreviewTheme::Custom, ".x { color: red; }");
        let first = registry.rendered_css();
        let _b = registry.apply(PreviewTheme::Custom, ".x { color: red; }");
        assert_eq!(registry.rendered_css(), first);
    }

    #[test]
    fn test_container_uses_fixed_id() {
        let registry = StyleRegistry::new();
        let _handle = registry.apply(PreviewTheme::Light, "");
        assert_eq!(registry.container().unwrap().id, STYLE_CONTAINER_ID);
    }

    #[test]
    fn test_explicit_release() {
        let registry = StyleRegistry::new();
        let handle = registry.apply(PreviewTheme::Dark, "");
        handle.release();
        assert_eq!(registry.container_count(), 0);
    }
}
