/// Edge case tests for the normalizer.
/// Boundary conditions, unusual inputs, and soft-failure paths.
use crate::*;

#[cfg(test)]
mod edge_case_tests {
    use super::*;

    fn normalize(source: &str) -> ProcessedModule {
        Normalizer::new().normalize(source)
    }

    #[test]
    fn test_self_closing_root_wraps_directly() {
        let module = normalize("<hr/>");
        assert_eq!(module.code, "render(<hr/>)");
    }

    #[test]
    fn test_nested_single_root_wraps_directly() {
        let module = normalize("<nav><a href=\"#\">Home</a><a href=\"#\">Docs</a></nav>");
        assert_eq!(
            module.code,
            "render(<nav><a href=\"#\">Home</a><a href=\"#\">Docs</a></nav>)"
        );
    }

    #[test]
    fn test_arrow_attribute_does_not_break_direct_wrap() {
        // The `=>` inside the attribute hides a `>` from the tag scanner; the
        // permissive fallback still wraps directly.
        let module = normalize("<button onClick={() => alert('hi')}>Go</button>");
        assert!(module.code.starts_with("render(<button"));
        assert!(module.code.ends_with("</button>)"));
    }

    #[test]
    fn test_member_expression_component_is_detected_as_jsx() {
        let module = normalize("<Card.Body>Text</Card.Body>");
        assert_eq!(module.code, "render(<Card.Body>Text</Card.Body>)");
    }

    #[test]
    fn test_class_declaration_renders_component() {
        let module = normalize(
            "class Timer extends React.Component { render() { return <span>0</span>; } }",
        );
        // `render()` inside the class body counts as an explicit render call,
        // so the class passes through untouched.
        assert!(module.code.contains("class Timer"));
    }

    #[test]
    fn test_zero_arg_arrow_component() {
        let module = normalize("const Badge = () => <span className=\"badge\">New</span>;");
        assert!(module.code.ends_with("render(<Badge />)"));
    }

    #[test]
    fn test_reserved_button_renamed_silently() {
        let module = normalize("const Button = () => <button>Mine</button>;");
        assert!(module.code.contains("const CustomButton"));
        assert!(module.code.ends_with("render(<CustomButton />)"));
        assert!(module.diagnostic.is_none());
    }

    #[test]
    fn test_non_reserved_name_kept() {
        let module = normalize("const Sidebar = () => <aside/>;");
        assert!(module.code.contains("const Sidebar"));
        assert!(module.code.ends_with("render(<Sidebar />)"));
    }

    #[test]
    fn test_whitespace_around_bare_jsx_is_trimmed() {
        let module = normalize("\n   <div>padded</div>   \n");
        assert_eq!(module.code, "render(<div>padded</div>)");
    }

    #[test]
    fn test_stripping_everything_leaves_diagnostic_fallback() {
        let module = normalize("import only from 'imports';\nexport default Thing;");
        assert_eq!(module.code, NO_CONTENT_PLACEHOLDER);
        assert!(module.diagnostic.is_some());
    }

    #[test]
    fn test_very_long_input_does_not_panic() {
        let source = format!(
            "function Long() {{ return <div>{}</div>; }}",
            "x".repeat(100_000)
        );
        let module = normalize(&source);
        assert!(module.code.ends_with("render(<Long />)"));
    }

    #[test]
    fn test_error_placeholder_shape() {
        let placeholder = error_placeholder("boom");
        assert!(placeholder.starts_with("render("));
        assert!(placeholder.contains("Error: boom"));
    }
}
