//! Module-syntax stripping.
//!
//! Snippets are pasted from real projects and usually carry `import`/`export`
//! statements or CommonJS `require` calls that the embedded evaluator cannot
//! execute. Stripping is line-oriented and lexical: the goal is to leave a
//! plain script body behind, not to validate the module graph.

use regex::Regex;

/// Compiled patterns for one stripping pass.
///
/// Patterns are fixed literals; compilation cannot fail at runtime.
pub struct ModuleSyntaxStripper {
    import_stmt: Regex,
    require_binding: Regex,
    require_call: Regex,
    export_default: Regex,
    export_prefix: Regex,
    module_exports: Regex,
    orphan_ident_line: Regex,
}

impl ModuleSyntaxStripper {
    pub fn new() -> Self {
        Self {
            // Covers both default and named import forms.
            import_stmt: Regex::new(r#"import\s+[^\n]*?from\s+['"][^'"]*['"];?\n?"#).unwrap(),
            require_binding: Regex::new(
                r#"(?:const|let|var)\s+[^\n]*?=\s*require\(['"][^'"]*['"]\);?\n?"#,
            )
            .unwrap(),
            require_call: Regex::new(r#"require\(['"][^'"]*['"]\);?\n?"#).unwrap(),
            export_default: Regex::new(r"export\s+default\s+").unwrap(),
            export_prefix: Regex::new(r"export\s+").unwrap(),
            module_exports: Regex::new(r"module\.exports\s*=\s*").unwrap(),
            // `export default Foo;` leaves a bare `Foo;` line behind once the
            // prefix is gone.
            orphan_ident_line: Regex::new(r"(?m)^\s*\w+;\s*$").unwrap(),
        }
    }

    /// Remove module syntax, leaving an evaluator-compatible script body.
    ///
    /// Idempotent: running the pass over already-stripped text changes
    /// nothing.
    pub fn strip(&self, source: &str) -> String {
        let mut out = self.import_stmt.replace_all(source, "").into_owned();
        out = self.require_binding.replace_all(&out, "").into_owned();
        out = self.require_call.replace_all(&out, "").into_owned();
        out = self.export_default.replace_all(&out, "").into_owned();
        out = self.export_prefix.replace_all(&out, "").into_owned();
        out = self.module_exports.replace_all(&out, "").into_owned();
        out = self.orphan_ident_line.replace_all(&out, "").into_owned();
        out
    }
}

impl Default for ModuleSyntaxStripper {
    fn default() -> Self {
        Self::new()
    }
}
