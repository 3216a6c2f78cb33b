//! Declaration and JSX detection.
//!
//! Detection is deliberately lexical. Snippets come in half-finished and the
//! policy is to render *something* rather than reject imperfect input, so a
//! strict parser would be the wrong tool here.

use regex::Regex;

/// Compiled detection patterns.
pub struct SnippetDetector {
    declaration: Regex,
    bare_arrow_assignment: Regex,
    zero_arg_arrow: Regex,
    jsx_open_tag: Regex,
    tag_event: Regex,
    render_call: Regex,
    render_call_joined: Regex,
}

impl SnippetDetector {
    pub fn new() -> Self {
        Self {
            // Components follow the JSX convention of a capitalized name;
            // lowercase declarations (`const x = 1`) are plain data, not
            // something worth synthesizing a render call for.
            declaration: Regex::new(r"(?:const\s+|function\s+|class\s+)([A-Z]\w*)").unwrap(),
            bare_arrow_assignment: Regex::new(r"(?m)^\s*([A-Z]\w*)\s*=\s*\(?[^\n]*?\)?\s*=>\s*\{")
                .unwrap(),
            zero_arg_arrow: Regex::new(r"\bconst\s+([A-Z]\w*)\s*=\s*\(\)\s*=>").unwrap(),
            jsx_open_tag: Regex::new(r"<[\w.]+[\s/>]").unwrap(),
            tag_event: Regex::new(r"<(/?)([A-Za-z][\w.]*)[^<>]*?(/?)>").unwrap(),
            render_call: Regex::new(r"render\s*\(").unwrap(),
            render_call_joined: Regex::new(r";\s*render\s*\(").unwrap(),
        }
    }

    /// Find the name of a top-level component declaration, if any.
    ///
    /// Checked in order, first match wins:
    /// 1. `const X` / `function X` / `class X`
    /// 2. a bare assignment `X = (...) => {` at line start
    /// 3. `const X = () =>`
    pub fn detect_component_name<'a>(&self, source: &'a str) -> Option<&'a str> {
        if let Some(caps) = self.declaration.captures(source) {
            return caps.get(1).map(|m| m.as_str());
        }
        if let Some(caps) = self.bare_arrow_assignment.captures(source) {
            return caps.get(1).map(|m| m.as_str());
        }
        if let Some(caps) = self.zero_arg_arrow.captures(source) {
            return caps.get(1).map(|m| m.as_str());
        }
        None
    }

    /// True if the text contains anything that looks like a JSX open tag.
    pub fn has_jsx(&self, source: &str) -> bool {
        self.jsx_open_tag.is_match(source)
    }

    /// True if the text already invokes the terminal render call.
    pub fn has_render_call(&self, source: &str) -> bool {
        self.render_call.is_match(source)
    }

    /// Make an existing render call start on its own line.
    pub fn reformat_render_call(&self, source: &str) -> String {
        self.render_call_joined
            .replace_all(source, "\n\nrender(")
            .into_owned()
    }

    /// True if the trimmed text is exactly one complete JSX element.
    ///
    /// Walks tag open/close events and tracks nesting depth. A second root
    /// element, or root-level text between elements, means the text needs a
    /// fragment wrapper instead of a direct one. Attribute bodies can hide
    /// `>` characters (arrow functions), so when the scan loses balance it
    /// falls back to the permissive endpoint check.
    pub fn is_single_complete_element(&self, trimmed: &str) -> bool {
        if !trimmed.starts_with('<') {
            return false;
        }

        let mut depth: i32 = 0;
        let mut roots = 0;
        let mut cursor = 0;

        for caps in self.tag_event.captures_iter(trimmed) {
            let whole = caps.get(0).unwrap();
            let closing = !caps[1].is_empty();
            let self_closing = !caps[3].is_empty();

            // Root-level text between tags means sibling content.
            if depth == 0 && trimmed[cursor..whole.start()].trim() != "" {
                return false;
            }
            cursor = whole.end();

            if closing {
                depth -= 1;
                if depth < 0 {
                    return self.endpoint_fallback(trimmed);
                }
                if depth == 0 {
                    roots += 1;
                }
            } else if self_closing {
                if depth == 0 {
                    if roots > 0 {
                        return false;
                    }
                    roots += 1;
                }
            } else {
                if depth == 0 && roots > 0 {
                    return false;
                }
                depth += 1;
            }
        }

        if depth != 0 {
            return self.endpoint_fallback(trimmed);
        }
        if trimmed[cursor..].trim() != "" {
            return false;
        }
        roots == 1
    }

    fn endpoint_fallback(&self, trimmed: &str) -> bool {
        trimmed.starts_with('<') && trimmed.ends_with('>')
    }
}

impl Default for SnippetDetector {
    fn default() -> Self {
        Self::new()
    }
}
