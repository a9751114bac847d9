//! Text renditions of the flat variable map: a CSS rule block, pretty
//! token JSON and the HTML usage snippet.

use std::fmt::Write;

use crate::selection::Selection;
use crate::tokens::build_css_variables;

/// Render the variable map as a CSS rule under `selector`, one
/// declaration per line in flattening order.
pub fn css_rule_for_selection(selection: &Selection, selector: &str) -> String {
    let variables = build_css_variables(selection);
    let mut rule = String::with_capacity(selector.len() + variables.len() * 32);
    rule.push_str(selector);
    rule.push_str(" {\n");
    for (name, value) in variables.iter() {
        let _ = writeln!(rule, "  {name}: {value};");
    }
    rule.push('}');
    rule
}

/// The attribute selector the studio scopes its rule blocks to.
pub fn selection_selector(selection: &Selection) -> String {
    format!(
        "[data-surface=\"{}\"][data-mode=\"{}\"][data-accent=\"{}\"]",
        selection.surface, selection.mode, selection.accent
    )
}

/// Pretty JSON of the variable map, preserving flattening key order.
pub fn css_variables_json(selection: &Selection) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&build_css_variables(selection))
}

/// A literal markup snippet showing the attributes a host document sets.
pub fn usage_snippet(selection: &Selection) -> String {
    format!(
        "<html data-surface=\"{}\" data-mode=\"{}\" data-accent=\"{}\" data-animation=\"{}\" data-design=\"{}\">\n  <!-- app root -->\n</html>",
        selection.surface, selection.mode, selection.accent, selection.animation, selection.design
    )
}
