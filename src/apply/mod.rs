//! Pushing a selection onto a live style target.
//!
//! The target is an explicit handle so the core stays testable without a
//! rendering environment.

use crate::selection::Selection;
use crate::tokens::build_css_variables;

/// Anything that can receive style properties and presentational
/// attributes, e.g. a document root.
pub trait StyleTarget {
    fn set_style_property(&mut self, name: &str, value: &str);
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// Compute the flat variable map for `selection` and install it on
/// `target`, along with the five `data-*` attributes. Idempotent.
pub fn apply_selection(selection: &Selection, target: &mut dyn StyleTarget) {
    let variables = build_css_variables(selection);
    for (name, value) in variables.iter() {
        target.set_style_property(name, value);
    }

    target.set_attribute("data-mode", selection.mode.as_str());
    target.set_attribute("data-surface", selection.surface.as_str());
    target.set_attribute("data-accent", selection.accent.as_str());
    target.set_attribute("data-animation", selection.animation.as_str());
    target.set_attribute("data-design", selection.design.as_str());
}

/// In-memory style target for tests and headless consumers. Setting an
/// existing property or attribute replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTarget {
    properties: Vec<(String, String)>,
    attributes: Vec<(String, String)>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style_property(&self, name: &str) -> Option<&str> {
        lookup(&self.properties, name)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        lookup(&self.attributes, name)
    }

    pub fn style_property_count(&self) -> usize {
        self.properties.len()
    }
}

fn lookup<'a>(entries: &'a [(String, String)], name: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn upsert(entries: &mut Vec<(String, String)>, name: &str, value: &str) {
    match entries.iter_mut().find(|(key, _)| key == name) {
        Some((_, existing)) => value.clone_into(existing),
        None => entries.push((name.to_string(), value.to_string())),
    }
}

impl StyleTarget for MemoryTarget {
    fn set_style_property(&mut self, name: &str, value: &str) {
        upsert(&mut self.properties, name, value);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        upsert(&mut self.attributes, name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Accent, Mode, Surface};

    #[test]
    fn apply_installs_variables_and_attributes() {
        let mut target = MemoryTarget::new();
        let selection = Selection::new(Mode::Dark, Surface::Glass, Accent::Emerald);
        apply_selection(&selection, &mut target);

        assert_eq!(target.style_property("--color-bg"), Some("#09090b"));
        assert_eq!(target.style_property("--color-accent"), Some("#55d4aa"));
        assert_eq!(target.style_property_count(), 40);
        assert_eq!(target.attribute("data-mode"), Some("dark"));
        assert_eq!(target.attribute("data-surface"), Some("glass"));
        assert_eq!(target.attribute("data-accent"), Some("emerald"));
    }

    #[test]
    fn apply_defaults_cosmetic_attributes() {
        let mut target = MemoryTarget::new();
        apply_selection(&Selection::default(), &mut target);

        assert_eq!(target.attribute("data-animation"), Some("none"));
        assert_eq!(target.attribute("data-design"), Some("md3"));
    }

    #[test]
    fn applying_twice_leaves_the_same_end_state() {
        let mut once = MemoryTarget::new();
        let mut twice = MemoryTarget::new();
        let selection = Selection::new(Mode::Light, Surface::Mesh, Accent::Slate);

        apply_selection(&selection, &mut once);
        apply_selection(&selection, &mut twice);
        apply_selection(&selection, &mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn applying_a_new_selection_supersedes_the_old_values() {
        let mut target = MemoryTarget::new();
        apply_selection(
            &Selection::new(Mode::Light, Surface::Solid, Accent::Indigo),
            &mut target,
        );
        apply_selection(
            &Selection::new(Mode::Dark, Surface::Solid, Accent::Indigo),
            &mut target,
        );

        assert_eq!(target.style_property("--color-bg"), Some("#09090b"));
        assert_eq!(target.attribute("data-mode"), Some("dark"));
        assert_eq!(target.style_property_count(), 40);
    }
}
