//! Token derivation and flattening: a `Selection` becomes `TokenGroups`,
//! and `TokenGroups` becomes the flat `--{group}-{name}` variable map.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::registry::{
    self, ElevationTokens, RadiusTokens, SpacingTokens, TypographyTokens, ELEVATION, RADIUS,
    SPACING, TYPOGRAPHY,
};
use crate::selection::Selection;

/// The composed color group: neutrals, accent triple and status colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    pub bg: &'static str,
    pub surface: &'static str,
    pub surface_muted: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub outline: &'static str,
    pub accent: &'static str,
    pub accent_strong: &'static str,
    pub accent_soft: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
}

impl ColorTokens {
    pub fn entries(&self) -> [(&'static str, &'static str); 13] {
        [
            ("bg", self.bg),
            ("surface", self.surface),
            ("surfaceMuted", self.surface_muted),
            ("text", self.text),
            ("textMuted", self.text_muted),
            ("border", self.border),
            ("outline", self.outline),
            ("accent", self.accent),
            ("accentStrong", self.accent_strong),
            ("accentSoft", self.accent_soft),
            ("success", self.success),
            ("warning", self.warning),
            ("danger", self.danger),
        ]
    }
}

/// Group iteration order for flattening and export.
pub const GROUP_NAMES: [&str; 5] = ["color", "typography", "spacing", "radius", "elevation"];

/// Five mutually independent token groups, built fresh per call and never
/// mutated afterwards. The non-color groups reference the registry's
/// constant tables since their values never vary with selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenGroups {
    pub color: ColorTokens,
    pub typography: &'static TypographyTokens,
    pub spacing: &'static SpacingTokens,
    pub radius: &'static RadiusTokens,
    pub elevation: &'static ElevationTokens,
}

/// Derive the token groups for a selection. Pure: equal selections yield
/// equal output. `surface`, `animation` and `design` have no effect here.
pub fn build_tokens(selection: &Selection) -> TokenGroups {
    let neutrals = registry::neutrals(selection.mode);
    let accent = registry::accent_triple(selection.accent, selection.mode);
    let semantics = registry::semantics(selection.mode);

    TokenGroups {
        color: ColorTokens {
            bg: neutrals.bg,
            surface: neutrals.surface,
            surface_muted: neutrals.surface_muted,
            text: neutrals.text,
            text_muted: neutrals.text_muted,
            border: neutrals.border,
            outline: neutrals.outline,
            accent: accent.base,
            accent_strong: accent.strong,
            accent_soft: accent.soft,
            success: semantics.success,
            warning: semantics.warning,
            danger: semantics.danger,
        },
        typography: &TYPOGRAPHY,
        spacing: &SPACING,
        radius: &RADIUS,
        elevation: &ELEVATION,
    }
}

/// Flat `--{group}-{kebab-name}` variable map, preserving flattening order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssVariables {
    entries: Vec<(String, String)>,
}

impl CssVariables {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: String, value: &str) {
        self.entries.push((key, value.to_string()));
    }
}

impl Serialize for CssVariables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// `surfaceMuted` -> `surface-muted`: every uppercase letter becomes a
/// hyphen plus its lowercase form.
fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn push_group(flat: &mut CssVariables, group: &str, entries: &[(&str, &str)]) {
    for (name, value) in entries {
        flat.insert(format!("--{group}-{}", kebab_case(name)), value);
    }
}

/// Flatten the five groups in fixed order. Keys cannot collide across
/// groups since each is namespaced by its group prefix.
pub fn flatten_token_groups(tokens: &TokenGroups) -> CssVariables {
    let mut flat = CssVariables::default();
    push_group(&mut flat, "color", &tokens.color.entries());
    push_group(&mut flat, "typography", &tokens.typography.entries());
    push_group(&mut flat, "spacing", &tokens.spacing.entries());
    push_group(&mut flat, "radius", &tokens.radius.entries());
    push_group(&mut flat, "elevation", &tokens.elevation.entries());
    flat
}

/// Builder and flattener composed as one call.
pub fn build_css_variables(selection: &Selection) -> CssVariables {
    flatten_token_groups(&build_tokens(selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{selection_combos, Accent, Mode, Surface};

    #[test]
    fn builder_returns_mode_aware_accent_and_neutrals() {
        let light = build_tokens(&Selection::new(Mode::Light, Surface::Solid, Accent::Indigo));
        let dark = build_tokens(&Selection::new(Mode::Dark, Surface::Solid, Accent::Indigo));

        assert_eq!(light.color.bg, "#f5f5f7");
        assert_eq!(dark.color.bg, "#09090b");
        assert_eq!(light.color.accent, "#4657d6");
        assert_eq!(dark.color.accent, "#7f8df4");
    }

    #[test]
    fn surface_never_affects_token_values() {
        for mode in Mode::ALL {
            for accent in Accent::ALL {
                let baseline = build_tokens(&Selection::new(mode, Surface::Solid, accent));
                for surface in Surface::ALL {
                    let other = build_tokens(&Selection::new(mode, surface, accent));
                    assert_eq!(baseline, other, "{mode}/{accent}/{surface}");
                }
            }
        }
    }

    #[test]
    fn builder_ignores_animation_and_design_axes() {
        let plain = Selection::new(Mode::Dark, Surface::Mesh, Accent::Teal);
        let decorated = Selection {
            animation: crate::registry::Animation::Aurora,
            design: crate::registry::DesignTheme::Shadcn,
            ..plain
        };
        assert_eq!(build_tokens(&plain), build_tokens(&decorated));
    }

    #[test]
    fn semantic_colors_follow_mode_not_accent() {
        for accent in Accent::ALL {
            let light = build_tokens(&Selection::new(Mode::Light, Surface::Solid, accent));
            assert_eq!(light.color.success, "#137554");
            assert_eq!(light.color.warning, "#aa6f16");
            assert_eq!(light.color.danger, "#ad403f");
        }
    }

    #[test]
    fn flattening_produces_css_variable_map() {
        let vars = build_css_variables(&Selection::new(Mode::Light, Surface::Solid, Accent::Amber));

        assert_eq!(vars.get("--color-bg"), Some("#f5f5f7"));
        assert_eq!(vars.get("--color-accent"), Some("#b77714"));
        assert!(vars
            .get("--typography-font-display")
            .unwrap()
            .contains("Fraunces"));
        assert_eq!(vars.get("--spacing-md"), Some("1rem"));
    }

    #[test]
    fn flattening_kebab_cases_token_names() {
        let vars = build_css_variables(&Selection::default());
        assert!(vars.get("--color-surface-muted").is_some());
        assert!(vars.get("--color-accent-strong").is_some());
        assert!(vars.get("--typography-size-caption").is_some());
        assert!(vars.get("--color-surfaceMuted").is_none());
    }

    #[test]
    fn flat_keys_partition_back_into_the_five_groups() {
        let tokens = build_tokens(&Selection::default());
        let vars = flatten_token_groups(&tokens);
        let expected_counts = [
            ("color", tokens.color.entries().len()),
            ("typography", tokens.typography.entries().len()),
            ("spacing", tokens.spacing.entries().len()),
            ("radius", tokens.radius.entries().len()),
            ("elevation", tokens.elevation.entries().len()),
        ];

        let mut total = 0;
        for (group, count) in expected_counts {
            let prefix = format!("--{group}-");
            let matching = vars
                .iter()
                .filter(|(key, _)| key.starts_with(&prefix))
                .count();
            assert_eq!(matching, count, "group {group}");
            total += matching;
        }
        assert_eq!(total, vars.len());
    }

    #[test]
    fn flattening_order_is_stable_group_major() {
        let vars = build_css_variables(&Selection::default());
        let keys: Vec<&str> = vars.iter().map(|(key, _)| key).collect();

        assert_eq!(keys[0], "--color-bg");
        assert_eq!(keys[13], "--typography-font-body");
        assert_eq!(keys[23], "--spacing-xxs");
        assert_eq!(keys[31], "--radius-sm");
        assert_eq!(keys[36], "--elevation-flat");
        assert_eq!(keys.len(), 40);
    }

    #[test]
    fn equal_selections_build_equal_variable_maps() {
        for (surface, accent, mode) in selection_combos() {
            let selection = Selection::new(mode, surface, accent);
            assert_eq!(
                build_css_variables(&selection),
                build_css_variables(&selection)
            );
        }
    }
}
