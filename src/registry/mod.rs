//! Static token tables and the typed option axes that parameterize them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when an untrusted string does not name a known option value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseOptionError {
    #[error("unknown mode: {0}")]
    Mode(String),
    #[error("unknown surface: {0}")]
    Surface(String),
    #[error("unknown accent: {0}")]
    Accent(String),
    #[error("unknown animation: {0}")]
    Animation(String),
    #[error("unknown design theme: {0}")]
    Design(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            other => Err(ParseOptionError::Mode(other.to_string())),
        }
    }
}

/// Cosmetic rendering style. Intentionally a no-op for token derivation;
/// carried through persistence and the `data-surface` attribute only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    #[default]
    Solid,
    Gradient,
    Glass,
    Mesh,
}

impl Surface {
    pub const ALL: [Surface; 4] = [
        Surface::Solid,
        Surface::Gradient,
        Surface::Glass,
        Surface::Mesh,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Surface::Solid => "solid",
            Surface::Gradient => "gradient",
            Surface::Glass => "glass",
            Surface::Mesh => "mesh",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Surface {
    type Err = ParseOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "solid" => Ok(Surface::Solid),
            "gradient" => Ok(Surface::Gradient),
            "glass" => Ok(Surface::Glass),
            "mesh" => Ok(Surface::Mesh),
            other => Err(ParseOptionError::Surface(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Indigo,
    Emerald,
    Coral,
    Amber,
    Rose,
    Violet,
    Teal,
    Slate,
    Mono,
}

impl Accent {
    pub const ALL: [Accent; 9] = [
        Accent::Indigo,
        Accent::Emerald,
        Accent::Coral,
        Accent::Amber,
        Accent::Rose,
        Accent::Violet,
        Accent::Teal,
        Accent::Slate,
        Accent::Mono,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Accent::Indigo => "indigo",
            Accent::Emerald => "emerald",
            Accent::Coral => "coral",
            Accent::Amber => "amber",
            Accent::Rose => "rose",
            Accent::Violet => "violet",
            Accent::Teal => "teal",
            Accent::Slate => "slate",
            Accent::Mono => "mono",
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Accent {
    type Err = ParseOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "indigo" => Ok(Accent::Indigo),
            "emerald" => Ok(Accent::Emerald),
            "coral" => Ok(Accent::Coral),
            "amber" => Ok(Accent::Amber),
            "rose" => Ok(Accent::Rose),
            "violet" => Ok(Accent::Violet),
            "teal" => Ok(Accent::Teal),
            "slate" => Ok(Accent::Slate),
            "mono" => Ok(Accent::Mono),
            other => Err(ParseOptionError::Accent(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    #[default]
    None,
    Aurora,
    Waves,
    Pulse,
}

impl Animation {
    pub const ALL: [Animation; 4] = [
        Animation::None,
        Animation::Aurora,
        Animation::Waves,
        Animation::Pulse,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Animation::None => "none",
            Animation::Aurora => "aurora",
            Animation::Waves => "waves",
            Animation::Pulse => "pulse",
        }
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Animation {
    type Err = ParseOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(Animation::None),
            "aurora" => Ok(Animation::Aurora),
            "waves" => Ok(Animation::Waves),
            "pulse" => Ok(Animation::Pulse),
            other => Err(ParseOptionError::Animation(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DesignTheme {
    #[default]
    Md3,
    Minimal,
    Glass,
    Shadcn,
}

impl DesignTheme {
    pub const ALL: [DesignTheme; 4] = [
        DesignTheme::Md3,
        DesignTheme::Minimal,
        DesignTheme::Glass,
        DesignTheme::Shadcn,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            DesignTheme::Md3 => "md3",
            DesignTheme::Minimal => "minimal",
            DesignTheme::Glass => "glass",
            DesignTheme::Shadcn => "shadcn",
        }
    }
}

impl fmt::Display for DesignTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DesignTheme {
    type Err = ParseOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "md3" => Ok(DesignTheme::Md3),
            "minimal" => Ok(DesignTheme::Minimal),
            "glass" => Ok(DesignTheme::Glass),
            "shadcn" => Ok(DesignTheme::Shadcn),
            other => Err(ParseOptionError::Design(other.to_string())),
        }
    }
}

/// The seven neutral colors of one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeutralPalette {
    pub bg: &'static str,
    pub surface: &'static str,
    pub surface_muted: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub outline: &'static str,
}

const LIGHT_NEUTRALS: NeutralPalette = NeutralPalette {
    bg: "#f5f5f7",
    surface: "#ffffff",
    surface_muted: "#ebebef",
    text: "#18181b",
    text_muted: "#6b6b76",
    border: "#d4d4d9",
    outline: "#a1a1aa",
};

const DARK_NEUTRALS: NeutralPalette = NeutralPalette {
    bg: "#09090b",
    surface: "#141416",
    surface_muted: "#1e1e22",
    text: "#fafafa",
    text_muted: "#a0a0ab",
    border: "#27272d",
    outline: "#3f3f47",
};

pub const fn neutrals(mode: Mode) -> &'static NeutralPalette {
    match mode {
        Mode::Light => &LIGHT_NEUTRALS,
        Mode::Dark => &DARK_NEUTRALS,
    }
}

/// Base, strong and soft values of one accent in one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentTriple {
    pub base: &'static str,
    pub strong: &'static str,
    pub soft: &'static str,
}

struct AccentRamp {
    light: AccentTriple,
    dark: AccentTriple,
}

const INDIGO: AccentRamp = AccentRamp {
    light: AccentTriple {
        base: "#4657d6",
        strong: "#3140b9",
        soft: "#dbe0ff",
    },
    dark: AccentTriple {
        base: "#7f8df4",
        strong: "#a3adff",
        soft: "#2a3168",
    },
};

const EMERALD: AccentRamp = AccentRamp {
    light: AccentTriple {
        base: "#0f8a67",
        strong: "#0d6f54",
        soft: "#cff7e8",
    },
    dark: AccentTriple {
        base: "#55d4aa",
        strong: "#7de5c0",
        soft: "#184a3a",
    },
};

const CORAL: AccentRamp = AccentRamp {
    light: AccentTriple {
        base: "#c55b4f",
        strong: "#a0473d",
        soft: "#ffdcd7",
    },
    dark: AccentTriple {
        base: "#ff9e93",
        strong: "#ffb6ad",
        soft: "#6a2d28",
    },
};

const AMBER: AccentRamp = AccentRamp {
    light: AccentTriple {
        base: "#b77714",
        strong: "#925f10",
        soft: "#ffe9ca",
    },
    dark: AccentTriple {
        base: "#f4bf5d",
        strong: "#ffd693",
        soft: "#5e4317",
    },
};

const ROSE: AccentRamp = AccentRamp {
    light: AccentTriple {
        base: "#d14d72",
        strong: "#b03a5c",
        soft: "#ffe0ea",
    },
    dark: AccentTriple {
        base: "#f78da7",
        strong: "#ffa8be",
        soft: "#5e2038",
    },
};

const VIOLET: AccentRamp = AccentRamp {
    light: AccentTriple {
        base: "#7c3aed",
        strong: "#6025d1",
        soft: "#ede5ff",
    },
    dark: AccentTriple {
        base: "#a78bfa",
        strong: "#c4a8ff",
        soft: "#3b2170",
    },
};

const TEAL: AccentRamp = AccentRamp {
    light: AccentTriple {
        base: "#0e918c",
        strong: "#0b7571",
        soft: "#ccf5f3",
    },
    dark: AccentTriple {
        base: "#5cd5d0",
        strong: "#80e5e1",
        soft: "#164544",
    },
};

const SLATE: AccentRamp = AccentRamp {
    light: AccentTriple {
        base: "#4b6584",
        strong: "#3a506b",
        soft: "#dbe5ef",
    },
    dark: AccentTriple {
        base: "#8baac5",
        strong: "#a8c4dd",
        soft: "#253545",
    },
};

const MONO: AccentRamp = AccentRamp {
    light: AccentTriple {
        base: "#18181b",
        strong: "#09090b",
        soft: "#e4e4e7",
    },
    dark: AccentTriple {
        base: "#d4d4d8",
        strong: "#fafafa",
        soft: "#27272a",
    },
};

pub const fn accent_triple(accent: Accent, mode: Mode) -> &'static AccentTriple {
    let ramp = match accent {
        Accent::Indigo => &INDIGO,
        Accent::Emerald => &EMERALD,
        Accent::Coral => &CORAL,
        Accent::Amber => &AMBER,
        Accent::Rose => &ROSE,
        Accent::Violet => &VIOLET,
        Accent::Teal => &TEAL,
        Accent::Slate => &SLATE,
        Accent::Mono => &MONO,
    };
    match mode {
        Mode::Light => &ramp.light,
        Mode::Dark => &ramp.dark,
    }
}

/// Status colors keyed by mode alone, never by accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticColors {
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
}

const LIGHT_SEMANTICS: SemanticColors = SemanticColors {
    success: "#137554",
    warning: "#aa6f16",
    danger: "#ad403f",
};

const DARK_SEMANTICS: SemanticColors = SemanticColors {
    success: "#62d5af",
    warning: "#f0bc63",
    danger: "#ff9c99",
};

pub const fn semantics(mode: Mode) -> &'static SemanticColors {
    match mode {
        Mode::Light => &LIGHT_SEMANTICS,
        Mode::Dark => &DARK_SEMANTICS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypographyTokens {
    pub font_body: &'static str,
    pub font_display: &'static str,
    pub size_hero: &'static str,
    pub size_title: &'static str,
    pub size_body: &'static str,
    pub size_caption: &'static str,
    pub weight_body: &'static str,
    pub weight_semibold: &'static str,
    pub weight_display: &'static str,
    pub tracking: &'static str,
}

pub const TYPOGRAPHY: TypographyTokens = TypographyTokens {
    font_body: r#""Sora", "Avenir Next", "Segoe UI", sans-serif"#,
    font_display: r#""Fraunces", "Times New Roman", serif"#,
    size_hero: "clamp(2.5rem, 6vw, 4.8rem)",
    size_title: "clamp(1.5rem, 2.6vw, 2.2rem)",
    size_body: "1rem",
    size_caption: "0.82rem",
    weight_body: "420",
    weight_semibold: "600",
    weight_display: "650",
    tracking: "0.01em",
};

impl TypographyTokens {
    pub fn entries(&self) -> [(&'static str, &'static str); 10] {
        [
            ("fontBody", self.font_body),
            ("fontDisplay", self.font_display),
            ("sizeHero", self.size_hero),
            ("sizeTitle", self.size_title),
            ("sizeBody", self.size_body),
            ("sizeCaption", self.size_caption),
            ("weightBody", self.weight_body),
            ("weightSemibold", self.weight_semibold),
            ("weightDisplay", self.weight_display),
            ("tracking", self.tracking),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacingTokens {
    pub xxs: &'static str,
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub xxl: &'static str,
    pub section: &'static str,
}

pub const SPACING: SpacingTokens = SpacingTokens {
    xxs: "0.25rem",
    xs: "0.5rem",
    sm: "0.75rem",
    md: "1rem",
    lg: "1.5rem",
    xl: "2rem",
    xxl: "3rem",
    section: "clamp(2.5rem, 6vw, 5rem)",
};

impl SpacingTokens {
    pub fn entries(&self) -> [(&'static str, &'static str); 8] {
        [
            ("xxs", self.xxs),
            ("xs", self.xs),
            ("sm", self.sm),
            ("md", self.md),
            ("lg", self.lg),
            ("xl", self.xl),
            ("xxl", self.xxl),
            ("section", self.section),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadiusTokens {
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub pill: &'static str,
}

pub const RADIUS: RadiusTokens = RadiusTokens {
    sm: "10px",
    md: "16px",
    lg: "22px",
    xl: "30px",
    pill: "999px",
};

impl RadiusTokens {
    pub fn entries(&self) -> [(&'static str, &'static str); 5] {
        [
            ("sm", self.sm),
            ("md", self.md),
            ("lg", self.lg),
            ("xl", self.xl),
            ("pill", self.pill),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevationTokens {
    pub flat: &'static str,
    pub low: &'static str,
    pub medium: &'static str,
    pub high: &'static str,
}

pub const ELEVATION: ElevationTokens = ElevationTokens {
    flat: "none",
    low: "0 1px 2px rgba(21, 24, 32, 0.08), 0 6px 14px rgba(21, 24, 32, 0.06)",
    medium: "0 2px 6px rgba(21, 24, 32, 0.09), 0 16px 26px rgba(21, 24, 32, 0.1)",
    high: "0 10px 22px rgba(21, 24, 32, 0.12), 0 24px 60px rgba(21, 24, 32, 0.18)",
};

impl ElevationTokens {
    pub fn entries(&self) -> [(&'static str, &'static str); 4] {
        [
            ("flat", self.flat),
            ("low", self.low),
            ("medium", self.medium),
            ("high", self.high),
        ]
    }
}

/// Every (surface, accent, mode) combination, surface-major.
pub fn selection_combos() -> Vec<(Surface, Accent, Mode)> {
    let mut combos = Vec::with_capacity(Surface::ALL.len() * Accent::ALL.len() * Mode::ALL.len());
    for surface in Surface::ALL {
        for accent in Accent::ALL {
            for mode in Mode::ALL {
                combos.push((surface, accent, mode));
            }
        }
    }
    combos
}
