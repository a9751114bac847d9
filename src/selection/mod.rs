use serde::{Deserialize, Serialize};

use crate::registry::{Accent, Animation, DesignTheme, Mode, Surface};

/// The user-chosen combination driving token derivation. `animation` and
/// `design` are carried through persistence and display attributes but are
/// never consumed by the token builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Selection {
    pub mode: Mode,
    pub surface: Surface,
    pub accent: Accent,
    #[serde(default)]
    pub animation: Animation,
    #[serde(default)]
    pub design: DesignTheme,
}

impl Selection {
    pub const fn new(mode: Mode, surface: Surface, accent: Accent) -> Self {
        Self {
            mode,
            surface,
            accent,
            animation: Animation::None,
            design: DesignTheme::Md3,
        }
    }
}
