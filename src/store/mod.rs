//! Persistence of the single saved selection.
//!
//! Loading never fails: any payload that cannot be decoded and validated
//! is replaced by the documented default selection. Saving reports typed
//! errors since the caller may want to surface a transient status.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::config::{app_config_path, config_env_dirs, ConfigPathError};
use crate::registry::{Accent, Mode, Surface};
use crate::selection::Selection;

const STORE_APP_DIR: &str = "tokenstudio";
const STORE_FILE: &str = "selection.json";

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to write selection: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize selection")]
    Serialize(#[from] serde_json::Error),
}

/// Raw stored payload before validation. All fields optional so that both
/// the current shape and the legacy `theme` shape deserialize.
#[derive(Debug, Default, Deserialize)]
struct StoredSelection {
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    surface: Option<String>,
    #[serde(default)]
    accent: Option<String>,
    #[serde(default)]
    animation: Option<String>,
    #[serde(default)]
    design: Option<String>,
    #[serde(default)]
    theme: Option<String>,
}

fn decode_selection(raw: &str) -> Option<Selection> {
    let mut stored: StoredSelection = serde_json::from_str(raw).ok()?;

    // Legacy payloads carried a single `theme` field instead of `surface`.
    // The old value has no modern counterpart; it maps to solid.
    if stored.surface.is_none() && stored.theme.is_some() {
        stored.surface = Some(Surface::Solid.as_str().to_string());
    }

    let mode = stored.mode.as_deref()?.parse::<Mode>().ok()?;
    let surface = stored.surface.as_deref()?.parse::<Surface>().ok()?;
    let accent = stored.accent.as_deref()?.parse::<Accent>().ok()?;
    // Cosmetic axes degrade per-field rather than discarding the payload.
    let animation = stored
        .animation
        .as_deref()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default();
    let design = stored
        .design
        .as_deref()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default();

    Some(Selection {
        mode,
        surface,
        accent,
        animation,
        design,
    })
}

/// Decode and validate a stored payload, substituting the default
/// selection when the payload is corrupt, incomplete or out of range.
pub fn selection_from_json(raw: &str) -> Selection {
    decode_selection(raw).unwrap_or_else(|| {
        tracing::warn!("invalid stored selection payload; using defaults");
        Selection::default()
    })
}

pub fn selection_to_json(selection: &Selection) -> StoreResult<String> {
    Ok(serde_json::to_string_pretty(selection)?)
}

/// Load the saved selection, falling back to defaults on any missing or
/// invalid data. Never errors.
pub fn load_selection() -> Selection {
    let (xdg_config_home, home) = config_env_dirs();
    load_selection_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_selection_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Selection {
    let path = match selection_path_with(xdg_config_home, home) {
        Ok(path) => path,
        Err(ConfigPathError::MissingHomeDirectory) => {
            tracing::warn!("no config directory available; using default selection");
            return Selection::default();
        }
    };
    if !path.exists() {
        return Selection::default();
    }
    match fs::read_to_string(&path) {
        Ok(raw) => selection_from_json(&raw),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read saved selection; using defaults");
            Selection::default()
        }
    }
}

pub fn save_selection(selection: &Selection) -> StoreResult<()> {
    let (xdg_config_home, home) = config_env_dirs();
    save_selection_with(selection, xdg_config_home.as_deref(), home.as_deref())
}

fn save_selection_with(
    selection: &Selection,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> StoreResult<()> {
    let path = selection_path_with(xdg_config_home, home)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;
    }

    let serialized = selection_to_json(selection)?;
    fs::write(&path, serialized).map_err(|source| StoreError::Write { path, source })?;
    Ok(())
}

fn selection_path_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    app_config_path(STORE_APP_DIR, STORE_FILE, xdg_config_home, home)
}

impl From<ConfigPathError> for StoreError {
    fn from(error: ConfigPathError) -> Self {
        match error {
            ConfigPathError::MissingHomeDirectory => StoreError::MissingHomeDirectory,
        }
    }
}
