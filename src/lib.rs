pub mod apply;
mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod registry;
pub mod selection;
pub mod store;
pub mod tokens;

pub use apply::{apply_selection, MemoryTarget, StyleTarget};
pub use error::{AppError, AppResult};
pub use selection::Selection;
pub use tokens::{build_css_variables, build_tokens, CssVariables, TokenGroups};

/// Entrypoint used by host shells embedding the studio: restores the
/// saved selection and applies it to `target`.
pub fn run(target: &mut dyn StyleTarget) -> Selection {
    logging::init();
    tracing::info!("starting token studio");

    let selection = store::load_selection();
    apply::apply_selection(&selection, target);

    tracing::info!(
        mode = selection.mode.as_str(),
        surface = selection.surface.as_str(),
        accent = selection.accent.as_str(),
        "restored saved selection"
    );
    selection
}

/// The single "selection changed" operation: applies `selection` to
/// `target` and persists it as the new saved selection.
pub fn apply_and_save(selection: &Selection, target: &mut dyn StyleTarget) -> AppResult<()> {
    apply::apply_selection(selection, target);
    store::save_selection(selection)?;
    Ok(())
}
