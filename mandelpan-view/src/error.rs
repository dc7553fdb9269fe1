use thiserror::Error;

/// Errors originating from palette mapping and display.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("palette needs at least 2 colors, got {0}")]
    TooFewColors(usize),

    #[error(transparent)]
    Core(#[from] mandelpan_core::CoreError),
}
