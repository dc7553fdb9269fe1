use thiserror::Error;

/// Errors originating from the core fractal engine.
///
/// All variants are configuration-validation failures raised before any
/// computation starts; a caller must supply a corrected configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid iteration cap: {0} (must be >= 1)")]
    InvalidIterations(u32),

    #[error("invalid grid dimensions: {width}×{height} (both must be >= 1)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid {axis} plane range: [{lo}, {hi}] (upper bound must exceed lower)")]
    InvalidPlaneRange {
        axis: &'static str,
        lo: f64,
        hi: f64,
    },

    #[error("invalid escape radius: {0} (must be > 0 and finite)")]
    InvalidLimit(f64),
}
