pub mod cache;
pub mod complex;
pub mod config;
pub mod error;
pub mod field;
pub mod mandelbrot;
pub mod viewport;

// Re-export primary types for convenience.
pub use cache::FieldCache;
pub use complex::Complex;
pub use config::FractalConfig;
pub use error::CoreError;
pub use field::Field;
pub use mandelbrot::escape_count;
pub use viewport::Viewport;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
