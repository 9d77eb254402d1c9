//! Error types for Galaxy3D culling
//!
//! This module defines the errors raised while building frustums from
//! camera parameters, classifying candidates, and managing the object registry.

use std::fmt;
use crate::camera::FrustumFace;

/// Result type for Galaxy3D culling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D culling errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid camera parameters (FOV, aspect ratio, clip distances, basis)
    ConfigurationError(String),

    /// A frustum plane normal collapsed (collinear corner points)
    DegenerateNormal {
        /// Face whose normal could not be normalized
        face: FrustumFace,
        /// Magnitude of the cross product before normalization
        magnitude: f32,
    },

    /// Candidate has no mesh or vertex data
    MissingGeometry(String),

    /// Invalid registry operation (duplicate name, unknown key, etc.)
    InvalidResource(String),
}

impl Error {
    /// True for errors that invalidate the frustum for the whole frame.
    ///
    /// A degenerate normal is a configuration problem: it only happens
    /// when the camera parameters collapse the frustum.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::ConfigurationError(_) | Error::DegenerateNormal { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            Error::DegenerateNormal { face, magnitude } => write!(
                f,
                "Degenerate normal on {} plane (magnitude {:e})",
                face, magnitude
            ),
            Error::MissingGeometry(name) => write!(f, "Missing geometry: {}", name),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message and build a `ConfigurationError` from it
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_culling::engine_err;
/// let err = engine_err!("galaxy3d::Camera", "near ({}) must be positive", -1.0);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::galaxy3d::Engine::log_detailed(
            $crate::galaxy3d::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::galaxy3d::Error::ConfigurationError(message)
    }};
}

/// Log an ERROR message and return early with a `ConfigurationError`
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_culling::engine_bail;
/// fn check(near: f32) -> galaxy_3d_culling::galaxy3d::Result<()> {
///     if near <= 0.0 {
///         engine_bail!("galaxy3d::Camera", "near ({}) must be positive", near);
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
