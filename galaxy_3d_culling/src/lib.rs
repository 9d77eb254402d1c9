/*!
# Galaxy 3D Culling

CPU frustum culling for Galaxy3D scenes.

Each frame, a `FrustumBuilder` derives six inward-facing planes from the
camera (position, orthonormal basis, vertical FOV, aspect ratio, near/far
distances), and a `FrustumCuller` classifies every cull candidate against
them, writing one visibility flag per candidate.

## Architecture

- **Camera**: passive camera parameters, validated before use
- **FrustumBuilder**: camera → `Frustum` (six planes + corners)
- **CullCandidate**: capability trait the host scene implements per object
- **VisibilityClassifier**: bounding-box stage, then mesh stage
- **FrustumCuller**: per-frame pass, sequential or parallel (rayon)
- **Scene**: reference registry of `CullObject`s with stable keys

Everything is passed explicitly. The only global state is the logger.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod config;
pub mod camera;
pub mod scene;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::{CullingConfig, CullPolicy, InvalidCameraPolicy};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
