/*!
# Map Geometry

Spatial queries against a camera's view volume for map/tile rendering.

This crate provides three independent value types. None of them holds
shared mutable state, so any of them can be queried from several threads
at once.

## Architecture

- **Ray**: picking ray (plane hit, closest point on a globe sphere)
- **Frustum**: six inward planes + eight corners, built once per frame
  from an inverse projection matrix
- **Aabb**: axis-aligned box with quadrant subdivision and a three-way
  frustum classification used for tile culling

Vector and matrix arithmetic comes from [`glam`].
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod primitives;

// Main namespace module
pub mod geo {
    // Error types
    pub use crate::error::{Error, Result};

    // Process-wide logger slot
    pub use crate::diagnostics::Diagnostics;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Query primitives
    pub use crate::primitives::*;
}

// Re-export math library at crate root
pub use glam;
