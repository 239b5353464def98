//! Service layer consumed by the presentation layer
//!
//! The renderer feeds device location and heading updates in and receives
//! horizon boxes and marker transforms back.

pub mod scene;

pub use scene::{MarkerPlacement, SceneService, SceneUpdate};
