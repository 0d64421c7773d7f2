//! Asset loading and initialisation systems for the catalog.
//!
//! Loads the dataset through the asset server, then streams cover images
//! on the async compute pool while the scene is already interactive.

/// Dataset loading and validation into the `Catalog` resource.
///
/// A failed or unparsable dataset moves the app to `LoadFailed`.
pub mod catalog_loader;

/// Per-item cover fetch and decode tasks.
///
/// Remote covers go through `reqwest`, local ones through the filesystem; both
/// are decoded with `image` and applied to the cover panel material.
pub mod cover_loader;

/// Loading progress tracking resource for state transitions.
///
/// Counts spawned items and finished or failed covers for the loading text.
pub mod progress;
