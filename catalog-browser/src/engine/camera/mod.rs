//! Camera rig for the catalog view.
//!
//! A small state machine: idle parallax drift around the origin, or a timed
//! eased flight toward the selected item. Advanced once per frame on
//! wall-clock time and written to the single `CatalogCamera`.

/// Camera rig resource, focus transitions and the system that drives them.
pub mod camera_rig;
