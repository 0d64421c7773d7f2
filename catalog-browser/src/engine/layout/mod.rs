//! Deterministic placement of catalog items in world space.
//!
//! Items are laid out in dataset order along a rising helix whose radius
//! ripples twice per turn, so neighbouring rows stay visually adjacent.

/// Spiral position generator keyed on dataset index.
pub mod spiral;
