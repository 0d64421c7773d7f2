//! Interactive tools layered on top of the catalog scene.
//!
//! ## Selection
//!
//! Exactly one tool exists today: click-to-select. Clicks and host-page
//! RPC calls both become `PickRequest` events resolved by a single system,
//! so either source highlights, describes and focuses items the same way.

/// Picking, single selection, the info panel and item highlighting.
pub mod selection;
