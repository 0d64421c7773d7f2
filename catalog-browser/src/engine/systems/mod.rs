//! Core runtime systems for the frame loop and diagnostics.
//!
//! Provides the per-frame system ordering, item animation and FPS
//! tracking for development and the host page.

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to frontend via RPC and updates native UI overlays.
pub mod fps_tracking;

/// Per-frame ordering of input, selection, camera and item animation.
pub mod render_loop;
