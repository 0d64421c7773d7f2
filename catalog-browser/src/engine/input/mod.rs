//! Pointer, wheel and resize handling.
//!
//! Raw window events are folded into a single `PointerInput` resource that
//! the camera rig and picking read once per frame. Later events overwrite
//! earlier ones within a frame.

/// Pointer state resource and the systems that feed it.
pub mod pointer;
