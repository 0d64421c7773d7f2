//! JSON-RPC 2.0 communication layer for the embedding host page.
//!
//! When the browser runs inside an iframe it talks to its parent window via
//! postMessage, supporting both request-response and notification patterns.
//! Native builds keep the same queues and drop outgoing messages.
//!
//! ## Message Flow
//!
//! ```text
//! Host (Parent Window)   <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! Requests are parsed and answered before the frame's input is read, so a
//! host call lands in the same frame as a click would. Selection requests do
//! not touch the selection directly: `focus_item` and `clear_selection` are
//! turned into `PickRequest`s and resolved by the picking systems.
//!
//! ```text
//! {"jsonrpc":"2.0","method":"focus_item","params":{"index":3},"id":7}
//!   └─> PickRequest::Item(3)
//!       └─> selection_changed {"index":3,"title":...}
//! ```
//!
//! ## Methods
//!
//! - `clear_selection`: same as a click on empty space
//! - `focus_item {index}`: select that item and fly to it; an index with no
//!   item is rejected with `-32602`
//! - `get_fps`: current smoothed frame rate
//!
//! Unknown methods answer `-32601`. Requests without an `id` still run but
//! get no response.
//!
//! ## Notifications
//!
//! - `loading_state`: `loading` / `running` / `failed` plus cover counters
//! - `selection_changed`: index and display fields of the new selection
//! - `selection_cleared`
//! - `fps_update`: twice a second

/// Message queues, request handling and the wasm `message` listener.
pub mod web_rpc;
