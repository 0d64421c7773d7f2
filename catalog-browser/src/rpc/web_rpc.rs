use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::core::app_state::AppState;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::registry::ItemRegistry;
use crate::engine::systems::fps_tracking::current_fps;
use crate::engine::systems::render_loop::FrameSet;
use crate::tools::selection::overlay::OverlayEntry;
use crate::tools::selection::{OverlayContent, PickRequest};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Outgoing message queues, flushed to the host page once per frame.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (process_incoming_messages, handle_rpc_messages)
                    .chain()
                    .before(FrameSet::Input),
            )
            .add_systems(
                Update,
                (
                    notify_loading_state,
                    notify_selection.after(FrameSet::Selection),
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Only string payloads that look like JSON-RPC are queued.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
            return;
        }
    }

    // Ownership moves to JS so the listener outlives this system.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Messages received by the JS listener, waiting for the next frame.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Raw message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    registry: Res<ItemRegistry>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut pick_requests: EventWriter<PickRequest>,
) {
    for event in events.read() {
        let request = match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => request,
            Err(parse_error) => {
                warn!("Ignoring malformed RPC message: {}", parse_error);
                continue;
            }
        };

        let mut picks = Vec::new();
        let fps = current_fps(&diagnostics);
        if let Some(response) = handle_rpc_request(&request, fps, &registry, &mut picks) {
            rpc_interface.queue_response(response);
        }
        pick_requests.write_batch(picks);
    }
}

/// Execute one request. Selection changes are returned through `picks` so
/// they go through the same path as a click. Requests without an id are
/// executed but not answered.
fn handle_rpc_request(
    request: &RpcRequest,
    fps: Option<f64>,
    registry: &ItemRegistry,
    picks: &mut Vec<PickRequest>,
) -> Option<RpcResponse> {
    let result = match request.method.as_str() {
        "clear_selection" => handle_clear_selection(picks),
        "focus_item" => handle_focus_item(&request.params, registry, picks),
        "get_fps" => Ok(serde_json::json!({ "fps": fps.unwrap_or(0.0) as f32 })),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            Err(RpcError {
                code: -32601,
                message: "Method not found".to_string(),
                data: Some(serde_json::json!({ "method": request.method })),
            })
        }
    };

    let id = request.id.clone()?;
    Some(match result {
        Ok(result_value) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        },
        Err(error) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        },
    })
}

fn handle_clear_selection(picks: &mut Vec<PickRequest>) -> Result<serde_json::Value, RpcError> {
    picks.push(PickRequest::Clear);
    Ok(serde_json::json!({ "success": true }))
}

fn handle_focus_item(
    params: &serde_json::Value,
    registry: &ItemRegistry,
    picks: &mut Vec<PickRequest>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    struct FocusItemParams {
        index: usize,
    }

    let focus = serde_json::from_value::<FocusItemParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'index' parameter"))?;

    if registry.by_index(focus.index).is_none() {
        return Err(RpcError::invalid_params(&format!(
            "No catalog item at index {}",
            focus.index
        )));
    }

    picks.push(PickRequest::Item(focus.index));
    Ok(serde_json::json!({
        "success": true,
        "index": focus.index
    }))
}

/// Report state changes and load counters to the host page.
fn notify_loading_state(
    state: Res<State<AppState>>,
    loading_progress: Res<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !state.is_changed() && !loading_progress.is_changed() {
        return;
    }
    rpc_interface.send_notification(
        "loading_state",
        loading_state_params(*state.get(), &loading_progress),
    );
}

fn loading_state_params(state: AppState, progress: &LoadingProgress) -> serde_json::Value {
    serde_json::json!({
        "state": state.as_str(),
        "items": progress.items_spawned,
        "covers_loaded": progress.covers_loaded,
        "covers_failed": progress.covers_failed,
        "covers_pending": progress.covers_pending(),
        "message": progress.status_line(),
    })
}

fn notify_selection(overlay: Res<OverlayContent>, mut rpc_interface: ResMut<WebRpcInterface>) {
    if !overlay.is_changed() || overlay.is_added() {
        return;
    }
    match &overlay.shown {
        Some(entry) => {
            rpc_interface.send_notification("selection_changed", selection_params(entry))
        }
        None => rpc_interface.send_notification("selection_cleared", serde_json::json!({})),
    }
}

fn selection_params(entry: &OverlayEntry) -> serde_json::Value {
    serde_json::json!({
        "index": entry.index,
        "title": entry.fields.title,
        "artist": entry.fields.artist,
        "year": entry.fields.year,
        "genre": entry.fields.genre,
        "label": entry.fields.label,
    })
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // Native builds have no host page.
        let _ = message;
    }
}

impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}
