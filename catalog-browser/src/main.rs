mod engine;
mod rpc;
mod tools;

use crate::engine::core::app_setup::create_app;
use crate::engine::core::config::BrowserConfig;

fn main() {
    let mut app = create_app(BrowserConfig::from_environment());

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
