//! wasm-bindgen bridge for the browser host
//!
//! The page forwards key events and `requestAnimationFrame` timestamps and
//! receives a JSON [`FrameOutput`](crate::session::FrameOutput) per frame.

use wasm_bindgen::prelude::*;

use crate::session::Session;
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Paddle Bounce core loaded");
}

/// Game instance handed to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    session: Session,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a session using settings from LocalStorage
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        WebGame {
            session: Session::new(seed, Settings::load()),
        }
    }

    pub fn start(&mut self) -> bool {
        self.session.start()
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    #[wasm_bindgen(js_name = togglePause)]
    pub fn toggle_pause(&mut self) -> bool {
        self.session.toggle_pause()
    }

    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str) {
        self.session.key_down(key);
    }

    #[wasm_bindgen(js_name = keyUp)]
    pub fn key_up(&mut self, key: &str) {
        self.session.key_up(key);
    }

    #[wasm_bindgen(js_name = visibilityHidden)]
    pub fn visibility_hidden(&mut self) {
        self.session.visibility_hidden();
    }

    /// Replace settings (JSON); used from the next start/restart and saved
    #[wasm_bindgen(js_name = applySettings)]
    pub fn apply_settings(&mut self, json: &str) {
        let settings = Settings::from_json_or_default(json);
        settings.save();
        self.session.apply_settings(settings);
    }

    /// Advance one animation frame; returns the frame output as JSON
    pub fn frame(&mut self, time_ms: f64) -> String {
        match self.session.frame(time_ms).to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize frame: {e}");
                String::from("{}")
            }
        }
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
