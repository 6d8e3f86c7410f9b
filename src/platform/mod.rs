//! Platform abstraction layer
//!
//! Browser builds expose the session to JavaScript through `web`; the host
//! page owns the canvas, audio, DOM and the animation-frame callback.

#[cfg(target_arch = "wasm32")]
pub mod web;
