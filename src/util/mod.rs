//! Utility helpers isolating browser/environment concerns.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything touching `web_sys` lives here behind plain signatures whose
//! bodies are target-gated: on `wasm32` they drive the real DOM, elsewhere
//! they no-op so state and content stay natively testable.

pub mod observer;
pub mod scroll;
pub mod theme;
