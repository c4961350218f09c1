//! Class list sources for both WASM and no-WASM environments
//!
//! The browser build fetches through gloo_net; native builds use reqwest for
//! URLs and tokio's file API for local paths.

#[cfg(feature = "no-wasm")]
pub mod request;
#[cfg(feature = "no-wasm")]
pub use request::{FileSource, NativeSource, NoWasmClient};

#[cfg(feature = "wasm")]
pub mod gloo;
#[cfg(feature = "wasm")]
pub use gloo::WasmClient;
