//! Containers the selection is rendered into
//!
//! [`MemoryContainer`] keeps the rendered tree in memory and is available on
//! every platform; the DOM-backed container is only built for WASM.

mod memory;
pub use memory::*;

#[cfg(feature = "wasm")]
pub mod dom;
#[cfg(feature = "wasm")]
pub use dom::DomContainer;
