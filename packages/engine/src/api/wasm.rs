//! wasm-bindgen surface: the browser scene and its frame stats.

pub use crate::simulation::{AsciiWorld, FrameStats};
