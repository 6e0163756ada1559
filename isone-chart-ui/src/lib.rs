//! Shared Dioxus components and D3.js bridge for the ISO-NE energy dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart functions via `js_sys::eval()`
//! - `d3_renderer`: a `Renderer` that draws dashboard frames through the bridge
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (slider, metric radio, containers, etc.)

pub mod components;
pub mod d3_renderer;
pub mod js_bridge;
pub mod state;
