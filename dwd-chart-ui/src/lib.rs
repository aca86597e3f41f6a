//! Shared Dioxus components and D3.js bridge for the Dive With Data dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `loader`: one-shot browser fetch of the exported dataset
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (filters, KPI boxes, chart panels, ...)

pub mod components;
pub mod js_bridge;
pub mod loader;
pub mod state;
