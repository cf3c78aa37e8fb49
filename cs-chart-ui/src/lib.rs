//! Shared Dioxus components and D3.js bridge for the ClimateScope dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState wrapping the session controller in Signals
//! - `timer`: `setTimeout`-backed async sleep driving rotation ticks
//! - `components`: Reusable RSX components (auth forms, selectors, cards, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod timer;
