//! Interactive spline curve editor for a 2D canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Users place
//! control points with the primary button, watch a smooth curve grow through
//! them with a dashed guide to the pointer, commit with Enter, and can later
//! select a committed curve and drag its control points. The host page wires
//! the tool up through [`host::CurveTool`] and supplies the color, brush size,
//! and stroke style from its own pickers.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] state machine |
//! | [`host`] | DOM listener session and the JavaScript-facing tool |
//! | [`geometry`] | Points, curves, and cardinal spline evaluation |
//! | [`store`] | Committed curves plus the in-progress curve |
//! | [`hit`] | Curve- and point-level hit-testing |
//! | [`input`] | Buttons, keys, and the interaction mode |
//! | [`render`] | Pure scene-to-draw-command rendering |
//! | [`surface`] | Replays draw commands onto a 2D context |
//! | [`style`] | Stroke color, width, and dash pattern |
//! | [`config`] | Hit radii, marker size, commit key, preview look |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod host;
pub mod input;
pub mod render;
pub mod store;
pub mod style;
pub mod surface;
