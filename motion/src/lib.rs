//! Decorative canvas animations for the portfolio site.
//!
//! This crate is compiled to WebAssembly and drives the background effects:
//! the floating particle fields behind the header and hero, the
//! signal-flow network on the research page, and the auto-rotating 3D
//! neural scene on the projects page. Simulation state lives in plain
//! structs stepped once per animation tick, so every invariant (bounds,
//! caps, pulse decay) is testable on the native target; only [`render`]
//! touches [`web_sys::CanvasRenderingContext2d`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`field`] | Floating particle field (header and hero variants) |
//! | [`flow`] | Layered signal-flow network |
//! | [`orbit`] | Software-projected 3D neural scene |
//! | [`render`] | Canvas 2D drawing for all three effects |
//! | [`consts`] | Shared numeric constants (caps, speeds, layer shapes) |

pub mod consts;
pub mod field;
pub mod flow;
pub mod orbit;
pub mod render;
