//! Interactive logo-placement engine for the jersey order preview.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It lets a
//! user place, move, resize, nudge, zoom and remove decoration elements on a
//! garment preview using only pointer coordinates. Every interactive
//! affordance is recomputed from the selected element's live placement on each
//! event; nothing is retained between events except the drag anchor. The host
//! wires DOM pointer events to the engine, supplies the element list and a draw
//! callback, and handles the returned [`engine::Action`]s (persisting, deleting).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine, drag state machine in [`engine::EngineCore`] |
//! | [`store`] | Placement store: `{x, y, scale}` per element |
//! | [`hit`] | Hit-testing and affordance geometry |
//! | [`input`] | Selection and drag state types |
//! | [`coords`] | Client-to-logical coordinate mapping |
//! | [`dispatch`] | Routing intent actions to host callbacks |
//! | [`element`] | Decoration elements supplied by the host |
//! | [`geometry`] | Points, sizes, rects and circles |
//! | [`render`] | Element and selection-chrome rendering |
//! | [`config`] | Engine configuration |
//! | [`consts`] | Shared numeric constants (limits, affordance layout) |

pub mod config;
pub mod consts;
pub mod coords;
pub mod dispatch;
pub mod element;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod render;
pub mod store;
