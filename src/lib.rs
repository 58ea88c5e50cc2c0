//! Procedural slider widget for the browser.
//!
//! The geometry, noise, renderer and DOM-naming modules are plain Rust and
//! run on any target; the canvas, DOM and animation-frame glue is only built for
//! `wasm32`.

pub mod constants;
pub mod core;
pub mod input;
pub mod render;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod widget;

pub use crate::core::{LayoutError, RoundedRect, SliderKind, SliderLayout};
pub use input::{PointerMove, PointerQueue, SliderControls};
pub use render::{InputSource, SliderLoop, SliderRenderer, Surface};

#[cfg(target_arch = "wasm32")]
pub use widget::SliderWidget;
