//! Canvas 2D rendering module
//!
//! Immediate-mode full repaint of the scene once per tick and once per
//! resize. Geometry is specified in logical units; the context is scaled by
//! the device pixel ratio.

pub mod canvas;

pub use canvas::CanvasRenderer;
