//! Linear barcode for the loyalty number
//!
//! `encode` turns the number into width codes; `render` walks them into
//! filled bars sized for an SVG viewport.

mod encoder;
mod renderer;

pub use encoder::{encode, Digit, Symbol, WidthCodeSequence};
pub use renderer::{render, Bar, BarcodeStyle, RenderedBarcode};
