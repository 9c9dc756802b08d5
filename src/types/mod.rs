//! Core domain types for pxgen.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values with source-over compositing
//! - `Palette` - the fixed named colour table shared by all generators
//! - `ShapePrimitive` - size-relative paint operations

mod colour;
mod palette;
mod primitive;

pub use colour::Colour;
pub use palette::Palette;
pub use primitive::ShapePrimitive;
