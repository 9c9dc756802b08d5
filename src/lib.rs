//! pxgen - procedural game asset generator
//!
//! A library for synthesizing small 2D raster game assets (character parts,
//! weapons, UI widgets, tiles, particle-effect frames) from parametric shape
//! descriptions, and composing them into sprites and grid spritesheets.

pub mod canvas;
pub mod cli;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;

pub use canvas::Canvas;
pub use error::{PxgenError, Result};
pub use pipeline::{
    AssetStore, Category, ConsoleReporter, Failure, FsStore, ManifestEntry, NullReporter,
    Reporter, Summary,
};
pub use render::compose::{assemble, build_sheet};
pub use render::png::{read_png, write_png};
pub use render::{AssetCategory, GeneratedAsset};
pub use types::{Colour, Palette, ShapePrimitive};
