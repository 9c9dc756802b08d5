//! Asset generators and compositing.
//!
//! Each generator is a pure function from a palette and size parameters to a
//! painted canvas. All geometry is expressed through size-relative
//! `ShapePrimitive`s, so a generator's unit-space primitive list is exposed
//! separately from the rastered result and can be inspected in tests.

pub mod character;
pub mod compose;
pub mod effect;
pub mod png;
pub mod tile;
pub mod ui;
pub mod weapon;

use std::fmt;

use crate::canvas::Canvas;

/// The asset categories the pipeline knows how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    Characters,
    Weapons,
    Ui,
    Tiles,
    Effects,
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Characters => "characters",
            Self::Weapons => "weapons",
            Self::Ui => "ui",
            Self::Tiles => "tiles",
            Self::Effects => "effects",
        };
        f.write_str(name)
    }
}

/// A finished asset: a painted canvas plus naming metadata.
///
/// Immutable once produced; the pipeline consumes it for persistence.
#[derive(Debug, Clone)]
pub struct GeneratedAsset {
    pub name: String,
    pub category: AssetCategory,
    pub canvas: Canvas,
}

impl GeneratedAsset {
    pub fn new(name: impl Into<String>, category: AssetCategory, canvas: Canvas) -> Self {
        Self {
            name: name.into(),
            category,
            canvas,
        }
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }
}
