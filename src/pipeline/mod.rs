//! Pipeline orchestration.
//!
//! Walks the asset catalog for the selected category, invokes the pure
//! generators, composes the derived sprites, and hands every finished
//! canvas to the `AssetStore`. A single failed asset is recorded and
//! skipped; the rest of the run continues.

pub mod report;
pub mod store;

pub use report::{ConsoleReporter, NullReporter, Reporter};
pub use store::{AssetStore, FsStore};

use std::path::Path;

use serde::Serialize;

use crate::canvas::Canvas;
use crate::error::{PxgenError, Result};
use crate::render::{character, compose, effect, tile, ui, weapon, AssetCategory};
use crate::types::Palette;

/// Category selector accepted by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Characters,
    Weapons,
    Ui,
    Tiles,
    Effects,
    All,
}

// Catalog sizes, matching the reference art.
const SPRITE_SIZE: u32 = 64;
const TILE_SIZE: u32 = 32;
const TILE_VARIANTS: u32 = 4;
const FLASH_SIZE: u32 = 16;
const EMBLEM_SIZE: u32 = 256;
const HEALTH_BAR_SIZE: (u32, u32) = (200, 20);
const CROSSHAIR_SIZE: u32 = 32;

/// Vertical torso offset in the operator composite, as a fraction of the
/// sprite size.
const OPERATOR_TORSO_OFFSET: f32 = 20.0 / 64.0;

/// One successfully persisted asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub category: String,
}

/// One asset that could not be generated or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub path: String,
    pub message: String,
}

/// Aggregate result of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub assets: Vec<ManifestEntry>,
    pub failures: Vec<Failure>,
}

/// Generate and persist every asset in the selected category.
///
/// Output paths are distinct by construction, so runs are reproducible and
/// safe to parallelize externally. Per-asset failures never abort the run.
pub fn run(
    palette: &Palette,
    category: Category,
    store: &dyn AssetStore,
    reporter: &dyn Reporter,
) -> Summary {
    let mut session = Session {
        palette,
        store,
        reporter,
        summary: Summary::default(),
    };

    match category {
        Category::Characters => session.characters(),
        Category::Weapons => session.weapons(),
        Category::Ui => session.ui(),
        Category::Tiles => session.tiles(),
        Category::Effects => session.effects(),
        Category::All => {
            session.characters();
            session.weapons();
            session.ui();
            session.tiles();
            session.effects();
        }
    }

    reporter.done(&session.summary);
    session.summary
}

struct Session<'a> {
    palette: &'a Palette,
    store: &'a dyn AssetStore,
    reporter: &'a dyn Reporter,
    summary: Summary,
}

impl Session<'_> {
    /// Persist one canvas, recording success or failure.
    fn persist(&mut self, path: &str, category: AssetCategory, canvas: Result<Canvas>) {
        let outcome = canvas.and_then(|canvas| {
            self.store.write(Path::new(path), &canvas)?;
            Ok(canvas)
        });

        match outcome {
            Ok(canvas) => {
                self.reporter.asset(path, canvas.width(), canvas.height());
                self.summary.assets.push(ManifestEntry {
                    path: path.to_string(),
                    width: canvas.width(),
                    height: canvas.height(),
                    category: category.to_string(),
                });
            }
            Err(error) => {
                let message = error.to_string();
                self.reporter.failure(path, &message);
                self.summary.failures.push(Failure {
                    path: path.to_string(),
                    message,
                });
            }
        }
    }

    fn characters(&mut self) {
        self.reporter.category(AssetCategory::Characters);

        let head = character::generate_head(self.palette, SPRITE_SIZE);
        let torso = character::generate_torso(self.palette, SPRITE_SIZE);

        // Full operator: head on top, torso pasted lower down.
        let operator = match (&head, &torso) {
            (Ok(head), Ok(torso)) => {
                let offset = (SPRITE_SIZE as f32 * OPERATOR_TORSO_OFFSET).round() as u32;
                compose::assemble(&[(&head.canvas, (0, 0)), (&torso.canvas, (0, offset))])
            }
            _ => Err(PxgenError::Build {
                message: "Operator composite needs both head and torso".to_string(),
                help: None,
            }),
        };

        self.persist(
            "sprites/characters/head.png",
            AssetCategory::Characters,
            head.map(|a| a.canvas),
        );
        self.persist(
            "sprites/characters/torso.png",
            AssetCategory::Characters,
            torso.map(|a| a.canvas),
        );
        self.persist(
            "sprites/characters/operator.png",
            AssetCategory::Characters,
            operator,
        );
    }

    fn weapons(&mut self) {
        self.reporter.category(AssetCategory::Weapons);

        for kind in weapon::WeaponKind::all() {
            let (width, height) = kind.default_size();
            let path = format!("sprites/weapons/{}.png", kind.name());
            let asset = weapon::generate_weapon(self.palette, kind, width, height);
            self.persist(&path, AssetCategory::Weapons, asset.map(|a| a.canvas));
        }
    }

    fn ui(&mut self) {
        self.reporter.category(AssetCategory::Ui);

        self.persist(
            "ui/emblem.png",
            AssetCategory::Ui,
            ui::generate_emblem(self.palette, EMBLEM_SIZE).map(|a| a.canvas),
        );

        let (bar_w, bar_h) = HEALTH_BAR_SIZE;
        self.persist(
            "ui/hud/health_bar.png",
            AssetCategory::Ui,
            ui::generate_health_bar(self.palette, bar_w, bar_h).map(|a| a.canvas),
        );

        self.persist(
            "ui/hud/crosshair.png",
            AssetCategory::Ui,
            ui::generate_crosshair(self.palette, CROSSHAIR_SIZE).map(|a| a.canvas),
        );
    }

    fn tiles(&mut self) {
        self.reporter.category(AssetCategory::Tiles);

        for material in tile::MATERIALS {
            for variant in 0..TILE_VARIANTS {
                let path = format!("maps/tilesets/tile_{}_{}.png", material, variant);
                let asset = tile::generate_tile(material, TILE_SIZE, variant);
                self.persist(&path, AssetCategory::Tiles, asset.map(|a| a.canvas));
            }
        }
    }

    fn effects(&mut self) {
        self.reporter.category(AssetCategory::Effects);

        let frames: Vec<Result<crate::render::GeneratedAsset>> = (1..=effect::FLASH_FRAMES)
            .map(|frame| effect::generate_muzzle_flash(frame, FLASH_SIZE))
            .collect();

        // Pack the animation before the frames are moved out for persistence.
        let sheet = if frames.iter().all(|f| f.is_ok()) {
            let canvases: Vec<&Canvas> = frames
                .iter()
                .filter_map(|f| f.as_ref().ok().map(|a| &a.canvas))
                .collect();
            compose::build_sheet(&canvases, effect::FLASH_FRAMES, 1)
        } else {
            Err(PxgenError::Build {
                message: "Muzzle flash sheet needs all frames".to_string(),
                help: None,
            })
        };

        for (index, frame) in frames.into_iter().enumerate() {
            let path = format!("effects/particles/muzzle_flash_{:02}.png", index + 1);
            self.persist(&path, AssetCategory::Effects, frame.map(|a| a.canvas));
        }

        self.persist(
            "effects/particles/muzzle_flash_sheet.png",
            AssetCategory::Effects,
            sheet,
        );
    }
}
