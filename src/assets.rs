//! Sprite images, decoded once at startup.

use crate::constants::{ASSET_DIR, BACKGROUND_SPRITE, OBSTACLE_SPRITE, PLAYER_SPRITE};
use crate::error::{GameError, Result};
use image::RgbaImage;
use std::path::Path;

/// Pixels at or above this alpha are drawn; the rest are transparent.
const ALPHA_CUTOFF: u8 = 128;

/// An RGBA image that can be sampled as opaque colours.
#[derive(Debug, Clone)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .map_err(|source| GameError::Asset {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        log::debug!(
            "loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self { image })
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Colour at `(x, y)`, or `None` if out of bounds or transparent.
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        let [r, g, b, a] = self.image.get_pixel_checked(x, y)?.0;
        (a >= ALPHA_CUTOFF).then_some((r, g, b))
    }
}

/// Every image the game draws.
#[derive(Debug, Clone)]
pub struct Assets {
    pub player: Sprite,
    pub obstacle: Sprite,
    pub background: Sprite,
}

impl Assets {
    /// Load from the bundled `assets/` directory.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(ASSET_DIR))
    }

    pub fn load_from(dir: &Path) -> Result<Self> {
        Ok(Self {
            player: Sprite::load(&dir.join(PLAYER_SPRITE))?,
            obstacle: Sprite::load(&dir.join(OBSTACLE_SPRITE))?,
            background: Sprite::load(&dir.join(BACKGROUND_SPRITE))?,
        })
    }
}
