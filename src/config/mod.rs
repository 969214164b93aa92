pub mod loader;

use bevy::math::{IVec2, IVec3};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{DEFAULT_TILE_DIMS, DEFAULT_WORLD_CHUNKS_X, DEFAULT_WORLD_CHUNKS_Y};
use crate::coords::WorldLayout;
use loader::{load_config, ConfigError};

/// On-disk form of a [`WorldLayout`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    /// World size in chunks along X and Y
    pub world_chunks: [i32; 2],
    /// Tiles per chunk along X, Y and Z
    pub tile_dims: [i32; 3],
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            world_chunks: [DEFAULT_WORLD_CHUNKS_X, DEFAULT_WORLD_CHUNKS_Y],
            tile_dims: DEFAULT_TILE_DIMS,
        }
    }
}

impl LayoutConfig {
    pub fn to_layout(&self) -> Result<WorldLayout, ConfigError> {
        let layout = WorldLayout::new(IVec2::from_array(self.world_chunks), IVec3::from_array(self.tile_dims));
        layout.validate()?;
        Ok(layout)
    }
}

/// Reads a [`LayoutConfig`] from YAML and turns it into a checked layout.
pub fn load_layout<P: AsRef<Path>>(path: P) -> Result<WorldLayout, ConfigError> {
    let config: LayoutConfig = load_config(path)?;
    config.to_layout()
}
