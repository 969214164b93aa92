use bevy::math::{IVec2, IVec3};
use bevy::prelude::Resource;
use log::{info, warn};

use crate::coords::chunk_coordinate::{AbsolutePosition, ChunkCoordinate, Containment};
use crate::coords::error::LayoutError;

/// Chunk dimensions and world extent shared by every conversion.
///
/// The boundary of the world is itself a [`ChunkCoordinate`]: the last
/// chunk (`world_chunks`) and, inside it, the last tile (`tile_dims`).
#[derive(Resource, Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct WorldLayout {
    world_chunks: IVec2,
    tile_dims: IVec3,
}

impl WorldLayout {
    /// Placeholder layout. Every conversion against it fails.
    pub const ZERO: Self = Self {
        world_chunks: IVec2::ZERO,
        tile_dims: IVec3::ZERO,
    };

    pub const fn new(world_chunks: IVec2, tile_dims: IVec3) -> Self {
        Self { world_chunks, tile_dims }
    }

    pub fn world_chunks(&self) -> IVec2 {
        self.world_chunks
    }

    pub fn tile_dims(&self) -> IVec3 {
        self.tile_dims
    }

    pub fn bound(&self) -> ChunkCoordinate {
        ChunkCoordinate::new(self.world_chunks, self.tile_dims)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.tile_dims.cmple(IVec3::ZERO).any() || self.world_chunks.cmple(IVec2::ZERO).any() {
            warn!("rejecting degenerate world layout {:?}", self);
            return Err(LayoutError::Degenerate {
                tile_dims: self.tile_dims,
                world_chunks: self.world_chunks,
            });
        }
        let extent_x = self.world_chunks.x.checked_mul(self.tile_dims.x);
        let extent_y = self.world_chunks.y.checked_mul(self.tile_dims.y);
        if extent_x.is_none() || extent_y.is_none() {
            warn!("rejecting world layout {:?}: tile extent overflows i32", self);
            return Err(LayoutError::Overflow {
                tile_dims: self.tile_dims,
                world_chunks: self.world_chunks,
            });
        }
        Ok(())
    }

    /// Largest valid absolute index on each axis.
    pub fn to_absolute_bound(&self) -> Result<AbsolutePosition, LayoutError> {
        self.bound().to_absolute(self)
    }

    /// Number of tiles along each axis of the whole world.
    pub fn world_size_tiles(&self) -> Result<IVec3, LayoutError> {
        self.validate()?;
        Ok(self.tile_dims * self.world_chunks.extend(1))
    }

    /// Classifies `candidate` against this layout's boundary coordinate.
    pub fn classify(&self, candidate: &ChunkCoordinate) -> Containment {
        self.bound().compare(candidate)
    }

    /// True when `point` lies in `[0, bound]` on every axis.
    pub fn contains(&self, point: AbsolutePosition) -> Result<bool, LayoutError> {
        let max = self.to_absolute_bound()?;
        Ok(point.cmpge(AbsolutePosition::ZERO).all() && point.cmple(max).all())
    }
}

/// Holds the world layout once startup has chosen one.
#[derive(Resource, Default, Debug)]
pub struct LayoutSlot {
    current: Option<WorldLayout>,
}

impl LayoutSlot {
    pub fn with_layout(layout: WorldLayout) -> Self {
        Self { current: Some(layout) }
    }

    /// Replaces the layout. Not validated here; conversions validate.
    pub fn set_layout(&mut self, layout: WorldLayout) {
        info!(
            "world layout set: {} chunks of {} tiles",
            layout.world_chunks, layout.tile_dims
        );
        self.current = Some(layout);
    }

    pub fn layout(&self) -> Result<&WorldLayout, LayoutError> {
        self.current.as_ref().ok_or(LayoutError::Uninitialized)
    }
}
