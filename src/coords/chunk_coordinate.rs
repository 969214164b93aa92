use bevy::math::{DVec3, IVec2, IVec3};
use std::fmt;

use crate::constants::{FIRST_CHUNK, FIRST_TILE};
use crate::coords::error::LayoutError;
use crate::coords::layout::WorldLayout;

/// A point in world space, irrespective of chunking.
pub type AbsolutePosition = DVec3;

/// Where a candidate coordinate falls relative to a bounding coordinate.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Containment {
    /// Exceeds the bound on at least one axis.
    Above,
    /// Identical to the bound.
    Equal,
    /// Less than or equal to the bound on every axis.
    Within,
    /// Not a valid position: chunk below 1 or tile below 0.
    BelowOrigin,
}

impl Containment {
    /// Integer form used by older save files and tooling.
    pub fn code(self) -> i8 {
        match self {
            Containment::Above => 1,
            Containment::Equal => 0,
            Containment::Within => -1,
            Containment::BelowOrigin => -2,
        }
    }

    pub fn is_in_bounds(self) -> bool {
        matches!(self, Containment::Equal | Containment::Within)
    }
}

/// A world position stored as a chunk plus the tile inside that chunk.
///
/// Both parts count from 1: chunk 1 is the first chunk and tile 1 is the
/// first tile of a chunk. Converting to and from [`AbsolutePosition`]
/// needs the [`WorldLayout`] that fixes how many tiles a chunk holds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ChunkCoordinate {
    chunk: IVec2,
    tile: IVec3,
}

impl Default for ChunkCoordinate {
    fn default() -> Self {
        Self::new(IVec2::splat(FIRST_CHUNK), IVec3::splat(FIRST_TILE))
    }
}

impl ChunkCoordinate {
    pub const fn new(chunk: IVec2, tile: IVec3) -> Self {
        Self { chunk, tile }
    }

    pub const fn from_parts(chunk_x: i32, chunk_y: i32, tile_x: i32, tile_y: i32, tile_z: i32) -> Self {
        Self::new(IVec2::new(chunk_x, chunk_y), IVec3::new(tile_x, tile_y, tile_z))
    }

    pub fn chunk(&self) -> IVec2 {
        self.chunk
    }

    pub fn tile(&self) -> IVec3 {
        self.tile
    }

    /// Converts an absolute point into chunk form.
    ///
    /// Each axis is floored first, so a fractional point lands on the tile
    /// that contains it. Negative points produce chunks below 1, which
    /// [`compare`](Self::compare) reports as [`Containment::BelowOrigin`].
    /// Points whose chunk or tile does not fit an `i32` fail with
    /// [`LayoutError::OutOfRange`].
    pub fn from_absolute(point: AbsolutePosition, layout: &WorldLayout) -> Result<Self, LayoutError> {
        layout.validate()?;
        let floored = point.floor();
        let out_of_range = LayoutError::OutOfRange { point };
        if !floored.is_finite()
            || floored.cmplt(DVec3::splat(i32::MIN as f64)).any()
            || floored.cmpgt(DVec3::splat(i32::MAX as f64)).any()
        {
            return Err(out_of_range);
        }

        let dims = layout.tile_dims();
        let split = |value: f64, dim: i32| {
            let (value, dim) = (value as i64, i64::from(dim));
            (
                value.div_euclid(dim) + i64::from(FIRST_CHUNK),
                value.rem_euclid(dim) + i64::from(FIRST_TILE),
            )
        };
        let (chunk_x, tile_x) = split(floored.x, dims.x);
        let (chunk_y, tile_y) = split(floored.y, dims.y);
        let tile_z = floored.z as i64 + i64::from(FIRST_TILE);

        let narrow = |value: i64| i32::try_from(value).map_err(|_| out_of_range);
        Ok(Self::from_parts(
            narrow(chunk_x)?,
            narrow(chunk_y)?,
            narrow(tile_x)?,
            narrow(tile_y)?,
            narrow(tile_z)?,
        ))
    }

    /// Converts back to an absolute point. Exact inverse of
    /// [`from_absolute`](Self::from_absolute) for integer points.
    pub fn to_absolute(&self, layout: &WorldLayout) -> Result<AbsolutePosition, LayoutError> {
        layout.validate()?;
        let dims = layout.tile_dims();
        // widened so chunks far from the origin cannot overflow
        let join = |chunk: i32, tile: i32, dim: i32| {
            (i64::from(chunk) - i64::from(FIRST_CHUNK)) * i64::from(dim) + i64::from(tile) - i64::from(FIRST_TILE)
        };
        Ok(DVec3::new(
            join(self.chunk.x, self.tile.x, dims.x) as f64,
            join(self.chunk.y, self.tile.y, dims.y) as f64,
            (i64::from(self.tile.z) - i64::from(FIRST_TILE)) as f64,
        ))
    }

    /// Classifies `other` against `self`, treating `self` as the bound.
    ///
    /// Branches are checked in order: invalid positions first, then exact
    /// equality, then componentwise `<=` on all five fields. Anything else
    /// is [`Containment::Above`].
    pub fn compare(&self, other: &ChunkCoordinate) -> Containment {
        // chunks are valid from 1, tiles from 0
        if other.chunk.cmple(IVec2::ZERO).any() || other.tile.cmplt(IVec3::ZERO).any() {
            Containment::BelowOrigin
        } else if other == self {
            Containment::Equal
        } else if other.chunk.cmple(self.chunk).all() && other.tile.cmple(self.tile).all() {
            Containment::Within
        } else {
            Containment::Above
        }
    }

    /// Moves this coordinate by `delta` in absolute space. The result is
    /// not corrected, so it may end up out of bounds.
    pub fn shift(&mut self, delta: AbsolutePosition, layout: &WorldLayout) -> Result<(), LayoutError> {
        *self = self.shifted(delta, layout)?;
        Ok(())
    }

    /// Returns a copy moved by the given tile offsets, leaving `self` untouched.
    pub fn read_only_shift(&self, dx: i32, dy: i32, dz: i32, layout: &WorldLayout) -> Result<Self, LayoutError> {
        self.shifted(IVec3::new(dx, dy, dz).as_dvec3(), layout)
    }

    fn shifted(&self, delta: AbsolutePosition, layout: &WorldLayout) -> Result<Self, LayoutError> {
        let absolute = self.to_absolute(layout)? + delta;
        Self::from_absolute(absolute, layout)
    }
}

impl fmt::Display for ChunkCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk:{},{}; Tile:{},{},{};",
            self.chunk.x, self.chunk.y, self.tile.x, self.tile.y, self.tile.z
        )
    }
}
