use bevy::math::{DVec3, IVec2, IVec3};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    #[error("world layout has not been set")]
    Uninitialized,
    #[error("degenerate world layout: tile dims {tile_dims}, world chunks {world_chunks}")]
    Degenerate { tile_dims: IVec3, world_chunks: IVec2 },
    #[error("world layout too large: tile dims {tile_dims}, world chunks {world_chunks}")]
    Overflow { tile_dims: IVec3, world_chunks: IVec2 },
    #[error("absolute point {point} has no chunk coordinate")]
    OutOfRange { point: DVec3 },
}
