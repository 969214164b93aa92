pub mod tile_grid;

use bevy::math::IVec2;

pub use tile_grid::TileGrid;

/// Map access used by anything that stores one value per tile.
pub trait Grid<E> {
    fn length(&self) -> usize;
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn fill(&mut self);
    fn unit_at(&self, loc: IVec2) -> Option<&E>;
}
