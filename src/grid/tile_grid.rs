use bevy::math::{DVec3, IVec2, IVec3};

use crate::coords::{ChunkCoordinate, LayoutError, WorldLayout};
use crate::grid::Grid;

/// Dense per-tile storage covering a whole world layout.
///
/// Indexed by absolute tile position. `unit_at` reads the bottom layer;
/// the full column is reachable through [`TileGrid::get`].
pub struct TileGrid<E> {
    units: Vec<E>,
    size: IVec3, // Tiles along each axis
}

impl<E: Clone + Default> TileGrid<E> {
    pub fn new(layout: &WorldLayout) -> Result<Self, LayoutError> {
        let size = layout.world_size_tiles()?;
        let volume = (size.x as usize)
            .checked_mul(size.y as usize)
            .and_then(|area| area.checked_mul(size.z as usize))
            .ok_or(LayoutError::Overflow {
                tile_dims: layout.tile_dims(),
                world_chunks: layout.world_chunks(),
            })?;
        Ok(Self {
            units: vec![E::default(); volume],
            size,
        })
    }

    pub fn fill_with(&mut self, unit: E) {
        self.units.fill(unit);
    }
}

impl<E> TileGrid<E> {
    pub fn size(&self) -> IVec3 {
        self.size
    }

    pub fn get(&self, pos: IVec3) -> Option<&E> {
        self.index(pos).map(|index| &self.units[index])
    }

    pub fn get_mut(&mut self, pos: IVec3) -> Option<&mut E> {
        self.index(pos).map(|index| &mut self.units[index])
    }

    /// Stores `unit` at `pos`. Returns false if `pos` is outside the grid.
    pub fn set(&mut self, pos: IVec3, unit: E) -> bool {
        match self.get_mut(pos) {
            Some(slot) => {
                *slot = unit;
                true
            }
            None => false,
        }
    }

    pub fn unit_at_mut(&mut self, loc: IVec2) -> Option<&mut E> {
        self.get_mut(loc.extend(0))
    }

    pub fn unit_at_coordinate(&self, coord: &ChunkCoordinate, layout: &WorldLayout) -> Result<Option<&E>, LayoutError> {
        let absolute = coord.to_absolute(layout)?;
        Ok(self.get(Self::tile_of(absolute)))
    }

    fn tile_of(absolute: DVec3) -> IVec3 {
        absolute.floor().as_ivec3()
    }

    fn index(&self, pos: IVec3) -> Option<usize> {
        if pos.cmplt(IVec3::ZERO).any() || pos.cmpge(self.size).any() {
            return None;
        }
        Some((pos.x + pos.y * self.size.x + pos.z * self.size.x * self.size.y) as usize)
    }

    #[cfg(test)]
    fn coords(&self, index: usize) -> IVec3 {
        let index = index as i32;
        let x = index % self.size.x;
        let y = (index / self.size.x) % self.size.y;
        let z = index / (self.size.x * self.size.y);
        IVec3::new(x, y, z)
    }
}

impl<E: Clone + Default> Grid<E> for TileGrid<E> {
    fn length(&self) -> usize {
        self.size.y as usize
    }

    fn width(&self) -> usize {
        self.size.x as usize
    }

    fn height(&self) -> usize {
        self.size.z as usize
    }

    fn fill(&mut self) {
        self.fill_with(E::default());
    }

    fn unit_at(&self, loc: IVec2) -> Option<&E> {
        self.get(loc.extend(0))
    }
}
