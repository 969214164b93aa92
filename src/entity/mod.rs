pub mod player;

use crate::coords::{AbsolutePosition, ChunkCoordinate, LayoutError, WorldLayout};

pub use player::Player;

/// Anything placed on the map that can change position.
pub trait Moveable {
    fn set_visible(&mut self, visible: bool);

    fn visible(&self) -> bool;

    fn symbol(&self) -> char;

    /// Moves to `pos`, pulled back inside the world if it lies outside.
    fn set_pos(&mut self, pos: AbsolutePosition, layout: &WorldLayout) -> Result<(), LayoutError>;

    fn relative_position(&self) -> ChunkCoordinate;

    fn absolute_position(&self) -> AbsolutePosition;

    fn sight_radius(&self) -> i32;
}
