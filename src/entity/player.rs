use bevy::prelude::Component;

use crate::constants::{PLAYER_SIGHT_RADIUS, PLAYER_SYMBOL};
use crate::coords::{correct_out_of_bounds, AbsolutePosition, ChunkCoordinate, LayoutError, WorldLayout};
use crate::entity::Moveable;

/// The controllable character
#[derive(Component, Clone, Debug)]
pub struct Player {
    position: ChunkCoordinate,
    absolute: AbsolutePosition,
    visible: bool,
    sight_radius: i32,
}

impl Player {
    pub fn new(init_pos: AbsolutePosition, layout: &WorldLayout) -> Result<Self, LayoutError> {
        let mut player = Self {
            position: ChunkCoordinate::default(),
            absolute: AbsolutePosition::ZERO,
            visible: true,
            sight_radius: PLAYER_SIGHT_RADIUS,
        };
        player.set_pos(init_pos, layout)?;
        Ok(player)
    }

    /// Moves by `delta`, stopping at the edge of the world.
    pub fn step(&mut self, delta: AbsolutePosition, layout: &WorldLayout) -> Result<(), LayoutError> {
        self.set_pos(self.absolute + delta, layout)
    }
}

impl Moveable for Player {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn symbol(&self) -> char {
        PLAYER_SYMBOL
    }

    fn set_pos(&mut self, pos: AbsolutePosition, layout: &WorldLayout) -> Result<(), LayoutError> {
        let corrected = correct_out_of_bounds(pos, layout)?;
        self.position = ChunkCoordinate::from_absolute(corrected, layout)?;
        self.absolute = corrected;
        Ok(())
    }

    fn relative_position(&self) -> ChunkCoordinate {
        self.position
    }

    fn absolute_position(&self) -> AbsolutePosition {
        self.absolute
    }

    fn sight_radius(&self) -> i32 {
        self.sight_radius
    }
}
