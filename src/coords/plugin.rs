use bevy::prelude::*;

use crate::coords::layout::{LayoutSlot, WorldLayout};

/// Registers the [`LayoutSlot`] resource.
///
/// Without a layout the slot starts empty and conversions driven from it
/// fail with [`LayoutError::Uninitialized`](crate::coords::LayoutError)
/// until startup code calls [`LayoutSlot::set_layout`].
#[derive(Default)]
pub struct WorldLayoutPlugin {
    pub layout: Option<WorldLayout>,
}

impl WorldLayoutPlugin {
    pub fn new(layout: WorldLayout) -> Self {
        Self { layout: Some(layout) }
    }
}

impl Plugin for WorldLayoutPlugin {
    fn build(&self, app: &mut App) {
        let mut slot = LayoutSlot::default();
        if let Some(layout) = self.layout {
            slot.set_layout(layout);
        }
        app.insert_resource(slot);
    }
}
