//! Chunk-relative coordinates and the world layout they are measured against.

pub mod bounds;
pub mod chunk_coordinate;
pub mod error;
pub mod layout;
pub mod plugin;

pub use bounds::{correct_out_of_bounds, correct_with_containment};
pub use chunk_coordinate::{AbsolutePosition, ChunkCoordinate, Containment};
pub use error::LayoutError;
pub use layout::{LayoutSlot, WorldLayout};
pub use plugin::WorldLayoutPlugin;
