// Chunk dimensions (tiles per chunk, overridden by config)
pub const DEFAULT_TILE_DIMS: [i32; 3] = [10, 10, 1];

// World defaults (overridden by config)
pub const DEFAULT_WORLD_CHUNKS_X: i32 = 8;
pub const DEFAULT_WORLD_CHUNKS_Y: i32 = 8;

// Coordinates are 1-based: the first chunk and the first tile are both 1
pub const FIRST_CHUNK: i32 = 1;
pub const FIRST_TILE: i32 = 1;

// Player
pub const PLAYER_SYMBOL: char = '@';
pub const PLAYER_SIGHT_RADIUS: i32 = 7;
