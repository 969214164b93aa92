pub mod constants;
pub mod config;
pub mod coords;
pub mod grid;
pub mod entity;
