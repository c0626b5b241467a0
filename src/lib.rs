pub mod config;
pub mod geometry_utils;
pub mod mapping;
pub mod session;
pub mod shirts;
pub mod skeleton;
pub mod sources;
pub mod systems;
pub mod voice;

pub type Point2D = (f32, f32);
