pub mod engine;
pub mod food;
pub mod physics;
pub mod player;
pub mod world;
