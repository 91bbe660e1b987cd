pub mod actor;
pub mod config;
pub mod game;
pub mod render;
pub mod repo;
