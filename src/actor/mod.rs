pub const BUFFER_MAX: usize = 1000;

pub mod console;
pub mod controller;
pub mod game;
