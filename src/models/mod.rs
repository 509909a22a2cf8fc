pub mod body;
pub mod config;
pub mod enemy;
pub mod fruit;
pub mod grid;
pub mod player;
pub mod session;
