pub mod game;
pub mod game_over;
pub mod welcome;
