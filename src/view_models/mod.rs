pub mod game_view_model;
