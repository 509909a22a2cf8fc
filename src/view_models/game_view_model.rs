//! Bridges keyboard and timer messages to the running [`GameSession`].

use iced::keyboard::{key::Named, Key};
use log::{debug, warn};

use crate::{
    app::Message,
    models::{
        config::{ConfigError, GameConfig},
        grid::Direction,
        session::GameSession,
    },
    view_model::ViewModel,
    views::{game::GameMessage, game_over::GameOverMessage},
};

#[derive(Debug)]
pub struct GameViewModel {
    session: GameSession,
}

impl GameViewModel {
    /// Constructs a fresh round.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `config` cannot host a round.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let session = GameSession::new(config, &mut rand::thread_rng())?;
        Ok(Self { session })
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.session.config()
    }
}

fn direction_for_key(key: &Key) -> Option<Direction> {
    match key {
        Key::Named(Named::ArrowUp) => Some(Direction::Up),
        Key::Named(Named::ArrowDown) => Some(Direction::Down),
        Key::Named(Named::ArrowLeft) => Some(Direction::Left),
        Key::Named(Named::ArrowRight) => Some(Direction::Right),
        Key::Character(c) => match c.as_str() {
            "w" | "W" => Some(Direction::Up),
            "s" | "S" => Some(Direction::Down),
            "a" | "A" => Some(Direction::Left),
            "d" | "D" => Some(Direction::Right),
            _ => None,
        },
        _ => None,
    }
}

impl ViewModel for GameViewModel {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::Game(game_message) = message {
            match game_message {
                GameMessage::Key(key) => {
                    if let Some(direction) = direction_for_key(&key) {
                        self.session.set_player_direction(direction);
                    }
                    None
                }
                GameMessage::Tick(_) => {
                    self.session.tick(&mut rand::thread_rng());
                    if self.session.is_alive() {
                        None
                    } else {
                        Some(Message::GameOver(GameOverMessage::Finished(
                            self.session.score(),
                        )))
                    }
                }
                GameMessage::Start => {
                    debug!("Start is handled by the app shell");
                    None
                }
            }
        } else {
            warn!("Non-game message sent to GameViewModel: {message:#?}");
            None
        }
    }
}
