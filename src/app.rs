use iced::{Element, Subscription};
use log::{debug, error};

use crate::{
    models::config::GameConfig,
    view::View,
    views::{
        game::{GameMessage, GameScreen},
        game_over::{GameOverMessage, GameOverScreen},
        welcome::{WelcomeMessage, WelcomeScreen},
    },
};

/// Top-level application state: which screen is active. The
/// welcome/playing/game-over flow is an explicit loop here, never
/// recursion; a restart constructs a brand-new [`GameScreen`].
pub struct State {
    screen: Screen,
}

#[derive(Debug)]
enum Screen {
    Welcome(WelcomeScreen),
    Game(GameScreen),
    GameOver(GameOverScreen),
}

impl Screen {
    pub fn new_welcome() -> Self {
        Screen::Welcome(WelcomeScreen::new())
    }

    pub fn new_game_over(score: u32) -> Self {
        Screen::GameOver(GameOverScreen::new(score))
    }
}

#[derive(Clone, Debug)]
pub enum Message {
    Welcome(WelcomeMessage),
    Game(GameMessage),
    GameOver(GameOverMessage),
}

impl View for Screen {
    fn update(&mut self, message: Message) -> Option<Message> {
        match self {
            Screen::Welcome(screen) => screen.update(message),
            Screen::Game(screen) => screen.update(message),
            Screen::GameOver(screen) => screen.update(message),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match self {
            Screen::Welcome(screen) => screen.view(),
            Screen::Game(screen) => screen.view(),
            Screen::GameOver(screen) => screen.view(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match self {
            Screen::Welcome(screen) => screen.subscription(),
            Screen::Game(screen) => screen.subscription(),
            Screen::GameOver(screen) => screen.subscription(),
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::new_welcome(),
        }
    }

    pub fn update(state: &mut State, message: Message) {
        if let Some(next) = state.screen.update(message) {
            match next {
                Message::Welcome(_) => state.screen = Screen::new_welcome(),
                Message::Game(_) => match GameScreen::new(GameConfig::default()) {
                    Ok(screen) => {
                        debug!("Starting a new round");
                        state.screen = Screen::Game(screen);
                    }
                    Err(e) => error!("Could not start a new round: {e:#?}"),
                },
                Message::GameOver(GameOverMessage::Finished(score)) => {
                    debug!("Round ended with score {score}");
                    state.screen = Screen::new_game_over(score);
                }
                Message::GameOver(other) => {
                    debug!("Unexpected transition message: {other:#?}");
                }
            }
        }
    }

    #[must_use]
    pub fn view(state: &State) -> Element<'_, Message> {
        state.screen.view()
    }

    #[must_use]
    pub fn subscription(state: &State) -> Subscription<Message> {
        state.screen.subscription()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
