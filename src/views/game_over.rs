use iced::{
    keyboard::{self, key::Named, Key},
    widget::{column, container, text},
    Alignment, Color, Element, Length, Subscription,
};
use log::debug;

use crate::{app::Message, view::View};

use super::game::GameMessage;

#[derive(Clone, Debug)]
pub enum GameOverMessage {
    /// A round just ended with this final score; consumed by the app
    /// shell to switch screens.
    Finished(u32),
    Key(Key),
}

/// End screen holding the frozen final score of the round that just
/// ended.
#[derive(Debug)]
pub struct GameOverScreen {
    score: u32,
}

impl GameOverScreen {
    #[must_use]
    pub fn new(score: u32) -> Self {
        Self { score }
    }
}

impl View for GameOverScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::GameOver(game_over_message) = message {
            match game_over_message {
                GameOverMessage::Key(key) => {
                    if matches!(key, Key::Named(Named::Space)) {
                        debug!("Restart requested");
                        Some(Message::Game(GameMessage::Start))
                    } else {
                        None
                    }
                }
                GameOverMessage::Finished(_) => {
                    debug!("Finished is handled by the app shell");
                    None
                }
            }
        } else {
            debug!("Received message for GameOverScreen but was: {message:#?}");
            None
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let lines = column![
            text("GAME OVER").size(60),
            text(format!("Score: {}", self.score)).size(40),
            text("Press SPACE to try again").size(30),
        ]
        .spacing(30)
        .align_x(Alignment::Center);

        container(lines)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .style(|_: &_| container::Style {
                background: Some(Color::from_rgb8(200, 100, 100).into()),
                text_color: Some(Color::WHITE),
                ..container::Style::default()
            })
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _| Some(Message::GameOver(GameOverMessage::Key(key))))
    }
}
