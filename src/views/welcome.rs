use iced::{
    keyboard::{self, Key},
    widget::{column, container, text},
    Alignment, Color, Element, Length, Subscription,
};
use log::debug;

use crate::{app::Message, view::View};

use super::game::GameMessage;

#[derive(Clone, Debug)]
pub enum WelcomeMessage {
    Key(Key),
}

#[derive(Debug)]
pub struct WelcomeScreen {}

impl WelcomeScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for WelcomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl View for WelcomeScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::Welcome(WelcomeMessage::Key(_)) = message {
            debug!("Key pressed on the welcome screen; starting a round");
            Some(Message::Game(GameMessage::Start))
        } else {
            debug!("Received message for WelcomeScreen but was: {message:#?}");
            None
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let lines = column![
            text("SNAKE HUNT").size(60),
            text("Use ARROW KEYS or WASD to move.").size(28),
            text("Avoid the RED snake!").size(28),
            text("Eat MAGENTA fruits for points.").size(28),
            text("Press any key to start.").size(28),
        ]
        .spacing(20)
        .align_x(Alignment::Center);

        container(lines)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .style(|_: &_| container::Style {
                background: Some(Color::from_rgb8(50, 150, 200).into()),
                text_color: Some(Color::WHITE),
                ..container::Style::default()
            })
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _| Some(Message::Welcome(WelcomeMessage::Key(key))))
    }
}
