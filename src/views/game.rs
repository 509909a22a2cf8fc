use std::collections::HashSet;

use iced::{
    keyboard::{self, Key},
    time::{self, Instant},
    widget::{column, container, text, Column, Row},
    Border, Color, Element, Length, Subscription,
};

use crate::{
    app::Message,
    models::{
        config::{ConfigError, GameConfig},
        grid::Cell,
    },
    view::View,
    view_model::ViewModel,
    view_models::game_view_model::GameViewModel,
};

#[derive(Clone, Debug)]
pub enum GameMessage {
    /// Request for a fresh round; consumed by the app shell.
    Start,
    Key(Key),
    Tick(Instant),
}

#[derive(Debug)]
pub struct GameScreen {
    view_model: GameViewModel,
}

impl GameScreen {
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `config` cannot host a round.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            view_model: GameViewModel::new(config)?,
        })
    }
}

impl View for GameScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        self.view_model.update(message)
    }

    fn view(&self) -> Element<'_, Message> {
        let session = self.view_model.session();
        let config = self.view_model.config();
        let cell_size = config.cell_size;

        let make_container = |color: Color| {
            container(text(" ").color(color)) // Empty text to preserve size
                .width(cell_size)
                .height(cell_size)
                .style(move |_: &_| container::Style {
                    border: Border {
                        color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
                        width: 1.0,
                        ..Default::default()
                    },
                    background: Some(color.into()),
                    ..container::Style::default()
                })
        };

        let player_head = session.player().head();
        let enemy_head = session.enemy().head();
        let player_cells: HashSet<Cell> = session.player().body().cells().collect();
        let enemy_cells: HashSet<Cell> = session.enemy().body().cells().collect();
        let fruit = session.fruit().cell();

        let mut grid_view = Column::new();
        for y in 0..config.grid_height {
            let mut row = Row::new();
            for x in 0..config.grid_width {
                let cell = Cell::new(x, y);
                // draw order of the original: enemy over player over fruit
                let color = if cell == enemy_head {
                    Color::from_rgb(1.0, 0.0, 0.0)
                } else if enemy_cells.contains(&cell) {
                    Color::from_rgba(1.0, 0.0, 0.0, 0.8)
                } else if cell == player_head {
                    Color::from_rgb(1.0, 1.0, 0.0)
                } else if player_cells.contains(&cell) {
                    Color::from_rgba(1.0, 1.0, 0.0, 0.8)
                } else if cell == fruit {
                    Color::from_rgb(1.0, 0.0, 1.0)
                } else if (x + y) % 2 == 0 {
                    Color::from_rgb8(127, 255, 0)
                } else {
                    Color::from_rgb8(118, 238, 0)
                };
                row = row.push(make_container(color));
            }
            grid_view = grid_view.push(row);
        }

        let score = text(format!("Score: {}", session.score())).size(24);

        container(column![score, grid_view].spacing(10))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let timer = time::every(self.view_model.config().tick_interval)
            .map(GameMessage::Tick)
            .map(Message::Game);
        let keyboard = keyboard::on_key_press(|key, _| Some(Message::Game(GameMessage::Key(key))));
        Subscription::batch(vec![timer, keyboard])
    }
}
