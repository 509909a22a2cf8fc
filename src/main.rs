use log::debug;
use snakehunt::app::State;

fn main() {
    std::env::set_var("RUST_LOG", "snakehunt=debug");
    env_logger::init();
    debug!("Debug on");
    let _ = iced::application("Snake Hunt", State::update, State::view)
        .window_size(iced::Size::new(810.0, 660.0))
        .subscription(State::subscription)
        .run();
}
