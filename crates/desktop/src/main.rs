mod app;
mod theme;
mod views;
mod workers;

use app::App;

fn main() -> iced::Result {
    env_logger::init();

    iced::application(App::new, App::update, App::view)
        .title("SignBridge Hearing Assistant")
        .theme(App::theme)
        .subscription(App::subscription)
        .window(iced::window::Settings {
            size: iced::Size::new(600.0, 560.0),
            ..Default::default()
        })
        .run()
}
