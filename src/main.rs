use iced::Application;
fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    env_logger::init();
    bep_nha_ai::client::gui::app::MenuApp::run(iced::Settings::default())
}
