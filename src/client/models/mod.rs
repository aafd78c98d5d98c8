pub mod app_state;
pub mod menu;
pub mod messages;
