use crate::client::models::menu::{Dish, Menu};
use crate::client::services::menu_service::MenuError;

#[derive(Debug, Clone)]
pub enum Message {
    None, // used when a widget needs a message but nothing should happen
    InputChanged(String),
    Submit,
    MenuGenerated(Result<Menu, MenuError>),
    ShowDishDetails(Dish),
    CloseModal,
    ClearNotice,
}
