use std::sync::Arc;
use std::time::Duration;

use chrono::Datelike;
use iced::widget::{Column, Container, Scrollable, Space, Text};
use iced::{Application, Color, Command, Element, Length, Theme};
use iced_aw::Modal;

use crate::client::gui::views::{dish_detail, notice, results, search};
use crate::client::models::app_state::{MenuAppState, ModalState};
use crate::client::models::messages::Message;
use crate::client::services::menu_service::MenuService;
use crate::config::ClientConfig;

const BG_MAIN: Color = Color::from_rgb(1.0, 0.97, 0.93);
const TEXT_SECONDARY: Color = Color::from_rgb(0.55, 0.55, 0.55);

/// How long a transient notice stays up before it is dismissed.
const NOTICE_DISMISS_MS: u64 = 4_000;

fn bg_main_appearance(_: &Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: None,
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

pub struct MenuApp {
    pub state: MenuAppState,
    pub menu_service: Arc<MenuService>,
}

fn dismiss_notice_later() -> Command<Message> {
    Command::perform(
        tokio::time::sleep(Duration::from_millis(NOTICE_DISMISS_MS)),
        |_| Message::ClearNotice,
    )
}

impl Application for MenuApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let config = ClientConfig::from_env();
        let app = MenuApp {
            state: MenuAppState::default(),
            menu_service: Arc::new(MenuService::new(config.api_endpoint)),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Bếp Nhà AI".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Submit => match self.state.submit() {
                Some(request) => {
                    let service = self.menu_service.clone();
                    Command::perform(
                        async move { service.generate(&request).await },
                        Message::MenuGenerated,
                    )
                }
                // Nothing was dispatched, only the blank-input warning
                None => dismiss_notice_later(),
            },
            Message::MenuGenerated(result) => {
                self.state.update(Message::MenuGenerated(result));
                dismiss_notice_later()
            }
            other => {
                self.state.update(other);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        let notice_bar = if self.state.notices.is_empty() {
            Container::new(Space::new(Length::Fill, Length::Fixed(0.0))).width(Length::Fill)
        } else {
            Container::new(notice::notice_view(&self.state.notices))
                .width(Length::Fill)
                .padding([8, 12, 0, 12])
        };

        let year = chrono::Local::now().year();
        let footer = Container::new(
            Text::new(format!("AI Menu Chef ©{} - Hạnh phúc bắt đầu từ căn bếp", year))
                .size(13)
                .style(TEXT_SECONDARY),
        )
        .width(Length::Fill)
        .center_x()
        .padding(20);

        let page = Column::new()
            .spacing(8)
            .push(notice_bar)
            .push(search::view(&self.state))
            .push(results::view(&self.state))
            .push(footer);

        let underlay = Container::new(
            Scrollable::new(
                Container::new(page)
                    .max_width(900.0)
                    .width(Length::Fill)
                    .center_x(),
            )
            .width(Length::Fill)
            .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)));

        let overlay = match &self.state.modal {
            ModalState::Open(dish) => Some(dish_detail::view(dish)),
            ModalState::Closed => None,
        };

        Modal::new(underlay, overlay)
            .backdrop(Message::CloseModal)
            .on_esc(Message::CloseModal)
            .into()
    }
}
