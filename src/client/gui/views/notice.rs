use iced::widget::container::Appearance;
use iced::widget::{Container, Row, Text};
use iced::{Element, Font, Length};

use crate::client::models::messages::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn emoji(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "✅",
            NoticeLevel::Warning => "⚠️",
            NoticeLevel::Error => "❌",
        }
    }

    pub fn color(&self) -> iced::Color {
        match self.level {
            NoticeLevel::Success => iced::Color::from_rgb(0.2, 0.8, 0.4),
            NoticeLevel::Warning => iced::Color::from_rgb(0.95, 0.7, 0.0),
            NoticeLevel::Error => iced::Color::from_rgb(1.0, 0.2, 0.2),
        }
    }
}

pub fn notice_view(notices: &[Notice]) -> Element<'_, Message> {
    // Only the latest notice is shown, as a single bar at the top
    if let Some(notice) = notices.iter().next_back() {
        let bg_color = notice.color();
        Container::new(
            Row::new()
                .spacing(12)
                .push(
                    Text::new(notice.emoji())
                        .font(Font::with_name("Segoe UI Emoji"))
                        .size(18)
                        .style(iced::Color::WHITE),
                )
                .push(Text::new(&notice.message).size(16).style(iced::Color::WHITE)),
        )
        .padding([12, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            move |_: &iced::Theme| Appearance {
                background: Some(iced::Background::Color(bg_color)),
                text_color: Some(iced::Color::WHITE),
                border: iced::Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                shadow: iced::Shadow {
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 12.0,
                    color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                },
            },
        )))
        .into()
    } else {
        iced::widget::Space::new(Length::Fill, Length::Fixed(0.0)).into()
    }
}
