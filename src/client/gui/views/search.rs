use iced::widget::{Button, Column, Container, Row, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::app_state::{MenuAppState, ViewState, INPUT_MAX_CHARS};
use crate::client::models::messages::Message;

const ACCENT: Color = Color::from_rgb(0.98, 0.33, 0.11);
const CARD_BG: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.55, 0.55, 0.55);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn hero_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(ACCENT)),
        text_color: Some(Color::WHITE),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        },
    }
}

fn search_card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: None,
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
        },
    }
}

pub fn view(state: &MenuAppState) -> Element<'_, Message> {
    let loading = matches!(state.view, ViewState::Loading);

    let hero = Container::new(
        Column::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new("☕").font(EMOJI_FONT).size(44))
            .push(Text::new("Bếp Nhà AI").size(40).font(BOLD_FONT).style(Color::WHITE))
            .push(
                Text::new("Hôm nay ăn gì? Để AI gợi ý thực đơn chuẩn vị mẹ nấu.")
                    .size(16)
                    .style(Color::from_rgba(1.0, 1.0, 1.0, 0.9)),
            ),
    )
    .width(Length::Fill)
    .center_x()
    .padding([36, 20])
    .style(iced::theme::Container::Custom(Box::new(hero_appearance)));

    let input = TextInput::new(
        "Ví dụ: Món nhậu cuối tuần, hoặc Tôi còn 2 quả trứng và ít hành tây...",
        &state.input,
    )
    .on_input(Message::InputChanged)
    .on_submit(if loading { Message::None } else { Message::Submit })
    .padding(12)
    .size(16)
    .width(Length::Fill);

    let counter = Text::new(format!("{}/{}", state.input.chars().count(), INPUT_MAX_CHARS))
        .size(12)
        .style(TEXT_SECONDARY);

    let submit_label = if loading { "Đang lên lửa..." } else { "Lên Thực Đơn Ngay" };
    let submit_button = if loading {
        Button::new(
            Container::new(Text::new(submit_label).size(18).style(TEXT_SECONDARY))
                .width(Length::Fill)
                .center_x(),
        )
        .style(iced::theme::Button::Secondary)
        .width(Length::Fill)
        .padding(14)
    } else {
        Button::new(
            Container::new(Text::new(submit_label).size(18).font(BOLD_FONT))
                .width(Length::Fill)
                .center_x(),
        )
        .on_press(Message::Submit)
        .style(iced::theme::Button::Primary)
        .width(Length::Fill)
        .padding(14)
    };

    let search_card = Container::new(
        Column::new()
            .spacing(12)
            .push(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("🔥").font(EMOJI_FONT).size(18))
                    .push(Text::new("Bạn đang thèm món gì?").size(18).font(BOLD_FONT).style(ACCENT)),
            )
            .push(input)
            .push(
                Row::new()
                    .push(iced::widget::Space::new(Length::Fill, Length::Fixed(0.0)))
                    .push(counter),
            )
            .push(submit_button),
    )
    .padding(24)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(search_card_appearance)));

    Column::new()
        .spacing(24)
        .push(hero)
        .push(Container::new(search_card).width(Length::Fill).padding([0, 20]))
        .into()
}
