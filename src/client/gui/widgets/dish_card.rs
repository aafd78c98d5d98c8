use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::menu::Dish;
use crate::client::models::messages::Message;

// Warm palette shared with the other views
const CARD_BG: Color = Color::WHITE;
const ACCENT: Color = Color::from_rgb(0.98, 0.33, 0.11);
const ACCENT_DARK: Color = Color::from_rgb(0.83, 0.22, 0.05);
const TAG_BG: Color = Color::from_rgb(1.0, 0.97, 0.9);
const TAG_BORDER: Color = Color::from_rgb(1.0, 0.84, 0.57);
const TEXT_PRIMARY: Color = Color::from_rgb(0.15, 0.15, 0.15);
const TEXT_SECONDARY: Color = Color::from_rgb(0.55, 0.55, 0.55);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
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

fn calorie_tag_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(TAG_BG)),
        text_color: Some(ACCENT_DARK),
        border: iced::Border {
            width: 1.0,
            color: TAG_BORDER,
            radius: 6.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

fn ingredient_box_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(TAG_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 8.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

fn ingredient_tag_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(Color::WHITE)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: TAG_BORDER,
            radius: 6.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

pub fn view(dish: &Dish) -> Element<'_, Message> {
    // Header: dish name with the calorie tag on the right, when the
    // generator provided one
    let mut header = Row::new()
        .spacing(8)
        .align_items(Alignment::Start)
        .push(
            Text::new(&dish.name)
                .size(20)
                .font(BOLD_FONT)
                .style(TEXT_PRIMARY)
                .width(Length::Fill),
        );
    if let Some(calories) = &dish.calories {
        header = header.push(
            Container::new(Text::new(calories).size(12).style(ACCENT_DARK))
                .padding([4, 8])
                .style(iced::theme::Container::Custom(Box::new(calorie_tag_appearance))),
        );
    }

    let description = Text::new(format!("\"{}\"", dish.short_description()))
        .size(14)
        .style(TEXT_SECONDARY);

    // First three ingredients as tags, the rest collapsed into a counter
    let mut tags = Row::new().spacing(6).align_items(Alignment::Center);
    for ingredient in dish.tag_ingredients() {
        tags = tags.push(
            Container::new(Text::new(&ingredient.item).size(12))
                .padding([3, 8])
                .style(iced::theme::Container::Custom(Box::new(ingredient_tag_appearance))),
        );
    }
    let hidden = dish.hidden_ingredient_count();
    if hidden > 0 {
        tags = tags.push(
            Text::new(format!("+{} loại khác", hidden))
                .size(12)
                .style(TEXT_SECONDARY),
        );
    }

    let ingredients_box = Container::new(
        Column::new()
            .spacing(6)
            .push(
                Row::new()
                    .spacing(6)
                    .align_items(Alignment::Center)
                    .push(Text::new("📋").font(EMOJI_FONT).size(14))
                    .push(Text::new("Nguyên liệu:").size(14).font(BOLD_FONT).style(ACCENT_DARK)),
            )
            .push(tags),
    )
    .padding(10)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(ingredient_box_appearance)));

    let details_button = Button::new(
        Row::new()
            .spacing(6)
            .align_items(Alignment::Center)
            .push(Text::new("Xem công thức").size(14).font(BOLD_FONT).style(ACCENT))
            .push(Text::new("📖").font(EMOJI_FONT).size(14)),
    )
    .style(iced::theme::Button::Text)
    .padding([6, 0])
    .on_press(Message::ShowDishDetails(dish.clone()));

    Container::new(
        Column::new()
            .spacing(10)
            .push(header)
            .push(description)
            .push(Space::new(Length::Fill, Length::Fixed(2.0)))
            .push(ingredients_box)
            .push(details_button),
    )
    .padding(20)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}
