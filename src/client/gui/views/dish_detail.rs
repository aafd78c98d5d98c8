use iced::widget::{Button, Column, Container, Row, Scrollable, Text};
use iced::{Alignment, Color, Element, Font, Length};
use iced_aw::Card;

use crate::client::models::menu::Dish;
use crate::client::models::messages::Message;

const ACCENT: Color = Color::from_rgb(0.98, 0.33, 0.11);
const ACCENT_DARK: Color = Color::from_rgb(0.83, 0.22, 0.05);
const TAG_BG: Color = Color::from_rgb(1.0, 0.97, 0.9);
const TEXT_PRIMARY: Color = Color::from_rgb(0.15, 0.15, 0.15);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn ingredient_box_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(TAG_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

pub fn view(dish: &Dish) -> Element<'_, Message> {
    // All ingredients, two per row
    let mut ingredient_rows = Column::new().spacing(8);
    for pair in dish.ingredients.chunks(2) {
        let mut row = Row::new().spacing(16);
        for ingredient in pair {
            row = row.push(
                Row::new()
                    .spacing(4)
                    .width(Length::FillPortion(1))
                    .push(Text::new("•").size(14).style(ACCENT))
                    .push(Text::new(&ingredient.item).size(14).font(BOLD_FONT))
                    .push(Text::new(format!(": {}", ingredient.amount)).size(14)),
            );
        }
        if pair.len() == 1 {
            row = row.push(iced::widget::Space::new(Length::FillPortion(1), Length::Fixed(0.0)));
        }
        ingredient_rows = ingredient_rows.push(row);
    }

    let ingredients_box = Container::new(
        Column::new()
            .spacing(10)
            .push(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("📋").font(EMOJI_FONT).size(16))
                    .push(Text::new("Nguyên liệu chuẩn bị").size(16).font(BOLD_FONT).style(ACCENT_DARK)),
            )
            .push(ingredient_rows),
    )
    .padding(16)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(ingredient_box_appearance)));

    // All steps, numbered top to bottom
    let mut steps = Column::new().spacing(14);
    for (index, step) in dish.steps.iter().enumerate() {
        steps = steps.push(
            Row::new()
                .spacing(10)
                .align_items(Alignment::Start)
                .push(Text::new("✔").size(16).style(ACCENT))
                .push(
                    Column::new()
                        .spacing(2)
                        .width(Length::Fill)
                        .push(Text::new(format!("Bước {}", index + 1)).size(14).font(BOLD_FONT))
                        .push(Text::new(step).size(14).style(TEXT_PRIMARY)),
                ),
        );
    }

    let steps_section = Column::new()
        .spacing(10)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("🔥").font(EMOJI_FONT).size(16))
                .push(Text::new("Các bước chế biến").size(16).font(BOLD_FONT).style(ACCENT_DARK)),
        )
        .push(steps);

    let body = Scrollable::new(
        Column::new()
            .spacing(20)
            .padding([8, 12])
            .push(ingredients_box)
            .push(steps_section),
    );

    let foot = Container::new(
        Button::new(
            Text::new("Đã hiểu, bắt tay vào nấu thôi!").size(16).font(BOLD_FONT),
        )
        .on_press(Message::CloseModal)
        .style(iced::theme::Button::Primary)
        .padding([12, 24]),
    )
    .width(Length::Fill)
    .center_x();

    Card::new(Text::new(&dish.name).size(22).font(BOLD_FONT), body)
        .foot(foot)
        .max_width(700.0)
        .max_height(620.0)
        .on_close(Message::CloseModal)
        .into()
}
