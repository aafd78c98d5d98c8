use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::widgets::dish_card;
use crate::client::models::app_state::{MenuAppState, ViewState};
use crate::client::models::menu::Menu;
use crate::client::models::messages::Message;

const ACCENT: Color = Color::from_rgb(0.98, 0.33, 0.11);
const TEXT_SECONDARY: Color = Color::from_rgb(0.55, 0.55, 0.55);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

pub fn view(state: &MenuAppState) -> Element<'_, Message> {
    match &state.view {
        ViewState::Loading => loading_view(),
        ViewState::Results(menu) => results_view(menu),
        ViewState::Idle => empty_view(),
    }
}

fn loading_view() -> Element<'static, Message> {
    Container::new(
        Column::new()
            .spacing(16)
            .align_items(Alignment::Center)
            .push(Text::new("⏳").font(EMOJI_FONT).size(40).style(TEXT_SECONDARY))
            .push(Text::new("Đang chọn nguyên liệu tươi ngon...").size(15).style(TEXT_SECONDARY)),
    )
    .width(Length::Fill)
    .center_x()
    .padding(60)
    .into()
}

fn results_view(menu: &Menu) -> Element<'_, Message> {
    let title = Container::new(Text::new(&menu.title).size(26).font(BOLD_FONT).style(ACCENT))
        .width(Length::Fill)
        .center_x()
        .padding([8, 0]);

    // Two cards per row, like the original grid
    let mut grid = Column::new().spacing(24);
    for pair in menu.dishes.chunks(2) {
        let mut row = Row::new().spacing(24);
        for dish in pair {
            row = row.push(Container::new(dish_card::view(dish)).width(Length::FillPortion(1)));
        }
        if pair.len() == 1 {
            row = row.push(Space::new(Length::FillPortion(1), Length::Fixed(0.0)));
        }
        grid = grid.push(row);
    }

    Column::new()
        .spacing(16)
        .padding([16, 20])
        .push(title)
        .push(grid)
        .into()
}

fn empty_view() -> Element<'static, Message> {
    Container::new(
        Column::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(Text::new("🍳").font(EMOJI_FONT).size(44).style(TEXT_SECONDARY))
            .push(Text::new("Sẵn sàng phục vụ bữa ăn của bạn").size(15).style(TEXT_SECONDARY)),
    )
    .width(Length::Fill)
    .center_x()
    .padding(60)
    .into()
}
