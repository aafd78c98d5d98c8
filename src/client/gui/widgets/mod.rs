pub mod dish_card;
