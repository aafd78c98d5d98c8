use crate::client::gui::views::notice::{Notice, NoticeLevel};
use crate::client::models::menu::{Dish, Menu};
use crate::client::models::messages::Message;

/// Soft cap on the request input, mirrored by the counter under the field.
pub const INPUT_MAX_CHARS: usize = 200;

pub const EMPTY_INPUT_NOTICE: &str = "Bếp trưởng chưa biết bạn muốn ăn gì nè!";
pub const MENU_READY_NOTICE: &str = "Thực đơn đã sẵn sàng!";
pub const GENERATION_FAILED_NOTICE: &str = "Bếp đang quá tải, vui lòng thử lại sau chút xíu!";

/// What the main area shows. A new submit drops any previous results on the
/// way into `Loading`, so a failed generation lands back on `Idle`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Results(Menu),
}

/// Detail overlay. Carrying the dish in the variant means the modal can
/// never be open without one.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Dish),
}

#[derive(Debug, Clone, Default)]
pub struct MenuAppState {
    pub input: String,
    pub view: ViewState,
    pub modal: ModalState,
    pub notices: Vec<Notice>,
}

impl MenuAppState {
    /// Validate and start a generation cycle. Returns the trimmed request
    /// to dispatch, or `None` when nothing should go out: blank input gets
    /// a warning, and re-submitting while a request is in flight is inert.
    pub fn submit(&mut self) -> Option<String> {
        if matches!(self.view, ViewState::Loading) {
            return None;
        }

        let request = self.input.trim().to_string();
        if request.is_empty() {
            self.push_notice(NoticeLevel::Warning, EMPTY_INPUT_NOTICE);
            return None;
        }

        // Prior results are gone from here on; a failure will not restore them
        self.view = ViewState::Loading;
        Some(request)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::InputChanged(value) => {
                self.input = if value.chars().count() > INPUT_MAX_CHARS {
                    value.chars().take(INPUT_MAX_CHARS).collect()
                } else {
                    value
                };
            }
            Message::MenuGenerated(Ok(menu)) => {
                log::info!("menu ready: \"{}\" with {} dishes", menu.title, menu.dishes.len());
                self.view = ViewState::Results(menu);
                self.push_notice(NoticeLevel::Success, MENU_READY_NOTICE);
            }
            Message::MenuGenerated(Err(err)) => {
                // The notice is the same for both failure kinds; the log keeps them apart
                log::warn!("menu generation failed: {}", err);
                self.view = ViewState::Idle;
                self.push_notice(NoticeLevel::Error, GENERATION_FAILED_NOTICE);
            }
            Message::ShowDishDetails(dish) => {
                if matches!(self.view, ViewState::Results(_)) {
                    self.modal = ModalState::Open(dish);
                }
            }
            Message::CloseModal => {
                self.modal = ModalState::Closed;
            }
            Message::ClearNotice => {
                self.notices.clear();
            }
            Message::None | Message::Submit => {}
        }
    }

    fn push_notice(&mut self, level: NoticeLevel, message: &str) {
        self.notices.push(Notice {
            level,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::menu::Ingredient;
    use crate::client::services::menu_service::MenuError;

    fn sample_menu() -> Menu {
        Menu {
            title: "Bữa Tối Ấm Cúng".to_string(),
            dishes: vec![Dish {
                name: "Gà Kho Gừng".to_string(),
                description: "Đậm đà, thơm lừng mùi gừng".to_string(),
                calories: Some("320 kcal".to_string()),
                ingredients: vec![
                    Ingredient { item: "Gà".to_string(), amount: "500g".to_string() },
                    Ingredient { item: "Gừng".to_string(), amount: "50g".to_string() },
                    Ingredient { item: "Nước mắm".to_string(), amount: "2 muỗng".to_string() },
                    Ingredient { item: "Đường".to_string(), amount: "1 muỗng".to_string() },
                ],
                steps: vec![
                    "Bước 1: Ướp gà với gừng".to_string(),
                    "Bước 2: Kho lửa nhỏ 30 phút".to_string(),
                ],
            }],
        }
    }

    fn warning_count(state: &MenuAppState) -> usize {
        state.notices.iter().filter(|n| n.level == NoticeLevel::Warning).count()
    }

    fn error_count(state: &MenuAppState) -> usize {
        state.notices.iter().filter(|n| n.level == NoticeLevel::Error).count()
    }

    #[test]
    fn blank_submit_warns_and_stays_idle() {
        let mut state = MenuAppState::default();
        state.input = "   \t ".to_string();

        assert_eq!(state.submit(), None);
        assert_eq!(state.view, ViewState::Idle);
        assert_eq!(warning_count(&state), 1);
    }

    #[test]
    fn blank_submit_keeps_existing_results() {
        let mut state = MenuAppState::default();
        state.view = ViewState::Results(sample_menu());
        state.input = String::new();

        assert_eq!(state.submit(), None);
        assert_eq!(state.view, ViewState::Results(sample_menu()));
        assert_eq!(warning_count(&state), 1);
    }

    #[test]
    fn submit_trims_and_enters_loading() {
        let mut state = MenuAppState::default();
        state.input = "  gà kho gừng  ".to_string();

        assert_eq!(state.submit(), Some("gà kho gừng".to_string()));
        assert_eq!(state.view, ViewState::Loading);
        assert!(state.notices.is_empty());
    }

    #[test]
    fn submit_clears_previous_results() {
        let mut state = MenuAppState::default();
        state.view = ViewState::Results(sample_menu());
        state.input = "bún chả".to_string();

        assert!(state.submit().is_some());
        assert_eq!(state.view, ViewState::Loading);
    }

    #[test]
    fn submit_is_inert_while_loading() {
        let mut state = MenuAppState::default();
        state.input = "bún bò".to_string();
        assert!(state.submit().is_some());

        // second submit while the first request is still in flight
        assert_eq!(state.submit(), None);
        assert_eq!(state.view, ViewState::Loading);
        assert!(state.notices.is_empty());
    }

    #[test]
    fn successful_generation_shows_results() {
        let mut state = MenuAppState::default();
        state.input = "gà kho gừng".to_string();
        assert!(state.submit().is_some());

        state.update(Message::MenuGenerated(Ok(sample_menu())));
        assert_eq!(state.view, ViewState::Results(sample_menu()));
        assert_eq!(state.notices.last().map(|n| n.level.clone()), Some(NoticeLevel::Success));
    }

    #[test]
    fn failed_generation_returns_to_idle() {
        let mut state = MenuAppState::default();
        state.view = ViewState::Results(sample_menu());
        state.input = "lẩu thái".to_string();
        assert!(state.submit().is_some());

        state.update(Message::MenuGenerated(Err(MenuError::Network("timeout".to_string()))));
        assert_eq!(state.view, ViewState::Idle);
        assert_eq!(error_count(&state), 1);
    }

    #[test]
    fn each_failed_attempt_adds_one_error_notice() {
        let mut state = MenuAppState::default();

        for attempt in 1..=2 {
            state.input = "cơm tấm".to_string();
            assert!(state.submit().is_some());
            state.update(Message::MenuGenerated(Err(MenuError::Format(
                "missing `result` field".to_string(),
            ))));
            assert_eq!(error_count(&state), attempt);
        }
    }

    #[test]
    fn network_and_format_failures_surface_identically() {
        let mut state = MenuAppState::default();
        state.update(Message::MenuGenerated(Err(MenuError::Network("refused".to_string()))));
        state.update(Message::MenuGenerated(Err(MenuError::Format("not json".to_string()))));

        let messages: Vec<&str> = state.notices.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec![GENERATION_FAILED_NOTICE, GENERATION_FAILED_NOTICE]);
    }

    #[test]
    fn modal_round_trip_preserves_results() {
        let menu = sample_menu();
        let dish = menu.dishes[0].clone();
        let mut state = MenuAppState::default();
        state.view = ViewState::Results(menu.clone());

        state.update(Message::ShowDishDetails(dish.clone()));
        assert_eq!(state.modal, ModalState::Open(dish));
        assert_eq!(state.view, ViewState::Results(menu.clone()));

        state.update(Message::CloseModal);
        assert_eq!(state.modal, ModalState::Closed);
        assert_eq!(state.view, ViewState::Results(menu));
    }

    #[test]
    fn dish_details_are_ignored_outside_results() {
        let mut state = MenuAppState::default();
        state.update(Message::ShowDishDetails(sample_menu().dishes[0].clone()));
        assert_eq!(state.modal, ModalState::Closed);
    }

    #[test]
    fn input_is_capped_at_the_soft_limit() {
        let mut state = MenuAppState::default();
        let long = "ă".repeat(INPUT_MAX_CHARS + 30);

        state.update(Message::InputChanged(long));
        assert_eq!(state.input.chars().count(), INPUT_MAX_CHARS);

        state.update(Message::InputChanged("phở bò".to_string()));
        assert_eq!(state.input, "phở bò");
    }
}
