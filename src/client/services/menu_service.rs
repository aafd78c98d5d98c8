use serde::{Deserialize, Serialize};

use crate::client::models::menu::Menu;

/// Client for the remote menu-generation endpoint. One POST per call, no
/// retries, transport-default timeouts.
#[derive(Debug)]
pub struct MenuService {
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MenuError {
    /// The HTTP exchange did not complete (connect/timeout/non-2xx).
    #[error("request failed: {0}")]
    Network(String),
    /// The exchange completed but the body did not carry a menu payload.
    #[error("unexpected response format: {0}")]
    Format(String),
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

/// The endpoint wraps its output in a JSON object whose `result` field is a
/// JSON-encoded string holding the actual menu.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    result: Option<String>,
}

impl MenuService {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    pub async fn generate(&self, user_request: &str) -> Result<Menu, MenuError> {
        let prompt = build_prompt(user_request);
        log::info!("requesting menu for \"{}\"", user_request);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GenerateRequest { prompt: &prompt })
            .send()
            .await
            .map_err(|e| MenuError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| MenuError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(MenuError::Network(format!("HTTP {}", status)));
        }

        parse_menu_payload(&body)
    }
}

fn build_prompt(user_request: &str) -> String {
    format!(
        r#"Bạn là bếp trưởng 5 sao. Hãy gợi ý thực đơn hấp dẫn và hướng dẫn nấu dựa trên yêu cầu: "{}".

Yêu cầu output: JSON hợp lệ. Ngôn ngữ: Tiếng Việt thân mật, cảm xúc.
Cấu trúc:
{{
  "title": "Tên thực đơn thật kêu (Ví dụ: Bữa Tối Ấm Cúng)",
  "dishes": [
    {{
      "name": "Tên món",
      "description": "Mô tả ngắn gọn nhưng kích thích vị giác (dưới 20 từ)",
      "calories": "xxx kcal",
      "ingredients": [
        {{ "item": "Tên nguyên liệu", "amount": "Số lượng" }}
      ],
      "steps": [
        "Bước 1: Làm gì...", "Bước 2: Làm gì..."
      ]
    }}
  ]
}}"#,
        user_request
    )
}

fn parse_menu_payload(body: &str) -> Result<Menu, MenuError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| MenuError::Format(e.to_string()))?;

    let payload = response
        .result
        .ok_or_else(|| MenuError::Format("missing `result` field in response".to_string()))?;

    serde_json::from_str(&payload).map_err(|e| MenuError::Format(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap_payload(payload: &str) -> String {
        serde_json::json!({ "result": payload }).to_string()
    }

    #[test]
    fn prompt_embeds_the_request_and_the_expected_shape() {
        let prompt = build_prompt("gà kho gừng");
        assert!(prompt.contains("\"gà kho gừng\""));
        for key in ["title", "dishes", "name", "description", "calories", "ingredients", "steps"] {
            assert!(prompt.contains(key), "prompt is missing the `{}` key", key);
        }
    }

    #[test]
    fn extracts_the_menu_from_the_result_field() {
        let body = wrap_payload(
            r#"{"title": "Bữa Tối Ấm Cúng", "dishes": [{"name": "Gà Kho Gừng"}]}"#,
        );

        let menu = parse_menu_payload(&body).unwrap();
        assert_eq!(menu.title, "Bữa Tối Ấm Cúng");
        assert_eq!(menu.dishes.len(), 1);
        assert_eq!(menu.dishes[0].name, "Gà Kho Gừng");
    }

    #[test]
    fn missing_result_field_is_a_format_error() {
        let err = parse_menu_payload(r#"{"status": "ok"}"#).unwrap_err();
        assert!(matches!(err, MenuError::Format(_)));
    }

    #[test]
    fn non_json_result_is_a_format_error() {
        let body = wrap_payload("xin lỗi, bếp đang bận");
        let err = parse_menu_payload(&body).unwrap_err();
        assert!(matches!(err, MenuError::Format(_)));
    }

    #[test]
    fn non_json_body_is_a_format_error() {
        let err = parse_menu_payload("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, MenuError::Format(_)));
    }

    #[test]
    fn valid_json_with_missing_fields_yields_an_empty_menu() {
        let menu = parse_menu_payload(&wrap_payload("{}")).unwrap();
        assert_eq!(menu.title, "");
        assert!(menu.dishes.is_empty());
    }
}
