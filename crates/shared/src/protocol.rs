use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Color, ColorId, SavedColor};

pub const STATUS_CREATED: &str = "Created";
pub const STATUS_OK: &str = "OK";
pub const STATUS_ERROR: &str = "Error";

pub fn colors_route() -> &'static str {
    "/colors"
}

pub fn color_route(id: ColorId) -> String {
    format!("{}/{id}", colors_route())
}

/// Router pattern matching every [`color_route`].
pub fn color_route_pattern() -> String {
    format!("{}/:color_id", colors_route())
}

/// Tag carried by every outgoing request and echoed by its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestCategory {
    /// Listing and creating colors share one response stream.
    Colors,
    Delete,
}

impl RequestCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestCategory::Colors => "colors",
            RequestCategory::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRequest {
    pub id: RequestId,
    pub url: String,
    pub method: Method,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    pub category: RequestCategory,
}

impl ColorRequest {
    pub fn list(id: RequestId, base_url: &str) -> Self {
        Self {
            id,
            url: format!("{base_url}{}", colors_route()),
            method: Method::Get,
            body: None,
            category: RequestCategory::Colors,
        }
    }

    pub fn create(id: RequestId, base_url: &str, color: Color) -> Self {
        Self {
            id,
            url: format!("{base_url}{}", colors_route()),
            method: Method::Post,
            body: serde_json::to_value(color).ok(),
            category: RequestCategory::Colors,
        }
    }

    pub fn delete(id: RequestId, base_url: &str, color_id: ColorId) -> Self {
        Self {
            id,
            url: format!("{base_url}{}", color_route(color_id)),
            method: Method::Delete,
            body: None,
            category: RequestCategory::Delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorResponse {
    pub request: RequestId,
    pub category: RequestCategory,
    pub body: Value,
    pub status_text: String,
}

impl ColorResponse {
    pub fn new(request: &ColorRequest, body: Value, status_text: impl Into<String>) -> Self {
        Self {
            request: request.id,
            category: request.category,
            body,
            status_text: status_text.into(),
        }
    }

    /// Stand-in for a request that never produced a usable response.
    pub fn error_for(request: &ColorRequest) -> Self {
        Self::new(request, Value::Array(Vec::new()), STATUS_ERROR)
    }

    pub fn is_error(&self) -> bool {
        self.status_text == STATUS_ERROR
    }

    /// Colors carried by a list or create response: an array, a single
    /// record, or nothing at all.
    pub fn saved_colors(&self) -> Result<Vec<SavedColor>, serde_json::Error> {
        match &self.body {
            Value::Null => Ok(Vec::new()),
            Value::Array(_) => serde_json::from_value(self.body.clone()),
            _ => serde_json::from_value(self.body.clone()).map(|color| vec![color]),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::Channel;

    const BASE: &str = "http://localhost:3000";

    #[test]
    fn request_descriptors_use_colors_routes() {
        let create = ColorRequest::create(RequestId(1), BASE, Color::new(1, 2, 3));
        assert_eq!(create.url, "http://localhost:3000/colors");
        assert_eq!(create.method, Method::Post);
        assert_eq!(create.body, Some(json!({"red": 1, "green": 2, "blue": 3})));

        let delete = ColorRequest::delete(RequestId(2), BASE, ColorId(42));
        assert_eq!(delete.url, "http://localhost:3000/colors/42");
        assert_eq!(delete.category.as_str(), "delete");
        assert_eq!(delete.body, None);
    }

    #[test]
    fn color_route_pattern_shares_the_colors_prefix() {
        let concrete = color_route(ColorId(42));
        let pattern = color_route_pattern();
        assert_eq!(pattern, "/colors/:color_id");
        assert_eq!(
            concrete.rsplit_once('/').map(|(prefix, _)| prefix),
            pattern.rsplit_once('/').map(|(prefix, _)| prefix)
        );
    }

    #[test]
    fn saved_colors_accepts_single_record_array_or_nothing() {
        let request = ColorRequest::list(RequestId(3), BASE);
        let single = ColorResponse::new(
            &request,
            json!({"id": 7, "red": 0, "green": 128, "blue": 255}),
            STATUS_CREATED,
        );
        assert_eq!(
            single.saved_colors().expect("single"),
            vec![SavedColor::new(ColorId(7), Color::new(0, 128, 255))]
        );

        let many = ColorResponse::new(
            &request,
            json!([{"id": 1, "red": 1, "green": 1, "blue": 1}, {"id": 2, "red": 2, "green": 2, "blue": 2}]),
            STATUS_OK,
        );
        assert_eq!(many.saved_colors().expect("many").len(), 2);

        let empty = ColorResponse::new(&request, Value::Null, STATUS_OK);
        assert!(empty.saved_colors().expect("empty").is_empty());

        let sentinel = ColorResponse::error_for(&request);
        assert!(sentinel.is_error());
        assert!(sentinel.saved_colors().expect("sentinel").is_empty());
    }

    #[test]
    fn color_channels_are_addressable_by_name() {
        let color = Color::BLACK.with(Channel::Green, 9);
        assert_eq!(color.get(Channel::Green), 9);
        assert_eq!(color.css(), "rgb(0, 9, 0)");
        assert_eq!(Channel::parse(" blue "), Some(Channel::Blue));
        assert_eq!("42".parse::<ColorId>(), Ok(ColorId(42)));
    }
}
