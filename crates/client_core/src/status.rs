use std::time::Duration;

use shared::protocol::{ColorResponse, RequestCategory, STATUS_CREATED, STATUS_ERROR, STATUS_OK};

pub const STATUS_CLEAR_AFTER: Duration = Duration::from_millis(2000);

pub const COLOR_ADDED: &str = "Color was added";
pub const COLOR_REMOVED: &str = "Color was succesfully removed";
pub const REQUEST_FAILED: &str = "Ooops!";

/// Text shown for a response. Errors always get the same text.
pub fn status_text(response: &ColorResponse) -> &'static str {
    match (response.category, response.status_text.as_str()) {
        (_, STATUS_ERROR) => REQUEST_FAILED,
        (RequestCategory::Colors, STATUS_CREATED) => COLOR_ADDED,
        (RequestCategory::Delete, STATUS_OK) => COLOR_REMOVED,
        _ => "",
    }
}

/// A one-shot clear that only applies while its generation is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTimer {
    pub generation: u64,
    pub after: Duration,
}

#[derive(Debug, Clone)]
pub struct StatusBoard {
    text: String,
    generation: u64,
    clear_after: Duration,
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new(STATUS_CLEAR_AFTER)
    }
}

impl StatusBoard {
    pub fn new(clear_after: Duration) -> Self {
        Self {
            text: String::new(),
            generation: 0,
            clear_after,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn show(&mut self, text: impl Into<String>) -> StatusTimer {
        self.text = text.into();
        self.generation += 1;
        StatusTimer {
            generation: self.generation,
            after: self.clear_after,
        }
    }

    /// Returns whether the text was cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.text.clear();
        true
    }
}
