//! Raw surface events to mixer intents.

use shared::domain::{Channel, ChannelValue, ColorId};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    Slider,
    Save,
    Delete,
    Cancel,
}

impl Selector {
    pub const ALL: [Selector; 4] = [
        Selector::Slider,
        Selector::Save,
        Selector::Delete,
        Selector::Cancel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Selector::Slider => ".slider",
            Selector::Save => ".save",
            Selector::Delete => ".delete",
            Selector::Cancel => ".cancel",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Selector::ALL
            .into_iter()
            .find(|selector| selector.as_str() == raw.trim())
    }
}

/// An event as the rendering surface reports it, keyed by selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    pub selector: String,
    /// Which labeled slider the event came from.
    pub scope: Option<Channel>,
    pub value: Option<String>,
    /// Text of the `data-color-id` attribute.
    pub color_id: Option<String>,
}

impl UiEvent {
    pub fn new(selector: Selector) -> Self {
        Self {
            selector: selector.as_str().to_string(),
            scope: None,
            value: None,
            color_id: None,
        }
    }

    pub fn slider(channel: Channel, value: impl Into<String>) -> Self {
        Self {
            scope: Some(channel),
            value: Some(value.into()),
            ..Self::new(Selector::Slider)
        }
    }

    pub fn save() -> Self {
        Self::new(Selector::Save)
    }

    pub fn delete(color_id: impl Into<String>) -> Self {
        Self {
            color_id: Some(color_id.into()),
            ..Self::new(Selector::Delete)
        }
    }

    pub fn cancel() -> Self {
        Self::new(Selector::Cancel)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    ChannelInput {
        channel: Channel,
        value: ChannelValue,
    },
    Save,
    Delete(ColorId),
    Cancel,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntentError {
    #[error("no handler for selector '{0}'")]
    UnknownSelector(String),
    #[error("slider event is not scoped to a channel")]
    MissingScope,
    #[error("slider event carries no value")]
    MissingValue,
    #[error("slider value '{0}' is not an integer in 0..=255")]
    InvalidValue(String),
    #[error("delete event carries no data-color-id")]
    MissingColorId,
    #[error("data-color-id '{0}' is not a valid color id")]
    InvalidColorId(String),
}

impl Intent {
    pub fn from_ui_event(event: &UiEvent) -> Result<Self, IntentError> {
        let selector = Selector::parse(&event.selector)
            .ok_or_else(|| IntentError::UnknownSelector(event.selector.clone()))?;

        match selector {
            Selector::Slider => {
                let channel = event.scope.ok_or(IntentError::MissingScope)?;
                let raw = event.value.as_deref().ok_or(IntentError::MissingValue)?;
                let value = raw
                    .trim()
                    .parse::<ChannelValue>()
                    .map_err(|_| IntentError::InvalidValue(raw.to_string()))?;
                Ok(Intent::ChannelInput { channel, value })
            }
            Selector::Save => Ok(Intent::Save),
            Selector::Delete => {
                let raw = event
                    .color_id
                    .as_deref()
                    .ok_or(IntentError::MissingColorId)?;
                let id = raw
                    .parse::<ColorId>()
                    .map_err(|_| IntentError::InvalidColorId(raw.to_string()))?;
                Ok(Intent::Delete(id))
            }
            Selector::Cancel => Ok(Intent::Cancel),
        }
    }

    /// Delete and cancel are links; the surface must not follow them.
    pub fn suppresses_default(&self) -> Option<Selector> {
        match self {
            Intent::Delete(_) => Some(Selector::Delete),
            Intent::Cancel => Some(Selector::Cancel),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/intent_tests.rs"]
mod tests;
