//! Color composition: slider, click and response events in; requests,
//! timers and view snapshots out. One event is handled at a time and every
//! output reflects the inputs seen so far, in delivery order.

use std::collections::HashMap;

use shared::{
    domain::{Channel, ChannelValue, Color, ColorId, SavedColor, SliderProps},
    protocol::{ColorRequest, ColorResponse, RequestCategory, RequestId, STATUS_CREATED},
};
use tracing::{debug, info, warn};

use crate::{
    config::ClientSettings,
    intent::{Intent, Selector},
    slider::LabeledSlider,
    status::{status_text, StatusBoard, StatusTimer, REQUEST_FAILED},
};

#[derive(Debug, Clone, PartialEq)]
pub enum ReactorEvent {
    Intent(Intent),
    Response(ColorResponse),
    StatusExpired(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Request(ColorRequest),
    ScheduleStatusClear(StatusTimer),
    SuppressDefault(Selector),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderView {
    pub props: SliderProps,
    pub value: ChannelValue,
    pub label: String,
}

/// Everything the rendering surface needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub current: Color,
    pub sliders: Vec<SliderView>,
    pub saved: Vec<SavedColor>,
    pub status: String,
}

pub struct ColorReactor {
    base_url: String,
    sliders: [LabeledSlider; 3],
    current: Color,
    saved: Vec<SavedColor>,
    pending_deletes: HashMap<RequestId, ColorId>,
    status: StatusBoard,
    next_request: u64,
}

impl ColorReactor {
    pub fn new(settings: &ClientSettings) -> Self {
        Self {
            base_url: settings.server_url.clone(),
            sliders: Channel::ALL.map(LabeledSlider::new),
            current: Color::BLACK,
            saved: Vec::new(),
            pending_deletes: HashMap::new(),
            status: StatusBoard::new(settings.status_clear_after()),
            next_request: 0,
        }
    }

    /// Effects to run once, before any event: the initial list fetch.
    pub fn start(&mut self) -> Vec<Effect> {
        let request = ColorRequest::list(self.allocate_request_id(), &self.base_url);
        info!(url = %request.url, "loading saved colors");
        vec![Effect::Request(request)]
    }

    pub fn handle(&mut self, event: ReactorEvent) -> Vec<Effect> {
        match event {
            ReactorEvent::Intent(intent) => self.handle_intent(intent),
            ReactorEvent::Response(response) => self.handle_response(response),
            ReactorEvent::StatusExpired(generation) => {
                if self.status.expire(generation) {
                    debug!(generation, "status message cleared");
                }
                Vec::new()
            }
        }
    }

    pub fn current_color(&self) -> Color {
        self.current
    }

    pub fn saved_colors(&self) -> &[SavedColor] {
        &self.saved
    }

    pub fn status_message(&self) -> &str {
        self.status.text()
    }

    pub fn pending_delete_count(&self) -> usize {
        self.pending_deletes.len()
    }

    pub fn view(&self) -> ViewState {
        ViewState {
            current: self.current,
            sliders: self
                .sliders
                .iter()
                .map(|slider| SliderView {
                    props: slider.props(),
                    value: slider.value(),
                    label: slider.label(),
                })
                .collect(),
            saved: self.saved.clone(),
            status: self.status.text().to_string(),
        }
    }

    fn handle_intent(&mut self, intent: Intent) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(selector) = intent.suppresses_default() {
            effects.push(Effect::SuppressDefault(selector));
        }

        match intent {
            Intent::ChannelInput { channel, value } => {
                self.slider_mut(channel).input(value);
                self.recompute_color();
            }
            Intent::Save => {
                // The request carries the color as it is at this instant.
                let color = self.current;
                let request =
                    ColorRequest::create(self.allocate_request_id(), &self.base_url, color);
                info!(request = %request.id, ?color, "saving color");
                effects.push(Effect::Request(request));
            }
            Intent::Delete(color_id) => {
                let request =
                    ColorRequest::delete(self.allocate_request_id(), &self.base_url, color_id);
                info!(request = %request.id, %color_id, "deleting color");
                self.pending_deletes.insert(request.id, color_id);
                effects.push(Effect::Request(request));
            }
            Intent::Cancel => self.reset_sliders(),
        }

        effects
    }

    fn handle_response(&mut self, response: ColorResponse) -> Vec<Effect> {
        let text = match response.category {
            RequestCategory::Colors => self.apply_colors_response(&response),
            RequestCategory::Delete => {
                self.apply_delete_response(&response);
                status_text(&response)
            }
        };

        let timer = self.status.show(text);
        vec![Effect::ScheduleStatusClear(timer)]
    }

    /// Returns the status text to show. A body that does not decode counts
    /// as a failed request: nothing is appended and the sliders are kept.
    fn apply_colors_response(&mut self, response: &ColorResponse) -> &'static str {
        if response.is_error() {
            warn!(request = %response.request, "color request failed");
            return status_text(response);
        }

        let colors = match response.saved_colors() {
            Ok(colors) => colors,
            Err(error) => {
                warn!(request = %response.request, %error, "ignoring undecodable colors body");
                return REQUEST_FAILED;
            }
        };

        debug!(request = %response.request, count = colors.len(), "appending colors");
        self.saved.extend(colors);
        if response.status_text == STATUS_CREATED {
            self.reset_sliders();
        }
        status_text(response)
    }

    fn apply_delete_response(&mut self, response: &ColorResponse) {
        let Some(color_id) = self.pending_deletes.remove(&response.request) else {
            warn!(request = %response.request, "delete response without a pending delete");
            return;
        };

        if response.is_error() {
            warn!(request = %response.request, %color_id, "delete failed; keeping color");
            return;
        }

        self.saved.retain(|saved| saved.id != color_id);
        info!(%color_id, remaining = self.saved.len(), "color removed");
    }

    fn reset_sliders(&mut self) {
        for slider in &mut self.sliders {
            slider.reset();
        }
        self.recompute_color();
    }

    fn recompute_color(&mut self) {
        self.current = self
            .sliders
            .iter()
            .fold(Color::BLACK, |color, slider| {
                color.with(slider.channel(), slider.value())
            });
    }

    fn slider_mut(&mut self, channel: Channel) -> &mut LabeledSlider {
        let index = match channel {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        };
        &mut self.sliders[index]
    }

    fn allocate_request_id(&mut self) -> RequestId {
        self.next_request += 1;
        RequestId(self.next_request)
    }
}

#[cfg(test)]
#[path = "tests/reactor_tests.rs"]
mod tests;
