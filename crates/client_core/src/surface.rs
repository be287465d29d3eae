use crate::{intent::Selector, reactor::ViewState};

/// Where view snapshots go. Also the only place default actions of links
/// (delete, cancel) can be suppressed.
pub trait RenderSurface: Send {
    fn render(&mut self, view: &ViewState);
    fn suppress_default(&mut self, selector: Selector);
}

#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub frames: Vec<ViewState>,
    pub suppressed: Vec<Selector>,
}

impl RecordingSurface {
    pub fn last_frame(&self) -> Option<&ViewState> {
        self.frames.last()
    }
}

impl RenderSurface for RecordingSurface {
    fn render(&mut self, view: &ViewState) {
        self.frames.push(view.clone());
    }

    fn suppress_default(&mut self, selector: Selector) {
        self.suppressed.push(selector);
    }
}

/// Publishes the latest view over a watch channel; suppressed defaults are
/// only logged.
#[derive(Debug)]
pub struct WatchSurface {
    tx: tokio::sync::watch::Sender<Option<ViewState>>,
}

impl WatchSurface {
    pub fn new() -> (Self, tokio::sync::watch::Receiver<Option<ViewState>>) {
        let (tx, rx) = tokio::sync::watch::channel(None);
        (Self { tx }, rx)
    }
}

impl RenderSurface for WatchSurface {
    fn render(&mut self, view: &ViewState) {
        self.tx.send_replace(Some(view.clone()));
    }

    fn suppress_default(&mut self, selector: Selector) {
        tracing::debug!(selector = selector.as_str(), "default action suppressed");
    }
}
