//! Single-context event loop around [`ColorReactor`].
//!
//! Requests and status timers run as spawned tasks whose results come back
//! through one internal queue, so the reactor still sees a single ordered
//! stream of events.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    config::ClientSettings,
    intent::{Intent, UiEvent},
    reactor::{ColorReactor, Effect, ReactorEvent},
    surface::RenderSurface,
    transport::{fetch_or_sentinel, ColorTransport},
};

pub struct MixerDriver<T, S> {
    reactor: ColorReactor,
    transport: Arc<T>,
    surface: S,
}

impl<T, S> MixerDriver<T, S>
where
    T: ColorTransport + 'static,
    S: RenderSurface,
{
    pub fn new(settings: &ClientSettings, transport: Arc<T>, surface: S) -> Self {
        Self {
            reactor: ColorReactor::new(settings),
            transport,
            surface,
        }
    }

    pub fn reactor(&self) -> &ColorReactor {
        &self.reactor
    }

    /// Runs until `ui_events` closes and every request issued so far has
    /// answered, then hands the surface back. Pending status clears are
    /// not awaited.
    pub async fn run(mut self, mut ui_events: mpsc::Receiver<UiEvent>) -> S {
        let (internal_tx, mut internal_rx) = mpsc::unbounded_channel::<ReactorEvent>();
        let mut ui_open = true;
        let mut in_flight = 0usize;

        let effects = self.reactor.start();
        in_flight += self.apply(effects, &internal_tx);
        self.surface.render(&self.reactor.view());

        loop {
            if !ui_open && in_flight == 0 {
                break;
            }

            let event = tokio::select! {
                biased;
                Some(event) = internal_rx.recv() => event,
                ui = ui_events.recv(), if ui_open => {
                    let Some(ui) = ui else {
                        info!(in_flight, "ui event source closed; draining requests");
                        ui_open = false;
                        continue;
                    };
                    match Intent::from_ui_event(&ui) {
                        Ok(intent) => ReactorEvent::Intent(intent),
                        Err(error) => {
                            warn!(selector = %ui.selector, %error, "dropping ui event");
                            continue;
                        }
                    }
                }
            };

            if matches!(event, ReactorEvent::Response(_)) {
                in_flight = in_flight.saturating_sub(1);
            }
            let effects = self.reactor.handle(event);
            in_flight += self.apply(effects, &internal_tx);
            self.surface.render(&self.reactor.view());
        }

        info!("mixer stopped");
        self.surface
    }

    /// Starts every effect and returns how many requests were spawned.
    fn apply(
        &mut self,
        effects: Vec<Effect>,
        internal_tx: &mpsc::UnboundedSender<ReactorEvent>,
    ) -> usize {
        let mut requests = 0;
        for effect in effects {
            match effect {
                Effect::Request(request) => {
                    requests += 1;
                    let transport = Arc::clone(&self.transport);
                    let tx = internal_tx.clone();
                    tokio::spawn(async move {
                        let response = fetch_or_sentinel(transport.as_ref(), &request).await;
                        if tx.send(ReactorEvent::Response(response)).is_err() {
                            debug!(request = %request.id, "mixer stopped before response arrived");
                        }
                    });
                }
                Effect::ScheduleStatusClear(timer) => {
                    let tx = internal_tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(timer.after).await;
                        let _ = tx.send(ReactorEvent::StatusExpired(timer.generation));
                    });
                }
                Effect::SuppressDefault(selector) => self.surface.suppress_default(selector),
            }
        }
        requests
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
