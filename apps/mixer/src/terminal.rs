use std::io::{self, Write};

use client_core::{RenderSurface, Selector, ViewState};

pub struct TerminalSurface<W: Write + Send> {
    out: W,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write + Send> RenderSurface for TerminalSurface<W> {
    fn render(&mut self, view: &ViewState) {
        if let Err(error) = self.out.write_all(render_view(view).as_bytes()) {
            tracing::warn!(%error, "failed to draw view");
        }
        let _ = self.out.flush();
    }

    fn suppress_default(&mut self, selector: Selector) {
        tracing::debug!(selector = selector.as_str(), "default action suppressed");
    }
}

pub fn render_view(view: &ViewState) -> String {
    let mut out = format!("\nCurrent Color {}\n", view.current.css());
    for slider in &view.sliders {
        out.push_str(&format!("  {}\n", slider.label));
    }
    if view.saved.is_empty() {
        out.push_str("Saved: none\n");
    } else {
        out.push_str("Saved:\n");
        for saved in &view.saved {
            out.push_str(&format!("  [{}] {}\n", saved.id, saved.color.css()));
        }
    }
    if !view.status.is_empty() {
        out.push_str(&format!("> {}\n", view.status));
    }
    out
}
