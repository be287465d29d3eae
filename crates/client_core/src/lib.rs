//! Client side of the color mixer: three sliders compose a color which can
//! be saved to and removed from the `/colors` backend.
//!
//! [`reactor::ColorReactor`] holds all of the composition rules and is
//! synchronous; [`driver::MixerDriver`] runs it on tokio against a
//! [`transport::ColorTransport`] and a [`surface::RenderSurface`].

pub mod config;
pub mod driver;
pub mod intent;
pub mod reactor;
pub mod slider;
pub mod status;
pub mod surface;
pub mod transport;

pub use config::{load_settings, load_settings_from, ClientSettings};
pub use driver::MixerDriver;
pub use intent::{Intent, IntentError, Selector, UiEvent};
pub use reactor::{ColorReactor, Effect, ReactorEvent, SliderView, ViewState};
pub use surface::{RecordingSurface, RenderSurface, WatchSurface};
pub use transport::{fetch_or_sentinel, ColorTransport, HttpTransport};
