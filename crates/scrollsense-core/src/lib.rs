pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod presentation;
pub mod state;
pub mod transition;

pub use config::{AppConfig, BoxShadowPreset, EasingType, HeaderBehavior, HeaderConfig, ScrollConfig};
pub use controller::ScrollHeaderController;
pub use error::{Error, Result};
pub use host::{HeadlessHost, HeaderHost, HeaderSurface, LayoutReservation, ScrollSource, SubscriptionId};
pub use presentation::{HeaderAttributes, PresentationHint};
pub use state::{ScrollDirection, ScrollState};
