//! Smooth scrolling for the demo page
//!
//! - `easing` - easing curves mapping progress [0, 1] to [0, 1]
//! - `animation` - page offset animator fed by key presses
//!
//! The animator owns the page offset; every frame the app reads it back and
//! hands it to the header controller as the viewport scroll position.

pub mod animation;
pub mod easing;

pub use animation::PageScroller;
pub use easing::EasingTypeExt;
pub use scrollsense_core::{EasingType, ScrollConfig};
