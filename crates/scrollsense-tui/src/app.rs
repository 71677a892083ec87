use std::cell::Cell;
use std::rc::Rc;

use scrollsense_core::{
    AppConfig, HeadlessHost, HeaderBehavior, HeaderSurface, PresentationHint,
    ScrollHeaderController, ScrollState,
};

use crate::input::Action;
use crate::scroll::PageScroller;
use crate::theme::Theme;

/// Where the header is drawn this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPlacement {
    /// In document flow, `top` rows relative to the viewport (negative once scrolled past)
    Flow { top: i32 },
    /// Pinned to the viewport top
    Pinned,
    /// Pinned but translated out of view
    Hidden,
}

/// Last change reported by the header controller
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeLog {
    pub count: usize,
    pub last: Option<(bool, bool)>,
}

pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub controller: ScrollHeaderController<HeadlessHost>,
    pub scroller: PageScroller,
    pub lines: Vec<String>,
    /// Rows available to the page, excluding the status bar
    pub viewport_height: u16,
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// Offset last handed to the controller
    delivered_offset: u16,
    changes: Rc<Cell<ChangeLog>>,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme) -> Self {
        let host = HeadlessHost::new(config.demo.header_height as f64);
        let mut controller = ScrollHeaderController::new(host);

        let changes = Rc::new(Cell::new(ChangeLog::default()));
        let sink = changes.clone();
        controller.on_scroll_state_change(move |sticky, hidden| {
            let log = sink.get();
            sink.set(ChangeLog {
                count: log.count + 1,
                last: Some((sticky, hidden)),
            });
            tracing::debug!(sticky, hidden, "Header state changed");
        });
        controller.initialize(config.header.clone());

        let scroller = PageScroller::new(config.demo.scroll.clone());
        let lines = demo_page(config.demo.page_lines);

        Self {
            config,
            theme,
            controller,
            scroller,
            lines,
            viewport_height: 0,
            status_message: None,
            should_quit: false,
            delivered_offset: 0,
            changes,
        }
    }

    pub fn header_height(&self) -> u16 {
        self.config.demo.header_height
    }

    pub fn state(&self) -> ScrollState {
        self.controller.state()
    }

    pub fn behavior(&self) -> HeaderBehavior {
        self.controller.config().behavior
    }

    pub fn change_log(&self) -> ChangeLog {
        self.changes.get()
    }

    pub fn offset(&self) -> u16 {
        self.scroller.offset()
    }

    pub fn max_scroll(&self) -> u16 {
        let document = self.header_height() as usize + self.lines.len();
        document
            .saturating_sub(self.viewport_height as usize)
            .min(u16::MAX as usize) as u16
    }

    /// Keep animating while the page glides or a transition is pending
    pub fn needs_fast_update(&self) -> bool {
        self.scroller.needs_update() || self.controller.has_pending_transition()
    }

    pub fn handle_action(&mut self, action: Action) {
        let max = self.max_scroll();
        let half = (self.viewport_height / 2).max(1) as i32;
        match action {
            Action::Quit => self.should_quit = true,
            Action::LineDown => self.scroller.step(true, max),
            Action::LineUp => self.scroller.step(false, max),
            Action::HalfPageDown => self.scroller.scroll_by(half, max),
            Action::HalfPageUp => self.scroller.scroll_by(-half, max),
            Action::PageDown => self.scroller.scroll_by(self.viewport_height as i32, max),
            Action::PageUp => self.scroller.scroll_by(-(self.viewport_height as i32), max),
            Action::Top => self.scroller.scroll_to(0, max),
            Action::Bottom => self.scroller.scroll_to(max, max),
            Action::SetBehavior(behavior) => self.set_behavior(behavior),
            Action::Reset => {
                self.controller.reset();
                self.status_message = Some(" Header reset".to_string());
            }
            Action::None => {}
        }
    }

    /// Re-mount the header with a different behavior
    pub fn set_behavior(&mut self, behavior: HeaderBehavior) {
        let config = self.controller.config().with_behavior(behavior);
        self.controller.initialize(config);
        self.status_message = Some(format!(" Behavior: {}", behavior));
    }

    /// Advance one frame: move the page, deliver the new offset, fire timers
    pub fn update(&mut self) {
        let offset = self.scroller.update(self.max_scroll());
        if offset != self.delivered_offset {
            self.delivered_offset = offset;
            self.status_message = None;
            self.controller.host_mut().set_offset(offset as f64);
            self.controller.on_scroll_offset_changed(offset as f64);
        }
        self.controller.tick();
    }

    pub fn header_placement(&self) -> HeaderPlacement {
        let host = self.controller.host();
        let pinned = host.has_hint(PresentationHint::Sticky)
            || host.has_hint(PresentationHint::AlwaysFixed);
        if !pinned {
            HeaderPlacement::Flow {
                top: -(self.offset() as i32),
            }
        } else if host.translate_y() < 0.0 {
            HeaderPlacement::Hidden
        } else {
            HeaderPlacement::Pinned
        }
    }

    /// Document row where page content begins: the header itself while in
    /// flow, the reserved space while pinned
    pub fn content_start(&self) -> u16 {
        match self.header_placement() {
            HeaderPlacement::Flow { .. } => self.header_height(),
            _ => self.controller.host().reserved_top().round() as u16,
        }
    }

    pub fn transition_settled(&self) -> bool {
        self.controller
            .host()
            .has_hint(PresentationHint::StickyTransition)
    }
}

const FILLER: [&str; 4] = [
    "Scroll down past the header and it leaves the flow, pinned to the top.",
    "Keep scrolling down and it slides out of view; scroll up to bring it back.",
    "Near the top of the page it returns to its original place.",
    "Press 1, 2 or 3 to switch behavior, r to reset the header.",
];

fn demo_page(lines: usize) -> Vec<String> {
    (0..lines)
        .map(|i| match i % 12 {
            0 => format!("## Section {}", i / 12 + 1),
            1 | 11 => String::new(),
            n => format!("  {:>4}  {}", i, FILLER[n % FILLER.len()]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollsense_core::ScrollConfig;

    fn app(behavior: HeaderBehavior) -> App {
        let mut config = AppConfig::default();
        config.header.behavior = behavior;
        config.header.hide_threshold = Some(10.0);
        config.header.transition_duration_ms = 0;
        config.demo.scroll = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut app = App::new(config, Theme::default());
        app.viewport_height = 20;
        app
    }

    fn scroll_to(app: &mut App, offset: u16) {
        let max = app.max_scroll();
        app.scroller.scroll_to(offset, max);
        app.controller.host_mut().set_offset(offset as f64);
        app.controller.on_scroll_offset_changed(offset as f64);
    }

    #[test]
    fn test_header_flows_then_pins_then_hides() {
        let mut app = app(HeaderBehavior::HideOnScroll);
        assert_eq!(app.header_placement(), HeaderPlacement::Flow { top: 0 });

        scroll_to(&mut app, 5);
        assert_eq!(app.header_placement(), HeaderPlacement::Flow { top: -5 });

        scroll_to(&mut app, 30);
        assert_eq!(app.header_placement(), HeaderPlacement::Hidden);
        assert_eq!(app.content_start(), app.header_height());

        scroll_to(&mut app, 25);
        assert_eq!(app.header_placement(), HeaderPlacement::Pinned);

        scroll_to(&mut app, 0);
        assert_eq!(app.header_placement(), HeaderPlacement::Flow { top: 0 });
        assert_eq!(app.change_log().count, 3);
        assert_eq!(app.change_log().last, Some((false, false)));
    }

    #[test]
    fn test_always_fixed_pins_from_start() {
        let app = app(HeaderBehavior::AlwaysFixed);
        assert_eq!(app.header_placement(), HeaderPlacement::Pinned);
        assert_eq!(app.content_start(), app.header_height());
        assert_eq!(app.change_log().last, Some((true, false)));
    }

    #[test]
    fn test_switching_behavior_remounts() {
        let mut app = app(HeaderBehavior::HideOnScroll);
        scroll_to(&mut app, 30);
        app.handle_action(Action::SetBehavior(HeaderBehavior::AlwaysTop));

        assert_eq!(app.behavior(), HeaderBehavior::AlwaysTop);
        assert_eq!(app.state(), ScrollState::default());
        assert_eq!(app.header_placement(), HeaderPlacement::Flow { top: -30 });
    }

    #[test]
    fn test_update_delivers_offsets() {
        let mut app = app(HeaderBehavior::HideOnScroll);
        app.handle_action(Action::PageDown);
        app.update();

        assert_eq!(app.offset(), 20);
        assert!(app.state().is_sticky);
        assert_eq!(app.controller.last_offset(), 20.0);
    }

    #[test]
    fn test_max_scroll() {
        let app = app(HeaderBehavior::HideOnScroll);
        let document = app.header_height() as usize + app.lines.len();
        assert_eq!(app.max_scroll() as usize, document - 20);
    }
}
