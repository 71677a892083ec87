use std::time::{Duration, Instant};

use scrollsense_core::{EasingType, ScrollConfig};

use super::easing::EasingTypeExt;

#[derive(Debug, Clone)]
struct Glide {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

impl Glide {
    fn position_at(&self, now: Instant) -> Option<u16> {
        let elapsed = now.saturating_duration_since(self.start);
        if self.duration.is_zero() || elapsed >= self.duration {
            return None;
        }
        let t = self.easing.apply(elapsed.as_secs_f64() / self.duration.as_secs_f64());
        let from = self.from as f64;
        Some((from + (self.to as f64 - from) * t).round() as u16)
    }
}

/// Page scroll offset with optional easing between targets
///
/// Deltas requested between frames are batched and applied on the next
/// `update`, so holding a key produces one continuous glide.
#[derive(Debug, Clone)]
pub struct PageScroller {
    config: ScrollConfig,
    offset: u16,
    glide: Option<Glide>,
    pending_delta: i32,
}

impl PageScroller {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            offset: 0,
            glide: None,
            pending_delta: 0,
        }
    }

    fn is_smooth(&self) -> bool {
        self.config.smooth_enabled && self.config.animation_duration_ms > 0
    }

    /// Frame interval while a glide is running
    pub fn frame_interval(&self) -> Duration {
        match self.config.animation_fps {
            0 => Duration::from_millis(16),
            fps => Duration::from_millis(1000 / fps as u64),
        }
    }

    #[inline]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Where the page ends up once the current glide finishes
    pub fn target(&self) -> u16 {
        self.glide.as_ref().map(|g| g.to).unwrap_or(self.offset)
    }

    #[inline]
    pub fn needs_update(&self) -> bool {
        self.glide.is_some() || self.pending_delta != 0
    }

    /// Scroll by `lines` (positive = down)
    pub fn scroll_by(&mut self, lines: i32, max: u16) {
        if self.is_smooth() {
            self.pending_delta += lines;
        } else {
            self.offset = clamp_offset(self.offset as i32 + lines, max);
            self.glide = None;
        }
    }

    /// One key-press step; smooth mode always moves a single line
    pub fn step(&mut self, down: bool, max: u16) {
        let lines = if self.is_smooth() {
            1
        } else {
            self.config.scroll_lines.max(1) as i32
        };
        self.scroll_by(if down { lines } else { -lines }, max);
    }

    pub fn scroll_to(&mut self, target: u16, max: u16) {
        let target = target.min(max);
        self.pending_delta = 0;
        if !self.is_smooth() || target == self.offset {
            self.offset = target;
            self.glide = None;
            return;
        }
        self.start_glide(target, Instant::now());
    }

    /// Advance the glide and return the current offset
    pub fn update(&mut self, max: u16) -> u16 {
        self.update_at(max, Instant::now())
    }

    pub fn update_at(&mut self, max: u16, now: Instant) -> u16 {
        if self.pending_delta != 0 {
            let target = clamp_offset(self.target() as i32 + self.pending_delta, max);
            self.pending_delta = 0;
            if target != self.offset {
                self.start_glide(target, now);
            }
        }

        if let Some(glide) = &self.glide {
            match glide.position_at(now) {
                Some(pos) => self.offset = pos.min(max),
                None => {
                    self.offset = glide.to.min(max);
                    self.glide = None;
                }
            }
        }

        self.offset
    }

    fn start_glide(&mut self, to: u16, now: Instant) {
        self.glide = Some(Glide {
            start: now,
            from: self.offset,
            to,
            duration: Duration::from_millis(self.config.animation_duration_ms),
            easing: self.config.easing,
        });
    }
}

fn clamp_offset(value: i32, max: u16) -> u16 {
    value.clamp(0, max as i32) as u16
}
