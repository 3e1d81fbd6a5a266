use alloc::sync::Arc;

use crate::{OptionsError, TouchEndCause};

/// A callback fired when a permitted touch interaction starts.
///
/// The argument is the initial touch Y coordinate.
pub type TouchStartCallback = Arc<dyn Fn(f32) + Send + Sync>;

/// A callback fired when a touch interaction ends, either on release or when auto-scroll
/// resumes after the idle timer.
pub type TouchEndCallback = Arc<dyn Fn(TouchEndCause) + Send + Sync>;

/// Configuration for [`crate::ScrollList`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
///
/// Preconditions (checked by [`ScrollListOptions::validate`]): `item_height` and
/// `visible_count` are positive, `speed` is finite and non-negative.
pub struct ScrollListOptions {
    /// Fixed row height in pixels.
    pub item_height: u32,
    /// Rows that fit in the viewport.
    pub visible_count: usize,
    /// Auto-scroll advance in pixels per frame.
    pub speed: f32,
    /// Extra rows rendered after a backward shift.
    pub top_buffer: usize,
    /// Extra rows rendered initially and after a forward shift.
    pub bottom_buffer: usize,
    /// Runs the per-frame advance once mounted (ignored for empty data).
    pub auto_play: bool,
    /// Gates every touch handler. When `false`, touches never mutate state.
    pub can_scroll: bool,
    pub on_touch_start: Option<TouchStartCallback>,
    pub on_touch_end: Option<TouchEndCallback>,
    /// Idle time after the last touch before the resume timer is allowed to settle.
    pub resume_debounce_ms: u64,
    /// Extra settle time before auto-scroll resumes.
    pub resume_settle_ms: u64,
}

impl Clone for ScrollListOptions {
    fn clone(&self) -> Self {
        Self {
            item_height: self.item_height,
            visible_count: self.visible_count,
            speed: self.speed,
            top_buffer: self.top_buffer,
            bottom_buffer: self.bottom_buffer,
            auto_play: self.auto_play,
            can_scroll: self.can_scroll,
            on_touch_start: self.on_touch_start.clone(),
            on_touch_end: self.on_touch_end.clone(),
            resume_debounce_ms: self.resume_debounce_ms,
            resume_settle_ms: self.resume_settle_ms,
        }
    }
}

impl Default for ScrollListOptions {
    fn default() -> Self {
        Self {
            item_height: 30,
            visible_count: 20,
            speed: 0.5,
            top_buffer: 0,
            bottom_buffer: 0,
            auto_play: false,
            can_scroll: true,
            on_touch_start: None,
            on_touch_end: None,
            resume_debounce_ms: 2000,
            resume_settle_ms: 500,
        }
    }
}

impl ScrollListOptions {
    /// Creates options for rows of `item_height` pixels with `visible_count` rows on screen.
    pub fn new(item_height: u32, visible_count: usize) -> Self {
        Self {
            item_height,
            visible_count,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.item_height == 0 {
            return Err(OptionsError::ZeroItemHeight);
        }
        if self.visible_count == 0 {
            return Err(OptionsError::ZeroVisibleCount);
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(OptionsError::InvalidSpeed(self.speed));
        }
        Ok(())
    }

    /// Total delay between the last touch activity and auto-scroll resuming.
    pub fn resume_delay_ms(&self) -> u64 {
        self.resume_debounce_ms.saturating_add(self.resume_settle_ms)
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_buffers(mut self, top_buffer: usize, bottom_buffer: usize) -> Self {
        self.top_buffer = top_buffer;
        self.bottom_buffer = bottom_buffer;
        self
    }

    pub fn with_auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }

    pub fn with_can_scroll(mut self, can_scroll: bool) -> Self {
        self.can_scroll = can_scroll;
        self
    }

    pub fn with_on_touch_start(
        mut self,
        on_touch_start: Option<impl Fn(f32) + Send + Sync + 'static>,
    ) -> Self {
        self.on_touch_start = on_touch_start.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_touch_end(
        mut self,
        on_touch_end: Option<impl Fn(TouchEndCause) + Send + Sync + 'static>,
    ) -> Self {
        self.on_touch_end = on_touch_end.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_resume_timing(mut self, debounce_ms: u64, settle_ms: u64) -> Self {
        self.resume_debounce_ms = debounce_ms;
        self.resume_settle_ms = settle_ms;
        self
    }
}

impl core::fmt::Debug for ScrollListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollListOptions")
            .field("item_height", &self.item_height)
            .field("visible_count", &self.visible_count)
            .field("speed", &self.speed)
            .field("top_buffer", &self.top_buffer)
            .field("bottom_buffer", &self.bottom_buffer)
            .field("auto_play", &self.auto_play)
            .field("can_scroll", &self.can_scroll)
            .field("resume_debounce_ms", &self.resume_debounce_ms)
            .field("resume_settle_ms", &self.resume_settle_ms)
            .finish_non_exhaustive()
    }
}
