use alloc::vec::Vec;

use tiny_scroll::{
    DragOutcome, OptionsError, RenderedFrame, ScrollList, ScrollListOptions, TouchEndCause,
};

use crate::Deferred;

/// A framework-neutral controller that wraps a `tiny_scroll::ScrollList` and plays the host
/// runtime: the animation loop, the resume timer and touch notifications.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `mount` / `unmount` around the widget's lifetime
/// - `tick(now_ms)` once per display frame
/// - `on_touch_start` / `on_touch_move` / `on_touch_end` when touch events occur
///
/// Auto-scroll pauses on touch start. It resumes only through the resume timer, which is
/// re-armed by every touch move and by touch end and cancelled by a new touch start, so the
/// list never resumes in the middle of a gesture.
#[derive(Clone, Debug)]
pub struct Controller<T> {
    list: ScrollList<T>,
    mounted: bool,
    animating: bool,
    frames: u64,
    resume: Deferred,
}

impl<T> Controller<T> {
    pub fn new(data: Vec<T>, options: ScrollListOptions) -> Result<Self, OptionsError> {
        Ok(Self::from_list(ScrollList::new(data, options)?))
    }

    pub fn from_list(list: ScrollList<T>) -> Self {
        Self {
            list,
            mounted: false,
            animating: false,
            frames: 0,
            resume: Deferred::new(),
        }
    }

    pub fn list(&self) -> &ScrollList<T> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ScrollList<T> {
        &mut self.list
    }

    pub fn into_list(self) -> ScrollList<T> {
        self.list
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the per-frame auto-scroll loop is scheduled.
    ///
    /// A scheduled loop still skips frames while the list is paused.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Auto-scroll frames run since the controller was created.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn resume_deadline_ms(&self) -> Option<u64> {
        self.resume.deadline_ms()
    }

    /// Starts the auto-scroll loop if `auto_play` is set and there is data.
    pub fn mount(&mut self) {
        self.mounted = true;
        self.restart_loop();
        adebug!(animating = self.animating, "Controller::mount");
    }

    /// Cancels the auto-scroll loop and any pending resume.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.animating = false;
        self.resume.cancel();
        adebug!(frames = self.frames, "Controller::unmount");
    }

    fn restart_loop(&mut self) {
        self.animating = self.mounted && self.list.options().auto_play && !self.list.is_empty();
    }

    /// Replaces the data and restarts the loop against it.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.animating = false;
        self.list.set_data(data);
        self.restart_loop();
    }

    pub fn set_options(&mut self, options: ScrollListOptions) -> Result<(), OptionsError> {
        self.list.set_options(options)?;
        self.restart_loop();
        Ok(())
    }

    /// Advances one display frame.
    ///
    /// Fires the resume timer when due, then runs one auto-scroll frame if the loop is
    /// scheduled. Returns the container translation, or `None` when unmounted.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        if !self.mounted {
            return None;
        }

        if self.resume.fire(now_ms) {
            adebug!(now_ms, "Controller: resume timer fired");
            self.list.resume();
            self.notify_touch_end(TouchEndCause::Resumed);
        }

        if self.animating && self.list.tick() {
            self.frames = self.frames.saturating_add(1);
        }

        Some(self.list.translate_y())
    }

    /// Returns `false` when `can_scroll` is off.
    pub fn on_touch_start(&mut self, y: f32) -> bool {
        if !self.list.touch_start(y) {
            return false;
        }
        self.resume.cancel();
        if let Some(cb) = &self.list.options().on_touch_start {
            cb(y);
        }
        true
    }

    /// Returns `None` when `can_scroll` is off or no touch is in progress.
    pub fn on_touch_move(&mut self, y: f32, now_ms: u64) -> Option<DragOutcome> {
        let outcome = self.list.touch_move(y)?;
        self.arm_resume(now_ms);
        Some(outcome)
    }

    /// Notifies the host that the finger lifted. Auto-scroll stays paused until the resume
    /// timer fires.
    ///
    /// Returns `false` when `can_scroll` is off.
    pub fn on_touch_end(&mut self, now_ms: u64) -> bool {
        if !self.list.touch_end() {
            return false;
        }
        self.arm_resume(now_ms);
        self.notify_touch_end(TouchEndCause::Released);
        true
    }

    pub fn render<R>(&self, render_item: impl FnMut(&T) -> R) -> RenderedFrame<R> {
        self.list.render(render_item)
    }

    fn arm_resume(&mut self, now_ms: u64) {
        let delay_ms = self.list.options().resume_delay_ms();
        self.resume.arm(now_ms, delay_ms);
    }

    fn notify_touch_end(&self, cause: TouchEndCause) {
        if let Some(cb) = &self.list.options().on_touch_end {
            cb(cause);
        }
    }
}
