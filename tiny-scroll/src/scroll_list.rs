use alloc::vec::Vec;

use crate::gesture::TouchTracker;
use crate::window::{refresh_rate, wrapped_window};
use crate::{
    DragOutcome, OptionsError, RenderedFrame, ScrollDirection, ScrollListOptions, ScrollState,
};

/// A looping list that recycles a fixed-size window of rows over a circular collection.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or timers.
/// - Your adapter drives it with frame ticks and touch coordinates.
/// - Rendering is exposed via the window indexes and `for_each_visible_item`/`render`.
///
/// State between shifts:
/// - `window().len() == visible_count + buffer`, where the buffer is the bottom buffer after a
///   forward shift (and initially) and the top buffer after a backward shift.
/// - `start_index() < len()` for a non-empty collection.
/// - the offset stays within `(-item_height, item_height * refresh_rate()]`.
///
/// For the frame loop and the debounced resume after touches, see the `tiny-scroll-adapter`
/// crate.
#[derive(Clone, Debug)]
pub struct ScrollList<T> {
    options: ScrollListOptions,
    data: Vec<T>,
    window: Vec<usize>,
    direction: ScrollDirection,
    start_index: usize,
    offset: f32,
    paused: bool,
    touch: TouchTracker,
}

impl<T> ScrollList<T> {
    /// Creates a list showing the first `visible_count + bottom_buffer` rows (wrapping).
    pub fn new(data: Vec<T>, options: ScrollListOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        sdebug!(
            len = data.len(),
            visible_count = options.visible_count,
            auto_play = options.auto_play,
            "ScrollList::new"
        );
        let mut list = Self {
            options,
            data,
            window: Vec::new(),
            direction: ScrollDirection::Forward,
            start_index: 0,
            offset: 0.0,
            paused: false,
            touch: TouchTracker::default(),
        };
        list.rebuild_window();
        Ok(list)
    }

    pub fn options(&self) -> &ScrollListOptions {
        &self.options
    }

    /// Replaces the options. The window is rebuilt with the new buffer sizes.
    ///
    /// On error the current options are kept.
    pub fn set_options(&mut self, options: ScrollListOptions) -> Result<(), OptionsError> {
        options.validate()?;
        self.options = options;
        self.rebuild_window();
        Ok(())
    }

    /// Replaces the collection. The start index is wrapped into the new length and the offset
    /// is kept.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.start_index = if data.is_empty() {
            0
        } else {
            self.start_index % data.len()
        };
        self.data = data;
        sdebug!(len = self.data.len(), start_index = self.start_index, "ScrollList::set_data");
        self.rebuild_window();
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Sub-row pixel displacement accumulated since the last index shift.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Height of the clipping viewport: `item_height * visible_count`.
    pub fn viewport_height(&self) -> u64 {
        u64::from(self.options.item_height).saturating_mul(self.options.visible_count as u64)
    }

    /// Vertical translation to apply to the row container.
    pub fn translate_y(&self) -> f32 {
        -self.offset
    }

    /// Collection indexes of the rendered rows, top to bottom.
    pub fn window(&self) -> &[usize] {
        &self.window
    }

    pub fn last_direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn touch(&self) -> &TouchTracker {
        &self.touch
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            strace!("ScrollList::pause");
        }
        self.paused = true;
    }

    pub fn resume(&mut self) {
        if self.paused {
            strace!("ScrollList::resume");
        }
        self.paused = false;
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            start_index: self.start_index,
            offset: self.offset,
            paused: self.paused,
        }
    }

    /// Rows advanced per auto-scroll shift for the current collection.
    pub fn refresh_rate(&self) -> usize {
        refresh_rate(self.data.len(), self.options.visible_count)
    }

    fn item_height(&self) -> f32 {
        self.options.item_height as f32
    }

    fn window_len(&self) -> usize {
        let buffer = match self.direction {
            ScrollDirection::Forward => self.options.bottom_buffer,
            ScrollDirection::Backward => self.options.top_buffer,
        };
        self.options.visible_count.saturating_add(buffer)
    }

    fn rebuild_window(&mut self) {
        let window_len = self.window_len();
        self.window.clear();
        self.window.extend(wrapped_window(self.start_index, window_len, self.data.len()));
    }

    fn shift_forward(&mut self, rows: u64) {
        let len = self.data.len() as u64;
        self.start_index = ((self.start_index as u64 + rows % len) % len) as usize;
        self.direction = ScrollDirection::Forward;
        self.rebuild_window();
    }

    fn shift_backward(&mut self, rows: u64) {
        let len = self.data.len() as u64;
        self.start_index = ((self.start_index as u64 + len - rows % len) % len) as usize;
        self.direction = ScrollDirection::Backward;
        self.rebuild_window();
    }

    /// Moves the window forward by `step` rows and pulls the offset back by the same distance.
    pub fn advance(&mut self, step: usize) {
        if self.data.is_empty() {
            return;
        }
        self.shift_forward(step as u64);
        self.offset -= self.item_height() * step as f32;
        strace!(
            start_index = self.start_index,
            step,
            offset = self.offset,
            "ScrollList::advance"
        );
    }

    /// Moves the window back by one row.
    ///
    /// The offset grows by two rows, not one: with a one-row correction a backward drag
    /// swaps the data without the content visibly moving down. This asymmetry with
    /// [`ScrollList::advance`] is intentional and must be kept.
    pub fn retreat(&mut self) {
        if self.data.is_empty() {
            return;
        }
        self.shift_backward(1);
        self.offset += self.item_height() * 2.0;
        strace!(
            start_index = self.start_index,
            offset = self.offset,
            "ScrollList::retreat"
        );
    }

    /// Applies as many `stride`-pixel forward shifts of `rows_per_shift` rows as the offset
    /// allows, leaving it in `[0, stride)`. Returns the number of shifts.
    ///
    /// Equivalent to repeating `advance(rows_per_shift)` while `offset >= stride`, in one step.
    fn catch_up_forward(&mut self, stride: f32, rows_per_shift: usize) -> u64 {
        if self.offset < stride {
            return 0;
        }
        let rest = self.offset % stride;
        let shifts = ((self.offset - rest) / stride + 0.5) as u64;
        let len = self.data.len() as u128;
        let rows = (rows_per_shift as u128 % len) * (shifts as u128 % len) % len;
        self.shift_forward(rows as u64);
        self.offset = rest;
        strace!(
            start_index = self.start_index,
            shifts,
            offset = self.offset,
            "ScrollList::catch_up_forward"
        );
        shifts
    }

    /// Applies as many backward shifts as `offset <= -item_height` allows, each adding two rows
    /// to the offset, leaving it in `(-item_height, item_height]`. Returns the number of shifts.
    ///
    /// Equivalent to repeating `retreat()` while the condition holds, in one step.
    fn catch_up_backward(&mut self) -> u64 {
        let height = self.item_height();
        if self.offset > -height {
            return 0;
        }
        let period = height * 2.0;
        let overshoot = (-(self.offset + height)) % period;
        let settled = period - overshoot - height;
        let shifts = ((settled - self.offset) / period + 0.5) as u64;
        self.shift_backward(shifts);
        self.offset = settled;
        strace!(
            start_index = self.start_index,
            shifts,
            offset = self.offset,
            "ScrollList::catch_up_backward"
        );
        shifts
    }

    /// Runs one auto-scroll frame: adds `speed` to the offset and shifts forward by the
    /// refresh rate once a whole batch of rows has scrolled out.
    ///
    /// Does nothing while paused or when the collection is empty. Returns `true` if the
    /// frame ran. Whether frames are produced at all (`auto_play`) is up to the caller.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.data.is_empty() {
            return false;
        }
        self.offset += self.options.speed;
        let rate = self.refresh_rate();
        let threshold = self.item_height() * rate as f32;
        self.catch_up_forward(threshold, rate);
        true
    }

    /// Starts a drag at `y`. Pauses auto-scroll.
    ///
    /// Returns `false` (and changes nothing) when `can_scroll` is off.
    pub fn touch_start(&mut self, y: f32) -> bool {
        if !self.options.can_scroll {
            return false;
        }
        self.touch.begin(y);
        self.pause();
        true
    }

    /// Follows the finger to `y`.
    ///
    /// Moving the finger up scrolls content forward. Every whole row that crosses the viewport
    /// edge is shifted, so a fast flick can shift several rows in one call.
    ///
    /// Returns `None` when `can_scroll` is off or no touch is in progress.
    pub fn touch_move(&mut self, y: f32) -> Option<DragOutcome> {
        if !self.options.can_scroll {
            return None;
        }
        let delta_y = self.touch.move_to(y)?;
        Some(self.drag_by(delta_y))
    }

    /// Forgets the touch coordinates. Auto-scroll stays paused.
    ///
    /// Returns `false` (and changes nothing) when `can_scroll` is off.
    pub fn touch_end(&mut self) -> bool {
        if !self.options.can_scroll {
            return false;
        }
        self.touch.end();
        true
    }

    fn drag_by(&mut self, delta_y: f32) -> DragOutcome {
        let mut outcome = DragOutcome {
            delta_y,
            advanced: 0,
            retreated: 0,
        };
        if !delta_y.is_finite() {
            swarn!(delta_y, "ScrollList: ignoring non-finite touch delta");
            return outcome;
        }
        if self.data.is_empty() {
            return outcome;
        }

        self.offset -= delta_y;
        let height = self.item_height();
        let advanced = self.catch_up_forward(height, 1);
        let retreated = self.catch_up_backward();
        outcome.advanced = usize::try_from(advanced).unwrap_or(usize::MAX);
        outcome.retreated = usize::try_from(retreated).unwrap_or(usize::MAX);
        outcome
    }

    /// Iterates the rendered rows top to bottom as `(slot, index, item)`.
    pub fn for_each_visible_item(&self, mut f: impl FnMut(usize, usize, &T)) {
        for (slot, &index) in self.window.iter().enumerate() {
            f(slot, index, &self.data[index]);
        }
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &T> + '_ {
        self.window.iter().map(|&index| &self.data[index])
    }

    /// Maps every rendered row through `render_item` and pairs the result with the container
    /// translation.
    pub fn render<R>(&self, mut render_item: impl FnMut(&T) -> R) -> RenderedFrame<R> {
        RenderedFrame {
            viewport_height: self.viewport_height(),
            translate_y: self.translate_y(),
            items: self.visible_items().map(&mut render_item).collect(),
        }
    }
}
