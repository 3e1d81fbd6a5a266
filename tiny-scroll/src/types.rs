use alloc::vec::Vec;

/// Which way the window last moved.
///
/// `Forward` windows are sized with the bottom buffer, `Backward` ones with the top buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Why the host is being told a touch interaction ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchEndCause {
    /// The finger left the surface. Auto-scroll is still paused.
    Released,
    /// The idle timer after the last touch elapsed and auto-scroll resumed.
    Resumed,
}

/// A lightweight, serializable snapshot of the scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub start_index: usize,
    /// Sub-row pixel displacement accumulated since the last index shift.
    pub offset: f32,
    pub paused: bool,
}

/// What a single touch-move did to the list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragOutcome {
    /// Finger movement since the previous touch point (positive = downwards).
    pub delta_y: f32,
    /// Number of one-row forward shifts applied.
    pub advanced: usize,
    /// Number of one-row backward shifts applied.
    pub retreated: usize,
}

impl DragOutcome {
    pub fn shifted(&self) -> bool {
        self.advanced > 0 || self.retreated > 0
    }
}

/// Render output for one frame: the viewport size, the container translation and one entry
/// per window slot.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedFrame<R> {
    /// Fixed height of the clipping viewport in pixels.
    pub viewport_height: u64,
    pub translate_y: f32,
    pub items: Vec<R>,
}
