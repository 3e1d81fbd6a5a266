//! A headless, looping auto-scroll list engine.
//!
//! For the frame loop, resume timer and host notifications, see the `tiny-scroll-adapter` crate.
//!
//! The engine recycles a small window of rendered rows over a larger circular collection. It
//! keeps a sub-row pixel offset and reconciles two input sources against it:
//! - a continuous per-frame advance (auto-play)
//! - touch-drag deltas
//!
//! It is UI-agnostic. A TUI/GUI/DOM layer is expected to:
//! - call [`ScrollList::tick`] once per display frame
//! - forward touch coordinates to the `touch_*` methods
//! - translate its row container by [`ScrollList::translate_y`] and draw the rows yielded by
//!   [`ScrollList::for_each_visible_item`] (or [`ScrollList::render`])
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod gesture;
mod options;
mod scroll_list;
mod types;
mod window;


pub use error::OptionsError;
pub use gesture::TouchTracker;
pub use options::{ScrollListOptions, TouchEndCallback, TouchStartCallback};
pub use scroll_list::ScrollList;
pub use types::{DragOutcome, RenderedFrame, ScrollDirection, ScrollState, TouchEndCause};
pub use window::{WrappedWindow, normalize_index, refresh_rate, wrapped_window};
