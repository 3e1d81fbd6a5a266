//! Adapter utilities for the `tiny-scroll` crate.
//!
//! The `tiny-scroll` crate is UI-agnostic and timer-free: it only knows about frames and touch
//! coordinates. This crate provides the pieces a host runtime would otherwise hand-roll:
//!
//! - A mount/unmount lifecycle around the per-frame auto-scroll loop
//! - A single cancellable, re-armable resume timer after touch interactions
//! - Host notifications on touch start and touch end
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod deferred;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use deferred::Deferred;
