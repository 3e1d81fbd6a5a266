use crate::*;

use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tiny_scroll::{ScrollListOptions, TouchEndCause};

struct Recorder {
    starts: Arc<AtomicUsize>,
    ends: Arc<Mutex<Vec<TouchEndCause>>>,
}

impl Recorder {
    fn new() -> Self {
        Self {
            starts: Arc::new(AtomicUsize::new(0)),
            ends: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn attach(&self, opts: ScrollListOptions) -> ScrollListOptions {
        let starts = Arc::clone(&self.starts);
        let ends = Arc::clone(&self.ends);
        opts.with_on_touch_start(Some(move |_y: f32| {
            starts.fetch_add(1, Ordering::Relaxed);
        }))
        .with_on_touch_end(Some(move |cause: TouchEndCause| {
            ends.lock().unwrap().push(cause);
        }))
    }

    fn starts(&self) -> usize {
        self.starts.load(Ordering::Relaxed)
    }

    fn ends(&self) -> Vec<TouchEndCause> {
        self.ends.lock().unwrap().clone()
    }
}

fn items(len: usize) -> Vec<usize> {
    (0..len).collect()
}

fn demo_options() -> ScrollListOptions {
    ScrollListOptions::new(80, 5)
        .with_speed(0.5)
        .with_buffers(5, 5)
        .with_auto_play(true)
}

#[test]
fn deferred_fires_once_and_can_be_rearmed() {
    let mut d = Deferred::new();
    assert!(!d.fire(0));

    d.arm(100, 50);
    assert_eq!(d.deadline_ms(), Some(150));
    assert_eq!(d.remaining_ms(120), Some(30));
    assert!(!d.fire(149));

    // Re-arming replaces the pending deadline.
    d.arm(140, 50);
    assert!(!d.fire(150));
    assert!(d.fire(190));
    assert!(!d.fire(191));
    assert!(!d.is_armed());

    d.arm(u64::MAX - 1, 10);
    assert_eq!(d.deadline_ms(), Some(u64::MAX));
    d.cancel();
    assert!(!d.fire(u64::MAX));
}

#[test]
fn tick_is_inert_until_mounted() {
    let mut c = Controller::new(items(100), demo_options()).unwrap();
    assert_eq!(c.tick(0), None);
    assert!(!c.is_animating());
    assert_eq!(c.list().offset(), 0.0);

    c.mount();
    assert!(c.is_animating());
    assert_eq!(c.tick(16), Some(-0.5));
    assert_eq!(c.frames(), 1);
}

#[test]
fn mount_skips_loop_without_auto_play_or_data() {
    let mut c = Controller::new(items(10), ScrollListOptions::new(10, 2)).unwrap();
    c.mount();
    assert!(!c.is_animating());
    c.tick(0);
    assert_eq!(c.list().offset(), 0.0);

    let mut c = Controller::<usize>::new(Vec::new(), demo_options()).unwrap();
    c.mount();
    assert!(!c.is_animating());
    assert_eq!(c.tick(0), Some(-0.0));
}

#[test]
fn demo_configuration_advances_a_screen_every_800_frames() {
    let mut c = Controller::new(items(100), demo_options()).unwrap();
    c.mount();
    for frame in 0..800u64 {
        c.tick(frame * 16);
    }
    assert_eq!(c.list().start_index(), 5);
    assert_eq!(c.list().offset(), 0.0);
    assert_eq!(c.list().window().first(), Some(&5));
}

#[test]
fn unmount_cancels_loop_and_pending_resume() {
    let mut c = Controller::new(items(100), demo_options()).unwrap();
    c.mount();
    for frame in 0..10u64 {
        c.tick(frame * 16);
    }
    c.on_touch_start(300.0);
    c.on_touch_end(200);
    assert!(c.resume_deadline_ms().is_some());

    c.unmount();
    assert!(!c.is_animating());
    assert_eq!(c.resume_deadline_ms(), None);
    assert_eq!(c.tick(10_000), None);
    assert_eq!(c.list().offset(), 5.0);
    assert_eq!(c.frames(), 10);
}

#[test]
fn touch_pauses_until_resume_delay_after_release() {
    let rec = Recorder::new();
    let mut c = Controller::new(items(100), rec.attach(demo_options())).unwrap();
    c.mount();
    c.tick(0);
    assert_eq!(c.list().offset(), 0.5);

    assert!(c.on_touch_start(500.0));
    assert_eq!(rec.starts(), 1);
    assert!(c.list().is_paused());

    let out = c.on_touch_move(480.0, 100).unwrap();
    assert_eq!(out.delta_y, -20.0);
    assert_eq!(c.list().offset(), 20.5);

    assert!(c.on_touch_end(120));
    assert_eq!(rec.ends(), [TouchEndCause::Released]);
    assert_eq!(c.resume_deadline_ms(), Some(2620));

    c.tick(2619);
    assert!(c.list().is_paused());
    assert_eq!(c.list().offset(), 20.5);

    c.tick(2620);
    assert!(!c.list().is_paused());
    assert_eq!(c.list().offset(), 21.0);
    assert_eq!(rec.ends(), [TouchEndCause::Released, TouchEndCause::Resumed]);

    c.tick(2636);
    assert_eq!(rec.ends().len(), 2);
}

#[test]
fn repeated_moves_rearm_a_single_resume_timer() {
    let rec = Recorder::new();
    let mut c = Controller::new(items(100), rec.attach(demo_options())).unwrap();
    c.mount();

    c.on_touch_start(400.0);
    c.on_touch_move(390.0, 0);
    c.on_touch_move(380.0, 1000);
    c.on_touch_move(370.0, 2000);
    assert_eq!(c.resume_deadline_ms(), Some(4500));

    // The deadline armed by the first move is gone.
    c.tick(2600);
    assert!(c.list().is_paused());
    assert!(rec.ends().is_empty());

    c.tick(4500);
    assert!(!c.list().is_paused());
    assert_eq!(rec.ends(), [TouchEndCause::Resumed]);
}

#[test]
fn new_touch_cancels_pending_resume() {
    let rec = Recorder::new();
    let mut c = Controller::new(items(100), rec.attach(demo_options())).unwrap();
    c.mount();

    c.on_touch_start(400.0);
    c.on_touch_end(0);
    assert_eq!(c.resume_deadline_ms(), Some(2500));

    c.on_touch_start(400.0);
    assert_eq!(c.resume_deadline_ms(), None);
    c.tick(3000);
    assert!(c.list().is_paused());
    assert_eq!(rec.starts(), 2);
    assert_eq!(rec.ends(), [TouchEndCause::Released]);
}

#[test]
fn tap_without_move_still_resumes() {
    let mut c = Controller::new(items(20), demo_options().with_resume_timing(100, 50)).unwrap();
    c.mount();
    c.on_touch_start(10.0);
    c.on_touch_end(0);

    c.tick(149);
    assert!(c.list().is_paused());
    c.tick(150);
    assert!(!c.list().is_paused());
}

#[test]
fn touch_handlers_are_noops_when_scrolling_is_disabled() {
    let rec = Recorder::new();
    let opts = rec.attach(demo_options().with_can_scroll(false));
    let mut c = Controller::new(items(100), opts).unwrap();
    c.mount();

    assert!(!c.on_touch_start(500.0));
    assert!(c.on_touch_move(100.0, 10).is_none());
    assert!(!c.on_touch_end(20));

    assert_eq!(rec.starts(), 0);
    assert!(rec.ends().is_empty());
    assert_eq!(c.resume_deadline_ms(), None);
    assert!(!c.list().is_paused());
    c.tick(30);
    assert_eq!(c.list().offset(), 0.5);
}

#[test]
fn set_data_restarts_loop() {
    let mut c = Controller::<usize>::new(Vec::new(), demo_options()).unwrap();
    c.mount();
    assert!(!c.is_animating());

    c.set_data(items(8));
    assert!(c.is_animating());
    assert_eq!(c.list().refresh_rate(), 3);

    c.set_data(Vec::new());
    assert!(!c.is_animating());
}

#[test]
fn set_options_can_turn_auto_play_off() {
    let mut c = Controller::new(items(10), demo_options()).unwrap();
    c.mount();
    assert!(c.is_animating());

    c.set_options(demo_options().with_auto_play(false)).unwrap();
    assert!(!c.is_animating());
    assert!(c.set_options(ScrollListOptions::new(0, 5)).is_err());
    assert!(!c.is_animating());
}

#[test]
fn render_reflects_the_current_window() {
    let mut c = Controller::new(items(100), demo_options()).unwrap();
    c.mount();
    c.on_touch_start(500.0);
    c.on_touch_move(410.0, 0);

    let frame = c.render(|i| *i * 10);
    assert_eq!(frame.translate_y, -10.0);
    assert_eq!(frame.items.len(), 10);
    assert_eq!(frame.items[0], 10);
}
