// Example: minimal frame stepping and a touch flick.
use tiny_scroll::{ScrollList, ScrollListOptions};

fn main() -> Result<(), tiny_scroll::OptionsError> {
    let data: Vec<u32> = (0..8).collect();
    let mut list = ScrollList::new(data, ScrollListOptions::new(10, 5).with_speed(1.0))?;

    println!("refresh_rate={}", list.refresh_rate());
    for _ in 0..30 {
        list.tick();
    }
    println!("after 30 frames: state={:?} window={:?}", list.scroll_state(), list.window());

    list.touch_start(100.0);
    let out = list.touch_move(55.0);
    println!("flick: {out:?} window={:?}", list.window());
    list.touch_end();
    Ok(())
}
