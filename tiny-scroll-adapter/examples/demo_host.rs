// Example: a host page showing 100 rows at 60fps with a swipe in the middle.
use tiny_scroll::{ScrollListOptions, TouchEndCause};
use tiny_scroll_adapter::Controller;

#[derive(Clone, Debug)]
struct Row {
    id: usize,
    name: String,
}

fn main() -> Result<(), tiny_scroll::OptionsError> {
    let data: Vec<Row> = (0..100)
        .map(|id| Row {
            id,
            name: format!("Item {}", id + 1),
        })
        .collect();

    let opts = ScrollListOptions::new(80, 5)
        .with_buffers(5, 5)
        .with_speed(0.5)
        .with_auto_play(true)
        .with_on_touch_start(Some(|y: f32| println!("host: touch start at y={y}")))
        .with_on_touch_end(Some(|cause: TouchEndCause| println!("host: touch end ({cause:?})")));

    let mut c = Controller::new(data, opts)?;
    c.mount();

    let mut now_ms = 0u64;
    for frame in 0..3_000u64 {
        now_ms = now_ms.saturating_add(16);

        // Simulate a finger dragging content up by two and a half rows.
        match frame {
            1_000 => {
                c.on_touch_start(600.0);
            }
            1_001..=1_020 => {
                let y = 600.0 - (frame - 1_000) as f32 * 10.0;
                c.on_touch_move(y, now_ms);
            }
            1_021 => {
                c.on_touch_end(now_ms);
            }
            _ => {}
        }

        let Some(translate_y) = c.tick(now_ms) else {
            break;
        };

        if frame % 250 == 0 {
            let page = c.render(|row| format!("<div style=\"height: 80px\">{}</div>", row.name));
            let first = c.list().visible_items().next().map(|row| row.id);
            println!(
                "t={now_ms}ms height={}px translateY({translate_y}px) first_id={first:?} rows={} paused={}",
                page.viewport_height,
                page.items.len(),
                c.list().is_paused()
            );
        }
    }

    c.unmount();
    println!("done: frames={} state={:?}", c.frames(), c.list().scroll_state());
    Ok(())
}
