use carousel::{CarouselOptions, DragUpdate};
use carousel_adapter::{Controller, MotionConfig, SpringConfig};

fn main() -> Result<(), carousel::CarouselError> {
    // Example: a spring-animated carousel driven by a simulated 60fps frame loop.
    //
    // An adapter would:
    // - forward pointer drags and button clicks to the controller
    // - call tick(now_ms) every frame
    // - write the returned offset into the track's transform
    let mut c = Controller::new(
        CarouselOptions::new(6).with_infinite(true),
        MotionConfig::Spring(SpringConfig::WOBBLY),
    );
    c.measure_item(300.0);

    let mut now_ms = 0u64;
    c.on_drag(DragUpdate::moving(-50.0, 0.4), now_ms)?;
    c.on_drag(DragUpdate::moving(-140.0, 0.9), now_ms + 16)?;
    c.on_drag(DragUpdate::release(-150.0, 0.0), now_ms + 32)?;

    loop {
        now_ms += 16;
        let Some(off) = c.tick(now_ms) else {
            break;
        };
        if now_ms % 96 == 0 {
            let t = c.carousel().translate();
            println!("t={now_ms} off={off} translate=({}, {})", t.x, t.y);
        }
    }

    println!(
        "done: index={} offset={}",
        c.carousel().current_index(),
        c.offset()
    );
    Ok(())
}
