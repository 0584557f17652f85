// Example: feeding pointer drags, including a fast flick with velocity jumps.
use carousel::{Carousel, CarouselEvent, CarouselOptions, DragUpdate};

fn main() -> Result<(), carousel::CarouselError> {
    let mut c = Carousel::new(
        CarouselOptions::new(12)
            .with_dragging_slide_threshold(80.0)
            .with_velocity_jump(true),
    );
    c.subscribe(|e| {
        if !matches!(e, CarouselEvent::Drag(_)) {
            println!("event: {e:?}");
        }
    });
    c.measure_item(250.0);

    // A slow drag that falls short of the threshold snaps back.
    for m in [-10.0, -30.0, -60.0] {
        c.on_drag(DragUpdate::moving(m, 0.2))?;
    }
    if let Some(t) = c.on_drag(DragUpdate::release(-60.0, 0.2))? {
        println!("snap back {:?}: {} -> {}", t.kind, t.from, t.to);
        c.on_animation_frame(t.to);
        c.on_animation_complete();
    }

    // A flick at velocity 9 commits 1 + floor(9 / 4) slides.
    c.on_drag(DragUpdate::moving(-40.0, 9.0))?;
    if let Some(t) = c.on_drag(DragUpdate::moving(-120.0, 9.0))? {
        println!("slide {:?}: {} -> {}", t.kind, t.from, t.to);
        c.on_drag(DragUpdate::release(-180.0, 0.0))?;
        c.on_animation_frame(t.to);
        c.on_animation_complete();
    }
    println!("index={}", c.current_index());
    Ok(())
}
