// Example: a looping carousel renders three copies of its items and remaps silently.
use carousel::{Carousel, CarouselOptions, StartingPosition};

fn main() -> Result<(), carousel::CarouselError> {
    let mut c = Carousel::new(
        CarouselOptions::new(4)
            .with_infinite(true)
            .with_items_per_slide(3)
            .with_initial_starting_position(StartingPosition::Center),
    );
    c.measure_item(100.0);

    let mut items = Vec::new();
    c.collect_rendered_items(&mut items);
    println!("rendered={} first={:?}", items.len(), items.first());

    for _ in 0..5 {
        let Some(t) = c.slide_to_prev()? else {
            continue;
        };
        c.on_animation_frame(t.to);
        let seen = c.loop_normalized_offset();
        if let Some(remap) = c.on_animation_complete() {
            println!("remap {} -> {} (visible {seen})", remap.from, remap.to);
        }
        println!(
            "index={} rendered_index={} offset={}",
            c.current_index(),
            c.rendered_index(),
            c.offset()
        );
    }
    Ok(())
}
