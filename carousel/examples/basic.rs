// Example: minimal usage with buttons and an instant "animation driver".
use carousel::{Carousel, CarouselOptions};

fn main() -> Result<(), carousel::CarouselError> {
    let mut c = Carousel::new(CarouselOptions::new(5).with_navigation(true));
    c.subscribe(|e| println!("event: {e:?}"));

    // The host measures the first rendered item.
    c.measure_item(320.0);

    for _ in 0..6 {
        if let Some(t) = c.slide_to_next()? {
            // A real driver would interpolate; jump straight to the end instead.
            c.on_animation_frame(t.to);
            c.on_animation_complete();
        }
        println!("index={} offset={}", c.current_index(), c.offset());
    }
    Ok(())
}
