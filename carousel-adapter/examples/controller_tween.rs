use carousel::CarouselOptions;
use carousel_adapter::{Controller, Easing, MotionConfig};

fn main() -> Result<(), carousel::CarouselError> {
    // Example: CSS-transition style tweens, switching easing between slides.
    let mut c = Controller::new(
        CarouselOptions::new(4),
        MotionConfig::Tween {
            duration_ms: 240,
            easing: Easing::EaseInOutCubic,
        },
    );
    c.measure_item(200.0);

    let mut now_ms = 0u64;
    for easing in [Easing::EaseOutCubic, Easing::Linear, Easing::SmoothStep] {
        c.set_motion_config(MotionConfig::Tween {
            duration_ms: 240,
            easing,
        });
        if !c.slide_to_next(now_ms)? {
            break;
        }
        loop {
            now_ms += 16;
            let Some(off) = c.tick(now_ms) else {
                break;
            };
            if now_ms % 80 == 0 {
                println!("{easing:?} t={now_ms} off={off}");
            }
        }
    }
    println!("index={}", c.carousel().current_index());
    Ok(())
}
