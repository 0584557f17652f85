use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

const EXTENT: f32 = 100.0;

fn measured(options: CarouselOptions) -> Carousel {
    let mut c = Carousel::new(options);
    c.measure_item(EXTENT);
    c
}

fn record(c: &mut Carousel) -> Arc<Mutex<Vec<CarouselEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    c.subscribe(move |e| sink.lock().unwrap().push(*e));
    events
}

/// Plays an animated transition to its end, like a driver would.
fn finish(c: &mut Carousel, t: Transition) {
    assert!(!t.immediate);
    c.on_animation_frame((t.from + t.to) / 2.0);
    c.on_animation_frame(t.to);
    c.on_animation_complete();
}

fn next(c: &mut Carousel) -> bool {
    match c.slide_to_next().unwrap() {
        Some(t) => {
            finish(c, t);
            true
        }
        None => false,
    }
}

fn prev(c: &mut Carousel) -> bool {
    match c.slide_to_prev().unwrap() {
        Some(t) => {
            finish(c, t);
            true
        }
        None => false,
    }
}

#[test]
fn alignment_shifts_track_by_whole_items() {
    let start = PositionCalculator::new(SlideAxis::X, 3, StartingPosition::Start);
    let center = PositionCalculator::new(SlideAxis::X, 3, StartingPosition::Center);
    let end = PositionCalculator::new(SlideAxis::X, 3, StartingPosition::End);
    assert_eq!(start.offset_for(2, 50.0), -100.0);
    assert_eq!(center.offset_for(2, 50.0), -50.0);
    assert_eq!(end.offset_for(2, 50.0), 0.0);

    // Half-way rounds up: two items per slide centre by one item.
    let two = PositionCalculator::new(SlideAxis::X, 2, StartingPosition::Center);
    assert_eq!(two.alignment_steps(), 1);
    let four = PositionCalculator::new(SlideAxis::X, 4, StartingPosition::Center);
    assert_eq!(four.alignment_steps(), 2);

    // A single item per slide ignores alignment.
    let single = PositionCalculator::new(SlideAxis::Y, 1, StartingPosition::End);
    assert_eq!(single.offset_for(1, 80.0), -80.0);
}

#[test]
fn calculator_requires_a_measurement() {
    let calc = PositionCalculator::default();
    assert_eq!(
        calc.offset_for_measured(1, None),
        Err(CarouselError::NoItemsAvailable)
    );
    assert_eq!(calc.offset_for_measured(1, Some(10.0)), Ok(-10.0));
    assert_eq!(calc.translate(-10.0), Translate { x: -10.0, y: 0.0 });

    let vertical = PositionCalculator::new(SlideAxis::Y, 4, StartingPosition::Start);
    assert_eq!(vertical.translate(-30.0), Translate { x: 0.0, y: -30.0 });
    assert_eq!(vertical.item_basis(), 0.25);
    assert_eq!(vertical.last_start_index(10), 6);
    assert_eq!(vertical.last_start_index(2), 0);
}

#[test]
fn slide_requests_fail_without_items() {
    let mut c = Carousel::new(CarouselOptions::new(5));
    assert_eq!(c.slide_to_next(), Err(CarouselError::NoItemsAvailable));
    assert_eq!(
        c.on_drag(DragUpdate::moving(-10.0, 0.0)),
        Err(CarouselError::NoItemsAvailable)
    );

    let mut empty = Carousel::new(CarouselOptions::new(0));
    empty.measure_item(EXTENT);
    assert_eq!(empty.slide_to_next(), Err(CarouselError::NoItemsAvailable));
    assert!(empty.current_active_item().is_none());
}

#[test]
fn advancing_stops_at_the_last_item() {
    let mut c = measured(CarouselOptions::new(5));
    for _ in 0..4 {
        assert!(next(&mut c));
    }
    assert_eq!(c.current_index(), 4);
    assert_eq!(c.offset(), -400.0);

    assert!(!next(&mut c));
    assert_eq!(c.current_index(), 4);
    assert!(!c.is_animating());
}

#[test]
fn retreating_stops_at_the_first_item() {
    let mut c = measured(CarouselOptions::new(3));
    assert!(!prev(&mut c));
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.offset(), 0.0);
}

#[test]
fn items_per_slide_limits_the_last_start_index() {
    let mut c = measured(CarouselOptions::new(6).with_items_per_slide(3));
    while next(&mut c) {}
    assert_eq!(c.current_index(), 3);

    if let Some(t) = c.slide_to(5, false).unwrap() {
        finish(&mut c, t);
    }
    assert_eq!(c.current_index(), 3);
}

#[test]
fn forward_then_backward_round_trips() {
    let mut c = measured(CarouselOptions::new(8).with_initial_active_item(2));
    let start_offset = c.offset();
    for _ in 0..3 {
        assert!(next(&mut c));
    }
    for _ in 0..3 {
        assert!(prev(&mut c));
    }
    assert_eq!(c.current_index(), 2);
    assert_eq!(c.offset(), start_offset);
}

#[test]
fn slide_events_bracket_each_transition() {
    let mut c = measured(CarouselOptions::new(4));
    let events = record(&mut c);

    let t = c.slide_to_next().unwrap().unwrap();
    assert_eq!(t.kind, TransitionKind::Slide);
    assert_eq!((t.from, t.to), (0.0, -100.0));
    assert!(c.is_animating());
    // The target is active as soon as the transition starts.
    assert_eq!(c.current_index(), 1);
    finish(&mut c, t);

    let got = events.lock().unwrap().clone();
    assert_eq!(
        got,
        vec![
            CarouselEvent::SlideStartChange {
                next_item: 1,
                direction: SlideDirection::Next,
            },
            CarouselEvent::SlideChange {
                current_item: 1,
                direction: SlideDirection::Next,
            },
        ]
    );
}

#[test]
fn requests_during_animation_are_ignored() {
    let mut c = measured(CarouselOptions::new(5));
    let t = c.slide_to_next().unwrap().unwrap();
    assert_eq!(c.slide_to_next().unwrap(), None);
    assert_eq!(c.slide_to_prev().unwrap(), None);
    assert_eq!(c.slide_to(4, false).unwrap(), None);
    finish(&mut c, t);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn sliding_to_the_active_item_is_silent() {
    let mut c = measured(CarouselOptions::new(5).with_initial_active_item(2));
    let events = record(&mut c);
    let before = c.offset();
    assert_eq!(c.slide_to(2, false).unwrap(), None);
    assert_eq!(c.slide_to(2, true).unwrap(), None);
    assert_eq!(c.offset(), before);
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn immediate_slide_emits_nothing() {
    let mut c = measured(CarouselOptions::new(5));
    let events = record(&mut c);
    let t = c.slide_to(3, true).unwrap().unwrap();
    assert!(t.immediate);
    assert_eq!(t.kind, TransitionKind::Reposition);
    assert_eq!(c.offset(), -300.0);
    assert!(!c.is_animating());
    assert!(events.lock().unwrap().is_empty());

    // Out-of-range requests clamp to the last item.
    c.slide_to(99, true).unwrap();
    assert_eq!(c.current_index(), 4);
}

#[test]
fn hidden_page_blocks_animated_requests() {
    let mut c = measured(CarouselOptions::new(5));
    c.set_page_hidden(true);
    assert_eq!(c.slide_to_next().unwrap(), None);
    assert_eq!(c.slide_to(3, false).unwrap(), None);
    assert!(c.slide_to(3, true).unwrap().is_some());

    c.set_page_hidden(false);
    assert!(next(&mut c));
    assert_eq!(c.current_index(), 4);
}

#[test]
fn visible_last_item_blocks_forward_only() {
    let mut c = measured(
        CarouselOptions::new(10)
            .with_items_per_slide(3)
            .with_initial_active_item(4),
    );
    c.set_last_item_visible(true);
    assert!(!next(&mut c));
    assert!(prev(&mut c));
    assert_eq!(c.current_index(), 3);
}

#[test]
fn loop_wraps_forward_through_the_clone_region() {
    let mut c = measured(CarouselOptions::new(3).with_infinite(true));
    assert_eq!(c.rendered_count(), 9);
    assert_eq!(c.rendered_index(), 3);
    assert_eq!(c.offset(), -300.0);

    for _ in 0..3 {
        assert!(next(&mut c));
    }
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.rendered_index(), 3);
    assert_eq!(c.offset(), -300.0);
}

#[test]
fn loop_wraps_backward_from_the_first_item() {
    let mut c = measured(CarouselOptions::new(4).with_infinite(true));
    let events = record(&mut c);

    let t = c.slide_to_prev().unwrap().unwrap();
    // Animates into the clone-before copy of the last item.
    assert_eq!(c.rendered_index(), 3);
    assert_eq!((t.from, t.to), (-400.0, -300.0));
    finish(&mut c, t);

    assert_eq!(c.current_index(), 3);
    assert_eq!(c.rendered_index(), 7);
    assert_eq!(
        events.lock().unwrap().last(),
        Some(&CarouselEvent::SlideChange {
            current_item: 3,
            direction: SlideDirection::Prev,
        })
    );
}

#[test]
fn loop_remap_is_invisible() {
    let mut c = measured(
        CarouselOptions::new(3)
            .with_infinite(true)
            .with_initial_active_item(2),
    );
    let t = c.slide_to_next().unwrap().unwrap();
    c.on_animation_frame(t.to);
    let before = c.loop_normalized_offset();
    let remap = c.on_animation_complete().unwrap();
    let after = c.loop_normalized_offset();

    assert_eq!(remap.kind, TransitionKind::Remap);
    assert!(remap.immediate);
    assert_eq!(remap.from - remap.to, -300.0);
    assert!((before - after).abs() < 1.0);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn rendered_items_cover_three_copies_when_looping() {
    let c = measured(CarouselOptions::new(2).with_infinite(true));
    let mut items = Vec::new();
    c.collect_rendered_items(&mut items);
    let regions: Vec<_> = items.iter().map(|i| (i.item_index, i.region)).collect();
    assert_eq!(
        regions,
        vec![
            (0, Region::CloneBefore),
            (1, Region::CloneBefore),
            (0, Region::Original),
            (1, Region::Original),
            (0, Region::CloneAfter),
            (1, Region::CloneAfter),
        ]
    );

    let plain = measured(CarouselOptions::new(2));
    plain.collect_rendered_items(&mut items);
    assert!(items.iter().all(|i| i.region == Region::Original));
    assert_eq!(items.len(), 2);
}

#[test]
fn drag_past_threshold_commits_once() {
    let mut c = measured(CarouselOptions::new(5));
    let events = record(&mut c);

    let t = c.on_drag(DragUpdate::moving(-40.0, 0.1)).unwrap().unwrap();
    assert_eq!(t.kind, TransitionKind::Drag);
    assert_eq!(c.offset(), -40.0);

    let t = c.on_drag(DragUpdate::moving(-150.0, 0.3)).unwrap().unwrap();
    assert_eq!(t.kind, TransitionKind::Slide);
    assert_eq!((t.from, t.to), (-150.0, -100.0));
    assert_eq!(c.current_index(), 1);

    // The committed gesture no longer drives the track.
    assert_eq!(c.on_drag(DragUpdate::moving(-260.0, 0.3)).unwrap(), None);
    assert_eq!(c.on_drag(DragUpdate::release(-300.0, 0.0)).unwrap(), None);
    assert_eq!(c.current_index(), 1);
    finish(&mut c, t);
    assert_eq!(c.current_index(), 1);

    let got = events.lock().unwrap().clone();
    let starts = got
        .iter()
        .filter(|e| matches!(e, CarouselEvent::SlideStartChange { .. }))
        .count();
    assert_eq!(starts, 1);
    assert!(got.contains(&CarouselEvent::LeftSwipe));
    assert!(matches!(got[0], CarouselEvent::Drag(_)));
}

#[test]
fn short_drag_snaps_back() {
    let mut c = measured(CarouselOptions::new(5).with_initial_active_item(1));
    let anchor = c.offset();
    c.on_drag(DragUpdate::moving(50.0, 0.1)).unwrap();
    assert_eq!(c.offset(), anchor + 50.0);
    assert!(c.is_dragging());

    let t = c.on_drag(DragUpdate::release(50.0, 0.1)).unwrap().unwrap();
    assert_eq!(t.kind, TransitionKind::SnapBack);
    assert!(!t.immediate);
    assert_eq!(t.to, anchor);
    assert!(!c.is_dragging());
    assert!(!c.is_animating());

    c.on_animation_frame(t.to);
    assert_eq!(c.on_animation_complete(), None);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn drag_toward_a_bound_snaps_back() {
    let mut c = measured(CarouselOptions::new(3));
    let events = record(&mut c);
    let t = c.on_drag(DragUpdate::moving(120.0, 0.0)).unwrap().unwrap();
    assert_eq!(t.kind, TransitionKind::SnapBack);
    assert_eq!(t.to, 0.0);
    assert_eq!(c.current_index(), 0);
    assert!(events.lock().unwrap().contains(&CarouselEvent::RightSwipe));
}

#[test]
fn velocity_jump_covers_extra_slides() {
    let mut c = measured(CarouselOptions::new(10).with_velocity_jump(true));
    let t = c.on_drag(DragUpdate::moving(-120.0, 9.0)).unwrap().unwrap();
    // 1 + floor(9 / 4)
    assert_eq!(c.current_index(), 3);
    assert_eq!(t.to, -300.0);
    c.on_drag(DragUpdate::release(-120.0, 0.0)).unwrap();
    finish(&mut c, t);

    c.slide_to(8, true).unwrap();
    let t = c.on_drag(DragUpdate::moving(-120.0, 40.0)).unwrap().unwrap();
    assert_eq!(c.current_index(), 9);
    finish(&mut c, t);
}

#[test]
fn new_drag_overrides_in_flight_transition() {
    let mut c = measured(CarouselOptions::new(5));
    let events = record(&mut c);
    let t = c.slide_to_next().unwrap().unwrap();
    c.on_animation_frame(-60.0);

    let t2 = c.on_drag(DragUpdate::moving(-10.0, 0.0)).unwrap().unwrap();
    assert!(!c.is_animating());
    assert_eq!(t2.kind, TransitionKind::Drag);
    assert_eq!(c.offset(), -110.0);
    assert_eq!(
        events.lock().unwrap()[1],
        CarouselEvent::SlideChange {
            current_item: 1,
            direction: SlideDirection::Next,
        }
    );

    // The superseded transition's completion is harmless.
    let _ = t;
    assert_eq!(c.on_animation_complete(), None);
}

#[test]
fn disabled_gestures_ignore_drags() {
    let mut c = measured(CarouselOptions::new(5).with_disable_gestures(true));
    assert_eq!(c.on_drag(DragUpdate::moving(-500.0, 3.0)).unwrap(), None);
    assert!(next(&mut c));
}

#[test]
fn vertical_axis_maps_offset_to_y() {
    let mut c = measured(CarouselOptions::new(4).with_slide_axis(SlideAxis::Y));
    next(&mut c);
    assert_eq!(c.translate(), Translate { x: 0.0, y: -100.0 });
}

#[test]
fn resize_recentres_on_the_active_item() {
    let mut c = measured(CarouselOptions::new(5).with_initial_active_item(2));
    let vp = Viewport {
        width: 320.0,
        height: 200.0,
    };
    let t = c.on_resize(vp, Some(320.0)).unwrap().unwrap();
    assert!(t.immediate);
    assert_eq!(t.to, -640.0);
    assert_eq!(c.on_resize(vp, Some(320.0)).unwrap(), None);
    assert_eq!(
        c.on_resize(
            Viewport {
                width: 640.0,
                height: 200.0
            },
            None
        ),
        Err(CarouselError::NoItemsAvailable)
    );

    let mut fixed = measured(CarouselOptions::new(5).with_should_resize_on_window_resize(false));
    assert_eq!(fixed.on_resize(vp, Some(320.0)).unwrap(), None);
}

#[test]
fn centred_start_applies_alignment_shift() {
    let c = measured(
        CarouselOptions::new(9)
            .with_items_per_slide(3)
            .with_initial_starting_position(StartingPosition::Center)
            .with_infinite(true),
    );
    // Middle copy starts at rendered index 9, shifted right by one item.
    assert_eq!(c.offset(), -900.0 + 100.0);
}

#[test]
fn keys_identify_items() {
    let mut c = Carousel::new(
        CarouselOptions::new_with_key(4, |i| ["a", "b", "c", "d"][i]).with_infinite(true),
    );
    c.measure_item(EXTENT);
    assert!(c.is_active_key(&"a"));
    assert!(c.is_prev_key(&"d"));
    assert!(c.is_next_key(&"b"));

    let t = c.slide_to_key(&"c", false).unwrap().unwrap();
    c.on_animation_frame(t.to);
    c.on_animation_complete();
    assert_eq!(
        c.current_active_item(),
        Some(ActiveItem {
            index: 2,
            key: "c"
        })
    );
    assert_eq!(c.slide_to_key(&"zz", false).unwrap(), None);
}

#[test]
fn fullscreen_changes_are_published_once() {
    let mut c = measured(CarouselOptions::new(2));
    let events = record(&mut c);
    c.set_fullscreen(true);
    c.set_fullscreen(true);
    c.set_fullscreen(false);
    assert_eq!(
        *events.lock().unwrap(),
        vec![
            CarouselEvent::FullscreenChange {
                is_fullscreen: true
            },
            CarouselEvent::FullscreenChange {
                is_fullscreen: false
            },
        ]
    );
}

#[test]
fn unsubscribed_listeners_stop_receiving() {
    let mut emitter = EventEmitter::new();
    let a = Arc::new(Mutex::new(0usize));
    let b = Arc::new(Mutex::new(0usize));
    let id_a = {
        let a = Arc::clone(&a);
        emitter.subscribe(move |_| *a.lock().unwrap() += 1)
    };
    {
        let b = Arc::clone(&b);
        emitter.subscribe(move |_| *b.lock().unwrap() += 1);
    }
    emitter.emit(&CarouselEvent::LeftSwipe);
    assert!(emitter.unsubscribe(id_a));
    assert!(!emitter.unsubscribe(id_a));
    emitter.emit(&CarouselEvent::RightSwipe);

    assert_eq!(*a.lock().unwrap(), 1);
    assert_eq!(*b.lock().unwrap(), 2);
    assert_eq!(emitter.listener_count(), 1);
}

#[test]
fn set_options_keeps_the_active_item_in_bounds() {
    let mut c = measured(CarouselOptions::new(10).with_initial_active_item(8));
    c.update_options(|o| o.count = 4);
    assert_eq!(c.current_index(), 3);
    assert_eq!(c.offset(), -300.0);

    c.update_options(|o| o.is_infinite = true);
    assert_eq!(c.current_index(), 3);
    assert_eq!(c.rendered_index(), 7);
}

#[test]
fn snapshot_restores_the_active_item() {
    let mut c = measured(CarouselOptions::new(6));
    next(&mut c);
    next(&mut c);
    let state = c.snapshot();
    assert_eq!(state.active_item, 2);
    assert!(!state.is_animating);

    let mut restored = measured(CarouselOptions::new(6));
    restored.restore_state(state).unwrap();
    assert_eq!(restored.current_index(), 2);
    assert_eq!(restored.offset(), c.offset());
}

#[cfg(feature = "serde")]
#[test]
fn snapshot_serializes() {
    let state = CarouselState {
        active_item: 3,
        offset: -300.0,
        is_animating: false,
        is_dragging: false,
    };
    let json = serde_json::to_string(&state).unwrap();
    let back: CarouselState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn interpreter_ignores_updates_after_commit_until_release() {
    let mut g = GestureInterpreter::new(100.0, false);
    assert_eq!(
        g.update(DragUpdate::moving(-30.0, 0.0), -200.0),
        GestureDecision::Track { offset: -230.0 }
    );
    assert!(g.is_tracking());
    assert_eq!(
        g.update(DragUpdate::moving(101.0, 0.0), -200.0),
        GestureDecision::Commit {
            direction: SlideDirection::Prev,
            slides: 1,
            offset: -99.0,
        }
    );
    assert!(g.is_active());
    assert!(!g.is_tracking());
    assert_eq!(
        g.update(DragUpdate::moving(10.0, 0.0), -200.0),
        GestureDecision::Ignore
    );
    assert_eq!(
        g.update(DragUpdate::release(10.0, 0.0), -200.0),
        GestureDecision::Ignore
    );
    assert!(!g.is_active());
    assert_eq!(
        g.update(DragUpdate::release(0.0, 0.0), -100.0),
        GestureDecision::Release { offset: -100.0 }
    );
}
