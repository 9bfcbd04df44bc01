//! Benchmarks for the host event path

use std::time::{Duration, Instant};

use cm_input::{
    HostButton, HostCursor, HostEvent, InputRouter, Point, SampleClock, ScreenId, Size,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

struct NoWarp;

impl HostCursor for NoWarp {
    fn set_cursor_position(&mut self, _screen: ScreenId, _point: Point) {}
}

fn bench_moves(c: &mut Criterion) {
    let mut router = InputRouter::with_clock(Box::new(NoWarp), SampleClock::new(Duration::ZERO));
    router.peripheral_mut().init_with(1, false);
    let start = Instant::now();
    let mut tick = 0u64;

    c.bench_function("absolute_move", |b| {
        b.iter(|| {
            tick += 1;
            let event = HostEvent::Move {
                pos: Point::new((tick % 1280) as i32, (tick % 720) as i32),
                surface: Size::new(1280, 720),
            };
            router.handle_event_at(None, black_box(event), start + Duration::from_micros(tick));
        })
    });
}

fn bench_buttons(c: &mut Criterion) {
    let mut router = InputRouter::new(Box::new(NoWarp));
    router.peripheral_mut().init_with(1, false);
    let mut pressed = false;

    c.bench_function("button_toggle", |b| {
        b.iter(|| {
            pressed = !pressed;
            let event = if pressed {
                HostEvent::ButtonDown(HostButton::Left)
            } else {
                HostEvent::ButtonUp(HostButton::Left)
            };
            router.handle_event(None, black_box(event));
        })
    });
}

criterion_group!(benches, bench_moves, bench_buttons);
criterion_main!(benches);
