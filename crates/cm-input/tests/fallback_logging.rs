//! Binding without a target window

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cm_core::logging::INPUT_TARGET;
use cm_input::{
    HostButton, HostCursor, HostEvent, HostEventSource, InputRouter, Point, ScreenId, Size,
    Subscription, TargetId,
};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() == Level::WARN && meta.target() == INPUT_TARGET {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

struct NoWarp;

impl HostCursor for NoWarp {
    fn set_cursor_position(&mut self, _screen: ScreenId, _point: Point) {}
}

#[derive(Default)]
struct Source(Vec<Subscription>);

impl HostEventSource for Source {
    fn install_filter(&mut self, subscription: Subscription) {
        self.0.push(subscription);
    }
}

#[test]
fn test_null_target_listens_globally_and_warns_once() {
    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));

    tracing::subscriber::with_default(subscriber, || {
        let mut router = InputRouter::new(Box::new(NoWarp));
        router.peripheral_mut().init_with(1, false);

        let mut source = Source::default();
        router.bind(&mut source, None);
        assert_eq!(source.0, vec![Subscription::Global]);
        assert_eq!(router.bound_target(), None);
        assert_eq!(warnings.load(Ordering::SeqCst), 1);

        let sources = [None, Some(TargetId(1)), Some(TargetId(77))];
        for source in sources {
            assert!(router.handle_event(source, HostEvent::ButtonDown(HostButton::Left)));
            assert!(router.handle_event(source, HostEvent::ButtonUp(HostButton::Left)));
        }
        assert!(router.handle_event(
            Some(TargetId(2)),
            HostEvent::Move {
                pos: Point::new(10, 10),
                surface: Size::new(100, 100),
            },
        ));

        assert_eq!(router.peripheral_mut().get_data_list(0).len(), 7);
    });

    assert_eq!(warnings.load(Ordering::SeqCst), 1);
}
