//! Ownership is taken from the process-wide interception flag at init

use cm_core::config::{Config, InputConfig};
use cm_input::{
    mice_intercepted, set_mice_intercepted, HostCursor, InputRouter, Ownership, PeripheralState,
    Point, ScreenId,
};

struct NoWarp;

impl HostCursor for NoWarp {
    fn set_cursor_position(&mut self, _screen: ScreenId, _point: Point) {}
}

#[test]
fn test_init_reads_interception_flag() {
    set_mice_intercepted(true);
    let mut system = PeripheralState::new();
    system.init(2);
    assert_eq!(system.info().ownership, Ownership::SystemOwned);

    // Later changes do not affect an initialized controller.
    set_mice_intercepted(false);
    system.init(2);
    assert_eq!(system.info().ownership, Ownership::SystemOwned);

    let mut app = PeripheralState::new();
    app.init(2);
    assert_eq!(app.info().ownership, Ownership::ApplicationOwned);

    let config = Config {
        input: InputConfig {
            intercepted: true,
            ..InputConfig::default()
        },
        ..Config::default()
    };
    let mut router = InputRouter::from_config(&config, Box::new(NoWarp));
    assert!(mice_intercepted());
    router.peripheral_mut().init(1);
    assert_eq!(router.peripheral().info().ownership, Ownership::SystemOwned);
    set_mice_intercepted(false);
}
