use starfield_core::{DriverState, FrameDriver, Starfield, StarfieldConfig, TickSource};
use std::cell::Cell;
use std::rc::Rc;

/// Counting tick source standing in for the host clock. `pending` mirrors
/// the host-side callback handle so double-arm/double-cancel bugs panic.
#[derive(Clone, Default)]
struct MockTicker {
    arms: Rc<Cell<usize>>,
    cancels: Rc<Cell<usize>>,
    pending: Rc<Cell<bool>>,
}

impl TickSource for MockTicker {
    fn arm(&mut self) {
        assert!(!self.pending.get(), "tick source armed twice");
        self.pending.set(true);
        self.arms.set(self.arms.get() + 1);
    }

    fn cancel(&mut self) {
        assert!(self.pending.get(), "cancel without a pending tick");
        self.pending.set(false);
        self.cancels.set(self.cancels.get() + 1);
    }
}

fn make_driver() -> (FrameDriver<MockTicker>, MockTicker) {
    let ticker = MockTicker::default();
    let handle = ticker.clone();
    let field = Starfield::new(
        StarfieldConfig {
            line_count: 4,
            star_count: 4,
            ..Default::default()
        },
        42,
    );
    (FrameDriver::new(field, ticker), handle)
}

/// The host callback clears its pending handle before dispatching.
fn fire(driver: &mut FrameDriver<MockTicker>, ticker: &MockTicker, dt: f32) -> bool {
    ticker.pending.set(false);
    driver.on_tick(dt)
}

#[test]
fn pause_twice_cancels_exactly_once() {
    let (mut driver, ticker) = make_driver();
    driver.start();
    assert_eq!(ticker.arms.get(), 1);

    driver.pause();
    driver.pause();
    assert_eq!(driver.state(), DriverState::Paused);
    assert_eq!(ticker.cancels.get(), 1);
    assert!(!driver.is_armed());
}

#[test]
fn resume_twice_leaves_exactly_one_active_callback() {
    let (mut driver, ticker) = make_driver();
    driver.start();
    driver.pause();

    driver.resume();
    driver.resume();
    assert_eq!(driver.state(), DriverState::Running);
    assert!(driver.is_armed());
    assert!(ticker.pending.get());
    assert_eq!(ticker.arms.get(), 2);
}

#[test]
fn tick_advances_the_field_and_rearms() {
    let (mut driver, ticker) = make_driver();
    driver.start();

    let before = driver.field.elapsed;
    assert!(fire(&mut driver, &ticker, 1.0 / 60.0));
    assert!(driver.field.elapsed > before);
    assert_eq!(ticker.arms.get(), 2);
    assert!(driver.is_armed());
}

#[test]
fn tick_while_paused_is_dropped() {
    let (mut driver, ticker) = make_driver();
    driver.start();
    driver.pause();

    let before = driver.field.elapsed;
    assert!(!fire(&mut driver, &ticker, 1.0 / 60.0));
    assert_eq!(driver.field.elapsed, before);
    assert_eq!(ticker.arms.get(), 1);
}

#[test]
fn dispose_is_idempotent() {
    let (mut driver, ticker) = make_driver();
    driver.start();

    driver.dispose();
    driver.dispose();
    assert!(driver.is_disposed());
    assert_eq!(ticker.cancels.get(), 1);

    // A disposed driver ignores every transition.
    driver.resume();
    assert_eq!(ticker.arms.get(), 1);
    assert!(!fire(&mut driver, &ticker, 1.0 / 60.0));
}
