use std::fmt;
use std::rc::Rc;

use log::{debug, warn};

use super::{ControllerError, Subscription};

/// Source of repeating timer callbacks.
///
/// Returns `None` when no timer is available in the current environment.
pub trait Scheduler {
    fn every(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> Option<Subscription>;
}

/// A tick posted by the timer that `Rotation::start` registered. Ticks carry
/// the epoch of their timer so that ticks queued before a `stop` or a restart
/// are recognised as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationTick {
    epoch: u64,
}

/// Cycles an active index through `[0, len)`.
///
/// Any manual move (`select`, `next`, `previous`) stops auto-advance for good;
/// only another `start` turns it back on.
pub struct Rotation {
    len: usize,
    active: usize,
    auto_advance: bool,
    epoch: u64,
    timer: Option<Subscription>,
    scheduler: Rc<dyn Scheduler>,
}

impl Rotation {
    pub fn new(len: usize, scheduler: Rc<dyn Scheduler>) -> Result<Self, ControllerError> {
        if len == 0 {
            return Err(ControllerError::EmptyCollection);
        }
        Ok(Self {
            len,
            active: 0,
            auto_advance: false,
            epoch: 0,
            timer: None,
            scheduler,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: empty rotations are rejected by `new`.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance
    }

    pub fn start(&mut self, interval_ms: u32, notify: impl Fn(RotationTick) + 'static) {
        self.halt();

        let tick = RotationTick { epoch: self.epoch };
        match self
            .scheduler
            .every(interval_ms, Box::new(move || notify(tick)))
        {
            Some(timer) => {
                debug!("Rotation started, every {}ms over {} items", interval_ms, self.len);
                self.timer = Some(timer);
                self.auto_advance = true;
            }
            None => warn!("No timer available, rotation stays manual"),
        }
    }

    pub fn stop(&mut self) {
        self.halt();
    }

    /// Applies a timer tick. Returns whether the active index moved.
    pub fn tick(&mut self, tick: RotationTick) -> bool {
        if !self.auto_advance || tick.epoch != self.epoch {
            return false;
        }
        self.active = (self.active + 1) % self.len;
        true
    }

    pub fn select(&mut self, index: usize) -> Result<(), ControllerError> {
        if index >= self.len {
            let err = ControllerError::IndexOutOfRange {
                index,
                len: self.len,
            };
            warn!("Rejecting selection: {}", err);
            return Err(err);
        }
        self.halt();
        self.active = index;
        Ok(())
    }

    pub fn next(&mut self) {
        self.halt();
        self.active = (self.active + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.halt();
        self.active = (self.active + self.len - 1) % self.len;
    }

    fn halt(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        self.auto_advance = false;
        self.epoch = self.epoch.wrapping_add(1);
    }
}

impl fmt::Debug for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rotation")
            .field("len", &self.len)
            .field("active", &self.active)
            .field("auto_advance", &self.auto_advance)
            .field("epoch", &self.epoch)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    type Timer = (Rc<Cell<bool>>, Box<dyn FnMut()>);

    /// Hand-driven timer: `fire` runs every live callback once.
    #[derive(Default)]
    struct ManualScheduler {
        timers: RefCell<Vec<Timer>>,
    }

    impl ManualScheduler {
        fn fire(&self) {
            for (live, tick) in self.timers.borrow_mut().iter_mut() {
                if live.get() {
                    tick();
                }
            }
        }

        fn live_timers(&self) -> usize {
            self.timers.borrow().iter().filter(|(live, _)| live.get()).count()
        }
    }

    impl Scheduler for ManualScheduler {
        fn every(&self, _interval_ms: u32, tick: Box<dyn FnMut()>) -> Option<Subscription> {
            let live = Rc::new(Cell::new(true));
            self.timers.borrow_mut().push((live.clone(), tick));
            Some(Subscription::new(move || live.set(false)))
        }
    }

    struct NoTimers;

    impl Scheduler for NoTimers {
        fn every(&self, _interval_ms: u32, _tick: Box<dyn FnMut()>) -> Option<Subscription> {
            None
        }
    }

    struct Harness {
        scheduler: Rc<ManualScheduler>,
        queue: Rc<RefCell<VecDeque<RotationTick>>>,
        rotation: Rotation,
    }

    impl Harness {
        fn new(len: usize) -> Self {
            let scheduler = Rc::new(ManualScheduler::default());
            let rotation = Rotation::new(len, scheduler.clone()).unwrap();
            Self {
                scheduler,
                queue: Rc::new(RefCell::new(VecDeque::new())),
                rotation,
            }
        }

        fn start(&mut self) {
            let queue = self.queue.clone();
            self.rotation
                .start(5000, move |tick| queue.borrow_mut().push_back(tick));
        }

        /// Fires the timers and delivers the resulting ticks.
        fn elapse(&mut self) {
            self.scheduler.fire();
            self.deliver();
        }

        fn deliver(&mut self) {
            while let Some(tick) = self.queue.borrow_mut().pop_front() {
                self.rotation.tick(tick);
            }
        }
    }

    #[test]
    fn empty_collection_is_rejected() {
        let err = Rotation::new(0, Rc::new(ManualScheduler::default())).unwrap_err();
        assert_eq!(err, ControllerError::EmptyCollection);

        let single = Rotation::new(1, Rc::new(ManualScheduler::default())).unwrap();
        assert_eq!(single.len(), 1);
        assert!(!single.is_empty());
    }

    #[test]
    fn manual_select_freezes_auto_advance() {
        let mut h = Harness::new(5);
        h.start();
        h.elapse();
        assert_eq!(h.rotation.active(), 1);

        h.rotation.select(3).unwrap();
        for _ in 0..10 {
            h.elapse();
        }
        assert_eq!(h.rotation.active(), 3);
        assert!(!h.rotation.is_auto_advancing());
        assert_eq!(h.scheduler.live_timers(), 0);
    }

    #[test]
    fn auto_advance_wraps_around() {
        let mut h = Harness::new(3);
        h.start();
        for _ in 0..4 {
            h.elapse();
        }
        assert_eq!(h.rotation.active(), 1);
    }

    #[test]
    fn out_of_range_select_is_rejected_without_side_effects() {
        let mut h = Harness::new(4);
        h.start();
        h.elapse();

        let err = h.rotation.select(4).unwrap_err();
        assert_eq!(err, ControllerError::IndexOutOfRange { index: 4, len: 4 });
        assert_eq!(h.rotation.active(), 1);
        assert!(h.rotation.is_auto_advancing());

        h.elapse();
        assert_eq!(h.rotation.active(), 2);
    }

    #[test]
    fn next_and_previous_cycle_back_to_start() {
        for len in 1..=6 {
            let mut h = Harness::new(len);
            h.rotation.select(len / 2).unwrap();
            let start = h.rotation.active();
            for _ in 0..len {
                h.rotation.next();
            }
            assert_eq!(h.rotation.active(), start);
            for _ in 0..len {
                h.rotation.previous();
            }
            assert_eq!(h.rotation.active(), start);
        }
    }

    #[test]
    fn manual_steps_disable_ticks_until_restart() {
        let mut h = Harness::new(5);
        h.start();
        h.rotation.next();
        h.elapse();
        assert_eq!(h.rotation.active(), 1);

        h.rotation.previous();
        h.elapse();
        assert_eq!(h.rotation.active(), 0);

        h.start();
        h.elapse();
        assert_eq!(h.rotation.active(), 1);
    }

    #[test]
    fn restarting_keeps_a_single_timer() {
        let mut h = Harness::new(5);
        h.start();
        h.start();
        h.start();
        assert_eq!(h.scheduler.live_timers(), 1);

        h.elapse();
        assert_eq!(h.rotation.active(), 1);
    }

    #[test]
    fn ticks_queued_before_stop_are_ignored() {
        let mut h = Harness::new(5);
        h.start();
        h.scheduler.fire();
        h.rotation.stop();
        h.deliver();
        assert_eq!(h.rotation.active(), 0);
        assert_eq!(h.scheduler.live_timers(), 0);
    }

    #[test]
    fn ticks_from_a_replaced_timer_are_ignored() {
        let mut h = Harness::new(5);
        h.start();
        h.scheduler.fire();
        h.start();
        h.deliver();
        assert_eq!(h.rotation.active(), 0);

        h.elapse();
        assert_eq!(h.rotation.active(), 1);
    }

    #[test]
    fn stop_keeps_the_current_index() {
        let mut h = Harness::new(5);
        h.start();
        h.elapse();
        h.elapse();
        h.rotation.stop();
        h.elapse();
        assert_eq!(h.rotation.active(), 2);
    }

    #[test]
    fn missing_timer_leaves_manual_controls_working() {
        let mut rotation = Rotation::new(3, Rc::new(NoTimers)).unwrap();
        rotation.start(5000, |_| {});
        assert!(!rotation.is_auto_advancing());
        rotation.next();
        rotation.next();
        assert_eq!(rotation.active(), 2);
        rotation.select(0).unwrap();
        assert_eq!(rotation.active(), 0);
    }

    #[test]
    fn index_stays_in_range_under_mixed_operations() {
        for len in 1..=7 {
            let mut h = Harness::new(len);
            let mut seed: u32 = 0x2545_f491 ^ len as u32;
            for _ in 0..300 {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                match (seed >> 16) % 7 {
                    0 => h.start(),
                    1 => h.rotation.stop(),
                    2 => {
                        let _ = h.rotation.select((seed >> 8) as usize % (len + 2));
                    }
                    3 => h.rotation.next(),
                    4 => h.rotation.previous(),
                    5 => h.elapse(),
                    _ => h.scheduler.fire(),
                }
                h.deliver();
                assert!(h.rotation.active() < len);
                assert!(h.scheduler.live_timers() <= 1);
            }
        }
    }
}
