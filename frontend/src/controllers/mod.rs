//! View-state controllers shared by the page sections.
//!
//! Each controller is owned by exactly one section component. Timer ticks and
//! viewport intersections reach a controller as component messages, so every
//! transition is applied inside a single `update` call.

use std::fmt;

use thiserror::Error;

pub mod browser;
pub mod count_up;
pub mod disclosure;
pub mod reveal;
pub mod rotation;

pub use browser::{BrowserScheduler, BrowserViewport};
pub use count_up::CountUp;
pub use disclosure::Disclosure;
pub use reveal::{Intersection, Reveal, RevealOptions, Viewport};
pub use rotation::{Rotation, RotationTick, Scheduler};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("unknown item `{0}`")]
    UnknownItem(String),
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cannot rotate through an empty collection")]
    EmptyCollection,
}

/// A registered timer or observer. Releasing it (explicitly or by dropping)
/// guarantees the underlying callback is detached.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("live", &self.release.is_some())
            .finish()
    }
}
