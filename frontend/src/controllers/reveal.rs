use std::collections::{HashMap, HashSet};

use log::{debug, info};

use super::Subscription;

/// Slack for ratios reported a sub-pixel short of the threshold they crossed.
const RATIO_TOLERANCE: f64 = 1e-3;

/// When a watched element counts as seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element's area that must be inside the viewport.
    pub threshold: f64,
    /// Offset applied to the bottom edge of the viewport, in pixels. Negative
    /// values shrink the viewport so elements reveal a little later.
    pub margin_offset_px: i32,
}

impl RevealOptions {
    pub fn new(threshold: f64, margin_offset_px: i32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            margin_offset_px,
        }
    }

    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.margin_offset_px)
    }
}

/// A visibility change reported for a watched element.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub id: String,
    pub ratio: f64,
    pub is_intersecting: bool,
}

/// Reports how much of an element lies inside the viewport.
///
/// `observe` returns `None` when intersection reporting is unavailable.
pub trait Viewport {
    type Target;

    fn observe(
        &self,
        target: &Self::Target,
        options: RevealOptions,
        on_change: Box<dyn FnMut(f64, bool)>,
    ) -> Option<Subscription>;
}

struct Watch {
    options: RevealOptions,
    _subscription: Subscription,
}

/// One-shot "has been seen" flags for a set of elements.
pub struct Reveal<V: Viewport> {
    viewport: V,
    revealed: HashSet<String>,
    watching: HashMap<String, Watch>,
}

impl<V: Viewport> Reveal<V> {
    pub fn new(viewport: V) -> Self {
        Self {
            viewport,
            revealed: HashSet::new(),
            watching: HashMap::new(),
        }
    }

    pub fn watch(
        &mut self,
        id: impl Into<String>,
        target: &V::Target,
        options: RevealOptions,
        notify: impl Fn(Intersection) + 'static,
    ) {
        let id = id.into();
        if self.revealed.contains(&id) {
            return;
        }

        let reported = id.clone();
        let on_change = Box::new(move |ratio: f64, is_intersecting: bool| {
            notify(Intersection {
                id: reported.clone(),
                ratio,
                is_intersecting,
            })
        });

        match self.viewport.observe(target, options, on_change) {
            Some(subscription) => {
                debug!("Watching {} at threshold {}", id, options.threshold);
                self.watching.insert(
                    id,
                    Watch {
                        options,
                        _subscription: subscription,
                    },
                );
            }
            None => {
                info!("Viewport observer unavailable, revealing {} immediately", id);
                self.watching.remove(&id);
                self.revealed.insert(id);
            }
        }
    }

    /// Applies an intersection report. Returns whether `id` was newly revealed.
    pub fn on_intersection(&mut self, event: Intersection) -> bool {
        let Some(watch) = self.watching.get(&event.id) else {
            return false;
        };
        if !event.is_intersecting || event.ratio + RATIO_TOLERANCE < watch.options.threshold {
            return false;
        }

        self.watching.remove(&event.id);
        debug!("Revealed {}", event.id);
        self.revealed.insert(event.id)
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn is_watching(&self, id: &str) -> bool {
        self.watching.contains_key(id)
    }

    pub fn unwatch_all(&mut self) {
        self.watching.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;

    type Observer = (Rc<Cell<bool>>, Box<dyn FnMut(f64, bool)>);

    /// Each observed element is identified by its position in `observers`.
    #[derive(Clone, Default)]
    struct ManualViewport {
        observers: Rc<RefCell<Vec<Observer>>>,
    }

    impl ManualViewport {
        fn report(&self, element: usize, ratio: f64, is_intersecting: bool) {
            let mut observers = self.observers.borrow_mut();
            let (live, on_change) = &mut observers[element];
            if live.get() {
                on_change(ratio, is_intersecting);
            }
        }

        fn live_observers(&self) -> usize {
            self.observers
                .borrow()
                .iter()
                .filter(|(live, _)| live.get())
                .count()
        }
    }

    impl Viewport for ManualViewport {
        type Target = ();

        fn observe(
            &self,
            _target: &(),
            _options: RevealOptions,
            on_change: Box<dyn FnMut(f64, bool)>,
        ) -> Option<Subscription> {
            let live = Rc::new(Cell::new(true));
            self.observers.borrow_mut().push((live.clone(), on_change));
            Some(Subscription::new(move || live.set(false)))
        }
    }

    struct Unavailable;

    impl Viewport for Unavailable {
        type Target = ();

        fn observe(
            &self,
            _target: &(),
            _options: RevealOptions,
            _on_change: Box<dyn FnMut(f64, bool)>,
        ) -> Option<Subscription> {
            None
        }
    }

    type Queue = Rc<RefCell<VecDeque<Intersection>>>;

    fn sink(queue: &Queue) -> impl Fn(Intersection) + 'static {
        let queue = queue.clone();
        move |event| queue.borrow_mut().push_back(event)
    }

    fn drain<V: Viewport>(reveal: &mut Reveal<V>, queue: &Queue) -> Vec<String> {
        let mut newly = Vec::new();
        while let Some(event) = queue.borrow_mut().pop_front() {
            let id = event.id.clone();
            if reveal.on_intersection(event) {
                newly.push(id);
            }
        }
        newly
    }

    #[test]
    fn root_margin_uses_bottom_offset() {
        assert_eq!(RevealOptions::new(0.2, -50).root_margin(), "0px 0px -50px 0px");
        assert_eq!(RevealOptions::new(1.5, 0).threshold, 1.0);
    }

    #[test]
    fn reveals_once_and_stops_observing() {
        let viewport = ManualViewport::default();
        let queue = Queue::default();
        let mut reveal = Reveal::new(viewport.clone());

        reveal.watch("header", &(), RevealOptions::new(0.2, -50), sink(&queue));
        assert!(!reveal.is_revealed("header"));
        assert_eq!(viewport.live_observers(), 1);

        viewport.report(0, 0.5, true);
        assert_eq!(drain(&mut reveal, &queue), vec!["header".to_string()]);
        assert!(reveal.is_revealed("header"));
        assert_eq!(viewport.live_observers(), 0);

        viewport.report(0, 0.9, true);
        assert!(drain(&mut reveal, &queue).is_empty());
    }

    #[test]
    fn below_threshold_or_leaving_does_not_reveal() {
        let viewport = ManualViewport::default();
        let queue = Queue::default();
        let mut reveal = Reveal::new(viewport.clone());
        reveal.watch("step-0", &(), RevealOptions::new(0.3, 0), sink(&queue));

        viewport.report(0, 0.1, true);
        viewport.report(0, 0.0, false);
        assert!(drain(&mut reveal, &queue).is_empty());
        assert!(!reveal.is_revealed("step-0"));
        assert!(reveal.is_watching("step-0"));

        viewport.report(0, 0.3, true);
        drain(&mut reveal, &queue);
        assert!(reveal.is_revealed("step-0"));
    }

    #[test]
    fn ratio_rounded_just_below_threshold_still_reveals() {
        let viewport = ManualViewport::default();
        let queue = Queue::default();
        let mut reveal = Reveal::new(viewport.clone());
        reveal.watch("result", &(), RevealOptions::new(0.2, -50), sink(&queue));
        reveal.watch("bonus", &(), RevealOptions::new(0.2, -50), sink(&queue));

        viewport.report(0, 0.1995, true);
        viewport.report(1, 0.19, true);
        assert_eq!(drain(&mut reveal, &queue), vec!["result".to_string()]);
        assert!(!reveal.is_revealed("bonus"));
    }

    #[test]
    fn revealed_stays_revealed() {
        let viewport = ManualViewport::default();
        let queue = Queue::default();
        let mut reveal = Reveal::new(viewport.clone());
        reveal.watch("bonus", &(), RevealOptions::new(0.2, 0), sink(&queue));
        viewport.report(0, 1.0, true);
        drain(&mut reveal, &queue);

        reveal.unwatch_all();
        reveal.watch("bonus", &(), RevealOptions::new(0.2, 0), sink(&queue));
        reveal.on_intersection(Intersection {
            id: "bonus".into(),
            ratio: 0.0,
            is_intersecting: false,
        });
        assert!(reveal.is_revealed("bonus"));
        assert_eq!(viewport.live_observers(), 0);
    }

    #[test]
    fn unavailable_viewport_reveals_immediately() {
        let mut reveal = Reveal::new(Unavailable);
        reveal.watch("x", &(), RevealOptions::new(0.2, 0), |_| {});
        assert!(reveal.is_revealed("x"));
        assert!(!reveal.is_watching("x"));
    }

    #[test]
    fn unwatch_all_releases_observers_and_ignores_late_events() {
        let viewport = ManualViewport::default();
        let queue = Queue::default();
        let mut reveal = Reveal::new(viewport.clone());
        reveal.watch("a", &(), RevealOptions::new(0.2, 0), sink(&queue));
        reveal.watch("b", &(), RevealOptions::new(0.2, 0), sink(&queue));

        viewport.report(1, 0.8, true);
        reveal.unwatch_all();
        assert_eq!(viewport.live_observers(), 0);

        assert!(drain(&mut reveal, &queue).is_empty());
        assert!(!reveal.is_revealed("a"));
        assert!(!reveal.is_revealed("b"));
    }

    #[test]
    fn rewatching_replaces_the_previous_observer() {
        let viewport = ManualViewport::default();
        let queue = Queue::default();
        let mut reveal = Reveal::new(viewport.clone());
        reveal.watch("card", &(), RevealOptions::new(0.2, 0), sink(&queue));
        reveal.watch("card", &(), RevealOptions::new(0.2, 0), sink(&queue));
        assert_eq!(viewport.live_observers(), 1);
    }
}
