pub mod dom;
pub mod lazy_image;
pub mod reveal;

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin_px: i32,
}

impl ObserverOptions {
    pub fn root_margin(&self) -> String {
        format!("{}px", self.root_margin_px)
    }

    /// `isIntersecting` is true for any overlap, so the ratio must also reach
    /// the threshold before a change counts.
    pub fn is_met_by<E>(&self, change: &VisibilityChange<E>) -> bool {
        change.is_intersecting && change.ratio >= self.threshold
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityChange<E> {
    pub target: E,
    pub is_intersecting: bool,
    pub ratio: f64,
}

pub trait VisibilityNotifier<E> {
    fn observe(&self, target: &E);
    fn unobserve(&self, target: &E);
}

pub trait ElementHandle: Clone + PartialEq + 'static {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    /// Runs `callback` the first time the element fires its `load` event.
    fn on_load_once(&self, callback: Box<dyn FnOnce()>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Pending,
    Settled,
}

struct Watched<E> {
    element: E,
    state: WatchState,
}

pub struct ViewportTrigger<E, N> {
    notifier: N,
    options: ObserverOptions,
    settle: Box<dyn FnMut(&E)>,
    watched: Vec<Watched<E>>,
}

impl<E, N> ViewportTrigger<E, N>
where
    E: PartialEq,
    N: VisibilityNotifier<E>,
{
    pub fn new(notifier: N, options: ObserverOptions, settle: impl FnMut(&E) + 'static) -> Self {
        Self {
            notifier,
            options,
            settle: Box::new(settle),
            watched: Vec::new(),
        }
    }

    pub fn arm(&mut self, element: E) -> bool {
        self.arm_with(element, |_| {})
    }

    /// Like [`arm`](Self::arm), running `prepare` on the element before the
    /// notifier learns about it.
    pub fn arm_with(&mut self, element: E, prepare: impl FnOnce(&E)) -> bool {
        if self.state_of(&element).is_some() {
            return false;
        }
        prepare(&element);
        self.notifier.observe(&element);
        self.watched.push(Watched {
            element,
            state: WatchState::Pending,
        });
        true
    }

    pub fn arm_all(&mut self, elements: impl IntoIterator<Item = E>) -> usize {
        let mut armed = 0;
        for element in elements {
            if self.arm(element) {
                armed += 1;
            }
        }
        armed
    }

    pub fn handle(&mut self, change: &VisibilityChange<E>) -> bool {
        if !self.options.is_met_by(change) {
            return false;
        }
        let Some(watched) = self
            .watched
            .iter_mut()
            .find(|watched| watched.element == change.target)
        else {
            return false;
        };
        if watched.state == WatchState::Settled {
            return false;
        }
        watched.state = WatchState::Settled;
        (self.settle)(&watched.element);
        self.notifier.unobserve(&watched.element);
        debug!("viewport trigger settled at ratio {:.2}", change.ratio);
        true
    }

    pub fn state_of(&self, element: &E) -> Option<WatchState> {
        self.watched
            .iter()
            .find(|watched| &watched.element == element)
            .map(|watched| watched.state)
    }

    pub fn pending(&self) -> usize {
        self.watched
            .iter()
            .filter(|watched| watched.state == WatchState::Pending)
            .count()
    }
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::testing::{Call, FakeElement, RecordingNotifier};
    use super::*;

    fn counting_trigger(
        threshold: f64,
    ) -> (ViewportTrigger<FakeElement, RecordingNotifier>, RecordingNotifier, Rc<Cell<u32>>) {
        let notifier = RecordingNotifier::default();
        let settled = Rc::new(Cell::new(0));
        let counter = settled.clone();
        let trigger = ViewportTrigger::new(
            notifier.clone(),
            ObserverOptions {
                threshold,
                root_margin_px: 0,
            },
            move |_: &FakeElement| counter.set(counter.get() + 1),
        );
        (trigger, notifier, settled)
    }

    #[test]
    fn below_threshold_stays_pending() {
        let (mut trigger, notifier, settled) = counting_trigger(0.15);
        let section = FakeElement::default();
        trigger.arm(section.clone());

        assert!(!trigger.handle(&section.seen(0.10)));
        assert_eq!(trigger.state_of(&section), Some(WatchState::Pending));
        assert_eq!(settled.get(), 0);
        assert_eq!(notifier.calls(), vec![Call::Observe]);
    }

    #[test]
    fn settles_exactly_once_and_unobserves() {
        let (mut trigger, notifier, settled) = counting_trigger(0.15);
        let section = FakeElement::default();
        trigger.arm(section.clone());

        assert!(trigger.handle(&section.seen(0.20)));
        assert!(!trigger.handle(&section.seen(0.50)));
        assert!(!trigger.handle(&section.seen(1.0)));

        assert_eq!(settled.get(), 1);
        assert_eq!(trigger.state_of(&section), Some(WatchState::Settled));
        assert_eq!(notifier.calls(), vec![Call::Observe, Call::Unobserve]);
    }

    #[test]
    fn not_intersecting_is_ignored_even_with_ratio() {
        let (mut trigger, _, settled) = counting_trigger(0.0);
        let image = FakeElement::default();
        trigger.arm(image.clone());

        let change = VisibilityChange {
            target: image.clone(),
            is_intersecting: false,
            ratio: 0.0,
        };
        assert!(!trigger.handle(&change));
        assert_eq!(settled.get(), 0);
    }

    #[test]
    fn zero_threshold_settles_on_edge_contact() {
        let (mut trigger, _, settled) = counting_trigger(0.0);
        let image = FakeElement::default();
        trigger.arm(image.clone());

        let change = VisibilityChange {
            target: image,
            is_intersecting: true,
            ratio: 0.0,
        };
        assert!(trigger.handle(&change));
        assert_eq!(settled.get(), 1);
    }

    #[test]
    fn unknown_target_is_ignored() {
        let (mut trigger, notifier, settled) = counting_trigger(0.0);
        trigger.arm(FakeElement::default());

        assert!(!trigger.handle(&FakeElement::default().seen(1.0)));
        assert_eq!(settled.get(), 0);
        assert_eq!(notifier.count(Call::Unobserve), 0);
    }

    #[test]
    fn elements_settle_independently_in_any_order() {
        let (mut trigger, _, settled) = counting_trigger(0.15);
        let elements: Vec<FakeElement> = (0..3).map(|_| FakeElement::default()).collect();
        assert_eq!(trigger.arm_all(elements.clone()), 3);

        trigger.handle(&elements[2].seen(0.3));
        trigger.handle(&elements[0].seen(0.3));
        assert_eq!(trigger.pending(), 1);
        assert_eq!(trigger.state_of(&elements[1]), Some(WatchState::Pending));
        assert_eq!(settled.get(), 2);
    }

    #[test]
    fn arming_twice_is_a_no_op() {
        let (mut trigger, notifier, _) = counting_trigger(0.0);
        let section = FakeElement::default();
        let prepared = Cell::new(0);

        assert!(trigger.arm_with(section.clone(), |_| prepared.set(prepared.get() + 1)));
        assert!(!trigger.arm_with(section.clone(), |_| prepared.set(prepared.get() + 1)));
        trigger.handle(&section.seen(1.0));
        assert!(!trigger.arm(section));

        assert_eq!(prepared.get(), 1);
        assert_eq!(notifier.count(Call::Observe), 1);
    }

    #[test]
    fn root_margin_renders_in_pixels() {
        let options = ObserverOptions {
            threshold: 0.0,
            root_margin_px: -90,
        };
        assert_eq!(options.root_margin(), "-90px");
    }
}
