//! Container size observation.
//!
//! A [`SizeObserver`] keeps at most one live subscription per target and
//! delivers every size change to it synchronously. Dropping the returned
//! [`Subscription`] detaches the handler exactly once.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use chartkit_common::canvas::ContainerSize;
use chartkit_text::measurement::TextMeasurer;

use crate::chart::Chart;
use crate::error::{ChartError, ObserverError};
use crate::layout::ChartLayout;

/// Identifies an observed container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u64);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

type SizeHandler = Box<dyn FnMut(ContainerSize)>;

struct Entry {
    id: u64,
    size: ContainerSize,
    // Taken out while the handler runs so it may unsubscribe itself
    handler: Option<SizeHandler>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: HashMap<TargetId, Entry>,
}

#[derive(Clone, Default)]
pub struct SizeObserver {
    registry: Rc<RefCell<Registry>>,
}

impl SizeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler` to `target`. The handler sees every later call to
    /// [`SizeObserver::resize`] for the target until the subscription drops.
    pub fn observe(
        &self,
        target: TargetId,
        handler: impl FnMut(ContainerSize) + 'static,
    ) -> Result<Subscription, ObserverError> {
        let mut registry = self.registry.borrow_mut();
        if registry.entries.contains_key(&target) {
            return Err(ObserverError::AlreadyObserved(target));
        }
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.insert(
            target,
            Entry {
                id,
                size: ContainerSize::unmeasured(),
                handler: Some(Box::new(handler)),
            },
        );
        log::debug!("observing {target} (subscription {id})");

        Ok(Subscription {
            registry: Rc::downgrade(&self.registry),
            target,
            id,
        })
    }

    /// Report a new content size for `target`. Returns whether a handler
    /// received it.
    pub fn resize(&self, target: TargetId, size: ContainerSize) -> bool {
        let (id, mut handler) = {
            let mut registry = self.registry.borrow_mut();
            let Some(entry) = registry.entries.get_mut(&target) else {
                return false;
            };
            entry.size = size;
            let Some(handler) = entry.handler.take() else {
                // Re-entrant resize from inside the handler
                return false;
            };
            (entry.id, handler)
        };

        handler(size);

        let detached = {
            let mut registry = self.registry.borrow_mut();
            match registry.entries.get_mut(&target) {
                Some(entry) if entry.id == id => {
                    entry.handler = Some(handler);
                    None
                }
                _ => Some(handler),
            }
        };
        // Dropped outside the borrow since it may own a subscription
        drop(detached);
        true
    }

    pub fn is_observed(&self, target: TargetId) -> bool {
        self.registry.borrow().entries.contains_key(&target)
    }

    pub fn subscription_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    /// Last size reported for `target`, unmeasured if none
    pub fn current_size(&self, target: TargetId) -> ContainerSize {
        self.registry
            .borrow()
            .entries
            .get(&target)
            .map(|entry| entry.size)
            .unwrap_or_default()
    }
}

/// Live attachment of a handler to a target. Unsubscribes on drop.
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    target: TargetId,
    id: u64,
}

impl Subscription {
    pub fn target(&self) -> TargetId {
        self.target
    }

    pub fn unsubscribe(self) {}
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("target", &self.target)
            .field("id", &self.id)
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let removed = {
            let mut registry = registry.borrow_mut();
            let owned = registry
                .entries
                .get(&self.target)
                .is_some_and(|entry| entry.id == self.id);
            if owned {
                registry.entries.remove(&self.target)
            } else {
                None
            }
        };
        if removed.is_some() {
            log::debug!("stopped observing {} (subscription {})", self.target, self.id);
        }
    }
}

struct MountState {
    chart: Chart,
    measurer: Arc<dyn TextMeasurer>,
    layout: ChartLayout,
}

impl MountState {
    fn relayout(&mut self, size: ContainerSize) -> Option<ChartLayout> {
        match self.chart.layout(size, self.measurer.as_ref()) {
            Ok(layout) => {
                self.layout = layout.clone();
                Some(layout)
            }
            Err(err) => {
                log::error!("layout at {}x{} failed: {err}", size.width, size.height);
                None
            }
        }
    }
}

/// A chart bound to an observed container. Every resize recomputes the
/// layout and hands it to the sink. Unmounting, or dropping, detaches from
/// the observer.
pub struct MountedChart {
    state: Rc<RefCell<MountState>>,
    subscription: Subscription,
}

impl MountedChart {
    /// Publish an initial layout for an unmeasured container, then follow
    /// `target`'s size
    pub fn mount(
        observer: &SizeObserver,
        target: TargetId,
        chart: Chart,
        measurer: Arc<dyn TextMeasurer>,
        sink: impl FnMut(&ChartLayout) + 'static,
    ) -> Result<Self, ChartError> {
        let initial = chart.layout(ContainerSize::unmeasured(), measurer.as_ref())?;
        let state = Rc::new(RefCell::new(MountState {
            chart,
            measurer,
            layout: initial.clone(),
        }));
        let sink = Rc::new(RefCell::new(sink));

        let subscription = {
            let state = Rc::downgrade(&state);
            let sink = sink.clone();
            observer.observe(target, move |size| {
                let Some(state) = state.upgrade() else {
                    return;
                };
                let layout = state.borrow_mut().relayout(size);
                if let Some(layout) = layout {
                    (*sink.borrow_mut())(&layout);
                }
            })?
        };

        (*sink.borrow_mut())(&initial);
        Ok(Self {
            state,
            subscription,
        })
    }

    pub fn target(&self) -> TargetId {
        self.subscription.target()
    }

    /// Most recently published layout
    pub fn layout(&self) -> ChartLayout {
        self.state.borrow().layout.clone()
    }

    pub fn unmount(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_delivers_until_dropped() {
        let observer = SizeObserver::new();
        let seen = Rc::new(RefCell::new(vec![]));
        let subscription = {
            let seen = seen.clone();
            observer
                .observe(TargetId(1), move |size| seen.borrow_mut().push(size))
                .unwrap()
        };

        assert!(observer.resize(TargetId(1), ContainerSize::new(100.0, 50.0)));
        assert_eq!(observer.current_size(TargetId(1)), ContainerSize::new(100.0, 50.0));
        drop(subscription);
        assert!(!observer.resize(TargetId(1), ContainerSize::new(200.0, 50.0)));
        assert_eq!(*seen.borrow(), vec![ContainerSize::new(100.0, 50.0)]);
        assert_eq!(observer.subscription_count(), 0);
    }

    #[test]
    fn test_second_subscription_rejected() {
        let observer = SizeObserver::new();
        let _first = observer.observe(TargetId(7), |_| {}).unwrap();
        let err = observer.observe(TargetId(7), |_| {}).unwrap_err();
        assert_eq!(err, ObserverError::AlreadyObserved(TargetId(7)));
        assert!(observer.observe(TargetId(8), |_| {}).is_ok());
    }

    #[test]
    fn test_handler_may_unsubscribe_itself() {
        let observer = SizeObserver::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));
        let subscription = {
            let slot = slot.clone();
            let calls = calls.clone();
            observer
                .observe(TargetId(3), move |_| {
                    calls.set(calls.get() + 1);
                    slot.borrow_mut().take();
                })
                .unwrap()
        };
        *slot.borrow_mut() = Some(subscription);

        assert!(observer.resize(TargetId(3), ContainerSize::new(10.0, 10.0)));
        assert!(!observer.is_observed(TargetId(3)));
        assert!(!observer.resize(TargetId(3), ContainerSize::new(20.0, 10.0)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_stale_subscription_leaves_new_one() {
        let observer = SizeObserver::new();
        let first = observer.observe(TargetId(2), |_| {}).unwrap();
        drop(first);
        let _second = observer.observe(TargetId(2), |_| {}).unwrap();
        assert!(observer.is_observed(TargetId(2)));
    }

    #[test]
    fn test_subscription_outlives_observer() {
        let subscription = {
            let observer = SizeObserver::new();
            observer.observe(TargetId(4), |_| {}).unwrap()
        };
        subscription.unsubscribe();
    }
}
