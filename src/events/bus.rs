//! Typed synchronous publish-subscribe.
//!
//! An `EventBus<E>` delivers each published event to every registered
//! handler, in subscription order, before `publish` returns. There is no
//! queue and no deferral; delivery is a direct call on the publisher's
//! stack, which is what keeps game-state mutation synchronous with the drop
//! event that caused it.

/// A synchronous event channel for one event type.
///
/// ## Example
///
/// ```
/// use doomtable::events::EventBus;
/// use std::{cell::RefCell, rc::Rc};
///
/// let mut bus: EventBus<u32> = EventBus::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = Rc::clone(&seen);
/// bus.subscribe(move |n| sink.borrow_mut().push(*n));
///
/// bus.publish(&7);
/// assert_eq!(*seen.borrow(), vec![7]);
/// ```
pub struct EventBus<E> {
    handlers: Vec<Box<dyn FnMut(&E)>>,
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<E> std::fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl<E> EventBus<E> {
    /// Create a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Handlers stay subscribed for the bus lifetime.
    pub fn subscribe(&mut self, handler: impl FnMut(&E) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Deliver an event to every handler, in subscription order.
    pub fn publish(&mut self, event: &E) {
        for handler in &mut self.handlers {
            handler(event);
        }
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}
