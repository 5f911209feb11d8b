//! Typed broadcast channels.
//!
//! A [`Channel`] holds an ordered list of subscriber callbacks for one value
//! type and broadcasts published values to all of them, synchronously, in
//! registration order. It persists no value of its own.
//!
//! ## Composition
//!
//! A channel can feed further channels, forming notification pipelines:
//!
//! - [`Channel::derive`] forwards only values passing a predicate
//! - [`Channel::convert`] forwards a mapped value on every publish
//!
//! Both return full channels that can be derived/converted again, e.g.
//! "publish only on a win, then replace the payload with the win counter".
//!
//! ## Dispatch rules
//!
//! Publishing snapshots the subscriber list before iterating, so a callback
//! may register new subscribers (they take effect from the next publish).
//! Channels are single-threaded (`Rc`-based) and meant to live for the
//! process lifetime.
//!
//! ```
//! use craps_engine::observer::Channel;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let numbers: Channel<i64> = Channel::new();
//! let even_squares = numbers.derive(|n| n % 2 == 0).convert(|n| n * n);
//!
//! let seen = Rc::new(Cell::new(0));
//! let sink = Rc::clone(&seen);
//! even_squares.subscribe(move |n| sink.set(*n));
//!
//! numbers.publish(&3); // filtered out
//! numbers.publish(&4);
//! assert_eq!(seen.get(), 16);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// A typed synchronous broadcast channel.
///
/// Cloning a `Channel` produces another handle to the same subscriber list.
pub struct Channel<T> {
    subscribers: Rc<RefCell<Vec<Subscriber<T>>>>,
}

impl<T: 'static> Channel<T> {
    /// Create a channel with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Register a callback, invoked on every subsequent publish.
    ///
    /// Callbacks run in registration order and must not mutate the state
    /// that feeds this channel; see the module docs for dispatch rules.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Broadcast a value to every subscriber, in registration order.
    ///
    /// Returns only after all callbacks (including those of derived and
    /// converted channels) have completed.
    pub fn publish(&self, value: &T) {
        // Snapshot so a callback subscribing mid-publish cannot invalidate
        // the iteration.
        let snapshot: Vec<Subscriber<T>> = self.subscribers.borrow().clone();
        for subscriber in snapshot {
            subscriber(value);
        }
    }

    /// Number of directly registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Create a channel receiving only values that satisfy the predicate.
    ///
    /// The predicate is re-evaluated on every publish of this channel.
    #[must_use]
    pub fn derive(&self, predicate: impl Fn(&T) -> bool + 'static) -> Channel<T> {
        let child = Channel::new();
        let downstream = child.clone();
        self.subscribe(move |value| {
            if predicate(value) {
                downstream.publish(value);
            }
        });
        child
    }

    /// Create a channel receiving the mapped value on every publish.
    #[must_use]
    pub fn convert<U: 'static>(&self, map: impl Fn(&T) -> U + 'static) -> Channel<U> {
        let child = Channel::new();
        let downstream = child.clone();
        self.subscribe(move |value| {
            downstream.publish(&map(value));
        });
        child
    }
}

impl<T: 'static> Default for Channel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

impl<T> std::fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}
