//! Game lifecycle events and subscriptions.
//!
//! Publishers push events into every live subscription's queue; subscribers
//! drain their queue on the simulation thread. Dropping a [`Subscription`]
//! unsubscribes it, so a component's event lifetime is tied to the handle it
//! owns.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

/// Lifecycle events relevant to collectables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A new wave begins, carrying the difficulty it adds.
    WaveStarted { wave: u32, difficulty_delta: f32 },
    /// A room scan finished loading.
    RoomReady,
    /// The current room was torn down.
    RoomRemoved,
}

type Queue = Rc<RefCell<VecDeque<GameEvent>>>;

/// Fan-out point for [`GameEvent`]s.
#[derive(Debug, Default)]
pub struct EventHub {
    subscribers: RefCell<Vec<Weak<RefCell<VecDeque<GameEvent>>>>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener. Events published from now on are queued for it
    /// until the returned handle is dropped.
    pub fn subscribe(&self) -> Subscription {
        let queue: Queue = Rc::new(RefCell::new(VecDeque::new()));
        self.subscribers.borrow_mut().push(Rc::downgrade(&queue));
        Subscription { queue }
    }

    /// Queue `event` for every live subscriber. Dropped subscribers are pruned.
    pub fn publish(&self, event: GameEvent) {
        self.subscribers.borrow_mut().retain(|weak| match weak.upgrade() {
            Some(queue) => {
                queue.borrow_mut().push_back(event);
                true
            }
            None => false,
        });
    }

    /// Number of subscriptions still alive.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

/// Scoped subscription handle; unsubscribes on drop.
#[derive(Debug)]
pub struct Subscription {
    queue: Queue,
}

impl Subscription {
    /// Take every event queued so far, oldest first.
    pub fn drain(&self) -> Vec<GameEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}
