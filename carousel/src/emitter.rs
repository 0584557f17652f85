use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::{DragUpdate, SlideDirection};

/// Notifications published by a [`crate::Carousel`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarouselEvent {
    /// An animated slide change started toward `next_item`.
    SlideStartChange {
        next_item: usize,
        direction: SlideDirection,
    },
    /// An animated slide change finished on `current_item`.
    SlideChange {
        current_item: usize,
        direction: SlideDirection,
    },
    Drag(DragUpdate),
    LeftSwipe,
    RightSwipe,
    FullscreenChange {
        is_fullscreen: bool,
    },
}

/// A listener registered on an [`EventEmitter`].
pub type EventListener = Arc<dyn Fn(&CarouselEvent) + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriptionId(u64);

/// A per-instance observer list.
///
/// Delivery is synchronous and follows subscription order. Events emitted while nobody listens are
/// dropped.
#[derive(Clone, Default)]
pub struct EventEmitter {
    listeners: Vec<(SubscriptionId, EventListener)>,
    next_id: u64,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        listener: impl Fn(&CarouselEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, Arc::new(listener)));
        ctrace!(id = id.0, listeners = self.listeners.len(), "EventEmitter::subscribe");
        id
    }

    /// Revokes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        let removed = self.listeners.len() != before;
        if !removed {
            cwarn!(id = id.0, "EventEmitter::unsubscribe: unknown subscription");
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn emit(&self, event: &CarouselEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
