//! Route event queue.
//!
//! Browser listeners and the navigator only enqueue; a single consumer
//! ([`run`]) dispatches one event at a time. Dispatching is synchronous, so
//! two dispatches never interleave, while the fetches they start are spawned
//! and may overlap.

use futures::StreamExt;
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use futures::future::LocalBoxFuture;

use crate::browser::Browser;
use crate::loader::{FragmentSource, MountTarget};
use crate::router::Router;

/// Why the dispatcher is being run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEvent {
    /// First dispatch after startup.
    Initial,
    /// Native `hashchange`.
    HashChange,
    /// Native `popstate`.
    PopState,
    /// Navigation the browser reports no event for.
    Programmatic,
}

/// Producer side of the route event queue.
#[derive(Debug, Clone)]
pub struct EventSender(UnboundedSender<RouteEvent>);

impl EventSender {
    pub fn send(&self, event: RouteEvent) {
        if self.0.unbounded_send(event).is_err() {
            log::warn!("route event queue closed, dropping {event:?}");
        }
    }
}

/// Consumer side of the route event queue.
#[derive(Debug)]
pub struct RouteEvents(UnboundedReceiver<RouteEvent>);

impl RouteEvents {
    /// Wait for the next event.
    pub async fn next(&mut self) -> Option<RouteEvent> {
        self.0.next().await
    }

    /// Take a queued event without waiting.
    pub fn try_next(&mut self) -> Option<RouteEvent> {
        self.0.try_recv().ok()
    }
}

/// Create a route event queue.
pub fn channel() -> (EventSender, RouteEvents) {
    let (tx, rx) = unbounded();
    (EventSender(tx), RouteEvents(rx))
}

/// Consume route events for the lifetime of the page.
///
/// Each event is dispatched synchronously and its fragment load handed to
/// `spawn`.
pub async fn run<B, S, M>(
    router: Router<B, S, M>,
    mut events: RouteEvents,
    spawn: impl Fn(LocalBoxFuture<'static, ()>),
) where
    B: Browser + 'static,
    S: FragmentSource + 'static,
    M: MountTarget + 'static,
{
    while let Some(event) = events.next().await {
        let ticket = router.dispatch(event);
        spawn(Box::pin(async move {
            ticket.run().await;
        }));
    }
    log::debug!("route event queue drained");
}
