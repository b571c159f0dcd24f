//! One-shot effects from view-model logic to the presentation host.
//!
//! An effect is an instruction such as "navigate to R" or "dismiss this
//! sheet". Unlike state it is not re-rendered: it is delivered at most once
//! to whichever observer is attached at the moment of emission, and dropped
//! when nobody is listening.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;

/// Marker trait for effect values.
pub trait Effect: fmt::Debug + Send + 'static {}

/// At-most-once, single-observer effect channel.
///
/// Cloning yields another emitter for the same channel.
pub struct EffectChannel<E: Effect> {
    observer: Arc<Mutex<Option<mpsc::UnboundedSender<E>>>>,
}

impl<E: Effect> Clone for EffectChannel<E> {
    fn clone(&self) -> Self {
        Self {
            observer: Arc::clone(&self.observer),
        }
    }
}

impl<E: Effect> Default for EffectChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Effect> EffectChannel<E> {
    pub fn new() -> Self {
        Self {
            observer: Arc::new(Mutex::new(None)),
        }
    }

    /// Deliver `effect` to the current observer, if any.
    ///
    /// Never blocks. With no observer attached, or one that has gone away,
    /// the effect is dropped.
    pub fn emit(&self, effect: E) {
        let mut slot = self.observer.lock();
        let Some(sender) = slot.as_ref() else {
            tracing::trace!(?effect, "effect dropped (no observer)");
            return;
        };
        if let Err(mpsc::error::SendError(effect)) = sender.send(effect) {
            tracing::trace!(?effect, "effect dropped (observer gone)");
            *slot = None;
        }
    }

    /// Attach a new observer, replacing any previous one.
    ///
    /// The previous receiver stops getting new effects. Nothing emitted
    /// before this call is replayed.
    pub fn attach(&self) -> EffectReceiver<E> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.observer.lock() = Some(tx);
        EffectReceiver { rx }
    }

    /// Detach the current observer. Effects emitted afterwards are dropped.
    pub fn detach(&self) {
        *self.observer.lock() = None;
    }

    pub fn has_observer(&self) -> bool {
        self.observer
            .lock()
            .as_ref()
            .is_some_and(|sender| !sender.is_closed())
    }
}

/// Receiving half held by the presentation host.
///
/// Dropping it detaches the observer.
pub struct EffectReceiver<E> {
    rx: mpsc::UnboundedReceiver<E>,
}

impl<E> EffectReceiver<E> {
    /// Wait for the next effect. Returns `None` once this observer has been
    /// replaced or every emitter is gone.
    pub async fn recv(&mut self) -> Option<E> {
        self.rx.recv().await
    }

    /// Take an already delivered effect without waiting.
    pub fn try_recv(&mut self) -> Option<E> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Ping(u32);

    impl Effect for Ping {}

    #[test]
    fn emit_without_observer_is_dropped() {
        let channel = EffectChannel::new();
        channel.emit(Ping(1));
        let mut rx = channel.attach();
        assert_eq!(rx.try_recv(), None);
    }

    #[test]
    fn attached_observer_receives_exactly_once() {
        let channel = EffectChannel::new();
        let mut rx = channel.attach();
        channel.emit(Ping(7));
        assert_eq!(rx.try_recv(), Some(Ping(7)));
        assert_eq!(rx.try_recv(), None);
    }

    #[test]
    fn new_observer_replaces_old_without_replay() {
        let channel = EffectChannel::new();
        let mut first = channel.attach();
        channel.emit(Ping(1));
        let mut second = channel.attach();
        channel.emit(Ping(2));

        assert_eq!(first.try_recv(), Some(Ping(1)));
        assert_eq!(first.try_recv(), None);
        assert_eq!(second.try_recv(), Some(Ping(2)));
        assert_eq!(second.try_recv(), None);
    }

    #[test]
    fn dropped_receiver_detaches() {
        let channel = EffectChannel::new();
        let rx = channel.attach();
        assert!(channel.has_observer());
        drop(rx);
        assert!(!channel.has_observer());
        channel.emit(Ping(3));
        assert!(!channel.has_observer());
    }

    #[test]
    fn detach_drops_later_effects() {
        let channel = EffectChannel::new();
        let mut rx = channel.attach();
        channel.detach();
        channel.emit(Ping(4));
        assert_eq!(rx.try_recv(), None);
    }

    #[test]
    fn clones_share_the_observer() {
        let channel = EffectChannel::new();
        let emitter = channel.clone();
        let mut rx = channel.attach();
        emitter.emit(Ping(5));
        assert_eq!(rx.try_recv(), Some(Ping(5)));
    }

    #[tokio::test]
    async fn recv_waits_for_effect() {
        let channel = EffectChannel::new();
        let mut rx = channel.attach();
        let emitter = channel.clone();
        tokio::spawn(async move { emitter.emit(Ping(9)) });
        assert_eq!(rx.recv().await, Some(Ping(9)));
    }
}
