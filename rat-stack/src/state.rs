//! Reactive shared state.
//!
//! `Entity<T>` wraps a value behind a lock and notifies subscribers on every
//! update. Screens keep their own entities; background tasks clone the
//! handle and mutate through it, then ask the application to redraw.

use std::sync::{Arc, RwLock};
use tokio::sync::watch;

/// A cloneable handle to a piece of shared state.
pub struct Entity<T: ?Sized + Send + Sync> {
    inner: Arc<RwLock<T>>,
    tx: watch::Sender<()>,
}

impl<T: Send + Sync> Entity<T> {
    /// Create a new entity with the given initial value.
    pub fn new(value: T) -> Self {
        let (tx, _) = watch::channel(());
        Self {
            inner: Arc::new(RwLock::new(value)),
            tx,
        }
    }
}

impl<T: ?Sized + Send + Sync> Entity<T> {
    /// Update the inner value using a closure and notify subscribers.
    pub fn update<F, R>(&self, f: F) -> crate::Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.inner.write().map_err(|_| crate::Error::LockPoisoned)?;
        let res = f(&mut *guard);
        drop(guard);
        let _ = self.tx.send(());
        Ok(res)
    }

    /// Read the inner value using a closure.
    pub fn read<F, R>(&self, f: F) -> crate::Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        let guard = self.inner.read().map_err(|_| crate::Error::LockPoisoned)?;
        Ok(f(&*guard))
    }

    /// Subscribe to changes of this entity.
    pub fn subscribe(&self) -> watch::Receiver<()> {
        self.tx.subscribe()
    }
}

impl<T: ?Sized + Send + Sync> Clone for Entity<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            tx: watch::Sender::clone(&self.tx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_is_visible_to_readers() {
        let entity = Entity::new(0u32);
        entity.update(|v| *v += 5).unwrap();
        assert_eq!(entity.read(|v| *v).unwrap(), 5);
    }

    #[test]
    fn clones_share_the_same_value() {
        let a = Entity::new(String::from("one"));
        let b = a.clone();
        b.update(|v| v.push_str(" two")).unwrap();
        assert_eq!(a.read(|v| v.clone()).unwrap(), "one two");
    }

    #[tokio::test]
    async fn subscribers_are_notified_on_update() {
        let entity = Entity::new(0u32);
        let mut rx = entity.subscribe();
        entity.update(|v| *v = 1).unwrap();
        assert!(rx.changed().await.is_ok());
    }
}
