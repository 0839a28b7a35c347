use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

type NotifyFn = Box<dyn Fn() + Send + Sync>;

/// Handle for installing a change notification into a [`State`].
///
/// Wraps an optional callback that can be installed after construction.
/// Hosts install a callback to learn about writes (to schedule a re-render,
/// update a binding, etc.); the cell works fine with none installed.
#[derive(Default, Clone)]
pub struct NotifyHandle {
    inner: Arc<Mutex<Option<NotifyFn>>>,
}

impl NotifyHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a callback, replacing any previous one.
    pub fn install(&self, callback: impl Fn() + Send + Sync + 'static) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Some(Box::new(callback));
        }
    }

    /// Fire the callback if one is installed.
    pub fn send(&self) {
        if let Ok(guard) = self.inner.lock() {
            if let Some(callback) = guard.as_ref() {
                callback();
            }
        }
    }
}

impl fmt::Debug for NotifyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NotifyHandle")
    }
}

/// Observable state cell with interior mutability.
///
/// Cheap to clone; clones share the same cell. Every write marks the cell
/// dirty and fires the installed change notification, so host-side bindings
/// see updates without polling.
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
    notify: NotifyHandle,
}

impl<T> State<T> {
    /// Create a new state with the given value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
            notify: NotifyHandle::new(),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Set a new value.
    pub fn set(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = value;
            self.dirty.store(true, Ordering::SeqCst);
            self.notify.send();
        }
    }

    /// Update the value using a closure.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
            self.notify.send();
        }
    }

    /// Install a change callback, replacing any previous one.
    pub fn on_change(&self, callback: impl Fn() + Send + Sync + 'static) {
        self.notify.install(callback);
    }

    /// Check if the state has been modified since last check.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            notify: self.notify.clone(),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
