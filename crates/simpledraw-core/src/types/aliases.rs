//! Type aliases for the shared-state shapes used by the dialog and writers.
//!
//! The save dialog lives on the UI thread and shares its state through
//! `Rc<RefCell<T>>`; anything a background write touches goes through
//! `Arc<Mutex<T>>` instead.

use crate::recording::SaveOutcome;
use parking_lot::Mutex;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

// =============================================================================
// SINGLE-THREADED SHARED TYPES (Rc<RefCell<T>>)
// =============================================================================

/// A reference-counted, interior-mutable wrapper for UI-thread sharing.
///
/// # Example
/// ```rust,ignore
/// let state: Shared<DialogState> = shared(DialogState::default());
/// state.borrow_mut().filename.clear();
/// ```
pub type Shared<T> = Rc<RefCell<T>>;

/// A shared vector for UI-thread collections.
pub type SharedVec<T> = Rc<RefCell<Vec<T>>>;

/// Observers notified with a value, e.g. each regenerated filename preview.
///
/// Entries are `Rc` so dispatch can run over a cloned list.
pub type ListenerList<T> = SharedVec<Rc<dyn Fn(T)>>;

/// One-shot completion callback fired after a successful save.
pub type SaveCallback = Box<dyn FnOnce(SaveOutcome)>;

// =============================================================================
// THREAD-SAFE SHARED TYPES (Arc<Mutex<T>>)
// =============================================================================

/// A thread-safe vector for cross-thread collections.
///
/// Uses `parking_lot::Mutex`, so `lock()` never returns a poison error.
pub type ThreadSafeVec<T> = Arc<Mutex<Vec<T>>>;

#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

#[inline]
pub fn shared_vec<T>() -> SharedVec<T> {
    Rc::new(RefCell::new(Vec::new()))
}

#[inline]
pub fn thread_safe_vec<T>() -> ThreadSafeVec<T> {
    Arc::new(Mutex::new(Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_creation() {
        let value: Shared<i32> = shared(42);
        assert_eq!(*value.borrow(), 42);

        *value.borrow_mut() = 100;
        assert_eq!(*value.borrow(), 100);
    }

    #[test]
    fn test_listener_list() {
        let listeners: ListenerList<&str> = shared_vec();
        let seen: SharedVec<String> = shared_vec();

        let seen_clone = seen.clone();
        listeners
            .borrow_mut()
            .push(Rc::new(move |name| seen_clone.borrow_mut().push(name.to_string())));

        for listener in listeners.borrow().iter() {
            listener("3_P1_Fz");
        }

        assert_eq!(seen.borrow().as_slice(), ["3_P1_Fz".to_string()]);
    }

    #[test]
    fn test_thread_safe_vec() {
        let vec: ThreadSafeVec<String> = thread_safe_vec();
        let clone = vec.clone();
        std::thread::spawn(move || clone.lock().push("from worker".to_string()))
            .join()
            .unwrap();

        assert_eq!(vec.lock().len(), 1);
    }
}
