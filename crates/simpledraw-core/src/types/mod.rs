//! Type aliases shared by the SimpleDraw crates.
//!
//! - [`aliases`]: `Rc<RefCell<T>>` for UI-thread state, `Arc<Mutex<T>>` for
//!   state touched by background writers, and listener/callback shapes.

pub mod aliases;

pub use aliases::*;
