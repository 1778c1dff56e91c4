//! # Keyboard Dispatch
//!
//! Key bindings and the dispatcher that runs them.

pub mod binding;
pub mod dispatcher;

pub use binding::{DispatchContext, KeyBinding};
pub use dispatcher::{default_aliases, KeyDispatcher};
