//! Touch dispatch
//!
//! One contact point is sampled per tick, hit tested against the buttons of
//! the active view and debounced per button before the bound transition is
//! applied.

pub mod debounce;
pub mod dispatcher;

pub use debounce::DebounceTable;
pub use dispatcher::TouchDispatcher;
