//! tally core: counter store, value types, and the shared error surface.
//!
//! This crate owns the counters themselves and knows nothing about HTTP or
//! the async runtime, so the same store can back the server, tests, and any
//! other front end.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `TallyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod store;

pub use counter::Counter;
pub use error::{Result, TallyError};
pub use store::CounterStore;
