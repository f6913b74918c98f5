//! tally server library entry.
//!
//! Wires config, the counter store, HTTP handlers, and metrics into an axum
//! application. Consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
