//! Counter HTTP API.
//!
//! - `POST   /counters/:name` : create (201, 409 on duplicate)
//! - `PUT    /counters/:name` : increment (200, 404 when missing)
//! - `GET    /counters/:name` : read (200, 404 when missing)
//! - `DELETE /counters/:name` : delete (204, always)

pub mod counters;
pub mod error;

pub use error::ApiError;
