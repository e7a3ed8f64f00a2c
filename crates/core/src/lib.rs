//! Shared types for the racing service.
//!
//! Holds the request value objects and the error type used by both the
//! repository layer and the HTTP layer. No I/O lives here.

pub mod error;
pub mod racing;
pub mod types;
