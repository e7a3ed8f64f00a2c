//! Request handlers.
//!
//! Handlers translate HTTP input into service requests and map errors via
//! [`AppError`](crate::error::AppError).

pub mod races;
