//! HTTP handler functions, one module per aggregate.

pub mod actor;
pub mod movie;
