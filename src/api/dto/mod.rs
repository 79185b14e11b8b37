//! Data Transfer Objects for REST request/response serialization.
//!
//! Dates cross the wire as RFC 3339 strings with an explicit offset.

pub mod event_dto;

pub use event_dto::*;
