//! Domain layer: the event model and its wire timestamp format.
//!
//! Everything here is storage- and transport-agnostic. The persistence
//! layer maps rows onto [`Event`], and the API layer maps DTOs onto
//! [`NewEvent`].

pub mod event;
pub mod event_id;
pub mod timestamp;

pub use event::{Event, NewEvent};
pub use event_id::EventId;
