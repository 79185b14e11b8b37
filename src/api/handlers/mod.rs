//! REST endpoint handlers organized by resource.

pub mod events;
pub mod system;
