//! Data shapes exchanged with the remote API and the view layer.
//!
//! DTOs mirror the API's JSON. Form structs hold raw text straight from inputs and
//! validate into the payload types that are actually sent.

pub mod api;
pub mod application;
pub mod outcome;
pub mod pet;
pub mod user;
