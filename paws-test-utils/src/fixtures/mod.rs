//! Test fixtures for client data and API responses.
//!
//! - `application` - adoption application records
//! - `gateway` - raw response bodies the REST API sends
//! - `pet` - pet records in the shapes the API serves them
//! - `user` - user profiles and login responses

pub mod application;
pub mod gateway;
pub mod pet;
pub mod user;
