//! Entity to model mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects
//! (pha-core). Inserts bind entity fields directly.

mod session;
mod user;
