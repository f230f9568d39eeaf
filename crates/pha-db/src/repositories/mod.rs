//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in pha-core.

mod error;
mod session;
mod user;

pub use error::{field_from_constraint, map_db_error};
pub use session::PgSessionRepository;
pub use user::PgUserRepository;
