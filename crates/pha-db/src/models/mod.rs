//! Database models - SQLx-compatible structs for PostgreSQL tables

mod session;
mod user;

pub use session::SessionModel;
pub use user::UserModel;
