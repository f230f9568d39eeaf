//! Domain entities - core business objects

mod session;
mod user;

pub use session::{NewSession, Session};
pub use user::User;
