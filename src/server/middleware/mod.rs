//! Request-scoped helpers around the session.
//!
//! - `session` - Typed access to the values stored in a `tower_sessions::Session`
//! - `auth` - `AuthGuard`, which resolves the requesting user from the session

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
