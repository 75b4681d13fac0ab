//! Users module - user lifecycle and user-centric org/space listings

mod api;
mod models;

pub use models::{CcUser, User, UserEntity};
