//! Quota definitions module

mod api;
mod models;

pub use models::{format_limit, Quota, QuotaEntity};
