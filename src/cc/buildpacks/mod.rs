//! Buildpacks module

mod api;
mod models;

pub use models::{Buildpack, BuildpackEntity};
