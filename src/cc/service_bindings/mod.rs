//! Service bindings module

mod api;
mod models;

pub use models::{NewServiceBinding, ServiceBinding, ServiceBindingEntity, ServiceBindingList};
