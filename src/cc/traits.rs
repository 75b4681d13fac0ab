//! Common traits for Cloud Controller resources

use uuid::Uuid;

/// Common trait for named Cloud Controller resources (orgs, spaces, services, ...)
///
/// This trait provides a unified interface for resource identification
/// and name filtering, used by the CLI filters and output.
pub trait CcResource {
    /// Get the resource guid
    fn guid(&self) -> Uuid;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Case-insensitive substring match on the name
    fn name_contains(&self, filter: &str) -> bool {
        self.name()
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }
}
