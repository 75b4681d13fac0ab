//! Buildpack API operations

use crate::cc::pagination::Page;
use crate::cc::CcClient;
use crate::config::api;
use crate::error::Result;

use super::models::Buildpack;

impl CcClient {
    pub(crate) async fn get_buildpacks_page(&self) -> Result<Page<Buildpack>> {
        let path = format!("{}/{}", api::V2, api::BUILDPACKS);
        self.fetch_page(&path, "fetch buildpacks").await
    }
}
