//! Quota definition API operations

use crate::cc::pagination::Page;
use crate::cc::CcClient;
use crate::config::api;
use crate::error::Result;

use super::models::Quota;

impl CcClient {
    pub(crate) async fn get_quotas_page(&self) -> Result<Page<Quota>> {
        let path = format!("{}/{}", api::V2, api::QUOTA_DEFINITIONS);
        self.fetch_page(&path, "fetch quota definitions").await
    }
}
