use async_trait::async_trait;

use crate::domain::RecordPage;
use crate::error::Result;

/// The seam between the pagination controller and the transport layer.
///
/// One logical call issues one outbound request; retries, caching and
/// in-flight sequencing are outside this contract.
#[async_trait]
pub trait RecordFetcher {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<RecordPage>;
}
