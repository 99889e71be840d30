use crate::utils::error::Result;
use async_trait::async_trait;

/// Where module fragments come from.
#[async_trait]
pub trait FragmentSource: Send + Sync {
    /// Returns the markup of `file` (e.g. `opportunities.html`).
    async fn fetch_fragment(&self, file: &str) -> Result<String>;
}
