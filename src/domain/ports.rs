use crate::domain::model::Signals;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn pages(&self) -> &[String];
    fn scheme(&self) -> &str;
    fn user_agent(&self) -> &str;
}

/// Per-domain scan capability. An `Err` is recorded against the domain and
/// never aborts the batch.
#[async_trait]
pub trait Scanner: Send + Sync {
    async fn scan(&self, domain: &str) -> Result<Signals>;
}
