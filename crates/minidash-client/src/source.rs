//! The seam between the dashboard and wherever its metrics live.

use std::sync::Arc;

use async_trait::async_trait;
use minidash_common::types::MetricsCollection;

use crate::error::FetchError;

/// Something that can produce the current metrics collection.
///
/// The panel calls [`MetricsSource::fetch`] exactly once per mount.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Human-readable location of the source, used in logs and status lines.
    fn endpoint(&self) -> &str;

    /// Retrieves the full metrics collection.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing why no collection was produced.
    async fn fetch(&self) -> Result<MetricsCollection, FetchError>;
}

#[async_trait]
impl<S: MetricsSource + ?Sized> MetricsSource for Arc<S> {
    fn endpoint(&self) -> &str {
        (**self).endpoint()
    }

    async fn fetch(&self) -> Result<MetricsCollection, FetchError> {
        (**self).fetch().await
    }
}
