//! Metadata resolution for parsed Apple Music links.

use async_trait::async_trait;

use super::{ItunesClient, adapter};
use crate::model::{MediaIdentity, Provider, ProviderTrackRef};
use crate::relay::domain::ProviderError;
use crate::relay::traits::{ItunesLookupApi, MetadataResolver};

/// Resolves Apple Music track refs through the iTunes lookup endpoint
pub struct AppleMusicResolver<A = ItunesClient> {
    api: A,
}

impl<A: ItunesLookupApi> AppleMusicResolver<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: ItunesLookupApi> MetadataResolver for AppleMusicResolver<A> {
    fn provider(&self) -> Provider {
        Provider::AppleMusic
    }

    async fn resolve(&self, track_ref: &ProviderTrackRef) -> Result<MediaIdentity, ProviderError> {
        let response = self.api.lookup(&track_ref.track_id).await?;
        adapter::to_identity(response, track_ref)
    }
}
