//! Adapter layer: Convert Yandex Music DTOs to domain models

use super::dto;
use crate::relay::domain::CatalogTrack;

/// Convert a search response into catalog candidates.
///
/// Hits without a title cannot match anything and are dropped; albums
/// without a title are skipped.
pub fn to_catalog_tracks(response: dto::SearchResponse) -> Vec<CatalogTrack> {
    let Some(page) = response.result.tracks else {
        return Vec::new();
    };

    page.results
        .into_iter()
        .filter_map(|track| {
            let Some(title) = track.title else {
                tracing::debug!("Skipping Yandex Music track {} without title", track.id);
                return None;
            };
            Some(CatalogTrack {
                id: track.id,
                title,
                album_titles: track.albums.into_iter().filter_map(|a| a.title).collect(),
            })
        })
        .collect()
}
