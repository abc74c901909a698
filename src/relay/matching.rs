//! Cross-catalog disambiguation.
//!
//! A wrong link is worse than no link, so selection is strict: titles must be
//! equal byte for byte, and exactly one candidate may survive.

use super::domain::CatalogTrack;
use crate::model::MediaIdentity;

/// Result of filtering search hits against a source identity
#[derive(Debug, PartialEq, Eq)]
pub enum Selection<'a> {
    /// Exactly one candidate matched
    Unique(&'a CatalogTrack),
    /// Nothing matched
    Empty,
    /// More than one candidate matched
    Ambiguous(Vec<&'a CatalogTrack>),
}

/// Build the catalog search text: album first when known, then the track.
pub fn build_query(identity: &MediaIdentity) -> String {
    match identity.album() {
        Some(album) => format!("{} {}", album, identity.track()),
        None => identity.track().to_string(),
    }
}

/// Whether a candidate is the same track as the source identity.
///
/// Titles must match exactly. When the source has an album, at least one of
/// the candidate's albums must carry exactly that title.
pub fn is_exact_match(identity: &MediaIdentity, candidate: &CatalogTrack) -> bool {
    if candidate.title != identity.track() {
        return false;
    }

    match identity.album() {
        None => true,
        Some(album) => candidate.album_titles.iter().any(|t| t == album),
    }
}

/// Pick at most one candidate from `candidates`
pub fn select_match<'a>(identity: &MediaIdentity, candidates: &'a [CatalogTrack]) -> Selection<'a> {
    let mut matching: Vec<&CatalogTrack> = candidates
        .iter()
        .filter(|c| is_exact_match(identity, c))
        .collect();

    match matching.len() {
        0 => Selection::Empty,
        1 => Selection::Unique(matching.remove(0)),
        _ => Selection::Ambiguous(matching),
    }
}
