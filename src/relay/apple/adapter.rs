//! Adapter layer: Convert iTunes lookup DTOs to domain models
//!
//! This is the ONLY place where lookup DTOs become a [`MediaIdentity`].

use super::dto;
use crate::model::{MediaIdentity, Provider, ProviderTrackRef};
use crate::relay::domain::ProviderError;

/// Convert a lookup response into the identity of the linked track.
///
/// The response must report exactly one result, and that result must carry
/// a track name. A missing album is fine.
pub fn to_identity(
    response: dto::LookupResponse,
    track_ref: &ProviderTrackRef,
) -> Result<MediaIdentity, ProviderError> {
    if response.result_count != 1 {
        return Err(ProviderError::UnexpectedResultCount(response.result_count));
    }

    let result = response
        .results
        .into_iter()
        .next()
        .ok_or(ProviderError::MissingField("results"))?;

    let track = result
        .track_name
        .ok_or(ProviderError::MissingField("trackName"))?;

    MediaIdentity::new(
        track,
        result.collection_name,
        Provider::AppleMusic,
        track_ref.link.clone(),
    )
    .ok_or(ProviderError::MissingField("trackName"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::apple_track_ref;

    fn make_result(track: Option<&str>, album: Option<&str>) -> dto::LookupResult {
        dto::LookupResult {
            track_name: track.map(String::from),
            collection_name: album.map(String::from),
            ..Default::default()
        }
    }

    fn make_response(results: Vec<dto::LookupResult>) -> dto::LookupResponse {
        dto::LookupResponse {
            result_count: results.len() as u64,
            results,
        }
    }

    #[test]
    fn test_convert_single_result() {
        let track_ref = apple_track_ref();
        let response = make_response(vec![make_result(Some("Alpha"), Some("Beta"))]);

        let identity = to_identity(response, &track_ref).unwrap();

        assert_eq!(identity.track(), "Alpha");
        assert_eq!(identity.album(), Some("Beta"));
        assert_eq!(identity.links().len(), 1);
        assert_eq!(identity.link(Provider::AppleMusic), Some(track_ref.link.as_str()));
    }

    #[test]
    fn test_missing_album_is_tolerated() {
        let response = make_response(vec![make_result(Some("Alpha"), None)]);

        let identity = to_identity(response, &apple_track_ref()).unwrap();

        assert_eq!(identity.album(), None);
    }

    #[test]
    fn test_zero_results_fail() {
        let result = to_identity(make_response(vec![]), &apple_track_ref());
        assert_eq!(result, Err(ProviderError::UnexpectedResultCount(0)));
    }

    #[test]
    fn test_several_results_fail() {
        let response = make_response(vec![
            make_result(Some("Alpha"), Some("Beta")),
            make_result(Some("Alpha"), Some("Gamma")),
        ]);

        let result = to_identity(response, &apple_track_ref());

        assert_eq!(result, Err(ProviderError::UnexpectedResultCount(2)));
    }

    #[test]
    fn test_missing_track_name_fails() {
        let response = make_response(vec![make_result(None, Some("Beta"))]);

        let result = to_identity(response, &apple_track_ref());

        assert_eq!(result, Err(ProviderError::MissingField("trackName")));
    }

    #[test]
    fn test_empty_track_name_fails() {
        let response = make_response(vec![make_result(Some(""), Some("Beta"))]);
        assert!(to_identity(response, &apple_track_ref()).is_err());
    }

    #[test]
    fn test_count_of_one_without_results_fails() {
        let response = dto::LookupResponse {
            result_count: 1,
            results: vec![],
        };

        let result = to_identity(response, &apple_track_ref());

        assert_eq!(result, Err(ProviderError::MissingField("results")));
    }
}
