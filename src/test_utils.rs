//! Test utilities and fixtures for track-relay tests.
//!
//! This module provides common test helpers and fixture factories to reduce
//! boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{sample_identity, catalog_track};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let mut identity = sample_identity();
//!     let hits = vec![catalog_track("999", "Alpha", &["Beta"])];
//!     // ... test logic
//! }
//! ```

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::model::{MediaIdentity, Provider, ProviderTrackRef};
use crate::relay::CatalogTrack;

/// A well-formed Apple Music share link (collection 111, track 222)
pub const APPLE_LINK: &str = "https://music.apple.com/ru/album/some-album/111?i=222&ls";

/// The parsed form of [`APPLE_LINK`]
pub fn apple_track_ref() -> ProviderTrackRef {
    ProviderTrackRef {
        provider: Provider::AppleMusic,
        collection_id: "111".to_string(),
        track_id: "222".to_string(),
        link: APPLE_LINK.to_string(),
    }
}

/// Track "Alpha" from album "Beta", resolved from [`APPLE_LINK`].
///
/// Customize by building a new identity with [`MediaIdentity::new`]:
///
/// ```ignore
/// let single = MediaIdentity::new("Alpha", None, Provider::AppleMusic, APPLE_LINK).unwrap();
/// ```
pub fn sample_identity() -> MediaIdentity {
    MediaIdentity::new(
        "Alpha",
        Some("Beta".to_string()),
        Provider::AppleMusic,
        APPLE_LINK,
    )
    .expect("fixture track title is non-empty")
}

/// Creates a catalog search hit.
pub fn catalog_track(id: &str, title: &str, albums: &[&str]) -> CatalogTrack {
    CatalogTrack {
        id: id.to_string(),
        title: title.to_string(),
        album_titles: albums.iter().map(|a| a.to_string()).collect(),
    }
}

/// Serve a single canned HTTP response on a local port.
///
/// Returns the base URL (`http://127.0.0.1:<port>`). The connection is
/// answered once with `status` (e.g. `"500 Internal Server Error"`) and
/// `body`, then closed.
pub async fn serve_once(status: &str, content_type: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local test listener");
    let addr = listener.local_addr().expect("local test listener address");
    let response = format!(
        "HTTP/1.1 {status}\r\ncontent-type: {content_type}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        // Request bodies are empty; the headers fit in one read
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::traits::LinkParser;
    use crate::relay::apple::AppleMusicLinkParser;

    #[test]
    fn test_apple_track_ref_matches_link() {
        let parsed = AppleMusicLinkParser::default().parse(APPLE_LINK);
        assert_eq!(parsed, Some(apple_track_ref()));
    }

    #[test]
    fn test_sample_identity() {
        let identity = sample_identity();
        assert_eq!(identity.track(), "Alpha");
        assert_eq!(identity.album(), Some("Beta"));
        assert_eq!(identity.link(Provider::AppleMusic), Some(APPLE_LINK));
    }

    #[tokio::test]
    async fn test_serve_once_answers_request() {
        let base = serve_once("200 OK", "text/plain", "hello").await;
        let body = reqwest::get(format!("{base}/anything"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "hello");
    }

    #[test]
    fn test_catalog_track() {
        let track = catalog_track("1", "Alpha", &["Beta", "Gamma"]);
        assert_eq!(track.album_titles.len(), 2);
    }
}
