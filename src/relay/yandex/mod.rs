//! Yandex Music as a target provider
//!
//! Searches the Yandex Music catalog for a resolved identity and, on a
//! confident match, contributes a `https://music.yandex.ru/track/<id>` link.

pub mod dto;
mod adapter;
mod client;
mod matcher;

pub use adapter::to_catalog_tracks;
pub use client::{DEFAULT_API_BASE, YandexMusicClient};
pub use matcher::{DEFAULT_TRACK_LINK_BASE, YandexMusicMatcher};
