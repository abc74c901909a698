//! Apple Music as a source provider
//!
//! Recognises `music.apple.com` album-track share links and resolves them to
//! track metadata through the public iTunes lookup endpoint.
//!
//! API docs: https://performance-partners.apple.com/search-api

pub mod dto;
mod adapter;
mod client;
mod parser;
mod resolver;

pub use adapter::to_identity;
pub use client::{DEFAULT_LOOKUP_URL, ItunesClient};
pub use parser::{AppleMusicLinkParser, DEFAULT_LINK_PREFIX};
pub use resolver::AppleMusicResolver;
