//! Link relaying - turns a pasted streaming link into a link for another service.
//!
//! # Architecture
//!
//! Same split per provider as everywhere else in the crate:
//! - **Domain models** (`domain.rs`, `crate::model`) - our types
//! - **API DTOs** (`apple/dto.rs`, `yandex/dto.rs`) - exact response shapes
//! - **Adapters** - convert DTOs to domain models
//! - **Clients** - HTTP clients for the provider APIs
//! - **Parser / Resolver / Matcher** - the per-provider pipeline capabilities
//! - **Matching** - the exact-title disambiguation rule
//! - **Service** - orchestration of one inbound message
//!
//! # Usage
//!
//! ```ignore
//! use track_relay::relay::{RelayConfig, RelayService};
//!
//! let service = RelayService::from_config(&RelayConfig::default())?;
//! let reply = service
//!     .handle_text("https://music.apple.com/ru/album/some-album/111?i=222&ls")
//!     .await;
//! ```

pub mod apple;
pub mod domain;
pub mod http;
pub mod matching;
pub mod service;
pub mod traits;
pub mod yandex;

pub use domain::{CatalogTrack, MatchOutcome, ProviderError, RelayError};
pub use service::{APOLOGY, RelayConfig, RelayOutcome, RelayService, RelayStage, SourcePipeline};
