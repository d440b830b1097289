//! iptv-org Integration
//!
//! The catalog is built from three public JSON datasets published by iptv-org:
//!
//! ```text
//! https://iptv-org.github.io/api/channels.json
//! https://iptv-org.github.io/api/streams.json
//! https://iptv-org.github.io/api/logos.json
//! ```
//!
//! - **Client**: downloads and decodes one dataset
//! - **Types**: wire-format records and their mapping to domain records
//! - **Repository**: per-dataset in-memory cache with fail-to-empty reads

pub mod client;
pub mod repository;
pub mod types;

pub use client::{DatasetClient, DatasetError};
pub use repository::{ChannelRepository, DatasetCacheStatus, IptvOrgChannelRepository};
pub use types::{ApiChannel, ApiLogo, ApiStream, Dataset};
