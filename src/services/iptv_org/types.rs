//! iptv-org API Types
//!
//! Wire-format records of the public iptv-org datasets (snake_case keys) and
//! their mapping into domain records.

use serde::{Deserialize, Deserializer};

use crate::models::{Channel, Logo, Stream};

/// The three datasets published by iptv-org
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Channels,
    Streams,
    Logos,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Channels => "channels",
            Dataset::Streams => "streams",
            Dataset::Logos => "logos",
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Channel
// ============================================================================

/// Entry of channels.json
#[derive(Debug, Deserialize, Clone)]
pub struct ApiChannel {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alt_names: Vec<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owners: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_nsfw: bool,
    #[serde(default)]
    pub launched: Option<String>,
    #[serde(default)]
    pub closed: Option<String>,
    #[serde(default)]
    pub replaced_by: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl From<ApiChannel> for Channel {
    fn from(api: ApiChannel) -> Self {
        Self {
            id: api.id,
            name: api.name,
            alt_names: api.alt_names,
            network: api.network,
            owners: api.owners,
            country: api.country,
            categories: api.categories,
            is_nsfw: api.is_nsfw,
            launched: api.launched,
            closed: api.closed,
            replaced_by: api.replaced_by,
            website: api.website,
        }
    }
}

// ============================================================================
// Stream
// ============================================================================

/// Entry of streams.json. Streams not tied to a channel carry `"channel": null`.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiStream {
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub feed: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub referrer: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
}

impl ApiStream {
    /// Domain stream, or `None` when the record has no channel or no url
    pub fn into_stream(self) -> Option<Stream> {
        let channel = self.channel.filter(|c| !c.is_empty())?;
        let url = self.url.filter(|u| !u.is_empty())?;

        Some(Stream {
            channel,
            feed: self.feed,
            title: self.title,
            url,
            referrer: self.referrer,
            user_agent: self.user_agent,
            quality: self.quality,
        })
    }
}

// ============================================================================
// Logo
// ============================================================================

/// Entry of logos.json
#[derive(Debug, Deserialize, Clone)]
pub struct ApiLogo {
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl ApiLogo {
    /// Domain logo, or `None` when the record has no channel or no url
    pub fn into_logo(self) -> Option<Logo> {
        let channel = self.channel.filter(|c| !c.is_empty())?;
        let url = self.url.filter(|u| !u.is_empty())?;
        Some(Logo { channel, url })
    }
}
