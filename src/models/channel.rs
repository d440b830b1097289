use serde::{Deserialize, Serialize};

/// A TV channel as listed in the channels dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub alt_names: Vec<String>,
    pub network: Option<String>,
    pub owners: Vec<String>,
    pub country: String,
    pub categories: Vec<String>,
    pub is_nsfw: bool,
    pub launched: Option<String>,
    pub closed: Option<String>,
    pub replaced_by: Option<String>,
    pub website: Option<String>,
}

impl Channel {
    /// Case-insensitive substring match against the name or any alternate name.
    /// `needle` must already be lower-cased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .alt_names
                .iter()
                .any(|alt| alt.to_lowercase().contains(needle))
    }
}

/// A playable stream for a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

/// Logo image for a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    pub channel: String,
    pub url: String,
}

/// Channel joined with its first stream and logo.
/// Built per query, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelWithStream {
    pub id: String,
    pub name: String,
    pub country: String,
    pub categories: Vec<String>,
    pub stream_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    pub logo_url: Option<String>,
    pub flag: String,
}

/// Payload of the `channel-selected` event a presentation layer sends to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSelectedEvent {
    pub url: String,
    pub name: String,
    pub channel: ChannelWithStream,
}

impl ChannelSelectedEvent {
    /// Name of the event carrying this payload
    pub const EVENT_NAME: &'static str = "channel-selected";

    pub fn from_channel(channel: ChannelWithStream) -> Self {
        Self {
            url: channel.stream_url.clone(),
            name: channel.name.clone(),
            channel,
        }
    }
}
