use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{ChannelWithStream, Stream};
use crate::services::formatters::country_flag;
use crate::services::iptv_org::ChannelRepository;

/// Result cap applied when a query does not set one
pub const DEFAULT_CHANNEL_LIMIT: usize = 200;

/// Filters for channel queries. Empty strings count as unset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelFilters {
    pub country: Option<String>,
    pub category: Option<String>,
    /// Case-insensitive match against the name and alternate names
    pub search_term: Option<String>,
    pub limit: usize,
    pub exclude_nsfw: bool,
}

impl Default for ChannelFilters {
    fn default() -> Self {
        Self {
            country: None,
            category: None,
            search_term: None,
            limit: DEFAULT_CHANNEL_LIMIT,
            exclude_nsfw: true,
        }
    }
}

/// Matching channels in source order
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChannelPage {
    pub channels: Vec<ChannelWithStream>,
    pub total: usize,
}

pub struct GetChannelsWithStreamsUseCase {
    repository: Arc<dyn ChannelRepository>,
}

impl GetChannelsWithStreamsUseCase {
    pub fn new(repository: Arc<dyn ChannelRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, filters: &ChannelFilters) -> ChannelPage {
        let (channels, streams, logos) = tokio::join!(
            self.repository.get_all_channels(),
            self.repository.get_all_streams(),
            self.repository.get_all_logos(),
        );

        // First playable record per channel id wins
        let mut stream_map: HashMap<&str, &Stream> = HashMap::with_capacity(streams.len());
        for stream in streams.iter().filter(|s| !s.url.is_empty()) {
            stream_map.entry(stream.channel.as_str()).or_insert(stream);
        }

        let mut logo_map: HashMap<&str, &str> = HashMap::with_capacity(logos.len());
        for logo in logos.iter() {
            logo_map
                .entry(logo.channel.as_str())
                .or_insert(logo.url.as_str());
        }

        let country = filters.country.as_deref().filter(|c| !c.is_empty());
        let category = filters.category.as_deref().filter(|c| !c.is_empty());
        let search = filters
            .search_term
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut result: Vec<ChannelWithStream> = Vec::new();

        for channel in channels.iter() {
            if result.len() >= filters.limit {
                break;
            }

            if filters.exclude_nsfw && channel.is_nsfw {
                continue;
            }

            let Some(stream) = stream_map.get(channel.id.as_str()) else {
                continue;
            };

            if country.is_some_and(|c| channel.country != c) {
                continue;
            }

            if category.is_some_and(|c| !channel.categories.iter().any(|cat| cat == c)) {
                continue;
            }

            if let Some(needle) = search.as_deref() {
                if !channel.matches_search(needle) {
                    continue;
                }
            }

            result.push(ChannelWithStream {
                id: channel.id.clone(),
                name: channel.name.clone(),
                country: channel.country.clone(),
                categories: channel.categories.clone(),
                stream_url: stream.url.clone(),
                stream_title: stream.title.clone(),
                quality: stream.quality.clone(),
                logo_url: logo_map.get(channel.id.as_str()).map(|url| url.to_string()),
                flag: country_flag(&channel.country),
            });
        }

        ChannelPage {
            total: result.len(),
            channels: result,
        }
    }
}
