//! In-memory repository and record builders for use-case tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::models::{Channel, Logo, Stream};
use crate::services::iptv_org::ChannelRepository;

#[derive(Default)]
pub struct InMemoryChannelRepository {
    pub channels: Arc<Vec<Channel>>,
    pub streams: Arc<Vec<Stream>>,
    pub logos: Arc<Vec<Logo>>,
    pub clears: AtomicUsize,
}

impl InMemoryChannelRepository {
    pub fn new(channels: Vec<Channel>, streams: Vec<Stream>, logos: Vec<Logo>) -> Self {
        Self {
            channels: Arc::new(channels),
            streams: Arc::new(streams),
            logos: Arc::new(logos),
            clears: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ChannelRepository for InMemoryChannelRepository {
    async fn get_all_channels(&self) -> Arc<Vec<Channel>> {
        self.channels.clone()
    }

    async fn get_all_streams(&self) -> Arc<Vec<Stream>> {
        self.streams.clone()
    }

    async fn get_all_logos(&self) -> Arc<Vec<Logo>> {
        self.logos.clone()
    }

    async fn clear_cache(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn channel(id: &str, name: &str, country: &str, categories: &[&str]) -> Channel {
    Channel {
        id: id.to_string(),
        name: name.to_string(),
        alt_names: vec![],
        network: None,
        owners: vec![],
        country: country.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        is_nsfw: false,
        launched: None,
        closed: None,
        replaced_by: None,
        website: None,
    }
}

pub fn nsfw(mut channel: Channel) -> Channel {
    channel.is_nsfw = true;
    channel
}

pub fn stream(channel: &str, url: &str) -> Stream {
    Stream {
        channel: channel.to_string(),
        feed: None,
        title: None,
        url: url.to_string(),
        referrer: None,
        user_agent: None,
        quality: None,
    }
}

pub fn logo(channel: &str, url: &str) -> Logo {
    Logo {
        channel: channel.to_string(),
        url: url.to_string(),
    }
}
