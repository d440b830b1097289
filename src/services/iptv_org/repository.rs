//! Channel repository backed by the iptv-org datasets
//!
//! Each dataset is downloaded on first read and kept in memory until
//! [`ChannelRepository::clear_cache`] is called. A failed download is logged
//! and read as an empty sequence; it is not cached, so the next read retries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use super::client::{DatasetClient, DatasetError};
use super::types::{ApiLogo, ApiStream, Dataset};
use crate::models::{Channel, Logo, Stream};
use crate::services::metrics;

/// Read access to the three catalog datasets.
///
/// Reads never fail: an unavailable dataset is an empty sequence.
#[async_trait]
pub trait ChannelRepository: Send + Sync {
    async fn get_all_channels(&self) -> Arc<Vec<Channel>>;

    async fn get_all_streams(&self) -> Arc<Vec<Stream>>;

    async fn get_all_logos(&self) -> Arc<Vec<Logo>>;

    /// Drop every cached dataset
    async fn clear_cache(&self);

    /// Per-dataset cache state, for health reporting
    async fn cache_status(&self) -> Vec<DatasetCacheStatus> {
        Vec::new()
    }
}

/// Cache state of one dataset
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetCacheStatus {
    pub dataset: &'static str,
    pub cached: bool,
    /// A download is in flight
    pub loading: bool,
    pub records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
}

struct CacheEntry<T> {
    items: Arc<Vec<T>>,
    fetched_at: DateTime<Utc>,
}

/// One dataset slot. The lock is held across the download so concurrent
/// first readers wait for a single fetch.
///
/// `loading` and `summary` mirror the slot outside the async lock, so status
/// reads never contend with readers that are only hitting the cache.
struct CachedDataset<T> {
    dataset: Dataset,
    slot: Mutex<Option<CacheEntry<T>>>,
    loading: AtomicBool,
    summary: std::sync::Mutex<Option<(usize, DateTime<Utc>)>>,
}

impl<T> CachedDataset<T> {
    fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            slot: Mutex::new(None),
            loading: AtomicBool::new(false),
            summary: std::sync::Mutex::new(None),
        }
    }

    fn set_summary(&self, summary: Option<(usize, DateTime<Utc>)>) {
        *self.summary.lock().unwrap_or_else(|e| e.into_inner()) = summary;
    }

    async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Arc<Vec<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, DatasetError>>,
    {
        let mut slot = self.slot.lock().await;

        if let Some(entry) = slot.as_ref() {
            debug!("Cache hit for {} ({} records)", self.dataset, entry.items.len());
            metrics::record_cache_hit(self.dataset);
            return entry.items.clone();
        }

        self.loading.store(true, Ordering::SeqCst);
        let result = fetch().await;
        self.loading.store(false, Ordering::SeqCst);

        match result {
            Ok(items) => {
                info!("Fetched {} dataset: {} records", self.dataset, items.len());
                metrics::record_fetch(self.dataset, true);

                let items = Arc::new(items);
                let fetched_at = Utc::now();
                self.set_summary(Some((items.len(), fetched_at)));
                *slot = Some(CacheEntry {
                    items: items.clone(),
                    fetched_at,
                });
                items
            }
            Err(e) => {
                error!("Error fetching {}: {}", self.dataset, e);
                metrics::record_fetch(self.dataset, false);
                Arc::new(Vec::new())
            }
        }
    }

    async fn clear(&self) {
        let mut slot = self.slot.lock().await;
        *slot = None;
        self.set_summary(None);
    }

    fn status(&self) -> DatasetCacheStatus {
        let summary = *self.summary.lock().unwrap_or_else(|e| e.into_inner());

        DatasetCacheStatus {
            dataset: self.dataset.as_str(),
            cached: summary.is_some(),
            loading: self.loading.load(Ordering::SeqCst),
            records: summary.map(|(records, _)| records).unwrap_or(0),
            fetched_at: summary.map(|(_, fetched_at)| fetched_at),
        }
    }
}

/// Repository reading the iptv-org datasets over HTTP
pub struct IptvOrgChannelRepository {
    client: DatasetClient,
    channels: CachedDataset<Channel>,
    streams: CachedDataset<Stream>,
    logos: CachedDataset<Logo>,
}

impl IptvOrgChannelRepository {
    pub fn new(client: DatasetClient) -> Self {
        Self {
            client,
            channels: CachedDataset::new(Dataset::Channels),
            streams: CachedDataset::new(Dataset::Streams),
            logos: CachedDataset::new(Dataset::Logos),
        }
    }
}

#[async_trait]
impl ChannelRepository for IptvOrgChannelRepository {
    async fn get_all_channels(&self) -> Arc<Vec<Channel>> {
        self.channels
            .get_or_fetch(|| async {
                self.client
                    .fetch_channels()
                    .await
                    .map(|records| records.into_iter().map(Channel::from).collect::<Vec<_>>())
            })
            .await
    }

    async fn get_all_streams(&self) -> Arc<Vec<Stream>> {
        self.streams
            .get_or_fetch(|| async {
                self.client
                    .fetch_streams()
                    .await
                    .map(|records| {
                        records
                            .into_iter()
                            .filter_map(ApiStream::into_stream)
                            .collect::<Vec<_>>()
                    })
            })
            .await
    }

    async fn get_all_logos(&self) -> Arc<Vec<Logo>> {
        self.logos
            .get_or_fetch(|| async {
                self.client
                    .fetch_logos()
                    .await
                    .map(|records| {
                        records
                            .into_iter()
                            .filter_map(ApiLogo::into_logo)
                            .collect::<Vec<_>>()
                    })
            })
            .await
    }

    async fn clear_cache(&self) {
        self.channels.clear().await;
        self.streams.clear().await;
        self.logos.clear().await;
        info!("Dataset cache cleared");
    }

    async fn cache_status(&self) -> Vec<DatasetCacheStatus> {
        vec![
            self.channels.status(),
            self.streams.status(),
            self.logos.status(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatasetEndpoints;
    use axum::{extract::State, http::StatusCode, routing::get, Router};
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    struct Hits {
        channels: AtomicUsize,
        streams: AtomicUsize,
        logos: AtomicUsize,
    }

    async fn channels_handler(State(hits): State<Arc<Hits>>) -> (StatusCode, String) {
        hits.channels.fetch_add(1, Ordering::SeqCst);
        let body = r#"[
            {"id": "c1", "name": "Canal1", "alt_names": [], "network": null, "owners": [],
             "country": "ES", "categories": ["news"], "is_nsfw": false, "launched": null,
             "closed": null, "replaced_by": null, "website": null},
            {"id": "c2", "name": "Canal2", "alt_names": ["Dos"], "network": null, "owners": [],
             "country": "MX", "categories": [], "is_nsfw": true, "launched": null,
             "closed": null, "replaced_by": null, "website": null}
        ]"#;
        (StatusCode::OK, body.to_string())
    }

    async fn streams_handler(State(hits): State<Arc<Hits>>) -> (StatusCode, String) {
        hits.streams.fetch_add(1, Ordering::SeqCst);
        (StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string())
    }

    async fn logos_handler(State(hits): State<Arc<Hits>>) -> (StatusCode, String) {
        hits.logos.fetch_add(1, Ordering::SeqCst);
        (StatusCode::OK, "{ not json".to_string())
    }

    async fn mixed_streams_handler(State(hits): State<Arc<Hits>>) -> (StatusCode, String) {
        hits.streams.fetch_add(1, Ordering::SeqCst);
        let body = r#"[
            {"channel": "c1", "feed": null, "title": "Canal1 HD", "url": "http://x/1.m3u8",
             "referrer": null, "user_agent": null, "quality": "720p"},
            {"channel": null, "feed": null, "title": "Sin canal", "url": "http://x/orphan.m3u8",
             "referrer": null, "user_agent": null, "quality": null},
            {"channel": "c2", "feed": null, "title": null, "url": "http://x/2.m3u8",
             "referrer": null, "user_agent": null, "quality": null}
        ]"#;
        (StatusCode::OK, body.to_string())
    }

    /// Serve fake datasets on an ephemeral port: channels succeed,
    /// streams return 500 and logos return a malformed body.
    async fn spawn_datasets() -> (DatasetEndpoints, Arc<Hits>) {
        let hits = Arc::new(Hits::default());
        let app = Router::new()
            .route("/channels.json", get(channels_handler))
            .route("/streams.json", get(streams_handler))
            .route("/logos.json", get(logos_handler))
            .with_state(hits.clone());
        serve(app, hits).await
    }

    /// Like [`spawn_datasets`], but streams.json holds a record with a null channel
    async fn spawn_datasets_with_orphan_stream() -> (DatasetEndpoints, Arc<Hits>) {
        let hits = Arc::new(Hits::default());
        let app = Router::new()
            .route("/channels.json", get(channels_handler))
            .route("/streams.json", get(mixed_streams_handler))
            .route("/logos.json", get(logos_handler))
            .with_state(hits.clone());
        serve(app, hits).await
    }

    async fn serve(app: Router, hits: Arc<Hits>) -> (DatasetEndpoints, Arc<Hits>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let endpoints = DatasetEndpoints {
            channels: format!("http://{}/channels.json", addr),
            streams: format!("http://{}/streams.json", addr),
            logos: format!("http://{}/logos.json", addr),
        };
        (endpoints, hits)
    }

    fn repository(endpoints: DatasetEndpoints) -> IptvOrgChannelRepository {
        IptvOrgChannelRepository::new(DatasetClient::new(endpoints, "test", 5_000).unwrap())
    }

    #[tokio::test]
    async fn test_channels_fetched_once_and_cached() {
        let (endpoints, hits) = spawn_datasets().await;
        let repo = repository(endpoints);

        let first = repo.get_all_channels().await;
        let second = repo.get_all_channels().await;

        assert_eq!(first.len(), 2);
        assert_eq!(first[0].id, "c1");
        assert_eq!(first[1].alt_names, vec!["Dos"]);
        assert!(first[1].is_nsfw);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(hits.channels.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_reads_share_one_fetch() {
        let (endpoints, hits) = spawn_datasets().await;
        let repo = repository(endpoints);

        let (a, b, c) = tokio::join!(
            repo.get_all_channels(),
            repo.get_all_channels(),
            repo.get_all_channels()
        );

        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 2);
        assert_eq!(c.len(), 2);
        assert_eq!(hits.channels.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_http_error_reads_as_empty_and_is_not_cached() {
        let (endpoints, hits) = spawn_datasets().await;
        let repo = repository(endpoints);

        assert!(repo.get_all_streams().await.is_empty());
        assert!(repo.get_all_streams().await.is_empty());
        assert_eq!(hits.streams.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_malformed_body_reads_as_empty() {
        let (endpoints, hits) = spawn_datasets().await;
        let repo = repository(endpoints);

        assert!(repo.get_all_logos().await.is_empty());
        assert_eq!(hits.logos.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_reads_as_empty() {
        let (mut endpoints, _hits) = spawn_datasets().await;
        endpoints.channels = "http://127.0.0.1:9/channels.json".to_string();
        let repo = repository(endpoints);

        assert!(repo.get_all_channels().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_cache_forces_refetch() {
        let (endpoints, hits) = spawn_datasets().await;
        let repo = repository(endpoints);

        repo.get_all_channels().await;
        repo.clear_cache().await;
        repo.get_all_channels().await;

        assert_eq!(hits.channels.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_cache_status_reports_loaded_datasets() {
        let (endpoints, _hits) = spawn_datasets().await;
        let repo = repository(endpoints);

        repo.get_all_channels().await;
        repo.get_all_streams().await;

        let status = repo.cache_status().await;
        assert_eq!(status.len(), 3);
        assert_eq!(status[0].dataset, "channels");
        assert!(status[0].cached);
        assert_eq!(status[0].records, 2);
        assert!(status[0].fetched_at.is_some());
        assert!(!status[1].cached);
        assert!(!status[2].cached);
    }

    #[tokio::test]
    async fn test_cache_status_while_slot_is_held_reports_cached() {
        let (endpoints, _hits) = spawn_datasets().await;
        let repo = repository(endpoints);
        repo.get_all_channels().await;

        // A reader hitting the cache holds the slot lock
        let _guard = repo.channels.slot.lock().await;
        let status = repo.cache_status().await;

        assert!(status[0].cached);
        assert!(!status[0].loading);
        assert_eq!(status[0].records, 2);
        assert!(status[0].fetched_at.is_some());
    }

    #[tokio::test]
    async fn test_cache_status_reset_by_clear() {
        let (endpoints, _hits) = spawn_datasets().await;
        let repo = repository(endpoints);
        repo.get_all_channels().await;
        repo.clear_cache().await;

        let status = repo.cache_status().await;
        assert!(!status[0].cached);
        assert_eq!(status[0].records, 0);
        assert!(status[0].fetched_at.is_none());
    }

    #[tokio::test]
    async fn test_null_channel_stream_does_not_empty_dataset() {
        let (endpoints, hits) = spawn_datasets_with_orphan_stream().await;
        let repo = repository(endpoints);

        let streams = repo.get_all_streams().await;
        let channels: Vec<&str> = streams.iter().map(|s| s.channel.as_str()).collect();
        assert_eq!(channels, vec!["c1", "c2"]);
        assert_eq!(streams[0].quality.as_deref(), Some("720p"));

        // Decoded successfully, so it is cached
        repo.get_all_streams().await;
        assert_eq!(hits.streams.load(Ordering::SeqCst), 1);
    }
}
