//! Catalog facade
//!
//! Wires the use-cases to one shared repository. Built once at startup and
//! shared through the application state.

use std::sync::Arc;

use crate::models::{ChannelWithStream, Country};
use crate::services::iptv_org::{ChannelRepository, DatasetCacheStatus};
use crate::usecases::{
    ChannelFilters, CountryListing, GetAvailableCategoriesUseCase, GetAvailableCountriesUseCase,
    GetChannelsWithStreamsUseCase,
};

pub struct IptvService {
    repository: Arc<dyn ChannelRepository>,
    countries_use_case: GetAvailableCountriesUseCase,
    categories_use_case: GetAvailableCategoriesUseCase,
    channels_use_case: GetChannelsWithStreamsUseCase,
}

impl IptvService {
    pub fn new(repository: Arc<dyn ChannelRepository>) -> Self {
        Self {
            countries_use_case: GetAvailableCountriesUseCase::new(repository.clone()),
            categories_use_case: GetAvailableCategoriesUseCase::new(repository.clone()),
            channels_use_case: GetChannelsWithStreamsUseCase::new(repository.clone()),
            repository,
        }
    }

    /// Countries, popular ones first
    pub async fn get_available_countries(&self) -> Vec<Country> {
        self.countries_use_case.execute().await.countries
    }

    /// Countries with the popular/other partitions kept apart
    pub async fn get_country_listing(&self) -> CountryListing {
        self.countries_use_case.execute().await
    }

    pub async fn get_available_categories(&self) -> Vec<String> {
        self.categories_use_case.execute().await
    }

    /// Channels with a playable stream; `None` applies the default filters
    pub async fn get_channels_with_streams(
        &self,
        filters: Option<ChannelFilters>,
    ) -> Vec<ChannelWithStream> {
        let filters = filters.unwrap_or_default();
        self.channels_use_case.execute(&filters).await.channels
    }

    pub async fn clear_cache(&self) {
        self.repository.clear_cache().await;
    }

    pub async fn cache_status(&self) -> Vec<DatasetCacheStatus> {
        self.repository.cache_status().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::*;
    use std::sync::atomic::Ordering;

    fn service() -> (IptvService, Arc<InMemoryChannelRepository>) {
        let repo = Arc::new(InMemoryChannelRepository::new(
            vec![
                channel("c1", "Canal1", "FR", &["news"]),
                channel("c2", "Canal2", "ES", &["sports"]),
                nsfw(channel("c3", "Canal3", "JP", &["xxx"])),
            ],
            vec![
                stream("c1", "http://x/1"),
                stream("c2", "http://x/2"),
                stream("c3", "http://x/3"),
            ],
            vec![logo("c2", "http://img/2.png")],
        ));
        (IptvService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_countries_passthrough() {
        let (service, _) = service();
        let codes: Vec<String> = service
            .get_available_countries()
            .await
            .into_iter()
            .map(|c| c.code)
            .collect();
        assert_eq!(codes, vec!["ES", "FR"]);

        let listing = service.get_country_listing().await;
        assert_eq!(listing.popular_countries.len(), 1);
        assert_eq!(listing.other_countries.len(), 1);
    }

    #[tokio::test]
    async fn test_categories_passthrough() {
        let (service, _) = service();
        assert_eq!(
            service.get_available_categories().await,
            vec!["news", "sports", "xxx"]
        );
    }

    #[tokio::test]
    async fn test_channels_default_filters() {
        let (service, _) = service();
        let channels = service.get_channels_with_streams(None).await;
        let ids: Vec<&str> = channels.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2"]);
        assert_eq!(channels[1].logo_url.as_deref(), Some("http://img/2.png"));
    }

    #[tokio::test]
    async fn test_channels_with_filters() {
        let (service, _) = service();
        let channels = service
            .get_channels_with_streams(Some(ChannelFilters {
                category: Some("sports".to_string()),
                ..Default::default()
            }))
            .await;
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].id, "c2");
    }

    #[tokio::test]
    async fn test_clear_cache_reaches_repository() {
        let (service, repo) = service();
        service.clear_cache().await;
        assert_eq!(repo.clears.load(Ordering::SeqCst), 1);
    }
}
