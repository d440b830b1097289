//! Catalog endpoints: countries, categories and channels

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::{ChannelWithStream, Country};
use crate::services::formatters::capitalize;
use crate::usecases::ChannelFilters;
use crate::AppState;

/// Query parameters for the channels endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelsQuery {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub search_term: Option<String>,
    /// Negative values clamp to 0
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub exclude_nsfw: Option<bool>,
}

impl ChannelsQuery {
    pub fn into_filters(self, default_limit: usize) -> ChannelFilters {
        let limit = self
            .limit
            .map(|l| usize::try_from(l.max(0)).unwrap_or(usize::MAX))
            .unwrap_or(default_limit);

        ChannelFilters {
            country: self.country,
            category: self.category,
            search_term: self.search_term,
            limit,
            exclude_nsfw: self.exclude_nsfw.unwrap_or(true),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountriesResponse {
    pub countries: Vec<Country>,
    pub popular_countries: Vec<Country>,
    pub other_countries: Vec<Country>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CountryListResponse {
    pub countries: Vec<Country>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryItem {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryItem>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ChannelsResponse {
    pub channels: Vec<ChannelWithStream>,
    pub total: usize,
}

/// GET /api/countries - Countries with channels, popular first
pub async fn get_countries(State(state): State<Arc<AppState>>) -> Json<CountriesResponse> {
    let listing = state.service.get_country_listing().await;

    Json(CountriesResponse {
        total: listing.countries.len(),
        countries: listing.countries,
        popular_countries: listing.popular_countries,
        other_countries: listing.other_countries,
    })
}

/// GET /api/countries/flat - Countries with channels as one list, popular first
pub async fn get_country_list(State(state): State<Arc<AppState>>) -> Json<CountryListResponse> {
    let countries = state.service.get_available_countries().await;

    Json(CountryListResponse {
        total: countries.len(),
        countries,
    })
}

/// GET /api/categories - All category tags
pub async fn get_categories(State(state): State<Arc<AppState>>) -> Json<CategoriesResponse> {
    let categories: Vec<CategoryItem> = state
        .service
        .get_available_categories()
        .await
        .into_iter()
        .map(|id| CategoryItem {
            name: capitalize(&id),
            id,
        })
        .collect();

    Json(CategoriesResponse {
        total: categories.len(),
        categories,
    })
}

/// GET /api/channels - Channels with a playable stream
pub async fn get_channels(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChannelsQuery>,
) -> Json<ChannelsResponse> {
    let filters = query.into_filters(state.config.default_channel_limit);
    tracing::debug!(?filters, "Channel query");

    let channels = state.service.get_channels_with_streams(Some(filters)).await;

    Json(ChannelsResponse {
        total: channels.len(),
        channels,
    })
}
