use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

use crate::models::{is_popular_country, Country};
use crate::services::formatters::{compare_names, country_flag, country_name};
use crate::services::iptv_org::ChannelRepository;

/// Countries with at least one non-NSFW channel, popular ones first
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryListing {
    pub countries: Vec<Country>,
    pub popular_countries: Vec<Country>,
    pub other_countries: Vec<Country>,
}

pub struct GetAvailableCountriesUseCase {
    repository: Arc<dyn ChannelRepository>,
}

impl GetAvailableCountriesUseCase {
    pub fn new(repository: Arc<dyn ChannelRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> CountryListing {
        let channels = self.repository.get_all_channels().await;

        let codes: HashSet<&str> = channels
            .iter()
            .filter(|c| !c.is_nsfw && !c.country.trim().is_empty())
            .map(|c| c.country.as_str())
            .collect();

        let mut all: Vec<Country> = codes
            .into_iter()
            .map(|code| Country {
                code: code.to_string(),
                name: country_name(code),
                flag: country_flag(code),
            })
            .collect();

        // Equal names (GB/UK) fall back to the code
        all.sort_by(|a, b| compare_names(&a.name, &b.name).then_with(|| a.code.cmp(&b.code)));

        let (popular_countries, other_countries): (Vec<Country>, Vec<Country>) =
            all.into_iter().partition(|c| is_popular_country(&c.code));

        let countries = popular_countries
            .iter()
            .chain(other_countries.iter())
            .cloned()
            .collect();

        CountryListing {
            countries,
            popular_countries,
            other_countries,
        }
    }
}
