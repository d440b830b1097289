use std::collections::BTreeSet;
use std::sync::Arc;

use crate::services::iptv_org::ChannelRepository;

/// Distinct category tags across every channel, NSFW ones included
pub struct GetAvailableCategoriesUseCase {
    repository: Arc<dyn ChannelRepository>,
}

impl GetAvailableCategoriesUseCase {
    pub fn new(repository: Arc<dyn ChannelRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Vec<String> {
        let channels = self.repository.get_all_channels().await;

        channels
            .iter()
            .flat_map(|c| c.categories.iter())
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }
}
