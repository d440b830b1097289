pub mod admin;
pub mod catalog;
pub mod health;

#[cfg(test)]
use crate::{config::Config, services::IptvService, usecases::test_support::InMemoryChannelRepository, AppState};
#[cfg(test)]
use std::sync::Arc;

/// Application state over an in-memory repository, for handler tests
#[cfg(test)]
pub fn test_state_with_repository(
    repository: InMemoryChannelRepository,
) -> (Arc<AppState>, Arc<InMemoryChannelRepository>) {
    let repository = Arc::new(repository);
    let mut config = Config::from_env();
    config.default_channel_limit = 200;
    config.admin_key = "test-admin-key".to_string();

    let state = Arc::new(AppState {
        config,
        service: IptvService::new(repository.clone()),
        start_time: std::time::Instant::now(),
    });
    (state, repository)
}

#[cfg(test)]
pub fn test_state(repository: InMemoryChannelRepository) -> Arc<AppState> {
    test_state_with_repository(repository).0
}
